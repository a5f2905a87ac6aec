//! Synchronization settings
//!
//! Reconciliation is opt-in: the handler only ever runs in
//! [`SyncMode::CodeFirst`]. The remaining settings tune where new
//! schemas are attached and which icon/thumbnail fallbacks extraction
//! uses.

use crate::error::SettingsError;
use modelsync_model::ExtractDefaults;
use modelsync_store::ParentRef;
use serde::{Deserialize, Serialize};

/// Whether declared models drive the persisted schemas
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncMode {
    /// Reconciliation never runs
    #[default]
    Disabled,
    /// Declared models are the source of truth for their owned fields
    CodeFirst,
}

/// Runtime settings for the synchronization handler
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncSettings {
    /// Operating mode; `disabled` unless configured otherwise
    pub mode: SyncMode,

    /// Where newly created schemas are attached when the model is not
    /// allowed at root
    pub default_parent: ParentRef,

    /// Override for the system default icon fallback
    pub default_icon: Option<String>,

    /// Override for the system default thumbnail fallback
    pub default_thumbnail: Option<String>,
}

impl SyncSettings {
    /// Settings with code-first mode enabled and everything else default
    #[must_use]
    pub fn code_first() -> Self {
        Self {
            mode: SyncMode::CodeFirst,
            ..Self::default()
        }
    }

    /// True when reconciliation may run at all
    #[inline]
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.mode == SyncMode::CodeFirst
    }

    /// The extraction fallbacks these settings resolve to
    #[must_use]
    pub fn extract_defaults(&self) -> ExtractDefaults {
        let mut defaults = ExtractDefaults::default();
        if let Some(icon) = &self.default_icon {
            defaults.icon = icon.clone();
        }
        if let Some(thumbnail) = &self.default_thumbnail {
            defaults.thumbnail = thumbnail.clone();
        }
        defaults
    }

    /// Validate field values
    ///
    /// # Errors
    /// `SettingsError::InvalidField` when an override is present but
    /// blank.
    pub fn validate(&self) -> Result<(), SettingsError> {
        let overrides = [
            ("default_icon", &self.default_icon),
            ("default_thumbnail", &self.default_thumbnail),
        ];
        for (field, value) in overrides {
            if let Some(value) = value {
                if value.trim().is_empty() {
                    return Err(SettingsError::invalid_field(
                        field,
                        "override is empty or whitespace",
                    ));
                }
            }
        }
        Ok(())
    }

    /// Parse and validate settings from a TOML document
    ///
    /// # Errors
    /// `SettingsError::Parse` on malformed TOML, or any `validate`
    /// failure.
    pub fn from_toml(text: &str) -> Result<Self, SettingsError> {
        let settings: Self = toml::from_str(text)?;
        settings.validate()?;
        Ok(settings)
    }
}
