//! Writer election seam
//!
//! In a multi-instance deployment exactly one process may write to the
//! schema store. The election mechanism itself lives outside this
//! system; the reconciler only asks the question, at the start of every
//! pass and again before each write.

/// Query whether this process instance is the elected schema writer
pub trait WriterElection: Send + Sync {
    /// True while this instance holds the election
    fn is_writer(&self) -> bool;
}

/// Election for single-process deployments: always the writer
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysWriter;

impl WriterElection for AlwaysWriter {
    #[inline]
    fn is_writer(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn always_writer_holds() {
        assert!(AlwaysWriter.is_writer());
    }
}
