//! Per-run processing log.

/// Ordered record of the steps taken during one analysis run.
///
/// Each entry is also forwarded to the `log` facade at info level, so a
/// configured logger sees the same trail that ends up in the report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessingLog {
    entries: Vec<String>,
}

impl ProcessingLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a step.
    pub fn record(&mut self, message: impl Into<String>) {
        let message = message.into();
        log::info!("{}", message);
        self.entries.push(message);
    }

    /// Entries recorded so far.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consume the log, returning its entries.
    pub fn into_entries(self) -> Vec<String> {
        self.entries
    }
}
