//! Log of paths holding generated exact entries.
//!
//! Write-only until flushed. Not a live index: a recorded path may since
//! have been overwritten by an authoritative route, which the flush skips.

/// Paths cached since the last prefix change.
#[derive(Debug, Default)]
pub struct CacheLedger {
    paths: Vec<String>,
}

impl CacheLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, path: &str) {
        self.paths.push(path.to_string());
    }

    /// Take every recorded path, leaving the ledger empty.
    pub fn drain(&mut self) -> std::vec::Drain<'_, String> {
        self.paths.drain(..)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}
