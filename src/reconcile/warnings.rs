//! Shopper-facing warnings
//!
//! Reconciliation never prints. It hands warnings to a sink and the
//! caller decides what a warning looks like on its surface.

/// Receives shopper-facing warnings raised during a pass
pub trait WarningSink {
    fn warn(&mut self, message: &str);
}

/// A sink that simply keeps every warning in order
#[derive(Debug, Default)]
pub struct CollectedWarnings {
    messages: Vec<String>,
}

impl CollectedWarnings {
    pub fn new() -> Self {
        Self::default()
    }

    /// The collected warnings, oldest first
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }
}

impl WarningSink for CollectedWarnings {
    fn warn(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}
