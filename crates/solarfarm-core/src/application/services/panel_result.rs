//! Outcome of a panel service operation.

use crate::domain::{Panel, PanelViolation};

/// Success flag plus the ordered messages explaining a failure.
///
/// A fresh result is built for every service call. It is successful exactly
/// when no message has been recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PanelResult {
    messages: Vec<String>,
    panel: Option<Panel>,
}

impl PanelResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// A successful result carrying the persisted panel.
    pub fn success(panel: Panel) -> Self {
        Self {
            messages: Vec::new(),
            panel: Some(panel),
        }
    }

    /// A failed result with one message per violation, in order.
    pub fn failure(violations: impl IntoIterator<Item = PanelViolation>) -> Self {
        let mut result = Self::new();
        for violation in violations {
            result.add_violation(violation);
        }
        result
    }

    pub fn is_success(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn add_message(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    pub fn add_violation(&mut self, violation: PanelViolation) {
        self.add_message(violation.to_string());
    }

    /// The panel the operation stored, if it succeeded.
    pub fn panel(&self) -> Option<&Panel> {
        self.panel.as_ref()
    }
}
