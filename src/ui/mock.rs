//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion.
//!
//! # Example
//!
//! ```
//! use faas_store::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.output("table").unwrap();
//! ui.error("boom");
//!
//! assert_eq!(ui.outputs(), ["table".to_string()]);
//! assert!(ui.errors().contains(&"boom".to_string()));
//! ```

use crate::error::Result;

use super::UserInterface;

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    outputs: Vec<String>,
    errors: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get every chunk written with `output`, in order.
    pub fn outputs(&self) -> &[String] {
        &self.outputs
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Everything written to the output stream, concatenated.
    pub fn stdout(&self) -> String {
        self.outputs.concat()
    }
}

impl UserInterface for MockUI {
    fn output(&mut self, text: &str) -> Result<()> {
        self.outputs.push(text.to_string());
        Ok(())
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }
}
