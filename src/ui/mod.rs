//! Terminal output components.
//!
//! This module provides:
//! - [`UserInterface`] trait for output abstraction
//! - [`TerminalUI`] writing results to stdout and errors to stderr
//! - [`MockUI`] capturing output for tests
//! - [`Table`] for elastic tab-stop layouts
//!
//! # Example
//!
//! ```
//! use faas_store::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.output("\nNAME SOURCE DESCRIPTION\n\n").unwrap();
//! assert_eq!(ui.outputs().len(), 1);
//! ```

pub mod mock;
pub mod table;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use table::Table;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, StoreTheme};

use crate::error::Result;

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Write command output verbatim to the output stream.
    fn output(&mut self, text: &str) -> Result<()>;

    /// Display an error message on the error stream.
    fn error(&mut self, msg: &str);
}
