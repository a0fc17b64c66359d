//! Terminal UI.

use console::Term;
use std::io::Write;

use crate::error::Result;

use super::{should_use_colors, StoreTheme, UserInterface};

/// Terminal UI: command output on stdout, errors on stderr.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: StoreTheme,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(colors: bool) -> Self {
        let theme = if colors {
            StoreTheme::new()
        } else {
            StoreTheme::plain()
        };

        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output(&mut self, text: &str) -> Result<()> {
        self.out.write_all(text.as_bytes())?;
        self.out.flush()?;
        Ok(())
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }
}

/// Create the UI for this process, colored unless disabled or not a TTY.
pub fn create_ui(no_color: bool) -> Box<dyn UserInterface> {
    Box::new(TerminalUI::new(!no_color && should_use_colors()))
}
