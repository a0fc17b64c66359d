//! Template store list command implementation.
//!
//! The `faas-store template store list` command fetches the template store,
//! then prints it as a table.

use crate::config::StoreListConfig;
use crate::error::{FaasError, Result};
use crate::store::{format_templates_output, StoreFetcher};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The template store list command implementation.
pub struct StoreListCommand {
    config: StoreListConfig,
}

impl StoreListCommand {
    /// Create a new list command.
    pub fn new(config: StoreListConfig) -> Self {
        Self { config }
    }

    /// Get the resolved settings.
    pub fn config(&self) -> &StoreListConfig {
        &self.config
    }

    /// Run the list pipeline with a caller-supplied fetcher.
    pub fn execute_with(
        &self,
        fetcher: &StoreFetcher,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        let templates = fetcher
            .fetch_templates(&self.config.store_url, &self.config.configured_url)
            .map_err(FaasError::TemplatesInfo)?;

        let mut output =
            format_templates_output(&templates, self.config.verbose, &self.config.platform);
        if !output.ends_with('\n') {
            output.push('\n');
        }

        ui.output(&output)?;
        Ok(CommandResult::success())
    }
}

impl Command for StoreListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let fetcher = StoreFetcher::new().map_err(FaasError::TemplatesInfo)?;
        self.execute_with(&fetcher, ui)
    }
}
