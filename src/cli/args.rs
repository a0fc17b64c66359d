//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::config::ALL_PLATFORMS;

/// faas-store - Browse OpenFaaS function templates.
#[derive(Debug, Parser)]
#[command(name = "faas-store")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Work with function templates
    Template(TemplateArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `template` command group.
#[derive(Debug, Clone, clap::Args)]
pub struct TemplateArgs {
    #[command(subcommand)]
    pub command: TemplateCommands,
}

/// Subcommands of `template`.
#[derive(Debug, Clone, Subcommand)]
pub enum TemplateCommands {
    /// Browse template stores
    Store(StoreArgs),
}

/// Arguments for the `template store` command group.
#[derive(Debug, Clone, clap::Args)]
pub struct StoreArgs {
    #[command(subcommand)]
    pub command: StoreCommands,
}

/// Subcommands of `template store`.
#[derive(Debug, Clone, Subcommand)]
pub enum StoreCommands {
    /// List templates from OpenFaaS organizations
    #[command(
        visible_alias = "ls",
        long_about = "List templates from the official store or from a custom URL. \
                      Set the environment variable OPENFAAS_TEMPLATE_STORE_URL to change \
                      the default store location.",
        after_help = "Examples:\n  \
                      faas-store template store list\n  \
                      faas-store template store ls\n  \
                      faas-store template store ls --url=https://raw.githubusercontent.com/openfaas/store/master/templates.json\n  \
                      faas-store template store ls --verbose\n  \
                      faas-store template store list --platform arm64"
    )]
    List(StoreListArgs),
}

/// Arguments for the `template store list` command.
#[derive(Debug, Clone, clap::Args)]
pub struct StoreListArgs {
    /// Shows additional language and platform
    #[arg(short, long)]
    pub verbose: bool,

    /// Use as alternative store for templates
    /// [default: https://raw.githubusercontent.com/openfaas/store/master/templates.json]
    #[arg(short, long, value_name = "URL")]
    pub url: Option<String>,

    /// Only list templates built for this platform (armhf, arm64, x86_64)
    #[arg(short, long, default_value = ALL_PLATFORMS)]
    pub platform: String,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn list_args(argv: &[&str]) -> StoreListArgs {
        let cli = Cli::parse_from(argv.iter().copied());
        match cli.command {
            Commands::Template(TemplateArgs {
                command:
                    TemplateCommands::Store(StoreArgs {
                        command: StoreCommands::List(args),
                    }),
            }) => args,
            other => panic!("Expected template store list, got {other:?}"),
        }
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn list_defaults() {
        let args = list_args(&["faas-store", "template", "store", "list"]);
        assert!(!args.verbose);
        assert_eq!(args.url, None);
        assert_eq!(args.platform, ALL_PLATFORMS);
    }

    #[test]
    fn ls_alias_parses() {
        let args = list_args(&["faas-store", "template", "store", "ls", "-v"]);
        assert!(args.verbose);
    }

    #[test]
    fn short_flags_parse() {
        let args = list_args(&[
            "faas-store",
            "template",
            "store",
            "list",
            "-u",
            "https://example.com/templates.json",
            "-p",
            "arm64",
        ]);
        assert_eq!(args.url.as_deref(), Some("https://example.com/templates.json"));
        assert_eq!(args.platform, "arm64");
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "faas-store",
            "template",
            "store",
            "ls",
            "--debug",
            "--no-color",
        ]);
        assert!(cli.debug);
        assert!(cli.no_color);
    }
}
