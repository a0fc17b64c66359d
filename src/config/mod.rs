//! Configuration for the template store commands.
//!
//! Settings come from three layers, highest priority first:
//! 1. Command-line flags (`--url`)
//! 2. The `OPENFAAS_TEMPLATE_STORE_URL` environment variable
//! 3. Compiled-in defaults
//!
//! # Example
//!
//! ```
//! use faas_store::config::{resolve_store_url, DEFAULT_TEMPLATES_STORE};
//!
//! let url = resolve_store_url("", "", DEFAULT_TEMPLATES_STORE);
//! assert_eq!(url, DEFAULT_TEMPLATES_STORE);
//! ```

pub mod store;

pub use store::{resolve_store_url, StoreListConfig};

/// URL of the official template store.
pub const DEFAULT_TEMPLATES_STORE: &str =
    "https://raw.githubusercontent.com/openfaas/store/master/templates.json";

/// Environment variable overriding the default store location.
pub const TEMPLATE_STORE_URL_ENV: &str = "OPENFAAS_TEMPLATE_STORE_URL";

/// Sentinel `--platform` value meaning "do not filter".
pub const ALL_PLATFORMS: &str = "allPlatforms";
