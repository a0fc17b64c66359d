//! faas-store - Browse OpenFaaS function templates.
//!
//! faas-store fetches a template store (a JSON document listing function
//! templates) and prints it as an aligned table, optionally filtered to one
//! target platform.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Store URL resolution and command settings
//! - [`error`] - Error types and result aliases
//! - [`store`] - Fetching, decoding, and formatting the template store
//! - [`ui`] - Terminal output and tables
//!
//! # Example
//!
//! ```
//! use faas_store::store::{decode_templates, format_templates_output};
//!
//! let body = br#"[
//!     {"template": "go", "platform": "x86_64", "source": "openfaas", "description": "Go"},
//!     {"template": "go-armhf", "platform": "armhf", "source": "openfaas", "description": "Go"}
//! ]"#;
//! let templates = decode_templates(body).unwrap();
//!
//! let table = format_templates_output(&templates, false, "armhf");
//! assert!(table.contains("go-armhf"));
//! assert!(!table.contains("x86_64"));
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod store;
pub mod ui;

pub use error::{FaasError, Result, StoreError};
