//! The remote template store.
//!
//! The store is a single JSON document listing every available function
//! template. Listing it is a straight pipeline:
//!
//! 1. [`StoreFetcher`] performs one bounded GET against the store URL
//! 2. [`decode_templates`] turns the body into [`TemplateInfo`] records
//! 3. [`format_templates_output`] filters by platform and lays out the table
//!
//! # Example
//!
//! ```
//! use faas_store::config::ALL_PLATFORMS;
//! use faas_store::store::{decode_templates, format_templates_output};
//!
//! let body = br#"[{"template": "python3-flask", "source": "openfaas", "description": "Flask"}]"#;
//! let templates = decode_templates(body).unwrap();
//! let table = format_templates_output(&templates, false, ALL_PLATFORMS);
//! assert!(table.contains("python3-flask"));
//! ```

pub mod fetch;
pub mod format;
pub mod platform;
pub mod template;

pub use fetch::{StoreFetcher, DEFAULT_TIMEOUT};
pub use format::format_templates_output;
pub use platform::{check_existing_platform, AVAILABLE_PLATFORMS};
pub use template::{decode_templates, TemplateInfo};
