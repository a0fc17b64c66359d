//! Template store record schema.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::StoreError;

/// One entry in the template store.
///
/// Missing or `null` fields decode as empty strings; unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateInfo {
    /// Template name, as passed to `faas-cli new --lang`
    #[serde(rename = "template", default, deserialize_with = "null_as_empty")]
    pub name: String,

    /// Target architecture (armhf, arm64, x86_64)
    #[serde(default, deserialize_with = "null_as_empty")]
    pub platform: String,

    /// Language the template is written in
    #[serde(default, deserialize_with = "null_as_empty")]
    pub language: String,

    /// Where the template lives, usually a repository URL
    #[serde(default, deserialize_with = "null_as_empty")]
    pub source: String,

    /// Human-readable description
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,

    /// Repository URL for fetching the template
    #[serde(rename = "repo", default, deserialize_with = "null_as_empty")]
    pub repository: String,

    /// Whether the template is maintained by the OpenFaaS project
    #[serde(default, deserialize_with = "null_as_empty")]
    pub official: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decode a store body into templates, keeping the store's order.
pub fn decode_templates(body: &[u8]) -> Result<Vec<TemplateInfo>, StoreError> {
    let templates: Vec<TemplateInfo> = serde_json::from_slice(body)?;
    tracing::debug!("Decoded {} templates from store", templates.len());
    Ok(templates)
}
