//! Response documents from the go-search.org API.

use serde::Deserialize;

/// Package lookup response (`?action=package&id=…`).
///
/// One document carries both the canonical record and the import list.
/// Every field defaults to its zero value, since the upstream omits what
/// it does not know about a package.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PackageDocument {
    #[serde(rename = "Package", default)]
    pub package: String,
    #[serde(rename = "StarCount", default)]
    pub star_count: i64,
    #[serde(rename = "ProjectURL", default)]
    pub project_url: String,
    #[serde(rename = "Imported", default)]
    pub imported: Vec<String>,
}

/// Search response (`?action=search&q=…`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchDocument {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub hits: Vec<SearchRow>,
}

/// One search hit, in relevance order.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchRow {
    #[serde(default)]
    pub package: String,
    #[serde(default)]
    pub author: String,
}
