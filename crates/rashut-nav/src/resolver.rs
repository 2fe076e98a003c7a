//! Node id + year to detail view URL

use crate::links::LINKS;
use rashut_model::Year;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// Placeholder opened for unmapped keys
pub const BLANK_URL: &str = "about:blank";

/// Where a click leads
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Destination {
    /// A concrete detail view
    Url(String),
    /// No mapped view for this node and year
    Blank,
}

impl Destination {
    /// URL to open
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Url(url) => url,
            Self::Blank => BLANK_URL,
        }
    }

    /// Whether nothing is mapped
    #[must_use]
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Blank)
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolves clicked nodes against the link table
#[derive(Debug, Clone)]
pub struct NavigationResolver {
    server_base: String,
    links: HashMap<&'static str, &'static str>,
}

impl NavigationResolver {
    /// Resolver over the built-in table
    #[must_use]
    pub fn new(server_base: impl Into<String>) -> Self {
        Self::with_links(server_base, LINKS)
    }

    /// Resolver over a custom table
    #[must_use]
    pub fn with_links(server_base: impl Into<String>, links: &[(&'static str, &'static str)]) -> Self {
        Self {
            server_base: server_base.into(),
            links: links.iter().copied().collect(),
        }
    }

    /// Server base URLs are built on
    #[must_use]
    pub fn server_base(&self) -> &str {
        &self.server_base
    }

    /// Lookup key for an identifier and year
    ///
    /// Hierarchy ids (`left-branch`) are mapped to their view key (`B`);
    /// anything else is taken as a view key already.
    #[must_use]
    pub fn lookup_key(node_id: &str, year: Year) -> String {
        let view = rashut_hierarchy::view_key(node_id).unwrap_or(node_id);
        format!("{view}{year}")
    }

    /// Resolve a click
    #[must_use]
    pub fn resolve(&self, node_id: &str, year: Year) -> Destination {
        let key = Self::lookup_key(node_id, year);
        match self.links.get(key.as_str()) {
            Some(fragment) => Destination::Url(format!("{}{fragment}", self.server_base)),
            None => {
                tracing::debug!(node = node_id, %key, "no detail view mapped");
                Destination::Blank
            }
        }
    }

    /// Whether a lookup key is mapped
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.links.contains_key(key)
    }
}

/// Server base of the hosting page
///
/// Everything before the character preceding `{marker}/` (normally the
/// path separator); `None` when the marker is not in the URL.
#[must_use]
pub fn server_base_from_page_url<'a>(page_url: &'a str, marker: &str) -> Option<&'a str> {
    let idx = page_url.find(&format!("{marker}/"))?;
    let prefix = &page_url[..idx];
    let end = prefix.char_indices().next_back().map_or(0, |(i, _)| i);
    Some(&prefix[..end])
}
