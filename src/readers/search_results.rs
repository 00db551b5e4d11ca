//! Code-search response parsing.
//!
//! Mirrors the GraphQL `search` payload. Every field is optional: absent and
//! `null` values both mean "not provided", and unknown fields are ignored.

use serde::Deserialize;

use crate::errors::Result;
use crate::model::{FragmentMatch, SearchRecord};

/// Top-level response document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub data: Option<SearchData>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchData {
    #[serde(default)]
    pub search: Option<Search>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Search {
    #[serde(default)]
    pub edges: Option<Vec<Edge>>,
}

/// One file hit.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
    #[serde(default)]
    pub node: Option<Node>,
    #[serde(default)]
    pub text_matches: Option<Vec<TextMatch>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Node {
    #[serde(default)]
    pub repository: Option<Repository>,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Repository {
    #[serde(default)]
    pub name_with_owner: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TextMatch {
    #[serde(default)]
    pub fragment: Option<String>,
    #[serde(default)]
    pub highlights: Option<Vec<Highlight>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Highlight {
    #[serde(default)]
    pub text: Option<String>,
}

impl SearchResponse {
    /// Parses a response from JSON text.
    pub fn from_json(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    /// The edges, or an empty slice when the response has none.
    pub fn edges(&self) -> &[Edge] {
        self.data
            .as_ref()
            .and_then(|d| d.search.as_ref())
            .and_then(|s| s.edges.as_deref())
            .unwrap_or_default()
    }

    /// Converts every edge into a search record, preserving order.
    pub fn records(&self) -> Vec<SearchRecord> {
        self.edges().iter().map(Edge::to_record).collect()
    }
}

impl Edge {
    /// Converts this edge into a search record.
    ///
    /// An empty `text` is treated as missing. Highlights without text are
    /// dropped.
    pub fn to_record(&self) -> SearchRecord {
        let node = self.node.clone().unwrap_or_default();
        let repository = node
            .repository
            .and_then(|r| r.name_with_owner)
            .unwrap_or_default();

        let matches = self
            .text_matches
            .iter()
            .flatten()
            .map(|m| FragmentMatch {
                fragment: m.fragment.clone().unwrap_or_default(),
                highlights: m
                    .highlights
                    .iter()
                    .flatten()
                    .filter_map(|h| h.text.clone())
                    .filter(|text| !text.is_empty())
                    .collect(),
            })
            .collect();

        SearchRecord {
            repository,
            path: node.path.unwrap_or_default(),
            url: node.url.unwrap_or_default(),
            text: node.text.filter(|text| !text.is_empty()),
            matches,
        }
    }
}
