//! Article model

use serde::Serialize;

use super::Metadata;

/// A fully parsed document, ready for the page template
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Article {
    /// Title from the metadata block
    pub title: String,

    /// Author from the metadata block
    pub author: String,

    /// Rendered HTML of the markdown body, inserted without escaping
    pub content: String,
}

impl Article {
    /// Complete an article from its metadata and rendered body
    pub fn new(metadata: Metadata, content: String) -> Self {
        Self {
            title: metadata.title,
            author: metadata.author,
            content,
        }
    }
}
