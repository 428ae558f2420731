//! Content module - document splitting, metadata and markdown processing

mod article;
mod frontmatter;
mod markdown;

pub use article::Article;
pub use frontmatter::{split_document, Metadata, Split, DELIMITER};
pub use markdown::MarkdownRenderer;
