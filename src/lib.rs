//! template-gen: render a markdown document into a standalone article page
//!
//! A document is a YAML metadata block between two `---` markers followed by
//! a markdown body. The body is rendered with pulldown-cmark and placed,
//! together with the title and author, into an embedded Tera page template.

pub mod config;
pub mod content;
pub mod error;
pub mod generator;
pub mod templates;

pub use config::Params;
pub use content::Article;
pub use error::{Error, Result};
pub use generator::Generator;

/// Build the HTML page for a raw document
pub fn build_html(buf: &[u8]) -> Result<String> {
    Generator::new()?.build_html(buf)
}
