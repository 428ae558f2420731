//! Built-in article page template using the Tera template engine
//!
//! The page skeleton is embedded in the binary. Tera autoescapes `.html`
//! templates, so `title` and `author` are HTML-escaped while `content`,
//! which is already rendered markup, goes through the `safe` filter.

use tera::{Context, Tera};

use crate::content::Article;
use crate::error::Result;

const ARTICLE_TEMPLATE: &str = "article.html";

/// Template renderer with the embedded article page
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with the article template loaded
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_template(ARTICLE_TEMPLATE, include_str!("article.html"))?;
        Ok(Self { tera })
    }

    /// Render a complete HTML page for an article
    pub fn render(&self, article: &Article) -> Result<String> {
        let context = Context::from_serialize(article)?;
        Ok(self.tera.render(ARTICLE_TEMPLATE, &context)?)
    }
}
