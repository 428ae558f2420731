//! Generator module - turns a document into an HTML page and writes it out

use std::fs;

use crate::config::Params;
use crate::content::{split_document, Article, MarkdownRenderer, Metadata};
use crate::error::{Error, Result};
use crate::templates::TemplateRenderer;

/// Article page generator
pub struct Generator {
    markdown: MarkdownRenderer,
    renderer: TemplateRenderer,
}

impl Generator {
    /// Create a new generator
    pub fn new() -> Result<Self> {
        Ok(Self {
            markdown: MarkdownRenderer::new(),
            renderer: TemplateRenderer::new()?,
        })
    }

    /// Split a raw document, decode its metadata and render its body
    pub fn parse_article(&self, buf: &[u8]) -> Result<Article> {
        let split = split_document(buf)?;
        let metadata = Metadata::parse(split.metadata)?;

        let body = String::from_utf8_lossy(split.body);
        let content = self.markdown.render(&body);
        tracing::debug!("Rendered content:\n{}", content);

        Ok(Article::new(metadata, content))
    }

    /// Build the complete HTML page for a raw document
    pub fn build_html(&self, buf: &[u8]) -> Result<String> {
        let article = self.parse_article(buf)?;
        self.renderer.render(&article)
    }

    /// Read the input file, render it and write the page.
    ///
    /// The page is built in memory first; the output file is only touched
    /// once rendering has succeeded.
    pub fn generate(&self, params: &Params) -> Result<()> {
        let input = fs::read(&params.input).map_err(|e| Error::io(&params.input, e))?;
        let html = self.build_html(&input)?;

        fs::write(&params.output, html).map_err(|e| Error::io(&params.output, e))?;
        tracing::info!(
            "Generated {} from {}",
            params.output.display(),
            params.input.display()
        );

        Ok(())
    }
}
