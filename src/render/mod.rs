//! Renderer module: trait-based format dispatch.

pub mod header;
pub mod tsv;

use crate::model::Document;
use anyhow::{anyhow, Result};
use std::path::{Path, PathBuf};

/// Trait for rendering a Document into a specific output format.
pub trait Renderer {
    fn render(&self, doc: &Document) -> String;
    fn file_extension(&self) -> &str;

    /// Number of records the rendered output holds.
    fn entry_count(&self, doc: &Document) -> usize {
        doc.entries.len()
    }

    /// Output path used when none is given: the input with its extension replaced.
    fn default_output(&self, input: &Path) -> PathBuf {
        input.with_extension(self.file_extension())
    }
}

/// Create a renderer for the given format name.
///
/// `namespace` is only consulted by the header format, which requires it.
pub fn create_renderer(format: &str, namespace: Option<String>) -> Result<Box<dyn Renderer>> {
    match format {
        "tsv" => Ok(Box::new(tsv::TsvRenderer)),
        "header" | "hpp" => {
            let namespace = namespace
                .ok_or_else(|| anyhow!("the header format needs a namespace (use --namespace)"))?;
            Ok(Box::new(header::HeaderRenderer::new(namespace)?))
        }
        _ => Err(anyhow!("unknown format: {}. Use tsv or header", format)),
    }
}
