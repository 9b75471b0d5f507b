//! Tab-separated renderer: one row per parsed signature, duplicates kept.
//!
//! Columns: address, return type, calling convention, class, method, then
//! one column per argument (a single empty column when there are none).

use crate::model::*;
use crate::render::Renderer;

pub struct TsvRenderer;

impl Renderer for TsvRenderer {
    fn render(&self, doc: &Document) -> String {
        doc.entries
            .iter()
            .map(render_row)
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn file_extension(&self) -> &str {
        "tsv"
    }
}

fn render_row(entry: &Entry) -> String {
    let sig = &entry.signature;
    let address = format!("{:#x}", entry.address);
    let mut fields = vec![
        address.as_str(),
        sig.return_type.as_str(),
        sig.calling_convention.as_str(),
        sig.class_name.as_str(),
        sig.method_name.as_str(),
    ];

    if sig.arguments.is_empty() {
        fields.push("");
    } else {
        fields.extend(sig.arguments.iter().map(String::as_str));
    }

    fields.join("\t")
}
