//! Batch pipeline: export text → demangle → normalize → parse → [`Document`].

use crate::error::SkipReason;
use crate::input;
use crate::model::{Document, Entry, SkippedLine};
use crate::normalize::normalize;
use crate::parser;
use std::borrow::Cow;

/// Turns a raw symbol name into a readable signature.
pub trait Demangle {
    fn demangle<'a>(&self, raw: &'a str) -> Cow<'a, str>;
}

/// For exports whose names are already demangled.
#[derive(Debug, Default, Clone, Copy)]
pub struct Verbatim;

impl Demangle for Verbatim {
    fn demangle<'a>(&self, raw: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(raw)
    }
}

/// Run every line of `text` through the parser, keeping input order.
///
/// Malformed lines and unparseable signatures are collected in
/// [`Document::skipped`]; nothing here aborts the batch.
pub fn extract(text: &str, demangler: &dyn Demangle) -> Document {
    let mut doc = Document::default();

    for record in input::records(text) {
        let record = match record {
            Ok(record) => record,
            Err((line, reason)) => {
                skip(&mut doc, line, reason);
                continue;
            }
        };

        let signature = normalize(&demangler.demangle(record.signature));
        match parser::parse(&signature) {
            Some(signature) => doc.entries.push(Entry {
                address: record.address,
                signature,
            }),
            None => skip(&mut doc, record.line, SkipReason::UnparseableSignature),
        }
    }

    log::info!(
        "extracted {} signature(s), skipped {} line(s)",
        doc.entries.len(),
        doc.skipped.len()
    );
    doc
}

fn skip(doc: &mut Document, line: &str, reason: SkipReason) {
    log::debug!("skipping {:?}: {}", line, reason);
    doc.skipped.push(SkippedLine {
        line: line.to_string(),
        reason,
    });
}
