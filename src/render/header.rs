//! C++ header renderer: a constexpr key/address table plus a consteval lookup.
//!
//! Keys are de-duplicated first-write-wins before emission, so the header
//! holds one address per `Class::Method`.

use crate::model::*;
use crate::render::Renderer;
use crate::table::SignatureTable;
use anyhow::{bail, Result};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

static RE_NAMESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_]\w*(?:::[A-Za-z_]\w*)*$").unwrap());

/// Namespaces for the known game executables, by input file stem.
const KNOWN_NAMESPACES: &[(&str, &str)] = &[
    ("g1", "Gothic_I_Classic"),
    ("g1a", "Gothic_I_Addon"),
    ("g2", "Gothic_II_Classic"),
    ("g2a", "Gothic_II_Addon"),
];

/// Namespace registered for a file stem such as `g2a`.
pub fn known_namespace(stem: &str) -> Option<&'static str> {
    KNOWN_NAMESPACES
        .iter()
        .find(|(known, _)| *known == stem)
        .map(|(_, namespace)| *namespace)
}

pub struct HeaderRenderer {
    namespace: String,
}

impl HeaderRenderer {
    pub fn new(namespace: String) -> Result<Self> {
        if !RE_NAMESPACE.is_match(&namespace) {
            bail!("invalid C++ namespace: {}", namespace);
        }
        Ok(Self { namespace })
    }
}

impl Renderer for HeaderRenderer {
    fn render(&self, doc: &Document) -> String {
        let table = SignatureTable::from_entries(&doc.entries);
        let address_type = if table.iter().all(|(_, address)| address <= u64::from(u32::MAX)) {
            "std::uint32_t"
        } else {
            "std::uint64_t"
        };

        let mut out = String::new();
        out.push_str("#pragma once\n\n");
        out.push_str("#include <cstdint>\n");
        out.push_str("#include <string_view>\n\n");

        out.push_str(&format!("namespace {}\n", self.namespace));
        out.push_str("{\n");
        out.push_str("\tstruct SignatureEntry\n");
        out.push_str("\t{\n");
        out.push_str("\t\tstd::string_view signature;\n");
        out.push_str(&format!("\t\t{} address;\n", address_type));
        out.push_str("\t};\n\n");

        out.push_str("\tconstexpr SignatureEntry signatures[] = {\n");
        if table.is_empty() {
            // A zero-length array is ill-formed; the sentinel row maps to 0 anyway.
            out.push_str("\t\t{ \"\", 0x0 },\n");
        }
        for (key, address) in table.iter() {
            out.push_str(&format!("\t\t{{ \"{}\", 0x{:X} }},\n", c_escape(key), address));
        }
        out.push_str("\t};\n\n");

        out.push_str(&format!(
            "\tconsteval {} SignatureToAddress(const std::string_view signature)\n",
            address_type
        ));
        out.push_str("\t{\n");
        out.push_str("\t\tfor (auto const& [entry_signature, entry_address] : signatures)\n");
        out.push_str("\t\t{\n");
        out.push_str("\t\t\tif (entry_signature == signature)\n");
        out.push_str("\t\t\t\treturn entry_address;\n");
        out.push_str("\t\t}\n\n");
        out.push_str("\t\treturn 0;\n\n");
        out.push_str("\t}\n");
        out.push('}');
        out
    }

    fn file_extension(&self) -> &str {
        "hpp"
    }

    fn entry_count(&self, doc: &Document) -> usize {
        SignatureTable::from_entries(&doc.entries).len()
    }

    /// `dumps/g2a.txt` → `dumps/g2a_signatures.hpp`
    fn default_output(&self, input: &Path) -> PathBuf {
        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        input.with_file_name(format!("{}_signatures.{}", stem, self.file_extension()))
    }
}

fn c_escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}
