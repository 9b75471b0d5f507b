//! Signature parser: a fixed sequence of small matchers.
//!
//! A signature is read as
//!
//! ```text
//! [access:] [static] [virtual] [[thunk]:] [return] CALLCONV [Class::]Method(args) [cv]
//! ```
//!
//! The calling convention anchors everything: the return type is whatever
//! precedes the first anchor whose tail parses, and the argument group is
//! located from the end of the string. A missing anchor means no match.

pub mod args;
pub mod tokens;

use crate::model::ParsedSignature;
use tokens::Anchor;

/// Parse a normalized signature. `None` means the grammar does not apply.
pub fn parse(signature: &str) -> Option<ParsedSignature> {
    let body = tokens::strip_prefixes(signature.trim());
    tokens::calling_convention_anchors(body).find_map(|anchor| parse_at(body, anchor))
}

fn parse_at(body: &str, anchor: Anchor) -> Option<ParsedSignature> {
    let tail = tokens::strip_qualifiers(body[anchor.end..].trim())?;
    let (head, interior) = args::split_argument_group(tail)?;
    let (class_name, method_name) = tokens::split_class_method(head)?;

    let return_type = match body[..anchor.start].trim() {
        "" => default_return_type(class_name, method_name),
        explicit => explicit.to_string(),
    };

    Some(ParsedSignature {
        return_type,
        calling_convention: anchor.convention,
        class_name: class_name.to_string(),
        method_name: method_name.to_string(),
        arguments: args::split_arguments(interior),
    })
}

/// Constructors print no return type; downstream expects `Class*` for them.
fn default_return_type(class_name: &str, method_name: &str) -> String {
    if !class_name.is_empty() && method_name == class_name {
        format!("{}*", class_name)
    } else {
        "void".to_string()
    }
}
