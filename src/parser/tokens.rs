//! Small matchers for the pieces around the argument list.

use crate::model::CallingConvention;
use regex::Regex;
use std::sync::LazyLock;

// -- Regex patterns -----------------------------------------------------------

// Access specifier, static, virtual and thunk prefix, each optional, in order.
static RE_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^(?:(?:public|private|protected):\s+)?",
        r"(?:static\s+)?",
        r"(?:virtual\s+)?",
        r"(?:\[\s*thunk\s*\]:\s*)?"
    ))
    .unwrap()
});

static RE_CALLING_CONVENTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"__thiscall|__cdecl|__stdcall|__fastcall|__vectorcall").unwrap()
});

// Closing parenthesis of the argument list plus optional cv-qualifiers.
static RE_TRAILING_QUALIFIERS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\)\s*(?:const\s+volatile|volatile\s+const|const|volatile)?\s*$").unwrap()
});

// Longest `Class::` prefix; template arguments are opaque, brackets unbalanced.
static RE_CLASS_METHOD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([\w:<>,]+)::(.+)$").unwrap());

// -- Matchers -----------------------------------------------------------------

/// Drop leading access/static/virtual/thunk tokens.
pub fn strip_prefixes(signature: &str) -> &str {
    match RE_PREFIX.find(signature) {
        Some(m) => &signature[m.end()..],
        None => signature,
    }
}

/// A calling-convention token standing alone in the signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anchor {
    pub convention: CallingConvention,
    /// Byte offset of the token.
    pub start: usize,
    /// Byte offset just past the token.
    pub end: usize,
}

/// Every calling-convention token in `text`, left to right.
///
/// A token counts only when preceded by start-of-text or whitespace and
/// followed by whitespace, so `(__cdecl*)` inside a return type is ignored.
pub fn calling_convention_anchors(text: &str) -> impl Iterator<Item = Anchor> + '_ {
    RE_CALLING_CONVENTION.find_iter(text).filter_map(move |m| {
        let before_ok = text[..m.start()]
            .chars()
            .next_back()
            .is_none_or(char::is_whitespace);
        let after_ok = text[m.end()..]
            .chars()
            .next()
            .is_some_and(char::is_whitespace);
        if !(before_ok && after_ok) {
            return None;
        }
        Some(Anchor {
            convention: m.as_str().parse().ok()?,
            start: m.start(),
            end: m.end(),
        })
    })
}

/// Cut trailing cv-qualifiers, keeping the closing parenthesis.
///
/// Returns `None` when the text does not end with `)` plus qualifiers.
pub fn strip_qualifiers(text: &str) -> Option<&str> {
    let m = RE_TRAILING_QUALIFIERS.find(text)?;
    Some(&text[..m.start() + 1])
}

/// Split `Class::Method` into its parts; a bare name is a free function.
///
/// The method may contain operator syntax, but the only parentheses it may
/// carry are those of `operator()`.
pub fn split_class_method(head: &str) -> Option<(&str, &str)> {
    let head = head.trim();
    let (class_name, method_name) = match RE_CLASS_METHOD.captures(head) {
        Some(caps) => {
            let class = caps.get(1)?.as_str();
            let method = caps.get(2)?.as_str().trim();
            (class, method)
        }
        None => ("", head),
    };

    if method_name.is_empty() || method_name.ends_with("::") {
        return None;
    }
    if method_name.replace("operator()", "").contains(['(', ')']) {
        return None;
    }

    Some((class_name, method_name))
}
