//! Argument-list scanning: locate the parenthesized group, then split it.

/// Parenthesis levels allowed inside the argument list, e.g. the `(*)(int)`
/// of a function-pointer parameter. Deeper nesting is rejected.
pub const MAX_PAREN_NESTING: usize = 1;

/// Locate the argument group that closes at the very end of `text`.
///
/// Scans backwards so a method name such as `operator()` never steals the
/// opening parenthesis. Returns `(head, interior)` where `head` is the text
/// before the group and `interior` is the text between its parentheses.
pub fn split_argument_group(text: &str) -> Option<(&str, &str)> {
    if !text.ends_with(')') {
        return None;
    }

    let mut depth = 0usize;
    for (i, c) in text.char_indices().rev() {
        match c {
            ')' => {
                depth += 1;
                if depth > MAX_PAREN_NESTING + 1 {
                    return None;
                }
            }
            '(' => {
                depth -= 1;
                if depth == 0 {
                    return Some((&text[..i], &text[i + 1..text.len() - 1]));
                }
            }
            _ => {}
        }
    }

    None
}

/// Split an argument-list interior on commas outside parentheses.
///
/// `""` and `"void"` both mean no parameters. Pieces are trimmed and empty
/// pieces dropped. Angle brackets are not tracked.
pub fn split_arguments(interior: &str) -> Vec<String> {
    let interior = interior.trim();
    if interior.is_empty() || interior == "void" {
        return Vec::new();
    }

    let mut args = Vec::new();
    let mut push = |piece: &str| {
        let piece = piece.trim();
        if !piece.is_empty() {
            args.push(piece.to_string());
        }
    };

    let mut depth = 0usize;
    let mut start = 0;
    for (i, c) in interior.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                push(&interior[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    push(&interior[start..]);

    args
}
