//! Line reader for `<hex-address> <signature>` exports.

use crate::error::SkipReason;

/// One well-formed input line, signature text not yet normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord<'a> {
    /// Trimmed line text.
    pub line: &'a str,
    pub address: u64,
    pub signature: &'a str,
}

/// Lazily read records from export text. Blank lines are dropped; malformed
/// lines come back as errors paired with the offending text.
pub fn records(
    input: &str,
) -> impl Iterator<Item = Result<RawRecord<'_>, (&str, SkipReason)>> + '_ {
    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| read_line(line).map_err(|reason| (line, reason)))
}

/// Split one trimmed, non-empty line at its first space.
pub fn read_line(line: &str) -> Result<RawRecord<'_>, SkipReason> {
    let (address_text, signature) = line
        .split_once(' ')
        .ok_or(SkipReason::MalformedLine("missing address separator"))?;
    let address = parse_address(address_text)
        .ok_or(SkipReason::MalformedLine("address is not hexadecimal"))?;

    Ok(RawRecord {
        line,
        address,
        signature,
    })
}

/// Parse a hex address, with or without a `0x` prefix.
fn parse_address(text: &str) -> Option<u64> {
    let digits = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text);
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    u64::from_str_radix(digits, 16).ok()
}
