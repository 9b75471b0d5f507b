//! Data model for extracted signatures: format-agnostic.

use crate::error::SkipReason;
use std::fmt;
use std::str::FromStr;

/// Calling-convention tokens a demangled signature can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CallingConvention {
    Thiscall,
    Cdecl,
    Stdcall,
    Fastcall,
    Vectorcall,
}

impl CallingConvention {
    pub const ALL: [CallingConvention; 5] = [
        CallingConvention::Thiscall,
        CallingConvention::Cdecl,
        CallingConvention::Stdcall,
        CallingConvention::Fastcall,
        CallingConvention::Vectorcall,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CallingConvention::Thiscall => "__thiscall",
            CallingConvention::Cdecl => "__cdecl",
            CallingConvention::Stdcall => "__stdcall",
            CallingConvention::Fastcall => "__fastcall",
            CallingConvention::Vectorcall => "__vectorcall",
        }
    }
}

impl fmt::Display for CallingConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CallingConvention {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|cc| cc.as_str() == s)
            .ok_or(())
    }
}

/// Structured view of one demangled function signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedSignature {
    /// Never empty: defaulted to `Class*` for constructors, `void` otherwise.
    pub return_type: String,
    pub calling_convention: CallingConvention,
    /// Empty for free functions.
    pub class_name: String,
    pub method_name: String,
    /// Raw argument type strings, parameter names included.
    pub arguments: Vec<String>,
}

impl ParsedSignature {
    /// Lookup key: `Class::Method`, or just `Method` for free functions.
    pub fn key(&self) -> String {
        if self.class_name.is_empty() {
            self.method_name.clone()
        } else {
            format!("{}::{}", self.class_name, self.method_name)
        }
    }
}

/// Renders back into signature text the parser accepts.
impl fmt::Display for ParsedSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}({})",
            self.return_type,
            self.calling_convention,
            self.key(),
            self.arguments.join(", ")
        )
    }
}

/// A parsed signature paired with its address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub address: u64,
    pub signature: ParsedSignature,
}

/// An input line that did not produce an entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// Trimmed line text, reported verbatim.
    pub line: String,
    pub reason: SkipReason,
}

/// Complete extraction result from one input stream, in input order.
#[derive(Debug, Default)]
pub struct Document {
    pub entries: Vec<Entry>,
    pub skipped: Vec<SkippedLine>,
}
