//! sigextract: structured function metadata from demangled C++ signatures.
//!
//! Reads `<hex-address> <signature>` exports, parses each signature into
//! return type, calling convention, class, method and arguments, and renders
//! the result as tab-separated rows or as a C++ lookup header.

pub mod error;
pub mod extract;
pub mod input;
pub mod model;
pub mod normalize;
pub mod parser;
pub mod render;
pub mod table;

pub use error::SkipReason;
pub use extract::{extract, Demangle, Verbatim};
pub use model::{CallingConvention, Document, Entry, ParsedSignature, SkippedLine};
pub use normalize::normalize;
pub use parser::parse;
pub use table::SignatureTable;
