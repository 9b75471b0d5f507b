use thiserror::Error;

/// Why an input line produced no entry. Never fatal: the batch goes on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkipReason {
    #[error("malformed line: {0}")]
    MalformedLine(&'static str),

    #[error("signature does not match the supported grammar")]
    UnparseableSignature,
}
