//! Generator error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a generation run.
///
/// Every variant is terminal: the generator never retries and never
/// claims partial usability of output already written.
#[derive(Debug, Error)]
pub enum GenError {
    /// The entity file could not be opened or read.
    #[error("cannot read entity file {}", path.display())]
    InputUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The entity file is not well-formed JSON, or an entry is missing
    /// its codepoint sequence.
    #[error("malformed entity file: {0}")]
    InputMalformed(#[from] serde_json::Error),

    /// A codepoint outside the Unicode scalar range (a surrogate, or
    /// above U+10FFFF) was encountered. The reference dataset never
    /// contains such values, so hitting this means the input is not
    /// what it claims to be.
    #[error("codepoint {0:#06x} is not a Unicode scalar value")]
    InvalidCodepoint(u32),
}

/// Generator result type alias.
pub type GenResult<T> = std::result::Result<T, GenError>;
