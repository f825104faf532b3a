//! Error types for parsing and format operations

use thiserror::Error;

/// Hard parse failures. Any of these aborts the whole conversion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A macro or keyword name that is not part of the closed vocabulary
    #[error("Unknown type for '{0}'")]
    UnknownName(String),
    /// `\begin{..}` / `\end{..}` naming something that is not an environment
    #[error("Unknown environment: {0}")]
    UnknownEnvironment(String),
    /// A `}` with no pending open brace and no fragment to close
    #[error("unexpected closing brace at offset {offset}")]
    UnexpectedClosingBrace { offset: usize },
    /// `\end{..}` that does not close the innermost open environment
    #[error("Expected endMarker {expected}, got {found}")]
    EndMarkerMismatch { expected: String, found: String },
    /// A macro with no vocabulary entry and no symbol markup
    #[error("Unhandled token: {0}")]
    UnhandledToken(String),
    /// Input ran out while something was still required
    #[error("End of data at offset {offset}, expected {expected}")]
    UnexpectedEof { offset: usize, expected: String },
    /// `\sourcecodefile{..}` whose argument is not a single text run
    #[error("sourcecodefile node has {0} descendants, expected 1")]
    SourceCodeArity(usize),
    /// An included source could not be read
    #[error("unable to open sourcecodefile: {name}: {reason}")]
    Include { name: String, reason: String },
    /// A fenced code block with no closing fence
    #[error("unterminated code fence opened on line {line}")]
    UnterminatedCodeFence { line: usize },
    /// The external highlighter failed
    #[error("highlighter failed: {0}")]
    Highlighter(String),
}

/// Errors that can occur during format operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Format not found in registry
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    /// Error during parsing
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
    /// Error during serialization
    #[error("Serialization error: {0}")]
    SerializationError(String),
    /// Format does not support the requested direction
    #[error("Operation not supported: {0}")]
    NotSupported(String),
}
