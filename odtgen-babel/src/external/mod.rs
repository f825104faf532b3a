//! Collaborators the parsers call out to
//!
//! Reading included source files and running the syntax highlighter both
//! touch the outside world. The parsers only see the traits defined here,
//! so tests can substitute in-memory implementations.

pub mod highlight;
pub mod include;

#[cfg(feature = "native-highlight")]
pub use highlight::CommandHighlighter;
pub use highlight::{HighlightOptions, Highlighter};
pub use include::{FsSourceLoader, IncludeOptions, MemorySourceLoader, SourceLoader};
