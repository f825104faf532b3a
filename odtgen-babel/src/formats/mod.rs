//! Format implementations
//!
//! Input dialects (`latex`, `markdown`) parse into the shared document tree;
//! output targets (`odt`, `treeviz`) serialize it.

pub mod latex;
pub mod markdown;
pub mod odt;
pub mod treeviz;

pub use latex::LatexFormat;
pub use markdown::MarkdownFormat;
pub use odt::OdtFormat;
pub use treeviz::TreevizFormat;
