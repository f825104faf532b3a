//! Markdown dialect tests

mod convert;
