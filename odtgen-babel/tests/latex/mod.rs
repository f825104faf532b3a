//! Macro dialect tests

mod convert;
mod properties;
