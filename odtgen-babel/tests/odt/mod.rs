//! Output markup tests

mod dump;
mod structure;
