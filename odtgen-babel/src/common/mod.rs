//! Text helpers shared by the parsers and the serializer

pub mod entities;
pub mod symbols;

pub use entities::escape_entities;
pub use symbols::symbol_markup;
