//! SeaORM entities and their conversions to the domain types.

pub mod author;
pub mod post;
