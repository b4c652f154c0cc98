//! Domain entities - Core business objects with identity

mod character_record;

pub use character_record::{Appearance, CharacterField, CharacterRecord};
