//! Wardrobe domain - character appearance records and the plans that apply
//! them to a live player entity.
//!
//! Pure types only: no I/O, no engine access.

pub mod appearance_plan;
pub mod entities;
pub mod error;
pub mod ids;
pub mod value_objects;

pub use appearance_plan::{AppearancePlan, PlayerCommand, CLEARED_PROP_SLOTS};

pub use entities::{Appearance, CharacterField, CharacterRecord};

pub use error::DomainError;

// Re-export ID types
pub use ids::PlayerId;

pub use value_objects::{
    base_clothes, BaseModels, BaseSlot, ClothingComponent, ClothingComponentRecord, ModelHash,
    ModelRef, Sex, FEMALE_BASE_CLOTHES, FEMALE_FREEMODE_MODEL, MALE_BASE_CLOTHES,
    MALE_FREEMODE_MODEL,
};
