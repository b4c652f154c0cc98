//! Value objects - Immutable objects defined by their attributes

mod base_appearance;
mod clothing;
mod model;
mod sex;

pub use base_appearance::{
    base_clothes, BaseModels, BaseSlot, FEMALE_BASE_CLOTHES, MALE_BASE_CLOTHES,
};
pub use clothing::{ClothingComponent, ClothingComponentRecord};
pub use model::{ModelHash, ModelRef, FEMALE_FREEMODE_MODEL, MALE_FREEMODE_MODEL};
pub use sex::Sex;
