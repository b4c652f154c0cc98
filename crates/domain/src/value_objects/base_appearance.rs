//! Default freemode appearance per sex
//!
//! The base clothes tables are the "naked but decent" loadout applied before
//! any outfit. They are process-wide read-only data.

use serde::{Deserialize, Serialize};

use super::model::{ModelHash, FEMALE_FREEMODE_MODEL, MALE_FREEMODE_MODEL};
use super::sex::Sex;

/// Default drawable for one clothing slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaseSlot {
    pub slot: u8,
    pub drawable: u16,
}

const fn base(slot: u8, drawable: u16) -> BaseSlot {
    BaseSlot { slot, drawable }
}

/// Female base loadout, ascending slot order.
pub static FEMALE_BASE_CLOTHES: [BaseSlot; 9] = [
    base(0, 1),  // mask
    base(3, 15), // torso
    base(4, 14), // pants
    base(5, 0),  // bag
    base(6, 35), // shoes
    base(7, 0),  // accessories
    base(8, 15), // undershirt
    base(9, 0),  // body armour
    base(11, 15), // top
];

/// Male base loadout, ascending slot order.
pub static MALE_BASE_CLOTHES: [BaseSlot; 9] = [
    base(0, 1),  // mask
    base(3, 15), // torso
    base(4, 14), // pants
    base(5, 0),  // bag
    base(6, 34), // shoes
    base(7, 0),  // accessories
    base(8, 15), // undershirt
    base(9, 0),  // body armour
    base(11, 91), // top
];

/// Base clothes table for a sex.
pub fn base_clothes(sex: Sex) -> &'static [BaseSlot] {
    match sex {
        Sex::Female => &FEMALE_BASE_CLOTHES,
        Sex::Male => &MALE_BASE_CLOTHES,
    }
}

/// Ped models used when a character has no skin override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseModels {
    pub female: ModelHash,
    pub male: ModelHash,
}

impl BaseModels {
    pub fn new(female: ModelHash, male: ModelHash) -> Self {
        Self { female, male }
    }

    pub fn for_sex(&self, sex: Sex) -> ModelHash {
        match sex {
            Sex::Female => self.female,
            Sex::Male => self.male,
        }
    }
}

impl Default for BaseModels {
    fn default() -> Self {
        Self {
            female: ModelHash::from_name(FEMALE_FREEMODE_MODEL),
            male: ModelHash::from_name(MALE_FREEMODE_MODEL),
        }
    }
}
