//! Appearance use cases - keep a player's ped in sync with their character.
//!
//! Setters write one field of the character document and then re-apply the
//! whole appearance. Applying never diffs against what the entity currently
//! wears; see [`wardrobe_domain::AppearancePlan`] for the command order.

mod error;
mod setters;
mod update;

pub use error::AppearanceError;
pub use update::RecordSource;

use std::sync::Arc;

use wardrobe_domain::BaseModels;

use crate::infrastructure::ports::{CharacterRepo, PlayerEntity};

/// Container for appearance use cases.
pub struct AppearanceUseCases {
    characters: Arc<dyn CharacterRepo>,
    base_models: BaseModels,
}

impl AppearanceUseCases {
    pub fn new(characters: Arc<dyn CharacterRepo>, base_models: BaseModels) -> Self {
        Self {
            characters,
            base_models,
        }
    }

    /// Bind the appearance operations to one player.
    pub fn for_player(&self, player: Arc<dyn PlayerEntity>) -> PlayerAppearance {
        PlayerAppearance::new(self.characters.clone(), player, self.base_models)
    }
}

/// Appearance operations bound to a single player entity.
pub struct PlayerAppearance {
    characters: Arc<dyn CharacterRepo>,
    player: Arc<dyn PlayerEntity>,
    base_models: BaseModels,
}

impl PlayerAppearance {
    pub fn new(
        characters: Arc<dyn CharacterRepo>,
        player: Arc<dyn PlayerEntity>,
        base_models: BaseModels,
    ) -> Self {
        Self {
            characters,
            player,
            base_models,
        }
    }
}
