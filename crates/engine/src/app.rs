//! Application state and composition.

use std::sync::Arc;

use wardrobe_domain::BaseModels;

use crate::infrastructure::app_settings::AppSettings;
use crate::infrastructure::ports::{CharacterRepo, PlayerEntity};
use crate::use_cases;

/// Main application state.
///
/// Holds the injected ports and all use cases. Host event handlers
/// (character select, inventory equip, job assignment) reach appearance
/// operations through [`App::appearance_for`].
pub struct App {
    pub repositories: Repositories,
    pub use_cases: UseCases,
}

/// Container for all repository ports.
pub struct Repositories {
    pub character: Arc<dyn CharacterRepo>,
}

/// Container for all use cases.
pub struct UseCases {
    pub appearance: use_cases::AppearanceUseCases,
}

impl App {
    pub fn new(settings: &AppSettings, character: Arc<dyn CharacterRepo>) -> Self {
        let base_models: BaseModels = settings.base_models();
        tracing::info!(
            female_base_model = %base_models.female,
            male_base_model = %base_models.male,
            "Appearance base models configured"
        );

        let use_cases = UseCases {
            appearance: use_cases::AppearanceUseCases::new(character.clone(), base_models),
        };

        Self {
            repositories: Repositories { character },
            use_cases,
        }
    }

    /// Appearance operations bound to one player.
    pub fn appearance_for(
        &self,
        player: Arc<dyn PlayerEntity>,
    ) -> use_cases::PlayerAppearance {
        self.use_cases.appearance.for_player(player)
    }
}
