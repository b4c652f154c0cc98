//! Appearance plans - the ordered commands that bring a player entity in line
//! with a character record.
//!
//! Derivation is pure: it reads the record and the entity's current model and
//! produces the full command list. Nothing is diffed against what the entity
//! already wears; every pass is pushed again in full.
//!
//! Command order:
//! 1. Clear the prop slots listed in [`CLEARED_PROP_SLOTS`]
//! 2. Assign the model (only when it changes)
//! 3. With a skin override, stop here
//! 4. Base clothes table for the character's sex
//! 5. `clothing` components in document order
//! 6. `uniform` components in document order

use serde::{Deserialize, Serialize};

use crate::entities::CharacterRecord;
use crate::value_objects::{base_clothes, BaseModels, ClothingComponent, ModelHash};

/// Prop slots cleared before every apply (hats, glasses, ears, watch, bracelet).
pub const CLEARED_PROP_SLOTS: [u8; 5] = [0, 1, 2, 6, 7];

/// A single visual command for the host engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum PlayerCommand {
    ClearProp {
        slot: u8,
    },
    SetModel {
        model: ModelHash,
    },
    SetDlcProp {
        dlc: u32,
        slot: u8,
        drawable: u16,
        texture: u8,
    },
    SetDlcClothes {
        dlc: u32,
        slot: u8,
        drawable: u16,
        texture: u8,
        palette: u8,
    },
}

impl From<&ClothingComponent> for PlayerCommand {
    fn from(component: &ClothingComponent) -> Self {
        match *component {
            ClothingComponent::Prop {
                dlc,
                id,
                drawable,
                texture,
            } => Self::SetDlcProp {
                dlc,
                slot: id,
                drawable,
                texture,
            },
            ClothingComponent::Clothing {
                dlc,
                id,
                drawable,
                texture,
                palette,
            } => Self::SetDlcClothes {
                dlc,
                slot: id,
                drawable,
                texture,
                palette,
            },
        }
    }
}

/// Ordered commands for one apply pass.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppearancePlan {
    commands: Vec<PlayerCommand>,
}

impl AppearancePlan {
    /// Derive the commands for `record` given the entity's current model.
    pub fn derive(
        record: &CharacterRecord,
        current_model: ModelHash,
        base_models: &BaseModels,
    ) -> Self {
        let mut commands: Vec<PlayerCommand> = CLEARED_PROP_SLOTS
            .iter()
            .map(|&slot| PlayerCommand::ClearProp { slot })
            .collect();

        // A custom model carries its own appearance
        if let Some(skin) = &record.skin {
            let model = skin.resolve();
            if model != current_model {
                commands.push(PlayerCommand::SetModel { model });
            }
            return Self { commands };
        }

        let model = base_models.for_sex(record.sex());
        if model != current_model {
            commands.push(PlayerCommand::SetModel { model });
        }

        commands.extend(
            base_clothes(record.sex())
                .iter()
                .map(|base| PlayerCommand::SetDlcClothes {
                    dlc: 0,
                    slot: base.slot,
                    drawable: base.drawable,
                    texture: 0,
                    palette: 0,
                }),
        );

        let layers = record
            .clothing
            .iter()
            .chain(record.uniform.iter())
            .flatten();
        commands.extend(layers.map(PlayerCommand::from));

        Self { commands }
    }

    pub fn commands(&self) -> &[PlayerCommand] {
        &self.commands
    }

    pub fn into_commands(self) -> Vec<PlayerCommand> {
        self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// The model assignment in this plan, if any.
    pub fn model_change(&self) -> Option<ModelHash> {
        self.commands.iter().find_map(|command| match command {
            PlayerCommand::SetModel { model } => Some(*model),
            _ => None,
        })
    }
}
