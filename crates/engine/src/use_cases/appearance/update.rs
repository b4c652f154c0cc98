//! Apply a character's appearance to the live player entity.

use std::borrow::Cow;

use wardrobe_domain::{AppearancePlan, CharacterRecord, PlayerCommand};

use super::{AppearanceError, PlayerAppearance};
use crate::infrastructure::ports::PlayerEntity;

/// Which character snapshot an apply pass reads.
#[derive(Debug, Clone, Copy)]
pub enum RecordSource<'a> {
    /// Fetch the current document from the store.
    Latest,
    /// Apply this snapshot without touching the store.
    Snapshot(&'a CharacterRecord),
}

impl PlayerAppearance {
    /// Push the full appearance derived from the character onto the player.
    ///
    /// Does nothing when the player entity is no longer valid or no
    /// character is loaded for it.
    pub async fn update(&self, source: RecordSource<'_>) -> Result<(), AppearanceError> {
        let player_id = self.player.id();
        if !self.player.is_valid() {
            tracing::debug!(%player_id, "Player entity invalid, skipping appearance update");
            return Ok(());
        }

        let record = match source {
            RecordSource::Snapshot(record) => Cow::Borrowed(record),
            RecordSource::Latest => match self.characters.get(player_id).await? {
                Some(record) => Cow::Owned(record),
                None => {
                    tracing::debug!(%player_id, "No character loaded, skipping appearance update");
                    return Ok(());
                }
            },
        };

        let plan = AppearancePlan::derive(&record, self.player.model(), &self.base_models);
        tracing::debug!(
            %player_id,
            sex = %record.sex(),
            skin = record.skin.is_some(),
            model_change = ?plan.model_change(),
            commands = plan.len(),
            "Applying appearance"
        );

        for command in plan.commands() {
            push_command(self.player.as_ref(), command);
        }

        Ok(())
    }
}

fn push_command(player: &dyn PlayerEntity, command: &PlayerCommand) {
    match *command {
        PlayerCommand::ClearProp { slot } => player.clear_prop(slot),
        PlayerCommand::SetModel { model } => player.set_model(model),
        PlayerCommand::SetDlcProp {
            dlc,
            slot,
            drawable,
            texture,
        } => player.set_dlc_prop(dlc, slot, drawable, texture),
        PlayerCommand::SetDlcClothes {
            dlc,
            slot,
            drawable,
            texture,
            palette,
        } => player.set_dlc_clothes(dlc, slot, drawable, texture, palette),
    }
}
