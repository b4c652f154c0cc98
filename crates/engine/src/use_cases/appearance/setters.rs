//! Appearance setters - write one character field, then re-apply.

use wardrobe_domain::{CharacterField, ClothingComponent, ModelRef};

use super::{AppearanceError, PlayerAppearance, RecordSource};

impl PlayerAppearance {
    /// Set the uniform layered over the player's clothing.
    ///
    /// Returns `false` when no character is loaded for the player.
    pub async fn set_uniform(
        &self,
        components: Vec<ClothingComponent>,
    ) -> Result<bool, AppearanceError> {
        self.write_field(CharacterField::Uniform(Some(components)))
            .await
    }

    /// Remove the uniform.
    pub async fn clear_uniform(&self) -> Result<(), AppearanceError> {
        self.write_field(CharacterField::Uniform(None)).await?;
        Ok(())
    }

    /// Replace the player's outfit.
    ///
    /// Returns `false` when no character is loaded for the player.
    pub async fn set_clothing(
        &self,
        components: Vec<ClothingComponent>,
    ) -> Result<bool, AppearanceError> {
        self.write_field(CharacterField::Clothing(components)).await
    }

    /// Empty the outfit, leaving only the base clothes.
    pub async fn clear_clothing(&self) -> Result<(), AppearanceError> {
        self.write_field(CharacterField::Clothing(Vec::new()))
            .await?;
        Ok(())
    }

    /// Switch the player to a custom ped model.
    ///
    /// Model names are hashed before being stored. Returns `false` when no
    /// character is loaded for the player.
    pub async fn set_skin(&self, model: impl Into<ModelRef>) -> Result<bool, AppearanceError> {
        let model = model.into().resolve();
        self.write_field(CharacterField::Skin(Some(model))).await
    }

    /// Return to the freemode model for the character's sex.
    ///
    /// Returns `false` when no character is loaded for the player.
    pub async fn clear_skin(&self) -> Result<bool, AppearanceError> {
        self.write_field(CharacterField::Skin(None)).await
    }

    async fn write_field(&self, field: CharacterField) -> Result<bool, AppearanceError> {
        let player_id = self.player.id();
        let field_name = field.name();

        if self.characters.get(player_id).await?.is_none() {
            tracing::debug!(
                %player_id,
                field = field_name,
                "No character loaded, ignoring appearance change"
            );
            return Ok(false);
        }

        self.characters.set_field(player_id, field).await?;
        tracing::info!(%player_id, field = field_name, "Character appearance changed");

        self.update(RecordSource::Latest).await?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::memory_store::InMemoryCharacterRepo;
    use crate::infrastructure::ports::{CharacterRepo, MockCharacterRepo, PlayerEntity, RepoError};
    use crate::infrastructure::recording_player::RecordingPlayer;
    use std::sync::Arc;
    use wardrobe_domain::{
        AppearancePlan, BaseModels, CharacterRecord, ModelHash, PlayerCommand, PlayerId, Sex,
    };

    struct Fixture {
        repo: Arc<InMemoryCharacterRepo>,
        player: Arc<RecordingPlayer>,
        appearance: PlayerAppearance,
    }

    fn fixture(record: Option<CharacterRecord>) -> Fixture {
        let player_id = PlayerId::new();
        let repo = Arc::new(InMemoryCharacterRepo::new());
        if let Some(record) = record {
            repo.insert(player_id, record);
        }
        let player = Arc::new(RecordingPlayer::new(player_id));
        let appearance =
            PlayerAppearance::new(repo.clone(), player.clone(), BaseModels::default());
        Fixture {
            repo,
            player,
            appearance,
        }
    }

    impl Fixture {
        async fn record(&self) -> CharacterRecord {
            self.repo.get(self.player.id()).await.unwrap().unwrap()
        }
    }

    #[tokio::test]
    async fn set_clothing_writes_and_applies() {
        let fx = fixture(Some(CharacterRecord::new(Sex::Male)));
        let outfit = vec![ClothingComponent::clothing(0, 11, 5, 2)];

        let changed = fx.appearance.set_clothing(outfit.clone()).await.unwrap();

        assert!(changed);
        assert_eq!(fx.record().await.clothing, Some(outfit));
        assert_eq!(
            fx.player.commands().last(),
            Some(&PlayerCommand::SetDlcClothes {
                dlc: 0,
                slot: 11,
                drawable: 5,
                texture: 2,
                palette: 0,
            })
        );
    }

    #[tokio::test]
    async fn setters_without_character_return_false_and_do_nothing() {
        let fx = fixture(None);

        assert!(!fx.appearance.set_clothing(vec![]).await.unwrap());
        assert!(!fx.appearance.set_uniform(vec![]).await.unwrap());
        assert!(!fx.appearance.set_skin("s_m_y_cop_01").await.unwrap());
        assert!(!fx.appearance.clear_skin().await.unwrap());
        fx.appearance.clear_clothing().await.unwrap();
        fx.appearance.clear_uniform().await.unwrap();

        assert!(fx.player.commands().is_empty());
        assert!(fx.repo.is_empty());
    }

    #[tokio::test]
    async fn clear_clothing_leaves_only_base_clothes() {
        let fx = fixture(Some(
            CharacterRecord::new(Sex::Male)
                .with_clothing(vec![ClothingComponent::prop(0, 0, 46, 0)]),
        ));

        fx.appearance.clear_clothing().await.unwrap();

        let record = fx.record().await;
        assert_eq!(record.clothing, Some(vec![]));

        let expected = AppearancePlan::derive(
            &CharacterRecord::new(Sex::Male),
            ModelHash::new(0),
            &BaseModels::default(),
        );
        assert_eq!(fx.player.commands(), expected.into_commands());
    }

    #[tokio::test]
    async fn set_then_clear_uniform_matches_never_setting_it() {
        let fx = fixture(Some(CharacterRecord::new(Sex::Female)));
        let baseline = fixture(Some(CharacterRecord::new(Sex::Female)));
        baseline
            .appearance
            .update(RecordSource::Latest)
            .await
            .unwrap();

        assert!(fx.appearance.set_uniform(vec![]).await.unwrap());
        fx.appearance.clear_uniform().await.unwrap();
        fx.player.take_commands();
        fx.appearance.update(RecordSource::Latest).await.unwrap();

        assert_eq!(fx.record().await.uniform, None);
        // Compare passes where neither player changes model
        baseline.player.take_commands();
        baseline
            .appearance
            .update(RecordSource::Latest)
            .await
            .unwrap();
        assert_eq!(fx.player.commands(), baseline.player.commands());
    }

    #[tokio::test]
    async fn uniform_overrides_clothing_in_same_slot() {
        let fx = fixture(Some(
            CharacterRecord::new(Sex::Male)
                .with_clothing(vec![ClothingComponent::clothing(0, 11, 5, 2)]),
        ));

        fx.appearance
            .set_uniform(vec![ClothingComponent::clothing(0, 11, 55, 0)])
            .await
            .unwrap();

        let tops: Vec<u16> = fx
            .player
            .commands()
            .iter()
            .filter_map(|c| match c {
                PlayerCommand::SetDlcClothes {
                    slot: 11, drawable, ..
                } => Some(*drawable),
                _ => None,
            })
            .collect();
        assert_eq!(tops, vec![91, 5, 55]);
    }

    #[tokio::test]
    async fn set_skin_stores_hash_and_switches_model() {
        let fx = fixture(Some(
            CharacterRecord::new(Sex::Female)
                .with_clothing(vec![ClothingComponent::clothing(0, 11, 5, 2)]),
        ));
        let cop = ModelHash::from_name("s_m_y_cop_01");

        assert!(fx.appearance.set_skin("s_m_y_cop_01").await.unwrap());

        assert_eq!(fx.record().await.skin, Some(ModelRef::Hash(cop)));
        assert_eq!(fx.player.model(), cop);
        assert!(!fx
            .player
            .commands()
            .iter()
            .any(|c| matches!(c, PlayerCommand::SetDlcClothes { .. })));
    }

    #[tokio::test]
    async fn clear_skin_restores_base_model_and_clothes() {
        let cop = ModelHash::from_name("s_m_y_cop_01");
        let fx = fixture(Some(CharacterRecord::new(Sex::Male).with_skin(cop)));
        fx.appearance.update(RecordSource::Latest).await.unwrap();
        fx.player.take_commands();

        assert!(fx.appearance.clear_skin().await.unwrap());

        assert_eq!(fx.record().await.skin, None);
        assert_eq!(fx.player.model(), BaseModels::default().male);
        assert!(fx
            .player
            .commands()
            .iter()
            .any(|c| matches!(
                c,
                PlayerCommand::SetDlcClothes {
                    slot: 11,
                    drawable: 91,
                    ..
                }
            )));
    }

    #[tokio::test]
    async fn write_failure_propagates_without_applying() {
        let player_id = PlayerId::new();
        let player = Arc::new(RecordingPlayer::new(player_id));
        let mut repo = MockCharacterRepo::new();
        repo.expect_get()
            .returning(|_| Ok(Some(CharacterRecord::new(Sex::Male))));
        repo.expect_set_field()
            .withf(move |id, field| *id == player_id && field.name() == "clothing")
            .times(1)
            .returning(|_, _| Err(RepoError::database("set_field", "write rejected")));

        let appearance =
            PlayerAppearance::new(Arc::new(repo), player.clone(), BaseModels::default());
        let result = appearance.set_clothing(vec![]).await;

        assert!(matches!(result, Err(AppearanceError::Repo(_))));
        assert!(player.commands().is_empty());
    }

    #[tokio::test]
    async fn missing_character_skips_write() {
        let player = Arc::new(RecordingPlayer::new(PlayerId::new()));
        let mut repo = MockCharacterRepo::new();
        repo.expect_get().times(1).returning(|_| Ok(None));
        repo.expect_set_field().never();

        let appearance =
            PlayerAppearance::new(Arc::new(repo), player.clone(), BaseModels::default());

        assert!(!appearance.set_skin(0x5E3D_A4A4u32).await.unwrap());
    }
}
