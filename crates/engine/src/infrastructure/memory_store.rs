//! In-memory character document store.

use async_trait::async_trait;
use dashmap::DashMap;
use wardrobe_domain::{CharacterField, CharacterRecord, PlayerId};

use crate::infrastructure::ports::{CharacterRepo, RepoError};

/// Character documents held in memory, one per connected player.
///
/// Writes to a single player's document are serialized by the map shard lock.
#[derive(Default)]
pub struct InMemoryCharacterRepo {
    records: DashMap<PlayerId, CharacterRecord>,
}

impl InMemoryCharacterRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a character document to a player, replacing any previous one.
    pub fn insert(&self, player_id: PlayerId, record: CharacterRecord) {
        self.records.insert(player_id, record);
    }

    /// Unbind the player's character (character select, logout).
    pub fn remove(&self, player_id: PlayerId) -> Option<CharacterRecord> {
        self.records.remove(&player_id).map(|(_, record)| record)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl CharacterRepo for InMemoryCharacterRepo {
    async fn get(&self, player_id: PlayerId) -> Result<Option<CharacterRecord>, RepoError> {
        Ok(self
            .records
            .get(&player_id)
            .map(|record| record.value().clone()))
    }

    async fn set_field(&self, player_id: PlayerId, field: CharacterField) -> Result<(), RepoError> {
        let mut record = self
            .records
            .get_mut(&player_id)
            .ok_or_else(|| RepoError::not_found("CharacterRecord", player_id))?;

        tracing::trace!(%player_id, field = field.name(), "Writing character field");
        record.apply_field(field);
        Ok(())
    }
}
