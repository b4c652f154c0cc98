//! Repository port traits for character document access.

use async_trait::async_trait;
use wardrobe_domain::{CharacterField, CharacterRecord, PlayerId};

use super::error::RepoError;

// =============================================================================
// Character Documents
// =============================================================================

/// Character document store, keyed by the player the character is loaded for.
///
/// Writes replace one whole field and resolve once the store has accepted
/// them; a following `get` must observe the written value.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CharacterRepo: Send + Sync {
    /// Current snapshot of the player's character, `None` when no character is loaded.
    async fn get(&self, player_id: PlayerId) -> Result<Option<CharacterRecord>, RepoError>;

    /// Replace a single field of the player's character document.
    async fn set_field(&self, player_id: PlayerId, field: CharacterField)
        -> Result<(), RepoError>;
}
