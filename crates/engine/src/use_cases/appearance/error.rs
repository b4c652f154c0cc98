//! Appearance operation errors.

use crate::infrastructure::ports::RepoError;

/// Errors that can occur while changing or applying a player's appearance.
///
/// A missing character or a disconnected player is not an error; those
/// operations quietly do nothing.
#[derive(Debug, thiserror::Error)]
pub enum AppearanceError {
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}
