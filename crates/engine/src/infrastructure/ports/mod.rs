//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - Character document storage (could swap in-memory -> MongoDB)
//! - The host game engine's player entity

mod error;
mod player;
mod repos;

// =============================================================================
// Repository Ports
// =============================================================================
pub use repos::CharacterRepo;

// =============================================================================
// Host Engine Ports
// =============================================================================
pub use player::PlayerEntity;

// =============================================================================
// Test-Only Mocks (only available during test builds)
// =============================================================================
#[cfg(test)]
pub use player::MockPlayerEntity;
#[cfg(test)]
pub use repos::MockCharacterRepo;

// =============================================================================
// Error Types
// =============================================================================
pub use error::RepoError;
