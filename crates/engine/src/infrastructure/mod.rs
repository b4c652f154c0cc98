//! Infrastructure implementations.
//!
//! Contains port trait implementations for external dependencies.

pub mod app_settings;
pub mod character_file;
pub mod memory_store;
pub mod ports;
pub mod recording_player;
