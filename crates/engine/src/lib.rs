//! Wardrobe Engine library.
//!
//! Applies persisted character appearance (model, base clothes, outfit,
//! uniform) to live player entities of the host game engine.
//!
//! ## Structure
//!
//! - `use_cases/` - Appearance setters and the apply pass
//! - `infrastructure/` - Port traits and their adapters
//! - `app` - Application composition

pub mod app;
pub mod infrastructure;
pub mod use_cases;

pub use app::App;
