//! Player entity port - the live ped exposed by the host game engine.

use wardrobe_domain::{ModelHash, PlayerId};

/// Handle to a connected player's in-game entity.
///
/// Every setter is fire-and-forget: the host applies it synchronously to the
/// live visual representation and reports nothing back.
#[cfg_attr(test, mockall::automock)]
pub trait PlayerEntity: Send + Sync {
    fn id(&self) -> PlayerId;

    /// False once the player has disconnected or the entity was destroyed.
    fn is_valid(&self) -> bool;

    fn model(&self) -> ModelHash;
    fn set_model(&self, model: ModelHash);

    fn clear_prop(&self, slot: u8);
    fn set_dlc_prop(&self, dlc: u32, slot: u8, drawable: u16, texture: u8);
    fn set_dlc_clothes(&self, dlc: u32, slot: u8, drawable: u16, texture: u8, palette: u8);
}
