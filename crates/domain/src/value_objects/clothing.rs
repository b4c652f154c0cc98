//! Clothing components - single wearable slot assignments
//!
//! A component is either a layered DLC clothing mesh (shirt, pants, shoes)
//! or a rigid prop attached to the ped (hats, glasses, watches). The two
//! address different slot numbering spaces and only clothing carries a
//! palette, so they are separate variants rather than one struct with a flag.
//!
//! Character documents keep the flat shape
//! `{ "isProp": bool, "dlc", "id", "drawable", "texture", "palette"? }`;
//! conversion happens through [`ClothingComponentRecord`].

use serde::{Deserialize, Serialize};

/// A single clothing or prop assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "ClothingComponentRecord", into = "ClothingComponentRecord")]
pub enum ClothingComponent {
    /// Rigid attached prop.
    Prop {
        dlc: u32,
        id: u8,
        drawable: u16,
        texture: u8,
    },
    /// Layered DLC clothing.
    Clothing {
        dlc: u32,
        id: u8,
        drawable: u16,
        texture: u8,
        palette: u8,
    },
}

impl ClothingComponent {
    pub fn prop(dlc: u32, id: u8, drawable: u16, texture: u8) -> Self {
        Self::Prop {
            dlc,
            id,
            drawable,
            texture,
        }
    }

    /// Clothing with the default palette.
    pub fn clothing(dlc: u32, id: u8, drawable: u16, texture: u8) -> Self {
        Self::Clothing {
            dlc,
            id,
            drawable,
            texture,
            palette: 0,
        }
    }

    /// Replace the palette. Props have no palette and are returned unchanged.
    pub fn with_palette(self, palette: u8) -> Self {
        match self {
            Self::Clothing {
                dlc,
                id,
                drawable,
                texture,
                ..
            } => Self::Clothing {
                dlc,
                id,
                drawable,
                texture,
                palette,
            },
            prop @ Self::Prop { .. } => prop,
        }
    }

    pub fn is_prop(&self) -> bool {
        matches!(self, Self::Prop { .. })
    }
}

/// Document shape of a clothing component.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClothingComponentRecord {
    #[serde(default)]
    pub is_prop: bool,
    pub dlc: u32,
    pub id: u8,
    pub drawable: u16,
    pub texture: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub palette: Option<u8>,
}

impl From<ClothingComponentRecord> for ClothingComponent {
    fn from(record: ClothingComponentRecord) -> Self {
        if record.is_prop {
            Self::Prop {
                dlc: record.dlc,
                id: record.id,
                drawable: record.drawable,
                texture: record.texture,
            }
        } else {
            Self::Clothing {
                dlc: record.dlc,
                id: record.id,
                drawable: record.drawable,
                texture: record.texture,
                palette: record.palette.unwrap_or(0),
            }
        }
    }
}

impl From<ClothingComponent> for ClothingComponentRecord {
    fn from(component: ClothingComponent) -> Self {
        match component {
            ClothingComponent::Prop {
                dlc,
                id,
                drawable,
                texture,
            } => Self {
                is_prop: true,
                dlc,
                id,
                drawable,
                texture,
                palette: None,
            },
            ClothingComponent::Clothing {
                dlc,
                id,
                drawable,
                texture,
                palette,
            } => Self {
                is_prop: false,
                dlc,
                id,
                drawable,
                texture,
                palette: Some(palette),
            },
        }
    }
}
