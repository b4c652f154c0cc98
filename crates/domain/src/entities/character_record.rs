//! Character record - the persisted document fields that drive appearance
//!
//! Only the appearance-relevant part of the character document is modelled.
//! Any other document fields are ignored on deserialization.

use serde::{Deserialize, Serialize};

use crate::value_objects::{ClothingComponent, ModelHash, ModelRef, Sex};

/// Body appearance settings chosen at character creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appearance {
    pub sex: Sex,
}

/// Appearance fields of a character document.
///
/// `clothing` distinguishes "never set" (`None`) from "cleared"
/// (`Some(vec![])`); both apply identically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterRecord {
    pub appearance: Appearance,
    /// Custom ped model. When present it replaces the whole appearance.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skin: Option<ModelRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clothing: Option<Vec<ClothingComponent>>,
    /// Job or role outfit layered over `clothing`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uniform: Option<Vec<ClothingComponent>>,
}

impl CharacterRecord {
    pub fn new(sex: Sex) -> Self {
        Self {
            appearance: Appearance { sex },
            skin: None,
            clothing: None,
            uniform: None,
        }
    }

    pub fn with_skin(mut self, skin: impl Into<ModelRef>) -> Self {
        self.skin = Some(skin.into());
        self
    }

    pub fn with_clothing(mut self, clothing: Vec<ClothingComponent>) -> Self {
        self.clothing = Some(clothing);
        self
    }

    pub fn with_uniform(mut self, uniform: Vec<ClothingComponent>) -> Self {
        self.uniform = Some(uniform);
        self
    }

    pub fn sex(&self) -> Sex {
        self.appearance.sex
    }

    /// Replace one whole field.
    pub fn apply_field(&mut self, field: CharacterField) {
        match field {
            CharacterField::Uniform(uniform) => self.uniform = uniform,
            CharacterField::Clothing(clothing) => self.clothing = Some(clothing),
            CharacterField::Skin(skin) => self.skin = skin.map(ModelRef::Hash),
        }
    }
}

/// A whole-field write to a character document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CharacterField {
    /// `None` removes the uniform.
    Uniform(Option<Vec<ClothingComponent>>),
    /// An empty list clears the outfit.
    Clothing(Vec<ClothingComponent>),
    /// Skins are always written already resolved to a hash.
    Skin(Option<ModelHash>),
}

impl CharacterField {
    /// Document field name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Uniform(_) => "uniform",
            Self::Clothing(_) => "clothing",
            Self::Skin(_) => "skin",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_document_ignores_other_fields() {
        let record: CharacterRecord = serde_json::from_value(json!({
            "_id": "65f0c0ffee",
            "name": "Jane_Doe",
            "cash": 250,
            "appearance": { "sex": 0, "hairDlc": 0, "faceMix": 0.5 },
            "clothing": [
                { "isProp": false, "dlc": 0, "id": 11, "drawable": 5, "texture": 2 }
            ]
        }))
        .unwrap();

        assert_eq!(record.sex(), Sex::Female);
        assert_eq!(record.skin, None);
        assert_eq!(
            record.clothing,
            Some(vec![ClothingComponent::clothing(0, 11, 5, 2)])
        );
        assert_eq!(record.uniform, None);
    }

    #[test]
    fn test_skin_may_be_name_or_hash() {
        let by_name: CharacterRecord = serde_json::from_value(json!({
            "appearance": { "sex": 1 }, "skin": "s_m_y_cop_01"
        }))
        .unwrap();
        let by_hash: CharacterRecord = serde_json::from_value(json!({
            "appearance": { "sex": 1 }, "skin": 0x5E3D_A4A4u32
        }))
        .unwrap();

        let name_skin = by_name.skin.as_ref().map(ModelRef::resolve);
        let hash_skin = by_hash.skin.as_ref().map(ModelRef::resolve);
        assert_eq!(name_skin, hash_skin);
        assert!(name_skin.is_some());
    }

    #[test]
    fn test_signed_and_float_skins_resolve_like_unsigned() {
        let unsigned = ModelHash::from_name("mp_f_freemode_01");
        for raw in [r#"-1667301416"#, r#"2627665880.0"#, r#"2627665880"#] {
            let json = format!(r#"{{"appearance":{{"sex":0}},"skin":{}}}"#, raw);
            let record: CharacterRecord = serde_json::from_str(&json).unwrap();
            assert_eq!(record.skin.as_ref().map(ModelRef::resolve), Some(unsigned));
        }
    }

    #[test]
    fn test_absent_fields_are_not_serialized() {
        let value = serde_json::to_value(CharacterRecord::new(Sex::Male)).unwrap();
        assert_eq!(value, json!({ "appearance": { "sex": 1 } }));
    }

    #[test]
    fn test_apply_clothing_field_empty_is_cleared_not_absent() {
        let mut record = CharacterRecord::new(Sex::Male);
        record.apply_field(CharacterField::Clothing(vec![]));
        assert_eq!(record.clothing, Some(vec![]));
    }

    #[test]
    fn test_apply_uniform_none_removes_uniform() {
        let mut record = CharacterRecord::new(Sex::Female)
            .with_uniform(vec![ClothingComponent::clothing(0, 11, 55, 0)]);
        record.apply_field(CharacterField::Uniform(None));
        assert_eq!(record.uniform, None);
    }

    #[test]
    fn test_apply_skin_stores_hash() {
        let mut record = CharacterRecord::new(Sex::Female).with_skin("a_c_chimp");
        let hash = ModelHash::new(0x5E3D_A4A4);
        record.apply_field(CharacterField::Skin(Some(hash)));
        assert_eq!(record.skin, Some(ModelRef::Hash(hash)));

        record.apply_field(CharacterField::Skin(None));
        assert_eq!(record.skin, None);
    }

    #[test]
    fn test_field_names_match_document() {
        assert_eq!(CharacterField::Uniform(None).name(), "uniform");
        assert_eq!(CharacterField::Clothing(vec![]).name(), "clothing");
        assert_eq!(CharacterField::Skin(None).name(), "skin");
    }
}
