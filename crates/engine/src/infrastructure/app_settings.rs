//! Application settings
//!
//! Settings are read from the process environment (after `.env` has been
//! loaded by the binary). Every setting has a default so an empty
//! environment yields a working configuration.
//!
//! | Variable | Default |
//! |---|---|
//! | `WARDROBE_FEMALE_MODEL` | `mp_f_freemode_01` |
//! | `WARDROBE_MALE_MODEL` | `mp_m_freemode_01` |
//!
//! Model values may be names or hashes (decimal or `0x` hex).

use serde::{Deserialize, Serialize};
use wardrobe_domain::{
    BaseModels, DomainError, ModelRef, FEMALE_FREEMODE_MODEL, MALE_FREEMODE_MODEL,
};

pub const FEMALE_MODEL_VAR: &str = "WARDROBE_FEMALE_MODEL";
pub const MALE_MODEL_VAR: &str = "WARDROBE_MALE_MODEL";

fn default_female_base_model() -> ModelRef {
    ModelRef::from(FEMALE_FREEMODE_MODEL)
}

fn default_male_base_model() -> ModelRef {
    ModelRef::from(MALE_FREEMODE_MODEL)
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Invalid value for {var}: {source}")]
    InvalidValue {
        var: &'static str,
        #[source]
        source: DomainError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppSettings {
    /// Model used for female characters without a skin override
    #[serde(default = "default_female_base_model")]
    pub female_base_model: ModelRef,
    /// Model used for male characters without a skin override
    #[serde(default = "default_male_base_model")]
    pub male_base_model: ModelRef,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            female_base_model: default_female_base_model(),
            male_base_model: default_male_base_model(),
        }
    }
}

impl AppSettings {
    /// Load settings from the process environment.
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load settings through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SettingsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();

        if let Some(value) = lookup(FEMALE_MODEL_VAR) {
            settings.female_base_model = parse_model(FEMALE_MODEL_VAR, &value)?;
        }
        if let Some(value) = lookup(MALE_MODEL_VAR) {
            settings.male_base_model = parse_model(MALE_MODEL_VAR, &value)?;
        }

        Ok(settings)
    }

    /// Resolved base models.
    pub fn base_models(&self) -> BaseModels {
        BaseModels::new(
            self.female_base_model.resolve(),
            self.male_base_model.resolve(),
        )
    }
}

fn parse_model(var: &'static str, value: &str) -> Result<ModelRef, SettingsError> {
    value
        .parse()
        .map_err(|source| SettingsError::InvalidValue { var, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use wardrobe_domain::ModelHash;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_uses_freemode_models() {
        let settings = AppSettings::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(settings, AppSettings::default());
        assert_eq!(settings.base_models(), BaseModels::default());
    }

    #[test]
    fn overrides_accept_names_and_hashes() {
        let settings = AppSettings::from_lookup(lookup_from(&[
            (FEMALE_MODEL_VAR, "s_f_y_cop_01"),
            (MALE_MODEL_VAR, "0x5E3DA4A4"),
        ]))
        .unwrap();

        let models = settings.base_models();
        assert_eq!(models.female, ModelHash::from_name("s_f_y_cop_01"));
        assert_eq!(models.male, ModelHash::from_name("s_m_y_cop_01"));
    }

    #[test]
    fn blank_override_is_rejected() {
        let result = AppSettings::from_lookup(lookup_from(&[(MALE_MODEL_VAR, "  ")]));

        assert!(matches!(
            result,
            Err(SettingsError::InvalidValue {
                var: MALE_MODEL_VAR,
                ..
            })
        ));
    }

    #[test]
    fn deserializes_with_defaults() {
        let settings: AppSettings =
            serde_json::from_str(r#"{ "male_base_model": 1581098148 }"#).unwrap();

        assert_eq!(settings.female_base_model, default_female_base_model());
        assert_eq!(settings.male_base_model.resolve(), ModelHash::new(1_581_098_148));
    }
}
