use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{config_error::ConfigError, plate_config::PlateConfig, weight_unit::WeightUnit};

/// User settings: one plate configuration per unit and the unit in use.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(rename = "currentWeightType", default)]
    current_unit: WeightUnit,
    #[serde(default = "pounds_default")]
    pounds: PlateConfig,
    #[serde(default = "kilograms_default")]
    kilograms: PlateConfig,
}

fn pounds_default() -> PlateConfig {
    PlateConfig::standard(WeightUnit::Pounds)
}

fn kilograms_default() -> PlateConfig {
    PlateConfig::standard(WeightUnit::Kilograms)
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            current_unit: WeightUnit::default(),
            pounds: pounds_default(),
            kilograms: kilograms_default(),
        }
    }
}

impl Settings {
    #[must_use]
    pub fn current_unit(&self) -> WeightUnit {
        self.current_unit
    }

    #[must_use]
    pub fn current_config(&self) -> &PlateConfig {
        self.config(self.current_unit)
    }

    #[must_use]
    pub fn config(&self, unit: WeightUnit) -> &PlateConfig {
        match unit {
            WeightUnit::Pounds => &self.pounds,
            WeightUnit::Kilograms => &self.kilograms,
        }
    }

    #[must_use]
    pub fn with_current_unit(&self, current_unit: WeightUnit) -> Self {
        Settings {
            current_unit,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_unit_toggled(&self) -> Self {
        self.with_current_unit(self.current_unit.toggled())
    }

    /// Replaces the configuration for the unit `config` is tagged with.
    #[must_use]
    pub fn with_config(&self, config: PlateConfig) -> Self {
        match config.conversion_type() {
            WeightUnit::Pounds => Settings {
                pounds: config,
                ..self.clone()
            },
            WeightUnit::Kilograms => Settings {
                kilograms: config,
                ..self.clone()
            },
        }
    }

    ///
    /// # Errors
    /// If serialization fails.
    ///
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    ///
    /// # Errors
    /// If the document is not valid JSON or holds an invalid plate configuration.
    ///
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Settings = serde_json::from_str(json)?;
        debug!(unit = %settings.current_unit, "loaded settings");
        Ok(settings)
    }
}
