use std::collections::{BTreeSet, HashSet};

use serde::{Deserialize, Serialize};

use crate::{config_error::ConfigError, plate::Plate, weight::Weight, weight_unit::WeightUnit};

/// Everything the solver needs besides the target weight.
///
/// Values are immutable: every update returns a new config, and the
/// constructor plus deserialization both reject catalogs with non-positive or
/// repeated plate sizes and negative bar weights.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawPlateConfig")]
pub struct PlateConfig {
    available_plates: Vec<Plate>,
    conversion_type: WeightUnit,
    barbell_weight: Weight,
    use_limited_plates: bool,
    selected_plates: BTreeSet<Weight>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPlateConfig {
    available_plates: Vec<Plate>,
    #[serde(default)]
    conversion_type: WeightUnit,
    barbell_weight: Weight,
    #[serde(default)]
    use_limited_plates: bool,
    #[serde(default)]
    selected_plates: Vec<Weight>,
}

impl TryFrom<RawPlateConfig> for PlateConfig {
    type Error = ConfigError;

    fn try_from(raw: RawPlateConfig) -> Result<Self, Self::Error> {
        PlateConfig::new(
            raw.available_plates,
            raw.barbell_weight,
            raw.selected_plates,
            raw.use_limited_plates,
            raw.conversion_type,
        )
    }
}

impl PlateConfig {
    ///
    /// # Errors
    /// If a plate size is not positive or repeated, or the bar weight is negative.
    ///
    pub fn new(
        available_plates: Vec<Plate>,
        barbell_weight: Weight,
        selected_plates: impl IntoIterator<Item = Weight>,
        use_limited_plates: bool,
        conversion_type: WeightUnit,
    ) -> Result<Self, ConfigError> {
        let mut seen = HashSet::new();
        for plate in &available_plates {
            if !plate.weight().is_positive() {
                return Err(ConfigError::NonPositivePlate(plate.weight()));
            }
            if !seen.insert(plate.weight()) {
                return Err(ConfigError::DuplicatePlate(plate.weight()));
            }
        }

        if barbell_weight.is_negative() {
            return Err(ConfigError::NegativeBarWeight(barbell_weight));
        }

        let selected_plates = selected_plates.into_iter().collect::<BTreeSet<_>>();
        if let Some(weight) = selected_plates.iter().find(|w| !w.is_positive()) {
            return Err(ConfigError::NonPositivePlate(*weight));
        }

        Ok(PlateConfig {
            available_plates,
            conversion_type,
            barbell_weight,
            use_limited_plates,
            selected_plates,
        })
    }

    /// The standard catalog for `unit` with nothing owned and the common sizes enabled.
    #[must_use]
    pub fn standard(unit: WeightUnit) -> Self {
        PlateConfig {
            available_plates: Plate::from_weights(unit.standard_plates(), 0),
            conversion_type: unit,
            barbell_weight: unit.default_bar_weight(),
            use_limited_plates: false,
            selected_plates: unit.default_selection().into_iter().collect(),
        }
    }

    #[must_use]
    pub fn available_plates(&self) -> &[Plate] {
        &self.available_plates
    }

    #[must_use]
    pub fn barbell_weight(&self) -> Weight {
        self.barbell_weight
    }

    #[must_use]
    pub fn selected_plates(&self) -> &BTreeSet<Weight> {
        &self.selected_plates
    }

    #[must_use]
    pub fn is_selected(&self, weight: Weight) -> bool {
        self.selected_plates.contains(&weight)
    }

    #[must_use]
    pub fn use_limited_plates(&self) -> bool {
        self.use_limited_plates
    }

    #[must_use]
    pub fn conversion_type(&self) -> WeightUnit {
        self.conversion_type
    }

    ///
    /// # Errors
    /// If `barbell_weight` is negative.
    ///
    pub fn with_barbell_weight(&self, barbell_weight: Weight) -> Result<Self, ConfigError> {
        if barbell_weight.is_negative() {
            return Err(ConfigError::NegativeBarWeight(barbell_weight));
        }
        Ok(PlateConfig {
            barbell_weight,
            ..self.clone()
        })
    }

    #[must_use]
    pub fn with_bar_incremented(&self) -> Self {
        PlateConfig {
            barbell_weight: self.barbell_weight + self.conversion_type.bar_increment(),
            ..self.clone()
        }
    }

    /// Steps the bar weight down, stopping at zero.
    #[must_use]
    pub fn with_bar_decremented(&self) -> Self {
        let lowered = self.barbell_weight - self.conversion_type.bar_increment();
        PlateConfig {
            barbell_weight: lowered.max(Weight::ZERO),
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_limited_plates(&self, use_limited_plates: bool) -> Self {
        PlateConfig {
            use_limited_plates,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_plate_selected(&self, weight: Weight, selected: bool) -> Self {
        let mut selected_plates = self.selected_plates.clone();
        if selected && weight.is_positive() {
            selected_plates.insert(weight);
        } else {
            selected_plates.remove(&weight);
        }
        PlateConfig {
            selected_plates,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_plate_toggled(&self, weight: Weight) -> Self {
        self.with_plate_selected(weight, !self.is_selected(weight))
    }

    /// Sets how many plates of `weight` are owned, adding the size to the catalog if needed.
    ///
    /// # Errors
    /// If `weight` is not positive.
    ///
    pub fn with_plate_amount(&self, weight: Weight, amount: usize) -> Result<Self, ConfigError> {
        if !weight.is_positive() {
            return Err(ConfigError::NonPositivePlate(weight));
        }

        let mut available_plates = self.available_plates.clone();
        match available_plates.iter_mut().find(|p| p.weight() == weight) {
            Some(plate) => *plate = plate.with_amount(amount),
            None => available_plates.push(Plate::new(weight, amount)),
        }

        Ok(PlateConfig {
            available_plates,
            ..self.clone()
        })
    }

    ///
    /// # Errors
    /// If any plate weight is not positive.
    ///
    pub fn with_plates_owned(
        &self,
        plates: impl IntoIterator<Item = Plate>,
    ) -> Result<Self, ConfigError> {
        plates.into_iter().try_fold(self.clone(), |config, plate| {
            config.with_plate_amount(plate.weight(), plate.amount())
        })
    }
}

impl Default for PlateConfig {
    fn default() -> Self {
        PlateConfig::standard(WeightUnit::Pounds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lb(units: f64) -> Weight {
        Weight::from_units(units)
    }

    #[test]
    fn rejects_duplicate_plates() {
        let result = PlateConfig::new(
            vec![Plate::new(lb(45.0), 2), Plate::new(lb(45.0), 4)],
            lb(45.0),
            [],
            false,
            WeightUnit::Pounds,
        );
        assert!(matches!(result, Err(ConfigError::DuplicatePlate(w)) if w == lb(45.0)));
    }

    #[test]
    fn rejects_non_positive_plates() {
        let result = PlateConfig::new(
            vec![Plate::new(Weight::ZERO, 2)],
            lb(45.0),
            [],
            false,
            WeightUnit::Pounds,
        );
        assert!(matches!(result, Err(ConfigError::NonPositivePlate(_))));
    }

    #[test]
    fn rejects_negative_bar() {
        let result = PlateConfig::new(vec![], lb(-1.0), [], false, WeightUnit::Pounds);
        assert!(matches!(result, Err(ConfigError::NegativeBarWeight(_))));

        let config = PlateConfig::default();
        assert!(config.with_barbell_weight(lb(-5.0)).is_err());
        assert_eq!(config.barbell_weight(), lb(45.0));
    }

    #[test]
    fn bar_steps_by_unit_and_stops_at_zero() {
        let pounds = PlateConfig::standard(WeightUnit::Pounds);
        assert_eq!(pounds.with_bar_incremented().barbell_weight(), lb(50.0));

        let kilograms = PlateConfig::standard(WeightUnit::Kilograms);
        assert_eq!(kilograms.with_bar_decremented().barbell_weight(), lb(19.0));

        let light = pounds.with_barbell_weight(lb(3.0)).unwrap();
        assert_eq!(light.with_bar_decremented().barbell_weight(), Weight::ZERO);
    }

    #[test]
    fn updates_leave_the_original_untouched() {
        let original = PlateConfig::default();
        let updated = original
            .with_limited_plates(true)
            .with_plate_toggled(lb(45.0))
            .with_plate_amount(lb(45.0), 4)
            .unwrap();

        assert_eq!(original, PlateConfig::default());
        assert!(updated.use_limited_plates());
        assert!(!updated.is_selected(lb(45.0)));
        assert!(original.is_selected(lb(45.0)));
        assert_eq!(
            updated
                .available_plates()
                .iter()
                .find(|p| p.weight() == lb(45.0))
                .map(Plate::amount),
            Some(4)
        );
    }

    #[test]
    fn owning_a_new_size_adds_it_to_the_catalog() {
        let config = PlateConfig::default()
            .with_plates_owned([Plate::new(lb(0.5), 2), Plate::new(lb(45.0), 6)])
            .unwrap();

        assert_eq!(config.available_plates().len(), 11);
        assert!(config.available_plates().contains(&Plate::new(lb(0.5), 2)));
        assert!(config.available_plates().contains(&Plate::new(lb(45.0), 6)));
    }

    #[test]
    fn sets_serialize_as_arrays() {
        let config = PlateConfig::new(
            vec![Plate::new(lb(45.0), 2), Plate::new(lb(25.0), 0)],
            lb(45.0),
            [lb(45.0), lb(25.0)],
            false,
            WeightUnit::Pounds,
        )
        .unwrap();

        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "availablePlates": [{"type": 45.0, "amount": 2}, {"type": 25.0, "amount": 0}],
                "conversionType": "Pounds",
                "barbellWeight": 45.0,
                "useLimitedPlates": false,
                "selectedPlates": [25.0, 45.0],
            })
        );

        let restored: PlateConfig = serde_json::from_value(json).unwrap();
        assert_eq!(restored, config);
    }

    #[test]
    fn deserialization_validates() {
        let json = r#"{"availablePlates":[{"type":5,"amount":1},{"type":5,"amount":2}],"barbellWeight":45}"#;
        let error = serde_json::from_str::<PlateConfig>(json).unwrap_err();
        assert!(error.to_string().contains("more than once"));
    }
}
