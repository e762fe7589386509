use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::weight::Weight;

const POUNDS_PER_KILOGRAM: f64 = 2.204_62;

#[derive(
    Clone, Copy, Debug, Default, PartialEq, PartialOrd, Ord, Eq, Hash, Serialize, Deserialize,
)]
pub enum WeightUnit {
    Kilograms,
    #[default]
    Pounds,
}

impl WeightUnit {
    /// Plate sizes sold for this unit, lightest first.
    #[must_use]
    pub fn standard_plates(&self) -> Vec<Weight> {
        let units: &[f64] = match self {
            WeightUnit::Pounds => &[1.25, 2.5, 5.0, 10.0, 25.0, 35.0, 45.0, 55.0, 65.0, 100.0],
            WeightUnit::Kilograms => &[0.5, 1.25, 2.5, 5.0, 10.0, 15.0, 20.0, 25.0],
        };
        units.iter().copied().map(Weight::from_units).collect()
    }

    /// Plate sizes enabled out of the box; the uncommon sizes start disabled.
    #[must_use]
    pub fn default_selection(&self) -> Vec<Weight> {
        let units: &[f64] = match self {
            WeightUnit::Pounds => &[2.5, 5.0, 10.0, 25.0, 35.0, 45.0],
            WeightUnit::Kilograms => &[1.25, 2.5, 5.0, 10.0, 15.0, 20.0, 25.0],
        };
        units.iter().copied().map(Weight::from_units).collect()
    }

    #[must_use]
    pub fn default_bar_weight(&self) -> Weight {
        match self {
            WeightUnit::Pounds => Weight::from_units(45.0),
            WeightUnit::Kilograms => Weight::from_units(20.0),
        }
    }

    /// Step used when adjusting the bar weight up or down.
    #[must_use]
    pub fn bar_increment(&self) -> Weight {
        match self {
            WeightUnit::Pounds => Weight::from_units(5.0),
            WeightUnit::Kilograms => Weight::from_units(1.0),
        }
    }

    #[must_use]
    pub fn abbreviation(&self) -> &'static str {
        match self {
            WeightUnit::Pounds => "Lb",
            WeightUnit::Kilograms => "Kg",
        }
    }

    #[must_use]
    pub fn toggled(&self) -> Self {
        match self {
            WeightUnit::Pounds => WeightUnit::Kilograms,
            WeightUnit::Kilograms => WeightUnit::Pounds,
        }
    }

    #[must_use]
    pub fn convert(&self, weight: Weight, to: WeightUnit) -> Weight {
        match (self, to) {
            (WeightUnit::Pounds, WeightUnit::Kilograms) => {
                Weight::from_units(weight.as_units() / POUNDS_PER_KILOGRAM)
            }
            (WeightUnit::Kilograms, WeightUnit::Pounds) => {
                Weight::from_units(weight.as_units() * POUNDS_PER_KILOGRAM)
            }
            _ => weight,
        }
    }
}

impl Display for WeightUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WeightUnit::Kilograms => write!(f, "kg"),
            WeightUnit::Pounds => write!(f, "lb"),
        }
    }
}

impl FromStr for WeightUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "kg" | "kgs" | "kilogram" | "kilograms" => Ok(WeightUnit::Kilograms),
            "lb" | "lbs" | "pound" | "pounds" => Ok(WeightUnit::Pounds),
            _ => Err(format!("Invalid weight unit '{s}'.")),
        }
    }
}
