use std::str::FromStr;

use crate::{weight::Weight, weight_unit::WeightUnit};

/// A requested total bar weight, optionally tagged with the unit it was typed in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Target {
    pub weight: f64,
    pub unit: Option<WeightUnit>,
}

impl Target {
    #[must_use]
    pub fn new(weight: f64, unit: Option<WeightUnit>) -> Self {
        Target { weight, unit }
    }

    /// The target expressed in `unit`; untagged targets are taken as already in `unit`.
    ///
    /// Stays an `f64` so that invalid targets still reach the solver and get reported as such.
    #[must_use]
    pub fn in_unit(&self, unit: WeightUnit) -> f64 {
        match self.unit {
            Some(from) if from != unit && self.weight > 0.0 => {
                from.convert(Weight::from_units(self.weight), unit).as_units()
            }
            _ => self.weight,
        }
    }
}

/// Parses `225`, `225lb` or `100kg`.
impl FromStr for Target {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let split = s
            .find(|c: char| c.is_ascii_alphabetic())
            .unwrap_or(s.len());
        let (weight, unit) = s.split_at(split);

        let weight = weight
            .trim()
            .parse::<f64>()
            .map_err(|_| "Invalid weight".to_string())?;
        let unit = match unit.trim() {
            "" => None,
            unit => Some(WeightUnit::from_str(unit)?),
        };

        Ok(Target { weight, unit })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_and_tagged_targets() {
        assert_eq!("225".parse::<Target>(), Ok(Target::new(225.0, None)));
        assert_eq!(
            "100kg".parse::<Target>(),
            Ok(Target::new(100.0, Some(WeightUnit::Kilograms)))
        );
        assert_eq!(
            "137.5 lbs".parse::<Target>(),
            Ok(Target::new(137.5, Some(WeightUnit::Pounds)))
        );
        assert_eq!("-5".parse::<Target>(), Ok(Target::new(-5.0, None)));
        assert!("heavy".parse::<Target>().is_err());
        assert!("100st".parse::<Target>().is_err());
    }

    #[test]
    fn converts_into_the_config_unit() {
        let target = Target::new(100.0, Some(WeightUnit::Kilograms));

        assert_eq!(target.in_unit(WeightUnit::Kilograms), 100.0);
        assert_eq!(target.in_unit(WeightUnit::Pounds), 220.462);
        assert_eq!(Target::new(135.0, None).in_unit(WeightUnit::Kilograms), 135.0);
    }
}
