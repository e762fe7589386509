use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::weight::Weight;

/// A plate size and a count.
///
/// In a catalog the count is the number of plates owned across both sides of
/// the bar. In a solution it is the number loaded on one side.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Ord, Eq, Hash, Serialize, Deserialize)]
pub struct Plate {
    #[serde(rename = "type")]
    weight: Weight,
    amount: usize,
}

impl Plate {
    #[must_use]
    pub fn new(weight: Weight, amount: usize) -> Self {
        Plate { weight, amount }
    }

    #[must_use]
    pub fn weight(&self) -> Weight {
        self.weight
    }

    #[must_use]
    pub fn amount(&self) -> usize {
        self.amount
    }

    /// Combined weight of every plate counted.
    #[must_use]
    pub fn total(&self) -> Weight {
        self.weight * self.amount
    }

    #[must_use]
    pub fn with_amount(&self, amount: usize) -> Self {
        Plate::new(self.weight, amount)
    }

    #[must_use]
    pub fn from_weights(weights: Vec<Weight>, amount: usize) -> Vec<Plate> {
        weights.into_iter().map(|w| Plate::new(w, amount)).collect()
    }
}

impl Display for Plate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} x {}", self.amount, self.weight)
    }
}

/// Parses `45x4` or `45:4`, a plate size and the number owned.
impl FromStr for Plate {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (weight, amount) = s
            .split_once(['x', 'X', ':'])
            .ok_or_else(|| format!("Expected TYPExCOUNT, got '{s}'"))?;
        let weight = weight
            .trim()
            .parse::<f64>()
            .map_err(|_| "Invalid plate weight".to_string())?;
        let amount = amount
            .trim()
            .parse::<usize>()
            .map_err(|_| "Invalid plate count".to_string())?;
        if !weight.is_finite() || weight <= 0.0 {
            return Err("Plate weight must be positive".to_string());
        }
        Ok(Plate::new(Weight::from_units(weight), amount))
    }
}
