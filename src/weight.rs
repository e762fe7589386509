use std::{
    fmt::Display,
    iter::Sum,
    ops::{Add, Mul, Sub},
};

use serde::{Deserialize, Serialize};

const THOUSANDTHS_PER_UNIT: f64 = 1000.0;
// Steps per thousandth; halving any weight entered in thousandths stays exact.
const STEPS: i64 = 2;
const STEPS_PER_UNIT: f64 = 2000.0;

/// A fixed-point weight, resolved to half a thousandth of a unit.
///
/// All plate arithmetic happens on the integer representation so values such
/// as `2.5` and `1.25` divide and subtract without floating point residue.
/// Conversion from `f64` rounds to the nearest thousandth, so the half step is
/// only ever reached by halving a loaded weight into its two sides.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, PartialOrd, Ord, Eq, Hash, Serialize, Deserialize,
)]
#[serde(from = "f64", into = "f64")]
pub struct Weight(i64);

impl Weight {
    pub const ZERO: Weight = Weight(0);

    #[must_use]
    pub const fn from_thousandths(thousandths: i64) -> Self {
        Weight(thousandths.saturating_mul(STEPS))
    }

    /// Non-finite input maps to zero for NaN and saturates for infinities.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_units(units: f64) -> Self {
        let thousandths = (units * THOUSANDTHS_PER_UNIT).round() as i64;
        Weight::from_thousandths(thousandths)
    }

    /// Whole thousandths, truncating a trailing half step.
    #[must_use]
    pub fn thousandths(self) -> i64 {
        self.0 / STEPS
    }

    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_units(self) -> f64 {
        self.0 as f64 / STEPS_PER_UNIT
    }

    #[must_use]
    pub fn is_positive(self) -> bool {
        self.0 > 0
    }

    #[must_use]
    pub fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Half of the weight. Exact for anything built from units or thousandths.
    #[must_use]
    pub fn half(self) -> Self {
        Weight(self.0 / 2)
    }

    /// How many whole `plate`s fit into this weight. Zero when either side is not positive.
    #[must_use]
    pub fn fits(self, plate: Weight) -> usize {
        if !self.is_positive() || !plate.is_positive() {
            return 0;
        }
        usize::try_from(self.0 / plate.0).unwrap_or(usize::MAX)
    }

    /// What is left of this weight after removing as many whole `plate`s as fit.
    #[must_use]
    pub fn remainder(self, plate: Weight) -> Self {
        if !self.is_positive() || !plate.is_positive() {
            return self;
        }
        Weight(self.0 % plate.0)
    }
}

impl Add for Weight {
    type Output = Weight;

    fn add(self, rhs: Self) -> Self::Output {
        Weight(self.0.saturating_add(rhs.0))
    }
}

impl Sub for Weight {
    type Output = Weight;

    fn sub(self, rhs: Self) -> Self::Output {
        Weight(self.0.saturating_sub(rhs.0))
    }
}

impl Mul<usize> for Weight {
    type Output = Weight;

    fn mul(self, rhs: usize) -> Self::Output {
        Weight(self.0.saturating_mul(i64::try_from(rhs).unwrap_or(i64::MAX)))
    }
}

impl Sum for Weight {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Weight::ZERO, |acc, weight| acc + weight)
    }
}

impl From<f64> for Weight {
    fn from(units: f64) -> Self {
        Weight::from_units(units)
    }
}

impl From<Weight> for f64 {
    fn from(weight: Weight) -> Self {
        weight.as_units()
    }
}

impl Display for Weight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.as_units(), f)
    }
}
