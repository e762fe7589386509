use std::fmt::Display;

use itertools::Itertools;

use crate::{plate::Plate, weight::Weight};

const INVALID_LEFTOVER: Weight = Weight::from_thousandths(-1000);

/// The plates to load on one side of the bar, heaviest first, and the part of
/// the per-side target they could not cover.
///
/// An invalid target is reported as no plate list and a leftover of `-1`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    plates: Option<Vec<Plate>>,
    leftover: Weight,
}

impl Solution {
    #[must_use]
    pub fn new(plates: Vec<Plate>, leftover: Weight) -> Self {
        Solution {
            plates: Some(plates),
            leftover,
        }
    }

    #[must_use]
    pub fn invalid() -> Self {
        Solution {
            plates: None,
            leftover: INVALID_LEFTOVER,
        }
    }

    #[must_use]
    pub fn is_invalid(&self) -> bool {
        self.plates.is_none()
    }

    /// True when the plates cover the target with nothing left over.
    #[must_use]
    pub fn is_exact(&self) -> bool {
        !self.is_invalid() && self.leftover == Weight::ZERO
    }

    #[must_use]
    pub fn plates(&self) -> Option<&[Plate]> {
        self.plates.as_deref()
    }

    #[must_use]
    pub fn leftover(&self) -> Weight {
        self.leftover
    }

    #[must_use]
    pub fn leftover_weight(&self) -> f64 {
        self.leftover.as_units()
    }

    /// Weight of the plates on one side.
    #[must_use]
    pub fn per_side(&self) -> Weight {
        self.iter().map(Plate::total).sum()
    }

    #[must_use]
    pub fn plate_count(&self) -> usize {
        self.iter().map(Plate::amount).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Plate> {
        self.plates.iter().flatten()
    }
}

impl Display for Solution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.plates {
            None => write!(f, "invalid target"),
            Some(plates) if plates.is_empty() => write!(f, "[] (leftover {})", self.leftover),
            Some(plates) => write!(
                f,
                "[{}] (leftover {})",
                plates.iter().join(", "),
                self.leftover
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_is_distinct_from_zero_leftover() {
        let invalid = Solution::invalid();
        let empty = Solution::new(vec![], Weight::ZERO);

        assert!(invalid.is_invalid());
        assert_eq!(invalid.leftover_weight(), -1.0);
        assert!(!empty.is_invalid());
        assert!(empty.is_exact());
        assert_ne!(invalid, empty);
    }

    #[test]
    fn sums_one_side() {
        let solution = Solution::new(
            vec![
                Plate::new(Weight::from_units(45.0), 2),
                Plate::new(Weight::from_units(2.5), 1),
            ],
            Weight::ZERO,
        );

        assert_eq!(solution.per_side(), Weight::from_units(92.5));
        assert_eq!(solution.plate_count(), 3);
        assert_eq!(solution.to_string(), "[2 x 45, 1 x 2.5] (leftover 0)");
    }
}
