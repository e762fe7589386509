use itertools::Itertools;
use tracing::{debug, trace};

use crate::{plate::Plate, plate_config::PlateConfig, solution::Solution, weight::Weight};

/// Plates are loaded in pairs, one per side of the bar.
const SIDES: usize = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Candidate {
    weight: Weight,
    // None when the supply is unlimited.
    per_side: Option<usize>,
}

/// Greedy, heaviest-first plate picker for one configuration.
///
/// The candidate list is copied out of the config and sorted once, so the
/// config is never reordered and a solver can be reused for any number of
/// targets.
#[derive(Clone, Debug)]
pub struct PlateSolver {
    candidates: Vec<Candidate>,
    barbell_weight: Weight,
}

impl PlateSolver {
    #[must_use]
    pub fn new(config: &PlateConfig) -> Self {
        let limited = config.use_limited_plates();

        let candidates = config
            .available_plates()
            .iter()
            .filter(|plate| plate.weight().is_positive())
            .filter(|plate| match limited {
                true => plate.amount() > 0,
                false => config.is_selected(plate.weight()),
            })
            .map(|plate| Candidate {
                weight: plate.weight(),
                per_side: limited.then(|| plate.amount() / SIDES),
            })
            .sorted_by(|a, b| b.weight.cmp(&a.weight))
            .collect::<Vec<_>>();

        debug!(
            limited,
            candidates = candidates.len(),
            barbell = %config.barbell_weight(),
            "built plate solver"
        );

        PlateSolver {
            candidates,
            barbell_weight: config.barbell_weight(),
        }
    }

    /// Plates per side for `target_weight`, the whole load including the bar.
    ///
    /// Non-positive or non-finite targets yield [`Solution::invalid`]. Positive
    /// targets are resolved to the nearest thousandth, so one below half a
    /// thousandth is solved as an empty bar.
    #[must_use]
    pub fn solve(&self, target_weight: f64) -> Solution {
        if !target_weight.is_finite() || target_weight <= 0.0 {
            debug!(target_weight, "rejected invalid target");
            return Solution::invalid();
        }
        self.load(Weight::from_units(target_weight))
    }

    /// Same as [`PlateSolver::solve`] for a fixed-point target.
    ///
    /// A target lighter than the bar yields no plates and the shortfall as leftover.
    #[must_use]
    pub fn solve_weight(&self, target: Weight) -> Solution {
        if !target.is_positive() {
            debug!(%target, "rejected invalid target");
            return Solution::invalid();
        }
        self.load(target)
    }

    fn load(&self, target: Weight) -> Solution {
        let loaded = target - self.barbell_weight;
        if loaded.is_negative() {
            debug!(%target, barbell = %self.barbell_weight, "target is lighter than the bar");
            return Solution::new(vec![], self.barbell_weight - target);
        }

        let mut remaining = loaded.half();
        let mut plates = Vec::new();

        for candidate in &self.candidates {
            if !remaining.is_positive() {
                break;
            }

            let needed = remaining.fits(candidate.weight);
            let used = candidate
                .per_side
                .map_or(needed, |per_side| needed.min(per_side));

            if used == 0 {
                trace!(plate = %candidate.weight, %remaining, "skipping plate");
                continue;
            }

            trace!(plate = %candidate.weight, used, %remaining, "loading plate");
            plates.push(Plate::new(candidate.weight, used));
            remaining = match candidate.per_side {
                None => remaining.remainder(candidate.weight),
                Some(_) => remaining - candidate.weight * used,
            };
        }

        debug!(%target, plates = plates.len(), leftover = %remaining, "solved");
        Solution::new(plates, remaining)
    }

    /// Total weight on the bar once `solution` is loaded on both sides.
    #[must_use]
    pub fn loaded_weight(&self, solution: &Solution) -> Weight {
        self.barbell_weight + solution.per_side() * SIDES
    }
}

/// Plates per side needed to reach `target_weight` with `config`.
///
/// Targets are resolved to the nearest thousandth; see [`PlateSolver::solve`].
#[must_use]
pub fn solve(target_weight: f64, config: &PlateConfig) -> Solution {
    PlateSolver::new(config).solve(target_weight)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weight_unit::WeightUnit;

    fn w(units: f64) -> Weight {
        Weight::from_units(units)
    }

    #[test]
    fn unlimited_candidates_follow_selection_heaviest_first() {
        let solver = PlateSolver::new(&PlateConfig::standard(WeightUnit::Pounds));
        let weights = solver.candidates.iter().map(|c| c.weight).collect::<Vec<_>>();

        assert_eq!(weights, vec![w(45.0), w(35.0), w(25.0), w(10.0), w(5.0), w(2.5)]);
        assert!(solver.candidates.iter().all(|c| c.per_side.is_none()));
    }

    #[test]
    fn limited_candidates_halve_owned_counts() {
        let config = PlateConfig::standard(WeightUnit::Pounds)
            .with_limited_plates(true)
            .with_plates_owned([
                Plate::new(w(100.0), 3),
                Plate::new(w(10.0), 1),
                Plate::new(w(45.0), 4),
            ])
            .unwrap();
        let solver = PlateSolver::new(&config);

        assert_eq!(
            solver.candidates,
            vec![
                Candidate {
                    weight: w(100.0),
                    per_side: Some(1),
                },
                Candidate {
                    weight: w(45.0),
                    per_side: Some(2),
                },
                Candidate {
                    weight: w(10.0),
                    per_side: Some(0),
                },
            ]
        );
    }

    #[test]
    fn a_single_odd_plate_cannot_be_used() {
        let config = PlateConfig::standard(WeightUnit::Pounds)
            .with_limited_plates(true)
            .with_plate_amount(w(45.0), 1)
            .unwrap();

        let solution = solve(135.0, &config);
        assert_eq!(solution.plates(), Some(&[][..]));
        assert_eq!(solution.leftover(), w(45.0));
    }

    #[test]
    fn target_equal_to_bar_needs_nothing() {
        let solution = solve(45.0, &PlateConfig::default());
        assert!(solution.is_exact());
        assert_eq!(solution.plate_count(), 0);
    }

    #[test]
    fn loaded_weight_adds_both_sides_and_bar() {
        let solver = PlateSolver::new(&PlateConfig::default());
        let solution = solver.solve(315.0);

        assert_eq!(solver.loaded_weight(&solution), w(315.0));
    }

    #[test]
    fn tiny_positive_targets_are_below_the_bar() {
        let solution = solve(0.0004, &PlateConfig::default());

        assert!(!solution.is_invalid());
        assert_eq!(solution.plates(), Some(&[][..]));
        assert_eq!(solution.leftover(), w(45.0));
    }

    #[test]
    fn zero_fixed_point_target_is_invalid() {
        let solver = PlateSolver::new(&PlateConfig::default());
        assert!(solver.solve_weight(Weight::ZERO).is_invalid());
    }
}
