//! Energy expenditure calculations
//!
//! MET-based calorie estimation for completed exercise observations.
//!
//! # Design Principles
//!
//! 1. **Pure Functions**: no I/O, no clock, deterministic for given inputs
//! 2. **Safe Defaults**: unknown exercise types estimate with a fallback MET
//!    instead of erroring
//! 3. **Configurable Constants**: the rep-to-seconds conversion and the
//!    fallback MET are settings, not inline literals

use crate::models::{CalorieResult, ExerciseObservation};
use serde::{Deserialize, Serialize};

/// Tunable constants for calorie estimation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnergySettings {
    /// Assumed seconds of effort per rep for rep-based exercises
    pub seconds_per_rep: f64,
    /// MET value used for exercise types without a table entry
    pub default_met: f64,
}

impl Default for EnergySettings {
    fn default() -> Self {
        Self {
            seconds_per_rep: 3.0,
            default_met: 5.0,
        }
    }
}

/// Estimate the calories burned by one observation
///
/// `calories = MET * body_weight_kg * hours`, where hours come from the
/// recorded count: elapsed seconds for duration-based types, reps scaled by
/// `seconds_per_rep` otherwise. A zero count yields zero calories; the
/// result is never negative and is rounded to 2 decimals for display.
pub fn estimate(observation: &ExerciseObservation, settings: &EnergySettings) -> CalorieResult {
    if observation.reps_or_duration <= 0.0 {
        return CalorieResult { calories_burned: 0.0 };
    }

    let seconds = if observation.exercise_type.is_duration_based() {
        observation.reps_or_duration
    } else {
        observation.reps_or_duration * settings.seconds_per_rep
    };
    let hours = seconds / 3600.0;
    let met = observation.exercise_type.met(settings.default_met);
    let calories = met * observation.body_weight_kg * hours;

    CalorieResult {
        calories_burned: round_2dp(calories.max(0.0)),
    }
}

/// Round to 2 decimal places for display
pub fn round_2dp(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExerciseType;
    use proptest::prelude::*;

    fn observation(exercise_type: ExerciseType, count: f64) -> ExerciseObservation {
        ExerciseObservation::new(exercise_type, count, Some(70.0)).unwrap()
    }

    #[test]
    fn test_running_uses_elapsed_seconds() {
        // 9.8 MET * 70 kg * (600 s / 3600)
        let result = estimate(&observation(ExerciseType::Running, 600.0), &EnergySettings::default());
        assert_eq!(result.calories_burned, 114.33);
    }

    #[test]
    fn test_jumping_jacks_convert_reps_to_seconds() {
        // 20 reps * 3 s = 60 s; 8 MET * 70 kg * (60 / 3600)
        let result = estimate(
            &observation(ExerciseType::JumpingJacks, 20.0),
            &EnergySettings::default(),
        );
        assert_eq!(result.calories_burned, 9.33);
    }

    #[test]
    fn test_unknown_type_falls_back_to_default_met() {
        // 5 MET * 70 kg * (30 / 3600)
        let result = estimate(
            &observation(ExerciseType::Other("mysteryMove".to_string()), 10.0),
            &EnergySettings::default(),
        );
        assert_eq!(result.calories_burned, 2.92);
    }

    #[test]
    fn test_zero_count_burns_nothing() {
        let result = estimate(&observation(ExerciseType::Squats, 0.0), &EnergySettings::default());
        assert_eq!(result.calories_burned, 0.0);
    }

    #[test]
    fn test_custom_seconds_per_rep() {
        let settings = EnergySettings {
            seconds_per_rep: 6.0,
            ..EnergySettings::default()
        };
        // 10 reps * 6 s = 60 s; 5 MET * 70 kg * (60 / 3600)
        let result = estimate(&observation(ExerciseType::Squats, 10.0), &settings);
        assert_eq!(result.calories_burned, 5.83);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn test_estimate_deterministic_and_non_negative(
            count in 0.0f64..10000.0,
            weight in 20.0f64..500.0
        ) {
            let obs = ExerciseObservation::new(
                ExerciseType::JumpingJacks, count, Some(weight),
            ).unwrap();
            let settings = EnergySettings::default();

            let first = estimate(&obs, &settings);
            let second = estimate(&obs, &settings);

            prop_assert_eq!(first, second);
            prop_assert!(first.calories_burned >= 0.0);
        }

        #[test]
        fn test_estimate_matches_formula(
            seconds in 1.0f64..36000.0,
            weight in 20.0f64..500.0
        ) {
            let obs = ExerciseObservation::new(
                ExerciseType::Running, seconds, Some(weight),
            ).unwrap();
            let result = estimate(&obs, &EnergySettings::default());

            let expected = round_2dp(9.8 * weight * (seconds / 3600.0));
            prop_assert!((result.calories_burned - expected).abs() < 1e-9,
                "estimate {} != expected {} for {}s at {}kg",
                result.calories_burned, expected, seconds, weight);
        }
    }
}
