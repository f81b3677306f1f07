//! Fitter Progress WASM Module
//!
//! WebAssembly bindings over the pure calorie calculations so browser and
//! hybrid hosts can estimate without a round trip.

use fitter_progress_shared::energy::{estimate, round_2dp, EnergySettings};
use fitter_progress_shared::models::{ExerciseObservation, ExerciseType};
use fitter_progress_shared::validation::validate_weight;
use wasm_bindgen::prelude::*;

/// Estimate calories burned for one completed exercise
///
/// Unknown exercise types use the fallback MET, out-of-range weights fall
/// back to the 70 kg default, and an invalid count estimates as zero
/// rather than trapping.
#[wasm_bindgen]
pub fn estimate_calories(exercise_type: &str, reps_or_duration: f64, body_weight_kg: f64) -> f64 {
    let exercise_type: ExerciseType = exercise_type.parse().unwrap_or_else(|never| match never {});
    let weight = validate_weight(body_weight_kg).is_ok().then_some(body_weight_kg);
    match ExerciseObservation::new(exercise_type, reps_or_duration, weight) {
        Ok(observation) => estimate(&observation, &EnergySettings::default()).calories_burned,
        Err(_) => 0.0,
    }
}

/// Calories burned as a percentage of a cumulative goal, capped at 100
#[wasm_bindgen]
pub fn goal_completion_percent(calories_burned: &[f64], calorie_goal: f64) -> f64 {
    if calorie_goal <= 0.0 {
        return 0.0;
    }
    let total: f64 = calories_burned.iter().sum();
    round_2dp((total / calorie_goal * 100.0).min(100.0))
}
