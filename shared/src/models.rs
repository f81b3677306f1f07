//! Data models for the Fitter Progress engine

use crate::validation::validate_weight;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Body weight used when an observation is built without one (kg)
pub const DEFAULT_BODY_WEIGHT_KG: f64 = 70.0;

/// Exercise type of a completed activity
///
/// The type determines the MET value and whether the recorded count is a
/// rep count or elapsed seconds. Unknown types are carried as `Other` so an
/// unrecognized recording still produces an estimate instead of an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExerciseType {
    JumpingJacks,
    Squats,
    Running,
    Other(String),
}

impl ExerciseType {
    /// MET (Metabolic Equivalent of Task) value for this exercise
    ///
    /// Unrecognized types fall back to the given default.
    pub fn met(&self, default_met: f64) -> f64 {
        match self {
            ExerciseType::JumpingJacks => 8.0,
            ExerciseType::Squats => 5.0,
            ExerciseType::Running => 9.8,
            ExerciseType::Other(_) => default_met,
        }
    }

    /// Whether the recorded count is elapsed seconds rather than reps
    ///
    /// Running sessions are recorded by duration; everything else counts
    /// reps that get converted to seconds at a fixed rate.
    pub fn is_duration_based(&self) -> bool {
        matches!(self, ExerciseType::Running)
    }

    /// Name as stored by the capture flow
    pub fn name(&self) -> &str {
        match self {
            ExerciseType::JumpingJacks => "jumpingJacks",
            ExerciseType::Squats => "squats",
            ExerciseType::Running => "running",
            ExerciseType::Other(name) => name,
        }
    }
}

impl fmt::Display for ExerciseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for ExerciseType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "jumpingJacks" => ExerciseType::JumpingJacks,
            "squats" => ExerciseType::Squats,
            "running" => ExerciseType::Running,
            other => ExerciseType::Other(other.to_string()),
        })
    }
}

/// One completed activity instance, as reported by the capture flow
///
/// Immutable once built; construction validates the numbers so downstream
/// calculations never see NaN or negative input.
#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseObservation {
    pub exercise_type: ExerciseType,
    /// Rep count, or elapsed seconds for duration-based types
    pub reps_or_duration: f64,
    /// Body weight in kilograms
    pub body_weight_kg: f64,
}

impl ExerciseObservation {
    /// Build an observation, defaulting body weight to 70 kg when unknown
    pub fn new(
        exercise_type: ExerciseType,
        reps_or_duration: f64,
        body_weight_kg: Option<f64>,
    ) -> Result<Self, String> {
        if !reps_or_duration.is_finite() || reps_or_duration < 0.0 {
            return Err("Rep count or duration must be a non-negative number".to_string());
        }
        let body_weight_kg = body_weight_kg.unwrap_or(DEFAULT_BODY_WEIGHT_KG);
        validate_weight(body_weight_kg)?;
        Ok(Self {
            exercise_type,
            reps_or_duration,
            body_weight_kg,
        })
    }
}

/// Estimated calorie burn derived from an observation
///
/// Derived, never stored on its own; recomputable at any time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalorieResult {
    /// Non-negative, rounded to 2 decimals for display
    pub calories_burned: f64,
}

/// One persisted ledger row
///
/// Created on workout completion and never mutated; the ledger is
/// append-only and cleared only as a whole by a reset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressEntry {
    /// Calendar date of capture, local time zone
    pub date: NaiveDate,
    pub calories_burned: f64,
    /// Diary cross-reference label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workout_name: Option<String>,
}

/// Progress for a single weekday
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayProgress {
    /// Weekday label, "Mon" through "Sun"
    pub day: String,
    /// Percentage 0-100
    pub progress: f64,
}

/// Per-weekday progress for one calendar week, Monday-first
///
/// Derived from the ledger (or the remote completions feed) on each read;
/// never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyProgress {
    /// Monday of the week the aggregate covers
    pub week_start: NaiveDate,
    /// Always 7 entries, Monday-first
    pub days: Vec<DayProgress>,
}

/// Selected fitness goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FitnessGoal {
    #[default]
    WeightLoss,
    MuscleGain,
    Endurance,
}

impl FitnessGoal {
    /// Stored form of the goal
    pub fn as_str(&self) -> &'static str {
        match self {
            FitnessGoal::WeightLoss => "weight_loss",
            FitnessGoal::MuscleGain => "muscle_gain",
            FitnessGoal::Endurance => "endurance",
        }
    }
}

impl fmt::Display for FitnessGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for FitnessGoal {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "weight_loss" => Ok(FitnessGoal::WeightLoss),
            "muscle_gain" => Ok(FitnessGoal::MuscleGain),
            "endurance" => Ok(FitnessGoal::Endurance),
            _ => Err(format!("Unknown fitness goal: {}", s)),
        }
    }
}

/// One exercise in a diary plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanItem {
    pub exercise_name: String,
    pub completed: bool,
    pub calories_burned: f64,
}

/// The day's workout checklist derived from the selected goal
///
/// Items only move from pending to completed; a rebuild produces a fresh
/// plan instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiaryPlan {
    pub goal: FitnessGoal,
    pub items: Vec<PlanItem>,
}

impl DiaryPlan {
    /// Look up an item by exact exercise name
    pub fn item(&self, exercise_name: &str) -> Option<&PlanItem> {
        self.items.iter().find(|i| i.exercise_name == exercise_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_exercise_type_round_trip() {
        for name in ["jumpingJacks", "squats", "running"] {
            let parsed = ExerciseType::from_str(name).unwrap();
            assert_eq!(parsed.to_string(), name);
        }
        let other = ExerciseType::from_str("burpees").unwrap();
        assert_eq!(other, ExerciseType::Other("burpees".to_string()));
        assert_eq!(other.to_string(), "burpees");
    }

    #[test]
    fn test_met_fallback_for_unknown_type() {
        let other = ExerciseType::Other("burpees".to_string());
        assert_eq!(other.met(5.0), 5.0);
        assert_eq!(ExerciseType::Running.met(5.0), 9.8);
    }

    #[test]
    fn test_observation_defaults_body_weight() {
        let obs = ExerciseObservation::new(ExerciseType::Squats, 10.0, None).unwrap();
        assert_eq!(obs.body_weight_kg, DEFAULT_BODY_WEIGHT_KG);
    }

    #[test]
    fn test_observation_rejects_bad_input() {
        assert!(ExerciseObservation::new(ExerciseType::Squats, -1.0, None).is_err());
        assert!(ExerciseObservation::new(ExerciseType::Squats, f64::NAN, None).is_err());
        assert!(ExerciseObservation::new(ExerciseType::Squats, 10.0, Some(0.0)).is_err());
    }

    #[test]
    fn test_observation_weight_bounds_match_validator() {
        // Same bounds as validation::validate_weight
        assert!(ExerciseObservation::new(ExerciseType::Squats, 10.0, Some(10.0)).is_err());
        assert!(ExerciseObservation::new(ExerciseType::Squats, 10.0, Some(500.1)).is_err());
        assert!(ExerciseObservation::new(ExerciseType::Squats, 10.0, Some(20.0)).is_ok());
    }

    #[test]
    fn test_goal_from_str_and_default() {
        assert_eq!(FitnessGoal::from_str("muscle_gain").unwrap(), FitnessGoal::MuscleGain);
        assert!(FitnessGoal::from_str("cardio").is_err());
        assert_eq!(FitnessGoal::default(), FitnessGoal::WeightLoss);
    }

    #[test]
    fn test_progress_entry_serializes_date_as_ymd() {
        let entry = ProgressEntry {
            date: NaiveDate::from_ymd_opt(2025, 3, 17).unwrap(),
            calories_burned: 114.33,
            workout_name: None,
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"2025-03-17\""));
        assert!(!json.contains("workout_name"));
        let back: ProgressEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }
}
