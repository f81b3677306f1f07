//! Fitter Progress Shared Library
//!
//! This crate contains the domain types and pure calculations shared by the
//! progress engine and the WASM bindings.

pub mod energy;
pub mod models;
pub mod validation;

// Re-export commonly used items
pub use energy::{estimate, EnergySettings};
pub use models::{
    CalorieResult, DayProgress, DiaryPlan, ExerciseObservation, ExerciseType, FitnessGoal,
    PlanItem, ProgressEntry, WeeklyProgress, DEFAULT_BODY_WEIGHT_KG,
};
