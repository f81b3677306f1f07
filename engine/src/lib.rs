//! Fitter Progress Engine
//!
//! Client-embeddable workout progress and calorie accounting.
//!
//! ## Architecture
//!
//! The engine is layered the same way whatever host embeds it:
//! - Services: estimation, weekly aggregation, diary planning
//! - Repositories: the progress ledger and stored preferences
//! - Storage: a durable key-value seam the host backs per platform
//! - Remote: typed client for the workout catalog and completion feed
//!
//! Every operation takes its inputs explicitly (reference dates, settings,
//! user ids) so the core stays pure and testable; the host owns the clock,
//! the UI, and the media pipeline.

pub mod config;
pub mod error;
pub mod remote;
pub mod repositories;
pub mod services;
pub mod storage;

pub use error::{EngineError, EngineResult};

// Domain types and the pure estimator come from the shared crate
pub use fitter_progress_shared::energy::{estimate, EnergySettings};
pub use fitter_progress_shared::models::{
    CalorieResult, DayProgress, DiaryPlan, ExerciseObservation, ExerciseType, FitnessGoal,
    PlanItem, ProgressEntry, WeeklyProgress,
};
