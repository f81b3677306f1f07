//! Business logic for progress tracking and diary planning

pub mod planner;
pub mod progress;

pub use planner::DiaryPlanner;
pub use progress::{ProgressService, ProgressSettings};
