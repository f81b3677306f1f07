//! Diary planner
//!
//! Derives the day's workout checklist from the selected fitness goal and
//! tracks completion per planned exercise. Completions feed the progress
//! ledger; the plan itself is never persisted.

use crate::error::{EngineError, EngineResult};
use chrono::NaiveDate;
use fitter_progress_shared::models::{DiaryPlan, FitnessGoal, PlanItem, ProgressEntry};
use fitter_progress_shared::validation::validate_calories;

/// Number of exercises assigned per goal
pub const PLAN_SIZE: usize = 4;

/// Fixed exercise table per goal
fn exercises_for(goal: FitnessGoal) -> [&'static str; PLAN_SIZE] {
    match goal {
        FitnessGoal::WeightLoss => ["Running", "Jump Rope", "HIIT", "Cycling"],
        FitnessGoal::MuscleGain => ["Squats", "Push-ups", "Deadlifts", "Bench Press"],
        FitnessGoal::Endurance => ["Swimming", "Rowing", "Hiking", "Stair Climbing"],
    }
}

/// Diary planning service
pub struct DiaryPlanner;

impl DiaryPlanner {
    /// Fresh plan for a goal, all items pending
    pub fn build_plan(goal: FitnessGoal) -> DiaryPlan {
        DiaryPlan {
            goal,
            items: exercises_for(goal)
                .into_iter()
                .map(|name| PlanItem {
                    exercise_name: name.to_string(),
                    completed: false,
                    calories_burned: 0.0,
                })
                .collect(),
        }
    }

    /// Rebuild a plan without losing workouts already completed today
    ///
    /// Re-applies ledger entries dated `today` whose workout name belongs
    /// to the goal's exercise list. Entries for other dates or other goals'
    /// exercises are ignored.
    pub fn build_plan_preserving(
        goal: FitnessGoal,
        history: &[ProgressEntry],
        today: NaiveDate,
    ) -> DiaryPlan {
        let mut plan = Self::build_plan(goal);
        for entry in history.iter().filter(|e| e.date == today) {
            if let Some(name) = &entry.workout_name {
                if let Some(item) = plan.items.iter_mut().find(|i| &i.exercise_name == name) {
                    item.completed = true;
                    item.calories_burned = entry.calories_burned;
                }
            }
        }
        plan
    }

    /// Mark a planned exercise completed and produce its ledger entry
    ///
    /// Matching is by exact name within the plan's fixed vocabulary. An
    /// unknown name or an already-completed item leaves the plan unchanged
    /// and reports a validation error.
    pub fn mark_done(
        plan: &mut DiaryPlan,
        exercise_name: &str,
        calories_burned: f64,
        date: NaiveDate,
    ) -> EngineResult<ProgressEntry> {
        validate_calories(calories_burned).map_err(EngineError::Validation)?;

        let item = plan
            .items
            .iter_mut()
            .find(|i| i.exercise_name == exercise_name)
            .ok_or_else(|| {
                EngineError::Validation(format!(
                    "Exercise '{}' is not in the current plan",
                    exercise_name
                ))
            })?;

        if item.completed {
            return Err(EngineError::Validation(format!(
                "Exercise '{}' is already completed",
                exercise_name
            )));
        }

        item.completed = true;
        item.calories_burned = calories_burned;

        Ok(ProgressEntry {
            date,
            calories_burned,
            workout_name: Some(exercise_name.to_string()),
        })
    }
}
