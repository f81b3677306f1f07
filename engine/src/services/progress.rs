//! Progress recording and aggregation
//!
//! Turns ledger entries (or remote completion dates) into the weekly
//! per-day bars and the cumulative calorie-goal percentage the charts
//! render. Aggregates are recomputed on every read and never persisted.

use crate::error::EngineResult;
use crate::repositories::ProgressLedger;
use crate::storage::KeyValueStore;
use chrono::{Datelike, Duration, NaiveDate};
use fitter_progress_shared::energy::{estimate, EnergySettings};
use fitter_progress_shared::models::{
    DayProgress, ExerciseObservation, ProgressEntry, WeeklyProgress,
};
use serde::{Deserialize, Serialize};

/// Monday-first weekday labels, as rendered by the bar chart
const WEEKDAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Tunable constants for progress aggregation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProgressSettings {
    /// Per-day progress contributed by each completed workout (percent)
    pub percent_per_entry: f64,
    /// Calorie total treated as 100% of the cumulative goal
    pub calorie_goal: f64,
}

impl Default for ProgressSettings {
    fn default() -> Self {
        Self {
            percent_per_entry: 10.0,
            calorie_goal: 5000.0,
        }
    }
}

/// Progress service for recording and aggregation
pub struct ProgressService;

impl ProgressService {
    /// Estimate calories for an observation and append the result
    ///
    /// One sequential chain per user action: estimate, then append. The
    /// returned entry is exactly what was persisted.
    pub async fn record_observation<S: KeyValueStore>(
        ledger: &ProgressLedger<S>,
        observation: &ExerciseObservation,
        workout_name: Option<String>,
        date: NaiveDate,
        energy: &EnergySettings,
    ) -> EngineResult<ProgressEntry> {
        let result = estimate(observation, energy);
        let entry = ProgressEntry {
            date,
            calories_burned: result.calories_burned,
            workout_name,
        };
        ledger.append(entry.clone()).await?;
        Ok(entry)
    }

    /// Bucket ledger entries into per-weekday progress bars
    ///
    /// Covers the calendar week (Monday through Sunday) containing
    /// `reference_date`; entries outside it are excluded. Each entry adds
    /// `percent_per_entry` to its weekday, clamped at 100.
    pub fn weekly_aggregate(
        entries: &[ProgressEntry],
        reference_date: NaiveDate,
        settings: &ProgressSettings,
    ) -> WeeklyProgress {
        Self::weekly_from_dates(entries.iter().map(|e| e.date), reference_date, settings)
    }

    /// Same aggregation over bare completion dates (remote feed variant)
    pub fn weekly_from_dates(
        dates: impl IntoIterator<Item = NaiveDate>,
        reference_date: NaiveDate,
        settings: &ProgressSettings,
    ) -> WeeklyProgress {
        let week_start = Self::week_start(reference_date);
        let week_end = week_start + Duration::days(6);

        let mut counts = [0u32; 7];
        for date in dates {
            if date >= week_start && date <= week_end {
                counts[date.weekday().num_days_from_monday() as usize] += 1;
            }
        }

        let days = WEEKDAY_LABELS
            .iter()
            .zip(counts)
            .map(|(label, count)| DayProgress {
                day: (*label).to_string(),
                progress: (f64::from(count) * settings.percent_per_entry).min(100.0),
            })
            .collect();

        WeeklyProgress { week_start, days }
    }

    /// Total calories burned as a percentage of the cumulative goal
    pub fn goal_completion_percent(entries: &[ProgressEntry], settings: &ProgressSettings) -> f64 {
        if settings.calorie_goal <= 0.0 {
            return 0.0;
        }
        let total: f64 = entries.iter().map(|e| e.calories_burned).sum();
        (total / settings.calorie_goal * 100.0).min(100.0)
    }

    /// Monday of the week containing the given date
    fn week_start(date: NaiveDate) -> NaiveDate {
        let days_from_monday = i64::from(date.weekday().num_days_from_monday());
        date - Duration::days(days_from_monday)
    }
}
