//! Remote workout API client
//!
//! Typed client for the backend's workout catalog and completion feed. The
//! engine never fabricates data on failure: non-2xx responses and malformed
//! JSON surface as errors, and callers decide whether to keep showing the
//! last good aggregate.

use crate::config::ApiConfig;
use crate::error::EngineResult;
use crate::services::{ProgressService, ProgressSettings};
use chrono::NaiveDate;
use fitter_progress_shared::models::WeeklyProgress;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tracing::debug;

/// Workout catalog item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workout {
    pub id: i64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Nominal calorie burn advertised by the catalog
    pub calories_burned: f64,
    /// Duration in minutes
    pub duration: i64,
}

/// One server-recorded workout completion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletedWorkout {
    pub workout_id: i64,
    pub workout_date: NaiveDate,
}

/// Payload for recording a completed session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordCompletion {
    pub user_id: i64,
    pub workout_id: i64,
    pub workout_date: NaiveDate,
    /// Where the uploaded demonstration video ended up
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_path: Option<String>,
}

/// HTTP client for the workout backend
#[derive(Debug, Clone)]
pub struct WorkoutApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl WorkoutApiClient {
    pub fn new(config: &ApiConfig) -> EngineResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// `GET /workouts` — the selectable workout catalog
    pub async fn list_workouts(&self) -> EngineResult<Vec<Workout>> {
        let url = format!("{}/workouts", self.base_url);
        debug!(%url, "Fetching workout catalog");
        let workouts = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(workouts)
    }

    /// `GET /workouts-done?user_id=` — server-recorded completions
    pub async fn completed_workouts(&self, user_id: i64) -> EngineResult<Vec<CompletedWorkout>> {
        let url = format!("{}/workouts-done", self.base_url);
        debug!(%url, user_id, "Fetching completed workouts");
        let completions = self
            .http
            .get(&url)
            .query(&[("user_id", user_id)])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(completions)
    }

    /// `POST /workouts-done` — record a completed session
    pub async fn record_completion(&self, completion: &RecordCompletion) -> EngineResult<()> {
        let url = format!("{}/workouts-done", self.base_url);
        debug!(%url, workout_id = completion.workout_id, "Recording completion");
        self.http
            .post(&url)
            .json(completion)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

/// Server-backed weekly progress with stale-response protection
///
/// Screen-focus refetches race each other; each refresh takes a
/// monotonically increasing token and a response whose token has been
/// superseded is discarded (`Ok(None)`) instead of overwriting newer data.
pub struct WeeklyProgressFeed {
    client: WorkoutApiClient,
    latest: AtomicU64,
}

impl WeeklyProgressFeed {
    pub fn new(client: WorkoutApiClient) -> Self {
        Self {
            client,
            latest: AtomicU64::new(0),
        }
    }

    /// Recompute weekly progress from the remote completions feed
    ///
    /// Returns `Ok(None)` when a newer refresh started while this one was
    /// in flight; errors are surfaced untouched.
    pub async fn refresh(
        &self,
        user_id: i64,
        reference_date: NaiveDate,
        settings: &ProgressSettings,
    ) -> EngineResult<Option<WeeklyProgress>> {
        let token = self.latest.fetch_add(1, Ordering::SeqCst) + 1;

        let completions = self.client.completed_workouts(user_id).await?;

        if self.latest.load(Ordering::SeqCst) != token {
            debug!(token, "Discarding superseded weekly refresh");
            return Ok(None);
        }

        Ok(Some(ProgressService::weekly_from_dates(
            completions.iter().map(|c| c.workout_date),
            reference_date,
            settings,
        )))
    }
}
