//! Records a workout end to end against a local storage directory.
//!
//! Run with: cargo run --example record_workout

use anyhow::Result;
use chrono::Local;
use fitter_progress_engine::config::EngineConfig;
use fitter_progress_engine::repositories::{PreferencesRepository, ProgressLedger};
use fitter_progress_engine::services::{DiaryPlanner, ProgressService};
use fitter_progress_engine::storage::FileStore;
use fitter_progress_engine::{ExerciseObservation, ExerciseType};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fitter_progress_engine=debug,info".into()),
        )
        .init();

    let config = EngineConfig::load()?;
    let store = FileStore::open(&config.storage.dir).await?;
    let ledger = ProgressLedger::new(store.clone());
    let prefs = PreferencesRepository::new(store);
    let today = Local::now().date_naive();

    // Today's plan for the stored goal, keeping anything already done today
    let goal = prefs.load_goal().await;
    let history = ledger.load_all().await;
    let mut plan = DiaryPlanner::build_plan_preserving(goal, &history, today);
    info!(%goal, items = plan.items.len(), "Built diary plan");

    // A finished recording: 600 seconds of running at 72 kg
    let observation = ExerciseObservation::new(ExerciseType::Running, 600.0, Some(72.0))
        .map_err(anyhow::Error::msg)?;
    let entry = ProgressService::record_observation(
        &ledger,
        &observation,
        None,
        today,
        &config.tuning.energy(),
    )
    .await?;
    info!(calories = entry.calories_burned, "Recorded observation");

    // Tick off the first pending planned exercise with the same burn
    if let Some(pending) = plan.items.iter().find(|i| !i.completed) {
        let name = pending.exercise_name.clone();
        let done = DiaryPlanner::mark_done(&mut plan, &name, entry.calories_burned, today)?;
        ledger.append(done).await?;
        info!(exercise = %name, "Marked planned exercise done");
    }

    // Recompute what the charts would show
    let entries = ledger.load_all().await;
    let weekly = ProgressService::weekly_aggregate(&entries, today, &config.tuning.progress());
    let percent = ProgressService::goal_completion_percent(&entries, &config.tuning.progress());
    for day in &weekly.days {
        info!(day = %day.day, progress = day.progress, "Weekly bar");
    }
    info!(percent, entries = entries.len(), "Cumulative goal progress");

    Ok(())
}
