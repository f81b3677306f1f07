//! Stored user preferences
//!
//! The selected fitness goal and the active session's user id live in the
//! same key-value storage as the ledger. Reads fall back to safe defaults;
//! writes surface their errors.

use crate::error::EngineResult;
use crate::repositories::keys;
use crate::storage::KeyValueStore;
use fitter_progress_shared::models::FitnessGoal;
use tracing::warn;

/// Access to the stored goal selection and session identity
pub struct PreferencesRepository<S> {
    store: S,
}

impl<S: KeyValueStore> PreferencesRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Stored goal, defaulting to weight loss when absent or unparsable
    pub async fn load_goal(&self) -> FitnessGoal {
        match self.store.get(keys::GOAL).await {
            Ok(Some(raw)) => raw.parse::<FitnessGoal>().unwrap_or_else(|e| {
                warn!(error = %e, "Stored goal unparsable; using default");
                FitnessGoal::default()
            }),
            Ok(None) => FitnessGoal::default(),
            Err(e) => {
                warn!(error = %e, "Goal storage unreadable; using default");
                FitnessGoal::default()
            }
        }
    }

    pub async fn store_goal(&self, goal: FitnessGoal) -> EngineResult<()> {
        self.store.set(keys::GOAL, goal.as_str()).await?;
        Ok(())
    }

    /// Logged-in user id, if a session is stored
    pub async fn load_user_id(&self) -> Option<i64> {
        match self.store.get(keys::USER_ID).await {
            Ok(Some(raw)) => match raw.parse() {
                Ok(id) => Some(id),
                Err(_) => {
                    warn!("Stored user id unparsable; treating as signed out");
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                warn!(error = %e, "Session storage unreadable; treating as signed out");
                None
            }
        }
    }

    pub async fn store_user_id(&self, user_id: i64) -> EngineResult<()> {
        self.store
            .set(keys::USER_ID, &user_id.to_string())
            .await?;
        Ok(())
    }

    /// Forget the active session
    pub async fn clear_session(&self) -> EngineResult<()> {
        self.store.remove(keys::USER_ID).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[tokio::test]
    async fn test_goal_defaults_to_weight_loss() {
        let prefs = PreferencesRepository::new(MemoryStore::new());
        assert_eq!(prefs.load_goal().await, FitnessGoal::WeightLoss);
    }

    #[tokio::test]
    async fn test_goal_round_trip() {
        let prefs = PreferencesRepository::new(MemoryStore::new());
        prefs.store_goal(FitnessGoal::Endurance).await.unwrap();
        assert_eq!(prefs.load_goal().await, FitnessGoal::Endurance);
    }

    #[tokio::test]
    async fn test_unparsable_goal_falls_back() {
        let store = MemoryStore::new();
        store.set(keys::GOAL, "get swole").await.unwrap();
        let prefs = PreferencesRepository::new(store);
        assert_eq!(prefs.load_goal().await, FitnessGoal::WeightLoss);
    }

    #[tokio::test]
    async fn test_session_round_trip() {
        let prefs = PreferencesRepository::new(MemoryStore::new());
        assert_eq!(prefs.load_user_id().await, None);
        prefs.store_user_id(42).await.unwrap();
        assert_eq!(prefs.load_user_id().await, Some(42));
        prefs.clear_session().await.unwrap();
        assert_eq!(prefs.load_user_id().await, None);
    }
}
