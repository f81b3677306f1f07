//! Data access over the key-value storage seam

pub mod ledger;
pub mod preferences;

pub use ledger::ProgressLedger;
pub use preferences::PreferencesRepository;

/// Well-known storage keys
///
/// Names match what the mobile app historically stored, so an upgraded
/// client keeps its data.
pub mod keys {
    /// Serialized `Vec<ProgressEntry>` ledger
    pub const LEDGER: &str = "progressData";
    /// Selected fitness goal, stored as its snake_case name
    pub const GOAL: &str = "userGoal";
    /// Active session's user identifier
    pub const USER_ID: &str = "sessionUserId";
}
