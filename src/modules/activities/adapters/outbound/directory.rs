use async_trait::async_trait;
use thiserror::Error;

use crate::modules::activities::core::activity::Activity;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DirectoryError {
    #[error("version mismatch: expected {expected}, actual {actual}")]
    VersionMismatch { expected: i64, actual: i64 },

    #[error("unknown activity: {0}")]
    UnknownActivity(String),

    #[error("backend error: {0}")]
    Backend(String),
}

#[derive(Debug, Clone)]
pub struct LoadedActivity {
    pub activity: Activity,
    pub version: i64,
}

/// Write side of the activity directory.
///
/// `save` only succeeds when `expected_version` matches the version the
/// activity currently has; every successful save bumps the version by one.
#[async_trait]
pub trait ActivityDirectory: Send + Sync {
    async fn load(&self, activity_name: &str) -> Result<Option<LoadedActivity>, DirectoryError>;

    async fn save(
        &self,
        activity_name: &str,
        expected_version: i64,
        activity: Activity,
    ) -> Result<(), DirectoryError>;
}
