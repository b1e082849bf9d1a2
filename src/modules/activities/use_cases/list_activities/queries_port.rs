use std::collections::BTreeMap;

use async_trait::async_trait;

use crate::modules::activities::core::activity::Activity;

#[async_trait]
pub trait ActivityQueries {
    /// Snapshot of every activity keyed by name.
    async fn list_activities(&self) -> anyhow::Result<BTreeMap<String, Activity>>;
}
