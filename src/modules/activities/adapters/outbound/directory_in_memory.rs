use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::sync::RwLock;

use crate::modules::activities::adapters::outbound::directory::{
    ActivityDirectory, DirectoryError, LoadedActivity,
};
use crate::modules::activities::core::activity::Activity;
use crate::modules::activities::core::catalog;
use crate::modules::activities::use_cases::list_activities::queries_port::ActivityQueries;

struct Slot {
    activity: Activity,
    version: i64,
}

#[derive(Default)]
pub struct InMemoryActivityDirectory {
    slots: RwLock<HashMap<String, Slot>>,
    is_offline: bool,
    delay_save_ms: AtomicU64,
}

impl InMemoryActivityDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded() -> Self {
        Self::with_activities(catalog::seed())
    }

    pub fn with_activities(activities: impl IntoIterator<Item = (String, Activity)>) -> Self {
        let slots = activities
            .into_iter()
            .map(|(name, activity)| (name, Slot { activity, version: 0 }))
            .collect();
        Self {
            slots: RwLock::new(slots),
            ..Self::default()
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    /// Holds every save for `ms` before it checks the version.
    pub fn set_delay_save_ms(&self, ms: u64) {
        self.delay_save_ms.store(ms, Ordering::Relaxed);
    }
}

#[async_trait::async_trait]
impl ActivityDirectory for InMemoryActivityDirectory {
    async fn load(&self, activity_name: &str) -> Result<Option<LoadedActivity>, DirectoryError> {
        if self.is_offline {
            return Err(DirectoryError::Backend("Activity directory offline".into()));
        }

        let guard = self.slots.read().await;
        Ok(guard.get(activity_name).map(|slot| LoadedActivity {
            activity: slot.activity.clone(),
            version: slot.version,
        }))
    }

    async fn save(
        &self,
        activity_name: &str,
        expected_version: i64,
        activity: Activity,
    ) -> Result<(), DirectoryError> {
        if self.is_offline {
            return Err(DirectoryError::Backend("Activity directory offline".into()));
        }

        let delay = self.delay_save_ms.load(Ordering::Relaxed);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }

        let mut guard = self.slots.write().await;
        let slot = guard
            .get_mut(activity_name)
            .ok_or_else(|| DirectoryError::UnknownActivity(activity_name.to_string()))?;
        if slot.version != expected_version {
            return Err(DirectoryError::VersionMismatch {
                expected: expected_version,
                actual: slot.version,
            });
        }
        slot.activity = activity;
        slot.version += 1;
        Ok(())
    }
}

#[async_trait::async_trait]
impl ActivityQueries for InMemoryActivityDirectory {
    async fn list_activities(&self) -> anyhow::Result<BTreeMap<String, Activity>> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Activity directory offline"));
        }

        let guard = self.slots.read().await;
        Ok(guard
            .iter()
            .map(|(name, slot)| (name.clone(), slot.activity.clone()))
            .collect())
    }
}
