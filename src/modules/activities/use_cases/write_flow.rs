// Shared write flow for participant mutations.
//
// Load the activity, let a pure decide function produce the next state, then
// save it against the loaded version. A stale version means another writer got
// there first, so the flow reloads and decides again until the save lands or
// the decision rejects. Every mismatch is another writer's committed save, so
// the loop always makes progress.

use crate::modules::activities::adapters::outbound::directory::{
    ActivityDirectory, DirectoryError,
};
use crate::modules::activities::core::activity::Activity;
use crate::modules::activities::core::decision::Decision;
use crate::modules::activities::use_cases::errors::ApplicationError;

pub async fn execute<TDirectory, F>(
    directory: &TDirectory,
    activity_name: &str,
    decide: F,
) -> Result<Activity, ApplicationError>
where
    TDirectory: ActivityDirectory + ?Sized,
    F: Fn(&Activity) -> Decision,
{
    let mut attempt: u32 = 1;
    loop {
        let loaded = directory
            .load(activity_name)
            .await?
            .ok_or(ApplicationError::ActivityNotFound)?;

        let activity = match decide(&loaded.activity) {
            Decision::Accepted { activity } => activity,
            Decision::Rejected { reason } => return Err(ApplicationError::Domain(reason)),
        };

        match directory
            .save(activity_name, loaded.version, activity.clone())
            .await
        {
            Ok(()) => return Ok(activity),
            Err(DirectoryError::VersionMismatch { expected, actual }) => {
                tracing::warn!(
                    activity = activity_name,
                    expected,
                    actual,
                    attempt,
                    "version conflict, retrying"
                );
                attempt += 1;
            }
            Err(e) => return Err(e.into()),
        }
    }
}
