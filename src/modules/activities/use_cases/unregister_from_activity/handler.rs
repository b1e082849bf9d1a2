use std::sync::Arc;

use crate::modules::activities::adapters::outbound::directory::ActivityDirectory;
use crate::modules::activities::use_cases::errors::{ApplicationError, ErrorKind};
use crate::modules::activities::use_cases::unregister_from_activity::command::UnregisterFromActivity;
use crate::modules::activities::use_cases::unregister_from_activity::decide::decide_unregister;
use crate::modules::activities::use_cases::write_flow::execute;

pub struct UnregisterFromActivityHandler<TDirectory>
where
    TDirectory: ActivityDirectory + 'static,
{
    directory: Arc<TDirectory>,
}

impl<TDirectory> UnregisterFromActivityHandler<TDirectory>
where
    TDirectory: ActivityDirectory + 'static,
{
    pub fn new(directory: Arc<TDirectory>) -> Self {
        Self { directory }
    }

    pub async fn handle(
        &self,
        command: UnregisterFromActivity,
    ) -> Result<String, ApplicationError> {
        let result = execute(&*self.directory, &command.activity_name, |activity| {
            decide_unregister(activity, &command)
        })
        .await;

        match result {
            Ok(_) => {
                tracing::info!(
                    activity = %command.activity_name,
                    email = %command.email,
                    "participant unregistered"
                );
                Ok(format!(
                    "Unregistered {} from {}",
                    command.email, command.activity_name
                ))
            }
            Err(e) if e.kind() == ErrorKind::Unexpected => {
                tracing::error!(activity = %command.activity_name, error = %e, "unregister failed");
                Err(e)
            }
            Err(e) => {
                tracing::debug!(activity = %command.activity_name, error = %e, "unregister rejected");
                Err(e)
            }
        }
    }
}
