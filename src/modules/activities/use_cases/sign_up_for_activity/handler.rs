use std::sync::Arc;

use crate::modules::activities::adapters::outbound::directory::ActivityDirectory;
use crate::modules::activities::use_cases::errors::{ApplicationError, ErrorKind};
use crate::modules::activities::use_cases::sign_up_for_activity::command::SignUpForActivity;
use crate::modules::activities::use_cases::sign_up_for_activity::decide::decide_sign_up;
use crate::modules::activities::use_cases::write_flow::execute;

pub struct SignUpForActivityHandler<TDirectory>
where
    TDirectory: ActivityDirectory + 'static,
{
    directory: Arc<TDirectory>,
}

impl<TDirectory> SignUpForActivityHandler<TDirectory>
where
    TDirectory: ActivityDirectory + 'static,
{
    pub fn new(directory: Arc<TDirectory>) -> Self {
        Self { directory }
    }

    /// Returns the confirmation message on success.
    pub async fn handle(&self, command: SignUpForActivity) -> Result<String, ApplicationError> {
        let result = execute(&*self.directory, &command.activity_name, |activity| {
            decide_sign_up(activity, &command)
        })
        .await;

        match result {
            Ok(_) => {
                tracing::info!(
                    activity = %command.activity_name,
                    email = %command.email,
                    "participant signed up"
                );
                Ok(format!(
                    "Signed up {} for {}",
                    command.email, command.activity_name
                ))
            }
            Err(e) => {
                if e.kind() == ErrorKind::Unexpected {
                    tracing::error!(activity = %command.activity_name, error = %e, "signup failed");
                } else {
                    tracing::debug!(activity = %command.activity_name, error = %e, "signup rejected");
                }
                Err(e)
            }
        }
    }
}
