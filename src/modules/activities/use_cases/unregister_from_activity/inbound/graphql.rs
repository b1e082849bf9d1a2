use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::activities::use_cases::unregister_from_activity::command::UnregisterFromActivity;
use crate::shared::core::primitives::Email;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct UnregisterMutation;

#[Object]
impl UnregisterMutation {
    async fn unregister_from_activity(
        &self,
        context: &Context<'_>,
        activity_name: String,
        email: String,
    ) -> GqlResult<String> {
        let state = context.data_unchecked::<AppState>();
        let command = UnregisterFromActivity {
            activity_name,
            email: Email::parse(email)?,
        };

        Ok(state.unregister_handler.handle(command).await?)
    }
}
