use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::activities::core::activity::Activity;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
#[graphql(name = "Activity")]
pub struct GqlActivity {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
    pub spots_left: u32,
}

impl From<(String, Activity)> for GqlActivity {
    fn from((name, activity): (String, Activity)) -> Self {
        Self {
            spots_left: activity.spots_left(),
            name,
            description: activity.description,
            schedule: activity.schedule,
            max_participants: activity.max_participants,
            participants: activity.participants,
        }
    }
}

#[derive(Default)]
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn activities(&self, context: &Context<'_>) -> GqlResult<Vec<GqlActivity>> {
        let state = context.data_unchecked::<AppState>();
        let list = state.queries.list_activities().await?;
        Ok(list.into_iter().map(Into::into).collect())
    }
}
