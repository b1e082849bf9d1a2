use crate::modules::activities::adapters::outbound::directory_in_memory::InMemoryActivityDirectory;
use crate::modules::activities::use_cases::list_activities::queries_port::ActivityQueries;
use crate::modules::activities::use_cases::sign_up_for_activity::handler::SignUpForActivityHandler;
use crate::modules::activities::use_cases::unregister_from_activity::handler::UnregisterFromActivityHandler;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub queries: Arc<dyn ActivityQueries + Send + Sync>,
    pub sign_up_handler: Arc<SignUpForActivityHandler<InMemoryActivityDirectory>>,
    pub unregister_handler: Arc<UnregisterFromActivityHandler<InMemoryActivityDirectory>>,
}

impl AppState {
    pub fn in_memory(directory: Arc<InMemoryActivityDirectory>) -> Self {
        Self {
            queries: directory.clone(),
            sign_up_handler: Arc::new(SignUpForActivityHandler::new(directory.clone())),
            unregister_handler: Arc::new(UnregisterFromActivityHandler::new(directory)),
        }
    }
}
