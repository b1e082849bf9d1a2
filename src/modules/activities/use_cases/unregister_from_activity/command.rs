use crate::shared::core::primitives::Email;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnregisterFromActivity {
    pub activity_name: String,
    pub email: Email,
}
