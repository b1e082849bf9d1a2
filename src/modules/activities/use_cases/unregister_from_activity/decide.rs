use crate::modules::activities::core::activity::Activity;
use crate::modules::activities::core::decision::{DecideError, Decision};
use crate::modules::activities::use_cases::unregister_from_activity::command::UnregisterFromActivity;

pub fn decide_unregister(activity: &Activity, command: &UnregisterFromActivity) -> Decision {
    let email = command.email.as_str();
    if !activity.is_participant(email) {
        return Decision::Rejected {
            reason: DecideError::NotSignedUp,
        };
    }

    let mut next = activity.clone();
    next.participants.retain(|p| p != email);
    Decision::Accepted { activity: next }
}
