use crate::modules::activities::core::activity::Activity;
use crate::modules::activities::core::decision::{DecideError, Decision};
use crate::modules::activities::use_cases::sign_up_for_activity::command::SignUpForActivity;

pub fn decide_sign_up(activity: &Activity, command: &SignUpForActivity) -> Decision {
    let email = command.email.as_str();
    if activity.is_participant(email) {
        return Decision::Rejected {
            reason: DecideError::AlreadySignedUp,
        };
    }
    if activity.is_full() {
        return Decision::Rejected {
            reason: DecideError::ActivityFull,
        };
    }

    let mut next = activity.clone();
    next.participants.push(email.to_string());
    Decision::Accepted { activity: next }
}
