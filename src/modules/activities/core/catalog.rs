use crate::modules::activities::core::activity::Activity;

/// The fixed set of activities the directory starts with.
pub fn seed() -> Vec<(String, Activity)> {
    vec![
        (
            "Chess Club".to_string(),
            Activity::new(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
            )
            .with_participants(["michael@mergington.edu", "daniel@mergington.edu"]),
        ),
        (
            "Programming Class".to_string(),
            Activity::new(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
            )
            .with_participants(["emma@mergington.edu", "sophia@mergington.edu"]),
        ),
        (
            "Gym Class".to_string(),
            Activity::new(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
            )
            .with_participants(["john@mergington.edu", "olivia@mergington.edu"]),
        ),
        (
            "Tennis Club".to_string(),
            Activity::new(
                "Practice tennis skills and play friendly matches",
                "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
                10,
            )
            .with_participants(["liam@mergington.edu"]),
        ),
        (
            "Basketball Team".to_string(),
            Activity::new(
                "Train and compete in interschool basketball games",
                "Wednesdays, 4:00 PM - 6:00 PM",
                15,
            )
            .with_participants(["noah@mergington.edu"]),
        ),
        (
            "Art Club".to_string(),
            Activity::new(
                "Explore painting, drawing and sculpture",
                "Mondays, 3:30 PM - 5:00 PM",
                15,
            )
            .with_participants(["ava@mergington.edu"]),
        ),
        (
            "Drama Club".to_string(),
            Activity::new(
                "Rehearse and perform in school theater productions",
                "Thursdays, 3:30 PM - 5:30 PM",
                20,
            )
            .with_participants(["mia@mergington.edu"]),
        ),
        (
            "Math Olympiad".to_string(),
            Activity::new(
                "Solve challenging problems and prepare for math competitions",
                "Tuesdays, 3:30 PM - 4:30 PM",
                10,
            )
            .with_participants(["lucas@mergington.edu"]),
        ),
        (
            "Debate Team".to_string(),
            Activity::new(
                "Develop public speaking and argumentation skills",
                "Fridays, 4:00 PM - 5:30 PM",
                12,
            )
            .with_participants(["isabella@mergington.edu"]),
        ),
    ]
}
