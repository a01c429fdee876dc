use std::cell::{Cell, RefCell};

use activity_board::{
    ActivitiesApi, ActivitiesSnapshot, Activity, ActivityBoard, ApiError, ApiReply, BoardConfig,
    FlashStyle, ParticipantRow,
};
use futures::executor::block_on;

/// In-memory backend with the same rules as the real service.
struct FakeServer {
    activities: RefCell<ActivitiesSnapshot>,
    requests: Cell<usize>,
    /// When set, unregister succeeds with an empty `{}` body.
    terse_unregister: bool,
}

impl FakeServer {
    fn seeded() -> Self {
        let mut activities = ActivitiesSnapshot::new();
        activities.insert(
            "Chess Club".into(),
            Activity {
                description: "Learn strategies and compete in chess tournaments".into(),
                schedule: "Fridays, 3:30 PM - 5:00 PM".into(),
                max_participants: 12,
                participants: vec!["michael@mergington.edu".into(), "daniel@mergington.edu".into()],
            },
        );
        activities.insert(
            "Programming Class".into(),
            Activity {
                description: "Learn programming fundamentals and build software projects".into(),
                schedule: "Tuesdays and Thursdays, 3:30 PM - 4:30 PM".into(),
                max_participants: 20,
                participants: vec![],
            },
        );
        Self {
            activities: RefCell::new(activities),
            requests: Cell::new(0),
            terse_unregister: false,
        }
    }

    fn count(&self) {
        self.requests.set(self.requests.get() + 1);
    }
}

fn not_found() -> ApiError {
    ApiError::Server {
        status: 404,
        detail: Some("Activity not found".into()),
    }
}

impl ActivitiesApi for FakeServer {
    async fn fetch_activities(&self) -> Result<ActivitiesSnapshot, ApiError> {
        self.count();
        Ok(self.activities.borrow().clone())
    }

    async fn signup(&self, activity: &str, email: &str) -> Result<ApiReply, ApiError> {
        self.count();
        let mut activities = self.activities.borrow_mut();
        let a = activities.get_mut(activity).ok_or_else(not_found)?;
        if a.participants.iter().any(|p| p == email) {
            return Err(ApiError::Server {
                status: 400,
                detail: Some("Already signed up".into()),
            });
        }
        a.participants.push(email.to_string());
        Ok(ApiReply {
            message: Some(format!("Signed up {email} for {activity}")),
            detail: None,
        })
    }

    async fn unregister(&self, activity: &str, email: &str) -> Result<ApiReply, ApiError> {
        self.count();
        let mut activities = self.activities.borrow_mut();
        let a = activities.get_mut(activity).ok_or_else(not_found)?;
        let before = a.participants.len();
        a.participants.retain(|p| p != email);
        if a.participants.len() == before {
            return Err(ApiError::Server {
                status: 404,
                detail: Some("Participant not found".into()),
            });
        }
        if self.terse_unregister {
            return Ok(ApiReply::default());
        }
        Ok(ApiReply {
            message: Some(format!("Unregistered {email} from {activity}")),
            detail: None,
        })
    }
}

fn board(server: FakeServer) -> ActivityBoard<FakeServer> {
    ActivityBoard::new(server, BoardConfig::default())
}

fn member_emails(snapshot: &ActivitiesSnapshot, activity: &str) -> Vec<String> {
    snapshot[activity]
        .participant_rows()
        .into_iter()
        .filter_map(|row| match row {
            ParticipantRow::Member { email, .. } => Some(email),
            ParticipantRow::Placeholder => None,
        })
        .collect()
}

#[test]
fn load_preserves_server_order_and_placeholder_rows() {
    let b = board(FakeServer::seeded());
    let snapshot = block_on(b.load()).unwrap();

    let names: Vec<&str> = snapshot.keys().map(String::as_str).collect();
    assert_eq!(names, ["Chess Club", "Programming Class"]);

    for activity in snapshot.values() {
        assert_eq!(activity.participant_rows().len(), activity.participants.len().max(1));
    }
    assert_eq!(
        snapshot["Programming Class"].participant_rows(),
        vec![ParticipantRow::Placeholder]
    );
    assert_eq!(snapshot["Chess Club"].availability_text(), "10 spots left");
}

#[test]
fn signup_then_reload_shows_new_participant() {
    let b = board(FakeServer::seeded());
    let m = block_on(b.submit_signup("new.student@mergington.edu", "Programming Class"));
    assert_eq!(m.flash.style, FlashStyle::Success);
    assert_eq!(m.flash.text, "Signed up new.student@mergington.edu for Programming Class");
    assert!(m.refresh && m.reset_form);

    let snapshot = block_on(b.load()).unwrap();
    assert_eq!(
        member_emails(&snapshot, "Programming Class"),
        ["new.student@mergington.edu"]
    );
    assert_eq!(
        snapshot["Programming Class"].participant_rows(),
        vec![ParticipantRow::Member {
            email: "new.student@mergington.edu".into(),
            initials: "NS".into(),
        }]
    );
}

#[test]
fn duplicate_signup_shows_server_detail_without_reset_or_refresh() {
    let b = board(FakeServer::seeded());
    let m = block_on(b.submit_signup("michael@mergington.edu", "Chess Club"));
    assert_eq!(m.flash.text, "Already signed up");
    assert_eq!(m.flash.style.class(), "message error");
    assert_eq!(m.flash.hide_after_ms, 5000);
    assert!(!m.reset_form);
    assert!(!m.refresh);
}

#[test]
fn cancelled_removal_sends_no_request_and_changes_nothing() {
    let b = board(FakeServer::seeded());
    let before = block_on(b.load()).unwrap();
    let sent = b.api().requests.get();

    let outcome = block_on(b.remove_participant("Chess Club", "michael@mergington.edu", |_| false));
    assert!(outcome.is_none());
    assert_eq!(b.api().requests.get(), sent);
    assert_eq!(*b.api().activities.borrow(), before);
}

#[test]
fn confirmed_removal_with_empty_body_uses_fallback_and_refreshes() {
    let server = FakeServer {
        terse_unregister: true,
        ..FakeServer::seeded()
    };
    let b = board(server);

    let m = block_on(b.remove_participant("Chess Club", "daniel@mergington.edu", |prompt| {
        prompt == "Remove daniel@mergington.edu from Chess Club?"
    }))
    .unwrap();
    assert_eq!(m.flash.text, "Removed daniel@mergington.edu");
    assert_eq!(m.flash.style, FlashStyle::Success);
    assert_eq!(m.flash.hide_after_ms, 4000);
    assert!(m.refresh);

    let snapshot = block_on(b.load()).unwrap();
    assert_eq!(member_emails(&snapshot, "Chess Club"), ["michael@mergington.edu"]);
}

#[test]
fn removing_unknown_participant_reports_detail() {
    let b = board(FakeServer::seeded());
    let m = block_on(b.unregister_participant("Chess Club", "ghost@mergington.edu"));
    assert_eq!(m.flash.text, "Participant not found");
    assert_eq!(m.flash.style, FlashStyle::Error);
    assert!(!m.refresh);
}

#[test]
fn signup_for_unknown_activity_reports_detail() {
    let b = board(FakeServer::seeded());
    let m = block_on(b.submit_signup("a@mergington.edu", "Underwater Basket Weaving"));
    assert_eq!(m.flash.text, "Activity not found");
    assert!(!m.refresh);
}
