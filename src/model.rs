use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::initials::initials;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: i64,
    #[serde(default)]
    pub participants: Vec<String>,
}

/// Activity name -> details, kept in the order the server sent them.
pub type ActivitiesSnapshot = IndexMap<String, Activity>;

impl Activity {
    /// Not clamped: an oversubscribed activity yields a negative count.
    pub fn spots_left(&self) -> i64 {
        self.max_participants - self.participants.len() as i64
    }

    pub fn availability_text(&self) -> String {
        let spots = self.spots_left();
        if spots > 0 {
            format!("{spots} spots left")
        } else {
            "Full".to_string()
        }
    }

    /// Rows for the participants sub-list; never empty.
    pub fn participant_rows(&self) -> Vec<ParticipantRow> {
        if self.participants.is_empty() {
            return vec![ParticipantRow::Placeholder];
        }
        self.participants
            .iter()
            .map(|email| ParticipantRow::Member {
                initials: initials(email),
                email: email.clone(),
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParticipantRow {
    Member { email: String, initials: String },
    Placeholder,
}

pub const NO_PARTICIPANTS_TEXT: &str = "No participants yet";

pub fn parse_snapshot(body: &str) -> Result<ActivitiesSnapshot, serde_json::Error> {
    serde_json::from_str(body)
}
