//! Direct-message threads between the viewer and a roster profile.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Profile;

/// Sender name used when no profile has been registered in the session.
pub const ANONYMOUS_SENDER: &str = "익명";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub sender_name: String,
    pub text: String,
    pub sent_at: DateTime<FixedOffset>,
}

/// Ordered message log with one counterpart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatThread {
    /// Id of the counterpart profile
    pub key: Uuid,
    pub counterpart: Profile,
    pub messages: Vec<Message>,
}

impl ChatThread {
    pub fn new(counterpart: Profile) -> Self {
        Self {
            key: counterpart.id,
            counterpart,
            messages: Vec::new(),
        }
    }

    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }
}
