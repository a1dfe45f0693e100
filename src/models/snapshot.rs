//! Snapshot model handed to the presentation layer.

use chrono::{DateTime, FixedOffset};
use serde::Serialize;

use super::{ChatThread, Listing, Profile};

/// The complete state of one session.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub generated_at: DateTime<FixedOffset>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub my_profile: Option<Profile>,
    pub roster: Vec<Profile>,
    /// Most recent first
    pub listings: Vec<Listing>,
    pub chats: Vec<ChatThread>,
}
