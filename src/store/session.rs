//! Session state container and its operations.
//!
//! Every operation validates first and mutates last, so a rejected call leaves the
//! session exactly as it was.

use std::collections::VecDeque;

use chrono::{DateTime, FixedOffset, Utc};
use uuid::Uuid;

use crate::errors::{AppError, AppResult};
use crate::models::{
    ChatThread, Comment, CreateListingRequest, Listing, Message, Profile, ProfileDraft, Snapshot,
    ANONYMOUS_SENDER, MAX_SEATS, MIN_SEATS,
};
use crate::sample;
use crate::search::{self, SearchFilters};

/// All state of one interactive session.
#[derive(Debug, Clone)]
pub struct Session {
    roster: Vec<Profile>,
    my_profile: Option<Profile>,
    listings: VecDeque<Listing>,
    chats: Vec<ChatThread>,
    display_offset: FixedOffset,
}

impl Session {
    pub fn new(display_offset: FixedOffset) -> Self {
        Self {
            roster: Vec::new(),
            my_profile: None,
            listings: VecDeque::new(),
            chats: Vec::new(),
            display_offset,
        }
    }

    fn now(&self) -> DateTime<FixedOffset> {
        Utc::now().with_timezone(&self.display_offset)
    }

    // ==================== READ VIEWS ====================

    pub fn roster(&self) -> &[Profile] {
        &self.roster
    }

    pub fn my_profile(&self) -> Option<&Profile> {
        self.my_profile.as_ref()
    }

    /// Listings, most recent first.
    pub fn listings(&self) -> impl Iterator<Item = &Listing> {
        self.listings.iter()
    }

    pub fn listing(&self, id: Uuid) -> Option<&Listing> {
        self.listings.iter().find(|l| l.id == id)
    }

    pub fn chats(&self) -> &[ChatThread] {
        &self.chats
    }

    pub fn chat_with(&self, target_id: Uuid) -> Option<&ChatThread> {
        self.chats.iter().find(|t| t.key == target_id)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            generated_at: self.now(),
            my_profile: self.my_profile.clone(),
            roster: self.roster.clone(),
            listings: self.listings.iter().cloned().collect(),
            chats: self.chats.clone(),
        }
    }

    // ==================== ROSTER OPERATIONS ====================

    /// Replace the roster with `drafts`. Nothing changes if any draft is invalid.
    pub fn load_roster(&mut self, drafts: Vec<ProfileDraft>) -> AppResult<usize> {
        let roster = drafts
            .into_iter()
            .map(|draft| Profile::from_draft(Uuid::new_v4(), draft))
            .collect::<AppResult<Vec<_>>>()?;

        self.roster = roster;
        tracing::info!("Roster loaded with {} profiles", self.roster.len());
        Ok(self.roster.len())
    }

    /// Replace the roster with `count` generated profiles.
    pub fn generate_sample_data(&mut self, count: usize, seed: Option<u64>) -> AppResult<usize> {
        let mut rng = sample::seeded_rng(seed);
        let drafts = sample::generate_drafts(count, &mut rng);
        self.load_roster(drafts)
    }

    /// Clear roster, listings, chats and the registered profile.
    pub fn reset(&mut self) {
        self.roster.clear();
        self.my_profile = None;
        self.listings.clear();
        self.chats.clear();
        tracing::info!("Session reset");
    }

    /// Insert or replace a profile by exact name and register it as "my profile".
    pub fn upsert_profile(&mut self, draft: ProfileDraft) -> AppResult<Profile> {
        if let Err(e) = draft.validate() {
            tracing::debug!("Profile rejected: {}", e);
            return Err(e);
        }

        let name = draft.name.trim();
        let existing = self.roster.iter().position(|p| p.name == name);
        let id = existing.map_or_else(Uuid::new_v4, |i| self.roster[i].id);
        let profile = Profile::from_draft(id, draft)?;

        match existing {
            Some(i) => {
                self.roster[i] = profile.clone();
                tracing::info!("Profile {} replaced", profile.name);
            }
            None => {
                self.roster.push(profile.clone());
                tracing::info!("Profile {} added", profile.name);
            }
        }

        self.my_profile = Some(profile.clone());
        Ok(profile)
    }

    /// Search the roster on behalf of the registered profile.
    pub fn search(&self, filters: &SearchFilters, require_mutual_activity: bool) -> Vec<&Profile> {
        search::search(
            &self.roster,
            filters,
            self.my_profile.as_ref(),
            require_mutual_activity,
        )
    }

    // ==================== BOARD OPERATIONS ====================

    /// Post a listing authored by the registered profile.
    pub fn post_listing(&mut self, request: CreateListingRequest) -> AppResult<Listing> {
        let author = self.registered("post a listing")?.clone();

        if request.title.trim().is_empty() {
            return Err(rejected("Title is required"));
        }
        if request.body.trim().is_empty() {
            return Err(rejected("Body is required"));
        }
        if !(MIN_SEATS..=MAX_SEATS).contains(&request.seats.len()) {
            return Err(rejected(&format!(
                "Seat count must be between {} and {}, got {}",
                MIN_SEATS,
                MAX_SEATS,
                request.seats.len()
            )));
        }

        let listing = Listing {
            id: Uuid::new_v4(),
            author,
            title: request.title,
            body: request.body,
            created_at: self.now(),
            seats: request.seats,
            comments: Vec::new(),
        };

        self.listings.push_front(listing.clone());
        tracing::info!(
            "Listing {} posted by {} with {} seats",
            listing.id,
            listing.author.name,
            listing.seats.len()
        );
        Ok(listing)
    }

    /// Append a comment from the registered profile.
    pub fn add_comment(&mut self, listing_id: Uuid, text: &str) -> AppResult<Comment> {
        if text.trim().is_empty() {
            return Err(rejected("Comment text is required"));
        }
        let author = self.registered("comment")?.clone();
        let created_at = self.now();

        let listing = self
            .listings
            .iter_mut()
            .find(|l| l.id == listing_id)
            .ok_or_else(|| AppError::NotFound(format!("Listing {} not found", listing_id)))?;

        let comment = Comment {
            author_name: author.name.clone(),
            author: Some(author),
            text: text.to_string(),
            created_at,
        };
        listing.comments.push(comment.clone());
        tracing::info!(
            "Comment added to listing {} ({} total)",
            listing_id,
            listing.comments.len()
        );
        Ok(comment)
    }

    /// Roster profiles the listing is implicitly aimed at.
    pub fn audience(&self, listing_id: Uuid) -> AppResult<Vec<&Profile>> {
        let listing = self
            .listing(listing_id)
            .ok_or_else(|| AppError::NotFound(format!("Listing {} not found", listing_id)))?;
        Ok(search::audience(&self.roster, listing))
    }

    // ==================== CHAT OPERATIONS ====================

    /// Send `text` to the roster profile `target_id`, opening a thread if needed.
    pub fn send_message(&mut self, target_id: Uuid, text: &str) -> AppResult<Message> {
        if text.trim().is_empty() {
            return Err(rejected("Message text is required"));
        }

        let message = Message {
            sender_name: self
                .my_profile
                .as_ref()
                .map_or_else(|| ANONYMOUS_SENDER.to_string(), |p| p.name.clone()),
            text: text.to_string(),
            sent_at: self.now(),
        };

        let index = match self.chats.iter().position(|t| t.key == target_id) {
            Some(i) => i,
            None => {
                let counterpart = self
                    .roster
                    .iter()
                    .find(|p| p.id == target_id)
                    .cloned()
                    .ok_or_else(|| {
                        AppError::NotFound(format!("Profile {} not found", target_id))
                    })?;
                tracing::info!("Chat opened with {}", counterpart.name);
                self.chats.push(ChatThread::new(counterpart));
                self.chats.len() - 1
            }
        };

        self.chats[index].messages.push(message.clone());
        Ok(message)
    }

    fn registered(&self, action: &str) -> AppResult<&Profile> {
        self.my_profile
            .as_ref()
            .ok_or_else(|| rejected(&format!("Register a profile to {}", action)))
    }
}

fn rejected(message: &str) -> AppError {
    tracing::debug!("Operation rejected: {}", message);
    AppError::Validation(message.to_string())
}
