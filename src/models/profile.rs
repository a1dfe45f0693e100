//! Student profile model and the desired-activity toggle map.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Activity, College, Grade, Interest, Major};
use crate::errors::AppError;

/// Maximum number of interest tags on a profile.
pub const MAX_INTERESTS: usize = 3;

/// One toggle per [`Activity`]. The fixed shape guarantees every activity has a key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityToggles {
    #[serde(rename = "공모전")]
    pub contest: bool,
    #[serde(rename = "대외활동")]
    pub external: bool,
    #[serde(rename = "창업")]
    pub startup: bool,
    #[serde(rename = "스터디")]
    pub study: bool,
    #[serde(rename = "프로젝트")]
    pub project: bool,
}

impl ActivityToggles {
    /// Toggles with only the given activities switched on.
    pub fn with(activities: &[Activity]) -> Self {
        let mut toggles = Self::default();
        for activity in activities {
            toggles.set(*activity, true);
        }
        toggles
    }

    pub fn get(&self, activity: Activity) -> bool {
        match activity {
            Activity::Contest => self.contest,
            Activity::External => self.external,
            Activity::Startup => self.startup,
            Activity::Study => self.study,
            Activity::Project => self.project,
        }
    }

    pub fn set(&mut self, activity: Activity, enabled: bool) {
        let slot = match activity {
            Activity::Contest => &mut self.contest,
            Activity::External => &mut self.external,
            Activity::Startup => &mut self.startup,
            Activity::Study => &mut self.study,
            Activity::Project => &mut self.project,
        };
        *slot = enabled;
    }

    /// Activities whose toggle is on, in catalog order.
    pub fn enabled(&self) -> impl Iterator<Item = Activity> + '_ {
        Activity::ALL.iter().copied().filter(move |a| self.get(*a))
    }

    /// True iff at least one toggle is on.
    pub fn is_activated(&self) -> bool {
        self.enabled().next().is_some()
    }

    /// Whether both toggle maps share at least one enabled activity.
    pub fn intersects(&self, other: &ActivityToggles) -> bool {
        self.enabled().any(|a| other.get(a))
    }

    pub fn intersects_any(&self, activities: &[Activity]) -> bool {
        activities.iter().any(|a| self.get(*a))
    }

    /// Switch `fallback` on when every toggle is off. Returns whether it changed anything.
    pub fn ensure_one_enabled(&mut self, fallback: Activity) -> bool {
        if self.is_activated() {
            return false;
        }
        self.set(fallback, true);
        true
    }
}

/// A candidate profile as submitted by the profile form.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDraft {
    pub name: String,
    pub grade: Grade,
    pub college: College,
    pub major: Major,
    pub interests: Vec<Interest>,
    #[serde(default)]
    pub activities: ActivityToggles,
}

impl ProfileDraft {
    /// Check required fields and the college/major pairing.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::Validation("Name is required".to_string()));
        }
        if !self.college.offers(self.major) {
            return Err(AppError::Validation(format!(
                "{} is not offered by {}",
                self.major, self.college
            )));
        }
        if self.interests.is_empty() {
            return Err(AppError::Validation(
                "At least one interest is required".to_string(),
            ));
        }
        if self.interests.len() > MAX_INTERESTS {
            return Err(AppError::Validation(format!(
                "At most {} interests are allowed",
                MAX_INTERESTS
            )));
        }
        for (i, interest) in self.interests.iter().enumerate() {
            if self.interests[..i].contains(interest) {
                return Err(AppError::Validation(format!(
                    "Interest {} is listed twice",
                    interest
                )));
            }
        }
        Ok(())
    }
}

/// A person available for matching.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: Uuid,
    pub name: String,
    pub grade: Grade,
    pub college: College,
    pub major: Major,
    pub interests: Vec<Interest>,
    pub activities: ActivityToggles,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    /// Build a profile from a validated draft.
    pub fn from_draft(id: Uuid, draft: ProfileDraft) -> Result<Self, AppError> {
        draft.validate()?;
        Ok(Self {
            id,
            name: draft.name.trim().to_string(),
            grade: draft.grade,
            college: draft.college,
            major: draft.major,
            interests: draft.interests,
            activities: draft.activities,
            updated_at: Utc::now(),
        })
    }

    /// Visible on discovery surfaces iff any activity toggle is on.
    pub fn is_activated(&self) -> bool {
        self.activities.is_activated()
    }

    pub fn has_interest(&self, interest: Interest) -> bool {
        self.interests.contains(&interest)
    }

    /// Approximate identity check used for self-exclusion: same name and same major.
    pub fn looks_like(&self, other: &Profile) -> bool {
        self.name == other.name && self.major == other.major
    }
}
