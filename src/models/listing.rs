//! Recruitment listing model with per-seat requirements and comments.

use chrono::{DateTime, FixedOffset};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

use super::{College, Grade, Interest, Label, Profile};

/// Bounds on the number of seats a listing may declare.
pub const MIN_SEATS: usize = 1;
pub const MAX_SEATS: usize = 10;

/// Wildcard label for [`Preference::Any`].
pub const ANY: &str = "any";

/// A seat constraint that is either a wildcard or one specific value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preference<T> {
    Any,
    Only(T),
}

impl<T> Default for Preference<T> {
    fn default() -> Self {
        Preference::Any
    }
}

impl<T: PartialEq> Preference<T> {
    pub fn accepts(&self, value: &T) -> bool {
        match self {
            Preference::Any => true,
            Preference::Only(wanted) => wanted == value,
        }
    }
}

impl<T: Label> Serialize for Preference<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Preference::Any => serializer.serialize_str(ANY),
            Preference::Only(value) => serializer.serialize_str(value.label()),
        }
    }
}

impl<'de, T: Label> Deserialize<'de> for Preference<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        if raw == ANY {
            return Ok(Preference::Any);
        }
        T::parse_label(&raw)
            .map(Preference::Only)
            .ok_or_else(|| de::Error::custom(format!("unknown value: {}", raw)))
    }
}

/// What one open seat on a team asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatRequirement {
    #[serde(default)]
    pub grade: Preference<Grade>,
    #[serde(default)]
    pub college: Preference<College>,
    pub interest: Interest,
}

impl SeatRequirement {
    /// A seat that only constrains the interest tag.
    pub fn for_interest(interest: Interest) -> Self {
        Self {
            grade: Preference::Any,
            college: Preference::Any,
            interest,
        }
    }

    pub fn accepts(&self, profile: &Profile) -> bool {
        self.grade.accepts(&profile.grade)
            && self.college.accepts(&profile.college)
            && profile.has_interest(self.interest)
    }
}

/// A comment left on a listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub author_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<Profile>,
    pub text: String,
    pub created_at: DateTime<FixedOffset>,
}

/// A recruitment post. Only the comment list changes after posting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: Uuid,
    /// Author as they were when the listing was posted
    pub author: Profile,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<FixedOffset>,
    pub seats: Vec<SeatRequirement>,
    pub comments: Vec<Comment>,
}

impl Listing {
    /// Whether `profile` fits at least one open seat.
    pub fn wants(&self, profile: &Profile) -> bool {
        self.seats.iter().any(|seat| seat.accepts(profile))
    }
}

/// Request body for posting a new listing.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateListingRequest {
    pub title: String,
    pub body: String,
    pub seats: Vec<SeatRequirement>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActivityToggles, Major};

    fn profile(grade: Grade, college: College, major: Major, interests: &[Interest]) -> Profile {
        Profile {
            id: Uuid::new_v4(),
            name: "박지훈".to_string(),
            grade,
            college,
            major,
            interests: interests.to_vec(),
            activities: ActivityToggles::default(),
            updated_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_preference_accepts() {
        assert!(Preference::<Grade>::Any.accepts(&Grade::First));
        assert!(Preference::Only(Grade::Third).accepts(&Grade::Third));
        assert!(!Preference::Only(Grade::Third).accepts(&Grade::Fourth));
        assert_eq!(Preference::<College>::default(), Preference::Any);
    }

    #[test]
    fn test_seat_defaults_to_any_when_omitted() {
        let seat: SeatRequirement =
            serde_json::from_value(serde_json::json!({ "interest": "개발" })).unwrap();
        assert_eq!(seat.grade, Preference::Any);
        assert_eq!(seat.college, Preference::Any);
        assert_eq!(seat.interest, Interest::Development);
    }

    #[test]
    fn test_seat_serializes_wildcards_as_any() {
        let seat = SeatRequirement {
            grade: Preference::Only(Grade::Second),
            college: Preference::Any,
            interest: Interest::Design,
        };
        let value = serde_json::to_value(seat).unwrap();
        assert_eq!(value["grade"], "2학년");
        assert_eq!(value["college"], "any");
        assert_eq!(value["interest"], "디자인");
    }

    #[test]
    fn test_unknown_preference_label_is_rejected() {
        let result: Result<SeatRequirement, _> = serde_json::from_value(serde_json::json!({
            "college": "없는대학",
            "interest": "개발"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_seat_accepts_profile() {
        let dev = profile(
            Grade::Second,
            College::Engineering,
            Major::ComputerEngineering,
            &[Interest::Development, Interest::Planning],
        );
        assert!(SeatRequirement::for_interest(Interest::Development).accepts(&dev));
        assert!(!SeatRequirement::for_interest(Interest::Design).accepts(&dev));

        let strict = SeatRequirement {
            grade: Preference::Only(Grade::Second),
            college: Preference::Only(College::Business),
            interest: Interest::Planning,
        };
        assert!(!strict.accepts(&dev));
    }
}
