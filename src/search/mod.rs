//! Roster search and aggregation.
//!
//! Every predicate is a linear scan in roster order. Filters are conjunctive across
//! categories and disjunctive within one category; an empty category does not filter.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::{Activity, College, Grade, Interest, Listing, Major, Profile};

/// Multi-select filters from the team-search view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilters {
    #[serde(default)]
    pub majors: Vec<Major>,
    #[serde(default)]
    pub colleges: Vec<College>,
    #[serde(default)]
    pub grades: Vec<Grade>,
    #[serde(default)]
    pub interests: Vec<Interest>,
    #[serde(default)]
    pub activities: Vec<Activity>,
}

impl SearchFilters {
    pub fn is_empty(&self) -> bool {
        self.majors.is_empty()
            && self.colleges.is_empty()
            && self.grades.is_empty()
            && self.interests.is_empty()
            && self.activities.is_empty()
    }

    /// Whether `profile` passes every selected category.
    pub fn matches(&self, profile: &Profile) -> bool {
        (self.majors.is_empty() || self.majors.contains(&profile.major))
            && (self.colleges.is_empty() || self.colleges.contains(&profile.college))
            && (self.grades.is_empty() || self.grades.contains(&profile.grade))
            && (self.interests.is_empty()
                || self.interests.iter().any(|i| profile.has_interest(*i)))
            && (self.activities.is_empty() || profile.activities.intersects_any(&self.activities))
    }
}

/// Dimension for [`aggregate_by`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Dimension {
    /// One bucket per profile
    College,
    /// One bucket per tag a profile holds
    Interest,
}

/// Search `roster` for teammates, preserving roster order.
///
/// Non-activated profiles are never returned. When a viewer is given, the entry that
/// shares the viewer's name and major is skipped, and with `require_mutual_activity`
/// only profiles sharing at least one enabled activity with the viewer remain.
pub fn search<'a>(
    roster: &'a [Profile],
    filters: &SearchFilters,
    viewer: Option<&Profile>,
    require_mutual_activity: bool,
) -> Vec<&'a Profile> {
    let results: Vec<&Profile> = roster
        .iter()
        .filter(|profile| profile.is_activated())
        .filter(|profile| viewer.map_or(true, |me| !profile.looks_like(me)))
        .filter(|profile| match viewer {
            Some(me) if require_mutual_activity => profile.activities.intersects(&me.activities),
            _ => true,
        })
        .filter(|profile| filters.matches(profile))
        .collect();

    tracing::debug!(
        roster = roster.len(),
        matched = results.len(),
        mutual = require_mutual_activity,
        "roster search"
    );
    results
}

/// Count profiles per label of `dimension`.
pub fn aggregate_by<'a, I>(profiles: I, dimension: Dimension) -> BTreeMap<&'static str, usize>
where
    I: IntoIterator<Item = &'a Profile>,
{
    let mut counts = BTreeMap::new();
    for profile in profiles {
        match dimension {
            Dimension::College => {
                *counts.entry(profile.college.as_str()).or_insert(0) += 1;
            }
            Dimension::Interest => {
                for interest in &profile.interests {
                    *counts.entry(interest.as_str()).or_insert(0) += 1;
                }
            }
        }
    }
    counts
}

/// Profiles a listing is implicitly targeted at on the community board.
///
/// Same visibility rules as [`search`], with the listing author standing in for the viewer.
pub fn audience<'a>(roster: &'a [Profile], listing: &Listing) -> Vec<&'a Profile> {
    roster
        .iter()
        .filter(|profile| profile.is_activated())
        .filter(|profile| !profile.looks_like(&listing.author))
        .filter(|profile| listing.wants(profile))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActivityToggles, Preference, SeatRequirement};
    use chrono::Utc;
    use uuid::Uuid;

    fn profile(
        name: &str,
        grade: Grade,
        major: Major,
        interests: &[Interest],
        activities: &[Activity],
    ) -> Profile {
        Profile {
            id: Uuid::new_v4(),
            name: name.to_string(),
            grade,
            college: major.college(),
            major,
            interests: interests.to_vec(),
            activities: ActivityToggles::with(activities),
            updated_at: Utc::now(),
        }
    }

    fn roster() -> Vec<Profile> {
        vec![
            profile(
                "A",
                Grade::Second,
                Major::ComputerEngineering,
                &[Interest::Development],
                &[Activity::Contest],
            ),
            profile(
                "B",
                Grade::Third,
                Major::VisualDesign,
                &[Interest::Design, Interest::VideoProduction],
                &[Activity::Project, Activity::Study],
            ),
            profile(
                "C",
                Grade::First,
                Major::BusinessAdministration,
                &[Interest::Planning, Interest::Marketing, Interest::Research],
                &[],
            ),
            profile(
                "D",
                Grade::Fourth,
                Major::Mathematics,
                &[Interest::DataAnalysis, Interest::Development],
                &[Activity::Study],
            ),
        ]
    }

    fn names(profiles: &[&Profile]) -> Vec<String> {
        profiles.iter().map(|p| p.name.clone()).collect()
    }

    #[test]
    fn test_single_profile_interest_scenarios() {
        let roster = vec![roster().remove(0)];

        let hits = search(
            &roster,
            &SearchFilters {
                interests: vec![Interest::Development],
                ..Default::default()
            },
            None,
            false,
        );
        assert_eq!(names(&hits), vec!["A"]);

        let misses = search(
            &roster,
            &SearchFilters {
                interests: vec![Interest::Design],
                ..Default::default()
            },
            None,
            false,
        );
        assert!(misses.is_empty());
    }

    #[test]
    fn test_empty_filters_return_activated_roster_in_order() {
        let roster = roster();
        let results = search(&roster, &SearchFilters::default(), None, false);
        assert_eq!(names(&results), vec!["A", "B", "D"]);
    }

    #[test]
    fn test_never_returns_deactivated_profiles() {
        let roster = roster();
        let filters = SearchFilters {
            majors: vec![Major::BusinessAdministration],
            ..Default::default()
        };
        assert!(search(&roster, &filters, None, false).is_empty());
        for profile in search(&roster, &SearchFilters::default(), None, false) {
            assert!(profile.is_activated());
        }
    }

    #[test]
    fn test_viewer_is_excluded_by_name_and_major() {
        let roster = roster();
        let viewer = roster[0].clone();
        let results = search(&roster, &SearchFilters::default(), Some(&viewer), false);
        assert_eq!(names(&results), vec!["B", "D"]);

        // Same name but a different major is treated as someone else.
        let mut renamed = viewer.clone();
        renamed.major = Major::Physics;
        let results = search(&roster, &SearchFilters::default(), Some(&renamed), false);
        assert_eq!(names(&results), vec!["A", "B", "D"]);
    }

    #[test]
    fn test_mutual_activity_requires_shared_toggle() {
        let roster = roster();
        let viewer = profile(
            "Me",
            Grade::Second,
            Major::Physics,
            &[Interest::Research],
            &[Activity::Study],
        );
        let results = search(&roster, &SearchFilters::default(), Some(&viewer), true);
        assert_eq!(names(&results), vec!["B", "D"]);
        for p in &results {
            assert!(p.activities.intersects(&viewer.activities));
        }

        // Without a viewer the flag has no effect.
        let results = search(&roster, &SearchFilters::default(), None, true);
        assert_eq!(names(&results), vec!["A", "B", "D"]);
    }

    #[test]
    fn test_categories_are_and_values_are_or() {
        let roster = roster();
        let filters = SearchFilters {
            interests: vec![Interest::Development, Interest::Design],
            grades: vec![Grade::Second, Grade::Fourth],
            ..Default::default()
        };
        assert_eq!(names(&search(&roster, &filters, None, false)), vec!["A", "D"]);

        let filters = SearchFilters {
            colleges: vec![College::Arts],
            activities: vec![Activity::Project],
            ..Default::default()
        };
        assert_eq!(names(&search(&roster, &filters, None, false)), vec!["B"]);

        let filters = SearchFilters {
            colleges: vec![College::Arts],
            activities: vec![Activity::Contest],
            ..Default::default()
        };
        assert!(search(&roster, &filters, None, false).is_empty());
    }

    #[test]
    fn test_aggregate_by_interest_counts_tag_occurrences() {
        let roster = roster();
        let counts = aggregate_by(&roster, Dimension::Interest);
        let total: usize = counts.values().sum();
        let occurrences: usize = roster.iter().map(|p| p.interests.len()).sum();
        assert_eq!(total, occurrences);
        assert_eq!(total, 8);
        assert_eq!(counts["개발"], 2);
    }

    #[test]
    fn test_aggregate_by_college_counts_profiles() {
        let roster = roster();
        let counts = aggregate_by(&roster, Dimension::College);
        assert_eq!(counts.values().sum::<usize>(), roster.len());
        assert_eq!(counts["공과대학"], 1);
        assert!(aggregate_by(Vec::<&Profile>::new(), Dimension::College).is_empty());
    }

    #[test]
    fn test_audience_matches_any_seat_and_skips_author() {
        let roster = roster();
        let listing = Listing {
            id: Uuid::new_v4(),
            author: roster[3].clone(),
            title: "데이터 공모전".to_string(),
            body: "같이 하실 분".to_string(),
            created_at: Utc::now().fixed_offset(),
            seats: vec![
                SeatRequirement::for_interest(Interest::Development),
                SeatRequirement {
                    grade: Preference::Only(Grade::First),
                    college: Preference::Any,
                    interest: Interest::Planning,
                },
            ],
            comments: Vec::new(),
        };
        // D is the author; C matches the second seat but is not activated.
        assert_eq!(names(&audience(&roster, &listing)), vec!["A"]);
    }
}
