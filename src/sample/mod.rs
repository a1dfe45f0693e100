//! Seedable dummy roster generator.
//!
//! Produces drafts only; the session validates and stores them like any other input.

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

use crate::models::{Activity, ActivityToggles, College, Grade, Interest, ProfileDraft};

const LAST_NAMES: &[&str] = &[
    "김", "이", "박", "최", "정", "강", "조", "윤", "장", "임", "한", "오", "서", "신", "권", "황",
    "안", "송", "류", "홍",
];

const FIRST_NAMES: &[&str] = &[
    "민준", "서연", "지훈", "수빈", "예준", "서현", "도윤", "민서", "시우", "하은", "주원", "지유",
    "현우", "소윤", "준서", "다은", "우진", "채원", "지호", "유나",
];

/// Number of sample profiles generated when none is configured.
pub const DEFAULT_SAMPLE_SIZE: usize = 25;

/// Deterministic generator for `Some(seed)`, OS entropy otherwise.
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Generate `count` random but valid profile drafts.
pub fn generate_drafts<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<ProfileDraft> {
    (0..count).map(|_| generate_draft(rng)).collect()
}

fn generate_draft<R: Rng + ?Sized>(rng: &mut R) -> ProfileDraft {
    let college = pick(College::ALL, rng);
    let major = pick(college.majors(), rng);
    let name = format!("{}{}", pick(LAST_NAMES, rng), pick(FIRST_NAMES, rng));

    let interest_count = rng.random_range(1..=3);
    let interests: Vec<Interest> = Interest::ALL
        .choose_multiple(rng, interest_count)
        .copied()
        .collect();

    let grade = pick(Grade::ALL, rng);

    let mut activities = ActivityToggles::default();
    for activity in Activity::ALL {
        activities.set(*activity, rng.random_bool(0.5));
    }
    activities.ensure_one_enabled(pick(Activity::ALL, rng));

    ProfileDraft {
        name,
        grade,
        college,
        major,
        interests,
        activities,
    }
}

fn pick<T: Copy, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> T {
    items[rng.random_range(0..items.len())]
}
