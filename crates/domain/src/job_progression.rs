//! Per-class job ladders and the level-to-title rules.

use serde::Serialize;

use crate::value_objects::{JobClass, Level};

/// Title every class starts with.
pub const NOVICE_TITLE: &str = "Novice";

/// Sentinel shown as the "next job" once the last rank is reached.
pub const MAX_LEVEL_TITLE: &str = "Max Level";

/// Level at which the sentinel sits.
pub const MAX_LEVEL: u32 = 100;

// =============================================================================
// Job Rank
// =============================================================================

/// One rung of a class ladder: the title held from `level` upward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct JobRank {
    pub level: u32,
    pub title: &'static str,
}

const fn rank(level: u32, title: &'static str) -> JobRank {
    JobRank { level, title }
}

const SWORDSMAN: [JobRank; 6] = [
    rank(1, NOVICE_TITLE),
    rank(11, "Swordsman"),
    rank(31, "Knight"),
    rank(51, "Lord Knight"),
    rank(71, "Rune Knight"),
    rank(91, "Eternal Knight"),
];

const ARCHER: [JobRank; 6] = [
    rank(1, NOVICE_TITLE),
    rank(11, "Archer"),
    rank(31, "Hunter"),
    rank(51, "Sniper"),
    rank(71, "Falcon Ranger"),
    rank(91, "Eternal Marksman"),
];

const MAGE: [JobRank; 6] = [
    rank(1, NOVICE_TITLE),
    rank(11, "Mage"),
    rank(31, "Wizard"),
    rank(51, "High Wizard"),
    rank(71, "Archmage"),
    rank(91, "Eternal Sorcerer"),
];

const THIEF: [JobRank; 6] = [
    rank(1, NOVICE_TITLE),
    rank(11, "Thief"),
    rank(31, "Assassin"),
    rank(51, "Guillotine Cross"),
    rank(71, "Shadow Reaper"),
    rank(91, "Eternal Phantom"),
];

const ACOLYTE: [JobRank; 6] = [
    rank(1, NOVICE_TITLE),
    rank(11, "Acolyte"),
    rank(31, "Priest"),
    rank(51, "High Priest"),
    rank(71, "Divine Cleric"),
    rank(91, "Eternal Saint"),
];

const MERCHANT: [JobRank; 6] = [
    rank(1, NOVICE_TITLE),
    rank(11, "Merchant"),
    rank(31, "Blacksmith"),
    rank(51, "Whitesmith"),
    rank(71, "Titan Forgemaster"),
    rank(91, "Eternal Tycoon"),
];

const MAX_LEVEL_RANK: JobRank = rank(MAX_LEVEL, MAX_LEVEL_TITLE);

/// The full ladder for a class, ascending by level, starting at Novice.
pub fn ladder(class: JobClass) -> &'static [JobRank] {
    match class {
        JobClass::Swordsman => &SWORDSMAN,
        JobClass::Archer => &ARCHER,
        JobClass::Mage => &MAGE,
        JobClass::Thief => &THIEF,
        JobClass::Acolyte => &ACOLYTE,
        JobClass::Merchant => &MERCHANT,
    }
}

/// Title of the highest rank whose threshold is at or below `level`.
pub fn job_title_for(level: Level, class: JobClass) -> &'static str {
    ladder(class)
        .iter()
        .rev()
        .find(|rank| level.value() >= rank.level)
        .map(|rank| rank.title)
        .unwrap_or(NOVICE_TITLE)
}

/// Same as [`job_title_for`] but keyed by a raw class name; unknown names use
/// the Swordsman ladder.
pub fn job_title_for_class_name(level: Level, class_name: &str) -> &'static str {
    job_title_for(level, JobClass::from_name_or_default(class_name))
}

/// The next rank to reach from `level`.
///
/// Skips the Novice rung and ends with the `Max Level` sentinel at level 100,
/// which is also returned once every threshold has been passed.
pub fn next_job(level: Level, class: JobClass) -> JobRank {
    ladder(class)
        .iter()
        .skip(1)
        .copied()
        .chain(std::iter::once(MAX_LEVEL_RANK))
        .find(|rank| level.value() < rank.level)
        .unwrap_or(MAX_LEVEL_RANK)
}

/// `level / next_job.level * 100`, capped at 100.
pub fn job_progress_percentage(level: Level, class: JobClass) -> f64 {
    let next = next_job(level, class);
    (f64::from(level.value()) / f64::from(next.level) * 100.0).min(100.0)
}

/// The rank following the one titled `current_title`, if any.
pub fn following_rank(current_title: &str, class: JobClass) -> Option<JobRank> {
    let ranks = ladder(class);
    let index = ranks
        .iter()
        .position(|rank| rank.title.eq_ignore_ascii_case(current_title))?;
    ranks.get(index + 1).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level(value: u32) -> Level {
        Level::new(value).expect("valid level")
    }

    mod titles {
        use super::*;

        #[test]
        fn level_one_is_novice_for_every_class() {
            for class in JobClass::all() {
                assert_eq!(job_title_for(level(1), class), NOVICE_TITLE);
            }
        }

        #[test]
        fn thresholds_are_inclusive() {
            assert_eq!(job_title_for(level(10), JobClass::Swordsman), "Novice");
            assert_eq!(job_title_for(level(11), JobClass::Swordsman), "Swordsman");
            assert_eq!(job_title_for(level(30), JobClass::Swordsman), "Swordsman");
            assert_eq!(job_title_for(level(31), JobClass::Swordsman), "Knight");
            assert_eq!(job_title_for(level(91), JobClass::Swordsman), "Eternal Knight");
            assert_eq!(job_title_for(level(250), JobClass::Swordsman), "Eternal Knight");
        }

        #[test]
        fn each_class_uses_its_own_ladder() {
            assert_eq!(job_title_for(level(51), JobClass::Archer), "Sniper");
            assert_eq!(job_title_for(level(71), JobClass::Mage), "Archmage");
            assert_eq!(job_title_for(level(51), JobClass::Thief), "Guillotine Cross");
            assert_eq!(job_title_for(level(31), JobClass::Acolyte), "Priest");
            assert_eq!(job_title_for(level(71), JobClass::Merchant), "Titan Forgemaster");
        }

        #[test]
        fn unknown_class_name_uses_swordsman_ladder() {
            assert_eq!(job_title_for_class_name(level(31), "Ninja"), "Knight");
            assert_eq!(job_title_for_class_name(level(31), "Mage"), "Wizard");
        }
    }

    mod next_job {
        use super::*;

        #[test]
        fn novice_aims_for_first_class_rank() {
            let next = next_job(level(1), JobClass::Mage);
            assert_eq!(next, JobRank { level: 11, title: "Mage" });
        }

        #[test]
        fn reaching_a_threshold_moves_to_the_following_one() {
            assert_eq!(next_job(level(11), JobClass::Archer).title, "Hunter");
            assert_eq!(next_job(level(90), JobClass::Archer).title, "Eternal Marksman");
        }

        #[test]
        fn top_rank_points_at_max_level_sentinel() {
            assert_eq!(next_job(level(91), JobClass::Thief), MAX_LEVEL_RANK);
            assert_eq!(next_job(level(150), JobClass::Thief), MAX_LEVEL_RANK);
        }

        #[test]
        fn progress_percentage_is_relative_to_next_threshold() {
            assert_eq!(job_progress_percentage(level(5), JobClass::Swordsman), 5.0 / 11.0 * 100.0);
            assert_eq!(job_progress_percentage(level(150), JobClass::Swordsman), 100.0);
        }
    }

    mod following_rank {
        use super::*;

        #[test]
        fn walks_the_ladder() {
            let next = following_rank("Lord Knight", JobClass::Swordsman).expect("has next");
            assert_eq!(next.title, "Rune Knight");
            assert_eq!(following_rank("novice", JobClass::Merchant).map(|r| r.title), Some("Merchant"));
        }

        #[test]
        fn top_or_foreign_title_has_none() {
            assert!(following_rank("Eternal Saint", JobClass::Acolyte).is_none());
            assert!(following_rank("Wizard", JobClass::Swordsman).is_none());
        }
    }
}
