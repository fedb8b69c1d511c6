//! Progression aggregate - level, experience, job class and derived title
//!
//! # Invariants
//!
//! - `job_title` always equals `job_title_for(level, job_class)`; every
//!   mutation that touches either recomputes it from the updated fields.
//! - `experience` stays below `EXPERIENCE_PER_LEVEL` (enforced by `Experience`).

use crate::events::{JobClassChange, LevelUp, LevelUpCause};
use crate::job_progression::{self, JobRank};
use crate::value_objects::{Experience, JobClass, Level};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Progression {
    level: Level,
    experience: Experience,
    job_class: JobClass,
    job_title: &'static str,
}

impl Progression {
    /// A fresh level 1 Swordsman Novice.
    pub fn new() -> Self {
        Self::restore(Level::FIRST, Experience::ZERO, JobClass::default())
    }

    /// Rebuild from stored fields. The title is derived, never trusted.
    pub fn restore(level: Level, experience: Experience, job_class: JobClass) -> Self {
        Self {
            level,
            experience,
            job_class,
            job_title: job_progression::job_title_for(level, job_class),
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn level(&self) -> Level {
        self.level
    }

    #[inline]
    pub fn experience(&self) -> Experience {
        self.experience
    }

    #[inline]
    pub fn job_class(&self) -> JobClass {
        self.job_class
    }

    #[inline]
    pub fn job_title(&self) -> &'static str {
        self.job_title
    }

    /// The next rank to work towards (or the `Max Level` sentinel).
    pub fn next_job(&self) -> JobRank {
        job_progression::next_job(self.level, self.job_class)
    }

    pub fn job_progress_percentage(&self) -> f64 {
        job_progression::job_progress_percentage(self.level, self.job_class)
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Gain exactly one level and rederive the title from the new level.
    pub fn gain_level(&mut self, cause: LevelUpCause) -> LevelUp {
        let previous_title = self.job_title;
        self.level = self.level.next();
        self.job_title = job_progression::job_title_for(self.level, self.job_class);
        LevelUp {
            level: self.level,
            job_title: self.job_title,
            title_changed: previous_title != self.job_title,
            cause,
        }
    }

    /// Add experience, gaining one level per filled bar.
    pub fn add_experience(&mut self, amount: u32) -> Vec<LevelUp> {
        let gain = self.experience.add(amount);
        self.experience = gain.experience;
        (0..gain.levels_filled)
            .map(|_| self.gain_level(LevelUpCause::ExperienceOverflow))
            .collect()
    }

    pub fn select_job_class(&mut self, class: JobClass) -> JobClassChange {
        if class == self.job_class {
            return JobClassChange::Unchanged { class };
        }
        let from = self.job_class;
        self.job_class = class;
        self.job_title = job_progression::job_title_for(self.level, class);
        JobClassChange::Changed {
            from,
            to: class,
            job_title: self.job_title,
        }
    }
}

impl Default for Progression {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::job_progression::job_title_for;

    fn at_level(value: u32, class: JobClass) -> Progression {
        Progression::restore(Level::new(value).expect("valid"), Experience::ZERO, class)
    }

    fn assert_title_consistent(p: &Progression) {
        assert_eq!(p.job_title(), job_title_for(p.level(), p.job_class()));
    }

    mod construction {
        use super::*;

        #[test]
        fn new_is_level_one_swordsman_novice() {
            let p = Progression::new();
            assert_eq!(p.level(), Level::FIRST);
            assert_eq!(p.experience(), Experience::ZERO);
            assert_eq!(p.job_class(), JobClass::Swordsman);
            assert_eq!(p.job_title(), "Novice");
        }

        #[test]
        fn restore_derives_title() {
            let p = at_level(31, JobClass::Merchant);
            assert_eq!(p.job_title(), "Blacksmith");
        }
    }

    mod leveling {
        use super::*;

        #[test]
        fn gain_level_uses_post_increment_level_for_title() {
            let mut p = at_level(10, JobClass::Archer);
            let up = p.gain_level(LevelUpCause::FiveMinuteMark);
            assert_eq!(up.level.value(), 11);
            assert_eq!(up.job_title, "Archer");
            assert!(up.title_changed);
            assert_eq!(p.job_title(), "Archer");
        }

        #[test]
        fn gain_level_within_a_rank_keeps_title() {
            let mut p = at_level(12, JobClass::Archer);
            let up = p.gain_level(LevelUpCause::ExperienceOverflow);
            assert!(!up.title_changed);
            assert_eq!(up.job_title, "Archer");
        }

        #[test]
        fn add_experience_wraps_and_levels() {
            let mut p = Progression::restore(
                Level::FIRST,
                Experience::new(80).expect("valid"),
                JobClass::Mage,
            );
            let ups = p.add_experience(20);
            assert_eq!(ups.len(), 1);
            assert_eq!(ups[0].cause, LevelUpCause::ExperienceOverflow);
            assert_eq!(p.level().value(), 2);
            assert_eq!(p.experience(), Experience::ZERO);
        }

        #[test]
        fn add_experience_below_threshold_only_accumulates() {
            let mut p = Progression::new();
            assert!(p.add_experience(20).is_empty());
            assert_eq!(p.experience().value(), 20);
            assert_eq!(p.level(), Level::FIRST);
        }
    }

    mod job_class {
        use super::*;

        #[test]
        fn select_recomputes_title_from_current_level() {
            let mut p = at_level(51, JobClass::Swordsman);
            let change = p.select_job_class(JobClass::Thief);
            assert_eq!(
                change,
                JobClassChange::Changed {
                    from: JobClass::Swordsman,
                    to: JobClass::Thief,
                    job_title: "Guillotine Cross",
                }
            );
            assert_title_consistent(&p);
        }

        #[test]
        fn selecting_same_class_is_unchanged() {
            let mut p = Progression::new();
            assert_eq!(
                p.select_job_class(JobClass::Swordsman),
                JobClassChange::Unchanged {
                    class: JobClass::Swordsman
                }
            );
        }

        #[test]
        fn select_then_gain_level_never_desyncs_title() {
            let mut p = at_level(9, JobClass::Swordsman);
            for class in JobClass::all() {
                p.select_job_class(class);
                assert_title_consistent(&p);
                p.gain_level(LevelUpCause::FiveMinuteMark);
                assert_title_consistent(&p);
            }
            assert_eq!(p.level().value(), 15);
            assert_eq!(p.job_title(), "Merchant");
        }
    }
}
