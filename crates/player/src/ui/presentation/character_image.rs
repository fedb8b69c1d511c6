//! Character image paths derived from job titles.

use rlrpg_domain::{job_progression::following_rank, JobClass};

pub const CHARACTER_IMAGE_DIR: &str = "/images/characters";
pub const DEFAULT_CHARACTER_IMAGE: &str = "/images/characters/novice.png";

/// Lowercase the title and join its words with `-`.
pub fn image_slug(job_title: &str) -> String {
    let slug = job_title
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase();
    if slug.is_empty() {
        "novice".to_string()
    } else {
        slug
    }
}

pub fn character_image_path(job_title: &str) -> String {
    format!("{CHARACTER_IMAGE_DIR}/{}.png", image_slug(job_title))
}

/// Slug of the rank after `job_title` in the class ladder, `None` at the top
/// or for a title outside the ladder.
pub fn next_job_slug(job_title: &str, class: JobClass) -> Option<String> {
    following_rank(job_title, class).map(|rank| image_slug(rank.title))
}
