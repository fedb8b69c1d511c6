//! Presentation helpers shared by front ends.

pub mod character_image;
pub mod view;

pub use character_image::{
    character_image_path, image_slug, next_job_slug, DEFAULT_CHARACTER_IMAGE,
};
pub use view::{TaskRow, WidgetView};
