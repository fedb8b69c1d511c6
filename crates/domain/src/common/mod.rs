//! Common pure helpers shared by the domain and its front ends.
//!
//! - **Pure functions only** - no side effects, no I/O

pub mod time_format;

pub use time_format::format_hms;
