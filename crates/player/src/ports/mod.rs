//! Port definitions for the player crate.

pub mod outbound;
