//! Platform-agnostic navbar state plus the thin browser glue it needs.

pub mod menu;
pub mod platform;
pub mod scroll;
pub mod surface;
