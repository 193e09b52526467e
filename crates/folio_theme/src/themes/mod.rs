//! Per-scheme class tables
//!
//! Each table maps a role plus the scrolled flag to the classes layered on top
//! of [`StyleRole::base`](crate::StyleRole::base).

pub mod dark;
pub mod light;
