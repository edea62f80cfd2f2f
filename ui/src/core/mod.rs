//! Platform-agnostic helpers shared by every view.

pub mod config;
pub mod format;
pub mod platform;
pub mod timing;
