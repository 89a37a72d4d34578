//! Data-driven content definitions and loaders.
//!
//! This crate ships the reference content as embedded data files and provides
//! loaders for user-supplied RON/TOML overrides:
//! - Game configuration (data-driven via TOML)
//! - Variant roster (data-driven via RON)
//!
//! All loaders use brawler-core types directly with serde for deserialization.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, RosterFile, RosterLoader};
