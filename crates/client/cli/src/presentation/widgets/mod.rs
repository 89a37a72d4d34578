//! Panel widgets. Each is a pure render function over session state.
pub mod footer;
pub mod header;
pub mod messages;
pub mod stage;
pub mod stats;
