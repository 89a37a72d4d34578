//! Deterministic character logic shared across clients.
//!
//! `brawler-core` defines the action table, the animation clock, jump
//! trajectories, capability components and the per-character state machine.
//! It is synchronous and free of rendering, timers and input handling: a
//! shell drives it by calling action requests on input and
//! [`Character::advance_animation`] (or [`Session::tick`]) once per tick.
pub mod action;
pub mod animation;
pub mod capability;
pub mod character;
pub mod config;
pub mod error;
pub mod session;
pub mod state;
pub mod variant;

pub use action::{ActionKind, frame_count_by_name};
pub use animation::{AnimationClock, FrameAdvance};
pub use capability::{ManaPool, ManaSpec, Meter, ShieldSpec, ShieldState, Upkeep};
pub use character::{ActionOutcome, Character};
pub use config::GameConfig;
pub use error::CatalogError;
pub use session::{Command, Session, TickReport};
pub use state::{FrameRect, Position};
pub use variant::{
    Capabilities, SpriteKey, VariantCatalog, VariantKind, VariantParams, VariantSpec,
};
