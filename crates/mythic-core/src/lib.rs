//! # Mythic Core Library
//!
//! Core progression logic for Mythic, a gamified task tracker. Tasks belong
//! to one of three paths (Kriya, Gyana, Ojas) and completing them earns
//! Karma, levels, Punya, streak days, achievements and damage against the
//! boss of the week. The `mythic` CLI is a thin layer over this crate.
//!
//! ## Architecture
//!
//! - **Engine**: pure functions over [`ProfileState`] that return the
//!   [`Event`]s each mutation produced
//! - **Session**: a profile loaded from a [`KeyValueStore`] and written back
//!   after every mutation
//! - **Storage**: SQLite key-value table and TOML configuration
//!
//! ## Key Components
//!
//! - [`Session`]: load-then-mutate entry point
//! - [`ProfileState`]: the whole persisted profile
//! - [`Database`]: SQLite-backed key-value store
//! - [`Config`]: Application configuration management

pub mod achievements;
pub mod boss;
pub mod clock;
pub mod engine;
pub mod error;
pub mod events;
pub mod profile;
pub mod progression;
pub mod quest;
pub mod session;
pub mod storage;
pub mod task;

pub use achievements::{Achievement, Requirement};
pub use boss::{BossEncounter, Hit};
pub use clock::Moment;
pub use engine::{Completion, EngineConfig};
pub use error::{ConfigError, CoreError, StorageError, ValidationError};
pub use events::Event;
pub use profile::ProfileState;
pub use progression::{LevelProgress, Streak};
pub use quest::{Admission, Denial, PresetQuest};
pub use session::Session;
pub use storage::{Config, Database, KeyValueStore, MemoryStore, ProfileStore};
pub use task::{Category, Task};
