//! Action entities - typed DOM mutation instructions.

pub mod config;
pub mod kind;
pub mod priority;

pub use config::{ActionConfig, ActionConfigId};
pub use kind::{ActionKind, InsertPosition};
pub use priority::ConfigPriority;
