//! ECS Components для participant entity
//!
//! - participant: Participant (requires Hotbar + Armory + SpawnAnchor), LocallyControlled marker

pub mod participant;

pub use participant::*;
