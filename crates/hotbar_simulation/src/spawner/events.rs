//! Spawner output events (ECS → scene layer / observers)

use bevy::prelude::*;

use super::{ObjectHandle, SpawnRequest};
use crate::inventory::ItemKindId;

/// Ammo text counter (bare integer как строка)
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct AmmoCounterChanged {
    pub participant: Entity,
    pub kind: ItemKindId,
    pub text: String,
}

/// Spawn authority создал объект
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct ObjectSpawned {
    pub participant: Entity,
    pub kind: ItemKindId,
    pub handle: ObjectHandle,
    pub request: SpawnRequest,
}

/// Scheduled despawn выполнен
///
/// `was_alive = false` — объект уже исчез другим путём (double despawn, no-op).
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObjectDespawned {
    pub participant: Entity,
    pub handle: ObjectHandle,
    pub was_alive: bool,
}
