//! Spawner module — cooldown-gated spawn + scheduled despawn
//!
//! # Architecture
//!
//! **Fire flow:**
//! 1. Input gate эмитит `FireCommand` (authority + modal panels уже проверены)
//! 2. `process_fire_commands` читает `Hotbar::selected_item_kind()` (read-only)
//! 3. `Armory::try_fire` — ammo + cooldown
//! 4. Pose от `SpawnAnchor` → `SpawnAuthority::spawn` → `DespawnQueue::schedule`
//!
//! **Despawn flow:**
//! - `drain_due_despawns` каждый tick забирает истёкшие deadlines → `SpawnAuthority::despawn`
//!
//! Hotbar spawner'ом никогда не мутируется.

use bevy::prelude::*;

pub mod anchor;
pub mod armory;
pub mod authority;
pub mod despawn_queue;
pub mod events;
pub mod systems;


pub use anchor::*;
pub use armory::*;
pub use authority::*;
pub use despawn_queue::*;
pub use events::*;
pub use systems::*;

use crate::LoadoutSet;

/// Spawner plugin
///
/// `SpawnService` не ставится автоматически: network layer (или host) вставляет свой.
pub struct SpawnerPlugin;

impl Plugin for SpawnerPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<Armory>()
            .register_type::<SpawnAnchor>()
            .init_resource::<DespawnQueue>()
            .add_event::<AmmoCounterChanged>()
            .add_event::<ObjectSpawned>()
            .add_event::<ObjectDespawned>()
            .add_systems(
                FixedUpdate,
                (
                    init_local_armory.in_set(LoadoutSet::Setup),
                    process_fire_commands.in_set(LoadoutSet::Fire),
                    drain_due_despawns.in_set(LoadoutSet::Expire),
                ),
            );
    }
}
