//! Spawner system implementations
//!
//! # Systems
//!
//! - `init_local_armory` — ammo/cooldown entries при подтверждении local control
//! - `process_fire_commands` — FireCommand → try_fire → spawn + schedule despawn
//! - `drain_due_despawns` — истёкшие deadlines → despawn

use bevy::prelude::*;

use super::{
    spawn_pose, AmmoCounterChanged, Armory, DespawnQueue, FireError, ObjectDespawned, ObjectSpawned,
    SpawnAnchor, SpawnService,
};
use crate::components::LocallyControlled;
use crate::config::LoadoutConfig;
use crate::input::FireCommand;
use crate::inventory::{Hotbar, ItemKindId};
use crate::logger::{log, log_info, log_warning, log_with_level};
use crate::shared::SimClock;

// ============================================================================
// Init
// ============================================================================

/// System: local participant подтверждён → Armory из LoadoutConfig + начальные counters
pub fn init_local_armory(
    config: Res<LoadoutConfig>,
    mut joined: Query<(Entity, &mut Armory), Added<LocallyControlled>>,
    mut counters: EventWriter<AmmoCounterChanged>,
) {
    for (participant, mut armory) in joined.iter_mut() {
        *armory = Armory::from_config(&config);

        for (kind, entry) in armory.kinds() {
            counters.write(counter_text(participant, kind, entry.ammo_remaining));
        }
    }
}

// ============================================================================
// Fire
// ============================================================================

/// System: обработка FireCommand
///
/// # Flow
/// 1. Максимум один fire на participant за tick (остальные в этом tick'е отбрасываются)
/// 2. Guard: ничего не выбрано → skip
/// 3. Guard: нет anchor → warning, skip (ammo не тратится)
/// 4. `Armory::try_fire` (ammo + cooldown) → spawn → schedule despawn
pub fn process_fire_commands(
    mut fires: EventReader<FireCommand>,
    clock: Res<SimClock>,
    config: Res<LoadoutConfig>,
    mut participants: Query<(&Hotbar, &mut Armory, &SpawnAnchor)>,
    anchors: Query<&Transform>,
    mut service: Option<ResMut<SpawnService>>,
    mut queue: ResMut<DespawnQueue>,
    mut counters: EventWriter<AmmoCounterChanged>,
    mut spawned: EventWriter<ObjectSpawned>,
) {
    let now = clock.now;
    let mut fired_this_tick: Vec<Entity> = Vec::new();

    for fire in fires.read() {
        let participant = fire.participant;

        if fired_this_tick.contains(&participant) {
            log(&format!("🔫 Extra fire from {:?} dropped (one per tick)", participant));
            continue;
        }
        fired_this_tick.push(participant);

        let Ok((hotbar, mut armory, anchor)) = participants.get_mut(participant) else {
            continue;
        };

        let Some(kind) = hotbar.selected_item_kind() else {
            report(&FireError::NothingSelected);
            continue;
        };

        let Some(anchor_transform) = anchor.0.and_then(|entity| anchors.get(entity).ok()) else {
            report(&FireError::MissingAnchor);
            continue;
        };

        let Some(authority) = service.as_mut() else {
            log_warning("🔫 No SpawnService installed, fire ignored");
            continue;
        };

        let ticket = match armory.try_fire(kind, now) {
            Ok(ticket) => ticket,
            Err(err) => {
                report(&err);
                continue;
            }
        };

        let request = spawn_pose(kind.index(), anchor_transform, &config.spawn_offset);
        let handle = authority.0.spawn(&request);
        queue.schedule(handle, participant, ticket.despawn_at);

        counters.write(counter_text(participant, kind, ticket.ammo_remaining));
        spawned.write(ObjectSpawned {
            participant,
            kind,
            handle,
            request,
        });

        log_info(&format!(
            "🔫 {:?} fired {} → {:?} at {:?} (ammo left: {}, despawn at {:?})",
            participant, kind, handle, request.position, ticket.ammo_remaining, ticket.despawn_at
        ));
    }
}

// ============================================================================
// Despawn
// ============================================================================

/// System: despawn объектов с истёкшим deadline
///
/// Объект мог уже исчезнуть другим путём — `UnknownHandle` считается no-op.
pub fn drain_due_despawns(
    clock: Res<SimClock>,
    mut queue: ResMut<DespawnQueue>,
    service: Option<ResMut<SpawnService>>,
    mut despawned: EventWriter<ObjectDespawned>,
) {
    let Some(mut service) = service else {
        return;
    };

    while let Some(pending) = queue.pop_due(clock.now) {
        let was_alive = match service.0.despawn(pending.handle) {
            Ok(()) => {
                log(&format!("⚰️ Despawned {:?} (lifetime over)", pending.handle));
                true
            }
            Err(err) => {
                log(&format!("⚰️ Despawn skipped: {}", err));
                false
            }
        };

        despawned.write(ObjectDespawned {
            participant: pending.owner,
            handle: pending.handle,
            was_alive,
        });
    }
}

fn counter_text(participant: Entity, kind: ItemKindId, ammo: u32) -> AmmoCounterChanged {
    AmmoCounterChanged {
        participant,
        kind,
        text: ammo.to_string(),
    }
}

fn report(err: &FireError) {
    log_with_level(err.level(), &format!("🔫 Fire skipped: {}", err));
}
