//! Input routing system (ECS)
//!
//! Единственная точка authority check для hotbar и spawner.

use bevy::prelude::*;

use super::{BindingTable, FireCommand, HotbarCommand, InputAction, ModalPanels, PlayerKeyPressed};
use crate::components::LocallyControlled;
use crate::logger::log;

/// System: PlayerKeyPressed → HotbarCommand / FireCommand
///
/// # Gate (один раз на событие)
/// 1. Participant должен иметь `LocallyControlled` — иначе drop (remote copy inert)
/// 2. Любая видимая modal panel → drop (input blocked, не ошибка)
///
/// # Routing
/// - Каждая прошедшая клавиша → `HotbarCommand` (даже unbound: отменяет pending delete)
/// - Fire key → дополнительно `FireCommand`
pub fn route_player_input(
    mut keys: EventReader<PlayerKeyPressed>,
    table: Res<BindingTable>,
    panels: Res<ModalPanels>,
    local: Query<(), With<LocallyControlled>>,
    mut hotbar_commands: EventWriter<HotbarCommand>,
    mut fire_commands: EventWriter<FireCommand>,
) {
    let blocked = panels.any_visible();

    for press in keys.read() {
        // Guard: только locally controlled participant
        if !local.contains(press.participant) {
            log(&format!(
                "🚫 Key {:?} ignored: {:?} is not locally controlled",
                press.key, press.participant
            ));
            continue;
        }

        // Guard: modal panel открыта
        if blocked {
            log(&format!("🚫 Key {:?} ignored: modal panel visible", press.key));
            continue;
        }

        let action = table.resolve(press.key);

        hotbar_commands.write(HotbarCommand {
            participant: press.participant,
            action,
        });

        if action == Some(InputAction::Fire) {
            fire_commands.write(FireCommand {
                participant: press.participant,
            });
        }
    }
}
