//! Inventory system implementations
//!
//! # Systems
//!
//! - `init_local_hotbar` — собрать hotbar при подтверждении local control
//! - `apply_hotbar_commands` — HotbarCommand → Hotbar state machine → events

use bevy::prelude::*;

use super::{DeleteConfirmationToggled, DisplayToggle, DisplayToggled, Hotbar, HotbarError};
use crate::components::LocallyControlled;
use crate::config::LoadoutConfig;
use crate::input::{HotbarCommand, InputAction};
use crate::logger::{log, log_info, log_with_level};

// ============================================================================
// Init
// ============================================================================

/// System: local participant подтверждён → настоящий hotbar
///
/// # Flow
/// 1. Hotbar на N слотов / M kinds из LoadoutConfig
/// 2. Спрятать все displays
/// 3. Положить starting item (если настроен)
/// 4. Выбрать slot 0 (display starting item'а становится видимым)
pub fn init_local_hotbar(
    config: Res<LoadoutConfig>,
    mut joined: Query<(Entity, &mut Hotbar), Added<LocallyControlled>>,
    mut displays: EventWriter<DisplayToggled>,
) {
    for (participant, mut hotbar) in joined.iter_mut() {
        let mut fresh = Hotbar::new(config.slot_count, config.kind_count());
        let mut toggles = Vec::new();

        if let Ok(hidden) = fresh.deselect_all() {
            toggles.extend(hidden);
        }

        if let Some(kind) = config.starting_kind() {
            match fresh.place_item(kind) {
                Ok(placement) => toggles.extend(placement.toggles),
                Err(err) => report(&err),
            }
        }

        match fresh.select_slot(0) {
            Ok(selected) => toggles.extend(selected),
            Err(err) => report(&err),
        }

        *hotbar = fresh;
        emit_toggles(participant, toggles, &mut displays);

        log_info(&format!(
            "🎒 Hotbar ready for {:?}: {} slots, {} item kinds",
            participant,
            hotbar.slot_count(),
            hotbar.kind_count()
        ));
    }
}

// ============================================================================
// Commands
// ============================================================================

/// System: обработка HotbarCommand
///
/// # ConfirmPending
/// - Delete key → confirm_delete
/// - Любая другая клавиша (включая unbound и fire) → cancel_delete
///
/// # Idle
/// - SelectSlot / DeselectAll / Place / Delete(request)
/// - Fire и unbound клавиши hotbar не трогают
pub fn apply_hotbar_commands(
    mut requests: EventReader<HotbarCommand>,
    mut hotbars: Query<&mut Hotbar>,
    mut displays: EventWriter<DisplayToggled>,
    mut confirmations: EventWriter<DeleteConfirmationToggled>,
) {
    for request in requests.read() {
        let participant = request.participant;
        let Ok(mut hotbar) = hotbars.get_mut(participant) else {
            log(&format!("⚠️ HotbarCommand for {:?} without Hotbar", participant));
            continue;
        };

        if hotbar.is_confirm_pending() {
            if request.action == Some(InputAction::Delete) {
                match hotbar.confirm_delete() {
                    Ok(removal) => {
                        log_info(&format!(
                            "🗑️ {} deleted from slot {}",
                            removal.kind,
                            removal.slot + 1
                        ));
                        emit_toggles(participant, removal.toggles, &mut displays);
                    }
                    Err(err) => report(&err),
                }
            } else {
                hotbar.cancel_delete();
                log("↩️ Delete cancelled");
            }

            confirmations.write(DeleteConfirmationToggled {
                participant,
                visible: false,
            });
            continue;
        }

        let Some(action) = request.action else {
            continue;
        };

        match action {
            InputAction::SelectSlot(index) => match hotbar.select_slot(index) {
                Ok(toggles) => {
                    match hotbar.selected_item_kind() {
                        Some(kind) => log(&format!(
                            "Slot {} selected. Showing display for {}",
                            index + 1,
                            kind
                        )),
                        None => log(&format!("Slot {} selected, but no item is present", index + 1)),
                    }
                    emit_toggles(participant, toggles, &mut displays);
                }
                Err(err) => report(&err),
            },
            InputAction::DeselectAll => match hotbar.deselect_all() {
                Ok(toggles) => {
                    log("All slots deselected");
                    emit_toggles(participant, toggles, &mut displays);
                }
                Err(err) => report(&err),
            },
            InputAction::Place(kind) => match hotbar.place_item(kind) {
                Ok(placement) => {
                    log_info(&format!("✅ {} placed in slot {}", kind, placement.slot + 1));
                    emit_toggles(participant, placement.toggles, &mut displays);
                }
                Err(err) => report(&err),
            },
            InputAction::Delete => match hotbar.request_delete_selected() {
                Ok(slot) => {
                    log(&format!("❓ Confirm delete of slot {}", slot + 1));
                    confirmations.write(DeleteConfirmationToggled {
                        participant,
                        visible: true,
                    });
                }
                Err(err) => report(&err),
            },
            InputAction::Fire => {}
        }
    }
}

fn emit_toggles(
    participant: Entity,
    toggles: Vec<DisplayToggle>,
    displays: &mut EventWriter<DisplayToggled>,
) {
    for toggle in toggles {
        displays.write(DisplayToggled {
            participant,
            kind: toggle.kind,
            visible: toggle.visible,
        });
    }
}

fn report(err: &HotbarError) {
    log_with_level(err.level(), &format!("Hotbar: {}", err));
}
