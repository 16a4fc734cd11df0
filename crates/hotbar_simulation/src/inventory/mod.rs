//! Inventory module — hotbar слоты, выбор, размещение, удаление с подтверждением
//!
//! # Architecture
//!
//! **Commands → Hotbar → Events flow:**
//! - Input gate эмитит `HotbarCommand` (уже authority-checked)
//! - `apply_hotbar_commands` вызывает методы `Hotbar` (pure state machine)
//! - Display toggles / confirmation panel → events для scene layer
//!
//! **Lifecycle:**
//! - `Participant` всегда несёт inert `Hotbar::default()`
//! - Появился `LocallyControlled` → `init_local_hotbar` собирает настоящий hotbar
//!   (starting item + slot 0 selected)

use bevy::prelude::*;

pub mod events;
pub mod hotbar;
pub mod item;
pub mod systems;

mod hotbar_tests;

pub use events::*;
pub use hotbar::*;
pub use item::*;
pub use systems::*;

use crate::LoadoutSet;

/// Inventory plugin (hotbar state machine)
pub struct InventoryPlugin;

impl Plugin for InventoryPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<Hotbar>()
            .add_event::<DisplayToggled>()
            .add_event::<DeleteConfirmationToggled>()
            .add_systems(
                FixedUpdate,
                (
                    init_local_hotbar.in_set(LoadoutSet::Setup),
                    apply_hotbar_commands.in_set(LoadoutSet::Inventory),
                ),
            );
    }
}
