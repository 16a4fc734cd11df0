//! Player input module
//!
//! Переводит discrete key-down события в hotbar/fire команды.
//!
//! # Архитектура
//!
//! ```text
//! Scene layer (keyboard/mouse)
//!     ↓
//! PlayerKeyPressed (ECS event) - events.rs
//!     ↓
//! route_player_input (authority + modal gate, BindingTable) - systems.rs
//!     ↓
//! HotbarCommand → inventory   |   FireCommand → spawner
//! ```
//!
//! Authority check живёт ТОЛЬКО здесь: inventory/spawner системы получают уже
//! разрешённые команды и про `LocallyControlled` ничего не знают.

pub mod bindings;
pub mod events;
pub mod keys;
pub mod panels;
pub mod systems;

pub use bindings::*;
pub use events::*;
pub use keys::*;
pub use panels::*;
pub use systems::*;

use bevy::prelude::*;

use crate::config::LoadoutConfig;
use crate::LoadoutSet;

/// Input plugin (binding table + authority/modal gate)
pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<BindingTable>()
            .init_resource::<ModalPanels>()
            .add_event::<PlayerKeyPressed>()
            .add_event::<HotbarCommand>()
            .add_event::<FireCommand>()
            .add_systems(
                FixedUpdate,
                (
                    rebuild_binding_table
                        .run_if(resource_changed::<LoadoutConfig>)
                        .in_set(LoadoutSet::Setup),
                    route_player_input.in_set(LoadoutSet::Route),
                ),
            );
    }
}
