//! Input events
//!
//! - `PlayerKeyPressed` — raw key-down от scene layer
//! - `HotbarCommand` / `FireCommand` — уже прошли authority + modal gate

use bevy::prelude::*;

use super::{InputAction, InputKey};

/// Raw key-down для конкретного participant
#[derive(Event, Debug, Clone, Copy)]
pub struct PlayerKeyPressed {
    pub participant: Entity,
    pub key: InputKey,
}

/// Разрешённая hotbar команда
///
/// `action = None` — клавиша без binding. Всё равно доставляется:
/// любая клавиша отменяет pending delete confirmation.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct HotbarCommand {
    pub participant: Entity,
    pub action: Option<InputAction>,
}

/// Разрешённый fire trigger (mouse-down equivalent)
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct FireCommand {
    pub participant: Entity,
}
