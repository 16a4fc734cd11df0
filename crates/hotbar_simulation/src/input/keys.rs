//! Discrete input keys + resolved actions

use serde::{Deserialize, Serialize};

use crate::inventory::ItemKindId;

/// Discrete key (keyboard или mouse button), key-down only
///
/// Continuous axis input (mouse look, WASD) сюда не попадает.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputKey {
    /// Цифровой ряд: Digit(1) = клавиша "1"
    Digit(u8),
    /// Буква (upper-case)
    Letter(char),
    MouseLeft,
    MouseRight,
    Space,
    Escape,
}

/// Действие, в которое резолвится клавиша через `BindingTable`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    SelectSlot(usize),
    DeselectAll,
    Place(ItemKindId),
    /// Запрос удаления (Idle) или подтверждение (ConfirmPending)
    Delete,
    Fire,
}
