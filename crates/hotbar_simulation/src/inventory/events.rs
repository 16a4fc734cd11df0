//! Inventory output events (ECS → scene layer)
//!
//! - `DisplayToggled` — show/hide gun display item kind'а
//! - `DeleteConfirmationToggled` — видимость delete confirmation panel
//!
//! Slot highlight отдельного события не имеет: scene layer читает `Changed<Hotbar>`.

use bevy::prelude::*;

use super::ItemKindId;

/// Show/hide gun display (scene layer резолвит kind → `ItemKindConfig::gun_display`)
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayToggled {
    pub participant: Entity,
    pub kind: ItemKindId,
    pub visible: bool,
}

/// Delete confirmation panel открылась/закрылась
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteConfirmationToggled {
    pub participant: Entity,
    pub visible: bool,
}
