//! Participant — игрок в multiplayer сцене

use bevy::prelude::*;

use crate::inventory::Hotbar;
use crate::spawner::{Armory, SpawnAnchor};

/// Участник сцены (local или remote)
///
/// Автоматически добавляет inert Hotbar, Armory, SpawnAnchor через Required Components.
/// Настоящее состояние собирается только для `LocallyControlled`.
#[derive(Component, Debug, Clone, Default, Reflect)]
#[reflect(Component)]
#[require(Hotbar, Armory, SpawnAnchor)]
pub struct Participant {
    /// Network id участника (выдаётся network layer)
    pub network_id: u64,
}

/// Marker: этим participant управляет локальный игрок
///
/// Вешается network layer'ом после подтверждения ownership.
/// Input gate пропускает команды только для entities с этим маркером.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct LocallyControlled;
