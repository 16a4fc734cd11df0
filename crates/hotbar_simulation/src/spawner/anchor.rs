//! Spawn anchor + pose calculation

use bevy::prelude::*;

use super::SpawnRequest;
use crate::config::SpawnOffset;

/// Entity, относительно которой спавнятся объекты (обычно камера/оружие participant'а)
///
/// `None` — anchor не настроен: fire отклоняется с warning.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct SpawnAnchor(pub Option<Entity>);

/// Spawn pose: позади/выше anchor, с его rotation, unit scale
///
/// position = anchor − anchor.forward × distance + up × height
pub fn spawn_pose(kind_index: usize, anchor: &Transform, offset: &SpawnOffset) -> SpawnRequest {
    let position = anchor.translation - anchor.forward() * offset.distance + Vec3::Y * offset.height;

    SpawnRequest {
        kind_index,
        position,
        rotation: anchor.rotation,
        scale: Vec3::ONE,
    }
}
