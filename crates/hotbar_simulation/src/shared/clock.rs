//! Monotonic simulation clock
//!
//! Все timestamps ядра (cooldown, despawn deadline) берутся отсюда, не из `Time` напрямую.
//! Runtime host синхронизирует clock с `Time<Fixed>` в `FixedFirst`;
//! тесты двигают его вручную.

use bevy::prelude::*;
use std::time::Duration;

/// Текущее simulation время (monotonic, с момента старта)
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimClock {
    pub now: Duration,
}

impl SimClock {
    pub fn at(now: Duration) -> Self {
        Self { now }
    }

    /// Сдвинуть clock вперёд. Назад не ходит (monotonic).
    pub fn advance_to(&mut self, now: Duration) {
        self.now = self.now.max(now);
    }

    pub fn advance_by(&mut self, delta: Duration) {
        self.now += delta;
    }
}

/// System: SimClock ← Time<Fixed>::elapsed (FixedFirst)
pub fn sync_sim_clock(time: Res<Time<Fixed>>, mut clock: ResMut<SimClock>) {
    clock.advance_to(time.elapsed());
}
