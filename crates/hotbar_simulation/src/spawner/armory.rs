//! Armory component — per-kind ammo + cooldown
//!
//! Инвариант: fire разрешён только если `ammo_remaining > 0`
//! и `now >= last_fired_at + cooldown`.
//! Ammo ядром не пополняется.

use bevy::prelude::*;
use std::time::Duration;
use thiserror::Error;

use crate::config::LoadoutConfig;
use crate::inventory::ItemKindId;
use crate::logger::LogLevel;

/// Почему выстрел не состоялся
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FireError {
    #[error("no item selected")]
    NothingSelected,
    #[error("{kind} has no cooldown entry")]
    UnknownItemKind { kind: ItemKindId },
    #[error("{kind} is out of ammo")]
    OutOfAmmo { kind: ItemKindId },
    #[error("{kind} cooling down ({remaining:?} left)")]
    CoolingDown { kind: ItemKindId, remaining: Duration },
    #[error("no spawn anchor configured")]
    MissingAnchor,
}

impl FireError {
    pub fn level(&self) -> LogLevel {
        match self {
            FireError::NothingSelected => LogLevel::Debug,
            FireError::MissingAnchor => LogLevel::Warning,
            _ => LogLevel::Info,
        }
    }
}

/// Cooldown entry одного item kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect)]
pub struct AmmoCooldown {
    pub ammo_remaining: u32,
    /// None — ещё не стрелял (первый выстрел cooldown не ждёт)
    pub last_fired_at: Option<Duration>,
    pub cooldown: Duration,
    /// Время жизни заспавненного объекта
    pub lifetime: Duration,
}

impl AmmoCooldown {
    pub fn new(ammo: u32, cooldown: Duration, lifetime: Duration) -> Self {
        Self {
            ammo_remaining: ammo,
            last_fired_at: None,
            cooldown,
            lifetime,
        }
    }

    /// Момент, с которого снова можно стрелять
    pub fn ready_at(&self) -> Duration {
        self.last_fired_at
            .map_or(Duration::ZERO, |fired| fired.saturating_add(self.cooldown))
    }
}

/// Результат успешного `try_fire`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FireTicket {
    pub kind: ItemKindId,
    pub ammo_remaining: u32,
    /// Deadline для PendingDespawn
    pub despawn_at: Duration,
}

/// Ammo + cooldown всех item kinds одного participant
///
/// `Default` — пустой (inert) armory.
#[derive(Component, Debug, Clone, Default, Reflect)]
#[reflect(Component)]
pub struct Armory {
    entries: Vec<AmmoCooldown>,
}

impl Armory {
    pub fn from_config(config: &LoadoutConfig) -> Self {
        Self {
            entries: config
                .items
                .iter()
                .map(|item| AmmoCooldown::new(item.starting_ammo, item.cooldown(), item.lifetime()))
                .collect(),
        }
    }

    pub fn with_entries(entries: Vec<AmmoCooldown>) -> Self {
        Self { entries }
    }

    pub fn entry(&self, kind: ItemKindId) -> Option<&AmmoCooldown> {
        self.entries.get(kind.index())
    }

    pub fn ammo(&self, kind: ItemKindId) -> Option<u32> {
        self.entry(kind).map(|entry| entry.ammo_remaining)
    }

    pub fn kinds(&self) -> impl Iterator<Item = (ItemKindId, &AmmoCooldown)> + '_ {
        self.entries
            .iter()
            .enumerate()
            .filter_map(|(index, entry)| Some((ItemKindId::from_index(index)?, entry)))
    }

    /// Проверить ammo + cooldown без изменения состояния
    pub fn check(&self, kind: ItemKindId, now: Duration) -> Result<&AmmoCooldown, FireError> {
        let entry = self
            .entry(kind)
            .ok_or(FireError::UnknownItemKind { kind })?;

        if entry.ammo_remaining == 0 {
            return Err(FireError::OutOfAmmo { kind });
        }

        let ready_at = entry.ready_at();
        if now < ready_at {
            return Err(FireError::CoolingDown {
                kind,
                remaining: ready_at - now,
            });
        }

        Ok(entry)
    }

    /// Выстрел: check → ammo − 1, last_fired_at = now
    pub fn try_fire(&mut self, kind: ItemKindId, now: Duration) -> Result<FireTicket, FireError> {
        self.check(kind, now)?;

        let entry = &mut self.entries[kind.index()];
        entry.ammo_remaining -= 1;
        entry.last_fired_at = Some(now);

        Ok(FireTicket {
            kind,
            ammo_remaining: entry.ammo_remaining,
            despawn_at: now.saturating_add(entry.lifetime),
        })
    }
}
