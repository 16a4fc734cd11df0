//! Loadout configuration (TOML)
//!
//! # Архитектура
//!
//! **LoadoutConfig** — immutable описание hotbar + item catalog + spawn profile:
//! - Хранится как Resource (читается init/input/fire системами)
//! - `Default` = reference configuration (4 слота, 4 item kinds, Y/U/I/O)
//! - Грузится из TOML (`load_from_path`), при ошибке — defaults + warning
//!
//! Runtime state (ammo, cooldown timestamps, occupancy) здесь НЕ хранится —
//! см. `Hotbar` и `Armory`.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path, time::Duration};
use thiserror::Error;

use crate::input::InputKey;
use crate::inventory::ItemKindId;
use crate::logger::{log_warning, LogLevel};

pub const DEFAULT_CONFIG_PATH: &str = "config/loadout.toml";

/// Ошибки загрузки/валидации конфигурации
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read loadout config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse loadout config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid loadout config: {0}")]
    Invalid(String),
}

impl ConfigError {
    pub fn level(&self) -> LogLevel {
        LogLevel::Warning
    }
}

/// Полная конфигурация hotbar + spawner
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadoutConfig {
    /// Количество hotbar слотов (N)
    pub slot_count: usize,
    /// Item catalog (M kinds), индекс = `ItemKindId`
    pub items: Vec<ItemKindConfig>,
    /// Kind, который кладётся в hotbar при подтверждении local control
    pub starting_item: Option<usize>,
    /// Смещение spawn позиции относительно anchor
    pub spawn_offset: SpawnOffset,
    pub bindings: KeyBindings,
}

/// Static описание одного item kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemKindConfig {
    pub name: String,
    /// Иконка в слоте
    pub display_asset: String,
    /// 3D gun display (show/hide при выборе слота)
    pub gun_display: String,
    /// Клавиша, которая кладёт этот kind в hotbar
    pub place_key: InputKey,
    pub starting_ammo: u32,
    /// Минимальный интервал между выстрелами (секунды)
    pub cooldown_secs: f32,
    /// Время жизни заспавненного объекта (секунды)
    pub lifetime_secs: f32,
}

impl ItemKindConfig {
    pub fn cooldown(&self) -> Duration {
        secs_to_duration(self.cooldown_secs)
    }

    pub fn lifetime(&self) -> Duration {
        secs_to_duration(self.lifetime_secs)
    }
}

/// Невалидные секунды (validate их отклоняет) насыщаются до `Duration::MAX`
fn secs_to_duration(secs: f32) -> Duration {
    Duration::try_from_secs_f32(secs).unwrap_or(Duration::MAX)
}

/// Spawn позиция = anchor − anchor.forward × distance + up × height
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnOffset {
    pub distance: f32,
    /// Положительное — выше anchor, отрицательное — ниже
    pub height: f32,
}

impl Default for SpawnOffset {
    fn default() -> Self {
        Self {
            distance: 2.0,
            height: 1.0,
        }
    }
}

/// Клавиши hotbar (place keys живут в `ItemKindConfig::place_key`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    /// slot_keys[i] выбирает слот i
    pub slot_keys: Vec<InputKey>,
    pub deselect: InputKey,
    /// Запрос удаления; повторное нажатие подтверждает
    pub delete: InputKey,
    pub fire: InputKey,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            slot_keys: (1..=4).map(InputKey::Digit).collect(),
            deselect: InputKey::Letter('F'),
            delete: InputKey::Letter('Q'),
            fire: InputKey::MouseLeft,
        }
    }
}

impl Default for LoadoutConfig {
    fn default() -> Self {
        let items = [('Y', 10, 0.5, 5.0), ('U', 6, 1.0, 8.0), ('I', 3, 2.0, 10.0), ('O', 1, 5.0, 15.0)]
            .into_iter()
            .enumerate()
            .map(|(i, (key, ammo, cooldown, lifetime))| ItemKindConfig {
                name: format!("item_{}", i + 1),
                display_asset: format!("items/item_{}.png", i + 1),
                gun_display: format!("displays/gun_{}.scn", i + 1),
                place_key: InputKey::Letter(key),
                starting_ammo: ammo,
                cooldown_secs: cooldown,
                lifetime_secs: lifetime,
            })
            .collect();

        Self {
            slot_count: 4,
            items,
            starting_item: Some(0),
            spawn_offset: SpawnOffset::default(),
            bindings: KeyBindings::default(),
        }
    }
}

impl LoadoutConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: LoadoutConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Загрузить из файла; любые ошибки → defaults + warning
    pub fn load_from_path(path: &Path) -> Self {
        let loaded = fs::read_to_string(path)
            .map_err(ConfigError::from)
            .and_then(|contents| Self::from_toml_str(&contents));

        match loaded {
            Ok(config) => config,
            Err(err) => {
                log_warning(&format!("{} ({}). Using defaults", err, path.display()));
                Self::default()
            }
        }
    }

    pub fn load() -> Self {
        Self::load_from_path(Path::new(DEFAULT_CONFIG_PATH))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.slot_count == 0 {
            return Err(ConfigError::Invalid("slot_count must be at least 1".into()));
        }
        if self.items.len() > u8::MAX as usize {
            return Err(ConfigError::Invalid(format!(
                "too many item kinds ({})",
                self.items.len()
            )));
        }
        if let Some(start) = self.starting_item {
            if start >= self.items.len() {
                return Err(ConfigError::Invalid(format!(
                    "starting_item {} out of range (kinds: {})",
                    start,
                    self.items.len()
                )));
            }
        }
        for item in &self.items {
            let timings = [
                ("cooldown_secs", item.cooldown_secs),
                ("lifetime_secs", item.lifetime_secs),
            ];
            for (field, secs) in timings {
                if let Err(err) = Duration::try_from_secs_f32(secs) {
                    return Err(ConfigError::Invalid(format!(
                        "item '{}' {} = {}: {}",
                        item.name, field, secs, err
                    )));
                }
            }
        }
        Ok(())
    }

    pub fn kind_count(&self) -> usize {
        self.items.len()
    }

    pub fn item(&self, kind: ItemKindId) -> Option<&ItemKindConfig> {
        self.items.get(kind.index())
    }

    pub fn starting_kind(&self) -> Option<ItemKindId> {
        self.starting_item.and_then(ItemKindId::from_index)
    }
}
