//! BindingTable — static map InputKey → InputAction
//!
//! Строится один раз из `LoadoutConfig` (и пересобирается при изменении config).
//! Никаких per-button closures: place keys резолвятся через таблицу в `ItemKindId`.

use bevy::prelude::*;
use std::collections::HashMap;

use super::{InputAction, InputKey};
use crate::config::{ConfigError, LoadoutConfig};
use crate::inventory::ItemKindId;
use crate::logger::{log, log_with_level};

#[derive(Resource, Debug, Default, Clone)]
pub struct BindingTable {
    actions: HashMap<InputKey, InputAction>,
}

impl BindingTable {
    /// Собрать таблицу. Одна клавиша на два действия → `ConfigError::Invalid`.
    pub fn from_config(config: &LoadoutConfig) -> Result<Self, ConfigError> {
        let bindings = &config.bindings;
        let mut table = Self::default();

        for (slot, key) in bindings.slot_keys.iter().take(config.slot_count).enumerate() {
            table.bind(*key, InputAction::SelectSlot(slot))?;
        }
        table.bind(bindings.deselect, InputAction::DeselectAll)?;
        table.bind(bindings.delete, InputAction::Delete)?;
        table.bind(bindings.fire, InputAction::Fire)?;

        for (index, item) in config.items.iter().enumerate() {
            let Some(kind) = ItemKindId::from_index(index) else {
                break;
            };
            table.bind(item.place_key, InputAction::Place(kind))?;
        }

        Ok(table)
    }

    fn bind(&mut self, key: InputKey, action: InputAction) -> Result<(), ConfigError> {
        if let Some(existing) = self.actions.insert(key, action) {
            return Err(ConfigError::Invalid(format!(
                "key {:?} bound to both {:?} and {:?}",
                key, existing, action
            )));
        }
        Ok(())
    }

    pub fn resolve(&self, key: InputKey) -> Option<InputAction> {
        self.actions.get(&key).copied()
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

/// System: пересобрать BindingTable при изменении LoadoutConfig
///
/// Невалидный config → ошибка в лог, старая таблица остаётся.
pub fn rebuild_binding_table(config: Res<LoadoutConfig>, mut table: ResMut<BindingTable>) {
    match BindingTable::from_config(&config) {
        Ok(rebuilt) => {
            log(&format!("⌨️ BindingTable rebuilt ({} bindings)", rebuilt.len()));
            *table = rebuilt;
        }
        Err(err) => log_with_level(err.level(), &format!("⌨️ BindingTable not rebuilt: {}", err)),
    }
}
