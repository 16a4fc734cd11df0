//! Hotbar component — slot/inventory state machine
//!
//! # Архитектура
//!
//! **Hotbar** — N фиксированных слотов, в каждом максимум один `ItemKindId`:
//! - `selected` — курсор (None = ничего не выбрано)
//! - `delete_pending` — двухшаговое удаление (request → confirm/cancel)
//! - Kind встречается максимум в одном слоте (no duplicates)
//!
//! **Display toggles:** операции возвращают show/hide запросы для gun displays.
//! Видим только display occupant'а выбранного слота. Сами displays живут в scene layer.
//!
//! **Confirmation sub-flow:**
//! ```text
//! Idle ──request_delete_selected──→ ConfirmPending ──confirm_delete──→ Idle
//!                                        └────────cancel_delete──────→ Idle
//! ```
//! Пока ConfirmPending — select/deselect/place отклоняются (`ConfirmationPending`).
//!
//! Authority (locally controlled) здесь НЕ проверяется — это делает input gate.

use bevy::prelude::*;
use thiserror::Error;

use super::ItemKindId;
use crate::logger::LogLevel;

/// Show/hide запрос для gun display конкретного item kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayToggle {
    pub kind: ItemKindId,
    pub visible: bool,
}

impl DisplayToggle {
    pub fn show(kind: ItemKindId) -> Self {
        Self { kind, visible: true }
    }

    pub fn hide(kind: ItemKindId) -> Self {
        Self { kind, visible: false }
    }
}

/// Почему hotbar операция не применилась
///
/// Slot numbers в сообщениях 1-based (как в UI).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HotbarError {
    #[error("slot index {index} out of range (slots: {len})")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("unknown {kind} (kinds: {count})")]
    UnknownItemKind { kind: ItemKindId, count: usize },
    #[error("{kind} is already in slot {}", .slot + 1)]
    AlreadyPlaced { kind: ItemKindId, slot: usize },
    #[error("all slots are filled, {kind} not placed")]
    HotbarFull { kind: ItemKindId },
    #[error("delete confirmation pending")]
    ConfirmationPending,
    #[error("no slot selected")]
    NothingSelected,
    #[error("slot {} is empty", .slot + 1)]
    EmptySlot { slot: usize },
    #[error("no delete confirmation pending")]
    NoPendingDelete,
}

impl HotbarError {
    /// Caller misuse → Error; policy denied → Info
    pub fn level(&self) -> LogLevel {
        match self {
            HotbarError::IndexOutOfRange { .. } | HotbarError::UnknownItemKind { .. } => {
                LogLevel::Error
            }
            _ => LogLevel::Info,
        }
    }
}

/// Результат успешного `place_item`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub slot: usize,
    pub toggles: Vec<DisplayToggle>,
}

/// Результат успешного `confirm_delete`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Removal {
    pub slot: usize,
    pub kind: ItemKindId,
    pub toggles: Vec<DisplayToggle>,
}

/// Read-only view слота
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotView {
    pub occupant: Option<ItemKindId>,
    pub is_selected: bool,
}

/// Hotbar (InventoryState) одного participant
///
/// `Default` — inert hotbar без слотов (remote participants остаются такими).
#[derive(Component, Debug, Clone, Default, Reflect)]
#[reflect(Component)]
pub struct Hotbar {
    slots: Vec<Option<ItemKindId>>,
    selected: Option<usize>,
    delete_pending: bool,
    kind_count: usize,
}

impl Hotbar {
    /// Пустой hotbar: `slot_count` слотов, catalog из `kind_count` kinds
    pub fn new(slot_count: usize, kind_count: usize) -> Self {
        Self {
            slots: vec![None; slot_count],
            selected: None,
            delete_pending: false,
            kind_count,
        }
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub fn kind_count(&self) -> usize {
        self.kind_count
    }

    pub fn selected_slot(&self) -> Option<usize> {
        self.selected
    }

    pub fn is_confirm_pending(&self) -> bool {
        self.delete_pending
    }

    pub fn occupant(&self, slot: usize) -> Option<ItemKindId> {
        self.slots.get(slot).copied().flatten()
    }

    pub fn is_slot_selected(&self, slot: usize) -> bool {
        self.selected == Some(slot)
    }

    pub fn slot(&self, slot: usize) -> Option<SlotView> {
        let occupant = *self.slots.get(slot)?;
        Some(SlotView {
            occupant,
            is_selected: self.is_slot_selected(slot),
        })
    }

    pub fn slots(&self) -> impl Iterator<Item = SlotView> + '_ {
        (0..self.slots.len()).filter_map(|slot| self.slot(slot))
    }

    /// В каком слоте лежит kind
    pub fn slot_of(&self, kind: ItemKindId) -> Option<usize> {
        self.slots.iter().position(|occupant| *occupant == Some(kind))
    }

    /// Kind в выбранном слоте (None — ничего не выбрано или слот пустой)
    pub fn selected_item_kind(&self) -> Option<ItemKindId> {
        self.occupant(self.selected?)
    }

    // ========================================================================
    // Selection
    // ========================================================================

    /// Выбрать слот `index`
    ///
    /// Прячет displays всех остальных occupants, показывает display нового слота.
    pub fn select_slot(&mut self, index: usize) -> Result<Vec<DisplayToggle>, HotbarError> {
        self.ensure_idle()?;

        if index >= self.slots.len() {
            return Err(HotbarError::IndexOutOfRange {
                index,
                len: self.slots.len(),
            });
        }

        let shown = self.slots[index];
        let mut toggles: Vec<DisplayToggle> = self
            .slots
            .iter()
            .flatten()
            .filter(|kind| Some(**kind) != shown)
            .map(|kind| DisplayToggle::hide(*kind))
            .collect();

        if let Some(kind) = shown {
            toggles.push(DisplayToggle::show(kind));
        }

        self.selected = Some(index);
        Ok(toggles)
    }

    /// Снять выбор и спрятать все displays (idempotent)
    pub fn deselect_all(&mut self) -> Result<Vec<DisplayToggle>, HotbarError> {
        self.ensure_idle()?;

        self.selected = None;
        Ok((0..self.kind_count)
            .filter_map(ItemKindId::from_index)
            .map(DisplayToggle::hide)
            .collect())
    }

    // ========================================================================
    // Placement
    // ========================================================================

    /// Положить kind в первый пустой слот (scan по индексу)
    ///
    /// Если слот оказался выбранным — display показывается сразу.
    pub fn place_item(&mut self, kind: ItemKindId) -> Result<Placement, HotbarError> {
        self.ensure_idle()?;

        if kind.index() >= self.kind_count {
            return Err(HotbarError::UnknownItemKind {
                kind,
                count: self.kind_count,
            });
        }

        if let Some(slot) = self.slot_of(kind) {
            return Err(HotbarError::AlreadyPlaced { kind, slot });
        }

        let Some(slot) = self.slots.iter().position(Option::is_none) else {
            return Err(HotbarError::HotbarFull { kind });
        };

        self.slots[slot] = Some(kind);

        let toggles = if self.is_slot_selected(slot) {
            vec![DisplayToggle::show(kind)]
        } else {
            Vec::new()
        };

        Ok(Placement { slot, toggles })
    }

    // ========================================================================
    // Deletion (two-step)
    // ========================================================================

    /// Открыть confirmation для выбранного (и занятого) слота
    pub fn request_delete_selected(&mut self) -> Result<usize, HotbarError> {
        self.ensure_idle()?;

        let slot = self.selected.ok_or(HotbarError::NothingSelected)?;
        if self.slots[slot].is_none() {
            return Err(HotbarError::EmptySlot { slot });
        }

        self.delete_pending = true;
        Ok(slot)
    }

    /// Подтвердить удаление: слот пустеет, display прячется
    pub fn confirm_delete(&mut self) -> Result<Removal, HotbarError> {
        if !self.delete_pending {
            return Err(HotbarError::NoPendingDelete);
        }
        self.delete_pending = false;

        // Пока pending, слоты не меняются — selected + occupant на месте
        let slot = self.selected.ok_or(HotbarError::NothingSelected)?;
        let kind = self.slots[slot]
            .take()
            .ok_or(HotbarError::EmptySlot { slot })?;

        Ok(Removal {
            slot,
            kind,
            toggles: vec![DisplayToggle::hide(kind)],
        })
    }

    /// Отменить confirmation. Returns true если она была открыта.
    pub fn cancel_delete(&mut self) -> bool {
        std::mem::replace(&mut self.delete_pending, false)
    }

    fn ensure_idle(&self) -> Result<(), HotbarError> {
        if self.delete_pending {
            return Err(HotbarError::ConfirmationPending);
        }
        Ok(())
    }
}
