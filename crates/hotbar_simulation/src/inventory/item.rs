//! Item kind identifier
//!
//! Индекс в `LoadoutConfig::items`. Catalog immutable, поэтому id — просто индекс.

use bevy::prelude::*;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Reflect)]
pub struct ItemKindId(pub u8);

impl ItemKindId {
    pub fn from_index(index: usize) -> Option<Self> {
        u8::try_from(index).ok().map(Self)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// 1-based, как в UI ("Item 1" = ItemKindId(0))
impl fmt::Display for ItemKindId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item {}", self.index() + 1)
    }
}
