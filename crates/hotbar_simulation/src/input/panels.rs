//! Modal panels (settings, pause, ...) — блокируют hotbar input и стрельбу
//!
//! Scene layer регистрирует panel handles и выставляет visibility.
//! Ядро только спрашивает `any_visible()`.

use bevy::prelude::*;
use std::collections::BTreeMap;

/// Opaque handle панели (выдаётся scene layer)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PanelHandle(pub u32);

#[derive(Resource, Debug, Default, Clone)]
pub struct ModalPanels {
    panels: BTreeMap<PanelHandle, bool>,
}

impl ModalPanels {
    /// Зарегистрировать панель (стартует скрытой)
    pub fn register(&mut self, panel: PanelHandle) {
        self.panels.insert(panel, false);
    }

    /// Returns false для незарегистрированной панели
    pub fn set_visible(&mut self, panel: PanelHandle, visible: bool) -> bool {
        match self.panels.get_mut(&panel) {
            Some(state) => {
                *state = visible;
                true
            }
            None => false,
        }
    }

    pub fn any_visible(&self) -> bool {
        self.panels.values().any(|visible| *visible)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panels_start_hidden() {
        let mut panels = ModalPanels::default();
        panels.register(PanelHandle(1));
        panels.register(PanelHandle(2));

        assert!(!panels.any_visible());

        assert!(panels.set_visible(PanelHandle(2), true));
        assert!(panels.any_visible());

        panels.set_visible(PanelHandle(2), false);
        assert!(!panels.any_visible());
    }

    #[test]
    fn test_unknown_panel_ignored() {
        let mut panels = ModalPanels::default();
        assert!(!panels.set_visible(PanelHandle(7), true));
        assert!(!panels.any_visible());
    }
}
