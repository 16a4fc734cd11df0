//! Tests for Hotbar state machine.

#[cfg(test)]
mod tests {
    use crate::inventory::{DisplayToggle, Hotbar, HotbarError, ItemKindId};
    use crate::logger::LogLevel;

    const K0: ItemKindId = ItemKindId(0);
    const K1: ItemKindId = ItemKindId(1);
    const K2: ItemKindId = ItemKindId(2);
    const K3: ItemKindId = ItemKindId(3);

    fn hotbar() -> Hotbar {
        Hotbar::new(4, 4)
    }

    fn visible(toggles: &[DisplayToggle]) -> Vec<ItemKindId> {
        toggles.iter().filter(|t| t.visible).map(|t| t.kind).collect()
    }

    fn hidden(toggles: &[DisplayToggle]) -> Vec<ItemKindId> {
        toggles.iter().filter(|t| !t.visible).map(|t| t.kind).collect()
    }

    #[test]
    fn test_default_hotbar_is_inert() {
        let mut hotbar = Hotbar::default();
        assert_eq!(hotbar.slot_count(), 0);
        assert_eq!(hotbar.selected_item_kind(), None);
        assert!(matches!(
            hotbar.select_slot(0),
            Err(HotbarError::IndexOutOfRange { index: 0, len: 0 })
        ));
        assert!(matches!(
            hotbar.place_item(K0),
            Err(HotbarError::UnknownItemKind { .. })
        ));
    }

    #[test]
    fn test_place_fills_first_empty_slot() {
        let mut hotbar = hotbar();

        assert_eq!(hotbar.place_item(K2).unwrap().slot, 0);
        assert_eq!(hotbar.place_item(K0).unwrap().slot, 1);
        assert_eq!(hotbar.place_item(K3).unwrap().slot, 2);

        assert_eq!(hotbar.occupant(0), Some(K2));
        assert_eq!(hotbar.slot_of(K3), Some(2));
        assert_eq!(hotbar.occupant(3), None);
    }

    #[test]
    fn test_place_duplicate_is_noop() {
        let mut hotbar = hotbar();
        hotbar.place_item(K1).unwrap();

        let err = hotbar.place_item(K1).unwrap_err();
        assert_eq!(err, HotbarError::AlreadyPlaced { kind: K1, slot: 0 });
        assert_eq!(err.level(), LogLevel::Info);

        assert_eq!(hotbar.slots().filter(|s| s.occupant == Some(K1)).count(), 1);
        assert_eq!(hotbar.occupant(1), None);
    }

    #[test]
    fn test_no_kind_ever_in_two_slots() {
        let mut hotbar = hotbar();
        let sequence = [K0, K1, K0, K2, K1, K3, K3, K2, K0];

        for kind in sequence {
            let _ = hotbar.place_item(kind);
            for k in [K0, K1, K2, K3] {
                let count = hotbar.slots().filter(|s| s.occupant == Some(k)).count();
                assert!(count <= 1, "{} occupies {} slots", k, count);
            }
        }
    }

    #[test]
    fn test_place_into_full_hotbar() {
        let mut hotbar = Hotbar::new(2, 4);
        hotbar.place_item(K0).unwrap();
        hotbar.place_item(K1).unwrap();

        assert_eq!(
            hotbar.place_item(K2),
            Err(HotbarError::HotbarFull { kind: K2 })
        );
        assert_eq!(hotbar.slot_of(K2), None);
    }

    #[test]
    fn test_place_unknown_kind_is_misuse() {
        let mut hotbar = hotbar();
        let err = hotbar.place_item(ItemKindId(9)).unwrap_err();
        assert_eq!(err.level(), LogLevel::Error);
    }

    #[test]
    fn test_place_into_selected_slot_shows_display() {
        let mut hotbar = hotbar();
        hotbar.select_slot(0).unwrap();

        let placement = hotbar.place_item(K3).unwrap();
        assert_eq!(placement.slot, 0);
        assert_eq!(placement.toggles, vec![DisplayToggle::show(K3)]);
        assert_eq!(hotbar.selected_item_kind(), Some(K3));
    }

    #[test]
    fn test_place_into_unselected_slot_stays_hidden() {
        let mut hotbar = hotbar();
        hotbar.place_item(K0).unwrap();
        hotbar.select_slot(2).unwrap();

        let placement = hotbar.place_item(K1).unwrap();
        assert_eq!(placement.slot, 1);
        assert!(placement.toggles.is_empty());
    }

    #[test]
    fn test_select_slot_switches_display() {
        let mut hotbar = hotbar();
        hotbar.place_item(K0).unwrap();
        hotbar.place_item(K1).unwrap();

        let first = hotbar.select_slot(0).unwrap();
        assert_eq!(visible(&first), vec![K0]);
        assert_eq!(hidden(&first), vec![K1]);

        let second = hotbar.select_slot(1).unwrap();
        assert_eq!(visible(&second), vec![K1]);
        assert_eq!(hidden(&second), vec![K0]);

        assert_eq!(hotbar.selected_slot(), Some(1));
        assert!(hotbar.is_slot_selected(1));
        assert!(!hotbar.is_slot_selected(0));
        assert_eq!(hotbar.slots().filter(|s| s.is_selected).count(), 1);
    }

    #[test]
    fn test_select_empty_slot_hides_everything() {
        let mut hotbar = hotbar();
        hotbar.place_item(K0).unwrap();
        hotbar.select_slot(0).unwrap();

        let toggles = hotbar.select_slot(3).unwrap();
        assert!(visible(&toggles).is_empty());
        assert_eq!(hidden(&toggles), vec![K0]);
        assert_eq!(hotbar.selected_item_kind(), None);
    }

    #[test]
    fn test_select_out_of_range_keeps_state() {
        let mut hotbar = hotbar();
        hotbar.select_slot(1).unwrap();

        let err = hotbar.select_slot(4).unwrap_err();
        assert_eq!(err, HotbarError::IndexOutOfRange { index: 4, len: 4 });
        assert_eq!(err.level(), LogLevel::Error);
        assert_eq!(hotbar.selected_slot(), Some(1));
    }

    #[test]
    fn test_deselect_all_is_idempotent() {
        let mut hotbar = hotbar();
        hotbar.place_item(K0).unwrap();
        hotbar.select_slot(0).unwrap();

        let first = hotbar.deselect_all().unwrap();
        let after_first = hotbar.clone();
        let second = hotbar.deselect_all().unwrap();

        assert_eq!(first, second);
        assert_eq!(hidden(&first), vec![K0, K1, K2, K3]);
        assert!(visible(&first).is_empty());
        assert_eq!(hotbar.selected_slot(), None);
        assert_eq!(hotbar.selected_slot(), after_first.selected_slot());
        assert_eq!(hotbar.occupant(0), Some(K0));
    }

    #[test]
    fn test_request_delete_needs_selected_occupied_slot() {
        let mut hotbar = hotbar();
        hotbar.place_item(K0).unwrap();

        assert_eq!(
            hotbar.request_delete_selected(),
            Err(HotbarError::NothingSelected)
        );
        assert!(!hotbar.is_confirm_pending());

        hotbar.select_slot(2).unwrap();
        assert_eq!(
            hotbar.request_delete_selected(),
            Err(HotbarError::EmptySlot { slot: 2 })
        );
        assert!(!hotbar.is_confirm_pending());

        hotbar.select_slot(0).unwrap();
        assert_eq!(hotbar.request_delete_selected(), Ok(0));
        assert!(hotbar.is_confirm_pending());
    }

    #[test]
    fn test_confirm_delete_empties_slot() {
        let mut hotbar = hotbar();
        hotbar.place_item(K2).unwrap();
        hotbar.select_slot(0).unwrap();
        hotbar.request_delete_selected().unwrap();

        let removal = hotbar.confirm_delete().unwrap();
        assert_eq!(removal.slot, 0);
        assert_eq!(removal.kind, K2);
        assert_eq!(removal.toggles, vec![DisplayToggle::hide(K2)]);

        assert!(!hotbar.is_confirm_pending());
        assert_eq!(hotbar.occupant(0), None);
        assert_eq!(hotbar.selected_slot(), Some(0));
        assert_eq!(hotbar.selected_item_kind(), None);

        // Kind снова можно положить
        assert_eq!(hotbar.place_item(K2).unwrap().slot, 0);
    }

    #[test]
    fn test_confirm_without_request_fails() {
        let mut hotbar = hotbar();
        assert_eq!(hotbar.confirm_delete(), Err(HotbarError::NoPendingDelete));
    }

    #[test]
    fn test_cancel_delete_keeps_occupant() {
        let mut hotbar = hotbar();
        hotbar.place_item(K1).unwrap();
        hotbar.select_slot(0).unwrap();
        hotbar.request_delete_selected().unwrap();

        assert!(hotbar.cancel_delete());
        assert!(!hotbar.is_confirm_pending());
        assert_eq!(hotbar.occupant(0), Some(K1));

        // Повторная отмена — no-op
        assert!(!hotbar.cancel_delete());
    }

    #[test]
    fn test_slot_mutations_blocked_while_pending() {
        let mut hotbar = hotbar();
        hotbar.place_item(K0).unwrap();
        hotbar.select_slot(0).unwrap();
        hotbar.request_delete_selected().unwrap();

        assert_eq!(hotbar.select_slot(1), Err(HotbarError::ConfirmationPending));
        assert_eq!(hotbar.deselect_all(), Err(HotbarError::ConfirmationPending));
        assert_eq!(hotbar.place_item(K1), Err(HotbarError::ConfirmationPending));
        assert_eq!(
            hotbar.request_delete_selected(),
            Err(HotbarError::ConfirmationPending)
        );

        assert_eq!(hotbar.selected_slot(), Some(0));
        assert_eq!(hotbar.slot_of(K1), None);
        assert!(hotbar.is_confirm_pending());
    }
}
