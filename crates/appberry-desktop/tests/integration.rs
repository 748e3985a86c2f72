//! Integration tests for the Desktop shell
//!
//! These tests drive the desktop the way the browser shell does:
//! - Opening apps from the start menu
//! - Focus and stacking
//! - Title-bar drags and corner resizes through pointer events
//! - Input delivered to hosted apps

use appberry_apps::{AppInput, GameStatus, MemoryStore, NOTEPAD_KEY, KeyValueStore};
use appberry_desktop::{
    Desktop, InputResult, Point, PointerButton, Size, WindowKind, WindowRegion,
};

// =============================================================================
// Window Lifecycle Tests
// =============================================================================

#[test]
fn test_open_calculator_then_notepad() {
    let mut desktop = Desktop::default();

    let calc = desktop.open_app(WindowKind::Calculator);
    let notes = desktop.open_app(WindowKind::Notepad);

    assert_eq!(calc.position, Point::new(100, 100));
    assert_eq!(calc.size, Size::new(200, 220));
    assert_eq!(calc.z_order, 1);

    assert_eq!(notes.position, Point::new(120, 120));
    assert_eq!(notes.size, Size::new(200, 300));
    assert_eq!(notes.z_order, 2);

    assert_eq!(desktop.windows.focused(), Some(notes.id));
}

#[test]
fn test_close_focused_hands_focus_to_next_highest() {
    let mut desktop = Desktop::default();
    let a = desktop.open_app(WindowKind::Calculator).id;
    let b = desktop.open_app(WindowKind::Notepad).id;
    let c = desktop.open_app(WindowKind::Minesweeper).id;

    desktop.focus_window(a);
    desktop.close_window(a);

    assert_eq!(desktop.windows.focused(), Some(c));
    assert!(desktop.windows.get(b).is_some());
    assert!(desktop.app(a).is_none());
}

#[test]
fn test_cascade_counts_open_windows_only() {
    let mut desktop = Desktop::default();
    let a = desktop.open_app(WindowKind::Notepad).id;
    desktop.open_app(WindowKind::Notepad);
    desktop.close_window(a);

    let third = desktop.open_app(WindowKind::Notepad);
    assert_eq!(third.position, Point::new(120, 120));
    assert_eq!(third.z_order, 2);
}

#[test]
fn test_equal_z_resolves_to_later_window() {
    let mut desktop = Desktop::default();
    let a = desktop.open_app(WindowKind::Notepad).id;
    let b = desktop.open_app(WindowKind::Notepad).id;
    desktop.close_window(a);

    // Opened with z = 2, same as b
    let c = desktop.open_app(WindowKind::Calculator).id;
    assert_eq!(desktop.windows.get(b).unwrap().z_order, 2);
    assert_eq!(desktop.windows.get(c).unwrap().z_order, 2);
    assert_eq!(desktop.windows.focused(), Some(c));
}

#[test]
fn test_repeated_focus_strictly_raises_max_z() {
    let mut desktop = Desktop::default();
    let id = desktop.open_app(WindowKind::Notepad).id;
    assert_eq!(desktop.windows.get(id).unwrap().z_order, 1);

    let mut previous = desktop.windows.max_z();
    for _ in 0..10 {
        desktop.focus_window(id);
        let max = desktop.windows.max_z();
        assert!(max > previous);
        assert_eq!(desktop.windows.get(id).unwrap().z_order, max);
        previous = max;
    }
}

// =============================================================================
// Drag Tests
// =============================================================================

#[test]
fn test_title_bar_drag_through_pointer_events() {
    let mut desktop = Desktop::default();
    let back = desktop.open_app(WindowKind::Notepad).id;
    desktop.open_app(WindowKind::Notepad);

    // Title bar of `back`, outside the front window
    let result = desktop.handle_pointer_down(Point::new(110, 105), PointerButton::Primary);
    assert_eq!(result, InputResult::Handled);
    assert!(desktop.is_dragging(back));
    assert_eq!(desktop.windows.focused(), Some(back));

    assert_eq!(desktop.handle_pointer_move(Point::new(160, 155)), InputResult::Handled);
    assert_eq!(desktop.handle_pointer_up(), InputResult::Handled);

    assert_eq!(desktop.windows.get(back).unwrap().position, Point::new(150, 150));
    assert!(!desktop.is_dragging(back));
    assert_eq!(desktop.handle_pointer_up(), InputResult::Unhandled);
}

#[test]
fn test_coalesced_moves_land_on_same_position() {
    let mut stepwise = Desktop::default();
    let id = stepwise.open_app(WindowKind::Calculator).id;
    stepwise.begin_move(id, Point::new(150, 110));
    for step in 1..=10 {
        stepwise.update_gesture(id, Point::new(150 + step * 3, 110 - step * 2));
    }

    let mut coalesced = Desktop::default();
    let other = coalesced.open_app(WindowKind::Calculator).id;
    coalesced.begin_move(other, Point::new(150, 110));
    coalesced.update_gesture(other, Point::new(180, 90));

    let expected = Point::new(130, 80);
    assert_eq!(stepwise.windows.get(id).unwrap().position, expected);
    assert_eq!(coalesced.windows.get(other).unwrap().position, expected);
}

#[test]
fn test_repeated_update_is_idempotent() {
    let mut desktop = Desktop::default();
    let id = desktop.open_app(WindowKind::Notepad).id;
    desktop.begin_move(id, Point::new(150, 110));

    desktop.update_gesture(id, Point::new(200, 200));
    desktop.update_gesture(id, Point::new(200, 200));
    assert_eq!(desktop.windows.get(id).unwrap().position, Point::new(150, 190));
}

#[test]
fn test_resize_handle_clamps_to_minimum() {
    let mut desktop = Desktop::default();
    let id = desktop.open_app(WindowKind::Notepad).id;

    // Notepad spans (100,100) to (300,400)
    let corner = Point::new(295, 395);
    assert_eq!(
        desktop.windows.region_at(corner),
        Some((id, WindowRegion::ResizeHandle))
    );
    desktop.handle_pointer_down(corner, PointerButton::Primary);

    desktop.handle_pointer_move(Point::new(0, 0));
    assert_eq!(desktop.windows.get(id).unwrap().size, Size::new(120, 100));

    desktop.handle_pointer_move(Point::new(315, 405));
    assert_eq!(desktop.windows.get(id).unwrap().size, Size::new(220, 310));
    desktop.handle_pointer_up();
}

#[test]
fn test_close_during_gesture_ignores_later_updates() {
    let mut desktop = Desktop::default();
    let id = desktop.open_app(WindowKind::Notepad).id;
    desktop.begin_resize(id, Point::new(295, 395));

    desktop.close_window(id);
    assert!(!desktop.update_gesture(id, Point::new(400, 400)));
    assert_eq!(desktop.handle_pointer_move(Point::new(400, 400)), InputResult::Unhandled);
    assert!(desktop.windows.is_empty());
}

#[test]
fn test_close_button_closes_window() {
    let mut desktop = Desktop::default();
    let id = desktop.open_app(WindowKind::Notepad).id;

    let result = desktop.handle_pointer_down(Point::new(285, 110), PointerButton::Primary);
    assert_eq!(result, InputResult::Handled);
    assert!(desktop.windows.get(id).is_none());
}

// =============================================================================
// Hosted App Tests
// =============================================================================

#[test]
fn test_notepad_survives_reopen_through_store() {
    let mut desktop = Desktop::new(MemoryStore::new());
    let id = desktop.open_app(WindowKind::Notepad).id;

    desktop
        .send_input(id, AppInput::Edit { text: "groceries".to_string() })
        .unwrap();
    desktop.send_input(id, AppInput::Save).unwrap();
    desktop.close_window(id);

    assert_eq!(desktop.store().get(NOTEPAD_KEY).as_deref(), Some("groceries"));

    let reopened = desktop.open_app(WindowKind::Notepad).id;
    let notepad = desktop.app(reopened).unwrap().as_notepad().unwrap();
    assert_eq!(notepad.text(), "groceries");
}

#[test]
fn test_each_window_hosts_its_own_app() {
    let mut desktop = Desktop::default();
    let first = desktop.open_app(WindowKind::Calculator).id;
    let second = desktop.open_app(WindowKind::Calculator).id;

    desktop
        .send_input(first, AppInput::Button { label: "7".to_string() })
        .unwrap();

    let display = |id| {
        desktop
            .app(id)
            .and_then(|app| app.as_calculator())
            .map(|calc| calc.display().to_string())
    };
    assert_eq!(display(first).as_deref(), Some("7"));
    assert_eq!(display(second).as_deref(), Some(""));
}

#[test]
fn test_minesweeper_restart_through_desktop() {
    let mut desktop = Desktop::default();
    let id = desktop.open_app(WindowKind::Minesweeper).id;

    desktop.send_input(id, AppInput::Restart).unwrap();
    let game = desktop.app(id).unwrap().as_minesweeper().unwrap();
    assert_eq!(game.status(), GameStatus::InProgress);
    assert_eq!(game.grid().bomb_count(), 5);
}

/// Desktop position of the centre of a minesweeper cell in a window opened
/// first (at (100, 100), 200 wide)
fn cell_centre(row: i32, col: i32) -> Point {
    Point::new(132 + 34 * col, 148 + 34 * row)
}

#[test]
fn test_secondary_click_toggles_flag_on_cell() {
    let mut desktop = Desktop::default();
    let id = desktop.open_app(WindowKind::Minesweeper).id;

    let result = desktop.handle_pointer_down(cell_centre(2, 3), PointerButton::Secondary);
    assert_eq!(result, InputResult::Handled);

    let grid = desktop.app(id).unwrap().as_minesweeper().unwrap().grid();
    assert!(grid.cell(2, 3).unwrap().is_flagged);
    assert_eq!(grid.flag_count(), 1);

    desktop.handle_pointer_down(cell_centre(2, 3), PointerButton::Secondary);
    let grid = desktop.app(id).unwrap().as_minesweeper().unwrap().grid();
    assert_eq!(grid.flag_count(), 0);
}

#[test]
fn test_primary_click_reveals_cell() {
    let mut desktop = Desktop::default();
    let id = desktop.open_app(WindowKind::Minesweeper).id;

    let result = desktop.handle_pointer_down(cell_centre(0, 0), PointerButton::Primary);
    assert_eq!(result, InputResult::Handled);

    // Revealed either way: a bomb exposes every bomb
    let grid = desktop.app(id).unwrap().as_minesweeper().unwrap().grid();
    assert!(grid.cell(0, 0).unwrap().is_revealed);
    assert!(grid.cell(0, 0).unwrap().has_bomb || grid.revealed_safe_count() >= 1);
}

#[test]
fn test_click_between_cells_changes_nothing() {
    let mut desktop = Desktop::default();
    let id = desktop.open_app(WindowKind::Minesweeper).id;

    // Gap between columns 0 and 1 of row 0
    let result = desktop.handle_pointer_down(Point::new(148, 148), PointerButton::Primary);
    assert_eq!(result, InputResult::Handled);

    let grid = desktop.app(id).unwrap().as_minesweeper().unwrap().grid();
    assert_eq!(grid.revealed_safe_count(), 0);
    assert_eq!(grid.flag_count(), 0);
}

#[test]
fn test_content_click_on_other_apps_keeps_button() {
    let mut desktop = Desktop::default();
    let id = desktop.open_app(WindowKind::Calculator).id;

    let result = desktop.handle_pointer_down(Point::new(150, 150), PointerButton::Secondary);
    assert_eq!(
        result,
        InputResult::Forward {
            window_id: id,
            local_x: 50,
            local_y: 26,
            button: PointerButton::Secondary,
        }
    );
}

#[test]
fn test_input_for_unknown_window_is_ignored() {
    let mut desktop = Desktop::default();
    assert!(desktop.send_input(99, AppInput::Save).is_ok());
}
