//! Input mapping tests wired through the view's mouse mapping and a session

use block_blast::core::{Grid, Piece, Session};
use block_blast::input::{handle_key_event, should_quit, DragHandler};
use block_blast::term::{GameView, Viewport};
use block_blast::types::{BlockColor, Intent};
use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

#[test]
fn test_quit_keys() {
    assert!(should_quit(key(KeyCode::Char('q'))));
    assert!(should_quit(key(KeyCode::Char('Q'))));
    assert!(should_quit(key(KeyCode::Esc)));
    assert!(should_quit(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
    assert!(!should_quit(key(KeyCode::Char('c'))));
}

#[test]
fn test_keys_map_to_intents() {
    assert_eq!(handle_key_event(key(KeyCode::Left)), Some(Intent::Nudge { dx: -1, dy: 0 }));
    assert_eq!(handle_key_event(key(KeyCode::Char('j'))), Some(Intent::Nudge { dx: 0, dy: 1 }));
    assert_eq!(handle_key_event(key(KeyCode::Char(' '))), Some(Intent::PlaceAtAnchor));
    assert_eq!(handle_key_event(key(KeyCode::Char('r'))), Some(Intent::ResetAnchor));
    assert_eq!(handle_key_event(key(KeyCode::Char('z'))), None);
}

#[test]
fn test_mouse_drag_drop_places_piece_under_pointer() {
    let view = GameView::new(4, 2);
    let vp = Viewport::new(80, 30);
    let (ox, oy) = view.layout(vp).inner_origin();
    let to_grid = |column, row| view.grid_cell_at(vp, column, row);

    let piece = Piece::new(&[(0, 0), (1, 0)], BlockColor::Gold);
    let mut session = Session::from_parts(Grid::new(), piece, StdRng::seed_from_u64(11));
    let mut drag = DragHandler::new();

    // Press on cell (0, 0), drag to cell (6, 4), release there.
    let events = [
        mouse(MouseEventKind::Down(MouseButton::Left), ox + 1, oy),
        mouse(MouseEventKind::Drag(MouseButton::Left), ox + 6 * 4 + 2, oy + 4 * 2 + 1),
        mouse(MouseEventKind::Up(MouseButton::Left), ox + 6 * 4 + 2, oy + 4 * 2 + 1),
    ];
    for event in events {
        if let Some(intent) = drag.handle_mouse(event, to_grid) {
            session.apply(intent);
        }
    }

    assert_eq!(session.grid().cell_color(6, 4), Ok(Some(BlockColor::Gold)));
    assert_eq!(session.grid().cell_color(7, 4), Ok(Some(BlockColor::Gold)));
    assert_eq!(session.pieces_placed(), 1);
}

#[test]
fn test_dragging_off_the_board_snaps_home() {
    let view = GameView::new(4, 2);
    let vp = Viewport::new(80, 30);
    let (ox, oy) = view.layout(vp).inner_origin();
    let to_grid = |column, row| view.grid_cell_at(vp, column, row);

    let piece = Piece::new(&[(0, 0), (1, 0)], BlockColor::Gold);
    let mut session = Session::from_parts(Grid::new(), piece, StdRng::seed_from_u64(11));
    let mut drag = DragHandler::new();

    let to_cell = mouse(MouseEventKind::Down(MouseButton::Left), ox + 5 * 4, oy + 5 * 2);
    if let Some(intent) = drag.handle_mouse(to_cell, to_grid) {
        session.apply(intent);
    }
    assert_eq!(session.piece().anchor(), (5, 5));

    // Left of the border.
    let off_board = mouse(MouseEventKind::Drag(MouseButton::Left), ox - 2, oy + 5 * 2);
    if let Some(intent) = drag.handle_mouse(off_board, to_grid) {
        session.apply(intent);
    }
    assert_eq!(session.piece().anchor(), (0, 0));

    // Releasing off the board commits nothing.
    let release = mouse(MouseEventKind::Up(MouseButton::Left), ox - 2, oy);
    if let Some(intent) = drag.handle_mouse(release, to_grid) {
        assert!(!session.apply(intent));
    }
    assert_eq!(session.grid().occupied_count(), 0);
}
