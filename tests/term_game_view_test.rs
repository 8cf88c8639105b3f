use block_blast::core::{GameSnapshot, Session};
use block_blast::term::{AnchorY, GameView, Rgb, Viewport};
use block_blast::types::BlockColor;

// 10 cells of 2x1 plus border => 22x12 frame.
fn small_view() -> GameView {
    GameView::new(2, 1).with_anchor_y(AnchorY::Top)
}

#[test]
fn term_view_renders_border_corners() {
    let snap = GameSnapshot::default();
    let fb = small_view().render(&snap, Viewport::new(22, 12));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 11).unwrap().ch, '└');
    assert_eq!(fb.get(21, 11).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_grid_cell_in_its_color() {
    let mut snap = GameSnapshot::default();
    snap.grid[9][0] = Some(BlockColor::Tomato);
    // Park the piece elsewhere so it does not cover the cell.
    snap.piece.x = 5;
    snap.piece.y = 0;

    let fb = small_view().render(&snap, Viewport::new(22, 12));

    for x in [1, 2] {
        let cell = fb.get(x, 10).unwrap();
        assert_eq!(cell.ch, '█');
        assert_eq!((cell.style.fg.r, cell.style.fg.g, cell.style.fg.b), BlockColor::Tomato.rgb());
    }
    assert_eq!(fb.get(1, 9).unwrap().ch, '·');
}

#[test]
fn term_view_marks_unplaceable_piece() {
    let mut snap = GameSnapshot::default();
    snap.grid[0][0] = Some(BlockColor::Gold);

    snap.placeable = true;
    let ok = small_view().render(&snap, Viewport::new(22, 12));
    assert_eq!(ok.get(1, 1).unwrap().ch, '█');

    snap.placeable = false;
    let blocked = small_view().render(&snap, Viewport::new(22, 12));
    assert_eq!(blocked.get(1, 1).unwrap().ch, '▒');
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let session = Session::with_seed(31337);
    let mut snap = session.snapshot();
    snap.score = 1230;
    snap.rows_cleared = 100;

    let fb = small_view().render(&snap, Viewport::new(60, 24));
    let all = fb.text();

    assert!(all.contains("SCORE"));
    assert!(all.contains("1230"));
    assert!(all.contains("ROWS"));
    assert!(all.contains("100"));
    assert!(all.contains("31337"));
    assert!(all.contains(snap.piece.name));
}

#[test]
fn term_view_shows_game_over_overlay() {
    let mut snap = GameSnapshot::default();
    assert!(!small_view().render(&snap, Viewport::new(40, 12)).text().contains("GAME OVER"));

    snap.running = false;
    let fb = small_view().render(&snap, Viewport::new(40, 12));
    assert!(fb.text().contains("GAME OVER"));
}

#[test]
fn term_view_mouse_mapping_matches_drawn_cells() {
    let mut snap = GameSnapshot::default();
    snap.grid[6][3] = Some(BlockColor::LimeGreen);
    snap.piece.x = 9;
    snap.piece.y = 9;

    let view = GameView::new(4, 2);
    let vp = Viewport::new(100, 30);
    let fb = view.render(&snap, vp);

    let mut hits = Vec::new();
    for y in 0..fb.height() {
        for x in 0..fb.width() {
            if fb.get(x, y).unwrap().style.fg == Rgb::from(BlockColor::LimeGreen) {
                hits.push(view.grid_cell_at(vp, x, y));
            }
        }
    }
    assert_eq!(hits.len(), 8);
    assert!(hits.iter().all(|&cell| cell == (3, 6)));
}
