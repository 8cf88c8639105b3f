//! Session integration tests: full placement cycles through the public API

use block_blast::core::{can_place, Grid, Phase, Piece, PlaceOutcome, Session};
use block_blast::types::{BlockColor, Intent, GRID_SIZE};
use rand::rngs::StdRng;
use rand::SeedableRng;

const N: i8 = GRID_SIZE as i8;

/// First anchor, scanning from the bottom row up, where the current piece fits
fn greedy_anchor<R: rand::RngCore>(session: &Session<R>) -> Option<(i8, i8)> {
    (0..N)
        .rev()
        .flat_map(|y| (0..N).map(move |x| (x, y)))
        .find(|&anchor| can_place(session.grid(), session.piece(), anchor))
}

#[test]
fn test_greedy_play_scores_ten_per_line() {
    let mut session = Session::with_seed(2024);

    for _ in 0..500 {
        if !session.is_running() {
            break;
        }
        // A running session always has at least a top-row fit.
        let anchor = greedy_anchor(&session).expect("running session has a legal move");
        let score_before = session.score();
        let lines_before = session.lines_cleared();
        let cells = session.piece().shape().len();
        let occupied_before = session.grid().occupied_count();

        let outcome = session.place_attempt(anchor);
        let cleared = outcome.clear_result().expect("greedy anchor is legal").clone();

        assert_eq!(session.score(), score_before + 10 * cleared.lines() as u32);
        assert_eq!(session.lines_cleared(), lines_before + cleared.lines() as u32);
        if cleared.is_empty() {
            assert_eq!(session.grid().occupied_count(), occupied_before + cells);
        }
    }

    let snap = session.snapshot();
    assert_eq!(snap.score, session.score());
    assert_eq!(snap.running, session.phase() == Phase::Running);
    assert_eq!(snap.seed, Some(2024));
}

#[test]
fn test_seeded_sessions_replay_identically() {
    let play = |seed: u64| {
        let mut session = Session::with_seed(seed);
        let mut trace = Vec::new();
        for _ in 0..40 {
            let Some(anchor) = greedy_anchor(&session) else {
                break;
            };
            trace.push((session.piece().name(), session.piece().color(), anchor));
            if matches!(session.place_attempt(anchor), PlaceOutcome::GameOver(_)) {
                break;
            }
        }
        (trace, session.score())
    };

    assert_eq!(play(77), play(77));
}

#[test]
fn test_drop_over_occupied_cell_is_rejected_silently() {
    let mut grid = Grid::new();
    grid.set_cell(4, 4, BlockColor::Tomato).unwrap();
    let piece = Piece::new(&[(0, 0), (1, 0)], BlockColor::Gold);
    let mut session = Session::from_parts(grid.clone(), piece, StdRng::seed_from_u64(3));

    session.apply(Intent::DragTo { x: 3, y: 4 });
    assert!(!session.placeable());
    assert!(!session.apply(Intent::PlaceAttempt { x: 3, y: 4 }));

    assert_eq!(session.grid(), &grid);
    assert_eq!(session.piece().anchor(), (3, 4));
    assert_eq!(session.score(), 0);
    assert!(session.is_running());
}

#[test]
fn test_filling_a_row_by_drag_and_drop() {
    let mut grid = Grid::new();
    for x in 0..N - 2 {
        grid.set_cell(x, 9, BlockColor::Tomato).unwrap();
    }
    grid.set_cell(9, 8, BlockColor::LimeGreen).unwrap();
    let piece = Piece::new(&[(0, 0), (1, 0)], BlockColor::Gold);
    let mut session = Session::from_parts(grid, piece, StdRng::seed_from_u64(5));

    session.apply(Intent::DragTo { x: 8, y: 9 });
    assert!(session.placeable());
    assert!(session.apply(Intent::PlaceAttempt { x: 8, y: 9 }));

    assert_eq!(session.score(), 10);
    assert_eq!(session.rows_cleared(), 1);
    assert_eq!(session.columns_cleared(), 0);
    assert_eq!(session.pieces_placed(), 1);
    // The lone block above the cleared row drops into it.
    assert_eq!(session.grid().cell_color(9, 9), Ok(Some(BlockColor::LimeGreen)));
    assert_eq!(session.grid().occupied_count(), 1);
    assert_eq!(session.piece().anchor(), (0, 0));
}

#[test]
fn test_keyboard_nudge_and_place() {
    let piece = Piece::new(&[(0, 0)], BlockColor::Gold);
    let mut session = Session::from_parts(Grid::new(), piece, StdRng::seed_from_u64(9));

    assert!(!session.apply(Intent::Nudge { dx: 0, dy: -1 }));
    for _ in 0..3 {
        assert!(session.apply(Intent::Nudge { dx: 1, dy: 1 }));
    }
    assert!(session.apply(Intent::PlaceAtAnchor));
    assert_eq!(session.grid().cell_color(3, 3), Ok(Some(BlockColor::Gold)));
}
