//! Terminal block puzzle runner (default binary).
//!
//! Uses crossterm for keyboard and mouse input and the framebuffer-based
//! renderer from `block_blast::term`.

use std::fs::File;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use log::{info, warn};

use block_blast::config::GameConfig;
use block_blast::core::{GameSnapshot, Session};
use block_blast::input::{handle_key_event, should_quit, DragHandler};
use block_blast::term::{FrameBuffer, GameView, RenderThrottle, TerminalRenderer, Viewport};
use block_blast::types::TICK_MS;

/// Redraw an unchanged frame at least this often.
const KEEPALIVE_MS: u64 = 1000;

fn main() -> Result<()> {
    let config = GameConfig::from_env().context("invalid configuration")?;
    init_logging(&config)?;

    let mut term = TerminalRenderer::new();
    if let Err(e) = term.enter() {
        let _ = term.exit();
        return Err(e);
    }

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    if let Err(e) = term.exit() {
        warn!("terminal restore failed: {e:#}");
    }
    result
}

/// Logs go to a file when one is configured; the game owns the terminal.
fn init_logging(config: &GameConfig) -> Result<()> {
    let Some(path) = &config.log_path else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("cannot open log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .context("logger already initialised")?;
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: &GameConfig) -> Result<()> {
    let mut session = match config.seed {
        Some(seed) => Session::with_seed(seed),
        None => Session::new(),
    };
    info!(
        "session start seed={:?} piece={}",
        session.seed(),
        session.piece().name()
    );

    let view = GameView::new(config.cell_width, config.cell_height);
    let mut drag = DragHandler::new();
    let mut throttle = RenderThrottle::new(KEEPALIVE_MS);
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let started = Instant::now();
    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut viewport = current_viewport();

    loop {
        session.snapshot_into(&mut snap);
        let now_ms = started.elapsed().as_millis() as u64;
        if throttle.should_render(now_ms, snap.fingerprint()) {
            view.render_into(&snap, viewport, &mut fb);
            term.draw_swap(&mut fb)?;
        }

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        info!(
                            "quit score={} pieces={}",
                            session.score(),
                            session.pieces_placed()
                        );
                        return Ok(());
                    }
                    if let Some(intent) = handle_key_event(key) {
                        session.apply(intent);
                    }
                }
                Event::Mouse(mouse) => {
                    let to_grid = |column, row| view.grid_cell_at(viewport, column, row);
                    if let Some(intent) = drag.handle_mouse(mouse, to_grid) {
                        session.apply(intent);
                    }
                }
                Event::Resize(w, h) => {
                    viewport = Viewport::new(w, h);
                    drag.cancel();
                    term.invalidate();
                    throttle.invalidate();
                }
                Event::FocusLost => drag.cancel(),
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
        }
    }
}

fn current_viewport() -> Viewport {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    Viewport::new(w, h)
}
