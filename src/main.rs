//! Terminal Puyo-Puyo runner (default binary).
//!
//! Uses crossterm for input and a framebuffer-based renderer. Keys apply
//! immediately; the pair descends one row per drop interval, and the
//! engine locks, settles cascades, and respawns on the step that fails.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_puyo::core::GameState;
use tui_puyo::input::{handle_key_event, should_quit};
use tui_puyo::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_puyo::types::DROP_INTERVAL_MS;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut game_state = GameState::new(time_seed());
    game_state.start();

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    let drop_interval = Duration::from_millis(DROP_INTERVAL_MS as u64);
    let mut last_drop = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&game_state, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until the next drop.
        let timeout = drop_interval
            .checked_sub(last_drop.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        game_state.apply_action(action);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Gravity step.
        if last_drop.elapsed() >= drop_interval {
            last_drop = Instant::now();
            game_state.step();
        }
    }
}

/// Seed from the wall clock so each run gets a fresh color sequence.
fn time_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}
