//! Terminal Tetris runner.
//!
//! One frame: draw the current snapshot, poll input until the next tick
//! deadline, then advance the game by one tick.

use std::time::{Duration, Instant};

use anyhow::Result;
use log::{error, info};

use grid_tetris::config::AppConfig;
use grid_tetris::core::{GameSnapshot, GameState};
use grid_tetris::input::{poll_input, InputEvent};
use grid_tetris::logging;
use grid_tetris::term::{FrameCanvas, GameView, TerminalRenderer};
use grid_tetris::types::TICK_MS;

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    logging::init(&config)?;
    info!(
        "starting (seed {:?}, initial speed {})",
        config.seed, config.initial_speed
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(e) = &result {
        error!("exiting on error: {:#}", e);
    }
    log::logger().flush();
    result
}

fn terminal_size() -> (u16, u16) {
    crossterm::terminal::size().unwrap_or((80, 24))
}

fn run(term: &mut TerminalRenderer, config: &AppConfig) -> Result<()> {
    let mut game = GameState::new(config.game_config());
    game.start();

    let (w, h) = terminal_size();
    let mut canvas = FrameCanvas::new(w, h);
    let view = GameView::new(&mut canvas)?;
    let mut snap = GameSnapshot::default();

    let tick = Duration::from_millis(TICK_MS as u64);
    let mut next_tick = Instant::now() + tick;

    loop {
        game.snapshot_into(&mut snap);
        view.render(&mut canvas, &snap)?;
        term.present(canvas.framebuffer())?;

        // Input until the tick deadline.
        loop {
            let timeout = next_tick.saturating_duration_since(Instant::now());
            if timeout.is_zero() {
                break;
            }
            match poll_input(timeout)? {
                Some(InputEvent::Quit) => {
                    info!("quit (score {}, pieces {})", game.score(), game.pieces());
                    return Ok(());
                }
                Some(InputEvent::Action(action)) => {
                    game.apply_action(action);
                }
                Some(InputEvent::Resize) => {
                    let (w, h) = terminal_size();
                    canvas.resize(w, h);
                    term.invalidate();
                }
                None => {}
            }
        }

        game.tick();

        // Skip missed ticks rather than bursting to catch up.
        next_tick += tick;
        let now = Instant::now();
        if next_tick < now {
            next_tick = now + tick;
        }
    }
}
