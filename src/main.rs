//! Terminal Planet Patrol runner (default binary).
//!
//! Hosts the event loop: frame-paced rendering, crossterm mouse events into
//! the drag controller, and a one-second cadence for the countdown. The
//! final score is reported through a completion callback exactly once, when
//! the player confirms the summary screen.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{bail, Result};
use crossterm::event::{self, Event, KeyEventKind};

use tui_planet_patrol::core::{DragController, GameSession};
use tui_planet_patrol::input::{is_confirm, pointer_event, should_quit, PointerEvent};
use tui_planet_patrol::term::{BinFlash, GameView, StageLayout, TerminalRenderer, Viewport};
use tui_planet_patrol::types::{FRAME_MS, SETUP_RETRY_DELAY_MS};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let mut completed: Option<u32> = None;
    let result = run(&mut term, wall_clock_seed(), |score| {
        completed = Some(score);
    });

    // Always try to restore terminal state.
    let _ = term.exit();
    result?;

    if let Some(score) = completed {
        println!("Mission complete! Final score: {score}");
    }
    Ok(())
}

/// Seed from the wall clock so each round gets a fresh board.
fn wall_clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn run(
    term: &mut TerminalRenderer,
    seed: u32,
    on_complete: impl FnOnce(u32),
) -> Result<()> {
    let mut session = GameSession::new(seed);
    let mut drag = DragController::new();
    let view = GameView;
    let mut flash: Option<BinFlash> = None;
    let mut on_complete = Some(on_complete);

    // Item placement needs a measured play area. If the terminal is too
    // small on the first pass, retry once after a short delay so a starting
    // terminal can finish sizing itself.
    let mut setup_done = false;
    let mut setup_retry: Option<Instant> = None;
    let mut setup_attempted = false;

    let frame_duration = Duration::from_millis(FRAME_MS as u64);
    let mut last_frame = Instant::now();
    let mut last_second = Instant::now();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        let layout = StageLayout::compute(viewport);

        if !setup_done {
            let due = setup_retry.map_or(!setup_attempted, |at| Instant::now() >= at);
            if due {
                setup_retry = None;
                if session.setup(layout.play_area.w, layout.play_area.h) {
                    setup_done = true;
                    last_second = Instant::now();
                } else if !setup_attempted {
                    setup_attempted = true;
                    setup_retry =
                        Some(Instant::now() + Duration::from_millis(SETUP_RETRY_DELAY_MS));
                } else {
                    bail!(
                        "terminal too small for the play area ({w}x{h}); \
                         enlarge the window and restart"
                    );
                }
            }
        }

        // Render.
        let fb = view.render(&session, &drag, flash.as_ref(), viewport);
        term.draw(&fb)?;

        // Input with timeout until the next frame.
        let timeout = frame_duration
            .checked_sub(last_frame.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if session.is_finished() && is_confirm(key) {
                        if let Some(report) = on_complete.take() {
                            report(session.score());
                        }
                        return Ok(());
                    }
                }
                Event::Mouse(mouse) => {
                    if let Some(ev) = pointer_event(mouse, layout.origin()) {
                        match ev {
                            PointerEvent::Down(p) => {
                                drag.begin(&session, p);
                            }
                            PointerEvent::Move(p) => drag.update(&mut session, p),
                            PointerEvent::Up(p) => {
                                drag.end(&mut session, p, &layout.bins);
                                if let Some(drop) = session.take_last_drop() {
                                    flash = Some(BinFlash::from_event(drop));
                                }
                            }
                        }
                    }
                }
                Event::Resize(..) => {
                    // Layout is recomputed from the live viewport each frame.
                }
                _ => {}
            }
        }

        // Frame housekeeping.
        let frame_elapsed = last_frame.elapsed().as_millis() as i32;
        last_frame = Instant::now();
        if let Some(f) = &mut flash {
            if f.decay(frame_elapsed) {
                flash = None;
            }
        }

        // Countdown: one whole second per tick, never after the session has
        // finished.
        if setup_done && !session.is_finished() && last_second.elapsed() >= Duration::from_secs(1)
        {
            last_second += Duration::from_secs(1);
            session.tick();
        }
    }
}
