//! Blockfall terminal runner.
//!
//! Two producers - a timer thread and an input thread - feed a single
//! `mpsc` channel. The main loop is the only owner of `GameState`: every
//! event is applied to completion before the next is read, which serializes
//! tick-driven and input-driven mutations without locks. Rendering happens
//! once per timer fire, after the mutation has committed.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::core::GameState;
use blockfall::input::{handle_key_event, should_quit};
use blockfall::term::{GameView, TerminalRenderer};
use blockfall::types::{GameConfig, GameEvent};

/// How long the input thread waits in one poll before rechecking shutdown.
const INPUT_POLL_MS: u64 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    GameOver,
    Quit,
}

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();

    match result? {
        Outcome::GameOver => println!("Game Over"),
        Outcome::Quit => {}
    }
    Ok(())
}

fn run(term: &mut TerminalRenderer) -> Result<Outcome> {
    let config = GameConfig::default();
    let mut game = GameState::new(config.clone(), wall_clock_seed());
    game.start();

    let (tx, rx) = mpsc::channel::<GameEvent>();
    let shutdown = Arc::new(AtomicBool::new(false));

    // Timer producer: one Tick per physical period, until the channel closes.
    let tick_tx = tx.clone();
    let tick_period = config.tick_period;
    let timer = thread::spawn(move || loop {
        thread::sleep(tick_period);
        if tick_tx.send(GameEvent::Tick).is_err() {
            break;
        }
    });

    // Input producer: polls so it can notice shutdown between key events.
    let input_tx = tx;
    let input_shutdown = Arc::clone(&shutdown);
    let input = thread::spawn(move || -> Result<()> {
        while !input_shutdown.load(Ordering::Relaxed) {
            if !event::poll(Duration::from_millis(INPUT_POLL_MS))? {
                continue;
            }
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                let msg = if should_quit(key) {
                    GameEvent::Quit
                } else if let Some(action) = handle_key_event(key) {
                    GameEvent::Action(action)
                } else {
                    continue;
                };
                if input_tx.send(msg).is_err() {
                    break;
                }
            }
        }
        Ok(())
    });

    let view = GameView;
    let mut snapshot = game.snapshot();
    term.draw(&view.render(&snapshot))?;

    // Single consumer: sole owner of the game state.
    let outcome = loop {
        match rx.recv() {
            Ok(GameEvent::Tick) => {
                game.tick();
                game.snapshot_into(&mut snapshot);
                term.draw(&view.render(&snapshot))?;
                if game.game_over() {
                    break Outcome::GameOver;
                }
            }
            Ok(GameEvent::Action(action)) => {
                game.apply_action(action);
            }
            Ok(GameEvent::Quit) => break Outcome::Quit,
            // Both producers gone; nothing left to consume.
            Err(mpsc::RecvError) => break Outcome::Quit,
        }
    };

    // Closing the channel cancels the timer; the flag unblocks the poller.
    // No event is applied after this point.
    shutdown.store(true, Ordering::Relaxed);
    drop(rx);
    let _ = timer.join();
    match input.join() {
        Ok(result) => result?,
        Err(_) => {}
    }

    Ok(outcome)
}

fn wall_clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
