//! SCRABBLATRO - a round-based word game with letter tiles
//!
//! Draw seven tiles. Spell words. Spend your plays wisely.

mod app;
mod game;
mod tui;

use app::{App, Args, Config, DictionaryLoader};
use clap::Parser;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use game::{Round, SharedDictionary};
use std::io;
use std::time::{Duration, Instant};
use tui::Tui;

fn main() -> io::Result<()> {
    let config = match Config::from_args(Args::parse()) {
        Ok(config) => config,
        Err(err) => err.exit(),
    };

    // The round starts right away; words are accepted once the list arrives
    let dictionary = SharedDictionary::new();
    let loader = DictionaryLoader::spawn(config.dictionary_path.clone(), dictionary.clone());
    let round = match config.seed {
        Some(seed) => Round::with_seed(dictionary, config.rules, seed),
        None => Round::new(dictionary, config.rules),
    };
    let mut app = App::new(round, Some(loader));

    // Initialize terminal
    let mut terminal = Tui::new()?;
    terminal.enter()?;

    // Main event loop
    let tick_rate = Duration::from_millis(250);
    let mut last_tick = Instant::now();

    loop {
        // Render
        terminal.draw(|frame| tui::render(frame, &app))?;

        // Calculate timeout for next tick
        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        // Poll for events with timeout
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events (not release)
                if key.kind == KeyEventKind::Press {
                    handle_key(&mut app, key);
                }
            }
        }

        // Check on the dictionary load
        if last_tick.elapsed() >= tick_rate {
            app.tick();
            last_tick = Instant::now();
        }

        // Check for quit
        if app.should_quit {
            break;
        }
    }

    // Terminal cleanup happens automatically via Tui::drop
    Ok(())
}

fn handle_key(app: &mut App, key: KeyEvent) {
    let shifted = key.modifiers.contains(KeyModifiers::SHIFT);
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => app.quit(),
        KeyCode::Enter | KeyCode::Char('y') | KeyCode::Char('n') if app.is_game_over() => {
            app.on_new_round();
        }
        KeyCode::Left if shifted => app.on_move_left(),
        KeyCode::Right if shifted => app.on_move_right(),
        KeyCode::Char('[') => app.on_move_left(),
        KeyCode::Char(']') => app.on_move_right(),
        KeyCode::Left | KeyCode::Char('h') => app.on_left(),
        KeyCode::Right | KeyCode::Char('l') => app.on_right(),
        KeyCode::Char(' ') => app.on_toggle(),
        KeyCode::Char(c @ '1'..='9') => {
            let slot = c as usize - '1' as usize;
            app.on_toggle_slot(slot);
        }
        KeyCode::Enter => app.on_play(),
        KeyCode::Char('d') | KeyCode::Backspace => app.on_discard(),
        _ => {}
    }
}
