//! UI rendering using ratatui
//!
//! One screen: header, the hand as a row of tiles, round counters, the
//! status line and a key legend. When the round ends a dialog offers a new
//! round on top of the final board.

use crate::app::{App, DictionaryStatus};
use crate::game::{Outcome, RoundError, RoundSnapshot, RoundSummary};
use ratatui::{
    layout::Flex,
    prelude::*,
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

/// Width of one tile box, borders included
const TILE_WIDTH: u16 = 7;
/// Height of one tile box, borders included
const TILE_HEIGHT: u16 = 4;

/// Render the game screen
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let snapshot = app.snapshot();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),           // Header
            Constraint::Length(1),           // Spacer
            Constraint::Length(TILE_HEIGHT), // Hand
            Constraint::Length(1),           // Cursor marker
            Constraint::Length(1),           // Spacer
            Constraint::Length(4),           // Counters
            Constraint::Length(1),           // Status message
            Constraint::Min(0),              // Remaining space
            Constraint::Length(2),           // Footer
        ])
        .split(area);

    render_header(frame, layout[0], app.dictionary_status());
    render_hand(frame, layout[2], layout[3], &snapshot, app.cursor);
    render_counters(frame, layout[5], &snapshot);

    let status = Paragraph::new(snapshot.message.as_str())
        .style(Style::default().fg(feedback_color(&snapshot.outcome)))
        .alignment(Alignment::Center);
    frame.render_widget(status, layout[6]);

    let footer = Paragraph::new(
        "←→ Move  Space/1-9 Select  [ ] Carry tile  Enter Play  d Discard  Esc Quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);
    frame.render_widget(footer, layout[8]);

    if snapshot.game_over {
        render_game_over(frame, area, &app.summary());
    }
}

fn render_header(frame: &mut Frame, area: Rect, dictionary: &DictionaryStatus) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let header_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(14), // Logo
            Constraint::Min(20),    // Dictionary status
        ])
        .split(inner);

    let logo = Paragraph::new("SCRABBLATRO")
        .style(Style::default().fg(Color::Yellow).bold())
        .alignment(Alignment::Left);
    frame.render_widget(logo, header_layout[0]);

    let color = match dictionary {
        DictionaryStatus::Loading => Color::DarkGray,
        DictionaryStatus::Loaded { .. } => Color::Green,
        DictionaryStatus::Failed { .. } => Color::Red,
    };
    let status = Paragraph::new(dictionary.label())
        .style(Style::default().fg(color))
        .alignment(Alignment::Right);
    frame.render_widget(status, header_layout[1]);
}

/// One box per tile: point value on top, letter below
fn render_hand(frame: &mut Frame, area: Rect, marker_area: Rect, snapshot: &RoundSnapshot, cursor: usize) {
    let constraints = vec![Constraint::Length(TILE_WIDTH); snapshot.hand.len()];
    let tile_areas = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints.clone())
        .flex(Flex::Center)
        .spacing(1)
        .split(area);
    let marker_areas = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .flex(Flex::Center)
        .spacing(1)
        .split(marker_area);

    for (i, (&letter, &score)) in snapshot.hand.iter().zip(&snapshot.tile_scores).enumerate() {
        let selected = snapshot.selected.contains(&i);
        let border_style = if selected {
            Style::default().fg(Color::Yellow).bold()
        } else if i == cursor {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::White)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(if selected { BorderType::Thick } else { BorderType::Rounded })
            .border_style(border_style);

        let text = vec![
            Line::from(score.to_string()).alignment(Alignment::Right),
            Line::from(letter.to_string().bold()).alignment(Alignment::Center),
        ];
        let tile = Paragraph::new(text).block(block).style(border_style);
        frame.render_widget(tile, tile_areas[i]);

        if i == cursor {
            let marker = Paragraph::new("^")
                .style(Style::default().fg(Color::Cyan).bold())
                .alignment(Alignment::Center);
            frame.render_widget(marker, marker_areas[i]);
        }
    }
}

fn render_counters(frame: &mut Frame, area: Rect, snapshot: &RoundSnapshot) {
    let lines = vec![
        Line::from(format!("Total Score: {}", snapshot.total_score)).magenta().bold(),
        Line::from(format!("Round Score: {}", snapshot.round_score)),
        Line::from(format_budget(snapshot.plays_left, snapshot.discards_left)),
        Line::from(format!("Deck: {} tiles", snapshot.deck_remaining)).dark_gray(),
    ];
    let counters = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(counters, area);
}

fn render_game_over(frame: &mut Frame, area: Rect, summary: &RoundSummary) {
    let popup = centered_rect(area, 48, 9);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(Color::Yellow))
        .title(" Game Over! ");

    let mut lines = vec![
        Line::from(""),
        Line::from(format!("Your final score is {}.", summary.total_score)).bold(),
    ];
    lines.push(Line::from(format_best_word(summary)).cyan());
    if let Some(longest) = format_longest_word(summary) {
        lines.push(Line::from(longest).cyan());
    }
    lines.push(Line::from(""));
    lines.push(Line::from("Would you like to play again?"));
    lines.push(Line::from("[Enter] Play Again   [Esc] Quit").dark_gray());

    let dialog = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center);
    frame.render_widget(dialog, popup);
}

/// A `width` x `height` rect in the middle of `area`, clipped to fit
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn format_budget(plays_left: u32, discards_left: u32) -> String {
    format!("Plays Left: {}   Discards Left: {}", plays_left, discards_left)
}

fn format_best_word(summary: &RoundSummary) -> String {
    match summary.best_word() {
        Some(best) => format!(
            "{} words played, best {} ({} pts)",
            summary.words.len(),
            best.word,
            best.points
        ),
        None => "No words played".to_string(),
    }
}

fn format_longest_word(summary: &RoundSummary) -> Option<String> {
    summary.longest_word().map(|longest| {
        format!(
            "Longest: {} ({} letters)",
            longest.word,
            longest.word.chars().count()
        )
    })
}

/// Status line color for the last command result
fn feedback_color(outcome: &Outcome) -> Color {
    match outcome {
        Outcome::Idle => Color::White,
        Outcome::Played(_) => Color::Green,
        Outcome::Discarded(_) => Color::Cyan,
        Outcome::Rejected(RoundError::NoPlaysLeft | RoundError::NoDiscardsLeft) => Color::Yellow,
        Outcome::Rejected(_) => Color::Red,
    }
}
