//! User interface components.
//!
//! Renders the artist input, the per-artist summary table, the word count
//! scatter chart and the optional song table using ratatui.

mod chart;
mod tables;

pub use chart::{artist_color, draw_word_chart};
pub use tables::{draw_song_table, draw_summary_table, format_stat};

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, Focus};
use crate::constants::ui::{SONG_TABLE_PERCENT, SUMMARY_HEIGHT};

const FOOTNOTE: &str = "NB If no lyrics can be found, songs are discarded. \
    If release year is not found on MusicBrainz, it is set to the year 2000";

/// Render the full application UI to the terminal frame.
pub fn draw(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),              // Artist input
            Constraint::Length(1),              // Status line
            Constraint::Length(SUMMARY_HEIGHT), // Summary table
            Constraint::Min(8),                 // Chart and songs
            Constraint::Length(1),              // Footnote
            Constraint::Length(3),              // Command bar
        ])
        .split(f.size());

    draw_input(f, app, chunks[0]);
    draw_status_line(f, app, chunks[1]);

    let results_focused = app.focus == Focus::Results;
    draw_summary_table(f, &app.summaries, chunks[2], results_focused);

    if app.show_songs {
        let lower = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(100 - SONG_TABLE_PERCENT),
                Constraint::Percentage(SONG_TABLE_PERCENT),
            ])
            .split(chunks[3]);
        draw_word_chart(f, &app.songs, lower[0]);
        draw_song_table(f, app, lower[1], results_focused);
    } else {
        draw_word_chart(f, &app.songs, chunks[3]);
    }

    f.render_widget(
        Paragraph::new(FOOTNOTE).style(Style::default().fg(Color::Gray)),
        chunks[4],
    );

    draw_command_bar(f, app, chunks[5]);

    if app.is_loading {
        draw_loading_indicator(f);
    }

    if let Some(error) = &app.error_message {
        draw_error_message(f, error);
    }
}

fn draw_input(f: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::Input;
    let block = create_titled_block(
        "Enter artist names, separated using a comma, e.g. Blur,Twenty one pilots",
        focused,
    );
    let inner = block.inner(area);

    f.render_widget(Paragraph::new(app.input.as_str()).block(block), area);

    if focused && app.error_message.is_none() {
        let typed = u16::try_from(app.input.chars().count()).unwrap_or(u16::MAX);
        let x = inner.left().saturating_add(typed);
        f.set_cursor(x.min(inner.right().saturating_sub(1)), inner.top());
    }
}

fn draw_status_line(f: &mut Frame, app: &App, area: Rect) {
    let Some(status) = &app.status_message else {
        return;
    };
    let style = if app.is_loading {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::Cyan)
    };
    f.render_widget(Paragraph::new(format!(" {status}")).style(style), area);
}

fn draw_command_bar(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .title(Span::styled("Commands", Style::default().fg(Color::Yellow)));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let help_text = match app.focus {
        Focus::Input => create_help_text(&[
            ("Enter", "Submit"),
            ("Tab", "Results"),
            ("Esc", "Quit"),
        ]),
        Focus::Results => create_help_text(&[
            ("s", if app.show_songs { "Hide songs" } else { "Show songs" }),
            ("Up/Down", "Scroll"),
            ("Tab", "Input"),
            ("Esc", "Quit"),
        ]),
    };

    f.render_widget(
        Paragraph::new(Line::from(help_text)).style(Style::default().fg(Color::Gray)),
        inner,
    );
}

/// Build styled help text spans from key-description pairs for the command bar.
pub fn create_help_text<'a>(commands: &[(&'a str, &'a str)]) -> Vec<Span<'a>> {
    let mut text = vec![Span::raw(" ")];

    for (i, (key, description)) in commands.iter().enumerate() {
        if i > 0 {
            text.push(Span::raw(" | "));
        }
        text.push(Span::styled(*key, Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)));
        text.push(Span::raw(format!(": {description}")));
    }

    text
}

/// Create a bordered block with a title, highlighted when focused.
pub fn create_titled_block(title: &str, is_focused: bool) -> Block<'_> {
    let (title_style, border_style) = if is_focused {
        (
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            Style::default().fg(Color::Yellow),
        )
    } else {
        (Style::default(), Style::default())
    };

    Block::default()
        .title(Span::styled(title, title_style))
        .borders(Borders::ALL)
        .border_style(border_style)
}

/// Rectangle of the given size centered in `outer`.
fn centered(outer: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(outer.width);
    let height = height.min(outer.height);
    Rect {
        x: outer.x + (outer.width - width) / 2,
        y: outer.y + (outer.height - height) / 2,
        width,
        height,
    }
}

fn draw_loading_indicator(f: &mut Frame) {
    let area = centered(f.size(), 24, 3);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .style(Style::default().bg(Color::Black));
    let text = Paragraph::new("Searching...")
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(block);

    f.render_widget(Clear, area);
    f.render_widget(text, area);
}

fn draw_error_message(f: &mut Frame, message: &str) {
    let size = f.size();
    let area = centered(size, 50.min(size.width.saturating_sub(4)), 7);

    let block = Block::default()
        .title(Span::styled("Error", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .style(Style::default().bg(Color::Black));
    let inner = block.inner(area);

    f.render_widget(Clear, area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    f.render_widget(
        Paragraph::new(message)
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        rows[0],
    );
    f.render_widget(
        Paragraph::new("Press Esc to dismiss")
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Center),
        rows[1],
    );
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use crate::types::{SongCollection, SongRecord};
    use ratatui::{backend::TestBackend, Terminal};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(ratatui::buffer::Cell::symbol).collect()
    }

    #[test]
    fn help_text_separates_commands() {
        let spans = create_help_text(&[("a", "One"), ("b", "Two")]);
        let text: String = spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, " a: One | b: Two");
    }

    #[test]
    fn centered_rect_fits_inside() {
        let outer = Rect::new(0, 0, 10, 4);
        assert_eq!(centered(outer, 20, 2), Rect::new(0, 1, 10, 2));
    }

    #[test]
    fn draws_summary_and_songs() {
        let mut app = App::with_aggregator(None);
        app.songs = SongCollection::from(vec![SongRecord {
            artist: "Blur".into(),
            title: "Song 2".into(),
            release_year: 1997,
            lyrics: "woo hoo".into(),
            word_count: 2,
        }]);
        app.summaries = crate::services::summarize(&app.songs);
        app.toggle_songs();

        let mut terminal = Terminal::new(TestBackend::new(140, 40)).unwrap();
        terminal.draw(|f| draw(f, &mut app)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Mean number of words"));
        assert!(text.contains("Song 2"));
        assert!(text.contains("1997"));
    }

    fn cursor_after_typing(len: usize) -> (u16, u16) {
        let mut app = App::with_aggregator(None);
        app.input = "x".repeat(len);
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|f| draw(f, &mut app)).unwrap();
        terminal.get_cursor().unwrap()
    }

    #[test]
    fn cursor_stays_at_input_end_for_oversized_input() {
        let clamped = cursor_after_typing(200);
        // 65_536 characters would wrap to zero if the length were truncated to u16.
        assert_eq!(cursor_after_typing(65_536), clamped);
        assert!(cursor_after_typing(3).0 < clamped.0);
    }
}
