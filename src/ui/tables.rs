use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Row, Table},
    Frame,
};

use crate::app::App;
use crate::types::ArtistSummary;
use crate::ui::create_titled_block;

/// Format a one-decimal statistic; undefined values render as `-`.
pub fn format_stat(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{v:.1}"))
}

fn header(cells: &[&'static str]) -> Row<'static> {
    Row::new(cells.to_vec())
        .style(Style::default().fg(Color::White).bg(Color::Rgb(30, 30, 30)).add_modifier(Modifier::BOLD))
}

/// Per-artist mean, variance and standard deviation of word counts.
pub fn draw_summary_table(f: &mut Frame, summaries: &[ArtistSummary], area: Rect, focused: bool) {
    let rows = summaries.iter().map(|s| {
        Row::new(vec![
            s.artist.clone(),
            format!("{:.1}", s.mean_word_count),
            format_stat(s.variance),
            format_stat(s.standard_deviation),
        ])
        .style(Style::default().fg(Color::White).bg(Color::Rgb(0, 0, 128)))
    });

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(34),
            Constraint::Percentage(22),
            Constraint::Percentage(22),
            Constraint::Percentage(22),
        ],
    )
    .header(header(&["Artist", "Mean number of words", "Variance", "Standard deviation"]))
    .block(create_titled_block("Lyric count by artist", focused));

    f.render_widget(table, area);
}

/// Songs sorted by release year, scrollable with the table state.
pub fn draw_song_table(f: &mut Frame, app: &mut App, area: Rect, focused: bool) {
    let rows: Vec<Row> = app
        .songs
        .sorted_by_release_year()
        .into_iter()
        .map(|r| {
            Row::new(vec![
                r.artist.clone(),
                r.title.clone(),
                r.release_year.to_string(),
                r.word_count.to_string(),
            ])
        })
        .collect();

    let title = format!("Songs ({})", rows.len());
    let table = Table::new(
        rows,
        [
            Constraint::Percentage(25),
            Constraint::Percentage(45),
            Constraint::Length(8),
            Constraint::Length(8),
        ],
    )
    .header(header(&["Artist", "Song title", "Year", "Words"]))
    .block(create_titled_block(&title, focused))
    .highlight_style(Style::default().bg(Color::Rgb(80, 80, 120)).add_modifier(Modifier::BOLD));

    f.render_stateful_widget(table, area, &mut app.song_table_state);
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn undefined_statistics_render_as_dash() {
        assert_eq!(format_stat(None), "-");
        assert_eq!(format_stat(Some(10000.0)), "10000.0");
        assert_eq!(format_stat(Some(12.3)), "12.3");
    }
}
