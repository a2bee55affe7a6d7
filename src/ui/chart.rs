use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    symbols::Marker,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

use crate::types::SongCollection;

const TITLE: &str = "Number of words in a song vs release year";

/// Stable colour for an artist, derived from a hash of the name.
///
/// Each channel stays in 64..=255 so points remain visible on a dark terminal.
pub fn artist_color(artist: &str) -> Color {
    let mut hasher = DefaultHasher::new();
    artist.hash(&mut hasher);
    let [r, g, b, ..] = hasher.finish().to_le_bytes();
    let lift = |c: u8| 64 + c % 192;
    Color::Rgb(lift(r), lift(g), lift(b))
}

/// Scatter points per artist in first-seen order.
#[allow(clippy::cast_precision_loss)]
fn artist_points(songs: &SongCollection) -> Vec<(&str, Vec<(f64, f64)>)> {
    songs
        .artists()
        .into_iter()
        .map(|artist| {
            let points = songs
                .iter()
                .filter(|r| r.artist == artist)
                .map(|r| (f64::from(r.release_year), r.word_count as f64))
                .collect();
            (artist, points)
        })
        .collect()
}

/// Axis bounds padded so edge points are not drawn on the frame.
fn bounds(series: &[(&str, Vec<(f64, f64)>)]) -> ([f64; 2], [f64; 2]) {
    let all = series.iter().flat_map(|(_, points)| points.iter());
    let (min_x, max_x, max_y) = all.fold(
        (f64::INFINITY, f64::NEG_INFINITY, 0.0_f64),
        |(lo, hi, top), &(x, y)| (lo.min(x), hi.max(x), top.max(y)),
    );
    ([min_x - 1.0, max_x + 1.0], [0.0, (max_y * 1.1).ceil().max(1.0)])
}

fn axis_labels(range: [f64; 2]) -> Vec<Span<'static>> {
    let mid = f64::midpoint(range[0], range[1]);
    [range[0], mid, range[1]]
        .iter()
        .map(|v| Span::raw(format!("{v:.0}")))
        .collect()
}

/// Scatter plot of word count against release year, one colour per artist.
pub fn draw_word_chart(f: &mut Frame, songs: &SongCollection, area: Rect) {
    let block = Block::default().title(TITLE).borders(Borders::ALL);

    if songs.is_empty() {
        let empty = Paragraph::new("No songs to plot yet")
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let series = artist_points(songs);
    let (x_bounds, y_bounds) = bounds(&series);

    let datasets = series
        .iter()
        .map(|(artist, points)| {
            Dataset::default()
                .name(artist.to_string())
                .marker(Marker::Dot)
                .graph_type(GraphType::Scatter)
                .style(Style::default().fg(artist_color(artist)))
                .data(points)
        })
        .collect();

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(
            Axis::default()
                .title("Release year")
                .bounds(x_bounds)
                .labels(axis_labels(x_bounds)),
        )
        .y_axis(
            Axis::default()
                .title("Number of words")
                .bounds(y_bounds)
                .labels(axis_labels(y_bounds)),
        );

    f.render_widget(chart, area);
}
