//! Per-artist word count statistics.
//!
//! Values are rounded to one decimal place with round-half-to-even applied to
//! the binary value (`12.5` rounds to `12`, `13.5` to `14`). Variance and
//! standard deviation use the sample (n - 1) denominator and are `None` for
//! an artist with a single song.

use crate::types::{ArtistSummary, SongRecord};

/// Round to one decimal place, ties to even.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}

#[allow(clippy::cast_precision_loss)]
fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample variance; `None` with fewer than two values.
#[allow(clippy::cast_precision_loss)]
pub fn sample_variance(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let mean = mean(values);
    let squares: f64 = values
        .iter()
        .map(|&x| {
            let diff = x - mean;
            diff * diff
        })
        .sum();
    Some(squares / (values.len() - 1) as f64)
}

/// One summary per distinct artist, in first-seen order.
#[allow(clippy::cast_precision_loss)]
pub fn summarize<'a, I>(records: I) -> Vec<ArtistSummary>
where
    I: IntoIterator<Item = &'a SongRecord>,
{
    let mut groups: Vec<(&str, Vec<f64>)> = Vec::new();
    for record in records {
        let idx = groups
            .iter()
            .position(|(artist, _)| *artist == record.artist)
            .unwrap_or_else(|| {
                groups.push((record.artist.as_str(), Vec::new()));
                groups.len() - 1
            });
        groups[idx].1.push(record.word_count as f64);
    }

    groups
        .into_iter()
        .map(|(artist, counts)| {
            let variance = sample_variance(&counts);
            ArtistSummary {
                artist: artist.to_string(),
                song_count: counts.len(),
                mean_word_count: round1(mean(&counts)),
                variance: variance.map(round1),
                standard_deviation: variance.map(|v| round1(v.sqrt())),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic, clippy::float_cmp)]

    use super::*;

    fn songs(artist: &str, counts: &[usize]) -> Vec<SongRecord> {
        counts
            .iter()
            .enumerate()
            .map(|(i, &n)| SongRecord {
                artist: artist.to_string(),
                title: format!("{artist} {i}"),
                release_year: 2000,
                lyrics: vec!["la"; n].join(" "),
                word_count: n,
            })
            .collect()
    }

    #[test]
    fn mean_variance_and_deviation() {
        let summary = summarize(&songs("X", &[100, 200, 300]));
        assert_eq!(
            summary,
            vec![ArtistSummary {
                artist: "X".into(),
                song_count: 3,
                mean_word_count: 200.0,
                variance: Some(10000.0),
                standard_deviation: Some(100.0),
            }]
        );
    }

    #[test]
    fn single_song_has_no_dispersion() {
        let summary = summarize(&songs("Solo", &[42]));
        assert_eq!(summary[0].mean_word_count, 42.0);
        assert_eq!(summary[0].variance, None);
        assert_eq!(summary[0].standard_deviation, None);
    }

    #[test]
    fn ties_round_to_even() {
        // mean 1.25, variance 0.25, deviation 0.5
        let summary = summarize(&songs("T", &[1, 1, 1, 2]));
        assert_eq!(summary[0].mean_word_count, 1.2);
        assert_eq!(summary[0].variance, Some(0.2));
        assert_eq!(summary[0].standard_deviation, Some(0.5));
        assert_eq!(round1(1.75), 1.8);
    }

    #[test]
    fn artists_in_first_seen_order() {
        let mut records = songs("B", &[10, 20]);
        records.extend(songs("A", &[5]));
        records.extend(songs("B", &[30]));

        let summary = summarize(&records);
        let artists: Vec<_> = summary.iter().map(|s| s.artist.as_str()).collect();
        assert_eq!(artists, vec!["B", "A"]);
        assert_eq!(summary[0].song_count, 3);
        assert_eq!(summary[0].mean_word_count, 20.0);
        assert_eq!(summary[0].variance, Some(100.0));
    }

    #[test]
    fn summarize_is_repeatable() {
        let records = songs("X", &[3, 7, 8, 13]);
        assert_eq!(summarize(&records), summarize(&records));
    }

    #[test]
    fn empty_input_has_no_summaries() {
        assert!(summarize(&Vec::<SongRecord>::new()).is_empty());
    }
}
