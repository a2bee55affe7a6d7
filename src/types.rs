//! Core data types shared by the lookup, lyrics and statistics stages.

use serde::{Deserialize, Serialize};

/// One release entry as reported by the metadata search service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Release {
    /// Release title.
    pub title: String,
    /// Release date (`YYYY-MM-DD`, `YYYY-MM` or `YYYY`), if known.
    #[serde(default)]
    pub date: Option<String>,
}

impl Release {
    /// Create a release entry.
    pub fn new(title: impl Into<String>, date: Option<&str>) -> Self {
        Self {
            title: title.into(),
            date: date.map(String::from),
        }
    }
}

/// A song found for an artist, before its lyrics have been fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongCandidate {
    /// Song title as returned by the lookup service.
    pub title: String,
    /// Release year, 2000 when unknown.
    pub release_year: i32,
}

/// One song with cleaned lyrics and its word count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SongRecord {
    /// Artist name exactly as the user typed it.
    pub artist: String,
    /// Song title.
    pub title: String,
    /// Release year.
    pub release_year: i32,
    /// Lowercased, punctuation-free lyrics joined by single spaces.
    #[serde(skip)]
    pub lyrics: String,
    /// Number of words in `lyrics`; always at least 1.
    pub word_count: usize,
}

/// Word count statistics for one artist.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArtistSummary {
    /// Artist name as typed.
    pub artist: String,
    /// Number of songs the statistics were computed over.
    pub song_count: usize,
    /// Mean word count, one decimal place.
    pub mean_word_count: f64,
    /// Sample variance, one decimal place; `None` for a single song.
    pub variance: Option<f64>,
    /// Sample standard deviation, one decimal place; `None` for a single song.
    pub standard_deviation: Option<f64>,
}

/// Ordered collection of songs produced by one aggregation run.
///
/// Records keep insertion order: artist-major, then lookup response order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SongCollection {
    records: Vec<SongRecord>,
}

impl SongCollection {
    /// Create an empty collection.
    pub const fn new() -> Self {
        Self { records: Vec::new() }
    }

    /// All records in insertion order.
    pub fn records(&self) -> &[SongRecord] {
        &self.records
    }

    /// Number of records.
    pub const fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the collection holds no records.
    pub const fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over records in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, SongRecord> {
        self.records.iter()
    }

    /// Distinct artists in first-seen order.
    pub fn artists(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for record in &self.records {
            if !seen.contains(&record.artist.as_str()) {
                seen.push(&record.artist);
            }
        }
        seen
    }

    /// Records sorted by release year, ties kept in insertion order.
    pub fn sorted_by_release_year(&self) -> Vec<&SongRecord> {
        let mut sorted: Vec<&SongRecord> = self.records.iter().collect();
        sorted.sort_by_key(|r| r.release_year);
        sorted
    }

    pub(crate) fn push(&mut self, record: SongRecord) {
        self.records.push(record);
    }

    pub(crate) fn retain(&mut self, keep: impl FnMut(&SongRecord) -> bool) {
        self.records.retain(keep);
    }

    pub(crate) fn records_mut(&mut self) -> std::slice::IterMut<'_, SongRecord> {
        self.records.iter_mut()
    }
}

impl From<Vec<SongRecord>> for SongCollection {
    fn from(records: Vec<SongRecord>) -> Self {
        Self { records }
    }
}

impl<'a> IntoIterator for &'a SongCollection {
    type Item = &'a SongRecord;
    type IntoIter = std::slice::Iter<'a, SongRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Split comma-separated user input into artist names.
///
/// Names are trimmed and empty entries dropped. Order and duplicates are kept.
pub fn parse_artist_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(String::from)
        .collect()
}
