//! Terminal UI application state and key handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::widgets::TableState;
use std::sync::Arc;
use tokio::sync::mpsc;

use crate::config::Config;
use crate::constants::async_tasks::CHANNEL_BUFFER_SIZE;
use crate::error::Result;
use crate::lyrics::LyricsOvhClient;
use crate::musicbrainz::MusicBrainzClient;
use crate::services::{summarize, Aggregator, RunOutcome, SharedAggregator};
use crate::types::{parse_artist_list, ArtistSummary, SongCollection};

/// Messages sent back from background tasks
#[derive(Debug)]
pub enum AppUpdate {
    /// An aggregation run finished for the given input
    Aggregated {
        /// Artist input exactly as submitted
        input: String,
        /// Songs and counters produced by the run
        outcome: RunOutcome,
    },
}

/// Which pane receives key presses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The artist input line
    Input,
    /// The results (summary, chart, song table)
    Results,
}

/// Terminal UI state
pub struct App {
    /// Artist input being edited
    pub input: String,
    /// Pane receiving key presses
    pub focus: Focus,
    /// Songs from the last completed run
    pub songs: SongCollection,
    /// Per-artist statistics for `songs`
    pub summaries: Vec<ArtistSummary>,
    /// Whether the song table is visible
    pub show_songs: bool,
    /// Selection in the song table
    pub song_table_state: TableState,
    /// A run is in flight
    pub is_loading: bool,
    /// Informational line under the input
    pub status_message: Option<String>,
    /// Blocking error shown until dismissed
    pub error_message: Option<String>,
    /// Input of the last completed run
    pub last_input: Option<String>,
    should_quit: bool,
    aggregator: Option<SharedAggregator>,
    async_task_tx: mpsc::Sender<AppUpdate>,
    async_task_rx: mpsc::Receiver<AppUpdate>,
}

impl App {
    /// Build the app with HTTP clients created from `config`
    pub fn new(config: &Config) -> Self {
        match build_aggregator(config) {
            Ok(aggregator) => Self::with_aggregator(Some(aggregator)),
            Err(e) => {
                tracing::error!("Failed to create service clients: {e}");
                let mut app = Self::with_aggregator(None);
                app.error_message = Some(format!("Failed to create service clients: {e}"));
                app
            }
        }
    }

    /// Build the app around an existing aggregator
    pub fn with_aggregator(aggregator: Option<SharedAggregator>) -> Self {
        let (async_task_tx, async_task_rx) = mpsc::channel(CHANNEL_BUFFER_SIZE);
        Self {
            input: String::new(),
            focus: Focus::Input,
            songs: SongCollection::new(),
            summaries: Vec::new(),
            show_songs: false,
            song_table_state: TableState::default(),
            is_loading: false,
            status_message: None,
            error_message: None,
            last_input: None,
            should_quit: false,
            aggregator,
            async_task_tx,
            async_task_rx,
        }
    }

    /// Whether the user asked to quit
    pub const fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        // Error modal swallows keys until dismissed
        if self.error_message.is_some() {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
                self.error_message = None;
            }
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = match self.focus {
                    Focus::Input => Focus::Results,
                    Focus::Results => Focus::Input,
                };
            }
            _ => match self.focus {
                Focus::Input => self.handle_input_key(key),
                Focus::Results => self.handle_results_key(key),
            },
        }
    }

    fn handle_input_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.submit(),
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Char(c) => self.input.push(c),
            _ => {}
        }
    }

    fn handle_results_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('s') | KeyCode::Enter => self.toggle_songs(),
            KeyCode::Down | KeyCode::Char('j') => self.select_song_offset(1),
            KeyCode::Up | KeyCode::Char('k') => self.select_song_offset(-1),
            KeyCode::PageDown => self.select_song_offset(10),
            KeyCode::PageUp => self.select_song_offset(-10),
            KeyCode::Home => self.select_song(0),
            KeyCode::End => self.select_song(self.songs.len().saturating_sub(1)),
            _ => {}
        }
    }

    /// Show or hide the song table
    pub fn toggle_songs(&mut self) {
        self.show_songs = !self.show_songs;
        if self.show_songs && self.song_table_state.selected().is_none() && !self.songs.is_empty() {
            self.song_table_state.select(Some(0));
        }
    }

    fn select_song(&mut self, idx: usize) {
        if self.songs.is_empty() {
            self.song_table_state.select(None);
        } else {
            self.song_table_state.select(Some(idx.min(self.songs.len() - 1)));
        }
    }

    fn select_song_offset(&mut self, delta: isize) {
        let current = self.song_table_state.selected().unwrap_or(0);
        self.select_song(current.saturating_add_signed(delta));
    }

    /// Start an aggregation run for the current input
    pub fn submit(&mut self) {
        if self.is_loading {
            self.status_message = Some("A search is already running - please wait".to_string());
            return;
        }

        let artists = parse_artist_list(&self.input);
        if artists.is_empty() {
            self.status_message = None;
            return;
        }

        let Some(aggregator) = self.aggregator.clone() else {
            self.error_message = Some("Service clients are not available".to_string());
            return;
        };

        let input = self.input.clone();
        self.is_loading = true;
        self.status_message = Some(format!(
            "Please wait - searching for song information for the artists: {input}"
        ));
        tracing::info!(artists = ?artists, "Starting aggregation");

        let tx = self.async_task_tx.clone();
        tokio::spawn(async move {
            let outcome = aggregator.run(&artists).await;
            if tx.send(AppUpdate::Aggregated { input, outcome }).await.is_err() {
                tracing::debug!("UI closed before aggregation finished");
            }
        });
    }

    /// Apply results delivered by background tasks
    pub fn handle_updates(&mut self) {
        match self.async_task_rx.try_recv() {
            Ok(AppUpdate::Aggregated { input, outcome }) => {
                self.is_loading = false;
                self.summaries = summarize(&outcome.songs);
                self.songs = outcome.songs;
                self.song_table_state.select((!self.songs.is_empty()).then_some(0));
                self.status_message = Some(if self.songs.is_empty() {
                    format!("No songs with lyrics found for: {input}")
                } else {
                    format!("Results for {input}: {}", outcome.report)
                });
                self.last_input = Some(input);
            }
            Err(mpsc::error::TryRecvError::Empty | mpsc::error::TryRecvError::Disconnected) => {}
        }
    }
}

fn build_aggregator(config: &Config) -> Result<SharedAggregator> {
    let releases = MusicBrainzClient::new(config)?;
    let lyrics = LyricsOvhClient::new(config)?;
    Ok(Aggregator::new(Arc::new(releases), Arc::new(lyrics)))
}
