//! Print lyric word count statistics for a list of artists.
//!
//! Usage: cargo run --bin dump_stats -- "Blur,Twenty one pilots" [--json]

use anyhow::{bail, Context};
use std::sync::Arc;

use lyricount::config::Config;
use lyricount::lyrics::LyricsOvhClient;
use lyricount::musicbrainz::MusicBrainzClient;
use lyricount::services::{summarize, Aggregator};
use lyricount::types::parse_artist_list;
use lyricount::ui::format_stat;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let json = args.iter().any(|a| a == "--json");
    let input = args
        .iter()
        .filter(|a| !a.starts_with("--"))
        .cloned()
        .collect::<Vec<_>>()
        .join(",");

    let artists = parse_artist_list(&input);
    if artists.is_empty() {
        bail!("usage: dump_stats \"Artist one,Artist two\" [--json]");
    }

    let config = Config::load().context("Failed to load config")?;
    lyricount::logging::init_stderr()?;

    let aggregator = Aggregator::new(
        Arc::new(MusicBrainzClient::new(&config)?),
        Arc::new(LyricsOvhClient::new(&config)?),
    );
    let outcome = aggregator.run(&artists).await;
    let summaries = summarize(&outcome.songs);

    if json {
        let report = serde_json::json!({
            "summaries": summaries,
            "songs": outcome.songs.sorted_by_release_year(),
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("=== Lyric count by artist ({}) ===", summaries.len());
    println!("{:<30} {:>10} {:>12} {:>10}", "Artist", "Mean", "Variance", "Std dev");
    for s in &summaries {
        println!(
            "{:<30} {:>10.1} {:>12} {:>10}",
            s.artist,
            s.mean_word_count,
            format_stat(s.variance),
            format_stat(s.standard_deviation),
        );
    }

    println!("\n=== Songs ({}) ===", outcome.songs.len());
    for song in outcome.songs.sorted_by_release_year() {
        println!(
            "  {} | {:<30} | {:<40} | {:>5} words",
            song.release_year, song.artist, song.title, song.word_count
        );
    }

    println!("\n{}", outcome.report);
    Ok(())
}
