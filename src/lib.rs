//! Profile card generator: ASCII art on the left, GitHub stats on the right,
//! written out as a single PNG.

pub mod age;
pub mod art;
pub mod compose;
pub mod config;
pub mod document;
pub mod github;
pub mod render;
pub mod stats;
pub mod theme;

use anyhow::{Context, Result};
use chrono::NaiveDate;

use age::Age;
use config::Config;
use document::DisplayDocument;
use github::GithubClient;
use stats::Summary;

/// One full run: fetch, aggregate, compose, render and save.
///
/// The font is loaded before the repository fetch, so a missing font or a
/// failed repository request ends the run before anything is drawn or written.
pub async fn run(config: &Config, today: NaiveDate) -> Result<()> {
    // Calculate age
    let age = Age::between(config.reference_date, today)
        .with_context(|| format!("Reference date {} is in the future", config.reference_date))?;

    // GitHub API client
    let client = GithubClient::new(config)?;
    let profile = client.profile(&config.username).await;

    let art = art::load_ascii_art(&config.art_path)?;
    let font = render::load_font(&config.font_path)?;

    let repos = client.repositories(&config.username).await?;
    let summary = Summary::from_repositories(&repos);

    let text = compose::compose(&config.identity, &config.username, &age, &profile, &summary);
    let document = DisplayDocument::parse(&text);

    let image = render::render(
        &art,
        &document,
        &font,
        &config.layout,
        &config.theme.colors(),
    );
    render::save(&image, &config.output_path)
}
