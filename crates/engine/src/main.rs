//! Wardrobe preview - prints the commands an apply pass would issue for a
//! character document.
//!
//! ```text
//! wardrobe-preview path/to/character.json
//! ```
//!
//! Commands go to stdout as one JSON object per line; logs go to stderr.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wardrobe_domain::PlayerId;
use wardrobe_engine::infrastructure::{
    app_settings::AppSettings, character_file::load_character_file,
    memory_store::InMemoryCharacterRepo, recording_player::RecordingPlayer,
};
use wardrobe_engine::use_cases::RecordSource;
use wardrobe_engine::App;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env is fine
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wardrobe_engine=debug,wardrobe_preview=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let path: PathBuf = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .context("usage: wardrobe-preview <character.json>")?;

    let settings = AppSettings::from_env()?;
    let record = load_character_file(&path)?;
    tracing::info!(path = %path.display(), sex = %record.sex(), "Loaded character");

    let player_id = PlayerId::new();
    let repo = Arc::new(InMemoryCharacterRepo::new());
    repo.insert(player_id, record);
    let player = Arc::new(RecordingPlayer::new(player_id));

    let app = App::new(&settings, repo);
    app.appearance_for(player.clone())
        .update(RecordSource::Latest)
        .await?;

    for command in player.commands() {
        println!("{}", serde_json::to_string(&command)?);
    }

    Ok(())
}
