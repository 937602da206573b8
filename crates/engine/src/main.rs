//! Point-buy Engine - Main entry point.
//!
//! Loads the saved character and prints its sheet. `pointbuy-engine save`
//! writes the loaded character back afterwards.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pointbuy_engine::infrastructure::{config::StoreConfig, http_store::HttpCharacterStore};
use pointbuy_engine::use_cases::{CharacterManager, CharacterSheetView, LoadOutcome, SaveOutcome};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from repo root so running from `crates/engine` still works.
    load_dotenv_from_repo_root();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pointbuy_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let save_requested = std::env::args().nth(1).as_deref() == Some("save");

    let config = StoreConfig::from_env();
    tracing::info!(
        base_url = %config.base_url,
        user = %config.user,
        timeout_secs = config.timeout.as_secs(),
        "Using character store"
    );
    let store = Arc::new(HttpCharacterStore::from_config(&config));
    let mut manager = CharacterManager::new(store);

    match manager.load_characters().await {
        LoadOutcome::Restored => tracing::info!("Restored saved character"),
        LoadOutcome::Absent => tracing::info!("No saved character, starting fresh"),
        LoadOutcome::Failed(reason) => {
            tracing::warn!(reason = %reason, "Store unavailable, starting fresh")
        }
    }

    let character = manager
        .current()
        .ok_or_else(|| anyhow::anyhow!("no current character after load"))?;
    print!("{}", CharacterSheetView(character));

    if save_requested {
        match manager.save_current().await {
            SaveOutcome::Saved => println!("Saved."),
            SaveOutcome::NoCurrentCharacter => println!("Nothing to save."),
            SaveOutcome::Failed(reason) => anyhow::bail!("save failed: {reason}"),
        }
    }

    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
