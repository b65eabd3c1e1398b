//! Ryuutama Engine - Main entry point.
//!
//! Usage: `ryuutama-engine [ACTOR_JSON]`. Prints the prepared actor and its
//! roll data as JSON on stdout; logs go to stderr.

use std::path::PathBuf;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ryuutama_domain::{GameSystem, RyuutamaSystem};
use ryuutama_engine::{load_actor, load_tables, prepare_sheet, EngineConfig};

fn main() -> anyhow::Result<()> {
    // Load environment from repo root so `cargo run` from any crate dir picks up `.env`.
    load_dotenv_from_repo_root();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ryuutama_engine=info,ryuutama_domain=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = EngineConfig::from_env();

    let actor_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| config.actor_path.clone())
        .context("No actor document given: pass a path or set RYUUTAMA_ACTOR_PATH")?;

    let system = match &config.tables_path {
        Some(path) => RyuutamaSystem::with_tables(load_tables(path)?),
        None => RyuutamaSystem::new(),
    };
    tracing::info!(
        system = system.display_name(),
        macro_shorthand = config.settings.macro_shorthand,
        "Preparing actor"
    );

    let actor = load_actor(&actor_path)?;
    let sheet = prepare_sheet(&system, &config.settings, actor)?;

    let output =
        serde_json::to_string_pretty(&sheet).context("Failed to serialize prepared sheet")?;
    println!("{}", output);
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
