//! Terminal story client entry point.
mod presenter;
mod story;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use runtime::clock;
use runtime::repository::keys;
use runtime::{
    ChannelCallback, EventContext, FileSaveStore, FileSettingsStore, InMemoryResources,
    Repositories, RepositoryError, RuntimeConfig, SaveSlot, Settings, SkillDefinition,
    StdRandom,
};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use presenter::ConsolePresenter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = RuntimeConfig::from_env();
    let _log_guard = setup_logging()?;

    let save_dir = config.save_dir();
    tracing::info!("Save directory: {}", save_dir.display());

    let saves = Arc::new(
        FileSaveStore::open(&save_dir)
            .await
            .context("opening save slots")?,
    );
    let settings = Settings::new(Arc::new(
        FileSettingsStore::open(save_dir.join("settings.json"))
            .await
            .context("opening settings")?,
    ));
    let repositories = Repositories::new(saves, Arc::new(demo_resources()));

    let slot = SaveSlot::new(settings.get(&keys::LAST_SLOT).await?.unwrap_or(0))?;
    match repositories.archive.select(slot).await {
        Ok(summary) => println!(
            "Resuming {} ({}s played, last saved {}).",
            summary.player_name,
            summary.play_time_secs,
            summary.updated_at.format("%Y-%m-%d %H:%M UTC")
        ),
        Err(RepositoryError::EmptySlot(_)) => {
            repositories.archive.create(slot, "Wanderer").await?;
            repositories.archive.select(slot).await?;
        }
        Err(err) => return Err(err.into()),
    }
    repositories.game_state.load(slot).await?;
    settings.set(&keys::LAST_SLOT, &Some(slot.index())).await?;

    let rng = Arc::new(StdRandom::from_config(&config));
    let (callback, port) = ChannelCallback::new(&config);
    let auto_advance = settings.get(&keys::AUTO_ADVANCE).await?;
    let text_speed = settings.get(&keys::TEXT_SPEED).await?;
    let presenter = tokio::spawn(
        ConsolePresenter::new(port, rng.clone(), auto_advance, text_speed).run(),
    );

    let mut context = EventContext::builder(Arc::new(callback), repositories.clone())
        .rng(rng)
        .location(story::start_location())
        .config(config.game_config.clone())
        .build();
    if let Some(started) = clock::to_datetime(context.timestamp()) {
        tracing::info!(location = ?context.location(), "event started at {}", started);
    }

    let outcome = story::play(&mut context).await;
    drop(context);
    presenter.await.context("presenter task")??;

    match outcome {
        Ok(()) => {
            repositories.game_state.flush().await?;
            println!("\nProgress saved to slot {}.", slot);
            Ok(())
        }
        Err(err) if err.is_cancelled() => {
            tracing::warn!("event aborted: {}", err);
            println!("\nThe event was interrupted; nothing was saved.");
            Ok(())
        }
        Err(err) => {
            tracing::error!(
                code = err.error_code(),
                severity = err.severity().as_str(),
                "event failed: {}",
                err
            );
            Err(err.into())
        }
    }
}

fn demo_resources() -> InMemoryResources {
    InMemoryResources::new()
        .with_skill(
            SkillDefinition::new("slash", "Slash", 0, 25)
                .with_description("A quick blade strike."),
        )
        .with_skill(
            SkillDefinition::new("ward", "Ward", 6, 0)
                .with_description("Raise a shield that lasts two turns."),
        )
}

/// Logs to stderr, and to `$STORY_LOG_DIR/client.log` when that is set.
///
/// The returned guard flushes the file writer on drop.
fn setup_logging() -> Result<Option<WorkerGuard>> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let stderr_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    let log_dir = std::env::var_os("STORY_LOG_DIR").map(PathBuf::from);
    let (file_layer, guard) = match &log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("creating log directory {}", dir.display()))?;
            let file_appender = tracing_appender::rolling::never(dir, "client.log");
            let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(non_blocking_file)
                .with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    if let Some(dir) = log_dir {
        tracing::info!("Log file: {}/client.log", dir.display());
    }
    Ok(guard)
}
