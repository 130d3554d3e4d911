use std::path::Path;
use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use recotui::infrastructure::config::{ConfigSource, LoadedConfig};
use recotui::infrastructure::{AppConfig, CliArgs, RecommenderClient, StorageManager};
use recotui::presentation::App;

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = config.effective_log_path() {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry().with(filter).init();
    }

    Ok(())
}

fn load_config() -> Result<(AppConfig, ConfigSource)> {
    let args = CliArgs::parse();

    let loaded = match args.config.as_deref() {
        Some(path) => {
            let dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
            StorageManager::with_dir(dir).load_config(Some(path))?
        }
        None => StorageManager::new()?.load_config(None)?,
    };
    let LoadedConfig { mut config, source } = loaded;
    config.merge_with_args(args);

    Ok((config, source))
}

fn create_app() -> Result<(App, Option<String>)> {
    let (config, source) = load_config()?;

    init_logging(&config)?;
    source.log();

    info!(
        version = recotui::VERSION,
        api_url = %config.api_url,
        "Starting recotui"
    );

    let client = RecommenderClient::with_base_url(&config.api_url, config.request_timeout())?;
    let app = App::new(Arc::new(client), &config);

    Ok((app, config.initial_user.clone()))
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let _ = dotenvy::dotenv();

    let (app, initial_user) = create_app()?;

    let mut terminal = ratatui::init();

    let result = app.run(&mut terminal, initial_user).await;

    ratatui::restore();

    result
}
