mod cli;
mod driver;

use lumen_common::ConfigError;
use lumen_config::schema::LumenConfig;
use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::EnvFilter;

fn load_config(args: &cli::Args) -> Result<LumenConfig, ConfigError> {
    match &args.config {
        Some(path) => lumen_config::load_config_from(path),
        None => lumen_config::load_config(),
    }
}

fn main() {
    let args = cli::parse();

    // Config comes first so `logging.level` can pick the default filter.
    let loaded = load_config(&args);
    let config = loaded.as_ref().cloned().unwrap_or_default();

    let log_directive = args
        .log_level
        .as_deref()
        .unwrap_or(config.logging.level.directive());
    let directive: Directive = log_directive.parse().unwrap_or_else(|_| {
        eprintln!("invalid log directive '{log_directive}', using info");
        LevelFilter::INFO.into()
    });
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive))
        .init();

    tracing::info!("Lumen v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {}", path.display());
    }
    if let Err(e) = &loaded {
        tracing::warn!("Config load failed, using defaults: {e}");
    }
    tracing::info!(
        "Config loaded ({}x{}, bloom {})",
        config.window.width,
        config.window.height,
        if config.effects.bloom.enabled { "on" } else { "off" }
    );

    match driver::run(&args, &config) {
        Ok(summary) => tracing::info!(
            objects = summary.scene_objects,
            presets = summary.presets_fired,
            effects = summary.effects_applied,
            "Done, output in {}",
            args.out.display()
        ),
        Err(e) => {
            tracing::error!("Run failed: {e}");
            std::process::exit(1);
        }
    }
}
