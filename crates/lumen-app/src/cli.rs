use std::path::PathBuf;

use clap::Parser;

/// Lumen: builds the tutorial scene and bloom pass without opening a window.
#[derive(Parser, Debug, Default)]
#[command(name = "lumen", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter directive override (e.g. "lumen=debug").
    #[arg(long)]
    pub log_level: Option<String>,

    /// Bloom document to load instead of `effects.bloom.document`.
    #[arg(long)]
    pub bloom: Option<PathBuf>,

    /// Normalize the bloom kernel after loading it.
    #[arg(long)]
    pub normalize: bool,

    /// Lighting preset key to press, in order. Repeatable.
    #[arg(long = "preset", value_name = "KEY")]
    pub presets: Vec<String>,

    /// Target width in pixels (defaults to `window.width`).
    #[arg(long)]
    pub width: Option<u32>,

    /// Target height in pixels (defaults to `window.height`).
    #[arg(long)]
    pub height: Option<u32>,

    /// Output directory for the scene, manifest and bloom documents.
    #[arg(long, default_value = ".")]
    pub out: PathBuf,
}

pub fn parse() -> Args {
    Args::parse()
}
