//! Headless run: scene, presets, bloom pass, output documents.

use std::path::PathBuf;

use lumen_common::LumenError;
use lumen_config::LumenConfig;
use lumen_renderer::bloom::{load_bloom, save_bloom};
use lumen_renderer::{Bloom, Material, PostProcessStack};
use lumen_scene::DefaultSceneLayer;
use tracing::{info, warn};

use crate::cli::Args;

/// File name of the post-processing stack document written to the output dir.
pub const STACK_DOCUMENT: &str = "post-process.json";

/// What a run produced.
#[derive(Debug)]
pub struct RunSummary {
    pub scene_objects: usize,
    pub presets_fired: usize,
    pub effects_applied: usize,
    /// Uniforms the enabled effects wrote, as a material.
    pub post_process: Material,
}

pub fn run(args: &Args, config: &LumenConfig) -> Result<RunSummary, LumenError> {
    std::fs::create_dir_all(&args.out)?;

    let mut layer = DefaultSceneLayer::new(config);
    let scene_objects = layer.on_app_load(config, &args.out)?.object_count();
    info!(
        layer = DefaultSceneLayer::NAME,
        objects = scene_objects,
        "scene ready"
    );

    let mut presets_fired = 0;
    for key in &args.presets {
        if layer.on_key(key) {
            presets_fired += 1;
        } else {
            warn!("no lighting preset bound to '{key}'");
        }
    }

    let mut bloom = load_bloom_or_default(args, config)?;
    if args.normalize || config.effects.bloom.normalize_on_load {
        bloom.kernel.normalize();
        info!(sum = bloom.kernel.sum(), "bloom kernel normalized");
    }
    // The document keeps its own flag; the config gate only affects this run.
    save_bloom(&args.out.join(bloom_file_name(args, config)), &bloom)?;
    if !(config.effects.enabled && config.effects.bloom.enabled) {
        bloom.enabled = false;
    }

    let mut stack = PostProcessStack::new();
    stack.push(Box::new(bloom));

    let target = (
        args.width.unwrap_or(config.window.width),
        args.height.unwrap_or(config.window.height),
    );
    let mut post_process = Material::new("PostProcess", Bloom::NAME);
    let effects_applied = stack.apply_enabled(&target, &mut post_process)?;
    info!(
        width = target.0,
        height = target.1,
        effects = effects_applied,
        "post-processing bound"
    );

    let stack_json = serde_json::to_string_pretty(&stack.to_json())
        .map_err(|e| LumenError::Other(format!("failed to serialize stack: {e}")))?;
    std::fs::write(args.out.join(STACK_DOCUMENT), stack_json)?;

    Ok(RunSummary {
        scene_objects,
        presets_fired,
        effects_applied,
        post_process,
    })
}

fn bloom_source(args: &Args, config: &LumenConfig) -> PathBuf {
    args.bloom
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.effects.bloom.document))
}

fn bloom_file_name(args: &Args, config: &LumenConfig) -> PathBuf {
    let source = bloom_source(args, config);
    source
        .file_name()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("bloom.json"))
}

/// Load the bloom document, or fall back to the default kernel when the file
/// does not exist. A file that exists but is invalid is an error.
fn load_bloom_or_default(args: &Args, config: &LumenConfig) -> Result<Bloom, LumenError> {
    let source = bloom_source(args, config);
    if source.exists() {
        return load_bloom(&source);
    }
    if args.bloom.is_some() {
        warn!(
            "bloom document {} not found, using default kernel",
            source.display()
        );
    }
    Ok(Bloom::new())
}

// =============================================================================
// Tests
// =============================================================================
