//! Build command implementation.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use webook_core::DiagnosticSeverity;
use webook_render::{compile, CompileOptions};

/// Compile the configured document and write the artifact
pub fn build_artifact(config_path: &Path, output: Option<&Path>, seed: Option<u64>) -> Result<()> {
    tracing::info!("Loading config from {:?}", config_path);
    let (config, document) = super::load(config_path)?;

    for diag in document
        .diagnostics()
        .iter()
        .filter(|d| d.severity != DiagnosticSeverity::Info)
    {
        tracing::warn!("{} {}: {}", diag.severity.as_str(), diag.code, diag.message);
    }

    let mut options = CompileOptions::from(&config.export);
    if let Some(seed) = seed {
        options.seed = seed;
    }
    let html = compile(&document, &options).context("Failed to compile document")?;

    let output_path = match output {
        Some(path) => path.to_path_buf(),
        None => config.output_path(&document.metadata.title),
    };
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).with_context(|| format!("Failed to create {:?}", parent))?;
    }
    fs::write(&output_path, &html)
        .with_context(|| format!("Failed to write {:?}", output_path))?;

    println!(
        "✓ Wrote {:?} ({} chapters, {} blocks, {} bytes)",
        output_path,
        document.chapters.len(),
        document.block_count(),
        html.len()
    );
    Ok(())
}
