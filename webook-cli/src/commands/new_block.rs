//! Append a default block to the configured document.

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;
use webook_core::{create_block, Document};

fn save(document: &Document, path: &Path) -> Result<()> {
    let is_yaml = matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yml") | Some("yaml")
    );
    let text = if is_yaml {
        serde_yaml::to_string(document)?
    } else {
        document.to_json_pretty()?
    };
    fs::write(path, text).with_context(|| format!("Failed to write {:?}", path))
}

pub fn new_block(
    config_path: &Path,
    variant: &str,
    chapter: Option<usize>,
    print: bool,
) -> Result<()> {
    let block = create_block(variant)?;
    if print {
        println!("{}", serde_json::to_string_pretty(&block)?);
        return Ok(());
    }

    let (config, mut document) = super::load(config_path)?;
    let index = match chapter {
        Some(0) => bail!("chapter numbers start at 1"),
        Some(n) => n - 1,
        None => document.chapters.len().saturating_sub(1),
    };
    let Some(target) = document.chapters.get(index).map(|c| c.id.clone()) else {
        bail!(
            "document has {} chapter(s), cannot add to chapter {}",
            document.chapters.len(),
            index + 1
        );
    };

    let id = block.id.clone();
    document.append_block(&target, block)?;
    save(&document, &config.document_path())?;

    tracing::debug!("appended {} block {}", variant, id);
    println!("✓ Added {} block {} to chapter {}", variant, id, index + 1);
    Ok(())
}
