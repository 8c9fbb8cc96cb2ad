use anyhow::{Context, Result};
use std::path::Path;

pub fn print_outline(config_path: &Path) -> Result<()> {
    let (_, document) = super::load(config_path)?;
    let text = webook_render::outline(&document).context("Failed to outline document")?;
    println!("{}", document.metadata.title);
    print!("{}", text);
    Ok(())
}
