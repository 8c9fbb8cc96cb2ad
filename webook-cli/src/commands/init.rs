//! Init command implementation.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use webook_core::{create_block, Document};

const DEFAULT_CONFIG: &str = include_str!("../../../webook.yml.example");

/// Initialize a new webook project
pub fn init_project(path: Option<&Path>) -> Result<()> {
    let root = path.unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(root).with_context(|| format!("Failed to create {:?}", root))?;

    write_config(root)?;
    write_starter(root)?;

    println!("✓ webook initialized in {:?}", root);
    println!("  - Edit lesson.json (or point webook.yml at your own document)");
    println!("  - Run `webook build` to produce the HTML artifact");
    Ok(())
}

fn write_config(root: &Path) -> Result<()> {
    let config_path = root.join("webook.yml");
    if config_path.exists() {
        println!("webook.yml already exists at {:?}", config_path);
        return Ok(());
    }

    fs::write(&config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {:?}", config_path))?;
    println!("Created {:?}", config_path);
    Ok(())
}

fn write_starter(root: &Path) -> Result<()> {
    let path = root.join("lesson.json");
    if path.exists() {
        return Ok(());
    }
    let json = starter_document()?
        .to_json_pretty()
        .context("Failed to serialize starter document")?;
    fs::write(&path, json).with_context(|| format!("Failed to write {:?}", path))?;
    println!("Created {:?}", path);
    Ok(())
}

fn starter_document() -> Result<Document> {
    let mut doc = Document::new("My first lesson");
    doc.metadata.description = "A short interactive lesson".to_string();
    doc.metadata.cover_emoji = "📘".to_string();

    let welcome = doc.add_chapter(Some("Welcome"));
    let mut heading = create_block("h1")?;
    heading.content = "Welcome".to_string();
    let mut intro = create_block("paragraph")?;
    intro.content =
        "Each chapter is a list of blocks. Edit lesson.json and rebuild to see changes.".to_string();
    let mut tip = create_block("callout")?;
    tip.content = "Quizzes, polls and flashcards work offline in the exported file.".to_string();
    for block in [heading, intro, tip, create_block("quiz")?] {
        doc.append_block(&welcome, block)?;
    }

    let practice = doc.add_chapter(Some("Practice"));
    doc.set_chapter_icon(&practice, "✍️")?;
    for variant in ["checklist", "flashcards", "matching"] {
        doc.append_block(&practice, create_block(variant)?)?;
    }
    Ok(doc)
}
