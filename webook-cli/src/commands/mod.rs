//! CLI command implementations.

pub mod blocks;
pub mod build;
pub mod init;
pub mod new_block;
pub mod outline;
pub mod verify;

pub use blocks::list_blocks;
pub use build::build_artifact;
pub use init::init_project;
pub use new_block::new_block;
pub use outline::print_outline;
pub use verify::verify_document;

use anyhow::{Context, Result};
use std::path::Path;
use webook_core::{Config, Document};

/// Load the configuration and the document it points at
pub(crate) fn load(config_path: &Path) -> Result<(Config, Document)> {
    let config = Config::from_file(config_path)
        .with_context(|| format!("Failed to load configuration from {:?}", config_path))?;
    let document_path = config.document_path();
    let document = Document::from_file(&document_path)
        .with_context(|| format!("Failed to load document {:?}", document_path))?;
    Ok((config, document))
}
