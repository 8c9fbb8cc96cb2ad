//! Configuration parsing and management.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    ParseError(#[from] serde_yaml::Error),
}

/// Main configuration struct matching the webook.yml schema
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Document file (JSON or YAML)
    pub document: PathBuf,

    /// Artifact path; defaults to `<slug of title>.html` beside the config
    #[serde(default)]
    pub output: Option<PathBuf>,

    #[serde(default)]
    pub export: ExportConfig,

    // Internal: path to config file (for relative path resolution)
    #[serde(skip)]
    config_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Seed for simulated poll results and shuffled widget orders
    #[serde(default)]
    pub seed: u64,

    /// Override of the UI label language (otherwise `metadata.language`)
    #[serde(default)]
    pub language: Option<String>,

    #[serde(default)]
    pub completion_message: Option<String>,
}

impl Config {
    pub fn new(document: impl Into<PathBuf>) -> Self {
        Self {
            document: document.into(),
            output: None,
            export: ExportConfig::default(),
            config_path: None,
        }
    }

    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let mut config: Config = serde_yaml::from_str(&contents)?;

        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Get the document file, resolved relative to config file
    pub fn document_path(&self) -> PathBuf {
        self.resolve_path(&self.document)
    }

    /// Get the artifact path; `title` names it when no output is configured
    pub fn output_path(&self, title: &str) -> PathBuf {
        match &self.output {
            Some(p) => self.resolve_path(p),
            None => {
                let slug = crate::slug::slugify(title);
                let stem = if slug.is_empty() { "webook".to_string() } else { slug };
                self.resolve_path(Path::new(&format!("{stem}.html")))
            }
        }
    }

    /// Resolve a path relative to the config file location
    fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else if let Some(parent) = self.config_path.as_ref().and_then(|p| p.parent()) {
            parent.join(path)
        } else {
            path.to_path_buf()
        }
    }
}
