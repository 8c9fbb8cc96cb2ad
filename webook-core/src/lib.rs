//! # webook-core
//!
//! Core library for webook: the block schema registry, the document model
//! and its mutation contract, props validation, and project configuration.
//!
//! The compiler that turns a [`Document`] into a standalone artifact lives in
//! `webook-render`; nothing here performs rendering.

pub mod config;
pub mod document;
pub mod error;
pub mod loader;
pub mod models;
pub mod props;
pub mod registry;
pub mod schema;
pub mod slug;
pub mod verify;

pub use config::{Config, ConfigError, ExportConfig};
pub use document::{create_block, PropsUpdate};
pub use error::CoreError;
pub use loader::DocumentError;
pub use models::{Block, Chapter, Diagnostic, DiagnosticSeverity, Document, Metadata, Props};
pub use registry::{create_default, list_groups, Category, Variant, VariantInfo};
pub use slug::slugify;
pub use webook_types::{BlockId, ChapterId, Font, MoveDirection, Theme};
