//! Script bundle assembly.
//!
//! The widget modules under `assets/` are embedded at build time. An
//! artifact carries the boot core, the navigation module, the module of
//! every behavior it actually uses (in one fixed order) and the boot call.

use include_dir::{include_dir, Dir};
use std::collections::BTreeSet;
use thiserror::Error;
use tracing::debug;

static MODULES: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/assets");

const CORE: &str = "core.js";
const BOOT: &str = "boot.js";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuntimeError {
    #[error("Runtime module missing from build: {0}")]
    MissingModule(&'static str),
}

/// A client-side behavior an artifact may need
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Behavior {
    Nav,
    Quiz,
    Poll,
    Checklist,
    Flashcards,
    Matching,
    Sortable,
    Rating,
    Toggle,
    Countdown,
    Narrator,
}

impl Behavior {
    /// The `data-widget` name handlers are registered under
    pub fn name(&self) -> &'static str {
        match self {
            Behavior::Nav => "nav",
            Behavior::Quiz => "quiz",
            Behavior::Poll => "poll",
            Behavior::Checklist => "checklist",
            Behavior::Flashcards => "flashcards",
            Behavior::Matching => "matching",
            Behavior::Sortable => "sortable",
            Behavior::Rating => "rating",
            Behavior::Toggle => "toggle",
            Behavior::Countdown => "countdown",
            Behavior::Narrator => "narrator",
        }
    }

    fn module(&self) -> &'static str {
        match self {
            Behavior::Nav => "nav.js",
            Behavior::Quiz => "quiz.js",
            Behavior::Poll => "poll.js",
            Behavior::Checklist => "checklist.js",
            Behavior::Flashcards => "flashcards.js",
            Behavior::Matching => "matching.js",
            Behavior::Sortable => "sortable.js",
            Behavior::Rating => "rating.js",
            Behavior::Toggle => "toggle.js",
            Behavior::Countdown => "countdown.js",
            Behavior::Narrator => "narrator.js",
        }
    }
}

fn module_source(name: &'static str) -> Result<&'static str, RuntimeError> {
    MODULES
        .get_file(name)
        .and_then(|f| f.contents_utf8())
        .ok_or(RuntimeError::MissingModule(name))
}

/// The set of behaviors one artifact needs
#[derive(Debug, Clone, Default)]
pub struct ScriptBundle {
    behaviors: BTreeSet<Behavior>,
}

impl ScriptBundle {
    /// Navigation is always present
    pub fn new() -> Self {
        let mut behaviors = BTreeSet::new();
        behaviors.insert(Behavior::Nav);
        Self { behaviors }
    }

    pub fn require(&mut self, behavior: Behavior) {
        self.behaviors.insert(behavior);
    }

    pub fn behaviors(&self) -> impl Iterator<Item = Behavior> + '_ {
        self.behaviors.iter().copied()
    }

    /// Module sources in load order: core, behaviors, boot
    pub fn sources(&self) -> Result<Vec<&'static str>, RuntimeError> {
        let mut out = Vec::with_capacity(self.behaviors.len() + 2);
        out.push(module_source(CORE)?);
        for behavior in &self.behaviors {
            out.push(module_source(behavior.module())?);
        }
        out.push(module_source(BOOT)?);
        debug!(modules = out.len(), "assembled script bundle");
        Ok(out)
    }
}
