//! # webook-render
//!
//! The webook compiler: turns a [`Document`](webook_core::Document) into one
//! standalone HTML artifact with its stylesheet and widget runtime inlined.
//!
//! Author text reaches the output only through the [`escape`] module, and
//! every registered block variant has a template (see [`blocks`]).

pub mod blocks;
pub mod compile;
pub mod escape;
pub mod labels;
pub mod theme;
pub mod url;

pub use compile::{compile, outline, CompileError, CompileOptions};
pub use escape::{escape_attr, escape_text, Html, Markup};
pub use labels::Labels;
