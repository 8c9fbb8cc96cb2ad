//! Style layer: a closed set of design tokens per theme.
//!
//! The stylesheet itself is static (`assets/artifact.css`); only the token
//! block in front of it varies, and every token value is either a literal
//! from this module or a validated hex color.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

use crate::escape::{sealed, Html, Markup, SafeValue};
use webook_core::{Font, Metadata, Theme};

const STYLESHEET: &str = include_str!("../assets/artifact.css");
const DEFAULT_ACCENT: &str = "#1E6FDB";

static HEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").unwrap());

/// A `#rgb` or `#rrggbb` color
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HexColor(String);

impl HexColor {
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        HEX.is_match(raw).then(|| HexColor(raw.to_string()))
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl sealed::Sealed for &HexColor {}
impl SafeValue for &HexColor {}

/// Color tokens of one theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeTokens {
    pub bg: &'static str,
    pub bg1: &'static str,
    pub bg2: &'static str,
    pub bg3: &'static str,
    pub ink: &'static str,
    pub ink2: &'static str,
    pub ink3: &'static str,
    pub line: &'static str,
    pub glass: &'static str,
}

impl ThemeTokens {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => ThemeTokens {
                bg: "#060E1C",
                bg1: "#0A1628",
                bg2: "#0F1F35",
                bg3: "#162844",
                ink: "#F0F4FF",
                ink2: "#9BB0CC",
                ink3: "#4D6A8A",
                line: "rgba(255,255,255,0.08)",
                glass: "rgba(6,14,28,0.85)",
            },
            Theme::Light => ThemeTokens {
                bg: "#F7F9FC",
                bg1: "#FFFFFF",
                bg2: "#EEF2F8",
                bg3: "#E1E8F2",
                ink: "#0B1B33",
                ink2: "#3A4E6A",
                ink3: "#7D8FA8",
                line: "rgba(11,27,51,0.10)",
                glass: "rgba(255,255,255,0.85)",
            },
            Theme::Sepia => ThemeTokens {
                bg: "#F4ECD8",
                bg1: "#EFE4CB",
                bg2: "#E8DABB",
                bg3: "#DCCBA5",
                ink: "#3B2F1E",
                ink2: "#5C4A32",
                ink3: "#8C7756",
                line: "rgba(59,47,30,0.14)",
                glass: "rgba(244,236,216,0.88)",
            },
        }
    }
}

/// `(body, display, mono)` system font stacks; no web fonts are loaded
pub fn font_stacks(font: Font) -> (&'static str, &'static str, &'static str) {
    const SANS: &str = "system-ui,-apple-system,'Segoe UI',Roboto,'Helvetica Neue',Arial,sans-serif";
    const SERIF: &str = "Georgia,'Iowan Old Style','Times New Roman',serif";
    const MONO: &str = "ui-monospace,'SFMono-Regular',Menlo,Consolas,monospace";
    match font {
        Font::Default => (SANS, SANS, MONO),
        Font::Serif => (SERIF, SERIF, MONO),
        Font::Mono => (MONO, SANS, MONO),
    }
}

/// Accent from metadata, falling back to the default for invalid input
pub fn accent(meta: &Metadata) -> HexColor {
    HexColor::parse(&meta.accent_color).unwrap_or_else(|| HexColor(DEFAULT_ACCENT.to_string()))
}

fn token(out: &mut Html, name: &'static str, value: &'static str) {
    out.raw(name).raw(":").raw(value).raw(";");
}

/// Token block followed by the static stylesheet
pub fn stylesheet(meta: &Metadata) -> Markup {
    let t = ThemeTokens::for_theme(meta.theme);
    let (body, display, mono) = font_stacks(meta.font);
    let accent = accent(meta);

    let mut out = Html::new();
    out.raw(":root{");
    token(&mut out, "--bg", t.bg);
    token(&mut out, "--bg1", t.bg1);
    token(&mut out, "--bg2", t.bg2);
    token(&mut out, "--bg3", t.bg3);
    token(&mut out, "--ink", t.ink);
    token(&mut out, "--ink2", t.ink2);
    token(&mut out, "--ink3", t.ink3);
    token(&mut out, "--line", t.line);
    token(&mut out, "--glass", t.glass);
    out.raw("--accent:").value(&accent).raw(";");
    token(&mut out, "--font-body", body);
    token(&mut out, "--font-display", display);
    token(&mut out, "--font-mono", mono);
    out.raw("}\n").raw(STYLESHEET);
    out.finish()
}

/// Closed palette for author-chosen widget colors
pub fn palette(name: &str) -> &'static str {
    match name {
        "amber" | "yellow" => "amber",
        "green" | "emerald" => "green",
        "red" => "red",
        "purple" | "violet" => "purple",
        "orange" => "orange",
        "pink" => "pink",
        _ => "blue",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_validation() {
        assert!(HexColor::parse("#1e6fdb").is_some());
        assert!(HexColor::parse("#abc").is_some());
        assert!(HexColor::parse("red").is_none());
        assert!(HexColor::parse("#12345g").is_none());
        assert!(HexColor::parse("#000;}body{x:y").is_none());
    }

    #[test]
    fn test_invalid_accent_falls_back() {
        let meta = Metadata {
            accent_color: "</style><script>".into(),
            ..Default::default()
        };
        let css = stylesheet(&meta);
        assert!(css.as_str().contains("--accent:#1E6FDB;"));
        assert!(!css.as_str().contains("</style"));
    }

    #[test]
    fn test_theme_tokens_differ() {
        let dark = ThemeTokens::for_theme(Theme::Dark);
        let sepia = ThemeTokens::for_theme(Theme::Sepia);
        assert_ne!(dark.bg, sepia.bg);
    }

    #[test]
    fn test_palette_is_closed() {
        assert_eq!(palette("amber"), "amber");
        assert_eq!(palette("\" onmouseover=x"), "blue");
    }
}
