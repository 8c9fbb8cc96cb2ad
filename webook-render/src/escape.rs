//! Context-specific escaping and the markup writer.
//!
//! Author text reaches the artifact through exactly two functions:
//! [`escape_text`] for element content and [`escape_attr`] for attribute
//! values (which also covers `srcdoc` payloads). [`Html`] is the only way to
//! build markup, and its raw-insertion method accepts `&'static str` only, so
//! a runtime string cannot be written unescaped.

use std::fmt::{self, Display};

/// Escape for an element text position: `&`, `<`, `>`
pub fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape for a double-quoted attribute value: `&`, `<`, `>`, `"`, `'`
pub fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub(crate) mod sealed {
    pub trait Sealed {}
}

/// Values whose `Display` output never contains markup-significant
/// characters and can be written without escaping.
pub trait SafeValue: Display + sealed::Sealed {}

macro_rules! safe_numbers {
    ($($t:ty),*) => {
        $(
            impl sealed::Sealed for $t {}
            impl SafeValue for $t {}
        )*
    };
}

safe_numbers!(u8, u16, u32, u64, usize, i32, i64);

/// Finished markup. Only produced by [`Html`] or from static text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Markup(String);

impl Markup {
    pub fn from_static(s: &'static str) -> Self {
        Markup(s.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Markup writer
#[derive(Debug, Default)]
pub struct Html {
    buf: String,
}

impl Html {
    pub fn new() -> Self {
        Self::default()
    }

    /// Static markup: tags, class names, fixed glyphs
    pub fn raw(&mut self, s: &'static str) -> &mut Self {
        self.buf.push_str(s);
        self
    }

    /// Author or label text in an element text position
    pub fn text(&mut self, s: &str) -> &mut Self {
        self.buf.push_str(&escape_text(s));
        self
    }

    /// ` name="value"` with the value attribute-escaped
    pub fn attr(&mut self, name: &'static str, value: &str) -> &mut Self {
        self.buf.push(' ');
        self.buf.push_str(name);
        self.buf.push_str("=\"");
        self.buf.push_str(&escape_attr(value));
        self.buf.push('"');
        self
    }

    /// ` name="value"` for a value that needs no escaping
    pub fn attr_value<T: SafeValue>(&mut self, name: &'static str, value: T) -> &mut Self {
        self.buf.push(' ');
        self.buf.push_str(name);
        self.buf.push_str("=\"");
        self.buf.push_str(&value.to_string());
        self.buf.push('"');
        self
    }

    /// A value that needs no escaping, in any position
    pub fn value<T: SafeValue>(&mut self, value: T) -> &mut Self {
        self.buf.push_str(&value.to_string());
        self
    }

    pub fn markup(&mut self, m: &Markup) -> &mut Self {
        self.buf.push_str(&m.0);
        self
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn finish(self) -> Markup {
        Markup(self.buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contexts_differ() {
        let s = r#"<a href="x">'&'</a>"#;
        assert_eq!(escape_text(s), r#"&lt;a href="x"&gt;'&amp;'&lt;/a&gt;"#);
        assert_eq!(
            escape_attr(s),
            "&lt;a href=&quot;x&quot;&gt;&#39;&amp;&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_writer() {
        let mut out = Html::new();
        out.raw("<div")
            .attr("title", "\"hi\"")
            .attr_value("data-n", 3u32)
            .raw(">")
            .text("a < b")
            .raw("</div>");
        insta::assert_snapshot!(
            out.finish().as_str(),
            @r#"<div title="&quot;hi&quot;" data-n="3">a &lt; b</div>"#
        );
    }

    #[test]
    fn test_values_are_written_verbatim() {
        let mut out = Html::new();
        out.value(-12i64).raw("/").value(usize::MAX).attr_value("data-x", 0u8);
        assert_eq!(
            out.finish().as_str(),
            format!("-12/{} data-x=\"0\"", usize::MAX)
        );
    }
}
