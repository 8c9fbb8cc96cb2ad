//! Document diagnostics.
//!
//! Everything the exported artifact cannot report once distributed is found
//! here, before export.

use std::collections::HashSet;

use crate::models::{Block, Chapter, Diagnostic, DiagnosticSeverity, Document};
use crate::props::{CountdownProps, QuizProps, RatingProps};
use crate::registry::Variant;
use crate::schema::check_props;

fn diag(
    code: &str,
    severity: DiagnosticSeverity,
    message: String,
    chapter: &Chapter,
    block: Option<&Block>,
) -> Diagnostic {
    Diagnostic {
        code: code.to_string(),
        message,
        severity,
        chapter: Some(chapter.id.clone()),
        block: block.map(|b| b.id.clone()),
    }
}

fn media_is_empty(variant: Variant, block: &Block) -> bool {
    variant.is_media() && block.content.trim().is_empty()
}

impl Document {
    /// Collect diagnostics in document order
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        let mut out = Vec::new();

        if self.chapters.is_empty() {
            out.push(Diagnostic {
                code: "document.no-chapters".to_string(),
                message: "Document has no chapters; the artifact will be an empty shell".to_string(),
                severity: DiagnosticSeverity::Warning,
                chapter: None,
                block: None,
            });
        }

        let mut seen = HashSet::new();
        for chapter in &self.chapters {
            for block in &chapter.blocks {
                if !seen.insert(&block.id) {
                    out.push(diag(
                        "block.duplicate-id",
                        DiagnosticSeverity::Error,
                        format!("Block id `{}` is used more than once", block.id),
                        chapter,
                        Some(block),
                    ));
                }

                let Some(variant) = block.kind() else {
                    out.push(diag(
                        "variant.unknown",
                        DiagnosticSeverity::Error,
                        format!("Unknown block variant `{}`", block.variant),
                        chapter,
                        Some(block),
                    ));
                    continue;
                };

                if let Err(err) = check_props(variant, &block.props) {
                    out.push(diag(
                        "props.mismatch",
                        DiagnosticSeverity::Error,
                        err.to_string(),
                        chapter,
                        Some(block),
                    ));
                }

                if media_is_empty(variant, block) {
                    out.push(diag(
                        "media.empty",
                        DiagnosticSeverity::Info,
                        format!("`{}` block has no source; it renders as a placeholder", variant.tag()),
                        chapter,
                        Some(block),
                    ));
                }

                match variant {
                    Variant::Quiz => {
                        let quiz: QuizProps = block.props_as().unwrap_or_default();
                        if quiz.correct_index().is_none() {
                            out.push(diag(
                                "quiz.no-correct",
                                DiagnosticSeverity::Warning,
                                "Quiz has no option marked correct".to_string(),
                                chapter,
                                Some(block),
                            ));
                        }
                    }
                    Variant::Countdown => {
                        let countdown: CountdownProps = block.props_as().unwrap_or_default();
                        if countdown.target().is_none() {
                            out.push(diag(
                                "countdown.invalid-date",
                                DiagnosticSeverity::Warning,
                                format!(
                                    "Countdown target `{}` is not a date; it renders as \"?\"",
                                    countdown.target_date
                                ),
                                chapter,
                                Some(block),
                            ));
                        }
                    }
                    Variant::Rating => {
                        let rating: RatingProps = block.props_as().unwrap_or_default();
                        if rating.stars() != rating.max {
                            out.push(diag(
                                "rating.max-clamped",
                                DiagnosticSeverity::Warning,
                                format!(
                                    "Rating max {} is shown as {} stars",
                                    rating.max,
                                    rating.stars()
                                ),
                                chapter,
                                Some(block),
                            ));
                        }
                    }
                    _ => {}
                }
            }
        }
        out
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics()
            .iter()
            .any(|d| d.severity == DiagnosticSeverity::Error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::create_block;

    fn codes(doc: &Document) -> Vec<String> {
        doc.diagnostics().into_iter().map(|d| d.code).collect()
    }

    #[test]
    fn test_empty_document_warns() {
        let doc = Document::new("Empty");
        assert_eq!(codes(&doc), vec!["document.no-chapters"]);
        assert!(!doc.has_errors());
    }

    #[test]
    fn test_unknown_variant_and_duplicate_id() {
        let mut doc = Document::new("T");
        let ch = doc.add_chapter(None);
        let block = create_block("paragraph").unwrap();
        let mut twin = block.clone();
        twin.variant = "hologram".into();
        let chapter = doc.chapter_mut(&ch).unwrap();
        chapter.blocks.push(block);
        chapter.blocks.push(twin);

        assert_eq!(codes(&doc), vec!["block.duplicate-id", "variant.unknown"]);
        assert!(doc.has_errors());
    }

    #[test]
    fn test_default_widgets_report_soft_findings() {
        let mut doc = Document::new("T");
        let ch = doc.add_chapter(None);
        for v in ["image", "countdown", "quiz"] {
            doc.append_block(&ch, create_block(v).unwrap()).unwrap();
        }
        assert_eq!(codes(&doc), vec!["media.empty", "countdown.invalid-date"]);
        assert!(!doc.has_errors());
    }

    #[test]
    fn test_rating_star_cap_warns() {
        let mut doc = Document::new("T");
        let ch = doc.add_chapter(None);
        for max in [0, 5, 12] {
            let mut block = create_block("rating").unwrap();
            block.props.insert("max".into(), serde_json::json!(max));
            doc.append_block(&ch, block).unwrap();
        }
        let diags = doc.diagnostics();
        let messages: Vec<&str> = diags
            .iter()
            .filter(|d| d.code == "rating.max-clamped")
            .map(|d| d.message.as_str())
            .collect();
        assert_eq!(
            messages,
            vec!["Rating max 0 is shown as 5 stars", "Rating max 12 is shown as 10 stars"]
        );
        assert!(!doc.has_errors());
    }

    #[test]
    fn test_fractional_count_is_props_mismatch() {
        let mut doc = Document::new("T");
        let ch = doc.add_chapter(None);
        let mut block = create_block("quiz").unwrap();
        block.props.insert("points".into(), serde_json::json!(1.5));
        doc.chapter_mut(&ch).unwrap().blocks.push(block);
        assert_eq!(codes(&doc), vec!["props.mismatch"]);
        assert!(doc.has_errors());
    }

    #[test]
    fn test_props_mismatch_is_error() {
        let mut doc = Document::new("T");
        let ch = doc.add_chapter(None);
        let mut block = create_block("poll").unwrap();
        block.props.remove("votes");
        doc.chapter_mut(&ch).unwrap().blocks.push(block);
        let diags = doc.diagnostics();
        assert_eq!(diags[0].code, "props.mismatch");
        assert!(diags[0].message.contains("votes"));
    }
}
