//! Verify the document and emit diagnostics.

use anyhow::{bail, Result};
use chrono::Utc;
use serde::Serialize;
use std::path::Path;
use webook_core::props::CountdownProps;
use webook_core::{Diagnostic, DiagnosticSeverity, Document};
use webook_runtime::days_remaining;

#[derive(Serialize)]
struct VerificationSummary<'a> {
    chapters: usize,
    blocks: usize,
    errors: usize,
    warnings: usize,
    infos: usize,
    diagnostics: &'a [Diagnostic],
}

/// Countdowns whose target has already passed would show zero days
fn expired_countdowns(document: &Document) -> Vec<Diagnostic> {
    let now = Utc::now();
    document
        .chapters
        .iter()
        .flat_map(|chapter| chapter.blocks.iter().map(move |block| (chapter, block)))
        .filter(|(_, block)| block.variant == "countdown")
        .filter_map(|(chapter, block)| {
            let target = block.props_as::<CountdownProps>().ok()?.target()?;
            (days_remaining(target, now) == 0).then(|| Diagnostic {
                code: "countdown.expired".to_string(),
                message: format!("Countdown target {} has already passed", target.to_rfc3339()),
                severity: DiagnosticSeverity::Warning,
                chapter: Some(chapter.id.clone()),
                block: Some(block.id.clone()),
            })
        })
        .collect()
}

/// Check the configured document and print its diagnostics
pub fn verify_document(config_path: &Path, json: bool) -> Result<()> {
    let (_, document) = super::load(config_path)?;

    let mut diagnostics = document.diagnostics();
    diagnostics.extend(expired_countdowns(&document));

    let count = |severity: DiagnosticSeverity| {
        diagnostics
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    };
    let errors = count(DiagnosticSeverity::Error);
    let warnings = count(DiagnosticSeverity::Warning);
    let infos = count(DiagnosticSeverity::Info);

    let summary = VerificationSummary {
        chapters: document.chapters.len(),
        blocks: document.block_count(),
        errors,
        warnings,
        infos,
        diagnostics: &diagnostics,
    };

    if json {
        let payload = serde_json::to_string_pretty(&summary)?;
        println!("{}", payload);
    } else {
        println!(
            "Verification complete: {} chapters, {} blocks, {} errors, {} warnings, {} info",
            summary.chapters, summary.blocks, errors, warnings, infos
        );
        for diag in &diagnostics {
            let block = diag
                .block
                .as_ref()
                .map(|b| format!(" [{}]", b))
                .unwrap_or_default();
            println!(
                "- {} {}{}: {}",
                diag.severity.as_str(),
                diag.code,
                block,
                diag.message
            );
        }
    }

    if errors > 0 {
        bail!("document has {} error(s)", errors);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use webook_core::props::to_props;
    use webook_core::{create_default, Chapter};

    fn countdown(date: &str) -> Document {
        let mut block = create_default("countdown").unwrap();
        block.props = to_props(&CountdownProps {
            target_date: date.to_string(),
            label: "days".to_string(),
        });
        let mut chapter = Chapter::new("One");
        chapter.blocks.push(block);
        let mut doc = Document::new("t");
        doc.chapters.push(chapter);
        doc
    }

    #[test]
    fn test_expired_countdown_warns() {
        let found = expired_countdowns(&countdown("2001-01-01"));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].code, "countdown.expired");
        assert!(expired_countdowns(&countdown("2999-01-01")).is_empty());
        assert!(expired_countdowns(&countdown("")).is_empty());
    }
}
