//! Plain-text validation summary for reports and logs.

use std::fmt::Write;

use cepho_core::models::{ReviewSeverity, ValidationResult};

/// Render a deterministic, human-readable summary of a validation result.
pub fn render_summary(result: &ValidationResult) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = write_summary(&mut out, result);
    out
}

fn write_summary(out: &mut String, result: &ValidationResult) -> std::fmt::Result {
    writeln!(out, "Insight {}", result.insight_id)?;
    writeln!(
        out,
        "Confidence: {} | Status: {}",
        result.confidence.label(),
        result.verification.label()
    )?;

    if result.challenges.is_empty() {
        writeln!(out, "Challenges: none")?;
    } else {
        writeln!(out, "Challenges:")?;
        for (i, challenge) in result.challenges.iter().enumerate() {
            writeln!(
                out,
                "  {}. [{}] {}",
                i + 1,
                challenge.aspect.label(),
                challenge.question
            )?;
        }
    }

    if result.citations.is_empty() {
        writeln!(out, "Sources: none")?;
    } else {
        writeln!(out, "Sources:")?;
        for citation in &result.citations {
            writeln!(out, "  [{}] {}", citation.number, citation.footnote)?;
        }
    }

    if !result.skipped.is_empty() {
        let ids: Vec<&str> = result
            .skipped
            .iter()
            .map(|s| s.reference_id.as_str())
            .collect();
        writeln!(
            out,
            "Skipped references: {} ({})",
            result.skipped.len(),
            ids.join(", ")
        )?;
    }

    if let Some(flag) = &result.review_flag {
        let severity = match flag.severity {
            ReviewSeverity::Low => "low",
            ReviewSeverity::Medium => "medium",
            ReviewSeverity::High => "high",
        };
        writeln!(out, "Review: {} ({})", severity, flag.reasons.join("; "))?;
    }

    Ok(())
}
