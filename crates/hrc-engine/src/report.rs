use std::path::Path;

use crate::summary::ProcessingResult;

/// Renders the operator-facing report for a finished run.
///
/// Every line, including the last, ends with `\n`.
pub fn render_report(result: &ProcessingResult, output_path: &Path) -> String {
    let summary = &result.summary;
    let mut lines = vec![
        "✓ Processing Complete!".to_string(),
        String::new(),
        format!("Output file: {}", output_path.display()),
        format!("Total lines: {}", summary.total_lines),
        format!("Lines altered: {}", summary.transformed_lines_count),
        format!(
            "Skipped (out-of-order) lines: {}",
            summary.skipped_out_of_order_count
        ),
        format!(
            "Lines with multiple matches: {}",
            summary.multi_match_warning_count
        ),
    ];

    if !summary.levels_with_zero_matches.is_empty() {
        let levels = summary
            .levels_with_zero_matches
            .iter()
            .map(|l| l.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        lines.push(String::new());
        lines.push(format!(
            "⚠ Warning: The following levels had zero matches: {levels}"
        ));
    }

    if !result.warnings.is_empty() {
        lines.push(String::new());
        lines.push("Detailed warnings:".to_string());
        lines.extend(result.warnings.iter().map(|w| format!(" - {w}")));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
