//! # Processing - One Pass Over a Document
//!
//! [`process_lines`] is the engine's entry point. It walks the input once,
//! left to right, and for every line:
//!
//! 1. classifies it against all levels ([`LineClassifier`]);
//! 2. leaves it untouched if nothing matched;
//! 3. otherwise resolves the winning level's identifier, updating a
//!    [`HierarchyState`] that lives only for this call;
//! 4. rewrites it as `<item type> <markers> :<composite code> <remainder>`.
//!
//! The function is deterministic: the same lines and levels always produce the
//! same result.

use crate::classify::{LineClassifier, multi_match_warning};
use crate::code::{actual_depth, composite_code, markers};
use crate::levels::LevelConfig;
use crate::resolve::resolve_identifier;
use crate::rewrite::{remainder, rewrite_line};
use crate::state::HierarchyState;
use crate::summary::{ProcessingResult, SummaryAggregator};

/// Rewrites `lines` according to `levels`.
///
/// `levels` must be ordered by level index, starting at 1, as produced by
/// [`compile_levels`](crate::levels::compile_levels).
pub fn process_lines<S: AsRef<str>>(lines: &[S], levels: &[LevelConfig]) -> ProcessingResult {
    let classifier = LineClassifier::new(levels);
    let base_marker = levels.first().and_then(|l| l.marker);
    let mut state = HierarchyState::new(levels.len());
    let mut aggregator = SummaryAggregator::new(lines.len(), levels.len());

    for (line_index, line) in lines.iter().enumerate() {
        let line = line.as_ref();
        let class = classifier.classify(line);

        if class.is_ambiguous() {
            let warning = multi_match_warning(line_index + 1, &class.matched_levels);
            log::warn!("{warning}");
            aggregator.record_multi_match(warning);
        }

        let Some(found) = class.winner else {
            aggregator.record_unchanged(line);
            continue;
        };

        let level = found.level;
        let config = &levels[level - 1];
        resolve_identifier(&mut state, config, &found);

        let code = composite_code(&state, level);
        let marker = markers(base_marker, actual_depth(&state, level));
        let rewritten = rewrite_line(
            &config.item_type,
            &marker,
            &code,
            remainder(line, found.end()),
        );

        log::debug!("line {}: level {level} -> {code}", line_index + 1);
        aggregator.record_transformed(level, rewritten);
    }

    let result = aggregator.finish();
    log::info!(
        "processed {} lines, {} transformed, {} ambiguous",
        result.summary.total_lines,
        result.summary.transformed_lines_count,
        result.summary.multi_match_warning_count
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::levels::{CounterKind, IdentifierSpec, LevelSpec, compile_levels};
    use pretty_assertions::assert_eq;

    fn outline_levels() -> Vec<LevelConfig> {
        compile_levels(&[
            LevelSpec {
                pattern: r"(\d+)\.\s*".to_string(),
                item_type: "Chapter".to_string(),
                marker: Some("*".to_string()),
                identifier: IdentifierSpec::CaptureGroup,
            },
            LevelSpec {
                pattern: r"-\s*".to_string(),
                item_type: "Point".to_string(),
                marker: None,
                identifier: IdentifierSpec::AutoIncrement {
                    kind: CounterKind::AlphaLower,
                    start: None,
                },
            },
        ])
        .unwrap()
    }

    #[test]
    fn test_process_small_outline() {
        let lines = ["1. Intro", "- first", "text", "- second", "2. Body", "- again"];
        let result = process_lines(&lines, &outline_levels());

        assert_eq!(
            result.output_lines,
            vec![
                "Chapter * :1 Intro",
                "Point ** :1.a first",
                "text",
                "Point ** :1.b second",
                "Chapter * :2 Body",
                "Point ** :2.a again",
            ]
        );
        assert!(result.warnings.is_empty());
        assert_eq!(result.summary.total_lines, 6);
        assert_eq!(result.summary.transformed_lines_count, 5);
        assert!(result.summary.levels_with_zero_matches.is_empty());
    }

    #[test]
    fn test_deeper_level_without_ancestor() {
        let lines = ["- orphan", "- sibling"];
        let result = process_lines(&lines, &outline_levels());

        assert_eq!(result.output_lines, vec!["Point * :a orphan", "Point * :b sibling"]);
        assert_eq!(result.summary.levels_with_zero_matches, vec![1]);
    }

    #[test]
    fn test_accepts_owned_lines() {
        let lines = vec!["1. One".to_string()];
        let result = process_lines(&lines, &outline_levels());
        assert_eq!(result.output_lines, vec!["Chapter * :1 One"]);
    }

    #[test]
    fn test_no_levels_passes_lines_through() {
        let lines = ["anything", "at all"];
        let result = process_lines(&lines, &[]);
        assert_eq!(result.output_lines, lines);
        assert_eq!(result.summary.transformed_lines_count, 0);
        assert!(result.summary.levels_with_zero_matches.is_empty());
    }
}
