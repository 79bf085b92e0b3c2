use regex::Captures;

use crate::levels::LevelConfig;

/// Result of testing one line against every configured level.
#[derive(Debug)]
pub struct LineClass<'a> {
    /// 1-based indices of every matching level, ascending.
    pub matched_levels: Vec<usize>,
    /// Match of the winning (lowest-indexed) level, if any matched.
    pub winner: Option<LevelMatch<'a>>,
}

/// The match that decides how a line is rewritten.
#[derive(Debug)]
pub struct LevelMatch<'a> {
    /// 1-based level index.
    pub level: usize,
    pub captures: Captures<'a>,
}

impl LevelMatch<'_> {
    /// Text of capture group 1, empty if the group did not participate.
    pub fn group_one(&self) -> &str {
        self.captures.get(1).map_or("", |m| m.as_str())
    }

    /// Byte offset just past the whole match.
    pub fn end(&self) -> usize {
        self.captures.get(0).map_or(0, |m| m.end())
    }
}

impl LineClass<'_> {
    pub fn is_ambiguous(&self) -> bool {
        self.matched_levels.len() > 1
    }
}

/// Classifies lines against an ordered set of levels.
pub struct LineClassifier<'l> {
    levels: &'l [LevelConfig],
}

impl<'l> LineClassifier<'l> {
    pub fn new(levels: &'l [LevelConfig]) -> Self {
        Self { levels }
    }

    /// Tests `line` against all levels in ascending order.
    ///
    /// Every level is tried even after a hit so that ambiguous lines can be
    /// reported; the lowest-indexed match wins.
    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        let mut matched_levels = Vec::new();
        let mut winner = None;

        for (i, level) in self.levels.iter().enumerate() {
            let Some(captures) = level.matcher.captures(line) else {
                continue;
            };
            let index = i + 1;
            matched_levels.push(index);
            if winner.is_none() {
                winner = Some(LevelMatch {
                    level: index,
                    captures,
                });
            }
        }

        LineClass {
            matched_levels,
            winner,
        }
    }
}

/// Warning text for a line that matched more than one level.
pub fn multi_match_warning(line_number: usize, levels: &[usize]) -> String {
    let list = levels
        .iter()
        .map(|l| l.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!("Line {line_number} matched multiple levels: {list}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::levels::{CounterKind, IdentifierSpec, LevelSpec, compile_levels};

    fn levels() -> Vec<LevelConfig> {
        compile_levels(&[
            LevelSpec {
                pattern: r"#\s+(\d+)\s*".to_string(),
                item_type: "Chapter".to_string(),
                marker: Some("*".to_string()),
                identifier: IdentifierSpec::CaptureGroup,
            },
            LevelSpec {
                pattern: r"-\s+".to_string(),
                item_type: "Item".to_string(),
                marker: None,
                identifier: IdentifierSpec::AutoIncrement {
                    kind: CounterKind::Numeric,
                    start: None,
                },
            },
            LevelSpec {
                pattern: r"-\s+\[".to_string(),
                item_type: "Task".to_string(),
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
    fn test_no_match() {
        let levels = levels();
        let class = LineClassifier::new(&levels).classify("plain text");
        assert!(class.matched_levels.is_empty());
        assert!(class.winner.is_none());
        assert!(!class.is_ambiguous());
    }

    #[test]
    fn test_single_match_exposes_group_and_end() {
        let levels = levels();
        let class = LineClassifier::new(&levels).classify("# 12  Intro");
        assert_eq!(class.matched_levels, vec![1]);
        let winner = class.winner.unwrap();
        assert_eq!(winner.level, 1);
        assert_eq!(winner.group_one(), "12");
        assert_eq!(winner.end(), 6);
    }

    #[test]
    fn test_all_matches_collected_lowest_wins() {
        let levels = levels();
        let class = LineClassifier::new(&levels).classify("- [ ] buy milk");
        assert_eq!(class.matched_levels, vec![2, 3]);
        assert!(class.is_ambiguous());
        assert_eq!(class.winner.unwrap().level, 2);
    }

    #[test]
    fn test_match_must_start_the_line() {
        let levels = levels();
        let class = LineClassifier::new(&levels).classify("  - indented");
        assert!(class.winner.is_none());
    }

    #[test]
    fn test_multi_match_warning_text() {
        assert_eq!(
            multi_match_warning(4, &[2, 3]),
            "Line 4 matched multiple levels: 2, 3"
        );
        assert_eq!(
            multi_match_warning(10, &[1, 2, 5]),
            "Line 10 matched multiple levels: 1, 2, 5"
        );
    }
}
