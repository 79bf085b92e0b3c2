use crate::levels::{DEFAULT_MARKER_CHAR, MarkerToken};
use crate::state::{HierarchyState, join_with_dot};

/// Dot-joined identifiers of levels `1..=level`, skipping absent ones.
pub fn composite_code(state: &HierarchyState, level: usize) -> String {
    join_with_dot(state.ids_through(level))
}

/// Number of levels `1..=level` that currently hold an identifier.
pub fn actual_depth(state: &HierarchyState, level: usize) -> usize {
    state.ids_through(level).count()
}

/// Marker string for a line at `depth`, built from level 1's token.
///
/// A base of `n` markers yields `n + depth - 1` markers, and never fewer than
/// one when the base itself is non-empty.
pub fn markers(base: Option<MarkerToken>, depth: usize) -> String {
    let (ch, count) = base.map_or((DEFAULT_MARKER_CHAR, 0), |m| (m.ch, m.count));
    let mut total = (count + depth).saturating_sub(1);
    if count >= 1 {
        total = total.max(1);
    }
    std::iter::repeat_n(ch, total).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn state_with(ids: &[Option<&str>]) -> HierarchyState {
        let mut state = HierarchyState::new(ids.len());
        for (i, id) in ids.iter().enumerate() {
            if let Some(id) = id {
                state.assign(i + 1, id.to_string());
            }
        }
        state
    }

    #[test]
    fn test_composite_code_joins_ancestors() {
        let state = state_with(&[Some("2"), Some("b"), Some("iv")]);
        assert_eq!(composite_code(&state, 1), "2");
        assert_eq!(composite_code(&state, 3), "2.b.iv");
    }

    #[test]
    fn test_composite_code_skips_absent_levels() {
        let state = state_with(&[Some("1"), None, Some("c")]);
        assert_eq!(composite_code(&state, 3), "1.c");
        assert_eq!(actual_depth(&state, 3), 2);
    }

    #[test]
    fn test_composite_code_of_empty_state() {
        let state = HierarchyState::new(2);
        assert_eq!(composite_code(&state, 2), "");
        assert_eq!(actual_depth(&state, 2), 0);
    }

    #[rstest]
    #[case(1, 1, "*")]
    #[case(1, 3, "***")]
    #[case(2, 1, "**")]
    #[case(2, 2, "***")]
    #[case(1, 0, "*")]
    #[case(3, 0, "**")]
    fn test_markers(#[case] base: usize, #[case] depth: usize, #[case] expected: &str) {
        let token = MarkerToken {
            ch: '*',
            count: base,
        };
        assert_eq!(markers(Some(token), depth), expected);
    }

    #[test]
    fn test_markers_without_base() {
        assert_eq!(markers(None, 1), "");
        assert_eq!(markers(None, 3), "**");
    }
}
