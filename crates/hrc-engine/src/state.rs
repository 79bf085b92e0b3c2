/// Per-run record of the current position in the outline.
///
/// Each container holds one slot per configured level, indexed by the
/// 1-based level number (slot 0 is unused). Assigning level `L` always clears
/// every slot deeper than `L`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HierarchyState {
    current_ids: Vec<Option<String>>,
    auto_counters: Vec<Option<String>>,
    parent_signatures: Vec<Option<String>>,
}

impl HierarchyState {
    /// Creates an empty state for `levels` levels.
    pub fn new(levels: usize) -> Self {
        Self {
            current_ids: vec![None; levels + 1],
            auto_counters: vec![None; levels + 1],
            parent_signatures: vec![None; levels + 1],
        }
    }

    pub fn levels(&self) -> usize {
        self.current_ids.len().saturating_sub(1)
    }

    pub fn current_id(&self, level: usize) -> Option<&str> {
        self.current_ids.get(level)?.as_deref()
    }

    pub fn auto_counter(&self, level: usize) -> Option<&str> {
        self.auto_counters.get(level)?.as_deref()
    }

    pub fn parent_signature(&self, level: usize) -> Option<&str> {
        self.parent_signatures.get(level)?.as_deref()
    }

    pub(crate) fn set_auto_counter(&mut self, level: usize, token: String) {
        self.auto_counters[level] = Some(token);
    }

    pub(crate) fn set_parent_signature(&mut self, level: usize, signature: String) {
        self.parent_signatures[level] = Some(signature);
    }

    /// Records `id` as the identifier of `level` and clears all deeper levels.
    ///
    /// An empty identifier is stored as absent.
    pub fn assign(&mut self, level: usize, id: String) {
        self.current_ids[level] = if id.is_empty() { None } else { Some(id) };
        self.clear_below(level);
    }

    fn clear_below(&mut self, level: usize) {
        for slot in level + 1..self.current_ids.len() {
            self.current_ids[slot] = None;
            self.auto_counters[slot] = None;
            self.parent_signatures[slot] = None;
        }
    }

    /// Present identifiers of levels `1..=up_to`, in ascending order.
    pub fn ids_through(&self, up_to: usize) -> impl Iterator<Item = &str> {
        let end = up_to.min(self.levels());
        self.current_ids[1..=end].iter().filter_map(|id| id.as_deref())
    }

    /// Dot-joined identifiers of every level above `level`.
    pub fn parent_signature_for(&self, level: usize) -> String {
        join_with_dot(self.ids_through(level.saturating_sub(1)))
    }
}

pub(crate) fn join_with_dot<'a>(parts: impl Iterator<Item = &'a str>) -> String {
    parts.collect::<Vec<_>>().join(".")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_empty() {
        let state = HierarchyState::new(3);
        assert_eq!(state.levels(), 3);
        for level in 1..=3 {
            assert_eq!(state.current_id(level), None);
            assert_eq!(state.auto_counter(level), None);
            assert_eq!(state.parent_signature(level), None);
        }
    }

    #[test]
    fn test_assign_clears_deeper_levels() {
        let mut state = HierarchyState::new(3);
        state.assign(1, "1".to_string());
        state.assign(2, "a".to_string());
        state.set_auto_counter(2, "a".to_string());
        state.set_parent_signature(2, "1".to_string());
        state.assign(3, "x".to_string());
        state.set_auto_counter(3, "x".to_string());

        state.assign(1, "2".to_string());

        assert_eq!(state.current_id(1), Some("2"));
        for level in 2..=3 {
            assert_eq!(state.current_id(level), None);
            assert_eq!(state.auto_counter(level), None);
            assert_eq!(state.parent_signature(level), None);
        }
    }

    #[test]
    fn test_assign_keeps_shallower_levels() {
        let mut state = HierarchyState::new(3);
        state.assign(1, "1".to_string());
        state.assign(3, "c".to_string());
        state.assign(2, "b".to_string());

        assert_eq!(state.current_id(1), Some("1"));
        assert_eq!(state.current_id(2), Some("b"));
        assert_eq!(state.current_id(3), None);
    }

    #[test]
    fn test_empty_identifier_is_absent() {
        let mut state = HierarchyState::new(2);
        state.assign(1, String::new());
        assert_eq!(state.current_id(1), None);
    }

    #[test]
    fn test_parent_signature_skips_absent_levels() {
        let mut state = HierarchyState::new(4);
        state.assign(1, "3".to_string());
        state.assign(3, "b".to_string());

        assert_eq!(state.parent_signature_for(1), "");
        assert_eq!(state.parent_signature_for(2), "3");
        assert_eq!(state.parent_signature_for(4), "3.b");
    }

    #[test]
    fn test_out_of_range_lookups_are_absent() {
        let state = HierarchyState::new(1);
        assert_eq!(state.current_id(7), None);
        assert_eq!(state.ids_through(7).count(), 0);
    }
}
