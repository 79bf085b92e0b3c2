use crate::classify::LevelMatch;
use crate::counter;
use crate::levels::{IdentifierPolicy, LevelConfig};
use crate::state::HierarchyState;

/// Whether an auto-increment level continued its sequence or restarted it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterStep {
    Reset,
    Advance,
}

/// Computes the identifier for the winning level and records it in `state`.
///
/// Returns the identifier. Every level deeper than the winner is cleared.
pub fn resolve_identifier(
    state: &mut HierarchyState,
    config: &LevelConfig,
    found: &LevelMatch<'_>,
) -> String {
    let level = found.level;
    let id = match &config.policy {
        IdentifierPolicy::CaptureGroup => found.group_one().to_string(),
        IdentifierPolicy::AutoIncrement { kind, seed } => {
            let parent = state.parent_signature_for(level);
            let token = match step_for(state, level, &parent) {
                CounterStep::Reset => {
                    state.set_parent_signature(level, parent);
                    seed.clone()
                }
                CounterStep::Advance => {
                    let current = state.auto_counter(level).unwrap_or(seed.as_str());
                    counter::advance(current, *kind)
                }
            };
            state.set_auto_counter(level, token.clone());
            token
        }
    };

    state.assign(level, id.clone());
    id
}

fn step_for(state: &HierarchyState, level: usize, parent: &str) -> CounterStep {
    match state.parent_signature(level) {
        Some(last) if last == parent => CounterStep::Advance,
        _ => CounterStep::Reset,
    }
}
