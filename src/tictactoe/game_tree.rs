//! Reachable state enumeration

use fxhash::FxHashSet;

use super::{Player, board::BoardState};

/// Collect every state reachable from the empty `size` x `size` board with
/// any of `first_players` opening, terminal states included.
///
/// States are returned in discovery order, which is deterministic.
pub fn reachable_states(size: usize, first_players: &[Player]) -> Vec<BoardState> {
    let mut to_explore: Vec<BoardState> = first_players
        .iter()
        .rev()
        .map(|&p| BoardState::new_with_player(size, p))
        .collect();
    let mut explored = FxHashSet::default();
    let mut states = Vec::new();

    while let Some(state) = to_explore.pop() {
        if !explored.insert(state.clone()) {
            continue;
        }

        if !state.is_terminal() {
            for (next_state, _) in state.successors().into_iter().rev() {
                if !explored.contains(&next_state) {
                    to_explore.push(next_state);
                }
            }
        }
        states.push(state);
    }

    states
}
