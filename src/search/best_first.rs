//! Heuristic best-first search toward a winning state
//!
//! The open set is a min-heap on `f = g + h`, where `g` counts plies from the
//! root and `h` is the positional heuristic. Popped grids are closed by
//! [`Fingerprint`]. The first winning state found for the automated player
//! ends the search, and the move one ply below the root on its path is played.
//!
//! This races toward the searcher's own wins: it does not model the opponent's
//! replies and can walk past a threat that minimax would block.
//!
//! Nodes live in a flat arena; ancestry is a parent index, so recovering the
//! first move of a path is a walk over integers.

use std::{cmp::Ordering, collections::BinaryHeap};

use fxhash::FxHashSet;
use tracing::{debug, warn};

use super::{
    SearchResult,
    heuristic::{Evaluator, LineScores},
};
use crate::{
    ports::MoveStrategy,
    tictactoe::{BoardState, Fingerprint, Move},
};

#[derive(Debug, Clone)]
struct SearchNode {
    state: BoardState,
    /// Move producing this node, `None` at the root
    mv: Option<Move>,
    g: u32,
    h: f64,
    parent: Option<usize>,
}

impl SearchNode {
    fn f(&self) -> f64 {
        f64::from(self.g) + self.h
    }
}

/// Open-set entry pointing into the node arena
#[derive(Debug, Clone, Copy, PartialEq)]
struct OpenEntry {
    f: f64,
    index: usize,
}

impl Eq for OpenEntry {}

// `BinaryHeap` is a max-heap: flip both comparisons so the lowest f, then the
// earliest generated node, is popped first.
impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.index.cmp(&self.index))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Walk parent links up to the node directly below the root.
///
/// A winning root has no move of its own and yields `None`; a winning child
/// of the root yields its own move.
fn first_move(nodes: &[SearchNode], mut current: usize) -> Option<Move> {
    while let Some(parent) = nodes[current].parent {
        if nodes[parent].parent.is_none() {
            break;
        }
        current = parent;
    }
    nodes[current].mv
}

/// Best-first searcher with an optional expansion budget
#[derive(Debug, Clone)]
pub struct BestFirstSearcher {
    scores: LineScores,
    node_budget: Option<usize>,
    expanded: u64,
}

impl BestFirstSearcher {
    pub fn new(scores: LineScores) -> Self {
        Self {
            scores,
            node_budget: None,
            expanded: 0,
        }
    }

    /// Stop expanding after `budget` nodes and fall back to the greedy choice
    pub fn with_node_budget(mut self, budget: Option<usize>) -> Self {
        self.node_budget = budget;
        self
    }

    /// Search `state` for a path to a win of the side to move.
    pub fn search(&mut self, state: &BoardState) -> SearchResult {
        self.expanded = 0;
        let own = state.to_move;
        let eval = Evaluator::new(own, self.scores);

        let mut nodes = vec![SearchNode {
            state: state.clone(),
            mv: None,
            g: 0,
            h: eval.heuristic(state),
            parent: None,
        }];
        let mut open = BinaryHeap::new();
        open.push(OpenEntry {
            f: nodes[0].f(),
            index: 0,
        });
        let mut closed: FxHashSet<Fingerprint> = FxHashSet::default();

        while let Some(OpenEntry { f, index }) = open.pop() {
            if !closed.insert(nodes[index].state.fingerprint()) {
                continue;
            }

            if nodes[index].state.is_winner(own) {
                return self.finish(&nodes, index, f);
            }

            if self.node_budget.is_some_and(|budget| self.expanded >= budget as u64) {
                warn!(
                    expanded = self.expanded,
                    "best-first node budget exhausted, falling back to greedy move"
                );
                break;
            }
            self.expanded += 1;

            let g = nodes[index].g + 1;
            let successors = nodes[index].state.successors();
            for (next_state, mv) in successors {
                if closed.contains(&next_state.fingerprint()) {
                    continue;
                }

                let wins = next_state.is_winner(own);
                let h = eval.heuristic(&next_state);
                nodes.push(SearchNode {
                    state: next_state,
                    mv: Some(mv),
                    g,
                    h,
                    parent: Some(index),
                });
                let child = nodes.len() - 1;

                // Early goal test: a generated win ends the search at once
                if wins {
                    return self.finish(&nodes, child, nodes[child].f());
                }
                open.push(OpenEntry {
                    f: nodes[child].f(),
                    index: child,
                });
            }
        }

        self.greedy(&eval, state, nodes.len())
    }

    fn finish(&self, nodes: &[SearchNode], winner: usize, f: f64) -> SearchResult {
        let best_move = first_move(nodes, winner);
        debug!(
            expanded = self.expanded,
            generated = nodes.len(),
            plies = nodes[winner].g,
            "best-first search reached a win"
        );
        SearchResult {
            best_move,
            score: f,
            nodes: nodes.len() as u64,
        }
    }

    /// One-ply fallback: highest heuristic successor, first seen on ties
    fn greedy(&self, eval: &Evaluator, state: &BoardState, generated: usize) -> SearchResult {
        let mut best_move = None;
        let mut best_value = f64::NEG_INFINITY;
        for (next_state, mv) in state.successors() {
            let value = eval.heuristic(&next_state);
            if best_move.is_none() || value > best_value {
                best_value = value;
                best_move = Some(mv);
            }
        }

        debug!(
            expanded = self.expanded,
            generated,
            score = best_value,
            "best-first search found no win, using greedy move"
        );
        SearchResult {
            best_move,
            score: best_value,
            nodes: generated as u64,
        }
    }
}

impl MoveStrategy for BestFirstSearcher {
    fn choose_move(&mut self, state: &BoardState) -> Option<Move> {
        self.search(state).best_move
    }

    fn name(&self) -> &str {
        "best-first"
    }
}
