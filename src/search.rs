use std::collections::HashSet;
use std::rc::Rc;

use crate::core::{step, Direction, GameUpdate, Level, UserAction};
use crate::state_graph::{Edge, StateGraph};

/// One discovered state plus the move that produced it, chained back to the
/// initial state for solution reconstruction.
pub struct Node {
    pub level: Level,
    pub action: Option<Direction>,
    pub parent: Option<Rc<Node>>,
}

impl Node {
    pub fn solution(&self) -> Vec<Direction> {
        let mut moves = Vec::new();
        let mut node = self;
        loop {
            if let Some(action) = node.action {
                moves.push(action);
            }
            match &node.parent {
                Some(parent) => node = parent,
                None => break,
            }
        }
        moves.reverse();
        moves
    }
}

/// Depth-first exploration of the transition graph. Returns the first path
/// of directions found to a goal state, which is not necessarily shortest.
/// Terminates for any finite move budget because every transition strictly
/// decreases the remaining moves.
pub fn search(initial: &Level) -> Option<Vec<Direction>> {
    search_inner(initial, None)
}

/// Same search, additionally recording every generated edge, including ones
/// into already-explored or already-frontier states, for later export.
/// Recording does not affect the outcome. Also returns the node id assigned
/// to the initial state.
pub fn search_with_graph(initial: &Level) -> (Option<Vec<Direction>>, StateGraph, usize) {
    let mut graph = StateGraph::new();
    let initial_id = graph.upsert_state(initial.clone());
    let solution = search_inner(initial, Some(&mut graph));
    (solution, graph, initial_id)
}

fn search_inner(initial: &Level, mut graph: Option<&mut StateGraph>) -> Option<Vec<Direction>> {
    let root = Rc::new(Node {
        level: initial.clone(),
        action: None,
        parent: None,
    });
    if root.level.is_goal() {
        return Some(Vec::new());
    }

    let mut frontier: Vec<Rc<Node>> = vec![Rc::clone(&root)];
    // Mirrors the frontier contents so membership is a hash lookup instead
    // of a linear scan over the stack.
    let mut frontier_states: HashSet<Level> = HashSet::new();
    frontier_states.insert(root.level.clone());
    let mut explored: HashSet<Level> = HashSet::new();

    while let Some(node) = frontier.pop() {
        frontier_states.remove(&node.level);
        explored.insert(node.level.clone());

        for direction in Direction::ALL {
            let update = step(&node.level, UserAction::Move(direction));
            let GameUpdate::NextState(next, _change) = update else {
                continue;
            };

            if let Some(graph) = graph.as_deref_mut() {
                let from = graph.upsert_state(node.level.clone());
                let to = graph.upsert_state(next.clone());
                graph.add_edge(Edge {
                    from,
                    to,
                    action: direction,
                });
            }

            if explored.contains(&next) || frontier_states.contains(&next) {
                continue;
            }

            let child = Rc::new(Node {
                level: next,
                action: Some(direction),
                parent: Some(Rc::clone(&node)),
            });
            if child.level.is_goal() {
                return Some(child.solution());
            }
            frontier_states.insert(child.level.clone());
            frontier.push(child);
        }
    }

    None
}
