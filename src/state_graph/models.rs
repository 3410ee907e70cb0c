use std::collections::HashSet;

use crate::core::{Direction, Level};

/// Every state the search generated, keyed both ways between snapshot and
/// node id, plus the full set of discovered transitions.
pub struct StateGraph {
    pub nodes: bimap::BiMap<Level, usize>,
    pub edges: HashSet<Edge>,
    pub next_id: usize,
}

#[derive(Hash, Eq, PartialEq, Clone, Debug)]
pub struct Edge {
    pub from: usize,
    pub to: usize,
    pub action: Direction,
}
