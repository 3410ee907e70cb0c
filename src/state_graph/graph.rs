use crate::core::Level;
use crate::state_graph::models::{Edge, StateGraph};
use std::collections::HashSet;

impl StateGraph {
    pub fn new() -> Self {
        StateGraph {
            nodes: bimap::BiMap::new(),
            edges: HashSet::new(),
            next_id: 0,
        }
    }

    pub fn upsert_state(&mut self, state: Level) -> usize {
        if let Some(&id) = self.nodes.get_by_left(&state) {
            id
        } else {
            let id = self.next_id;
            self.next_id += 1;

            // id is fresh and the state was just checked to be absent
            self.nodes.insert_no_overwrite(state, id).unwrap();
            id
        }
    }

    pub fn get_state(&self, id: usize) -> Option<&Level> {
        self.nodes.get_by_right(&id)
    }

    pub fn add_edge(&mut self, edge: Edge) {
        self.edges.insert(edge);
    }
}

pub fn get_graph_info(graph: &StateGraph) -> String {
    format!(
        "Explored graph has {} states and {} transitions.",
        graph.nodes.len(),
        graph.edges.len()
    )
}
