use serde::{Deserialize, Serialize};

use crate::state_graph::StateGraph;

#[derive(Serialize, Deserialize, Debug)]
struct JsonData {
    nodes: Vec<JsonNode>,
    links: Vec<JsonEdge>,
}

#[derive(Serialize, Deserialize, Debug)]
struct JsonNode {
    id: usize,
    moves_left: i32,
    goal: bool,
}

#[derive(Serialize, Deserialize, Debug)]
struct JsonEdge {
    source: usize,
    target: usize,
    action: char,
}

pub fn get_json_data(graph: &StateGraph) -> String {
    let nodes: Vec<JsonNode> = graph
        .nodes
        .iter()
        .map(|(state, &id)| JsonNode {
            id,
            moves_left: state.moves_left,
            goal: state.is_goal(),
        })
        .collect();

    let links: Vec<JsonEdge> = graph
        .edges
        .iter()
        .map(|edge| JsonEdge {
            source: edge.from,
            target: edge.to,
            action: edge.action.arrow(),
        })
        .collect();

    let json_data = JsonData { nodes, links };
    serde_json::to_string_pretty(&json_data).unwrap()
}
