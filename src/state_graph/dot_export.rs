use petgraph::visit::EdgeRef;
use petgraph::Directed;
use std::collections::HashMap;

use crate::core::{Cell, Direction, Level};
use crate::state_graph::StateGraph;

pub fn convert_to_petgraph(graph: &StateGraph) -> petgraph::Graph<usize, Direction, Directed> {
    let mut petgraph = petgraph::Graph::new();

    let node_map: HashMap<usize, petgraph::graph::NodeIndex> = graph
        .nodes
        .iter()
        .map(|(_, &node_id)| {
            let index = petgraph.add_node(node_id);
            (node_id, index)
        })
        .collect();

    for edge in &graph.edges {
        if let (Some(&from_index), Some(&to_index)) =
            (node_map.get(&edge.from), node_map.get(&edge.to))
        {
            petgraph.add_edge(from_index, to_index, edge.action);
        }
    }

    petgraph
}

/// Renders the explored graph as Graphviz text. Nodes carry HTML-table
/// labels of the board, colored by role: blue for the initial state, green
/// for goal terminals, red for dead terminals, white otherwise.
pub fn write_dot(graph: &StateGraph, initial_id: usize, name: &str) -> String {
    let petgraph = convert_to_petgraph(graph);

    let mut out = String::new();
    out.push_str(&format!("digraph {} {{\n", name));

    for index in petgraph.node_indices() {
        let node_id = petgraph[index];
        if let Some(level) = graph.get_state(node_id) {
            out.push_str(&format!(
                "\t\"{}\" [label={}];\n",
                node_id,
                dot_label(level, node_id == initial_id)
            ));
        }
    }
    out.push('\n');

    for edge in petgraph.edge_references() {
        out.push_str(&format!(
            "\t\"{}\" -> \"{}\" [label=\"{}\"];\n",
            petgraph[edge.source()],
            petgraph[edge.target()],
            edge.weight().arrow()
        ));
    }

    out.push_str("}\n");
    out
}

fn dot_label(level: &Level, is_initial: bool) -> String {
    let background = if is_initial {
        "blue"
    } else if level.is_goal() {
        "green"
    } else if level.is_terminal() {
        "red"
    } else {
        "white"
    };

    let mut label = format!("<<TABLE BORDER=\"1\" BGCOLOR=\"{}\">", background);
    label.push_str(&format!("<TR><TD>moves: {}</TD></TR>", level.moves_left));

    for row in &level.grid {
        label.push_str("<TR>");
        for &cell in row {
            match cell {
                Cell::Wall => label.push_str("<TD BGCOLOR=\"black\"> </TD>"),
                Cell::Empty => label.push_str("<TD BGCOLOR=\"white\"> </TD>"),
                _ => label.push_str(&format!(
                    "<TD BGCOLOR=\"white\">{}</TD>",
                    crate::console_interface::cell_char(cell)
                )),
            }
        }
        label.push_str("</TR>");
    }

    label.push_str("</TABLE>>");
    label
}
