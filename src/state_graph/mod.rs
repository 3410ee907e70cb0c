mod dot_export;
mod graph;
mod json_export;
mod models;

pub use dot_export::{convert_to_petgraph, write_dot};
pub use graph::get_graph_info;
pub use json_export::get_json_data;
pub use models::{Edge, StateGraph};
