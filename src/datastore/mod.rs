pub mod graph;

use crate::{Node, Edge};

/* Everything the serializer needs to know about a graph.
  Implemented by Graph, but any store holding nodes and edges
  keyed by id can be serialized through it. */
pub trait GraphStore {
  fn node(&self, id: &str) -> Option<&Node>;
  fn edge(&self, id: &str) -> Option<&Edge>;
  /// Edges where the node is either endpoint, in insertion order.
  /// Self-loops appear once.
  fn incident_edges(&self, node_id: &str) -> Vec<&Edge>;
  /// All edges in insertion order.
  fn edges(&self) -> Vec<&Edge>;
}
