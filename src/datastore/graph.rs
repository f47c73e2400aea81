use std::collections::BTreeMap;

use bimap::BiBTreeMap;
use serde::Deserialize;

use crate::{
  Node, Edge,
  datastore::GraphStore,
  errors::GraphError as Error,
};

type Result<T> = std::result::Result<T, Error>;

/* Node ids and edge ids are each mapped to a unique
  position in their arena, so lookups by id in either
  direction stay cheap.
  Edges keep the order they were inserted in, which is the
  order serialization discovers instances in.
  Edges may point at ids with no node behind them; the
  serializer reports those rather than the Graph rejecting them. */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
  dict: BiBTreeMap<String, usize>,
  nodes: Vec<Node>,
  edge_dict: BiBTreeMap<String, usize>,
  edges: Vec<Edge>,
  adjacency: BTreeMap<String, Vec<usize>>,
}

/* The shape graph data is exchanged in:
  { "node": [...], "edge": [...] } */
#[derive(Deserialize)]
struct GraphJson {
  #[serde(default)]
  node: Vec<Node>,
  #[serde(default)]
  edge: Vec<Edge>,
}

/* Public */
impl Graph {
  /* Constructors */
  pub fn new() -> Self {
    Graph {
      dict: BiBTreeMap::new(),
      nodes: Vec::new(),
      edge_dict: BiBTreeMap::new(),
      edges: Vec::new(),
      adjacency: BTreeMap::new(),
    }
  }
  pub fn from_json_str(json: &str) -> Result<Self> {
    let parsed: GraphJson = serde_json::from_str(json)?;
    Self::from_parts(parsed)
  }
  pub fn from_json_file(path: &str) -> Result<Self> {
    let path_buf = std::path::PathBuf::from(path);
    let json = std::fs::read_to_string(&path_buf)?;
    let parsed: GraphJson = match serde_json::from_str(&json) {
      Ok(g) => g,
      Err(e) => return Err(Error::FromBadJson(String::from("Graph"), path_buf, e)),
    };
    Self::from_parts(parsed)
  }
  /* Operation */
  pub fn insert_node(&mut self, node: Node) -> Result<()> {
    if self.dict.contains_left(&node.id) {
      return Err(Error::DuplicateNode(node.id))
    }
    self.dict.insert(node.id.clone(), self.nodes.len());
    self.nodes.push(node);
    Ok(())
  }
  pub fn insert_edge(&mut self, edge: Edge) -> Result<()> {
    let pos = self.edges.len();
    if let Some(id) = &edge.id {
      if self.edge_dict.contains_left(id) {
        return Err(Error::DuplicateEdge(id.clone()))
      }
      self.edge_dict.insert(id.clone(), pos);
    }
    self.adjacency.entry(edge.from.clone()).or_default().push(pos);
    if edge.to != edge.from {
      self.adjacency.entry(edge.to.clone()).or_default().push(pos);
    }
    self.edges.push(edge);
    Ok(())
  }
  pub fn node_count(&self) -> usize {
    self.nodes.len()
  }
  pub fn edge_count(&self) -> usize {
    self.edges.len()
  }
  pub fn is_empty(&self) -> bool {
    self.nodes.is_empty() && self.edges.is_empty()
  }
  /// Id of the edge at `pos` in insertion order, if it has one.
  pub fn edge_id(&self, pos: usize) -> Option<&str> {
    self.edge_dict.get_by_right(&pos).map(|id| id.as_str())
  }
  pub fn nodes(&self) -> impl Iterator<Item=&Node> {
    self.nodes.iter()
  }
}

/* Std Traits */
impl Default for Graph {
  fn default() -> Self {
    Graph::new()
  }
}

impl GraphStore for Graph {
  fn node(&self, id: &str) -> Option<&Node> {
    self.dict.get_by_left(&id.to_string()).map(|&pos| &self.nodes[pos])
  }
  fn edge(&self, id: &str) -> Option<&Edge> {
    self.edge_dict.get_by_left(&id.to_string()).map(|&pos| &self.edges[pos])
  }
  fn incident_edges(&self, node_id: &str) -> Vec<&Edge> {
    match self.adjacency.get(node_id) {
      Some(positions) => positions.iter().map(|&pos| &self.edges[pos]).collect(),
      None => Vec::new(),
    }
  }
  fn edges(&self) -> Vec<&Edge> {
    self.edges.iter().collect()
  }
}

/* Private */
impl Graph {
  fn from_parts(GraphJson { node, edge }: GraphJson) -> Result<Self> {
    let mut graph = Graph::new();
    for n in node { graph.insert_node(n)?; }
    for e in edge { graph.insert_edge(e)?; }
    Ok(graph)
  }
}
