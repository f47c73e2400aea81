use thiserror::Error;

#[derive(Debug, Error)]
pub enum GraphError {
  #[error("A node with id {0} is already present in the Graph")]
  DuplicateNode(String),
  #[error("An edge with id {0} is already present in the Graph")]
  DuplicateEdge(String),
  #[error("Attempted to build {0} from invalid json at {path}: {2}", path = .1.display())]
  FromBadJson(String, std::path::PathBuf, #[source] serde_json::Error),
  #[error(transparent)]
  Io(#[from] std::io::Error),
  #[error(transparent)]
  Serde(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ParserError {
  #[error(transparent)]
  Rio(#[from] rio_turtle::TurtleError),
}

/* Things a serialization run left out of its output.
  These are reported alongside the rendered text, never raised. */
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Warning {
  #[error("Skipped node {node} referenced by edge {}", .edge.as_deref().unwrap_or("<unnamed>"))]
  MissingNode{ edge: Option<String>, node: String },
  #[error("No typing edge resolved, so no namespace prefix could be derived")]
  NoPrefixDerivable,
}
