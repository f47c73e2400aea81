/* Exports */

pub mod config;
pub mod datastore;
pub mod rdf;
pub mod errors;

pub use config::Config;
pub use datastore::{GraphStore, graph::Graph};
pub use errors::{GraphError, ParserError, Warning};
pub use rdf::{
  builder::TtlBuilder,
  datatype::XsdType,
  extractor::{serialize, describe_instance, TtlDocument},
  parser::parse_turtle,
};

/* Common Definitions */

pub type RdfTriple = [RdfNode; 3];

/// Label reserved for edges asserting the class of their source node.
pub const TYPE_LABEL: &str = "#type";

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Node {
  pub id: String,
  pub label: String,
  #[serde(rename = "type")]
  pub kind: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub title: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub color: Option<String>,
}
impl Node {
  pub fn new(id: &str, label: &str, kind: &str) -> Self {
    Node {
      id: id.to_string(),
      label: label.to_string(),
      kind: kind.to_string(),
      title: None,
      color: None,
    }
  }
  /// Literal nodes carry an `xsd:` datatype tag rather than a class name.
  pub fn is_literal(&self) -> bool {
    self.kind.starts_with("xsd:")
  }
  pub fn datatype(&self) -> Option<XsdType> {
    XsdType::from_tag(&self.kind)
  }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Edge {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub id: Option<String>,
  pub from: String,
  pub to: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub label: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub title: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub color: Option<String>,
}
impl Edge {
  pub fn new(id: &str, from: &str, to: &str, label: &str) -> Self {
    Edge {
      id: Some(id.to_string()),
      from: from.to_string(),
      to: to.to_string(),
      label: Some(label.to_string()),
      title: None,
      color: None,
    }
  }
  pub fn is_typing(&self, type_label: &str) -> bool {
    self.label.as_deref() == Some(type_label)
  }
}

/* One typed subject with the properties hanging off it,
  assembled per request and never stored. */
#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Instance {
  pub name: String,
  pub properties: Vec<InstanceProperty>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InstanceProperty {
  pub name: String,
  pub value: String,
  pub data_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RdfNode {
  Named{ iri: String },
  Blank{ id: String },
  RawLit{ val: String },
  LangTaggedLit{ val: String, lang: String },
  TypedLit{ val: String, datatype: String },
}
impl std::convert::From<&str> for RdfNode {
  fn from(s: &str) -> Self {
    Self::Named{ iri: s.to_string() }
  }
}
