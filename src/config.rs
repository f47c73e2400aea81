use serde::{Serialize, Deserialize};

use crate::{TYPE_LABEL, errors::GraphError as Error};

type Result<T> = std::result::Result<T, Error>;

/// Knobs for a serialization run. Every field falls back to its default
/// when missing from a config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
  /// Edge label marking a typing edge.
  pub type_label: String,
  /// Property name used for edges without a label.
  pub unknown_property: String,
  /// Node type of class nodes, which have no instance description.
  pub resource_type: String,
  /// Base IRI bound to the fixed `ex:` prefix.
  pub example_base: String,
}

impl Default for Config {
  fn default() -> Self {
    Config {
      type_label: TYPE_LABEL.to_string(),
      unknown_property: "unknown".to_string(),
      resource_type: "Resource".to_string(),
      example_base: "http://example.org/".to_string(),
    }
  }
}

impl Config {
  pub fn from_json_str(json: &str) -> Result<Self> {
    Ok(serde_json::from_str(json)?)
  }
  pub fn from_json_file(path: &str) -> Result<Self> {
    let path_buf = std::path::PathBuf::from(path);
    let json = std::fs::read_to_string(&path_buf)?;
    serde_json::from_str(&json)
      .map_err(|e| Error::FromBadJson(String::from("Config"), path_buf, e))
  }
}
