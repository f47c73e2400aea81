use std::fmt::Write as FmtWrite;

use tracing::debug;

use crate::{Node, Config};

/* Prefixes every document declares after its own namespace */
const STANDARD_PREFIXES: &str = "\
@prefix owl: <http://www.w3.org/2002/07/owl#> .
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
@prefix xsd: <http://www.w3.org/2001/XMLSchema#> .
";

/// One property of an instance: its name and the node it points at,
/// if that node could be found.
pub type Property<'a> = (&'a str, Option<&'a Node>);

/// Accumulates typed instances as Turtle statement blocks, all
/// qualified by a single namespace prefix.
///
/// The namespace is whatever the first seed URI passed to
/// [`set_prefix`](TtlBuilder::set_prefix) lives under, so a builder can only
/// describe graphs whose terms share one namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TtlBuilder {
  prefix_line: Option<String>,
  token: Option<String>,
  example_base: String,
  blocks: Vec<String>,
}

/* Public */
impl TtlBuilder {
  pub fn new() -> Self {
    Self::with_config(&Config::default())
  }
  pub fn with_config(config: &Config) -> Self {
    TtlBuilder {
      prefix_line: None,
      token: None,
      example_base: config.example_base.clone(),
      blocks: Vec::new(),
    }
  }
  pub fn is_prefix_set(&self) -> bool {
    self.prefix_line.is_some()
  }
  /// The namespace token, once a prefix has been set.
  pub fn token(&self) -> Option<&str> {
    self.token.as_deref()
  }
  pub fn instance_count(&self) -> usize {
    self.blocks.len()
  }
  /// Derive the namespace from the parent path of `seed_uri`.
  ///
  /// `https://host/Policy/Vehicle1` declares `@prefix Policy: <https://host/Policy/> .`
  /// Calling this again replaces the previous prefix; guard with
  /// [`is_prefix_set`](TtlBuilder::is_prefix_set).
  pub fn set_prefix(&mut self, seed_uri: &str) {
    let base = match seed_uri.rfind('/') {
      Some(pos) => &seed_uri[..pos],
      None => "",
    };
    let token = match base.rfind('/') {
      Some(pos) => &base[pos+1..],
      None => base,
    };
    debug!(token, base, "Derived namespace prefix");
    self.prefix_line = Some(format!("@prefix {}: <{}/> .", token, base));
    self.token = Some(token.to_string());
  }
  /// Append one statement block for `subject`, an instance of `class`.
  ///
  /// Every property line but the last ends in `;`, the last in `.`.
  /// With no properties the block is left open on its `;`.
  pub fn add_instance(&mut self, subject: &str, class: &str, properties: &[Property]) {
    let t = self.token.as_deref().unwrap_or("");
    let mut block = String::with_capacity(64 * (properties.len() + 1));
    /* Writing to a String cannot fail */
    let _ = writeln!(block, "{}:{} a {}:{} ;", t, subject, t, class);
    for (i, (name, target)) in properties.iter().enumerate() {
      let sep = if i + 1 == properties.len() { "." } else { ";" };
      let _ = writeln!(block, "\t{}:{} {} {}", t, name, render_value(t, *target), sep);
    }
    debug!(subject, class, properties = properties.len(), "Added instance block");
    self.blocks.push(block);
  }
  /// The whole document: namespace prefix (a blank line if none is set),
  /// the standard and `ex:` prefixes, then each block in insertion order.
  pub fn render(&self) -> String {
    let mut doc = String::new();
    if let Some(line) = &self.prefix_line {
      doc.push_str(line);
    }
    doc.push('\n');
    doc.push_str(STANDARD_PREFIXES);
    let _ = writeln!(doc, "@prefix ex: <{}> .", self.example_base);
    doc.push('\n');
    doc.push_str(&self.blocks.join("\n\n"));
    doc
  }
}

/* Std Traits */
impl Default for TtlBuilder {
  fn default() -> Self {
    Self::new()
  }
}

/* Utils */
fn render_value(token: &str, target: Option<&Node>) -> String {
  match target {
    Some(node) => match node.datatype() {
      Some(datatype) => format!("\"{}\"^^{}", escape_literal(&node.label), datatype),
      None => format!("{}:{}", token, node.label),
    },
    None => format!("{}:", token),
  }
}
fn escape_literal(s: &str) -> String {
  let mut out = String::with_capacity(s.len());
  for c in s.chars() {
    match c {
      '\\' => out.push_str("\\\\"),
      '"' => out.push_str("\\\""),
      '\n' => out.push_str("\\n"),
      '\r' => out.push_str("\\r"),
      _ => out.push(c),
    }
  }
  out
}
