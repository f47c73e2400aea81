use tracing::{debug, warn};

use crate::{
  Config, Instance, InstanceProperty, Warning,
  datastore::GraphStore,
  rdf::builder::{TtlBuilder, Property},
};

/// The rendered Turtle for a graph along with everything that was
/// left out of it on the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TtlDocument {
  pub text: String,
  pub warnings: Vec<Warning>,
  pub instance_count: usize,
}

/// Serialize every typed instance in `store` to Turtle.
///
/// Instances are discovered through typing edges in the order the store
/// yields them, one block per typing edge whose subject and class both
/// resolve. The namespace prefix is taken from the first such subject and
/// used for every term, so graphs spanning several namespaces are written
/// as if they shared the first one.
///
/// Unresolvable references never abort the run; they are left out of the
/// text and listed in [`TtlDocument::warnings`].
pub fn serialize<S: GraphStore>(store: &S, config: &Config) -> TtlDocument {
  let mut builder = TtlBuilder::with_config(config);
  let mut warnings: Vec<Warning> = Vec::new();
  let edges = store.edges();

  for typing_edge in edges.iter().filter(|e| e.is_typing(&config.type_label)) {
    /* Both ends have to exist for there to be anything to say */
    let class = match store.node(&typing_edge.to) {
      Some(node) => node,
      None => {
        skip(&mut warnings, typing_edge.id.as_deref(), &typing_edge.to);
        continue
      },
    };
    let subject = match store.node(&typing_edge.from) {
      Some(node) => node,
      None => {
        skip(&mut warnings, typing_edge.id.as_deref(), &typing_edge.from);
        continue
      },
    };
    if !builder.is_prefix_set() {
      builder.set_prefix(&subject.id);
    }
    /* Outgoing edges other than typing edges, so a subject with
      several classes never lists one class as a property of another */
    let mut properties: Vec<Property> = Vec::new();
    for edge in store.incident_edges(&subject.id) {
      if edge.from != subject.id || edge.is_typing(&config.type_label) {
        continue
      }
      let name = edge.label.as_deref().unwrap_or(config.unknown_property.as_str());
      let target = store.node(&edge.to);
      if target.is_none() {
        skip(&mut warnings, edge.id.as_deref(), &edge.to);
      }
      properties.push((name, target));
    }
    builder.add_instance(&subject.label, &class.label, &properties);
  }

  if !builder.is_prefix_set() && !edges.is_empty() {
    warn!("{}", Warning::NoPrefixDerivable);
    warnings.push(Warning::NoPrefixDerivable);
  }
  debug!(instances = builder.instance_count(), skipped = warnings.len(), "Serialized graph to Turtle");

  TtlDocument {
    text: builder.render(),
    warnings,
    instance_count: builder.instance_count(),
  }
}

/// Describe one node the way it is shown when inspected: its class name
/// and each outgoing property with the value and datatype it points at.
///
/// Class nodes (of the configured resource type) and unknown ids have no
/// description. Edges to missing nodes are left out.
pub fn describe_instance<S: GraphStore>(store: &S, node_id: &str, config: &Config) -> Option<Instance> {
  let node = store.node(node_id)?;
  if node.kind == config.resource_type {
    return None
  }
  let instance = store.incident_edges(node_id)
    .into_iter()
    .filter(|edge| edge.from == node_id)
    .fold(Instance::default(), |mut acc, edge| {
      let to_node = match store.node(&edge.to) {
        Some(n) => n,
        None => return acc,
      };
      if edge.is_typing(&config.type_label) {
        acc.name = to_node.label.clone();
      }
      else {
        acc.properties.push(InstanceProperty {
          name: edge.label.clone().unwrap_or_else(|| config.unknown_property.clone()),
          value: to_node.label.clone(),
          data_type: to_node.kind.clone(),
        });
      }
      acc
    });
  Some(instance)
}

/* Utils */
fn skip(warnings: &mut Vec<Warning>, edge: Option<&str>, node: &str) {
  let warning = Warning::MissingNode{
    edge: edge.map(String::from),
    node: node.to_string(),
  };
  warn!("{}", warning);
  warnings.push(warning);
}

#[cfg(test)]
mod unit_tests {
  use super::*;
  use crate::{Graph, Node, Edge};

  const NS: &str = "http://a.org/ns";

  fn iri(local: &str) -> String {
    format!("{}/{}", NS, local)
  }
  fn node(local: &str, label: &str, kind: &str) -> Node {
    Node::new(&iri(local), label, kind)
  }
  fn edge(id: &str, from: &str, to: &str, label: &str) -> Edge {
    Edge::new(id, &iri(from), &iri(to), label)
  }
  /* Foo1 is a Bar with size 42 */
  fn foo_graph() -> Graph {
    let mut graph = Graph::new();
    graph.insert_node(node("Foo1", "Foo1", "Bar")).unwrap();
    graph.insert_node(node("Bar", "Bar", "Resource")).unwrap();
    graph.insert_node(node("Foo1/size", "42", "xsd:integer")).unwrap();
    graph.insert_edge(edge("_Foo1#Bar", "Foo1", "Bar", "#type")).unwrap();
    graph.insert_edge(edge("_Foo1#size", "Foo1", "Foo1/size", "size")).unwrap();
    graph
  }

  #[test]
  fn serialize_0() {
    let doc = serialize(&foo_graph(), &Config::default());
    assert!(doc.warnings.is_empty());
    assert_eq!(doc.instance_count, 1);
    assert!(doc.text.starts_with("@prefix ns: <http://a.org/ns/> .\n"));
    assert!(doc.text.ends_with("\n\nns:Foo1 a ns:Bar ;\n\tns:size \"42\"^^xsd:integer .\n"));
  }
  #[test]
  fn serialize_empty_0() {
    let doc = serialize(&Graph::new(), &Config::default());
    assert_eq!(doc.instance_count, 0);
    assert!(doc.warnings.is_empty());
    assert_eq!(doc.text, TtlBuilder::new().render());
  }
  #[test]
  fn serialize_no_properties_0() {
    let mut graph = Graph::new();
    graph.insert_node(node("Foo", "Foo", "Bar")).unwrap();
    graph.insert_node(node("Bar", "Bar", "Resource")).unwrap();
    graph.insert_edge(edge("_Foo#Bar", "Foo", "Bar", "#type")).unwrap();
    let doc = serialize(&graph, &Config::default());
    assert_eq!(doc.instance_count, 1);
    /* The block stays open on its `;` */
    assert!(doc.text.ends_with("\n\nns:Foo a ns:Bar ;\n"));
  }
  #[test]
  fn serialize_missing_class_0() {
    let mut graph = Graph::new();
    graph.insert_node(node("other/Lost1", "Lost1", "Lost")).unwrap();
    graph.insert_node(node("Foo1", "Foo1", "Bar")).unwrap();
    graph.insert_node(node("Bar", "Bar", "Resource")).unwrap();
    graph.insert_edge(edge("_Lost1#Lost", "other/Lost1", "other/Lost", "#type")).unwrap();
    graph.insert_edge(edge("_Foo1#Bar", "Foo1", "Bar", "#type")).unwrap();
    let doc = serialize(&graph, &Config::default());
    assert_eq!(doc.instance_count, 1);
    assert!(!doc.text.contains("Lost1"));
    /* The namespace comes from the first subject that resolved */
    assert!(doc.text.starts_with("@prefix ns: <http://a.org/ns/> .\n"));
    assert_eq!(doc.warnings, vec![Warning::MissingNode{
      edge: Some("_Lost1#Lost".to_string()),
      node: iri("other/Lost"),
    }]);
  }
  #[test]
  fn serialize_missing_subject_0() {
    let mut graph = foo_graph();
    graph.insert_edge(edge("_Ghost1#Bar", "Ghost1", "Bar", "#type")).unwrap();
    let doc = serialize(&graph, &Config::default());
    assert_eq!(doc.instance_count, 1);
    assert_eq!(doc.warnings, vec![Warning::MissingNode{
      edge: Some("_Ghost1#Bar".to_string()),
      node: iri("Ghost1"),
    }]);
  }
  #[test]
  fn serialize_missing_target_0() {
    let mut graph = foo_graph();
    graph.insert_edge(edge("_Foo1#gone", "Foo1", "Foo1/gone", "gone")).unwrap();
    let doc = serialize(&graph, &Config::default());
    assert!(doc.text.ends_with("\tns:size \"42\"^^xsd:integer ;\n\tns:gone ns: .\n"));
    assert_eq!(doc.warnings.len(), 1);
  }
  #[test]
  fn serialize_unlabeled_edge_0() {
    let mut graph = foo_graph();
    let mut unlabeled = edge("_Foo1#x", "Foo1", "Foo1/size", "");
    unlabeled.label = None;
    graph.insert_edge(unlabeled).unwrap();
    let doc = serialize(&graph, &Config::default());
    assert!(doc.text.contains("\tns:unknown \"42\"^^xsd:integer .\n"));
  }
  #[test]
  fn serialize_prefix_once_0() {
    let mut graph = foo_graph();
    graph.insert_node(Node::new("http://b.org/elsewhere/Baz1", "Baz1", "Baz")).unwrap();
    graph.insert_node(Node::new("http://b.org/elsewhere/Baz", "Baz", "Resource")).unwrap();
    graph.insert_edge(Edge::new(
      "_Baz1#Baz", "http://b.org/elsewhere/Baz1", "http://b.org/elsewhere/Baz", "#type"
    )).unwrap();
    let doc = serialize(&graph, &Config::default());
    assert_eq!(doc.instance_count, 2);
    assert_eq!(doc.text.matches("@prefix").count(), 5);
    assert!(!doc.text.contains("elsewhere:"));
    assert!(doc.text.contains("ns:Baz1 a ns:Baz ;\n"));
  }
  #[test]
  fn serialize_ignores_incoming_0() {
    let mut graph = foo_graph();
    graph.insert_node(node("Qux1", "Qux1", "Qux")).unwrap();
    graph.insert_edge(edge("_Qux1#likes", "Qux1", "Foo1", "likes")).unwrap();
    let doc = serialize(&graph, &Config::default());
    assert!(!doc.text.contains("likes"));
  }
  #[test]
  fn serialize_several_types_0() {
    let mut graph = foo_graph();
    graph.insert_node(node("Baz", "Baz", "Resource")).unwrap();
    graph.insert_edge(edge("_Foo1#Baz", "Foo1", "Baz", "#type")).unwrap();
    let doc = serialize(&graph, &Config::default());
    /* One block per typing edge, neither listing the other class */
    assert_eq!(doc.instance_count, 2);
    assert!(doc.text.ends_with("\
ns:Foo1 a ns:Bar ;
\tns:size \"42\"^^xsd:integer .


ns:Foo1 a ns:Baz ;
\tns:size \"42\"^^xsd:integer .
"));
  }
  #[test]
  fn serialize_custom_type_label_0() {
    let mut graph = foo_graph();
    graph.insert_edge(edge("_Foo1#Bar2", "Foo1", "Bar", "rdf:type")).unwrap();
    let config = Config { type_label: "rdf:type".into(), ..Config::default() };
    let doc = serialize(&graph, &config);
    assert_eq!(doc.instance_count, 1);
    /* Under this config "#type" is just another property */
    assert!(doc.text.contains("\tns:#type ns:Bar ;\n"));
  }
  #[test]
  fn serialize_no_prefix_0() {
    let mut graph = Graph::new();
    graph.insert_edge(edge("_A#B", "A", "B", "#type")).unwrap();
    let doc = serialize(&graph, &Config::default());
    assert_eq!(doc.instance_count, 0);
    assert_eq!(doc.warnings.last(), Some(&Warning::NoPrefixDerivable));
    assert_eq!(doc.warnings.len(), 2);
  }
  #[test]
  fn serialize_random_0() {
    use rand::Rng;
    let mut rng = rand::thread_rng();
    for _ in 0..20 {
      let mut graph = Graph::new();
      let classes = 3;
      let subjects = rng.gen_range(1, 30);
      for c in 0..classes {
        graph.insert_node(node(&format!("C{}", c), &format!("C{}", c), "Resource")).unwrap();
      }
      let mut resolvable = 0;
      let mut expected_lines = 0;
      for s in 0..subjects {
        let name = format!("S{}", s);
        let present = s == 0 || rng.gen_bool(0.8);
        if present {
          graph.insert_node(node(&name, &name, "Thing")).unwrap();
          resolvable += 1;
        }
        let class = format!("C{}", rng.gen_range(0, classes));
        graph.insert_edge(edge(&format!("_{}#type", name), &name, &class, "#type")).unwrap();
        for p in 0..rng.gen_range(1, 5) {
          let lit = format!("{}/p{}", name, p);
          graph.insert_node(node(&lit, "v", "xsd:string")).unwrap();
          graph.insert_edge(edge(&format!("_{}#p{}", name, p), &name, &lit, "p")).unwrap();
          if present { expected_lines += 1; }
        }
      }
      let doc = serialize(&graph, &Config::default());
      assert_eq!(doc.instance_count, resolvable);
      assert_eq!(doc.text.matches(" a ns:C").count(), resolvable);
      assert_eq!(doc.text.matches("\tns:p ").count(), expected_lines);
      assert_eq!(doc.warnings.len(), subjects - resolvable);
    }
  }
  #[test]
  fn describe_instance_0() {
    let mut graph = foo_graph();
    graph.insert_edge(edge("_Foo1#gone", "Foo1", "Foo1/gone", "gone")).unwrap();
    let described = describe_instance(&graph, &iri("Foo1"), &Config::default()).unwrap();
    assert_eq!(described, Instance {
      name: "Bar".to_string(),
      properties: vec![InstanceProperty {
        name: "size".to_string(),
        value: "42".to_string(),
        data_type: "xsd:integer".to_string(),
      }],
    });
  }
  #[test]
  fn describe_instance_none_0() {
    let graph = foo_graph();
    assert_eq!(describe_instance(&graph, &iri("Bar"), &Config::default()), None);
    assert_eq!(describe_instance(&graph, &iri("Nope"), &Config::default()), None);
  }
  #[test]
  fn describe_instance_untyped_0() {
    let graph = foo_graph();
    /* Literal nodes have no outgoing edges: nameless and empty */
    let described = describe_instance(&graph, &iri("Foo1/size"), &Config::default()).unwrap();
    assert_eq!(described, Instance::default());
  }
}
