/*
  Reads Turtle text back into triples, resolving every prefixed
  name against its @prefix declaration. Used to check that what
  the builder wrote is Turtle a consumer can actually load.
*/

extern crate rio_turtle;
extern crate rio_api;

use crate::{RdfNode, RdfTriple, errors::ParserError};

pub fn parse_turtle(text: &str, base_iri: &str) -> Result<Vec<RdfTriple>, ParserError> {
  use rio_turtle::{TurtleParser, TurtleError};
  use rio_api::parser::TriplesParser;
  use rio_api::model::{
    NamedOrBlankNode,
    NamedNode,
    BlankNode,
    Term,
    Literal,
  };

  let mut triples: Vec<RdfTriple> = Vec::new();

  TurtleParser::new(text.as_bytes(), base_iri)?
    .parse_all(&mut |t| {
      let s = match t.subject {
        NamedOrBlankNode::NamedNode(NamedNode{ iri }) => RdfNode::Named{ iri: iri.to_string() },
        NamedOrBlankNode::BlankNode(BlankNode{ id }) => RdfNode::Blank{ id: id.to_string() },
      };
      let p = RdfNode::Named{ iri: t.predicate.iri.to_string() };
      let o = match t.object {
        Term::NamedNode(NamedNode{ iri }) => RdfNode::Named{ iri: iri.to_string() },
        Term::BlankNode(BlankNode{ id }) => RdfNode::Blank{ id: id.to_string() },
        Term::Literal(Literal::Simple{ value }) => RdfNode::RawLit{ val: value.to_string() },
        Term::Literal(Literal::LanguageTaggedString{ value, language }) => RdfNode::LangTaggedLit{
          val: value.to_string(),
          lang: language.to_string(),
        },
        Term::Literal(Literal::Typed{ value, datatype: NamedNode{ iri } }) => RdfNode::TypedLit{
          val: value.to_string(),
          datatype: iri.to_string(),
        },
      };
      triples.push([s, p, o]);
      Ok(()) as Result<(), TurtleError>
    })?;

  Ok(triples)
}
