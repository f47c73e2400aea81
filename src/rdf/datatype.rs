/* The XML-Schema datatypes a node's value is written as a
  typed literal for. Any other type tag is treated as a reference. */
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum XsdType {
  String,
  Integer,
  Boolean,
  Decimal,
  Float,
  Double,
  DateTime,
  Time,
  Date,
  GYear,
  GMonthDay,
  AnyUri,
  LangString,
}

impl XsdType {
  pub const ALL: [XsdType; 13] = [
    XsdType::String,
    XsdType::Integer,
    XsdType::Boolean,
    XsdType::Decimal,
    XsdType::Float,
    XsdType::Double,
    XsdType::DateTime,
    XsdType::Time,
    XsdType::Date,
    XsdType::GYear,
    XsdType::GMonthDay,
    XsdType::AnyUri,
    XsdType::LangString,
  ];
  pub fn from_tag(tag: &str) -> Option<Self> {
    Self::ALL.iter().copied().find(|t| t.as_str() == tag)
  }
  pub fn as_str(&self) -> &'static str {
    use XsdType::*;
    match self {
      String => "xsd:string",
      Integer => "xsd:integer",
      Boolean => "xsd:boolean",
      Decimal => "xsd:decimal",
      Float => "xsd:float",
      Double => "xsd:double",
      DateTime => "xsd:dateTime",
      Time => "xsd:time",
      Date => "xsd:date",
      GYear => "xsd:gYear",
      GMonthDay => "xsd:gMonthDay",
      AnyUri => "xsd:anyURI",
      LangString => "xsd:langString",
    }
  }
}

impl std::fmt::Display for XsdType {
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    write!(f, "{}", self.as_str())
  }
}
