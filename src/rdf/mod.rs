pub mod builder;
pub mod datatype;
pub mod extractor;
pub mod parser;
