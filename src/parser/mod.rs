use miette::Diagnostic;
use thiserror::Error;

pub mod schema;
pub mod types;

pub use schema::*;
pub use types::*;

/// Parser errors for schema input
#[derive(Error, Diagnostic, Debug)]
pub enum ParseError {
    #[error("invalid schema AST at `{path}`: {source}")]
    #[diagnostic(
        code(thrift_ts::parse::json),
        help("the input must be the JSON AST emitted by thrift-parser")
    )]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("schema source is not valid UTF-8: {0}")]
    #[diagnostic(code(thrift_ts::parse::utf8))]
    Utf8(#[from] std::str::Utf8Error),
}

/// Front end turning raw schema bytes into an AST.
///
/// Any `Fn(&[u8]) -> Result<SchemaAst, ParseError>` is a parser, so a real
/// Thrift grammar can be plugged in without touching the compiler.
pub trait IdlParser {
    fn parse(&self, source: &[u8]) -> Result<SchemaAst, ParseError>;
}

impl<F> IdlParser for F
where
    F: Fn(&[u8]) -> Result<SchemaAst, ParseError>,
{
    fn parse(&self, source: &[u8]) -> Result<SchemaAst, ParseError> {
        self(source)
    }
}

/// Parser for the JSON AST document produced by `thrift-parser`
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonAstParser;

impl JsonAstParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse a JSON AST string into a SchemaAst
    pub fn parse_str(&self, input: &str) -> Result<SchemaAst, ParseError> {
        let de = &mut serde_json::Deserializer::from_str(input);
        serde_path_to_error::deserialize(de).map_err(|err| ParseError::Json {
            path: err.path().to_string(),
            source: err.into_inner(),
        })
    }
}

impl IdlParser for JsonAstParser {
    fn parse(&self, source: &[u8]) -> Result<SchemaAst, ParseError> {
        let input = std::str::from_utf8(source)?;
        self.parse_str(input)
    }
}
