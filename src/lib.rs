//! # thrift-ts
//!
//! Compiles Thrift schema ASTs into TypeScript declaration files.
//!
//! ## Features
//!
//! - **Static types**: structs, unions, exceptions, enums, consts and typedefs
//! - **Client surface**: one `Client` class per service with callback and
//!   promise overloads for every method
//! - **Split artifacts**: services live in their own file and import the
//!   schema's shared `<name>_types.d.ts`
//! - **Pluggable front end**: any [`IdlParser`] can supply the AST; the
//!   JSON AST of `thrift-parser` is supported out of the box
//!
//! ## Quick Start
//!
//! ```rust
//! use thrift_ts::{CompileOptions, ThriftTs};
//!
//! let ast = r#"{
//!     "struct": {
//!         "Request": [
//!             { "id": "1", "option": "required", "type": "string", "name": "query" },
//!             { "id": "2", "option": "optional", "type": "i32", "name": "page" }
//!         ]
//!     }
//! }"#;
//!
//! let compiler = ThriftTs::new().with_options(CompileOptions::new().with_tab_size(4));
//! let artifacts = compiler.compile_source("idl/search.thrift", ast.as_bytes()).unwrap();
//! assert_eq!(artifacts[0].filename, "search_types.d.ts");
//! assert!(artifacts[0].content.contains("page?: number;"));
//! ```
//!
//! The compiler never touches the filesystem: reading schemas, writing
//! artifacts and formatting the output are left to the caller.

pub mod codegen;
pub mod error;
pub mod parser;
pub mod prelude;

// Re-export commonly used types
pub use codegen::{Artifact, CodeGenerator, CompileOptions, TypeScriptGenerator};
pub use error::CompileError;
pub use parser::{IdlParser, JsonAstParser, ParseError, Schema, SchemaAst};

/// Compile one schema into its artifacts.
///
/// Per-service artifacts come first, the shared types artifact last.
pub fn compile(schema: &Schema, options: &CompileOptions) -> error::Result<Vec<Artifact>> {
    TypeScriptGenerator::new(options.clone()).generate(schema)
}

/// Main entry point: a parser front end paired with compile options
pub struct ThriftTs<P = JsonAstParser> {
    parser: P,
    options: CompileOptions,
}

impl ThriftTs<JsonAstParser> {
    /// Create a compiler reading `thrift-parser` JSON ASTs
    pub fn new() -> Self {
        Self::with_parser(JsonAstParser::new())
    }
}

impl<P: IdlParser> ThriftTs<P> {
    pub fn with_parser(parser: P) -> Self {
        Self {
            parser,
            options: CompileOptions::default(),
        }
    }

    pub fn with_options(mut self, options: CompileOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &CompileOptions {
        &self.options
    }

    /// Parse `content` and compile it; parse failures come back unchanged
    pub fn compile_source(&self, filename: &str, content: &[u8]) -> error::Result<Vec<Artifact>> {
        let ast = self.parser.parse(content)?;
        compile(&Schema::new(filename, ast), &self.options)
    }
}

impl Default for ThriftTs<JsonAstParser> {
    fn default() -> Self {
        Self::new()
    }
}
