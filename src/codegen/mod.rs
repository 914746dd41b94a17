use crate::error::Result;
use crate::parser::Schema;

pub mod config;
pub mod declarations;
pub mod service;
pub mod types;
pub mod typescript;
pub mod values;
pub mod writer;

pub use config::{CompileOptions, IndentStyle};
pub use typescript::TypeScriptGenerator;
pub use writer::Writer;

/// One generated output file, held in memory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub filename: String,
    pub content: String,
}

/// Trait for code generators
pub trait CodeGenerator {
    /// Generate every artifact of a parsed schema
    fn generate(&self, schema: &Schema) -> Result<Vec<Artifact>>;
}
