//! Error types

use miette::Diagnostic;
use thiserror::Error;

use crate::parser::ParseError;

/// Compile errors
#[derive(Debug, Error, Diagnostic)]
pub enum CompileError {
    /// Parser failure, passed through unchanged
    #[error(transparent)]
    #[diagnostic(transparent)]
    Parse(#[from] ParseError),

    /// An emitter left a block open; this is a compiler bug, not bad input
    #[error("unbalanced blocks in `{artifact}`: {depth} indentation level(s) left open")]
    #[diagnostic(
        code(thrift_ts::codegen::unbalanced_blocks),
        help("every increase_indent inside a block must be matched by decrease_indent")
    )]
    UnbalancedBlocks { artifact: String, depth: usize },
}

/// Result type alias
pub type Result<T> = std::result::Result<T, CompileError>;
