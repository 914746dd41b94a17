//! よく使用される型と関数のprelude
//!
//! ```rust
//! use thrift_ts::prelude::*;
//! ```

// パーサー関連
pub use crate::parser::{
    Field, FieldOption, IdlParser, JsonAstParser, Method, Schema, SchemaAst, Service, ValueType,
};

// コードジェネレータ関連
pub use crate::codegen::{Artifact, CodeGenerator, CompileOptions, TypeScriptGenerator};

// エラー型
pub use crate::error::CompileError;
pub use crate::parser::ParseError;

// メインエントリポイント
pub use crate::{ThriftTs, compile};
