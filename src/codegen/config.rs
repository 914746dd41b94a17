//! Compiler options
//!
//! Every option can be set from code through the `with_*` builders or read
//! from a JSON document using the same camelCase keys as the command line
//! tool that drives the compiler.

use serde::Deserialize;

/// Indentation unit written by the [`Writer`](super::writer::Writer)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndentStyle {
    /// One tab character per level
    Tab,
    /// `n` spaces per level
    Spaces(usize),
}

impl IndentStyle {
    pub fn unit(&self) -> String {
        match self {
            IndentStyle::Tab => "\t".to_string(),
            IndentStyle::Spaces(n) => " ".repeat(*n),
        }
    }
}

/// Compile options
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CompileOptions {
    /// Spaces per indent level when `space_as_tab` is set
    pub tab_size: usize,
    /// Indent with spaces instead of a tab character
    pub space_as_tab: bool,
    /// Declare `Int64` as a plain `string` alias instead of a wrapper type
    pub int64_as_string: bool,
    /// Split services into client artifacts and emit classes with constructors
    #[serde(alias = "definition")]
    pub generate_definition_style: bool,
    /// Convert field and enum item names to camelCase
    #[serde(alias = "camelCase")]
    pub camel_case_names: bool,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            tab_size: 2,
            space_as_tab: true,
            int64_as_string: false,
            generate_definition_style: true,
            camel_case_names: false,
        }
    }
}

impl CompileOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read options from a JSON document; absent keys keep their defaults
    pub fn from_json(input: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(input)
    }

    pub fn with_tab_size(mut self, tab_size: usize) -> Self {
        self.tab_size = tab_size;
        self
    }

    pub fn with_space_as_tab(mut self, space_as_tab: bool) -> Self {
        self.space_as_tab = space_as_tab;
        self
    }

    pub fn with_int64_as_string(mut self, int64_as_string: bool) -> Self {
        self.int64_as_string = int64_as_string;
        self
    }

    pub fn with_definition_style(mut self, definition: bool) -> Self {
        self.generate_definition_style = definition;
        self
    }

    pub fn with_camel_case_names(mut self, camel_case: bool) -> Self {
        self.camel_case_names = camel_case;
        self
    }

    pub fn indent_style(&self) -> IndentStyle {
        if self.space_as_tab {
            IndentStyle::Spaces(self.tab_size)
        } else {
            IndentStyle::Tab
        }
    }
}
