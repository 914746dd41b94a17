//! Append-only text buffer with indentation tracking
//!
//! One `Writer` backs exactly one artifact. Emitters drive it through
//! `write_block` / `write_parenthesized`, which keep indentation balanced
//! as long as every `increase_indent` inside a block body is matched by a
//! `decrease_indent`.

use super::config::IndentStyle;
use crate::error::CompileError;

pub const SPACE: &str = " ";

/// Writer that tracks indentation and buffers one artifact
#[derive(Debug)]
pub struct Writer {
    buffer: Vec<String>,
    indent: usize,
    unit: String,
    underflow: bool,
}

impl Writer {
    pub fn new(style: IndentStyle) -> Self {
        Self {
            buffer: Vec::new(),
            indent: 0,
            unit: style.unit(),
            underflow: false,
        }
    }

    /// Append one chunk verbatim
    pub fn write(&mut self, chunk: impl AsRef<str>) {
        self.buffer.push(chunk.as_ref().to_string());
    }

    /// Append several chunks verbatim, in order
    pub fn write_all<I, S>(&mut self, chunks: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for chunk in chunks {
            self.write(chunk);
        }
    }

    /// Write the indentation for the current depth
    pub fn indent_prefix(&mut self) {
        if self.indent > 0 {
            self.buffer.push(self.unit.repeat(self.indent));
        }
    }

    pub fn increase_indent(&mut self) {
        self.write("\n");
        self.indent += 1;
    }

    pub fn decrease_indent(&mut self, newline: bool) {
        if newline {
            self.write("\n");
        }
        match self.indent.checked_sub(1) {
            Some(indent) => self.indent = indent,
            // 対応する increase_indent がない
            None => self.underflow = true,
        }
    }

    /// `{`, body, indentation, `}`; a non-inline block ends with a newline
    pub fn write_block(&mut self, inline: bool, body: impl FnOnce(&mut Self)) {
        self.write("{");
        body(self);
        self.indent_prefix();
        self.write("}");
        if !inline {
            self.write("\n");
        }
    }

    /// `(`, body, `)` without touching indentation
    pub fn write_parenthesized(&mut self, body: impl FnOnce(&mut Self)) {
        self.write("(");
        body(self);
        self.write(")");
    }

    /// Indented `export ` followed by the declaration written by `body`
    pub fn write_export(&mut self, body: impl FnOnce(&mut Self)) {
        self.indent_prefix();
        self.write_all(["export", SPACE]);
        body(self);
    }

    pub fn depth(&self) -> usize {
        self.indent
    }

    /// Join the buffer into the artifact content
    pub fn finish(self, artifact: &str) -> Result<String, CompileError> {
        if self.indent != 0 || self.underflow {
            return Err(CompileError::UnbalancedBlocks {
                artifact: artifact.to_string(),
                depth: self.indent,
            });
        }
        Ok(self.buffer.concat())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn spaces() -> Writer {
        Writer::new(IndentStyle::Spaces(2))
    }

    #[test]
    fn test_new_writer_empty_output() {
        assert_eq!(spaces().finish("empty").unwrap(), "");
    }

    #[test]
    fn test_write_is_verbatim() {
        let mut w = spaces();
        w.write_all(["a", SPACE, "b\n"]);
        w.write(String::from("c"));
        assert_eq!(w.finish("t").unwrap(), "a b\nc");
    }

    #[test]
    fn test_nested_blocks() {
        let mut w = spaces();
        w.write("outer ");
        w.write_block(false, |w| {
            w.increase_indent();
            w.indent_prefix();
            w.write("inner: ");
            w.write_block(true, |w| {
                w.increase_indent();
                w.indent_prefix();
                w.write("x;\n");
                w.decrease_indent(false);
            });
            w.write(";\n");
            w.decrease_indent(false);
        });
        assert_eq!(
            w.finish("t").unwrap(),
            "outer {\n  inner: {\n    x;\n  };\n}\n"
        );
    }

    #[test]
    fn test_tab_indentation() {
        let mut w = Writer::new(IndentStyle::Tab);
        w.write_block(false, |w| {
            w.increase_indent();
            w.indent_prefix();
            w.write("a;");
            w.decrease_indent(true);
        });
        assert_eq!(w.finish("t").unwrap(), "{\n\ta;\n}\n");
    }

    #[test]
    fn test_parenthesized_keeps_depth() {
        let mut w = spaces();
        w.write("f");
        w.write_parenthesized(|w| w.write("a: number"));
        assert_eq!(w.depth(), 0);
        assert_eq!(w.finish("t").unwrap(), "f(a: number)");
    }

    #[test]
    fn test_export_prefix() {
        let mut w = spaces();
        w.write_export(|w| w.write("const A = 1;\n"));
        assert_eq!(w.finish("t").unwrap(), "export const A = 1;\n");
    }

    #[test]
    fn test_unbalanced_writer_fails_to_finish() {
        let mut w = spaces();
        w.increase_indent();
        let err = w.finish("broken.d.ts").unwrap_err();
        assert!(matches!(
            err,
            CompileError::UnbalancedBlocks { depth: 1, .. }
        ));
    }

    #[test]
    fn test_extra_decrease_fails_to_finish() {
        let mut w = spaces();
        w.write_block(false, |w| {
            w.increase_indent();
            w.decrease_indent(false);
            w.decrease_indent(false);
        });
        assert_eq!(w.depth(), 0);
        let err = w.finish("broken.d.ts").unwrap_err();
        assert!(matches!(
            err,
            CompileError::UnbalancedBlocks { depth: 0, .. }
        ));
    }
}
