use serde_json::Number;

use super::writer::{SPACE, Writer};
use crate::parser::{ConstValue, EnumValue};

/// Write a constant literal. Mappings become an inline object literal block.
pub fn write_value(w: &mut Writer, value: &ConstValue) {
    match value {
        ConstValue::String(s) => write_string(w, s),
        ConstValue::Number(n) => w.write(format_number(n)),
        ConstValue::Boolean(b) => w.write(if *b { "true" } else { "false" }),
        ConstValue::Sequence(items) => {
            w.write("[");
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    w.write_all([",", SPACE]);
                }
                write_value(w, item);
            }
            w.write("]");
        }
        ConstValue::Mapping(entries) => {
            w.write_block(true, |w| {
                w.increase_indent();
                for (key, entry) in entries {
                    w.indent_prefix();
                    w.write_all([key.as_str(), ":", SPACE]);
                    write_value(w, entry);
                    w.write(",\n");
                }
                w.decrease_indent(false);
            });
        }
    }
}

/// Right-hand side of an enum item, e.g. `1`, `'a'` or `true`
pub fn write_enum_value(w: &mut Writer, value: &EnumValue) {
    match value {
        EnumValue::String(s) => write_string(w, s),
        EnumValue::Number(n) => w.write(format_number(n)),
        EnumValue::Boolean(b) => w.write(if *b { "true" } else { "false" }),
    }
}

fn write_string(w: &mut Writer, s: &str) {
    w.write_all(["'", s, "'"]);
}

/// Canonical decimal form: integral values print without a fraction
pub fn format_number(n: &Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    match n.as_f64() {
        // -0 は 0 と表記する
        Some(f) if f == 0.0 => "0".to_string(),
        Some(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e21 => format!("{f:.0}"),
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codegen::config::IndentStyle;
    use pretty_assertions::assert_eq;

    fn render(value: &ConstValue) -> String {
        let mut w = Writer::new(IndentStyle::Spaces(2));
        write_value(&mut w, value);
        w.finish("t").unwrap()
    }

    fn parse(json: &str) -> ConstValue {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_scalars() {
        assert_eq!(render(&parse(r#""x""#)), "'x'");
        assert_eq!(render(&parse("42")), "42");
        assert_eq!(render(&parse("-7")), "-7");
        assert_eq!(render(&parse("1.5")), "1.5");
        assert_eq!(render(&parse("2.0")), "2");
        assert_eq!(render(&parse("false")), "false");
    }

    #[test]
    fn test_negative_zero_renders_as_zero() {
        assert_eq!(render(&parse("-0.0")), "0");
        assert_eq!(render(&parse("-0")), "0");
        assert_eq!(render(&parse("0.0")), "0");
    }

    #[test]
    fn test_sequence() {
        assert_eq!(render(&parse(r#"[1, "a", [2]]"#)), "[1, 'a', [2]]");
        assert_eq!(render(&parse("[]")), "[]");
    }

    #[test]
    fn test_mapping_is_an_inline_block() {
        let value = parse(r#"{"host": "localhost", "ports": [80, 443], "tls": {"on": true}}"#);
        assert_eq!(
            render(&value),
            "{\n  host: 'localhost',\n  ports: [80, 443],\n  tls: {\n    on: true,\n  },\n}"
        );
    }
}
