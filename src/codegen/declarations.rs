//! Emitters for the declarations of a schema's shared types artifact

use convert_case::{Case, Casing};
use indexmap::IndexMap;
use tracing::trace;

use super::config::CompileOptions;
use super::types::{INT64_TYPE, map_value_type};
use super::values::{write_enum_value, write_value};
use super::writer::{SPACE, Writer};
use crate::parser::{Const, Enum, Field, Include, TypeDef, base_name};

/// Suffix of the shared types artifact, also used in import paths
pub const TYPES_SUFFIX: &str = "_types";

const CALLBACK_DECLARATION: &str = "type Callback<T, E> = (err: E, resp: T) => void;\n\n";

const INT64_MEMBERS: &[&str] = &[
    "constructor(o?: number | string): this;",
    "toString(): string;",
    "toJson(): string;",
];

fn display_name(name: &str, options: &CompileOptions) -> String {
    if options.camel_case_names {
        name.to_case(Case::Camel)
    } else {
        name.to_string()
    }
}

/// The `Callback<T, E>` alias used by callback-style client methods
pub fn write_callback_type(w: &mut Writer) {
    w.indent_prefix();
    w.write(CALLBACK_DECLARATION);
}

/// The `Int64` declaration: a string alias or a wrapper interface
pub fn write_int64_type(w: &mut Writer, options: &CompileOptions) {
    w.indent_prefix();
    if options.int64_as_string {
        w.write_all(["type", SPACE, INT64_TYPE, SPACE, "=", SPACE, "string;", "\n"]);
        return;
    }
    w.write_all(["interface", SPACE, INT64_TYPE, SPACE]);
    w.write_block(false, |w| {
        w.increase_indent();
        for member in INT64_MEMBERS {
            w.indent_prefix();
            w.write_all([*member, "\n"]);
        }
        w.decrease_indent(false);
    });
    w.write("\n");
}

/// Declarations shared by every artifact
pub fn write_common_types(w: &mut Writer, options: &CompileOptions) {
    write_callback_type(w);
    write_int64_type(w, options);
}

/// Import path for an included schema, e.g. `../idl/shared.thrift` -> `./shared_types`
pub fn include_path(path: &str, options: &CompileOptions) -> String {
    let suffix = if options.generate_definition_style {
        TYPES_SUFFIX
    } else {
        ""
    };
    format!("./{}{}", base_name(path), suffix)
}

pub fn write_includes(w: &mut Writer, includes: &IndexMap<String, Include>, options: &CompileOptions) {
    for (alias, include) in includes {
        trace!(alias = %alias, path = %include.path, "emitting include");
        let path = include_path(&include.path, options);
        w.write_all([
            "import", SPACE, "*", SPACE, "as", SPACE, alias.as_str(), SPACE, "from", SPACE, "'",
            path.as_str(), "';\n",
        ]);
    }
}

pub fn write_field(w: &mut Writer, field: &Field, options: &CompileOptions) {
    w.indent_prefix();
    w.write(display_name(&field.name, options));
    if field.is_optional() {
        w.write("?");
    }
    w.write_all([":", SPACE]);
    w.write(map_value_type(&field.value_type));
    w.write_all([";", "\n"]);
}

fn write_fields(w: &mut Writer, fields: &[Field], options: &CompileOptions) {
    for field in fields {
        write_field(w, field, options);
    }
}

/// `{ fields }` body of a class, interface or type alias
fn write_struct_body(
    w: &mut Writer,
    fields: &[Field],
    options: &CompileOptions,
    extra: impl FnOnce(&mut Writer),
) {
    w.write_block(false, |w| {
        w.increase_indent();
        write_fields(w, fields, options);
        extra(w);
        w.decrease_indent(false);
    });
}

/// Struct as a class with an options-object constructor, or as an interface
pub fn write_struct(w: &mut Writer, name: &str, fields: &[Field], options: &CompileOptions) {
    trace!(name, fields = fields.len(), "emitting struct");
    w.write_export(|w| {
        if !options.generate_definition_style {
            w.write_all(["interface", SPACE, name, SPACE]);
            write_struct_body(w, fields, options, |_| {});
            w.write("\n");
            return;
        }

        w.write_all(["class", SPACE, name, SPACE]);
        write_struct_body(w, fields, options, |w| {
            w.write("\n");
            w.indent_prefix();
            w.write("constructor");
            w.write_parenthesized(|w| {
                w.write_all(["arg?", ":", SPACE]);
                w.write_block(true, |w| {
                    w.increase_indent();
                    write_fields(w, fields, options);
                    w.decrease_indent(false);
                });
            });
            w.write_all([";", "\n"]);
        });
        w.write("\n");
    });
}

/// Union as an alternation of single-field object shapes.
///
/// Each alternative only names its own field; other members are not
/// excluded, so this is weaker than a strict one-of.
pub fn write_union(w: &mut Writer, name: &str, fields: &[Field], options: &CompileOptions) {
    trace!(name, members = fields.len(), "emitting union");
    w.write_export(|w| {
        w.write_all(["type", SPACE, name, SPACE, "=", SPACE]);
        if fields.is_empty() {
            w.write("never");
        }
        for (i, field) in fields.iter().enumerate() {
            if i > 0 {
                w.write_all([SPACE, "|", SPACE]);
            }
            w.write_all(["{", SPACE]);
            w.write(display_name(&field.name, options));
            if field.is_optional() {
                w.write("?");
            }
            w.write_all([":", SPACE]);
            w.write(map_value_type(&field.value_type));
            w.write_all([SPACE, "}"]);
        }
        w.write_all([";", "\n", "\n"]);
    });
}

/// Exception as a type alias with the struct's field list
pub fn write_exception(w: &mut Writer, name: &str, fields: &[Field], options: &CompileOptions) {
    trace!(name, fields = fields.len(), "emitting exception");
    w.write_export(|w| {
        w.write_all(["type", SPACE, name, SPACE, "=", SPACE]);
        write_struct_body(w, fields, options, |_| {});
        w.write("\n");
    });
}

pub fn write_enum(w: &mut Writer, name: &str, def: &Enum, options: &CompileOptions) {
    trace!(name, items = def.items.len(), "emitting enum");
    w.write_export(|w| {
        w.write_all(["enum", SPACE, name, SPACE]);
        w.write_block(false, |w| {
            w.increase_indent();
            for item in &def.items {
                w.indent_prefix();
                w.write(display_name(&item.name, options));
                if let Some(value) = &item.value {
                    w.write_all([SPACE, "=", SPACE]);
                    write_enum_value(w, value);
                }
                w.write(",\n");
            }
            w.decrease_indent(false);
        });
        w.write("\n");
    });
}

/// Bare-typed consts are initialized; container-typed consts are only declared
pub fn write_const(w: &mut Writer, name: &str, def: &Const) {
    trace!(name, "emitting const");
    w.write_export(|w| {
        w.write_all(["const", SPACE, name]);
        if def.value_type.is_bare() {
            w.write_all([SPACE, "=", SPACE]);
            write_value(w, &def.value);
        } else {
            w.write_all([":", SPACE]);
            w.write(map_value_type(&def.value_type));
        }
        w.write(";\n");
    });
}

pub fn write_typedef(w: &mut Writer, name: &str, def: &TypeDef) {
    trace!(name, "emitting typedef");
    w.write_export(|w| {
        w.write_all(["type", SPACE, name, SPACE, "=", SPACE]);
        w.write(map_value_type(&def.value_type));
        w.write(";\n");
    });
}
