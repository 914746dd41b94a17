//! Mapping from schema value types to TypeScript type expressions

use crate::parser::ValueType;

/// Name of the 64-bit integer type declared at the top of every artifact
pub const INT64_TYPE: &str = "Int64";

/// Map a primitive type name to its TypeScript counterpart.
///
/// `None` means the name is not a primitive and is copied through as a
/// reference to a named type.
pub fn map_primitive(name: &str) -> Option<&'static str> {
    match name {
        "bool" => Some("boolean"),
        "byte" | "i8" | "i16" | "i32" | "int" | "double" => Some("number"),
        // 実体は Int64 宣言側で string エイリアスかラッパー型かが決まる
        "i64" => Some(INT64_TYPE),
        "string" | "binary" => Some("string"),
        "void" => Some("void"),
        _ => None,
    }
}

/// Render a value type as a TypeScript type expression
pub fn map_value_type(vt: &ValueType) -> String {
    match vt {
        ValueType::Primitive(name) | ValueType::NamedReference(name) => {
            map_primitive(name).map(str::to_string).unwrap_or_else(|| name.clone())
        }
        ValueType::List(element) => format!("{}[]", map_value_type(element)),
        ValueType::Set(element) => format!("Set<{}>", map_value_type(element)),
        ValueType::Map(key, value) => {
            format!("Map<{}, {}>", map_value_type(key), map_value_type(value))
        }
    }
}

/// Render several value types as an alternation, e.g. `A | B | Error`
pub fn map_type_union<'a>(types: impl IntoIterator<Item = &'a ValueType>) -> String {
    types
        .into_iter()
        .map(map_value_type)
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Prefix bare capitalized references with `alias.`, recursing into containers.
///
/// Used for per-service artifacts, which import the declarations of their
/// own schema instead of declaring them.
pub fn qualify(vt: &ValueType, alias: &str) -> ValueType {
    match vt {
        ValueType::NamedReference(name) if needs_qualification(name) => {
            ValueType::NamedReference(format!("{alias}.{name}"))
        }
        ValueType::Primitive(_) | ValueType::NamedReference(_) => vt.clone(),
        ValueType::List(element) => ValueType::list(qualify(element, alias)),
        ValueType::Set(element) => ValueType::set(qualify(element, alias)),
        ValueType::Map(key, value) => ValueType::map(qualify(key, alias), qualify(value, alias)),
    }
}

fn needs_qualification(name: &str) -> bool {
    !name.contains('.') && name.chars().next().is_some_and(char::is_uppercase)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_primitive_table() {
        assert_eq!(map_primitive("bool"), Some("boolean"));
        for name in ["byte", "i8", "i16", "i32", "int", "double"] {
            assert_eq!(map_primitive(name), Some("number"), "{name}");
        }
        assert_eq!(map_primitive("i64"), Some("Int64"));
        assert_eq!(map_primitive("string"), Some("string"));
        assert_eq!(map_primitive("binary"), Some("string"));
        assert_eq!(map_primitive("Request"), None);
    }

    #[test]
    fn test_containers() {
        let vt = ValueType::map(
            ValueType::from_name("string"),
            ValueType::list(ValueType::set(ValueType::from_name("i64"))),
        );
        assert_eq!(map_value_type(&vt), "Map<string, Set<Int64>[]>");
    }

    #[test]
    fn test_unknown_names_pass_through() {
        assert_eq!(map_value_type(&ValueType::named("shared.Thing")), "shared.Thing");
        assert_eq!(map_value_type(&ValueType::named("Status")), "Status");
    }

    #[test]
    fn test_type_union() {
        let types = [ValueType::named("NotFound"), ValueType::named("Error")];
        assert_eq!(map_type_union(&types), "NotFound | Error");
    }

    #[test]
    fn test_qualify_only_bare_capitalized_references() {
        let vt = ValueType::map(
            ValueType::named("Key"),
            ValueType::list(ValueType::named("shared.Thing")),
        );
        assert_eq!(map_value_type(&qualify(&vt, "test")), "Map<test.Key, shared.Thing[]>");

        assert_eq!(qualify(&ValueType::named("lowercase"), "test"), ValueType::named("lowercase"));
        assert_eq!(
            map_value_type(&qualify(&ValueType::from_name("i64"), "test")),
            "Int64"
        );
    }
}
