use serde::Deserialize;

/// Primitive type names understood by the Thrift front end
pub const PRIMITIVE_TYPES: &[&str] = &[
    "bool", "byte", "i8", "i16", "i32", "i64", "int", "double", "string", "binary", "void",
];

/// Value type of a field, argument, return value, const or typedef
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawValueType")]
pub enum ValueType {
    Primitive(String),
    List(Box<ValueType>),
    Set(Box<ValueType>),
    Map(Box<ValueType>, Box<ValueType>),
    NamedReference(String),
}

impl ValueType {
    /// Classify a bare type name as either a primitive or a named reference
    pub fn from_name(name: impl Into<String>) -> Self {
        let name = name.into();
        if PRIMITIVE_TYPES.contains(&name.as_str()) {
            ValueType::Primitive(name)
        } else {
            ValueType::NamedReference(name)
        }
    }

    pub fn named(name: impl Into<String>) -> Self {
        ValueType::NamedReference(name.into())
    }

    pub fn list(element: ValueType) -> Self {
        ValueType::List(Box::new(element))
    }

    pub fn set(element: ValueType) -> Self {
        ValueType::Set(Box::new(element))
    }

    pub fn map(key: ValueType, value: ValueType) -> Self {
        ValueType::Map(Box::new(key), Box::new(value))
    }

    /// `true` for a bare name (primitive or reference), `false` for containers
    pub fn is_bare(&self) -> bool {
        matches!(self, ValueType::Primitive(_) | ValueType::NamedReference(_))
    }
}

// thrift-parser emits either a plain string or a `{ name: "list" | "set" | "map", ... }` object
#[derive(Deserialize)]
#[serde(untagged)]
enum RawValueType {
    Name(String),
    Compound(RawCompound),
}

#[derive(Deserialize)]
#[serde(tag = "name", rename_all = "lowercase")]
enum RawCompound {
    List {
        #[serde(rename = "valueType")]
        value_type: ValueType,
    },
    Set {
        #[serde(rename = "valueType")]
        value_type: ValueType,
    },
    Map {
        #[serde(rename = "keyType")]
        key_type: ValueType,
        #[serde(rename = "valueType")]
        value_type: ValueType,
    },
}

impl From<RawValueType> for ValueType {
    fn from(raw: RawValueType) -> Self {
        match raw {
            RawValueType::Name(name) => ValueType::from_name(name),
            RawValueType::Compound(RawCompound::List { value_type }) => ValueType::list(value_type),
            RawValueType::Compound(RawCompound::Set { value_type }) => ValueType::set(value_type),
            RawValueType::Compound(RawCompound::Map { key_type, value_type }) => {
                ValueType::map(key_type, value_type)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_classifies_bare_names() {
        assert_eq!(ValueType::from_name("i32"), ValueType::Primitive("i32".into()));
        assert_eq!(ValueType::from_name("Request"), ValueType::named("Request"));
        assert_eq!(ValueType::from_name("shared.Thing"), ValueType::named("shared.Thing"));
    }

    #[test]
    fn test_decodes_nested_containers() {
        let json = r#"{"name":"map","keyType":"string","valueType":{"name":"list","valueType":"Result"}}"#;
        let vt: ValueType = serde_json::from_str(json).unwrap();
        assert_eq!(
            vt,
            ValueType::map(
                ValueType::from_name("string"),
                ValueType::list(ValueType::named("Result"))
            )
        );
        assert!(!vt.is_bare());
    }

    #[test]
    fn test_rejects_unknown_compound_shape() {
        let json = r#"{"name":"tuple","valueType":"i32"}"#;
        assert!(serde_json::from_str::<ValueType>(json).is_err());
    }
}
