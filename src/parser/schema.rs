use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::{Number, Value};

use super::types::ValueType;

/// A schema file: its name on disk and the parsed AST
#[derive(Debug, Clone)]
pub struct Schema {
    pub name: String,
    pub ast: SchemaAst,
}

impl Schema {
    pub fn new(name: impl Into<String>, ast: SchemaAst) -> Self {
        Self {
            name: name.into(),
            ast,
        }
    }

    /// File name without directories and without the `.thrift` extension
    pub fn base_name(&self) -> &str {
        base_name(&self.name)
    }
}

/// Strip any directory prefix and the `.thrift` extension from a path
pub fn base_name(path: &str) -> &str {
    let file = path.rsplit(['/', '\\']).next().unwrap_or(path);
    file.strip_suffix(".thrift").unwrap_or(file)
}

/// Parsed schema representation. Map order is source order.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct SchemaAst {
    pub namespace: Option<IndexMap<String, Namespace>>,
    pub typedef: Option<IndexMap<String, TypeDef>>,
    pub include: Option<IndexMap<String, Include>>,
    #[serde(rename = "const")]
    pub consts: Option<IndexMap<String, Const>>,
    #[serde(rename = "enum")]
    pub enums: Option<IndexMap<String, Enum>>,
    #[serde(rename = "struct")]
    pub structs: Option<IndexMap<String, Vec<Field>>>,
    #[serde(rename = "union")]
    pub unions: Option<IndexMap<String, Vec<Field>>>,
    #[serde(rename = "exception")]
    pub exceptions: Option<IndexMap<String, Vec<Field>>>,
    #[serde(rename = "service")]
    pub services: Option<IndexMap<String, Service>>,
}

impl SchemaAst {
    pub fn has_services(&self) -> bool {
        self.services.as_ref().is_some_and(|s| !s.is_empty())
    }
}

/// Namespace declaration
#[derive(Debug, Clone, Deserialize)]
pub struct Namespace {
    #[serde(rename = "serviceName")]
    pub service_name: String,
}

/// Type definition
#[derive(Debug, Clone, Deserialize)]
pub struct TypeDef {
    #[serde(rename = "type")]
    pub value_type: ValueType,
}

/// Include of another schema file
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Include {
    pub path: String,
}

impl Include {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

/// Field requiredness
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldOption {
    #[default]
    Required,
    Optional,
}

/// Field definition, shared by structs, unions, exceptions and method arguments
#[derive(Debug, Clone, Deserialize)]
pub struct Field {
    pub name: String,
    #[serde(rename = "type")]
    pub value_type: ValueType,
    #[serde(default)]
    pub option: FieldOption,
}

impl Field {
    pub fn required(name: impl Into<String>, value_type: ValueType) -> Self {
        Self {
            name: name.into(),
            value_type,
            option: FieldOption::Required,
        }
    }

    pub fn optional(name: impl Into<String>, value_type: ValueType) -> Self {
        Self {
            option: FieldOption::Optional,
            ..Self::required(name, value_type)
        }
    }

    pub fn is_optional(&self) -> bool {
        self.option == FieldOption::Optional
    }
}

/// RPC method definition
#[derive(Debug, Clone, Deserialize)]
pub struct Method {
    pub name: String,
    #[serde(rename = "type")]
    pub return_type: ValueType,
    #[serde(default)]
    pub args: Vec<Field>,
    #[serde(default)]
    pub throws: Vec<Field>,
}

impl Method {
    pub fn new(name: impl Into<String>, return_type: ValueType) -> Self {
        Self {
            name: name.into(),
            return_type,
            args: Vec::new(),
            throws: Vec::new(),
        }
    }

    pub fn arg(mut self, field: Field) -> Self {
        self.args.push(field);
        self
    }

    pub fn throws(mut self, field: Field) -> Self {
        self.throws.push(field);
        self
    }
}

/// Service definition
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Service {
    #[serde(default)]
    pub functions: IndexMap<String, Method>,
    #[serde(default)]
    pub extends: Option<String>,
}

impl Service {
    pub fn with_method(mut self, method: Method) -> Self {
        self.functions.insert(method.name.clone(), method);
        self
    }
}

/// Constant definition
#[derive(Debug, Clone, Deserialize)]
pub struct Const {
    #[serde(rename = "type")]
    pub value_type: ValueType,
    pub value: ConstValue,
}

/// Literal value of a constant, decided once at decode time
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "Value")]
pub enum ConstValue {
    String(String),
    Number(Number),
    Boolean(bool),
    Sequence(Vec<ConstValue>),
    Mapping(IndexMap<String, ConstValue>),
}

impl TryFrom<Value> for ConstValue {
    type Error = String;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Ok(match value {
            Value::String(s) => ConstValue::String(s),
            Value::Number(n) => ConstValue::Number(n),
            Value::Bool(b) => ConstValue::Boolean(b),
            Value::Array(items) => ConstValue::Sequence(
                items
                    .into_iter()
                    .map(ConstValue::try_from)
                    .collect::<Result<_, _>>()?,
            ),
            Value::Object(entries) => ConstValue::Mapping(
                entries
                    .into_iter()
                    .map(|(k, v)| Ok((k, ConstValue::try_from(v)?)))
                    .collect::<Result<_, String>>()?,
            ),
            Value::Null => return Err("null is not a valid constant value".to_string()),
        })
    }
}

/// Enum definition
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Enum {
    #[serde(default)]
    pub items: Vec<EnumItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EnumItem {
    pub name: String,
    #[serde(default)]
    pub value: Option<EnumValue>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum EnumValue {
    Boolean(bool),
    Number(Number),
    String(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_base_name_strips_directories_and_extension() {
        for path in [
            "test.thrift",
            "./test.thrift",
            "/test/test.thrift",
            "./test/test.thrift",
            "../test.thrift",
            "../test/test.thrift",
            "test",
        ] {
            assert_eq!(base_name(path), "test", "path: {path}");
        }
        assert_eq!(base_name("idl\\shared.thrift"), "shared");
    }

    #[test]
    fn test_const_value_keeps_mapping_order() {
        let value: ConstValue = serde_json::from_str(r#"{"z": 1, "a": [true, "x"]}"#).unwrap();
        let ConstValue::Mapping(entries) = value else {
            panic!("expected mapping");
        };
        let keys: Vec<_> = entries.keys().cloned().collect();
        assert_eq!(keys, vec!["z", "a"]);
        assert_eq!(
            entries["a"],
            ConstValue::Sequence(vec![
                ConstValue::Boolean(true),
                ConstValue::String("x".into())
            ])
        );
    }

    #[test]
    fn test_null_const_value_is_rejected() {
        assert!(serde_json::from_str::<ConstValue>("null").is_err());
    }

    #[test]
    fn test_field_option_defaults_to_required() {
        let field: Field = serde_json::from_str(r#"{"id":"1","name":"query","type":"string"}"#).unwrap();
        assert!(!field.is_optional());
        assert_eq!(field.value_type, ValueType::from_name("string"));
    }

    #[test]
    fn test_method_ignores_declaration_irrelevant_keys() {
        let method: Method = serde_json::from_str(
            r#"{"type":"void","name":"ping","oneway":true,"args":[{"id":"1","name":"n","type":"i32","defaultValue":0}]}"#,
        )
        .unwrap();
        assert_eq!(method.name, "ping");
        assert_eq!(method.args.len(), 1);
        assert!(method.throws.is_empty());
    }
}
