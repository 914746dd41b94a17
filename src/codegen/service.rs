//! Client surface of a service: one artifact per service in definition mode

use indexmap::IndexMap;
use tracing::{debug, trace};

use super::Artifact;
use super::config::CompileOptions;
use super::declarations::{write_common_types, write_includes};
use super::types::{map_type_union, map_value_type, qualify};
use super::writer::{SPACE, Writer};
use crate::error::Result;
use crate::parser::{Field, Include, Method, Service, ValueType};

/// Name of the client class in a per-service artifact
pub const CLIENT_CLASS: &str = "Client";

/// Emits the standalone artifact of one service.
///
/// Types of the originating schema are imported under `base_name`, so every
/// bare capitalized reference is rewritten to `base_name.Type`.
pub struct ServiceEmitter<'a> {
    base_name: &'a str,
    service_name: &'a str,
    service: &'a Service,
    includes: &'a IndexMap<String, Include>,
    options: &'a CompileOptions,
}

impl<'a> ServiceEmitter<'a> {
    pub fn new(
        base_name: &'a str,
        service_name: &'a str,
        service: &'a Service,
        includes: &'a IndexMap<String, Include>,
        options: &'a CompileOptions,
    ) -> Self {
        Self {
            base_name,
            service_name,
            service,
            includes,
            options,
        }
    }

    pub fn filename(&self) -> String {
        format!("{}.d.ts", self.service_name)
    }

    pub fn emit(&self) -> Result<Artifact> {
        if let Some(parent) = &self.service.extends {
            debug!(
                service = self.service_name,
                extends = %parent,
                "inherited methods are not emitted into the client"
            );
        }

        let mut w = Writer::new(self.options.indent_style());
        write_includes(&mut w, self.includes, self.options);
        write_common_types(&mut w, self.options);
        w.write_export(|w| write_client_class(w, CLIENT_CLASS, self.service, Some(self.base_name)));

        let filename = self.filename();
        let content = w.finish(&filename)?;
        Ok(Artifact { filename, content })
    }
}

/// Class holding two overloads per method, methods separated by a blank line.
///
/// With a `qualifier`, references are resolved against that import alias.
pub fn write_client_class(
    w: &mut Writer,
    class_name: &str,
    service: &Service,
    qualifier: Option<&str>,
) {
    w.write_all(["class", SPACE, class_name, SPACE]);
    w.write_block(false, |w| {
        w.increase_indent();
        for (i, method) in service.functions.values().enumerate() {
            if i > 0 {
                w.write("\n");
            }
            write_method(w, method, qualifier);
        }
        w.decrease_indent(false);
    });
}

/// Parameter name for the synthesized callback, underscored until unique
pub fn callback_param_name(args: &[Field]) -> String {
    let mut name = String::from("callback");
    while args.iter().any(|arg| arg.name == name) {
        name.insert(0, '_');
    }
    name
}

fn resolve(vt: &ValueType, qualifier: Option<&str>) -> ValueType {
    match qualifier {
        Some(alias) => qualify(vt, alias),
        None => vt.clone(),
    }
}

fn write_method(w: &mut Writer, method: &Method, qualifier: Option<&str>) {
    trace!(method = %method.name, args = method.args.len(), "emitting client method");

    let return_type = map_value_type(&resolve(&method.return_type, qualifier));
    let args: Vec<(&str, String)> = method
        .args
        .iter()
        .map(|arg| (arg.name.as_str(), map_value_type(&resolve(&arg.value_type, qualifier))))
        .collect();
    let error_type = {
        let mut errors: Vec<ValueType> = method
            .throws
            .iter()
            .map(|e| resolve(&e.value_type, qualifier))
            .collect();
        errors.push(ValueType::named("Error"));
        map_type_union(&errors)
    };
    let callback = callback_param_name(&method.args);

    // コールバック形式
    w.indent_prefix();
    w.write(&method.name);
    w.write_parenthesized(|w| {
        write_args(w, &args);
        if !args.is_empty() {
            w.write_all([",", SPACE]);
        }
        w.write_all([callback.as_str(), ":", SPACE, "Callback<"]);
        w.write_all([return_type.as_str(), ",", SPACE, error_type.as_str(), ">"]);
    });
    w.write_all([":", SPACE, "void", ";", "\n"]);

    // Promise形式
    w.indent_prefix();
    w.write(&method.name);
    w.write_parenthesized(|w| write_args(w, &args));
    w.write_all([":", SPACE, "Promise<", return_type.as_str(), ">", ";", "\n"]);
}

fn write_args(w: &mut Writer, args: &[(&str, String)]) {
    for (i, (name, ty)) in args.iter().enumerate() {
        if i > 0 {
            w.write_all([",", SPACE]);
        }
        w.write_all([*name, ":", SPACE, ty.as_str()]);
    }
}
