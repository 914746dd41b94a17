use std::collections::HashSet;

use tracing::{debug, warn};

use super::config::CompileOptions;
use super::declarations::{
    TYPES_SUFFIX, write_common_types, write_const, write_enum, write_exception, write_includes,
    write_struct, write_typedef, write_union,
};
use super::service::{ServiceEmitter, write_client_class};
use super::writer::Writer;
use super::{Artifact, CodeGenerator};
use crate::error::Result;
use crate::parser::{Include, Schema};

/// TypeScript declaration generator
#[derive(Debug, Clone, Default)]
pub struct TypeScriptGenerator {
    options: CompileOptions,
}

impl TypeScriptGenerator {
    pub fn new(options: CompileOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &CompileOptions {
        &self.options
    }

    /// Name of the shared artifact holding the schema's declarations
    pub fn types_filename(&self, base_name: &str) -> String {
        if self.options.generate_definition_style {
            format!("{base_name}{TYPES_SUFFIX}.d.ts")
        } else {
            format!("{base_name}.ts")
        }
    }
}

impl CodeGenerator for TypeScriptGenerator {
    fn generate(&self, schema: &Schema) -> Result<Vec<Artifact>> {
        let base_name = schema.base_name();
        let ast = &schema.ast;
        let options = &self.options;
        debug!(schema = %schema.name, base_name, "compiling schema");

        let types_filename = self.types_filename(base_name);
        let mut artifacts = Vec::new();

        // サービスごとのクライアント定義を生成
        if let Some(services) = ast.services.as_ref().filter(|_| options.generate_definition_style) {
            let mut includes = ast.include.clone().unwrap_or_default();
            includes.insert(base_name.to_string(), Include::new(base_name));

            let mut seen = HashSet::from([types_filename.clone()]);
            for (name, service) in services {
                let emitter = ServiceEmitter::new(base_name, name, service, &includes, options);
                let artifact = emitter.emit()?;
                if !seen.insert(artifact.filename.clone()) {
                    warn!(
                        filename = %artifact.filename,
                        service = %name,
                        "artifact filename collides with an earlier artifact"
                    );
                }
                debug!(filename = %artifact.filename, bytes = artifact.content.len(), "service artifact ready");
                artifacts.push(artifact);
            }
        }

        let mut w = Writer::new(options.indent_style());
        write_common_types(&mut w, options);
        if let Some(includes) = &ast.include {
            write_includes(&mut w, includes, options);
        }
        if let Some(consts) = &ast.consts {
            for (name, def) in consts {
                write_const(&mut w, name, def);
            }
        }
        if let Some(typedefs) = &ast.typedef {
            for (name, def) in typedefs {
                write_typedef(&mut w, name, def);
            }
        }
        if let Some(enums) = &ast.enums {
            for (name, def) in enums {
                write_enum(&mut w, name, def, options);
            }
        }
        if let Some(structs) = &ast.structs {
            for (name, fields) in structs {
                write_struct(&mut w, name, fields, options);
            }
        }
        if let Some(unions) = &ast.unions {
            for (name, fields) in unions {
                write_union(&mut w, name, fields, options);
            }
        }
        if let Some(exceptions) = &ast.exceptions {
            for (name, fields) in exceptions {
                write_exception(&mut w, name, fields, options);
            }
        }
        // 分割しない場合はサービスを同じファイルに出力
        if !options.generate_definition_style {
            if let Some(services) = &ast.services {
                for (name, service) in services {
                    w.write_export(|w| write_client_class(w, name, service, None));
                    w.write("\n");
                }
            }
        }

        let content = w.finish(&types_filename)?;
        debug!(filename = %types_filename, bytes = content.len(), "types artifact ready");
        artifacts.push(Artifact {
            filename: types_filename,
            content,
        });

        Ok(artifacts)
    }
}
