//! Conversion of protobuf descriptors into the generator's descriptor model.

use std::collections::HashSet;

use gocopy_core::go_camel_case;
use gocopy_ir::{Cardinality, Enum, Field, FieldKind, File, GoIdent, GoImportPath, Message, Oneof};
use prost_types::{
    DescriptorProto, EnumDescriptorProto, FieldDescriptorProto, FileDescriptorProto,
    compiler::CodeGeneratorRequest,
    field_descriptor_proto::{Label, Type},
};

use crate::{
    error::{Error, Result},
    naming::MessageNames,
    package::{GoPackage, generated_filename_prefix, resolve_packages},
    params::PluginParams,
};

/// Convert every file of a request, in request order.
///
/// Files listed in `file_to_generate` are flagged for generation; the rest are
/// dependencies, kept so that references into them can be resolved.
pub fn convert(request: &CodeGeneratorRequest, params: &PluginParams) -> Result<Vec<File>> {
    for name in &request.file_to_generate {
        if !request.proto_file.iter().any(|f| f.name() == name) {
            return Err(Error::MissingFile { file: name.clone() });
        }
    }

    let packages = resolve_packages(&request.proto_file, params)?;

    request
        .proto_file
        .iter()
        .zip(packages)
        .map(|(descriptor, package)| {
            let generate = request
                .file_to_generate
                .iter()
                .any(|name| name == descriptor.name());
            convert_file(descriptor, package, generate, params)
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Syntax {
    Proto2,
    Proto3,
    Editions,
}

impl Syntax {
    fn of(descriptor: &FileDescriptorProto) -> Self {
        match descriptor.syntax() {
            "proto3" => Self::Proto3,
            "editions" => Self::Editions,
            _ => Self::Proto2,
        }
    }
}

fn convert_file(
    descriptor: &FileDescriptorProto,
    package: GoPackage,
    generate: bool,
    params: &PluginParams,
) -> Result<File> {
    let ctx = FileContext {
        proto_path: descriptor.name(),
        proto_package: descriptor.package(),
        import_path: &package.import_path,
        syntax: Syntax::of(descriptor),
    };

    let messages = descriptor
        .message_type
        .iter()
        .map(|m| ctx.convert_message(m, None))
        .collect::<Result<Vec<_>>>()?;
    let enums = descriptor
        .enum_type
        .iter()
        .map(|e| ctx.convert_enum(e, None))
        .collect();

    tracing::debug!(
        file = descriptor.name(),
        import_path = %package.import_path,
        package = %package.name,
        generate,
        "converted file descriptor"
    );

    Ok(File {
        proto_path: descriptor.name().to_string(),
        generate,
        generated_filename_prefix: generated_filename_prefix(
            descriptor.name(),
            &package.import_path,
            params.paths,
        ),
        go_import_path: package.import_path,
        go_package_name: package.name,
        messages,
        enums,
    })
}

struct FileContext<'a> {
    proto_path: &'a str,
    proto_package: &'a str,
    import_path: &'a GoImportPath,
    syntax: Syntax,
}

impl FileContext<'_> {
    fn full_name(&self, relative: &str) -> String {
        if self.proto_package.is_empty() {
            relative.to_string()
        } else {
            format!("{}.{}", self.proto_package, relative)
        }
    }

    fn ident(&self, name: impl Into<String>) -> GoIdent {
        GoIdent::new(name, self.import_path.clone())
    }

    fn convert_enum(&self, descriptor: &EnumDescriptorProto, parent: Option<&str>) -> Enum {
        let relative = relative_name(parent, descriptor.name());
        Enum {
            full_name: self.full_name(&relative),
            go_ident: self.ident(go_camel_case(&relative)),
        }
    }

    fn convert_message(&self, descriptor: &DescriptorProto, parent: Option<&str>) -> Result<Message> {
        let relative = relative_name(parent, descriptor.name());
        let go_name = go_camel_case(&relative);

        let messages = descriptor
            .nested_type
            .iter()
            .map(|m| self.convert_message(m, Some(&relative)))
            .collect::<Result<Vec<_>>>()?;
        let enums: Vec<Enum> = descriptor
            .enum_type
            .iter()
            .map(|e| self.convert_enum(e, Some(&relative)))
            .collect();

        // proto3 `optional` fields live in a oneof of their own; those are not real oneofs
        let synthetic: HashSet<i32> = descriptor
            .field
            .iter()
            .filter(|f| f.proto3_optional())
            .filter_map(|f| f.oneof_index)
            .collect();

        let mut oneof_slots: Vec<Option<usize>> = vec![None; descriptor.oneof_decl.len()];
        let mut oneofs: Vec<Oneof> = Vec::new();
        for (index, decl) in descriptor.oneof_decl.iter().enumerate() {
            if synthetic.contains(&(index as i32)) {
                continue;
            }
            let oneof_go_name = go_camel_case(decl.name());
            oneof_slots[index] = Some(oneofs.len());
            oneofs.push(Oneof {
                name: decl.name().to_string(),
                interface_ident: self.ident(format!("is{}_{}", go_name, oneof_go_name)),
                go_name: oneof_go_name,
                fields: Vec::new(),
            });
        }

        let mut names = MessageNames::new();
        let mut named_oneofs: HashSet<i32> = HashSet::new();
        let mut fields = Vec::with_capacity(descriptor.field.len());

        for (index, field) in descriptor.field.iter().enumerate() {
            let field_go_name = names.claim(go_camel_case(field.name()), true);

            let slot = field
                .oneof_index
                .and_then(|i| oneof_slots.get(i as usize).copied().flatten());

            // the oneof name is claimed right after its first field
            if let Some(oneof_index) = field.oneof_index {
                if named_oneofs.insert(oneof_index) {
                    let decl_name = descriptor
                        .oneof_decl
                        .get(oneof_index as usize)
                        .map(|d| d.name())
                        .unwrap_or_default();
                    let oneof_go_name = names.claim(go_camel_case(decl_name), false);
                    if let Some(slot) = slot {
                        let oneof = &mut oneofs[slot];
                        oneof.interface_ident =
                            self.ident(format!("is{}_{}", go_name, oneof_go_name));
                        oneof.go_name = oneof_go_name;
                    }
                }
            }

            if let Some(slot) = slot {
                oneofs[slot].fields.push(index);
            }

            let kind = self.field_kind(field)?;
            fields.push(Field {
                name: field.name().to_string(),
                wrapper_ident: self.ident(wrapper_name(&go_name, &field_go_name, &messages, &enums)),
                go_name: field_go_name,
                has_presence: self.has_presence(field, &kind, slot.is_some()),
                cardinality: cardinality(field),
                kind,
                oneof: slot,
            });
        }

        let options = descriptor.options.as_ref();
        Ok(Message {
            full_name: self.full_name(&relative),
            go_ident: self.ident(go_name),
            is_map_entry: options.is_some_and(|o| o.map_entry()),
            fields,
            oneofs,
            messages,
            enums,
        })
    }

    fn field_kind(&self, field: &FieldDescriptorProto) -> Result<FieldKind> {
        Ok(match field.r#type() {
            Type::Double => FieldKind::Double,
            Type::Float => FieldKind::Float,
            Type::Int64 | Type::Sint64 | Type::Sfixed64 => FieldKind::Int64,
            Type::Uint64 | Type::Fixed64 => FieldKind::Uint64,
            Type::Int32 | Type::Sint32 | Type::Sfixed32 => FieldKind::Int32,
            Type::Uint32 | Type::Fixed32 => FieldKind::Uint32,
            Type::Bool => FieldKind::Bool,
            Type::String => FieldKind::String,
            Type::Bytes => FieldKind::Bytes,
            Type::Enum => FieldKind::Enum(self.type_name(field)?),
            Type::Message | Type::Group => FieldKind::Message(self.type_name(field)?),
        })
    }

    fn type_name(&self, field: &FieldDescriptorProto) -> Result<String> {
        let name = field.type_name().trim_start_matches('.');
        if name.is_empty() {
            return Err(Error::MissingTypeName {
                file: self.proto_path.to_string(),
                field: field.name().to_string(),
            });
        }
        Ok(name.to_string())
    }

    fn has_presence(&self, field: &FieldDescriptorProto, kind: &FieldKind, in_oneof: bool) -> bool {
        if field.label() == Label::Repeated {
            return false;
        }
        kind.is_message() || in_oneof || field.proto3_optional() || self.syntax != Syntax::Proto3
    }
}

fn relative_name(parent: Option<&str>, name: &str) -> String {
    match parent {
        Some(parent) => format!("{}.{}", parent, name),
        None => name.to_string(),
    }
}

fn cardinality(field: &FieldDescriptorProto) -> Cardinality {
    match field.label() {
        Label::Optional => Cardinality::Optional,
        Label::Required => Cardinality::Required,
        Label::Repeated => Cardinality::Repeated,
    }
}

/// Name of a oneof wrapper type, kept clear of nested type names.
fn wrapper_name(message: &str, field: &str, messages: &[Message], enums: &[Enum]) -> String {
    let mut name = format!("{}_{}", message, field);
    while messages.iter().any(|m| m.go_ident.name == name)
        || enums.iter().any(|e| e.go_ident.name == name)
    {
        name.push('_');
    }
    name
}
