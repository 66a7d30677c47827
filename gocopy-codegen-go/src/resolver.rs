//! Run-scoped registry of every message and enum seen so far.

use std::rc::Rc;

use gocopy_ir::{Field, FieldKind, File, GoIdent, GoType, Message};
use indexmap::IndexMap;

use crate::{
    error::{GenerateError, Result},
    model::{self, ModelField},
};

#[derive(Debug, Clone)]
struct RegisteredMessage {
    go_ident: GoIdent,
    /// Key and value kinds, for map entry messages.
    map_entry: Option<(FieldKind, FieldKind)>,
}

/// Resolves proto type names to Go types and caches message field lists.
///
/// Files are registered with [`Resolver::add_file`] in dependency order;
/// nothing is ever removed. One resolver lives for one generation run.
#[derive(Debug, Default)]
pub struct Resolver {
    messages: IndexMap<String, RegisteredMessage>,
    enums: IndexMap<String, GoIdent>,
    fields: IndexMap<String, Rc<[ModelField]>>,
}

impl Resolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register every message and enum declared in `file`, nested ones included.
    pub fn add_file(&mut self, file: &File) {
        for message in &file.messages {
            self.add_message(message);
        }
        for e in &file.enums {
            self.enums
                .entry(e.full_name.clone())
                .or_insert_with(|| e.go_ident.clone());
        }

        tracing::debug!(
            file = %file.proto_path,
            messages = self.messages.len(),
            enums = self.enums.len(),
            "registered file"
        );
    }

    fn add_message(&mut self, message: &Message) {
        self.messages
            .entry(message.full_name.clone())
            .or_insert_with(|| RegisteredMessage {
                go_ident: message.go_ident.clone(),
                map_entry: message
                    .map_entry_fields()
                    .map(|(key, value)| (key.kind.clone(), value.kind.clone())),
            });

        for nested in &message.messages {
            self.add_message(nested);
        }
        for e in &message.enums {
            self.enums
                .entry(e.full_name.clone())
                .or_insert_with(|| e.go_ident.clone());
        }
    }

    fn registered(&self, full_name: &str) -> Result<&RegisteredMessage> {
        self.messages
            .get(full_name)
            .ok_or_else(|| GenerateError::UnregisteredType {
                full_name: full_name.to_string(),
            })
    }

    /// Get the Go struct type of a registered message.
    pub fn message_type(&self, full_name: &str) -> Result<&GoIdent> {
        self.registered(full_name).map(|m| &m.go_ident)
    }

    /// Get the Go type of a registered enum.
    pub fn enum_type(&self, full_name: &str) -> Result<&GoIdent> {
        self.enums
            .get(full_name)
            .ok_or_else(|| GenerateError::UnregisteredType {
                full_name: full_name.to_string(),
            })
    }

    /// Get the Go type of a single value of `kind`.
    pub fn kind_type(&self, kind: &FieldKind) -> Result<GoType> {
        Ok(match kind {
            FieldKind::Bool => GoType::Bool,
            FieldKind::Int32 => GoType::Int32,
            FieldKind::Int64 => GoType::Int64,
            FieldKind::Uint32 => GoType::Uint32,
            FieldKind::Uint64 => GoType::Uint64,
            FieldKind::Float => GoType::Float32,
            FieldKind::Double => GoType::Float64,
            FieldKind::String => GoType::String,
            FieldKind::Bytes => GoType::Bytes,
            FieldKind::Enum(name) => GoType::named(self.enum_type(name)?.clone()),
            FieldKind::Message(name) => {
                GoType::pointer(GoType::named(self.message_type(name)?.clone()))
            }
        })
    }

    /// Get the type a field's getter returns.
    ///
    /// Repeated fields are slices, except repeated map entries, which are maps.
    pub fn field_type(&self, field: &Field) -> Result<GoType> {
        if !field.is_repeated() {
            return self.kind_type(&field.kind);
        }

        if let FieldKind::Message(name) = &field.kind {
            if let Some((key, value)) = &self.registered(name)?.map_entry {
                return Ok(GoType::map(self.kind_type(key)?, self.kind_type(value)?));
            }
        }

        Ok(GoType::slice(self.kind_type(&field.kind)?))
    }

    /// Get the field list of a registered message, computing it on first use.
    pub fn message_fields(&mut self, message: &Message) -> Result<Rc<[ModelField]>> {
        if let Some(fields) = self.fields.get(&message.full_name) {
            return Ok(Rc::clone(fields));
        }

        self.message_type(&message.full_name)?;
        let fields: Rc<[ModelField]> = model::build_fields(message, self)?.into();
        self.fields
            .insert(message.full_name.clone(), Rc::clone(&fields));

        tracing::trace!(message = %message.full_name, fields = fields.len(), "built field list");
        Ok(fields)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use gocopy_ir::{Cardinality, Enum, GoImportPath, Oneof};

    use super::*;

    pub(crate) fn field(name: &str, go_name: &str, kind: FieldKind) -> Field {
        Field {
            name: name.to_string(),
            go_name: go_name.to_string(),
            wrapper_ident: GoIdent::new(format!("Address_{}", go_name), "example.com/api".into()),
            kind,
            cardinality: Cardinality::Optional,
            has_presence: false,
            oneof: None,
        }
    }

    fn oneof_member(name: &str, go_name: &str, kind: FieldKind) -> Field {
        Field {
            oneof: Some(0),
            has_presence: true,
            ..field(name, go_name, kind)
        }
    }

    /// `api.Address { city, oneof country { domestic, foreign, raw }, zip }`
    pub(crate) fn address_file() -> File {
        let api = GoImportPath::from("example.com/api");
        File {
            proto_path: "api/address.proto".to_string(),
            generate: true,
            generated_filename_prefix: "example.com/api/address".to_string(),
            go_import_path: api.clone(),
            go_package_name: "api".to_string(),
            messages: vec![Message {
                full_name: "api.Address".to_string(),
                go_ident: GoIdent::new("Address", api.clone()),
                is_map_entry: false,
                fields: vec![
                    field("city", "City", FieldKind::String),
                    oneof_member("domestic", "Domestic", FieldKind::Bool),
                    oneof_member("foreign", "Foreign", FieldKind::String),
                    oneof_member("raw", "Raw", FieldKind::Bytes),
                    field("zip", "Zip", FieldKind::String),
                ],
                oneofs: vec![Oneof {
                    name: "country".to_string(),
                    go_name: "Country".to_string(),
                    interface_ident: GoIdent::new("isAddress_Country", api.clone()),
                    fields: vec![1, 2, 3],
                }],
                messages: Vec::new(),
                enums: Vec::new(),
            }],
            enums: vec![Enum {
                full_name: "api.Kind".to_string(),
                go_ident: GoIdent::new("Kind", api),
            }],
        }
    }

    fn map_entry(full_name: &str, go_name: &str, value: FieldKind) -> Message {
        Message {
            full_name: full_name.to_string(),
            go_ident: GoIdent::new(go_name, "example.com/api".into()),
            is_map_entry: true,
            fields: vec![
                field("key", "Key", FieldKind::String),
                field("value", "Value", value),
            ],
            oneofs: Vec::new(),
            messages: Vec::new(),
            enums: Vec::new(),
        }
    }

    #[test]
    fn test_unregistered_type() {
        let resolver = Resolver::new();
        let err = resolver.message_type("api.Address").unwrap_err();
        assert!(matches!(err, GenerateError::UnregisteredType { full_name } if full_name == "api.Address"));

        let err = resolver
            .kind_type(&FieldKind::Enum("api.Kind".to_string()))
            .unwrap_err();
        assert!(matches!(err, GenerateError::UnregisteredType { .. }));
    }

    #[test]
    fn test_registered_types() {
        let mut resolver = Resolver::new();
        resolver.add_file(&address_file());

        assert_eq!(resolver.message_type("api.Address").unwrap().name, "Address");
        assert_eq!(
            resolver
                .kind_type(&FieldKind::Enum("api.Kind".to_string()))
                .unwrap(),
            GoType::named(GoIdent::new("Kind", "example.com/api".into()))
        );
        assert_eq!(
            resolver
                .kind_type(&FieldKind::Message("api.Address".to_string()))
                .unwrap(),
            GoType::pointer(GoType::named(GoIdent::new("Address", "example.com/api".into())))
        );
    }

    #[test]
    fn test_repeated_and_map_field_types() {
        let mut file = address_file();
        file.messages[0].messages.push(map_entry(
            "api.Address.TagsEntry",
            "Address_TagsEntry",
            FieldKind::Message("api.Address".to_string()),
        ));

        let mut resolver = Resolver::new();
        resolver.add_file(&file);

        let tags = Field {
            cardinality: Cardinality::Repeated,
            ..field("tags", "Tags", FieldKind::Message("api.Address.TagsEntry".to_string()))
        };
        let address = GoType::pointer(GoType::named(GoIdent::new("Address", "example.com/api".into())));
        assert_eq!(
            resolver.field_type(&tags).unwrap(),
            GoType::map(GoType::String, address.clone())
        );

        let history = Field {
            cardinality: Cardinality::Repeated,
            ..field("history", "History", FieldKind::Message("api.Address".to_string()))
        };
        assert_eq!(resolver.field_type(&history).unwrap(), GoType::slice(address));

        let blobs = Field {
            cardinality: Cardinality::Repeated,
            ..field("blobs", "Blobs", FieldKind::Bytes)
        };
        assert_eq!(resolver.field_type(&blobs).unwrap(), GoType::slice(GoType::Bytes));
    }

    #[test]
    fn test_message_fields_are_cached() {
        let file = address_file();
        let mut resolver = Resolver::new();
        resolver.add_file(&file);

        let first = resolver.message_fields(&file.messages[0]).unwrap();
        let second = resolver.message_fields(&file.messages[0]).unwrap();
        assert!(Rc::ptr_eq(&first, &second));
        assert_eq!(first.len(), 3);
    }

    #[test]
    fn test_message_fields_requires_registration() {
        let file = address_file();
        let mut resolver = Resolver::new();

        let err = resolver.message_fields(&file.messages[0]).unwrap_err();
        assert!(matches!(err, GenerateError::UnregisteredType { .. }));
    }

    #[test]
    fn test_first_registration_wins() {
        let mut resolver = Resolver::new();
        resolver.add_file(&address_file());

        let mut other = address_file();
        other.messages[0].go_ident.name = "Other".to_string();
        resolver.add_file(&other);

        assert_eq!(resolver.message_type("api.Address").unwrap().name, "Address");
    }
}
