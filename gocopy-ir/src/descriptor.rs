//! Descriptor views of the schema, with Go naming already applied.

use crate::types::{GoIdent, GoImportPath};

/// A `.proto` file as seen by the generator.
#[derive(Debug, Clone, PartialEq)]
pub struct File {
    /// Path of the `.proto` file, relative to the protoc include root.
    pub proto_path: String,
    /// Whether output is requested for this file (as opposed to being a dependency).
    pub generate: bool,
    /// Output filename without suffix (e.g., `example.com/api/address`).
    pub generated_filename_prefix: String,
    pub go_import_path: GoImportPath,
    pub go_package_name: String,
    /// Top-level messages in declaration order.
    pub messages: Vec<Message>,
    /// Top-level enums in declaration order.
    pub enums: Vec<Enum>,
}

/// A message declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    /// Fully-qualified protobuf name, without leading dot (e.g., `api.Address`).
    pub full_name: String,
    /// Go struct type generated for the message.
    pub go_ident: GoIdent,
    /// Synthetic `map<K, V>` entry; never user-facing.
    pub is_map_entry: bool,
    /// Fields in declaration order.
    pub fields: Vec<Field>,
    /// Real (non-synthetic) oneofs in declaration order.
    pub oneofs: Vec<Oneof>,
    /// Nested messages in declaration order.
    pub messages: Vec<Message>,
    /// Nested enums in declaration order.
    pub enums: Vec<Enum>,
}

impl Message {
    /// Find a field by its protobuf name.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Get the key and value fields of a map entry message.
    pub fn map_entry_fields(&self) -> Option<(&Field, &Field)> {
        if !self.is_map_entry {
            return None;
        }
        Some((self.field("key")?, self.field("value")?))
    }
}

/// A field declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// Protobuf field name.
    pub name: String,
    /// Go struct field name; the getter is `Get` + this.
    pub go_name: String,
    /// Oneof wrapper type for this field (`<Message>_<GoName>`).
    ///
    /// Only meaningful when [`Field::oneof`] is set.
    pub wrapper_ident: GoIdent,
    pub kind: FieldKind,
    pub cardinality: Cardinality,
    /// Explicit presence (proto2 singular, proto3 `optional`, messages).
    pub has_presence: bool,
    /// Index into the owning message's [`Message::oneofs`].
    pub oneof: Option<usize>,
}

impl Field {
    /// Get the accessor method name.
    pub fn getter_name(&self) -> String {
        format!("Get{}", self.go_name)
    }

    pub fn is_repeated(&self) -> bool {
        self.cardinality == Cardinality::Repeated
    }
}

/// Value kind of a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Bool,
    Int32,
    Int64,
    Uint32,
    Uint64,
    Float,
    Double,
    String,
    Bytes,
    /// Fully-qualified enum name.
    Enum(String),
    /// Fully-qualified message name (groups included).
    Message(String),
}

impl FieldKind {
    pub fn is_message(&self) -> bool {
        matches!(self, Self::Message(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    Optional,
    Required,
    Repeated,
}

/// A oneof declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct Oneof {
    /// Protobuf oneof name.
    pub name: String,
    /// Go name of the holder struct field; the getter is `Get` + this.
    pub go_name: String,
    /// Unexported interface implemented by every wrapper of this oneof.
    pub interface_ident: GoIdent,
    /// Indices into the owning message's [`Message::fields`], in declaration order.
    pub fields: Vec<usize>,
}

impl Oneof {
    /// Get the accessor method name.
    pub fn getter_name(&self) -> String {
        format!("Get{}", self.go_name)
    }
}

/// An enum declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enum {
    /// Fully-qualified protobuf name, without leading dot.
    pub full_name: String,
    pub go_ident: GoIdent,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(name: &str, go_name: &str, kind: FieldKind) -> Field {
        Field {
            name: name.to_string(),
            go_name: go_name.to_string(),
            wrapper_ident: GoIdent::new(format!("Entry_{}", go_name), "p".into()),
            kind,
            cardinality: Cardinality::Optional,
            has_presence: false,
            oneof: None,
        }
    }

    #[test]
    fn test_getter_names() {
        let f = field("city", "City", FieldKind::String);
        assert_eq!(f.getter_name(), "GetCity");

        let oneof = Oneof {
            name: "country".to_string(),
            go_name: "Country".to_string(),
            interface_ident: GoIdent::new("isAddress_Country", "p".into()),
            fields: vec![0],
        };
        assert_eq!(oneof.getter_name(), "GetCountry");
    }

    #[test]
    fn test_map_entry_fields() {
        let mut entry = Message {
            full_name: "p.M.LabelsEntry".to_string(),
            go_ident: GoIdent::new("M_LabelsEntry", "p".into()),
            is_map_entry: true,
            fields: vec![
                field("key", "Key", FieldKind::String),
                field("value", "Value", FieldKind::Int64),
            ],
            oneofs: Vec::new(),
            messages: Vec::new(),
            enums: Vec::new(),
        };

        let (key, value) = entry.map_entry_fields().unwrap();
        assert_eq!(key.kind, FieldKind::String);
        assert_eq!(value.kind, FieldKind::Int64);

        entry.is_map_entry = false;
        assert!(entry.map_entry_fields().is_none());
    }
}
