//! The field list the emitters work from.
//!
//! Plain fields map one to one. The members of a real oneof collapse into a
//! single holder field, placed where the oneof's first member was declared,
//! that carries every member as a variant.

use gocopy_ir::{GoIdent, GoType, Message};

use crate::{error::Result, resolver::Resolver};

/// An accessor method: name and result type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Getter {
    pub name: String,
    pub result: GoType,
}

impl Getter {
    pub fn new(name: impl Into<String>, result: GoType) -> Self {
        Self {
            name: name.into(),
            result,
        }
    }
}

/// A struct field as seen by the copy and clone emitters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelField {
    /// Go struct field name.
    pub name: String,
    pub getter: Getter,
    pub kind: ModelFieldKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelFieldKind {
    Plain {
        /// The struct field is `*T` while the getter returns `T`.
        presence_pointer: bool,
    },
    /// Holder of a oneof; the getter returns the oneof interface.
    OneOf { variants: Vec<OneOfVariant> },
}

/// One member of a oneof.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OneOfVariant {
    pub getter: Getter,
    /// Wrapper struct implementing the oneof interface.
    pub wrapper: GoIdent,
    /// Field of the wrapper holding the value.
    pub wrapper_field: String,
    pub default_test: DefaultTest,
}

/// How a variant's getter result is tested for being set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefaultTest {
    /// Compare against a declared zero value of the type.
    ZeroValue(GoType),
    /// Compare against nil; for types that do not support `==`.
    NonNil,
}

impl DefaultTest {
    pub fn for_type(ty: &GoType) -> Self {
        if ty.is_comparable() {
            Self::ZeroValue(ty.clone())
        } else {
            Self::NonNil
        }
    }
}

impl ModelField {
    pub fn presence_pointer(&self) -> bool {
        matches!(self.kind, ModelFieldKind::Plain { presence_pointer: true })
    }

    pub fn variants(&self) -> &[OneOfVariant] {
        match &self.kind {
            ModelFieldKind::OneOf { variants } => variants,
            ModelFieldKind::Plain { .. } => &[],
        }
    }
}

/// Build the field list of `message` in declaration order.
pub(crate) fn build_fields(message: &Message, resolver: &Resolver) -> Result<Vec<ModelField>> {
    let mut fields = Vec::with_capacity(message.fields.len());

    for (index, field) in message.fields.iter().enumerate() {
        let Some(oneof_index) = field.oneof else {
            let result = resolver.field_type(field)?;
            let presence_pointer = field.has_presence
                && !field.is_repeated()
                && !field.kind.is_message()
                && result.is_comparable();
            fields.push(ModelField {
                name: field.go_name.clone(),
                getter: Getter::new(field.getter_name(), result),
                kind: ModelFieldKind::Plain { presence_pointer },
            });
            continue;
        };

        let Some(oneof) = message.oneofs.get(oneof_index) else {
            continue;
        };
        if oneof.fields.first() != Some(&index) {
            continue;
        }

        let variants = oneof
            .fields
            .iter()
            .filter_map(|&i| message.fields.get(i))
            .map(|member| {
                let result = resolver.field_type(member)?;
                Ok(OneOfVariant {
                    default_test: DefaultTest::for_type(&result),
                    getter: Getter::new(member.getter_name(), result),
                    wrapper: member.wrapper_ident.clone(),
                    wrapper_field: member.go_name.clone(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        fields.push(ModelField {
            name: oneof.go_name.clone(),
            getter: Getter::new(
                oneof.getter_name(),
                GoType::named(oneof.interface_ident.clone()),
            ),
            kind: ModelFieldKind::OneOf { variants },
        });
    }

    Ok(fields)
}

#[cfg(test)]
mod tests {
    use gocopy_ir::GoImportPath;

    use super::*;
    use crate::resolver::tests::{address_file, field};

    #[test]
    fn test_default_test_per_type() {
        assert_eq!(
            DefaultTest::for_type(&GoType::String),
            DefaultTest::ZeroValue(GoType::String)
        );
        assert_eq!(DefaultTest::for_type(&GoType::Bytes), DefaultTest::NonNil);

        let msg = GoType::pointer(GoType::named(GoIdent::new("M", GoImportPath::from("p"))));
        assert_eq!(DefaultTest::for_type(&msg), DefaultTest::ZeroValue(msg.clone()));
    }

    #[test]
    fn test_oneof_collapses_into_holder() {
        let file = address_file();
        let mut resolver = Resolver::new();
        resolver.add_file(&file);

        let fields = build_fields(&file.messages[0], &resolver).unwrap();
        let names: Vec<_> = fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["City", "Country", "Zip"]);

        let country = &fields[1];
        assert_eq!(country.getter.name, "GetCountry");
        assert_eq!(
            country.getter.result,
            GoType::named(GoIdent::new("isAddress_Country", "example.com/api".into()))
        );

        let variants = country.variants();
        assert_eq!(variants.len(), 3);
        assert_eq!(variants[0].getter, Getter::new("GetDomestic", GoType::Bool));
        assert_eq!(variants[0].wrapper.name, "Address_Domestic");
        assert_eq!(variants[0].wrapper_field, "Domestic");
        assert_eq!(variants[1].default_test, DefaultTest::ZeroValue(GoType::String));
        assert_eq!(variants[2].default_test, DefaultTest::NonNil);
    }

    #[test]
    fn test_presence_pointer() {
        let mut file = address_file();
        let mut count = field("count", "Count", gocopy_ir::FieldKind::Int32);
        count.has_presence = true;
        let mut data = field("data", "Data", gocopy_ir::FieldKind::Bytes);
        data.has_presence = true;
        file.messages[0].fields.extend([count, data]);

        let mut resolver = Resolver::new();
        resolver.add_file(&file);
        let fields = build_fields(&file.messages[0], &resolver).unwrap();

        let count = fields.iter().find(|f| f.name == "Count").unwrap();
        assert!(count.presence_pointer());
        assert_eq!(count.getter.result, GoType::Int32);

        let data = fields.iter().find(|f| f.name == "Data").unwrap();
        assert!(!data.presence_pointer());
        assert!(!fields[0].presence_pointer());
    }
}
