use std::iter;

use gocopy_codegen::CodeFragment;
use gocopy_ir::GoIdent;

use crate::{ast::Method, model::ModelField, types::GoTypes};

/// Emit a nil-safe method returning a field-wise copy of the receiver.
///
/// Oneof holders are copied as their wrapper pointer, so the clone shares
/// the wrapper (and anything else reference typed) with the receiver.
pub fn shallow_clone(
    types: &mut GoTypes,
    method_name: &str,
    message: &GoIdent,
    fields: &[ModelField],
) -> Method {
    let ty = types.ident(message);

    let copy = iter::once(CodeFragment::line(format!("c = new({})", ty)))
        .chain(
            fields
                .iter()
                .map(|field| CodeFragment::line(format!("c.{0} = x.{0}", field.name))),
        )
        .collect();

    Method::new("x", format!("*{}", ty), method_name)
        .comment(format!(
            "{} returns a shallow copy of the receiver or nil if it's nil.",
            method_name
        ))
        .result("c", format!("*{}", ty))
        .body([
            CodeFragment::braced("if x != nil {", copy),
            CodeFragment::line("return"),
        ])
}

#[cfg(test)]
mod tests {
    use gocopy_ir::{GoImportPath, GoType};

    use super::*;
    use crate::model::{Getter, ModelFieldKind};

    fn plain(name: &str, result: GoType) -> ModelField {
        ModelField {
            name: name.to_string(),
            getter: Getter::new(format!("Get{}", name), result),
            kind: ModelFieldKind::Plain {
                presence_pointer: false,
            },
        }
    }

    #[test]
    fn test_clone_copies_every_field() {
        let mut types = GoTypes::new(GoImportPath::from("example.com/api"), "api");
        let address = GoIdent::new("Address", "example.com/api".into());
        let fields = [plain("City", GoType::String), plain("Zip", GoType::String)];

        let method = shallow_clone(&mut types, "Proto_ShallowClone", &address, &fields);
        assert_eq!(
            method.build(),
            "\
// Proto_ShallowClone returns a shallow copy of the receiver or nil if it's nil.
func (x *Address) Proto_ShallowClone() (c *Address) {
\tif x != nil {
\t\tc = new(Address)
\t\tc.City = x.City
\t\tc.Zip = x.Zip
\t}
\treturn
}
"
        );
    }

    #[test]
    fn test_clone_of_empty_message() {
        let mut types = GoTypes::new(GoImportPath::from("example.com/api"), "api");
        let empty = GoIdent::new("Empty", "example.com/api".into());

        let method = shallow_clone(&mut types, "Clone", &empty, &[]);
        assert!(method.build().contains("\tif x != nil {\n\t\tc = new(Empty)\n\t}\n\treturn\n"));
    }
}
