use gocopy_codegen::CodeFragment;
use gocopy_ir::GoIdent;

use super::{getter_interface, if_else};
use crate::{
    ast::Method,
    model::{DefaultTest, ModelField, ModelFieldKind, OneOfVariant},
    types::GoTypes,
};

/// Emit a method copying fields from an arbitrary value through its getters.
///
/// A value of the receiver's own type takes the direct path. Anything else is
/// checked one getter at a time; a missing getter leaves only its own field
/// untouched.
pub fn shallow_copy(
    types: &mut GoTypes,
    method_name: &str,
    message: &GoIdent,
    fields: &[ModelField],
) -> Method {
    let ty = format!("*{}", types.ident(message));

    let method = Method::new("x", ty.clone(), method_name)
        .comment(format!(
            "{} copies fields, from v to the receiver, using field getters.
Note that v is of an arbitrary type, which may implement any number of the
field getters, which are defined as any methods of the same signature as those
generated for the receiver type, with a name starting with Get.",
            method_name
        ))
        .arg("v", "interface{}");

    if fields.is_empty() {
        return method;
    }

    let exact = fields.iter().map(exact_copy).collect();
    let fallback = fields
        .iter()
        .map(|field| capability_copy(types, field))
        .collect();

    method.body([
        CodeFragment::line("switch v := v.(type) {"),
        CodeFragment::line(format!("case {}:", ty)),
        CodeFragment::indent(exact),
        CodeFragment::line("default:"),
        CodeFragment::indent(fallback),
        CodeFragment::line("}"),
    ])
}

fn exact_copy(field: &ModelField) -> CodeFragment {
    if field.presence_pointer() {
        // the getter would drop presence; `v` may still be a nil pointer
        return if_else(
            "if v != nil {",
            vec![CodeFragment::line(format!("x.{0} = v.{0}", field.name))],
            vec![CodeFragment::line(format!("x.{} = nil", field.name))],
        );
    }
    CodeFragment::line(format!("x.{} = v.{}()", field.name, field.getter.name))
}

fn capability_copy(types: &mut GoTypes, field: &ModelField) -> CodeFragment {
    let presence_pointer = match &field.kind {
        ModelFieldKind::Plain { presence_pointer } => *presence_pointer,
        ModelFieldKind::OneOf { variants } => {
            // variants are matched on the argument itself, never through the holder getter
            let choose = variants
                .iter()
                .map(|variant| variant_copy(types, &field.name, variant))
                .collect();
            return CodeFragment::sequence(vec![
                CodeFragment::line("func() {"),
                CodeFragment::indent(choose),
                CodeFragment::line("}()"),
            ]);
        }
    };

    let header = format!(
        "if v, ok := v.({}); ok {{",
        getter_interface(types, &field.getter)
    );
    let body = if presence_pointer {
        vec![
            CodeFragment::line(format!("v := v.{}()", field.getter.name)),
            CodeFragment::line(format!("x.{} = &v", field.name)),
        ]
    } else {
        vec![CodeFragment::line(format!(
            "x.{} = v.{}()",
            field.name, field.getter.name
        ))]
    };
    CodeFragment::braced(header, body)
}

/// Set the holder from the first variant whose getter returns a set value.
fn variant_copy(types: &mut GoTypes, holder: &str, variant: &OneOfVariant) -> CodeFragment {
    let getter = &variant.getter.name;
    let assign = vec![
        CodeFragment::line(format!(
            "x.{} = &{}{{{}: v}}",
            holder,
            types.ident(&variant.wrapper),
            variant.wrapper_field
        )),
        CodeFragment::line("return"),
    ];

    let test = match &variant.default_test {
        DefaultTest::ZeroValue(ty) => vec![
            CodeFragment::line(format!("var defaultValue {}", types.render(ty))),
            CodeFragment::braced(
                format!("if v := v.{}(); v != defaultValue {{", getter),
                assign,
            ),
        ],
        DefaultTest::NonNil => vec![CodeFragment::braced(
            format!("if v := v.{}(); v != nil {{", getter),
            assign,
        )],
    };

    CodeFragment::braced(
        format!(
            "if v, ok := v.({}); ok {{",
            getter_interface(types, &variant.getter)
        ),
        test,
    )
}
