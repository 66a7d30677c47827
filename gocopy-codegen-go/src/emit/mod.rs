//! Method emitters.
//!
//! Each emitter turns a message's field list into one [`Method`](crate::ast::Method),
//! spelling types through the [`GoTypes`](crate::types::GoTypes) of the file
//! the method is added to.

mod shallow_clone;
mod shallow_copy;

pub use shallow_clone::shallow_clone;
pub use shallow_copy::shallow_copy;

use gocopy_codegen::CodeFragment;

use crate::{model::Getter, types::GoTypes};

/// `interface{ GetX() T }`: the capability of having one getter.
fn getter_interface(types: &mut GoTypes, getter: &Getter) -> String {
    format!(
        "interface{{ {}() {} }}",
        getter.name,
        types.render(&getter.result)
    )
}

/// `if <cond> { ... } else { ... }`
fn if_else(
    header: impl Into<String>,
    then: Vec<CodeFragment>,
    otherwise: Vec<CodeFragment>,
) -> CodeFragment {
    CodeFragment::sequence(vec![
        CodeFragment::block(header, then, None),
        CodeFragment::braced("} else {", otherwise),
    ])
}
