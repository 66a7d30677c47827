//! Go method builder.

use gocopy_codegen::{CodeBuilder, CodeFragment, Renderable};

/// A parameter or named result of a Go method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub name: String,
    pub ty: String,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }

    fn format(&self) -> String {
        if self.name.is_empty() {
            self.ty.clone()
        } else {
            format!("{} {}", self.name, self.ty)
        }
    }
}

/// Builder for Go methods with a pointer receiver.
#[derive(Debug, Clone)]
pub struct Method {
    receiver: Param,
    name: String,
    comment: Option<String>,
    args: Vec<Param>,
    results: Vec<Param>,
    body: Vec<CodeFragment>,
}

impl Method {
    /// Create a method `name` on the receiver `receiver_name receiver_type`.
    pub fn new(
        receiver_name: impl Into<String>,
        receiver_type: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            receiver: Param::new(receiver_name, receiver_type),
            name: name.into(),
            comment: None,
            args: Vec::new(),
            results: Vec::new(),
            body: Vec::new(),
        }
    }

    /// Set the doc comment; each line becomes a `//` line.
    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn arg(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.args.push(Param::new(name, ty));
        self
    }

    /// Add a result; an empty name leaves it unnamed.
    pub fn result(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.results.push(Param::new(name, ty));
        self
    }

    pub fn body(mut self, fragments: impl IntoIterator<Item = CodeFragment>) -> Self {
        self.body.extend(fragments);
        self
    }

    fn signature(&self) -> String {
        let args = self
            .args
            .iter()
            .map(Param::format)
            .collect::<Vec<_>>()
            .join(", ");

        let results = match self.results.as_slice() {
            [] => String::new(),
            [single] if single.name.is_empty() => format!(" {}", single.ty),
            results => format!(
                " ({})",
                results
                    .iter()
                    .map(Param::format)
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
        };

        format!(
            "func ({}) {}({}){} {{",
            self.receiver.format(),
            self.name,
            args,
            results
        )
    }

    /// Build the method as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::go();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Method {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        if let Some(comment) = &self.comment {
            fragments.push(CodeFragment::comment(comment));
        }
        fragments.push(CodeFragment::braced(self.signature(), self.body.clone()));
        fragments
    }
}
