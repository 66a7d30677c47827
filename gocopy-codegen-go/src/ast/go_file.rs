//! GoFile abstraction for structured Go file generation.
//!
//! Provides a high-level API for generating Go files with
//! organized imports and body content.

use gocopy_codegen::{CodeBuilder, CodeFragment, Indent, Renderable};
use gocopy_ir::GoImportPath;

use super::Method;
use crate::types::GoTypes;

/// A structured representation of a Go file.
///
/// Organizes code into the file comment, package clause, imports and
/// methods. Imports are collected while method bodies spell their types
/// through [`GoFile::types`].
///
/// # Example
///
/// ```ignore
/// let mut file = GoFile::new("example.com/api".into(), "api")
///     .comment("Code generated by protoc-gen-go-copy. DO NOT EDIT.");
/// let ty = file.types().ident(&address);
/// file.add_method(Method::new("x", format!("*{}", ty), "Proto_ShallowClone"));
/// let source = file.render();
/// ```
#[derive(Debug, Clone)]
pub struct GoFile {
    package_name: String,
    comment: Option<String>,
    types: GoTypes,
    methods: Vec<Method>,
}

impl GoFile {
    /// Create an empty file of package `package_name` at `import_path`.
    pub fn new(import_path: GoImportPath, package_name: impl Into<String>) -> Self {
        let package_name = package_name.into();
        Self {
            types: GoTypes::new(import_path, &package_name),
            package_name,
            comment: None,
            methods: Vec::new(),
        }
    }

    /// Set the file comment placed above the package clause.
    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Get the type speller; types spelled through it are imported by this file.
    pub fn types(&mut self) -> &mut GoTypes {
        &mut self.types
    }

    pub fn add_method(&mut self, method: Method) {
        self.methods.push(method);
    }

    pub fn methods(&self) -> &[Method] {
        &self.methods
    }

    /// Render the file with Go indentation (tabs).
    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::new(Indent::GO);
        builder.emit(self);
        builder.build()
    }

    fn import_fragments(&self) -> Vec<CodeFragment> {
        let imports = self.types.imports();
        if imports.is_empty() {
            return Vec::new();
        }

        let entries = imports
            .sorted()
            .into_iter()
            .map(|(path, name)| CodeFragment::line(format!("{} \"{}\"", name, path)))
            .collect();

        vec![
            CodeFragment::blank(),
            CodeFragment::block("import (", entries, Some(")".to_string())),
        ]
    }
}

impl Renderable for GoFile {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();

        if let Some(comment) = &self.comment {
            fragments.push(CodeFragment::comment(comment));
            fragments.push(CodeFragment::blank());
        }
        fragments.push(CodeFragment::line(format!("package {}", self.package_name)));
        fragments.extend(self.import_fragments());

        for method in &self.methods {
            fragments.push(CodeFragment::blank());
            fragments.extend(method.to_fragments());
        }

        fragments
    }
}
