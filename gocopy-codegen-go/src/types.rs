//! Go type spelling relative to the file being generated.

use gocopy_codegen::ImportCollector;
use gocopy_core::{GO_KEYWORDS, GO_PREDECLARED, go_sanitized};
use gocopy_ir::{GoIdent, GoImportPath, GoType};

/// Local variable names used by emitted method bodies.
pub(crate) const EMITTED_LOCALS: &[&str] = &["x", "v", "c", "ok", "defaultValue"];

/// Spells Go types for one output file, collecting the imports they need.
#[derive(Debug, Clone)]
pub struct GoTypes {
    local: GoImportPath,
    imports: ImportCollector,
}

impl GoTypes {
    /// Create a type speller for a file of package `package_name` at `local`.
    pub fn new(local: GoImportPath, package_name: &str) -> Self {
        let imports = ImportCollector::new()
            .with_reserved(GO_KEYWORDS.iter().copied())
            .with_reserved(GO_PREDECLARED.iter().copied())
            .with_reserved(EMITTED_LOCALS.iter().copied())
            .with_reserved([package_name]);
        Self { local, imports }
    }

    /// Spell an identifier, qualified unless it belongs to the local package.
    pub fn ident(&mut self, ident: &GoIdent) -> String {
        if ident.import_path == self.local {
            return ident.name.clone();
        }
        let path = ident.import_path.as_str();
        let alias = self.imports.add(path, &go_sanitized(ident.import_path.base()));
        format!("{}.{}", alias, ident.name)
    }

    /// Spell a type.
    pub fn render(&mut self, ty: &GoType) -> String {
        match ty {
            GoType::Bytes => "[]byte".to_string(),
            GoType::Named(ident) => self.ident(ident),
            GoType::Pointer(inner) => format!("*{}", self.render(inner)),
            GoType::Slice(inner) => format!("[]{}", self.render(inner)),
            GoType::Map(key, value) => {
                let key = self.render(key);
                format!("map[{}]{}", key, self.render(value))
            }
            builtin => builtin.builtin_name().unwrap_or_default().to_string(),
        }
    }

    pub fn imports(&self) -> &ImportCollector {
        &self.imports
    }
}
