//! Go identifiers and types.

use std::fmt;

/// A Go import path (e.g., `google.golang.org/protobuf/types/known/timestamppb`).
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GoImportPath(String);

impl GoImportPath {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the last path element (`a/b/c` -> `c`).
    pub fn base(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or(&self.0)
    }
}

impl fmt::Display for GoImportPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for GoImportPath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// A package-level Go identifier qualified by its import path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GoIdent {
    /// Unqualified identifier (e.g., `Address_Foreign`).
    pub name: String,
    /// Import path of the package declaring the identifier.
    pub import_path: GoImportPath,
}

impl GoIdent {
    pub fn new(name: impl Into<String>, import_path: GoImportPath) -> Self {
        Self {
            name: name.into(),
            import_path,
        }
    }
}

/// A Go type as it appears in generated code.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GoType {
    Bool,
    Int32,
    Int64,
    Uint32,
    Uint64,
    Float32,
    Float64,
    String,
    /// `[]byte`.
    Bytes,
    /// A declared type (enum, oneof interface, or message struct).
    Named(GoIdent),
    /// `*T`.
    Pointer(Box<GoType>),
    /// `[]T`.
    Slice(Box<GoType>),
    /// `map[K]V`.
    Map(Box<GoType>, Box<GoType>),
}

impl GoType {
    /// Create a pointer type.
    pub fn pointer(inner: GoType) -> Self {
        Self::Pointer(Box::new(inner))
    }

    /// Create a slice type.
    pub fn slice(inner: GoType) -> Self {
        Self::Slice(Box::new(inner))
    }

    /// Create a map type.
    pub fn map(key: GoType, value: GoType) -> Self {
        Self::Map(Box::new(key), Box::new(value))
    }

    /// Create a named type.
    pub fn named(ident: GoIdent) -> Self {
        Self::Named(ident)
    }

    /// Get the keyword spelling of a builtin type, if this is one.
    pub fn builtin_name(&self) -> Option<&'static str> {
        match self {
            Self::Bool => Some("bool"),
            Self::Int32 => Some("int32"),
            Self::Int64 => Some("int64"),
            Self::Uint32 => Some("uint32"),
            Self::Uint64 => Some("uint64"),
            Self::Float32 => Some("float32"),
            Self::Float64 => Some("float64"),
            Self::String => Some("string"),
            _ => None,
        }
    }

    /// Check whether values of this type support `==` in Go.
    ///
    /// Slices (including `[]byte`) and maps are only comparable to `nil`.
    pub fn is_comparable(&self) -> bool {
        !matches!(self, Self::Bytes | Self::Slice(_) | Self::Map(..))
    }
}
