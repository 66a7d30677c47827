//! Go identifier naming rules, matching those of protoc-gen-go.

/// Go language keywords.
pub const GO_KEYWORDS: &[&str] = &[
    "break",
    "case",
    "chan",
    "const",
    "continue",
    "default",
    "defer",
    "else",
    "fallthrough",
    "for",
    "func",
    "go",
    "goto",
    "if",
    "import",
    "interface",
    "map",
    "package",
    "range",
    "return",
    "select",
    "struct",
    "switch",
    "type",
    "var",
];

/// Identifiers predeclared in Go's universe block.
pub const GO_PREDECLARED: &[&str] = &[
    "any",
    "append",
    "bool",
    "byte",
    "cap",
    "clear",
    "close",
    "comparable",
    "complex",
    "complex128",
    "complex64",
    "copy",
    "delete",
    "error",
    "false",
    "float32",
    "float64",
    "imag",
    "int",
    "int16",
    "int32",
    "int64",
    "int8",
    "iota",
    "len",
    "make",
    "max",
    "min",
    "new",
    "nil",
    "panic",
    "print",
    "println",
    "real",
    "recover",
    "rune",
    "string",
    "true",
    "uint",
    "uint16",
    "uint32",
    "uint64",
    "uint8",
    "uintptr",
];

/// Check whether `s` is a Go keyword.
fn is_go_keyword(s: &str) -> bool {
    GO_KEYWORDS.contains(&s)
}

/// Convert a protobuf name to a Go exported identifier
/// (e.g., "foo_bar" -> "FooBar", "Outer.inner" -> "OuterInner", "Outer.Inner" -> "Outer_Inner").
///
/// A leading underscore becomes `X`, an underscore followed by a lowercase
/// letter is dropped and the letter upper-cased, and `.` becomes `_` unless it
/// is followed by a lowercase letter.
pub fn go_camel_case(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        let c = bytes[i];
        let next = bytes.get(i + 1).copied();
        let next_is_lower = next.is_some_and(|n| n.is_ascii_lowercase());

        match c {
            b'.' if next_is_lower => {}
            b'.' => out.push(b'_'),
            b'_' if i == 0 || bytes[i - 1] == b'.' => out.push(b'X'),
            b'_' if next_is_lower => {}
            b'0'..=b'9' => out.push(c),
            _ => {
                out.push(c.to_ascii_uppercase());
                while bytes.get(i + 1).is_some_and(|n| n.is_ascii_lowercase()) {
                    i += 1;
                    out.push(bytes[i]);
                }
            }
        }
        i += 1;
    }

    String::from_utf8(out).unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned())
}

/// Sanitize `s` into a valid Go identifier.
///
/// Characters other than letters and digits become `_`; a leading `_` is
/// prepended if the result is a keyword or does not start with a letter.
pub fn go_sanitized(s: &str) -> String {
    let mapped: String = s
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect();

    let starts_with_letter = mapped.chars().next().is_some_and(char::is_alphabetic);
    if is_go_keyword(&mapped) || !starts_with_letter {
        format!("_{}", mapped)
    } else {
        mapped
    }
}
