use miette::Diagnostic;
use thiserror::Error;

use crate::format::FormatError;

/// Result type for generation.
pub type Result<T> = std::result::Result<T, GenerateError>;

/// Errors that abort a generation run.
#[derive(Debug, Error, Diagnostic)]
pub enum GenerateError {
    /// A type was looked up before the file declaring it was registered.
    #[error("type {full_name} was never registered; its file must precede any file referencing it")]
    #[diagnostic(
        code(gocopy::unregistered_type),
        help("protoc lists dependencies before the files importing them; check the request's proto_file order")
    )]
    UnregisteredType { full_name: String },

    #[error("{path}: error in generated Go code: {source}:\n{}", .source.unformatted)]
    #[diagnostic(
        code(gocopy::format),
        help("the unformatted source follows the error; pass gofmt=false to skip the external formatter")
    )]
    Format {
        path: String,
        #[source]
        source: FormatError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_error_message() {
        let err = GenerateError::Format {
            path: "api/address.proto".to_string(),
            source: FormatError::new("3: unclosed '{'", "func f() {\n"),
        };
        assert_eq!(
            err.to_string(),
            "api/address.proto: error in generated Go code: 3: unclosed '{':\nfunc f() {\n"
        );
    }

    #[test]
    fn test_unregistered_type_message() {
        let err = GenerateError::UnregisteredType {
            full_name: "api.Missing".to_string(),
        };
        assert!(err.to_string().starts_with("type api.Missing was never registered"));
    }

    #[test]
    fn test_error_has_diagnostic_code() {
        let err = GenerateError::UnregisteredType {
            full_name: "api.Missing".to_string(),
        };
        let code = err.code().map(|c| c.to_string());
        assert_eq!(code.as_deref(), Some("gocopy::unregistered_type"));
    }
}
