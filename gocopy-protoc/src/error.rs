use miette::Diagnostic;
use thiserror::Error;

/// Result type for plugin protocol operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to decode CodeGeneratorRequest")]
    #[diagnostic(
        code(gocopy::decode_error),
        help("protoc-gen-go-copy expects a serialized CodeGeneratorRequest on stdin; run it via protoc")
    )]
    Decode {
        #[source]
        source: prost::DecodeError,
    },

    #[error("invalid plugin parameter: {message}")]
    #[diagnostic(
        code(gocopy::parameter),
        help(
            "supported parameters are generated_filename_suffix, shallow_copy_method, shallow_clone_method, paths, module, gofmt and M<file>=<import path>"
        )
    )]
    Parameter { message: String },

    #[error("unable to determine Go import path for \"{file}\"")]
    #[diagnostic(
        code(gocopy::missing_import_path),
        help(
            "add `option go_package = \"<import path>\";` to the file, or pass `M{file}=<import path>` as a plugin parameter"
        )
    )]
    MissingImportPath { file: String },

    #[error(
        "Go package {import_path} has inconsistent names {first} ({first_file}) and {second} ({second_file})"
    )]
    #[diagnostic(code(gocopy::package_name_conflict))]
    PackageNameConflict {
        import_path: String,
        first: String,
        first_file: String,
        second: String,
        second_file: String,
    },

    #[error("no descriptor for file to generate \"{file}\"")]
    #[diagnostic(code(gocopy::missing_file))]
    MissingFile { file: String },

    #[error("{file}: field {field} has no type name")]
    #[diagnostic(code(gocopy::missing_type_name))]
    MissingTypeName { file: String, field: String },

    #[error("{file}: generated file does not match prefix \"{module}\"")]
    #[diagnostic(
        code(gocopy::module_prefix),
        help("the module= parameter must be a prefix of every generated file's import path")
    )]
    ModulePrefix { file: String, module: String },
}

impl From<prost::DecodeError> for Error {
    fn from(source: prost::DecodeError) -> Self {
        Self::Decode { source }
    }
}
