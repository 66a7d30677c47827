//! The plugin run: request in, generated files out.

use gocopy_codegen_go::{GenerateError, Generator, GeneratorConfig, Gofmt};
use gocopy_core::OutputFile;
use gocopy_protoc::{PluginParams, convert, strip_module_prefix};
use miette::Diagnostic;
use prost_types::compiler::CodeGeneratorRequest;
use thiserror::Error;

/// Anything that fails the whole run.
#[derive(Debug, Error, Diagnostic)]
pub(crate) enum PluginError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Protoc(#[from] gocopy_protoc::Error),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Generate(#[from] GenerateError),
}

impl PluginError {
    /// Print the error to stderr with its diagnostic code and help.
    pub(crate) fn report(self) {
        eprintln!("{:?}", miette::Report::new(self));
    }
}

pub(crate) fn generator_config(params: &PluginParams) -> GeneratorConfig {
    GeneratorConfig {
        generated_filename_suffix: params.generated_filename_suffix.clone(),
        shallow_copy_method: params.shallow_copy_method.clone(),
        shallow_clone_method: params.shallow_clone_method.clone(),
    }
}

/// Generate the output files for `request`.
///
/// `parameter` replaces the request's own parameter string when given.
pub(crate) fn run(
    request: &CodeGeneratorRequest,
    parameter: Option<&str>,
) -> Result<Vec<OutputFile>, PluginError> {
    let params = PluginParams::parse(parameter.unwrap_or(request.parameter()))?;
    let files = convert(request, &params)?;

    let mut generator = Generator::new(generator_config(&params));
    if params.gofmt {
        generator = generator.with_formatter(Gofmt::new());
    }
    let mut outputs = generator.generate(&files)?;

    if let Some(module) = &params.module {
        strip_module_prefix(&mut outputs, module)?;
    }

    tracing::debug!(
        files = outputs.len(),
        names = ?outputs.iter().map(OutputFile::name).collect::<Vec<_>>(),
        "plugin run complete"
    );
    Ok(outputs)
}
