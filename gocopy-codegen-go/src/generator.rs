use gocopy_core::OutputFile;
use gocopy_ir::{File, Message};

use crate::{
    ast::GoFile,
    config::GeneratorConfig,
    emit,
    error::{GenerateError, Result},
    format::{Formatter, SyntaxCheck},
    resolver::Resolver,
};

/// Go copy/clone generator for a set of `.proto` files.
///
/// Owns the resolver for the run: every file passed to
/// [`Generator::generate`] is registered before its messages are emitted,
/// so files must come in dependency order (as protoc supplies them).
pub struct Generator {
    config: GeneratorConfig,
    resolver: Resolver,
    formatter: Box<dyn Formatter>,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            config,
            resolver: Resolver::new(),
            formatter: Box::new(SyntaxCheck),
        }
    }

    /// Replace the formatting backend.
    pub fn with_formatter(mut self, formatter: impl Formatter + 'static) -> Self {
        self.formatter = Box::new(formatter);
        self
    }

    /// Generate one output file per file flagged for generation, in input order.
    pub fn generate(&mut self, files: &[File]) -> Result<Vec<OutputFile>> {
        let mut outputs = Vec::new();

        for file in files {
            self.resolver.add_file(file);

            if !file.generate {
                continue;
            }
            outputs.push(self.generate_file(file)?);
        }

        tracing::info!(files = outputs.len(), "generated Go copy methods");
        Ok(outputs)
    }

    fn generate_file(&mut self, file: &File) -> Result<OutputFile> {
        let filename = format!(
            "{}{}",
            file.generated_filename_prefix, self.config.generated_filename_suffix
        );
        let mut go_file = GoFile::new(file.go_import_path.clone(), file.go_package_name.clone())
            .comment(format!(
                "Code generated by protoc-gen-go-copy. DO NOT EDIT.\nsource: {}",
                file.proto_path
            ));

        for message in &file.messages {
            self.generate_message(&mut go_file, message)?;
        }

        let source = go_file.render();
        let content = self
            .formatter
            .format(&source)
            .map_err(|source| GenerateError::Format {
                path: file.proto_path.clone(),
                source,
            })?;

        tracing::debug!(
            file = %file.proto_path,
            output = %filename,
            methods = go_file.methods().len(),
            "generated file"
        );
        Ok(OutputFile::new(filename, content))
    }

    /// Emit the methods of `message`, then of its nested messages.
    fn generate_message(&mut self, go_file: &mut GoFile, message: &Message) -> Result<()> {
        if message.is_map_entry {
            tracing::trace!(message = %message.full_name, "skipping map entry");
            return Ok(());
        }

        let ident = self.resolver.message_type(&message.full_name)?.clone();
        let fields = self.resolver.message_fields(message)?;

        if self.config.copy_enabled() {
            let method = emit::shallow_copy(
                go_file.types(),
                &self.config.shallow_copy_method,
                &ident,
                &fields,
            );
            go_file.add_method(method);
        }

        if self.config.clone_enabled() {
            let method = emit::shallow_clone(
                go_file.types(),
                &self.config.shallow_clone_method,
                &ident,
                &fields,
            );
            go_file.add_method(method);
        }

        tracing::debug!(message = %message.full_name, fields = fields.len(), "generated message");

        for nested in &message.messages {
            self.generate_message(go_file, nested)?;
        }
        Ok(())
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new(GeneratorConfig::default())
    }
}
