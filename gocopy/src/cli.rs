use std::{
    io::{Read, Write},
    path::PathBuf,
};

use clap::Parser;
use eyre::{Context, Result};
use gocopy_core::{OutputFile, WriteResult};
use gocopy_protoc::{decode_request, encode_response, error_response, success_response};
use prost_types::compiler::CodeGeneratorRequest;

use crate::plugin;

/// protoc plugin generating shallow copy and clone methods for Go protobuf messages.
///
/// Run by protoc as `protoc --go-copy_out=<dir> --go-copy_opt=<params> ...`: reads a
/// CodeGeneratorRequest on stdin and writes a CodeGeneratorResponse to stdout.
#[derive(Debug, Parser)]
#[command(name = "protoc-gen-go-copy")]
#[command(version)]
#[command(about = "Generate shallow copy and clone methods for Go protobuf messages")]
pub(crate) struct Cli {
    /// Read a serialized CodeGeneratorRequest from this file instead of stdin
    #[arg(long, value_name = "FILE")]
    request: Option<PathBuf>,

    /// Write generated files below this directory instead of responding on stdout
    #[arg(long, value_name = "DIR")]
    out_dir: Option<PathBuf>,

    /// Plugin parameters to use instead of the request's own
    #[arg(long, value_name = "PARAMS")]
    parameter: Option<String>,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        let request = self.read_request()?;

        let files = match plugin::run(&request, self.parameter.as_deref()) {
            Ok(files) => files,
            Err(err) => {
                let message = err.to_string();
                tracing::error!(error = %message, "generation failed");
                err.report();
                if self.out_dir.is_none() {
                    write_stdout(&encode_response(&error_response(message)))?;
                }
                std::process::exit(1);
            }
        };

        match &self.out_dir {
            Some(dir) => write_files(&files, dir),
            None => write_stdout(&encode_response(&success_response(files))),
        }
    }

    fn read_request(&self) -> Result<CodeGeneratorRequest> {
        let bytes = match &self.request {
            Some(path) => std::fs::read(path)
                .wrap_err_with(|| format!("failed to read request from {}", path.display()))?,
            None => {
                let mut bytes = Vec::new();
                std::io::stdin()
                    .read_to_end(&mut bytes)
                    .wrap_err("failed to read request from stdin")?;
                bytes
            }
        };

        match decode_request(&bytes) {
            Ok(request) => Ok(request),
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(e));
                std::process::exit(1);
            }
        }
    }
}

fn write_stdout(bytes: &[u8]) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(bytes)
        .and_then(|()| stdout.flush())
        .wrap_err("failed to write response to stdout")
}

fn write_files(files: &[OutputFile], dir: &std::path::Path) -> Result<()> {
    for file in files {
        let status = match file.write(dir)? {
            WriteResult::Written => "written",
            WriteResult::Unchanged => "unchanged",
        };
        println!("{:>9} {}", status, file.path(dir)?.display());
    }
    tracing::info!(files = files.len(), dir = %dir.display(), "wrote generated files");
    Ok(())
}
