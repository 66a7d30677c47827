//! Plugin parameter parsing.
//!
//! protoc forwards everything after `--go-copy_opt=` (or before the `:` of
//! `--go-copy_out=`) as one comma-separated `key=value` string. `M<file>=`
//! entries are collected by hand; every other entry is handed to clap as a
//! `--key=value` argument.

use clap::{ArgAction, Parser, ValueEnum};
use indexmap::IndexMap;

use crate::error::{Error, Result};

/// How generated filenames are derived.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum PathType {
    /// Output path follows the Go import path of the file.
    #[default]
    Import,
    /// Output path follows the `.proto` path.
    #[value(name = "source_relative")]
    SourceRelative,
}

/// Parameters accepted by the plugin.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "protoc-gen-go-copy", no_binary_name = true, disable_help_flag = true)]
pub struct PluginParams {
    /// Suffix appended to each input file's generated filename prefix
    #[arg(long = "generated_filename_suffix", default_value = "_copy.pb.go")]
    pub generated_filename_suffix: String,

    /// Method name generated for all message types unless set to an empty string
    #[arg(long = "shallow_copy_method", default_value = "Proto_ShallowCopy")]
    pub shallow_copy_method: String,

    /// Method name generated for all message types unless set to an empty string
    #[arg(long = "shallow_clone_method", default_value = "Proto_ShallowClone")]
    pub shallow_clone_method: String,

    /// How output filenames are derived
    #[arg(long, value_enum, default_value_t = PathType::Import)]
    pub paths: PathType,

    /// Go module prefix stripped from every output filename
    #[arg(long)]
    pub module: Option<String>,

    /// Pipe generated files through an external gofmt
    #[arg(
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        default_value_t = false,
        default_missing_value = "true"
    )]
    pub gofmt: bool,

    /// `M<proto file>=<import path>[;<package name>]` overrides
    #[arg(skip)]
    pub import_mappings: IndexMap<String, String>,
}

impl Default for PluginParams {
    fn default() -> Self {
        Self {
            generated_filename_suffix: "_copy.pb.go".to_string(),
            shallow_copy_method: "Proto_ShallowCopy".to_string(),
            shallow_clone_method: "Proto_ShallowClone".to_string(),
            paths: PathType::Import,
            module: None,
            gofmt: false,
            import_mappings: IndexMap::new(),
        }
    }
}

impl PluginParams {
    /// Parse a protoc parameter string (e.g., `paths=source_relative,Mfoo.proto=example.com/foo`).
    pub fn parse(parameter: &str) -> Result<Self> {
        let mut import_mappings = IndexMap::new();
        let mut args = Vec::new();

        for param in parameter.split(',').filter(|p| !p.is_empty()) {
            let (key, value) = match param.split_once('=') {
                Some((key, value)) => (key, Some(value)),
                None => (param, None),
            };

            if let Some(file) = key.strip_prefix('M') {
                import_mappings.insert(file.to_string(), value.unwrap_or_default().to_string());
                continue;
            }

            args.push(match value {
                Some(value) => format!("--{}={}", key, value),
                None => format!("--{}", key),
            });
        }

        let mut params = Self::try_parse_from(args).map_err(|e| {
            let rendered = e.to_string();
            let first_line = rendered.lines().next().unwrap_or_default();
            Error::Parameter {
                message: first_line.trim_start_matches("error: ").to_string(),
            }
        })?;
        params.import_mappings = import_mappings;

        tracing::debug!(?params, "parsed plugin parameters");
        Ok(params)
    }
}
