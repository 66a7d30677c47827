//! Go package resolution for `.proto` files.

use gocopy_core::go_sanitized;
use gocopy_ir::GoImportPath;
use indexmap::IndexMap;
use prost_types::FileDescriptorProto;

use crate::{
    error::{Error, Result},
    params::{PathType, PluginParams},
};

/// The Go package a `.proto` file is generated into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoPackage {
    pub import_path: GoImportPath,
    pub name: String,
}

/// Resolve the Go package of every file, in request order.
///
/// The import path comes from an `M` parameter or the `go_package` option;
/// the package name from an explicit `;name` suffix or the sanitized last
/// element of the import path.
pub fn resolve_packages(
    files: &[FileDescriptorProto],
    params: &PluginParams,
) -> Result<Vec<GoPackage>> {
    // import path -> (package name, first file declaring it)
    let mut seen: IndexMap<String, (String, String)> = IndexMap::new();
    let mut packages = Vec::with_capacity(files.len());

    for file in files {
        let package = resolve_package(file, params)?;

        match seen.get(package.import_path.as_str()) {
            Some((name, first_file)) if *name != package.name => {
                return Err(Error::PackageNameConflict {
                    import_path: package.import_path.to_string(),
                    first: name.clone(),
                    first_file: first_file.clone(),
                    second: package.name,
                    second_file: file.name().to_string(),
                });
            }
            Some(_) => {}
            None => {
                seen.insert(
                    package.import_path.to_string(),
                    (package.name.clone(), file.name().to_string()),
                );
            }
        }

        packages.push(package);
    }

    Ok(packages)
}

fn resolve_package(file: &FileDescriptorProto, params: &PluginParams) -> Result<GoPackage> {
    let source = params
        .import_mappings
        .get(file.name())
        .map(String::as_str)
        .or_else(|| {
            file.options
                .as_ref()
                .map(|o| o.go_package())
                .filter(|p| !p.is_empty())
        })
        .ok_or_else(|| Error::MissingImportPath {
            file: file.name().to_string(),
        })?;

    let (path, explicit_name) = split_import_path(source);
    if path.is_empty() {
        return Err(Error::MissingImportPath {
            file: file.name().to_string(),
        });
    }

    let import_path = GoImportPath::new(path);
    let name = match explicit_name {
        Some(name) => go_sanitized(name),
        None => go_sanitized(import_path.base()),
    };

    Ok(GoPackage { import_path, name })
}

/// Split `path;name` into its import path and optional package name.
fn split_import_path(s: &str) -> (&str, Option<&str>) {
    match s.split_once(';') {
        Some((path, name)) if !name.is_empty() => (path, Some(name)),
        Some((path, _)) => (path, None),
        None => (s, None),
    }
}

/// Compute the output filename prefix of a file (the part before the suffix).
pub fn generated_filename_prefix(proto_path: &str, import_path: &GoImportPath, paths: PathType) -> String {
    let stem = proto_path
        .strip_suffix(".proto")
        .or_else(|| proto_path.strip_suffix(".protodevel"))
        .unwrap_or(proto_path);

    match paths {
        PathType::SourceRelative => stem.to_string(),
        PathType::Import => {
            let base = stem.rsplit('/').next().unwrap_or(stem);
            format!("{}/{}", import_path.as_str().trim_end_matches('/'), base)
        }
    }
}
