use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};

/// A generated file, named relative to the plugin's output root.
///
/// The plugin normally hands these back to protoc inside a response; when run
/// in debug mode they are written to disk with [`OutputFile::write`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFile {
    name: String,
    content: String,
}

impl OutputFile {
    /// Create a new output file with the given relative name and content.
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    /// Get the file name, relative to the output root (always `/` separated)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the file content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Replace the file name, keeping the content.
    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Consume the file, returning its name and content.
    pub fn into_parts(self) -> (String, String) {
        (self.name, self.content)
    }

    /// Get the on-disk path of this file below `base`.
    ///
    /// Fails if a `..` segment would leave `base`.
    pub fn path(&self, base: &Path) -> Result<PathBuf> {
        let mut path = base.to_path_buf();
        for part in self.name.split('/') {
            match part {
                "" | "." => {}
                ".." => {
                    eyre::bail!("output file name {:?} escapes the output directory", self.name)
                }
                part => path.push(part),
            }
        }
        Ok(path)
    }

    /// Write the file below `base`, skipping the write if the content is unchanged.
    pub fn write(&self, base: &Path) -> Result<WriteResult> {
        let path = self.path(base)?;

        if let Ok(existing) = std::fs::read_to_string(&path) {
            if existing == self.content {
                return Ok(WriteResult::Unchanged);
            }
        }

        write_file(&path, &self.content)
            .wrap_err_with(|| format!("failed to write {}", path.display()))?;
        Ok(WriteResult::Written)
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File already existed with identical content
    Unchanged,
}
