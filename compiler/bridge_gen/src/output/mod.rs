//! Result types of a generation pass.
//!
//! A pass produces everything in memory first. Writing to disk is a separate
//! final step so that a failing batch never leaves generated files behind.

use std::path::{Path, PathBuf};

use crate::GenProblem;

/// Extension of generated source files.
const SOURCE_EXTENSION: &str = "kt";

/// One rendered source file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Package of the declaration (dot separated, may be empty).
    pub package: String,
    /// File stem: the generated type or accessor name.
    pub name: String,
    /// Complete file contents.
    pub contents: String,
}

impl GeneratedFile {
    /// Path relative to the output root: package directories plus
    /// `<name>.kt`.
    pub fn relative_path(&self) -> PathBuf {
        let mut path = PathBuf::new();
        for segment in self.package.split('.').filter(|s| !s.is_empty()) {
            path.push(segment);
        }
        path.push(format!("{}.{SOURCE_EXTENSION}", self.name));
        path
    }
}

/// Everything generated for one batch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GenerationOutput {
    /// Files in emission order: accessors, interfaces, then classes.
    pub files: Vec<GeneratedFile>,
    pub accessors: usize,
    pub interfaces: usize,
    pub classes: usize,
}

impl GenerationOutput {
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Write every file below `root`, creating package directories.
    ///
    /// Returns the written paths. The first failure aborts with
    /// [`GenProblem::OutputWrite`]; the pass must then be treated as failed.
    #[tracing::instrument(level = "debug", skip(self), fields(files = self.files.len()))]
    pub fn write_to(&self, root: &Path) -> Result<Vec<PathBuf>, GenProblem> {
        let mut written = Vec::with_capacity(self.files.len());
        for file in &self.files {
            let path = root.join(file.relative_path());
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).map_err(|e| write_error(parent, &e))?;
            }
            std::fs::write(&path, &file.contents).map_err(|e| write_error(&path, &e))?;
            tracing::trace!(path = %path.display(), "wrote generated file");
            written.push(path);
        }
        Ok(written)
    }
}

fn write_error(path: &Path, error: &std::io::Error) -> GenProblem {
    GenProblem::OutputWrite {
        path: path.to_path_buf(),
        message: error.to_string(),
    }
}
