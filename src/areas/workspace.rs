use crate::artifacts::diff::line::{Line, split_lines};
use anyhow::Context;
use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};

/// Input side of the pipeline: turns files into line sequences
#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn resolve(&self, file_path: &Path) -> PathBuf {
        self.path.join(file_path)
    }

    pub fn read_file(&self, file_path: &Path) -> anyhow::Result<String> {
        let full_path = self.resolve(file_path);

        let content = std::fs::read_to_string(&full_path)
            .with_context(|| format!("Failed to read file: {:?}", file_path))?;

        Ok(content)
    }

    pub fn read_lines(&self, file_path: &Path) -> anyhow::Result<Vec<Line>> {
        let content = self.read_file(file_path)?;

        Ok(split_lines(&content))
    }

    pub fn modified_at(&self, file_path: &Path) -> anyhow::Result<DateTime<Local>> {
        let metadata = std::fs::metadata(self.resolve(file_path))
            .with_context(|| format!("Failed to get metadata for file: {:?}", file_path))?;
        let modified = metadata
            .modified()
            .with_context(|| format!("Modification time unavailable for file: {:?}", file_path))?;

        Ok(DateTime::<Local>::from(modified))
    }

    /// Last path component, used to build the default `a/`/`b/` labels
    pub fn file_name(file_path: &Path) -> String {
        file_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| file_path.to_string_lossy().into_owned())
    }
}
