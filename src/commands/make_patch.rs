use crate::areas::pipeline::PatchPipeline;
use crate::areas::workspace::Workspace;
use crate::artifacts::diff::diff_algorithm::diff_with_limits;
use crate::artifacts::patch::patch_document::{FileLabel, PatchDocument};
use std::io::Write;
use std::path::Path;
use tracing::{info, warn};

impl PatchPipeline {
    pub fn make_patch(&self, old_path: &Path, new_path: &Path) -> anyhow::Result<()> {
        let old = self.workspace().read_lines(old_path)?;
        let new = self.workspace().read_lines(new_path)?;
        info!(
            old = %old_path.display(),
            new = %new_path.display(),
            old_lines = old.len(),
            new_lines = new.len(),
            "read inputs"
        );

        let script = diff_with_limits(&old, &new, &self.config().limits)?;
        let document = PatchDocument::format(
            &script,
            self.config().context,
            self.file_label(old_path, self.config().old_label.as_deref(), "a")?,
            self.file_label(new_path, self.config().new_label.as_deref(), "b")?,
        );

        if document.is_empty() {
            warn!("inputs are identical, the patch is empty");
        }
        info!(
            hunks = document.hunks().len(),
            distance = script.distance(),
            "patch formatted"
        );

        let patch = self.render_patch(&document);
        self.write_patch(&patch)?;

        Ok(())
    }

    fn file_label(
        &self,
        file_path: &Path,
        label: Option<&str>,
        prefix: &str,
    ) -> anyhow::Result<FileLabel> {
        let name = match label {
            Some(label) => label.to_string(),
            None => format!("{prefix}/{}", Workspace::file_name(file_path)),
        };
        let modified = if self.config().timestamps {
            Some(self.workspace().modified_at(file_path)?)
        } else {
            None
        };

        Ok(FileLabel::new(name, modified))
    }

    fn render_patch(&self, document: &PatchDocument<'_>) -> String {
        if self.config().color {
            format!("{document:#}")
        } else {
            document.to_string()
        }
    }

    fn write_patch(&self, patch: &str) -> anyhow::Result<()> {
        let mut writer = self.open_writer()?;
        writer.write_all(patch.as_bytes())?;
        writer.flush()?;

        Ok(())
    }
}
