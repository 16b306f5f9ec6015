use crate::areas::workspace::Workspace;
use crate::artifacts::core::LineEndingWriter;
use crate::artifacts::patch::config::PatchConfig;
use anyhow::Context;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Where a rendered patch goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchOutput {
    Stdout,
    File(PathBuf),
}

/// One parameterized patch run: configuration, input workspace and output sink
///
/// The sink is opened only once the patch has been rendered, so a patch file
/// never exists before both inputs are read and diffed.
pub struct PatchPipeline {
    config: PatchConfig,
    output: PatchOutput,
    workspace: Workspace,
}

impl PatchPipeline {
    pub fn new(path: &Path, config: PatchConfig, output: PatchOutput) -> anyhow::Result<Self> {
        let path = path.canonicalize()?;

        Ok(PatchPipeline {
            config,
            output,
            workspace: Workspace::new(path.into_boxed_path()),
        })
    }

    pub fn config(&self) -> &PatchConfig {
        &self.config
    }

    pub fn output(&self) -> &PatchOutput {
        &self.output
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    /// Opens the sink, applying the configured line ending to everything
    /// written through it.
    pub fn open_writer(&self) -> anyhow::Result<Box<dyn Write>> {
        let writer: Box<dyn Write> = match &self.output {
            PatchOutput::Stdout => Box::new(std::io::stdout()),
            PatchOutput::File(path) => {
                let path = self.workspace.resolve(path);
                let file = std::fs::File::create(&path)
                    .with_context(|| format!("Failed to create patch file: {:?}", path))?;
                Box::new(BufWriter::new(file))
            }
        };

        Ok(Box::new(LineEndingWriter::new(writer, self.config.line_ending)))
    }
}
