use anyhow::Result;
use clap::{Parser, ValueEnum};
use is_terminal::IsTerminal;
use makepatch::areas::pipeline::{PatchOutput, PatchPipeline};
use makepatch::artifacts::diff::diff_algorithm::DiffLimits;
use makepatch::artifacts::patch::config::{ContextWidth, LineEnding, PatchConfig};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ColorMode {
    Auto,
    Always,
    Never,
}

#[derive(Parser)]
#[command(
    name = "makepatch",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Create a unified-diff patch between two text files",
    long_about = "This command computes a minimal line-level edit script between OLD_FILE and NEW_FILE \
    and renders it as a unified diff. The patch is written to PATCH_FILE, or to stdout when \
    no patch file is given.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(index = 1, help = "The original file")]
    old_file: PathBuf,
    #[arg(index = 2, help = "The modified file")]
    new_file: PathBuf,
    #[arg(index = 3, help = "Where to write the patch (stdout when omitted)")]
    patch_file: Option<PathBuf>,
    #[arg(
        short = 'U',
        long,
        default_value_t = 3,
        allow_negative_numbers = true,
        help = "Number of unchanged context lines around each change"
    )]
    context: i64,
    #[arg(long, help = "Label for the old file (default: a/<name>)")]
    old_label: Option<String>,
    #[arg(long, help = "Label for the new file (default: b/<name>)")]
    new_label: Option<String>,
    #[arg(long, help = "Append modification times to the file headers")]
    timestamps: bool,
    #[arg(long, value_enum, default_value_t = LineEnding::Lf, help = "Line ending of the written patch")]
    line_ending: LineEnding,
    #[arg(long, value_enum, default_value_t = ColorMode::Auto, help = "Colorize patch printed to stdout")]
    color: ColorMode,
    #[arg(long, help = "Refuse inputs with more lines than this")]
    max_lines: Option<usize>,
    #[arg(long, help = "Abort the diff search after this many steps")]
    max_work: Option<u64>,
}

impl Cli {
    fn config(&self) -> Result<PatchConfig> {
        let color = self.patch_file.is_none()
            && match self.color {
                ColorMode::Always => true,
                ColorMode::Never => false,
                ColorMode::Auto => std::io::stdout().is_terminal(),
            };

        Ok(PatchConfig {
            context: ContextWidth::try_from(self.context)?,
            old_label: self.old_label.clone(),
            new_label: self.new_label.clone(),
            timestamps: self.timestamps,
            line_ending: self.line_ending,
            color,
            limits: DiffLimits::new(self.max_lines, self.max_work),
        })
    }

    fn output(&self) -> PatchOutput {
        match &self.patch_file {
            Some(path) => PatchOutput::File(path.clone()),
            None => PatchOutput::Stdout,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.config()?;
    colored::control::set_override(config.color);

    let pwd = std::env::current_dir()?;
    let pipeline = PatchPipeline::new(&pwd, config, cli.output())?;

    pipeline.make_patch(&cli.old_file, &cli.new_file)?;

    Ok(())
}
