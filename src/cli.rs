use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for `srclint`.
#[derive(Parser, Debug)]
#[command(
    name = "srclint",
    version,
    about = "Run a static-analysis engine over files, directories, globs, or a Subversion revision"
)]
pub struct Cli {
    /// Files, directories, or glob patterns to analyze. With --revision or
    /// --transaction, the single input is the repository path.
    #[arg(value_name = "INPUT")]
    pub inputs: Vec<String>,

    /// Only analyze paths matching at least one of these regex patterns.
    #[arg(short = 'i', long = "include", value_name = "REGEX")]
    pub include: Vec<String>,

    /// Skip paths matching any of these regex patterns.
    #[arg(short = 'e', long = "exclude", value_name = "REGEX")]
    pub exclude: Vec<String>,

    /// Recurse into subdirectories when expanding directories and globs.
    #[arg(short = 'r', long)]
    pub recursive: bool,

    /// Engine settings file. Defaults to srclint.settings.json next to the
    /// executable, if present.
    #[arg(short = 's', long, value_name = "PATH")]
    pub settings: Option<PathBuf>,

    /// Print all engine output, including low-importance messages.
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Path to the svnlook executable. Probed from well-known install
    /// locations if omitted.
    #[arg(long, value_name = "PATH")]
    pub svnlook: Option<PathBuf>,

    /// Analyze the files changed in this committed revision.
    #[arg(long, value_name = "REV")]
    pub revision: Option<String>,

    /// Analyze the files changed in this in-flight transaction.
    #[arg(long, value_name = "TXN")]
    pub transaction: Option<String>,

    /// Staging directory for revision-sourced files. Defaults to a
    /// subdirectory of the platform temp directory.
    #[arg(long, value_name = "DIR")]
    pub temp: Option<PathBuf>,

    /// The analyzer executable implementing the engine interface.
    #[arg(long, value_name = "PATH", default_value = "source-analyzer")]
    pub analyzer: PathBuf,
}
