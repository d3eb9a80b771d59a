use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "predictr")]
#[command(
    about = "Classroom peer-relationship graph analysis and psychosocial risk estimation",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Increase verbosity level (can be repeated: -v, -vv)
    /// -v: Show pipeline phases
    /// -vv: Show all debug information
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the social graph and score every student
    Analyze {
        /// JSON array of students ({id, name, grade})
        #[arg(long)]
        roster: PathBuf,

        /// JSON array of survey responses
        #[arg(long)]
        responses: PathBuf,

        /// Configuration file (defaults to the nearest .predictr.toml)
        #[arg(short, long, env = "PREDICTR_CONFIG")]
        config: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Show only the top N at-risk students
        #[arg(long = "top", visible_alias = "head", default_value = "10")]
        top: usize,

        /// Classroom label used in reports (defaults to the first student's grade)
        #[arg(long)]
        grade: Option<String>,
    },

    /// Check survey responses against the roster and form limits
    Validate {
        #[arg(long)]
        roster: PathBuf,

        #[arg(long)]
        responses: PathBuf,

        /// Configuration file (defaults to the nearest .predictr.toml)
        #[arg(short, long, env = "PREDICTR_CONFIG")]
        config: Option<PathBuf>,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

impl From<OutputFormat> for crate::io::output::OutputFormat {
    fn from(f: OutputFormat) -> Self {
        match f {
            OutputFormat::Json => crate::io::output::OutputFormat::Json,
            OutputFormat::Markdown => crate::io::output::OutputFormat::Markdown,
            OutputFormat::Terminal => crate::io::output::OutputFormat::Terminal,
        }
    }
}
