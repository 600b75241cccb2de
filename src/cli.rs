use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "careerscope",
    version,
    about = "Career recommendation CLI based on academic marks and interests"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a student profile against the career catalog
    Recommend(RecommendCommand),
    /// List the built-in career catalog
    Careers(CareersCommand),
    /// Show catalog and extended info for one career
    Info(InfoCommand),
    /// List the known subject names
    Subjects,
    /// List the known interest names
    Interests,
    /// Write a starter student profile
    Init(InitCommand),
}

#[derive(Args)]
pub struct RecommendCommand {
    /// Path to a student profile TOML file
    pub path: PathBuf,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
}

#[derive(Args)]
pub struct CareersCommand {
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: CatalogFormat,
}

#[derive(Args)]
pub struct InfoCommand {
    /// Career name, matched exactly against the catalog
    pub career: String,
}

#[derive(Args)]
pub struct InitCommand {
    /// Where to write the profile template
    pub path: PathBuf,
    #[arg(long)]
    pub force: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ReportFormat {
    Text,
    Md,
    Json,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum CatalogFormat {
    Text,
    Json,
}
