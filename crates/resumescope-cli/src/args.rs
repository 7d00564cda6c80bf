use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(
    name = "resumescope",
    version,
    about = "Upload a resume to the analysis backend and print a normalized report"
)]
pub struct Args {
    /// Base URL of the analysis backend
    #[arg(
        long,
        global = true,
        env = "RESUMESCOPE_BACKEND_URL",
        default_value = resumescope_core::DEFAULT_BACKEND_URL
    )]
    pub backend_url: String,

    /// Give up on backend requests after this many seconds (default: wait indefinitely)
    #[arg(
        long,
        global = true,
        env = "RESUMESCOPE_TIMEOUT_SECS",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout_secs: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Validate, upload and analyze a resume (PDF, DOC or DOCX, max 5 MB)
    Analyze {
        /// Path to the resume file
        resume_path: PathBuf,

        /// Declared content type; inferred from the file suffix when omitted
        #[arg(long)]
        content_type: Option<String>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Normalize a saved backend payload without contacting the backend
    Normalize {
        /// Path to a JSON payload, or `-` for stdin
        payload_path: PathBuf,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Send a message through the contact form endpoint
    Contact {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        message: String,
    },

    /// Check that the backend is reachable
    Health,
}

#[derive(Debug, ClapArgs)]
pub struct OutputArgs {
    /// Output format
    #[arg(long, default_value = "json")]
    pub format: OutputFormat,

    /// Write output to a file instead of stdout
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Optional git commit hash for tool metadata
    #[arg(long)]
    pub commit: Option<String>,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Text,
}
