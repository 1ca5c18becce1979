use clap::{Parser, Subcommand};
use convertforge_common::MediaKind;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "convertforge")]
#[command(author, version, about = "Batch image, audio and video converter")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a batch of files to one target format
    Convert {
        /// Media kind: image, audio or video
        #[arg(short, long)]
        kind: MediaKind,

        /// Target format label or extension (e.g. PNG, flac, MP4)
        #[arg(short, long)]
        to: String,

        /// Source format label; files with other extensions are skipped
        #[arg(short, long)]
        from: Option<String>,

        /// Output directory (overrides output.directory from config)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Write into a subfolder of the output directory; blank for the default name
        #[arg(long, num_args = 0..=1, default_missing_value = "")]
        subfolder: Option<String>,

        /// Remove a file from the batch after selection
        #[arg(long)]
        exclude: Vec<PathBuf>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,

        /// Files to convert
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// List target and source format labels
    Formats {
        /// Only show one media kind
        #[arg(short, long)]
        kind: Option<MediaKind>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check that required external tools are available
    CheckTools,

    /// Validate configuration file
    Validate {
        /// Config file to validate (uses default if not specified)
        config: Option<PathBuf>,
    },

    /// Display version information
    Version,
}
