//! CLI argument parsing with clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::enums::Tier;

/// Render animated GIFs as ASCII art
#[derive(Parser, Debug)]
#[command(name = "gif-ascii")]
#[command(version, about = "Render animated GIFs as ASCII art", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Config file path
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print a single frame
    Render {
        /// GIF file to render
        file: PathBuf,

        /// Detail tier (default: from config, else standard)
        #[arg(long, short)]
        tier: Option<Tier>,

        /// Frame index; wraps around, negative counts from the end
        #[arg(long, short, default_value = "0", allow_hyphen_values = true)]
        frame: i64,
    },
    /// Play the animation in the terminal
    Play {
        /// GIF file to play
        file: PathBuf,

        /// Detail tier (default: from config, else standard)
        #[arg(long, short)]
        tier: Option<Tier>,

        /// Number of times to play (0 = forever)
        #[arg(long)]
        loops: Option<u32>,

        /// Print frames one after another instead of redrawing in place
        #[arg(long)]
        no_clear: bool,
    },
    /// Show frame count, dimensions, output grid and timing
    Info {
        /// GIF file to inspect
        file: PathBuf,

        /// Detail tier used to compute the output grid
        #[arg(long, short)]
        tier: Option<Tier>,
    },
    /// Answer JSON frame requests on stdin, one per line
    Serve {
        /// GIF file to serve
        file: PathBuf,

        /// Detail tier (default: from config, else standard)
        #[arg(long, short)]
        tier: Option<Tier>,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Create default config file
    Init,
}
