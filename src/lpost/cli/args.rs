use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "lpost", bin_name = "lpost", version)]
#[command(about = "A local image gallery for the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding gallery data (defaults to the platform data dir)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add an image to the gallery
    #[command(alias = "n")]
    Add {
        /// Image file (PNG, JPEG, WebP or GIF, max 12 MiB)
        image: PathBuf,

        /// Post title (defaults to "Untitled")
        #[arg(short, long)]
        title: Option<String>,

        /// Post description
        #[arg(short, long)]
        description: Option<String>,

        /// MIME type, when the file extension is misleading
        #[arg(long)]
        mime: Option<String>,
    },

    /// List posts, newest first
    #[command(alias = "ls")]
    List,

    /// Show one or more posts in full
    #[command(alias = "v")]
    View {
        /// Posts by position (1 = newest) or id
        #[arg(required = true, num_args = 1..)]
        posts: Vec<String>,
    },

    /// Print a post's image as a data URL
    Link {
        /// Post by position or id
        post: String,

        /// Copy to the system clipboard instead of printing
        #[arg(short, long)]
        copy: bool,
    },

    /// Save post images as files
    #[command(alias = "dl")]
    Download {
        /// Posts by position or id
        #[arg(required = true, num_args = 1..)]
        posts: Vec<String>,

        /// Target directory
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,
    },

    /// Show or change settings
    Settings {
        #[command(subcommand)]
        action: Option<SettingsCommand>,
    },

    /// Show or change client configuration
    Config {
        /// download-dir | relative-times
        key: Option<String>,

        /// New value
        value: Option<String>,
    },

    /// Delete all posts and settings
    Reset {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum SettingsCommand {
    /// Show current settings
    Show,

    /// Set the theme
    Theme {
        /// system, light or dark
        value: String,
    },

    /// Turn animations on or off
    Animations {
        /// on or off
        value: String,
    },
}
