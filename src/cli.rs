use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "tubemark",
    version,
    about = "Bookmark video-stream URLs under short aliases and play them with mpv",
    after_help = AFTER_HELP
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Add or overwrite an alias for a stream URL
    Add { alias: String, url: String },
    /// Resolve an alias and play it with mpv (audio-only by default)
    Play {
        alias: String,
        /// Render video as well as audio
        #[arg(short = 'v', long = "video")]
        video: bool,
    },
    /// Show recent playback history and all saved aliases
    List,
    /// Remove a saved alias
    #[command(alias = "rm")]
    Remove { alias: String },
}

const AFTER_HELP: &str = "\
Aliases are stored in <config dir>/tubemark/videos.json (~/.config on Linux).
Playback requires mpv to be installed: https://mpv.io";
