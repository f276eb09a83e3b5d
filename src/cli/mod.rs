pub mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::domain::RevelationPlace;

#[derive(Parser)]
#[command(name = "tilawah")]
#[command(about = "Read the Quran and check prayer times from the terminal", long_about = None)]
pub struct Cli {
    /// Path to the config file (default: ~/.config/tilawah/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Read a chapter
    Read {
        /// Chapter number (1-114)
        number: u16,

        /// Print the chapter as JSON
        #[arg(long)]
        json: bool,
    },
    /// List chapters
    List {
        /// Filter by name or translated name (Arabic matches ignore diacritics)
        #[arg(short, long)]
        search: Option<String>,

        /// Only show chapters revealed in this place
        #[arg(short, long, value_enum)]
        revelation: Option<RevelationArg>,
    },
    /// Show today's prayer times
    Prayer {
        /// City to look up (default: from config)
        #[arg(long)]
        city: Option<String>,
    },
    /// Check that the Quran APIs are reachable
    Probe,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum RevelationArg {
    Meccan,
    Medinan,
}

impl From<RevelationArg> for RevelationPlace {
    fn from(arg: RevelationArg) -> Self {
        match arg {
            RevelationArg::Meccan => RevelationPlace::Meccan,
            RevelationArg::Medinan => RevelationPlace::Medinan,
        }
    }
}
