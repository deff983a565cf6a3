use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "feces")]
#[command(version)]
#[command(about = "A command-line trash can", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize the feces environment
    Init,

    /// Plop a file
    Plop {
        /// The file to plop
        file: PathBuf,
    },

    /// Plunge a plopped file
    Plunge {
        /// The id of the file to plunge (as listed by 'pie')
        id: String,
    },

    /// List all plopped files
    Pie,

    /// Compost (permanently delete) all files older than <duration>
    Compost {
        /// The cutoff duration to compost files older than, e.g. 30m, 12h, 2d ('0' means everything)
        #[arg(default_value = "0")]
        duration: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}
