use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Read, write and delete backup files through the filesystem adapter
#[derive(Parser, Debug)]
#[command(name = "backup-fs")]
#[command(version)]
#[command(about = "Read, write and delete backup files through the filesystem adapter", long_about = None)]
pub struct Args {
    /// Storage root directory (overrides the config file; defaults to current directory)
    #[arg(short, long, global = true)]
    pub root: Option<PathBuf>,

    /// Path to a config file (defaults to ./backup-fs.config.yml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Allow operations on symbolic links
    #[arg(long, global = true)]
    pub follow_symlinks: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Stream a stored file to stdout or to a local file
    Read {
        /// Path of the stored file, relative to the storage root
        path: String,

        /// Local file to write to (if not specified, outputs to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Store stdin or a local file at a path
    Write {
        /// Path of the stored file, relative to the storage root
        path: String,

        /// Local file to read from (if not specified, reads stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Delete a stored file
    Delete {
        /// Path of the stored file, relative to the storage root
        path: String,
    },
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
