use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "notekeep")]
#[command(about = "Keep short text notes on this machine", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding notes and config (defaults to $NOTEKEEP_HOME, then the platform data dir)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new note
    #[command(alias = "n")]
    Add {
        /// Title of the note
        title: String,

        /// Content of the note
        content: String,
    },

    /// List notes, optionally filtered by a search term
    #[command(alias = "ls")]
    List {
        /// Search term
        #[arg(short, long)]
        search: Option<String>,

        /// Field to search (title or content); repeatable, defaults to config
        #[arg(short, long = "field")]
        fields: Vec<String>,
    },

    /// Search notes (dedicated command)
    Search {
        term: String,

        /// Field to search (title or content); repeatable, defaults to config
        #[arg(short, long = "field")]
        fields: Vec<String>,
    },

    /// View one or more notes
    #[command(alias = "v")]
    View {
        /// Indexes or ids of the notes (e.g. 1 3)
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,
    },

    /// Replace the title and content of a note
    #[command(alias = "e")]
    Edit {
        /// Index or id of the note
        selector: String,

        /// New title
        title: String,

        /// New content
        content: String,
    },

    /// Delete one or more notes
    #[command(alias = "rm")]
    Delete {
        /// Indexes or ids of the notes (e.g. 1 3 5)
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,
    },

    /// Discard all stored notes (use after a corrupt-storage error)
    Reset {
        /// Do not ask, really discard everything
        #[arg(long)]
        yes: bool,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (storage-key, time-format, search-fields)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
