//! Command-line structure.

use clap::{Parser, Subcommand, ValueEnum};
use famtree::{Gender, NodeId};
use std::path::PathBuf;

/// famtree - merge, edit, check and render family tree snapshots
#[derive(Parser, Debug)]
#[command(name = "famtree")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log output format
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Log line format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines
    Text,
    /// One JSON object per line
    Json,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Merge snapshots into one sorted snapshot
    Merge {
        /// Snapshot files, merged in order (later files win)
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Output snapshot path
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Render merged snapshots as Graphviz DOT
    Render {
        /// Snapshot files, merged in order
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Output DOT path (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// JSON file with DOT style options
        #[arg(long)]
        style: Option<PathBuf>,
    },

    /// Report counts and connectivity; exits 1 if the tree is split
    Check {
        /// Snapshot files, merged in order
        #[arg(required = true)]
        inputs: Vec<PathBuf>,
    },

    /// Add a person (no-op if an identical person exists)
    AddPerson {
        /// Snapshot file to edit (created if missing)
        file: PathBuf,

        /// Name
        #[arg(long)]
        name: String,

        /// Gender: male, female or other
        #[arg(long)]
        gender: Gender,

        /// Birth year
        #[arg(long)]
        birth: i32,

        /// Death year
        #[arg(long)]
        death: Option<i32>,
    },

    /// Update a person's gender or years
    UpdatePerson {
        /// Snapshot file to edit
        file: PathBuf,

        /// Name of the person (must be unique unless --id is given)
        #[arg(long)]
        name: String,

        /// Person ID
        #[arg(long)]
        id: Option<NodeId>,

        /// New gender
        #[arg(long)]
        gender: Option<Gender>,

        /// New birth year (0 is ignored)
        #[arg(long)]
        birth: Option<i32>,

        /// New death year (0 is ignored)
        #[arg(long)]
        death: Option<i32>,
    },

    /// Record a marriage between two people
    Marry {
        /// Snapshot file to edit
        file: PathBuf,

        /// First spouse ID
        spouse1: NodeId,

        /// Second spouse ID
        spouse2: NodeId,

        /// Child ID (repeatable)
        #[arg(long = "child")]
        children: Vec<NodeId>,
    },

    /// Replace the children of an existing marriage
    SetChildren {
        /// Snapshot file to edit
        file: PathBuf,

        /// First spouse ID
        spouse1: NodeId,

        /// Second spouse ID
        spouse2: NodeId,

        /// Child ID (repeatable)
        #[arg(long = "child")]
        children: Vec<NodeId>,
    },

    /// Delete a person or marriage and every reference to it
    Delete {
        /// Snapshot file to edit
        file: PathBuf,

        /// Node ID
        id: NodeId,
    },
}
