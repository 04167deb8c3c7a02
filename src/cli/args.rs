//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

/// Check whether an integer sequence is the post-order traversal of a binary search tree
#[derive(Parser, Debug)]
#[command(name = "bstseq")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub debug: u8,

    /// Config file (default: ~/.config/bstseq/bstseq.toml)
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check a sequence (exit 0 if valid, 1 if not)
    Verify {
        /// Values, comma or space separated
        #[arg(allow_negative_numbers = true)]
        values: Vec<String>,
        /// Read values from file ("-" for stdin)
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        file: Option<PathBuf>,
        /// Show the tree of a valid sequence
        #[arg(short, long)]
        tree: bool,
        /// Show why an invalid sequence was rejected
        #[arg(short, long)]
        explain: bool,
    },

    /// Insert values into a BST and print its post-order sequence
    Build {
        /// Values in insertion order
        #[arg(allow_negative_numbers = true, required = true)]
        values: Vec<String>,
        /// Show the tree
        #[arg(short, long)]
        tree: bool,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective configuration
    Show,
    /// Show config file location
    Path,
    /// Print a config template
    Template,
}
