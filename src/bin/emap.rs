//! CLI entry point for the `emap` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use edgemap::cli::commands;
use edgemap::types::NodeId;

#[derive(Parser)]
#[command(
    name = "emap",
    about = "edgemap CLI — directed-graph queries over edge-list files"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Display node and edge counts of an edge-list file
    Info {
        /// Path to the edge-list file
        file: PathBuf,
    },
    /// Check whether a directed edge exists
    Connected {
        /// Path to the edge-list file
        file: PathBuf,
        /// Source node id
        from: NodeId,
        /// Destination node id
        to: NodeId,
    },
    /// Find the shortest directed path between two nodes
    Path {
        /// Path to the edge-list file
        file: PathBuf,
        /// Source node id
        from: NodeId,
        /// Destination node id
        to: NodeId,
        /// Query the reversed graph instead
        #[arg(long)]
        reverse: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    if cli.verbose {
        // env_logger is only available in dev/test builds
        eprintln!("Verbose mode enabled");
    }

    let result = match cli.command {
        Commands::Info { file } => commands::cmd_info(&file, json),
        Commands::Connected { file, from, to } => commands::cmd_connected(&file, from, to, json),
        Commands::Path {
            file,
            from,
            to,
            reverse,
        } => commands::cmd_path(&file, from, to, reverse, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            edgemap::EdgemapError::Io(_) => 1,
            edgemap::EdgemapError::MalformedLine { .. } => 2,
        };
        process::exit(code);
    }
}
