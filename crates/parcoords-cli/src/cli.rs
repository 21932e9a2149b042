//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Parcoords: inspect datasets and export parallel-coordinates figure data
#[derive(Parser)]
#[command(name = "parcoords")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Dashboard configuration file (JSON)
    #[arg(long, global = true, value_name = "CONFIG")]
    pub config: Option<PathBuf>,
}

/// Options shared by every command that loads a dataset.
#[derive(clap::Args, Debug, Clone)]
pub struct LoadArgs {
    /// Path or http(s) URL of the data file (CSV/TSV/TXT/DAT)
    #[arg(value_name = "SOURCE")]
    pub source: String,

    /// Text columns with fewer distinct values become categorical
    #[arg(long)]
    pub threshold: Option<usize>,

    /// Do not treat columns named like "date" as timestamps
    #[arg(long)]
    pub no_date_names: bool,

    /// Use the small category limit and skip date detection
    #[arg(long, conflicts_with_all = ["threshold", "no_date_names"])]
    pub lenient: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load and normalize a dataset, then show how each column is classified
    Inspect {
        #[command(flatten)]
        load: LoadArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write the figure data for a parallel-coordinates plot
    Figure {
        #[command(flatten)]
        load: LoadArgs,

        /// Columns to plot, comma separated (default: all but the last)
        #[arg(short, long, value_delimiter = ',')]
        features: Vec<String>,

        /// Column that colors the lines, or "none" (default: the last column)
        #[arg(short, long)]
        target: Option<String>,

        /// Color scale name (default: depends on the target)
        #[arg(short, long)]
        colorscale: Option<String>,

        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the qualitative palettes
    Palettes {
        /// Only palettes with this many colors
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
