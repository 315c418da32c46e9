use crate::record::Mention;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "brevet-prenoms")]
#[command(about = "Explore brevet honor-mention statistics by first name", long_about = None)]
pub struct Cli {
    /// TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Dataset JSON file (overrides the configuration)
    #[arg(short, long, global = true)]
    pub dataset: Option<PathBuf>,

    /// Dataset URL (overrides the path)
    #[arg(long, global = true)]
    pub url: Option<String>,

    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Search names as you would type them
    Search {
        query: String,
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
    /// Show the statistics of one name
    Show { name: String },
    /// List names with a similar mention profile
    Similar {
        name: String,
        #[arg(short = 'n', long)]
        limit: Option<usize>,
        /// Minimum similarity, in percent
        #[arg(long)]
        min_similarity: Option<f64>,
        /// Keep the name itself in the results
        #[arg(long)]
        include_target: bool,
    },
    /// Compare two to five names side by side
    Compare {
        #[arg(num_args = 2..=5, required = true)]
        names: Vec<String>,
    },
    /// Compute the scatter chart layout
    Chart {
        /// Mention on the X axis (sm, ab, b, tb, fel)
        #[arg(short, long)]
        mention: Option<Mention>,
        /// Name to highlight, appended if the chart view lacks it
        #[arg(short, long)]
        select: Option<String>,
        #[arg(long)]
        width: Option<f64>,
        #[arg(long)]
        height: Option<f64>,
    },
    /// Summarize the dataset
    Stats {
        /// Number of names in each top list
        #[arg(short = 'n', long, default_value = "10")]
        top: usize,
        /// Rank names by this mention rate
        #[arg(short, long, default_value = "tb")]
        mention: Mention,
    },
}
