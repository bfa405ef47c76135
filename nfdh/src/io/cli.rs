use std::path::PathBuf;

use clap::{Parser, Subcommand};
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Pack a rectangle list into a strip and report the approximation ratio
    Solve {
        #[arg(short, long, value_name = "FILE")]
        input_file: PathBuf,
        /// Strip width; inferred from a `W<width>` filename tag when omitted
        #[arg(short, long)]
        width: Option<f32>,
        /// Folder to write the solution JSON and SVG into
        #[arg(short, long, value_name = "FOLDER")]
        solution_folder: Option<PathBuf>,
    },
    /// Generate a random rectangle list from uniform dimension ranges
    Generate {
        #[arg(short, long, value_name = "FILE")]
        output_file: PathBuf,
        #[arg(short, long)]
        n_rects: usize,
        #[arg(long, default_value_t = 1)]
        min_width: u32,
        #[arg(long, default_value_t = 100)]
        max_width: u32,
        #[arg(long, default_value_t = 1)]
        min_height: u32,
        #[arg(long, default_value_t = 100)]
        max_height: u32,
        /// Seed for the PRNG; drawn from entropy when omitted
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Run the benchmark sweep over the full (N, H/W) grid
    Sweep {
        #[arg(short, long, value_name = "FILE")]
        config_file: Option<PathBuf>,
        #[arg(short, long, value_name = "FOLDER")]
        output_folder: PathBuf,
    },
    /// Aggregate finalized cell artifacts into a summary table
    Aggregate {
        #[arg(short, long, value_name = "FOLDER")]
        input_folder: PathBuf,
        #[arg(short, long, value_name = "FILE")]
        output_file: PathBuf,
    },
    /// Render a summary table as an SVG worst-ratio surface
    Surface {
        #[arg(short, long, value_name = "FILE")]
        input_file: PathBuf,
        #[arg(short, long, value_name = "FILE")]
        output_file: PathBuf,
    },
    /// Split an OR-Library problem stream into per-problem rectangle lists
    Split {
        #[arg(short, long, value_name = "FILE")]
        input_file: PathBuf,
        #[arg(short, long, value_name = "FOLDER")]
        output_folder: PathBuf,
    },
}
