//! CLI entry point for the scribble-guided colorization tool

use chromafill::io::cli::{Cli, FileProcessor};
use clap::Parser;

fn main() -> chromafill::Result<()> {
    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    processor.process()
}
