use std::path::PathBuf;

use clap::Parser;
use log::error;

use crate::processor::{OutputFormat, Processor};

mod amount;
mod csv_utils;
mod html;
mod images;
mod processor;
mod template;
mod types;

/// Renders payment-method CSV tables into HTML accordion fragments.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Output format. Each input gets a sibling `<input>.<format>` file.
    #[arg(long, value_enum, default_value_t = OutputFormat::Html)]
    format: OutputFormat,

    /// CSV files to convert.
    #[arg(required = true)]
    files: Vec<PathBuf>,
}

#[tokio::main]
async fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let p = Processor::new(cli.format);

    if let Err(e) = p.process_files(&cli.files).await {
        error!("{}", e);
        std::process::exit(1);
    }
}
