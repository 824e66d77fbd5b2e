//! gtimg-demo - scripted walkthrough of inline image placement options

use anyhow::Result;
use clap::Parser;

use gtimage::cli::DemoCli;
use gtimage::commands;

fn main() -> Result<()> {
    let cli = DemoCli::parse();
    commands::demo::handle(&cli)
}
