//! gtimg - print one image inline using the File escape sequence

use anyhow::Result;
use clap::Parser;
use std::io;

use gtimage::cli::ImageCli;
use gtimage::commands;

fn main() -> Result<()> {
    let cli = ImageCli::parse();
    let stdout = io::stdout();
    commands::show::handle(&cli, &mut stdout.lock())
}
