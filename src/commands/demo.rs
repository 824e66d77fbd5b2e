//! Demo driver handler

use std::io;

use anyhow::{Context, Result};

use crate::cli::DemoCli;
use crate::config::Config;
use crate::demo::{Demo, ImageSet};
use crate::utils::interrupt::InterruptGuard;

/// Validate the image directory, then run every demo phase on the terminal.
///
/// Validation failures are reported before anything is drawn.
#[cfg(not(tarpaulin_include))]
pub fn handle(cli: &DemoCli) -> Result<()> {
    let config = Config::resolve(cli.config.as_deref())?;
    let images = ImageSet::discover(&cli.image_dir)?;
    println!("Found {} images in {}", images.len(), cli.image_dir.display());

    let guard = InterruptGuard::new();
    guard.register_signal_handler();

    let stdout = io::stdout();
    let stdin = io::stdin();
    let mut demo =
        Demo::new(stdout.lock(), stdin.lock(), images, config.demo).with_interrupt(guard);
    demo.run().context("Demo error")
}
