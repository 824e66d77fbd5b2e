//! Scripted walkthrough of the inline image options.
//!
//! The driver writes everything (text, cursor moves and image sequences) to a
//! single output stream in call order and reads Enter presses from a line
//! reader, so it can run against a terminal or against in-memory buffers.

mod images;
mod phases;

pub use images::{ImageSet, IMAGE_EXTENSIONS};
pub use phases::bounce_position;

use std::io::{BufRead, Write};
use std::path::Path;
use std::time::Duration;

use tracing::debug;

use crate::config::DemoConfig;
use crate::cursor;
use crate::error::ImageError;
use crate::options::DisplayOptions;
use crate::sequence::display_image;
use crate::utils::interrupt::InterruptGuard;

/// Product name shown in every phase title.
pub const DEMO_TITLE: &str = "GT Terminal Advanced Image Demo";

const CONTINUE_PROMPT: &str = "Press Enter to continue...";

/// Demo driver over an output stream and a line-based input.
pub struct Demo<W: Write, R: BufRead> {
    out: W,
    input: R,
    images: ImageSet,
    config: DemoConfig,
    interrupt: InterruptGuard,
}

impl<W: Write, R: BufRead> Demo<W, R> {
    pub fn new(out: W, input: R, images: ImageSet, config: DemoConfig) -> Self {
        Self {
            out,
            input,
            images,
            config,
            interrupt: InterruptGuard::new(),
        }
    }

    /// Use `guard` for the animation phase instead of a private one.
    pub fn with_interrupt(mut self, guard: InterruptGuard) -> Self {
        self.interrupt = guard;
        self
    }

    /// Run every phase in order, stopping at the first error.
    pub fn run(&mut self) -> Result<(), ImageError> {
        self.basic()?;
        self.alignment()?;
        self.layering()?;
        self.animation()?;
        self.finish()
    }

    /// Give back the output stream, e.g. to inspect a buffer.
    pub fn into_output(self) -> W {
        self.out
    }

    fn heading(&mut self, subtitle: &str) -> Result<(), ImageError> {
        debug!(phase = subtitle, "Starting demo phase");
        cursor::clear_screen(&mut self.out)?;
        let title = format!("{} - {}", DEMO_TITLE, subtitle);
        writeln!(self.out, "{}", title)?;
        writeln!(self.out, "{}", "=".repeat(title.chars().count()))?;
        Ok(())
    }

    fn line(&mut self, text: &str) -> Result<(), ImageError> {
        writeln!(self.out, "{}", text)?;
        Ok(())
    }

    /// Blank lines reserved below an image so the next label isn't drawn over it.
    fn spacing(&mut self, lines: usize) -> Result<(), ImageError> {
        write!(self.out, "{}", "\n".repeat(lines))?;
        Ok(())
    }

    fn show(&mut self, path: &Path, options: &DisplayOptions) -> Result<(), ImageError> {
        display_image(&mut self.out, path, options)
    }

    fn move_to(&mut self, row: u16, col: u16) -> Result<(), ImageError> {
        cursor::move_cursor(&mut self.out, row, col)?;
        Ok(())
    }

    fn pause(&self, duration: Duration) {
        if !duration.is_zero() {
            std::thread::sleep(duration);
        }
    }

    /// Prompt and block until a line (or end of input) is read.
    fn wait_for_enter(&mut self) -> Result<(), ImageError> {
        self.line(CONTINUE_PROMPT)?;
        self.out.flush()?;
        let mut buf = String::new();
        self.input.read_line(&mut buf)?;
        Ok(())
    }
}
