//! The individual demo phases.

use std::io::{BufRead, Write};

use tracing::debug;

use super::Demo;
use crate::error::ImageError;
use crate::options::DisplayOptions;

/// Cursor position of animation frame `i`.
///
/// The row bounces between 7 and 17 every 20 frames while the column sweeps
/// 10..=49 and wraps every 40 frames.
pub fn bounce_position(i: u32) -> (u16, u16) {
    let row = 7 + ((i % 20) as i32 - 10).unsigned_abs() as u16;
    let col = 10 + (i % 40) as u16;
    (row, col)
}

impl<W: Write, R: BufRead> Demo<W, R> {
    pub(super) fn basic(&mut self) -> Result<(), ImageError> {
        self.heading("Basic Display")?;
        self.line("")?;

        let sample = self.images.sample().to_path_buf();
        let variants = [
            ("1. Default size (auto):", DisplayOptions::new()),
            (
                "2. Fixed width (400px):",
                DisplayOptions::new().with("width", "400px"),
            ),
            (
                "3. Fixed height (200px):",
                DisplayOptions::new().with("height", "200px"),
            ),
            (
                "4. Percentage width (50%):",
                DisplayOptions::new().with("width", "50%"),
            ),
        ];
        for (label, options) in &variants {
            self.line(label)?;
            self.show(&sample, options)?;
            self.spacing(9)?;
        }

        self.wait_for_enter()
    }

    pub(super) fn alignment(&mut self) -> Result<(), ImageError> {
        self.heading("Alignment")?;
        self.line("")?;

        let sample = self.images.sample().to_path_buf();
        let variants = [
            ("1. Left alignment (default):", "left"),
            ("2. Center alignment:", "center"),
            ("3. Right alignment:", "right"),
        ];
        for (label, align) in variants {
            self.line(label)?;
            let options = DisplayOptions::new()
                .with("width", "200px")
                .with("align", align);
            self.show(&sample, &options)?;
            self.spacing(6)?;
        }

        self.wait_for_enter()
    }

    pub(super) fn layering(&mut self) -> Result<(), ImageError> {
        self.heading("Z-index Layering")?;
        self.line("")?;

        let pair = self
            .images
            .pair()
            .map(|(back, front)| (back.to_path_buf(), front.to_path_buf()));
        let Some((back, front)) = pair else {
            return self.line("Need at least 2 images for the z-index demo.");
        };

        self.line("Displaying overlapping images with different z-index values:")?;
        self.line("(Notice how they stack on top of each other)")?;
        self.line("")?;

        self.move_to(6, 5)?;
        let back_options = DisplayOptions::new()
            .with("width", "40%")
            .with("z-index", "1")
            .with("name", "back_image");
        self.show(&back, &back_options)?;

        // Let the terminal draw the back layer first
        self.pause(self.config.layer_pause());

        self.move_to(8, 15)?;
        let front_options = DisplayOptions::new()
            .with("width", "40%")
            .with("z-index", "2")
            .with("name", "front_image");
        self.show(&front, &front_options)?;

        self.move_to(15, 1)?;
        self.line("Second image (z-index=2) appears on top of the first image (z-index=1)")?;
        self.line("")?;
        self.wait_for_enter()
    }

    pub(super) fn animation(&mut self) -> Result<(), ImageError> {
        self.heading("Animation")?;
        self.line("Press Ctrl+C to stop the animation")?;
        self.line("")?;

        let sample = self.images.sample().to_path_buf();

        // Ctrl+C from here on ends the animation, not the process
        let guard = self.interrupt.clone();
        let scope = guard.arm();

        self.move_to(5, 1)?;
        let background = DisplayOptions::new()
            .with("width", "80%")
            .with("height", "80%")
            .with("align", "center")
            .with("z-index", "1")
            .with("name", "background")
            .with("persistent", "1");
        self.show(&sample, &background)?;

        let frame_options = DisplayOptions::new()
            .with("width", "100px")
            .with("height", "100px")
            .with("z-index", "2")
            .with("name", "animation_frame");

        let mut drawn = 0;
        for i in 0..self.config.frame_count {
            if scope.is_interrupted() {
                break;
            }
            let (row, col) = bounce_position(i);
            self.move_to(row, col)?;
            self.show(&sample, &frame_options)?;
            drawn += 1;
            self.pause(self.config.frame_delay());
        }
        let stopped = scope.is_interrupted();
        drop(scope);

        debug!(frames = drawn, stopped, "Animation finished");
        if stopped {
            self.line("\nAnimation stopped.")?;
        }

        self.move_to(25, 1)?;
        self.wait_for_enter()
    }

    pub(super) fn finish(&mut self) -> Result<(), ImageError> {
        self.heading("Complete")?;
        self.line("Thank you for trying the advanced image features!")?;
        self.out.flush()?;
        Ok(())
    }
}
