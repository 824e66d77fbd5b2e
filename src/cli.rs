//! CLI definitions for gtimg and gtimg-demo
//!
//! Both binaries share the clap styling and live here so their argument
//! handling can be unit-tested without spawning processes.

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::Parser;
use std::path::PathBuf;

use crate::options::DisplayOption;

/// Build clap styles for help and error output.
///
/// - Green: headers, usage, command names (accent color)
/// - White: descriptions, placeholders (renders as light gray on dark terminals)
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::White.on_default()) // Light gray for descriptions
        .valid(AnsiColor::White.on_default()) // Light gray for valid values
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

/// Usage line printed when `gtimg` is run without an image path.
pub const IMAGE_USAGE: &str = "Usage: gtimg <IMAGE_PATH>";

#[derive(Parser, Debug)]
#[command(name = "gtimg")]
#[command(about = "Print an image inline using the iTerm2/GT File escape sequence")]
#[command(
    long_about = "Print an image inline using the iTerm2/GT File escape sequence.

The file is read, base64-encoded and written to stdout as a single
ESC ] 1337 ; File=inline=1;... : <data> BEL sequence. Option values are
passed to the terminal verbatim.

EXAMPLES:
    gtimg photo.png                          Default size
    gtimg photo.png --width 50%              Half the terminal width
    gtimg photo.png --size --name photo      Include size and name hints
    gtimg photo.png -o z-index=2 -o align=center"
)]
#[command(version, styles = build_cli_styles())]
pub struct ImageCli {
    /// Image file to display
    #[arg(value_name = "IMAGE_PATH")]
    pub image_path: Option<PathBuf>,

    /// Add size=<file length in bytes>
    #[arg(long)]
    pub size: bool,

    /// File name hint passed to the terminal
    #[arg(long)]
    pub name: Option<String>,

    /// Width (e.g. 400px, 50%, 20 cells)
    #[arg(long)]
    pub width: Option<String>,

    /// Height (e.g. 200px, 80%)
    #[arg(long)]
    pub height: Option<String>,

    /// Value for preserveAspectRatio (0 or 1)
    #[arg(long, value_name = "0|1")]
    pub preserve_aspect_ratio: Option<String>,

    /// Extra option as KEY=VALUE, repeatable
    #[arg(short = 'o', long = "option", value_name = "KEY=VALUE")]
    pub options: Vec<DisplayOption>,
}

#[derive(Parser, Debug)]
#[command(name = "gtimg-demo")]
#[command(about = "GT Terminal Advanced Image Demo")]
#[command(
    long_about = "GT Terminal Advanced Image Demo.

Walks through sizing, alignment, z-index layering and a short bouncing
animation using the .jpg/.png files found in the image directory.
Press Enter to advance between phases and Ctrl+C to stop the animation.

CONFIG:
    Timing is read from ~/.config/gtimage/config.toml (or --config):

    [demo]
    frame_delay_ms = 100
    frame_count = 100
    layer_pause_ms = 500"
)]
#[command(version, styles = build_cli_styles())]
pub struct DemoCli {
    /// Directory containing sample images (JPG/PNG)
    #[arg(long, default_value = ".")]
    pub image_dir: PathBuf,

    /// Config file to use instead of ~/.config/gtimage/config.toml
    #[arg(long)]
    pub config: Option<PathBuf>,
}
