//! Cursor and screen control sequences.

use std::io::{self, Write};

/// Erase display, then move the cursor home.
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// CUP sequence for a 1-based row and column. No bounds checking.
pub fn cursor_position(row: u16, col: u16) -> String {
    format!("\x1b[{};{}H", row, col)
}

pub fn clear_screen<W: Write>(out: &mut W) -> io::Result<()> {
    out.write_all(CLEAR_SCREEN.as_bytes())?;
    out.flush()
}

pub fn move_cursor<W: Write>(out: &mut W, row: u16, col: u16) -> io::Result<()> {
    out.write_all(cursor_position(row, col).as_bytes())?;
    out.flush()
}
