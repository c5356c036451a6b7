//! Console input and output
//!
//! - Guess reading and validation
//! - The play-again prompt
//! - Fixed message catalogs and banners

#![cfg(feature = "std")]

pub mod input;
pub mod messages;
pub mod replay;

pub use input::{parse_guess, read_guess};
pub use messages::Lang;
pub use replay::{ask_replay, parse_replay};

use std::io::{self, BufRead, Write};

/// Read one line, replacing invalid UTF-8 instead of failing.
///
/// `Ok(None)` means the stream is exhausted.
pub fn read_line_lossy<R: BufRead + ?Sized>(input: &mut R) -> io::Result<Option<String>> {
    let mut buf = Vec::new();
    if input.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
}

/// Print `text` framed by two rules of `width` characters.
pub fn print_banner<W: Write + ?Sized>(out: &mut W, text: &str, width: usize) -> io::Result<()> {
    let rule = "=".repeat(width);
    writeln!(out, "{}", rule)?;
    writeln!(out, "{}", text)?;
    writeln!(out, "{}", rule)
}
