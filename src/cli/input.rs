use std::io::BufRead;

use super::read_line_lossy;
use crate::core::{in_range, InputError};

/// Validate one line of user input as a guess.
pub fn parse_guess(line: &str) -> Result<u8, InputError> {
    let input = line.trim();
    if input.is_empty() {
        return Err(InputError::EmptyInput);
    }
    let value: i64 = input.parse().map_err(|_| InputError::NotANumber)?;
    if !in_range(value) {
        return Err(InputError::OutOfRange(value));
    }
    Ok(value as u8)
}

/// Read a single line from `input` and validate it with [`parse_guess`].
///
/// End of input and I/O errors both surface as [`InputError::ReadFailure`];
/// a line of invalid UTF-8 is just not a number.
pub fn read_guess<R: BufRead + ?Sized>(input: &mut R) -> Result<u8, InputError> {
    match read_line_lossy(input) {
        Ok(None) => Err(InputError::ReadFailure),
        Ok(Some(line)) => parse_guess(&line),
        Err(e) => {
            log::debug!("read_guess failed: {}", e);
            Err(InputError::ReadFailure)
        }
    }
}
