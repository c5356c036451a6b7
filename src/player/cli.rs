#![cfg(feature = "std")]

use std::io::BufRead;

use crate::cli::read_guess;
use crate::core::InputError;

use super::Player;

/// Human player typing guesses, one per line.
pub struct CliPlayer<'a, R: BufRead + ?Sized> {
    input: &'a mut R,
}

impl<'a, R: BufRead + ?Sized> CliPlayer<'a, R> {
    pub fn new(input: &'a mut R) -> Self {
        Self { input }
    }
}

impl<R: BufRead + ?Sized> Player for CliPlayer<'_, R> {
    fn next_guess(&mut self) -> Result<u8, InputError> {
        read_guess(&mut *self.input)
    }
}
