//! Teleprinter: text front end for the cipher machine.
//!
//! Translates characters to 5-bit ITA2 codes, runs them through a
//! [`CipherEngine`] and translates the results back. Non-printing codes
//! use printable stand-ins: `*` null, `-` line feed, `,` carriage return,
//! `!` figure shift and `.` letter shift.

use tracing::debug;

use crate::cipher_engine::CipherEngine;
use crate::error::{ConfigIssue, LorenzError};

/// Bit width of an ITA2 code.
pub const ITA2_WIDTH: usize = 5;

/// Characters indexed by their ITA2 code.
pub const ITA2_ALPHABET: [char; 32] = [
    '*', 'E', '-', 'A', ' ', 'S', 'I', 'U', // 0b00000..0b00111
    ',', 'D', 'R', 'J', 'N', 'F', 'C', 'K', // 0b01000..0b01111
    'T', 'Z', 'L', 'W', 'H', 'Y', 'P', 'Q', // 0b10000..0b10111
    'O', 'B', 'G', '!', 'M', 'X', 'V', '.', // 0b11000..0b11111
];

/// Returns the ITA2 code of `character`.
///
/// # Errors
/// Returns [`LorenzError::UnmappedCharacter`] if the character is not in
/// [`ITA2_ALPHABET`]. Lowercase letters are not folded.
pub fn code_for(character: char) -> Result<u32, LorenzError> {
    ITA2_ALPHABET
        .iter()
        .position(|&c| c == character)
        .map(|code| code as u32)
        .ok_or(LorenzError::UnmappedCharacter(character))
}

/// Returns the character for an ITA2 code.
///
/// # Errors
/// Returns [`LorenzError::UnmappedCode`] if `code` is 32 or above.
pub fn char_for(code: u32) -> Result<char, LorenzError> {
    ITA2_ALPHABET
        .get(code as usize)
        .copied()
        .ok_or(LorenzError::UnmappedCode(code))
}

/// Message-level wrapper around a 5-bit cipher machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Teleprinter {
    engine: CipherEngine,
}

impl Teleprinter {
    /// Attaches a teleprinter to a machine.
    ///
    /// # Errors
    /// Returns [`ConfigIssue::TeleprinterTooWide`] if the machine's key is
    /// wider than [`ITA2_WIDTH`], since its output could fall outside the
    /// alphabet.
    pub fn new(engine: CipherEngine) -> Result<Self, LorenzError> {
        if engine.width() > ITA2_WIDTH {
            return Err(ConfigIssue::TeleprinterTooWide {
                width: engine.width(),
            }
            .into());
        }
        Ok(Teleprinter { engine })
    }

    /// Enciphers a message, one character per machine step.
    ///
    /// The whole message is translated before the machine moves, so an
    /// unmapped character leaves the wheels untouched. Deciphering is the
    /// same call on an identically set teleprinter.
    ///
    /// # Errors
    /// [`LorenzError::UnmappedCharacter`] for a character outside the
    /// alphabet.
    ///
    /// # Examples
    ///
    /// ```
    /// use lorenz_sz::{CipherEngine, Rotor, RotorBank, Teleprinter};
    ///
    /// let bank = |bits: [u8; 5]| {
    ///     RotorBank::new(bits.iter().map(|&b| Rotor::new(vec![b]).unwrap()).collect())
    ///         .unwrap()
    /// };
    /// let engine = CipherEngine::new(
    ///     Rotor::new(vec![1]).unwrap(),
    ///     Rotor::new(vec![1]).unwrap(),
    ///     bank([0, 1, 1, 0, 0]),
    ///     bank([0, 0, 1, 1, 0]),
    /// )
    /// .unwrap();
    ///
    /// let mut teleprinter = Teleprinter::new(engine).unwrap();
    /// assert_eq!(teleprinter.encrypt_message("H").unwrap(), "V");
    /// ```
    pub fn encrypt_message(&mut self, message: &str) -> Result<String, LorenzError> {
        let codes = message
            .chars()
            .map(code_for)
            .collect::<Result<Vec<_>, _>>()?;

        // The machine is at most ITA2_WIDTH bits wide, so every output code
        // is in the alphabet.
        let output = codes
            .into_iter()
            .map(|code| char_for(self.engine.process(code)))
            .collect::<Result<String, _>>()?;

        debug!(symbols = output.len(), "message processed");
        Ok(output)
    }

    /// The attached machine.
    pub fn engine(&self) -> &CipherEngine {
        &self.engine
    }
}
