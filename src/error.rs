//! Error types for the Lorenz SZ library.

use thiserror::Error;

/// Errors produced by the Lorenz SZ library.
///
/// Every variant is raised while building a machine or translating text.
/// Once a [`CipherEngine`](crate::CipherEngine) exists, processing symbols
/// never fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LorenzError {
    /// A rotor, bank or machine configuration is unusable.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigIssue),
    /// Character has no ITA2 code in the teleprinter table.
    #[error("character {0:?} has no teleprinter code")]
    UnmappedCharacter(char),
    /// Code is outside the 5-bit teleprinter alphabet.
    #[error("code {0:#b} has no teleprinter character")]
    UnmappedCode(u32),
}

/// The concrete reason a configuration was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigIssue {
    /// Rotor built from zero pins.
    #[error("rotor must have at least one pin")]
    EmptyRotor,
    /// Pin value other than 0 or 1.
    #[error("pin {index} has value {value}, expected 0 or 1")]
    InvalidPin { index: usize, value: u8 },
    /// Start position does not index into the pin sequence.
    #[error("start position {position} is outside a rotor of {len} pins")]
    StartOutOfRange { position: usize, len: usize },
    /// Bank built from zero rotors.
    #[error("rotor bank must have at least one rotor")]
    EmptyBank,
    /// Bank wider than the 32-bit combined value.
    #[error("rotor bank of {width} rotors exceeds 32 bits")]
    BankTooWide { width: usize },
    /// Psi and chi banks produce keys of different widths.
    #[error("psi bank has {psi} rotors but chi bank has {chi}")]
    BankWidthMismatch { psi: usize, chi: usize },
    /// Pin text contains a symbol that is neither a pin nor whitespace.
    #[error("pin symbol {symbol:?} at offset {index} is not one of 0, 1, x, .")]
    InvalidPinSymbol { index: usize, symbol: char },
    /// Wheel does not have its SZ42 pin count.
    #[error("wheel {wheel} has {actual} pins, expected {expected}")]
    WheelSizeMismatch {
        wheel: String,
        expected: usize,
        actual: usize,
    },
    /// Machine key is wider than the 5-bit teleprinter code.
    #[error("machine key of {width} bits is wider than the 5-bit teleprinter code")]
    TeleprinterTooWide { width: usize },
    /// Configuration document could not be parsed.
    #[error("malformed configuration: {0}")]
    Malformed(String),
    /// Configuration could not be written out.
    #[error("configuration could not be serialized: {0}")]
    Unserializable(String),
}
