//! Rotor: a single Lorenz wheel.
//!
//! A rotor holds a fixed cyclic sequence of pins, each raised (1) or
//! lowered (0), and the index of the pin currently under the reading
//! position. It is the atomic stepping unit of the machine: every other
//! component is built from rotors.

use std::fmt;

use crate::error::{ConfigIssue, LorenzError};
use crate::utils::bits;

/// A single wheel with a fixed cyclic pin pattern.
///
/// The pin sequence never changes after construction; only the position
/// moves, one pin per [`advance`](Self::advance), wrapping back to the
/// first pin after the last.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rotor {
    pins: Vec<u8>,
    position: usize,
}

impl Rotor {
    /// Creates a rotor at position 0.
    ///
    /// # Parameters
    /// - `pins`: The pin pattern, each value 0 or 1.
    ///
    /// # Errors
    /// Returns [`ConfigIssue::EmptyRotor`] if `pins` is empty, or
    /// [`ConfigIssue::InvalidPin`] if any pin is not 0 or 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use lorenz_sz::Rotor;
    ///
    /// let mut rotor = Rotor::new(vec![0, 1]).unwrap();
    /// assert_eq!(rotor.current_pin(), 0);
    /// rotor.advance();
    /// assert_eq!(rotor.current_pin(), 1);
    /// ```
    pub fn new(pins: Vec<u8>) -> Result<Self, LorenzError> {
        Self::with_start(pins, 0)
    }

    /// Creates a rotor set to an arbitrary start position.
    ///
    /// # Parameters
    /// - `pins`: The pin pattern, each value 0 or 1.
    /// - `start`: Index of the pin under the reading position.
    ///
    /// # Errors
    /// As [`new`](Self::new), plus [`ConfigIssue::StartOutOfRange`] if
    /// `start >= pins.len()`.
    pub fn with_start(pins: Vec<u8>, start: usize) -> Result<Self, LorenzError> {
        if pins.is_empty() {
            return Err(ConfigIssue::EmptyRotor.into());
        }
        if let Some(index) = pins.iter().position(|&p| p > 1) {
            return Err(ConfigIssue::InvalidPin {
                index,
                value: pins[index],
            }
            .into());
        }
        if start >= pins.len() {
            return Err(ConfigIssue::StartOutOfRange {
                position: start,
                len: pins.len(),
            }
            .into());
        }
        Ok(Rotor {
            pins,
            position: start,
        })
    }

    /// Returns the pin under the reading position.
    pub fn current_pin(&self) -> u8 {
        self.pins[self.position]
    }

    /// Steps the rotor by one pin, wrapping after the last.
    pub fn advance(&mut self) {
        self.position += 1;
        if self.position >= self.pins.len() {
            self.position = 0;
        }
    }

    /// Index of the pin under the reading position.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of pins on the rotor.
    pub fn len(&self) -> usize {
        self.pins.len()
    }

    /// Always `false`; an empty rotor cannot be constructed.
    pub fn is_empty(&self) -> bool {
        self.pins.is_empty()
    }

    /// The full pin pattern.
    pub fn pins(&self) -> &[u8] {
        &self.pins
    }
}

impl fmt::Display for Rotor {
    /// Cross/dot pin pattern, e.g. `x..x`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&bits::format_pins(&self.pins))
    }
}
