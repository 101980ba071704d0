//! RotorBank: the chi and psi wheel groups.
//!
//! A bank steps all of its rotors together and reads their current pins
//! as one value, one bit per rotor. The first rotor supplies the most
//! significant bit, so a bank of five rotors yields one 5-bit
//! teleprinter impulse pattern.

use crate::error::{ConfigIssue, LorenzError};
use crate::rotor::Rotor;

/// Widest bank whose combined pins still fit in a `u32`.
pub const MAX_BANK_WIDTH: usize = 32;

/// An ordered group of rotors read as a single multi-bit value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotorBank {
    rotors: Vec<Rotor>,
}

impl RotorBank {
    /// Creates a bank from rotors in bit order (most significant first).
    ///
    /// # Errors
    /// Returns [`ConfigIssue::EmptyBank`] for zero rotors, or
    /// [`ConfigIssue::BankTooWide`] for more than [`MAX_BANK_WIDTH`].
    ///
    /// # Examples
    ///
    /// ```
    /// use lorenz_sz::{Rotor, RotorBank};
    ///
    /// let bank = RotorBank::new(vec![
    ///     Rotor::new(vec![1, 0]).unwrap(),
    ///     Rotor::new(vec![0, 0]).unwrap(),
    /// ])
    /// .unwrap();
    /// assert_eq!(bank.combined_pins(), 0b10);
    /// ```
    pub fn new(rotors: Vec<Rotor>) -> Result<Self, LorenzError> {
        if rotors.is_empty() {
            return Err(ConfigIssue::EmptyBank.into());
        }
        if rotors.len() > MAX_BANK_WIDTH {
            return Err(ConfigIssue::BankTooWide {
                width: rotors.len(),
            }
            .into());
        }
        Ok(RotorBank { rotors })
    }

    /// Steps every rotor by one pin, in index order.
    pub fn advance(&mut self) {
        for rotor in self.rotors.iter_mut() {
            rotor.advance();
        }
    }

    /// Packs the current pin of each rotor into one value.
    ///
    /// Rotor 0 lands in bit `width - 1`, the last rotor in bit 0.
    pub fn combined_pins(&self) -> u32 {
        self.rotors
            .iter()
            .fold(0u32, |acc, rotor| (acc << 1) | u32::from(rotor.current_pin()))
    }

    /// Number of rotors, which is also the bit width of
    /// [`combined_pins`](Self::combined_pins).
    pub fn width(&self) -> usize {
        self.rotors.len()
    }

    /// The rotors in bit order.
    pub fn rotors(&self) -> &[Rotor] {
        &self.rotors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bank(patterns: &[&[u8]]) -> RotorBank {
        RotorBank::new(
            patterns
                .iter()
                .map(|p| Rotor::new(p.to_vec()).unwrap())
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_combined_pins() {
        assert_eq!(bank(&[&[0, 1], &[0, 0]]).combined_pins(), 0);
    }

    #[test]
    fn test_advance() {
        let mut b = bank(&[&[0, 1], &[0, 0]]);
        b.advance();
        assert_eq!(b.combined_pins(), 2);
    }

    #[test]
    fn test_first_rotor_is_most_significant() {
        let b = bank(&[&[1], &[0], &[0], &[0], &[0]]);
        assert_eq!(b.combined_pins(), 0b10000);
        let b = bank(&[&[0], &[0], &[0], &[0], &[1]]);
        assert_eq!(b.combined_pins(), 0b00001);
    }

    #[test]
    fn test_advance_steps_every_rotor() {
        let mut b = bank(&[&[0, 1, 0], &[1, 0], &[0, 0, 0, 1]]);
        b.advance();
        let positions: Vec<usize> = b.rotors().iter().map(Rotor::position).collect();
        assert_eq!(positions, vec![1, 1, 1]);
    }

    #[test]
    fn test_full_width_bank() {
        let rotors = vec![Rotor::new(vec![1]).unwrap(); MAX_BANK_WIDTH];
        let b = RotorBank::new(rotors).unwrap();
        assert_eq!(b.combined_pins(), u32::MAX);
        assert_eq!(b.width(), 32);
    }

    #[test]
    fn test_empty_rejected() {
        assert_eq!(
            RotorBank::new(Vec::new()),
            Err(ConfigIssue::EmptyBank.into())
        );
    }

    #[test]
    fn test_too_wide_rejected() {
        let rotors = vec![Rotor::new(vec![0]).unwrap(); MAX_BANK_WIDTH + 1];
        assert_eq!(
            RotorBank::new(rotors),
            Err(ConfigIssue::BankTooWide { width: 33 }.into())
        );
    }
}
