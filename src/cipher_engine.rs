//! CipherEngine: the Lorenz SZ machine.
//!
//! Owns the two motor wheels (M61 and M37) and the psi and chi banks.
//! For each symbol the key is read from the banks, XORed into the code,
//! and then the wheels step under the motor-controlled stepping rule.

use tracing::{debug, trace};

use crate::error::{ConfigIssue, LorenzError};
use crate::rotor::Rotor;
use crate::rotor_bank::RotorBank;

/// Lorenz stream cipher machine.
///
/// # Stepping
///
/// After every symbol, in this order:
///
/// 1. The chi bank steps.
/// 2. If M37 shows a raised pin, the psi bank steps.
/// 3. If M61 shows a raised pin, M37 steps.
/// 4. M61 steps.
///
/// Both motor wheels are read before either of them moves, so psi follows
/// the M37 pin of the current symbol and M37 follows the M61 pin of the
/// current symbol.
///
/// Encryption and decryption are the same operation: a second machine with
/// identical wheels and start positions turns the ciphertext back into the
/// plaintext.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CipherEngine {
    m61: Rotor,
    m37: Rotor,
    psi: RotorBank,
    chi: RotorBank,
}

impl CipherEngine {
    /// Assembles a machine from its wheels.
    ///
    /// # Parameters
    /// - `m61`: Motor wheel that gates M37.
    /// - `m37`: Motor wheel that gates the psi bank.
    /// - `psi`: The irregularly stepping bank.
    /// - `chi`: The regularly stepping bank.
    ///
    /// # Errors
    /// Returns [`ConfigIssue::BankWidthMismatch`] if the two banks do not
    /// have the same number of rotors.
    ///
    /// # Examples
    ///
    /// ```
    /// use lorenz_sz::{CipherEngine, Rotor, RotorBank};
    ///
    /// let bank = |bits: [u8; 5]| {
    ///     RotorBank::new(bits.iter().map(|&b| Rotor::new(vec![b]).unwrap()).collect())
    ///         .unwrap()
    /// };
    /// let mut engine = CipherEngine::new(
    ///     Rotor::new(vec![1]).unwrap(),
    ///     Rotor::new(vec![1]).unwrap(),
    ///     bank([0, 1, 1, 0, 0]),
    ///     bank([0, 0, 1, 1, 0]),
    /// )
    /// .unwrap();
    /// assert_eq!(engine.process(0b10100), 0b11110);
    /// ```
    pub fn new(
        m61: Rotor,
        m37: Rotor,
        psi: RotorBank,
        chi: RotorBank,
    ) -> Result<Self, LorenzError> {
        if psi.width() != chi.width() {
            return Err(ConfigIssue::BankWidthMismatch {
                psi: psi.width(),
                chi: chi.width(),
            }
            .into());
        }
        debug!(
            width = psi.width(),
            m61_pins = m61.len(),
            m37_pins = m37.len(),
            "lorenz machine assembled"
        );
        Ok(CipherEngine { m61, m37, psi, chi })
    }

    /// Enciphers (or deciphers) one symbol code and steps the wheels.
    ///
    /// Bits of `code` above the bank width pass through unchanged.
    pub fn process(&mut self, code: u32) -> u32 {
        let key = self.key();
        let output = code ^ key;
        self.step();
        trace!(input = code, key, output, "symbol processed");
        output
    }

    /// The key the next call to [`process`](Self::process) will apply.
    pub fn key(&self) -> u32 {
        self.psi.combined_pins() ^ self.chi.combined_pins()
    }

    fn step(&mut self) {
        self.chi.advance();

        if self.m37.current_pin() == 1 {
            self.psi.advance();
        }

        if self.m61.current_pin() == 1 {
            self.m37.advance();
        }

        self.m61.advance();
    }

    /// The M61 motor wheel.
    pub fn m61(&self) -> &Rotor {
        &self.m61
    }

    /// The M37 motor wheel.
    pub fn m37(&self) -> &Rotor {
        &self.m37
    }

    /// The psi bank.
    pub fn psi(&self) -> &RotorBank {
        &self.psi
    }

    /// The chi bank.
    pub fn chi(&self) -> &RotorBank {
        &self.chi
    }

    /// Bit width of the key.
    pub fn width(&self) -> usize {
        self.chi.width()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rotor(pins: &[u8]) -> Rotor {
        Rotor::new(pins.to_vec()).unwrap()
    }

    fn bank(rotors: &[&[u8]]) -> RotorBank {
        RotorBank::new(rotors.iter().map(|p| rotor(p)).collect()).unwrap()
    }

    fn all_raised() -> CipherEngine {
        CipherEngine::new(
            rotor(&[1, 1]),
            rotor(&[1, 1]),
            bank(&[&[1, 1], &[1, 1]]),
            bank(&[&[1, 1], &[1, 1]]),
        )
        .unwrap()
    }

    #[test]
    fn test_all_raised_key_is_zero() {
        let mut engine = all_raised();
        assert_eq!(engine.key(), 0b00);
        assert_eq!(engine.process(0b11), 0b11);
        assert_eq!(engine.process(0b01), 0b01);
    }

    #[test]
    fn test_key_is_psi_xor_chi() {
        let engine = CipherEngine::new(
            rotor(&[1]),
            rotor(&[1]),
            bank(&[&[0], &[1], &[1], &[0], &[0]]),
            bank(&[&[0], &[0], &[1], &[1], &[0]]),
        )
        .unwrap();
        assert_eq!(engine.key(), 0b01100 ^ 0b00110);
    }

    #[test]
    fn test_chi_and_m61_always_step() {
        let mut engine = CipherEngine::new(
            rotor(&[0, 0, 0]),
            rotor(&[0, 0]),
            bank(&[&[0, 0, 0, 0]]),
            bank(&[&[0, 0, 0, 0, 0]]),
        )
        .unwrap();
        engine.process(0);
        engine.process(0);
        assert_eq!(engine.chi().rotors()[0].position(), 2);
        assert_eq!(engine.m61().position(), 2);
        assert_eq!(engine.m37().position(), 0);
        assert_eq!(engine.psi().rotors()[0].position(), 0);
    }

    #[test]
    fn test_m37_gates_psi_before_it_moves() {
        // M37 raised at position 0 only; M61 always raised so M37 steps every symbol.
        let mut engine = CipherEngine::new(
            rotor(&[1, 1]),
            rotor(&[1, 0]),
            bank(&[&[0, 0, 0, 0, 0]]),
            bank(&[&[0, 0, 0]]),
        )
        .unwrap();
        engine.process(0);
        assert_eq!(engine.psi().rotors()[0].position(), 1);
        assert_eq!(engine.m37().position(), 1);
        engine.process(0);
        assert_eq!(engine.psi().rotors()[0].position(), 1);
        assert_eq!(engine.m37().position(), 0);
        engine.process(0);
        assert_eq!(engine.psi().rotors()[0].position(), 2);
    }

    #[test]
    fn test_width_mismatch_rejected() {
        let result = CipherEngine::new(
            rotor(&[1]),
            rotor(&[1]),
            bank(&[&[1], &[1]]),
            bank(&[&[1], &[1], &[1]]),
        );
        assert_eq!(
            result,
            Err(ConfigIssue::BankWidthMismatch { psi: 2, chi: 3 }.into())
        );
    }

    #[test]
    fn test_high_bits_pass_through() {
        let mut engine = CipherEngine::new(
            rotor(&[1]),
            rotor(&[1]),
            bank(&[&[1], &[0]]),
            bank(&[&[0], &[0]]),
        )
        .unwrap();
        assert_eq!(engine.process(0b1100), 0b1110);
    }
}
