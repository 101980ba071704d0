//! Machine configuration documents.
//!
//! A [`MachineConfig`] describes every wheel of a machine as pin text plus
//! a start position, and can be read from JSON:
//!
//! ```json
//! {
//!   "m61": { "pins": "x.x", "start": 1 },
//!   "m37": { "pins": "xx." },
//!   "psi": [{ "pins": "01" }, { "pins": "10" }],
//!   "chi": [{ "pins": "x" }, { "pins": ".x." }]
//! }
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cipher_engine::CipherEngine;
use crate::error::{ConfigIssue, LorenzError};
use crate::rotor::Rotor;
use crate::rotor_bank::RotorBank;
use crate::utils::bits;

/// Pin counts of the SZ42 chi wheels, in bit order.
pub const SZ42_CHI_SIZES: [usize; 5] = [41, 31, 29, 26, 23];

/// Pin counts of the SZ42 psi wheels, in bit order.
pub const SZ42_PSI_SIZES: [usize; 5] = [43, 47, 51, 53, 59];

/// Pin count of the M61 motor wheel.
pub const SZ42_M61_SIZE: usize = 61;

/// Pin count of the M37 motor wheel.
pub const SZ42_M37_SIZE: usize = 37;

/// Pattern and start position of one wheel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WheelConfig {
    /// Pins as `0`/`1` or `.`/`x`; whitespace is ignored.
    pub pins: String,
    /// Index of the pin under the reading position.
    #[serde(default)]
    pub start: usize,
}

impl WheelConfig {
    /// Builds a wheel config from pin values, starting at position 0.
    pub fn from_pins(pins: &[u8]) -> Self {
        WheelConfig {
            pins: bits::format_pins(pins),
            start: 0,
        }
    }

    /// Builds the rotor this entry describes.
    pub fn build(&self) -> Result<Rotor, LorenzError> {
        Rotor::with_start(bits::parse_pins(&self.pins)?, self.start)
    }

    fn pin_count(&self) -> Result<usize, LorenzError> {
        Ok(bits::parse_pins(&self.pins)?.len())
    }
}

/// Full wheel setup of a machine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineConfig {
    /// M61 motor wheel.
    pub m61: WheelConfig,
    /// M37 motor wheel.
    pub m37: WheelConfig,
    /// Psi wheels, most significant bit first.
    pub psi: Vec<WheelConfig>,
    /// Chi wheels, most significant bit first.
    pub chi: Vec<WheelConfig>,
}

impl MachineConfig {
    /// Parses a JSON configuration document.
    ///
    /// # Errors
    /// Returns [`ConfigIssue::Malformed`] if the document is not valid JSON
    /// or does not match the expected shape. Pin text is not checked here;
    /// that happens in [`build`](Self::build).
    pub fn from_json(text: &str) -> Result<Self, LorenzError> {
        serde_json::from_str(text).map_err(|e| ConfigIssue::Malformed(e.to_string()).into())
    }

    /// Serializes the configuration as pretty-printed JSON.
    ///
    /// # Errors
    /// Returns [`ConfigIssue::Unserializable`] if the writer fails.
    pub fn to_json(&self) -> Result<String, LorenzError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ConfigIssue::Unserializable(e.to_string()).into())
    }

    /// Validates every wheel and assembles the machine.
    ///
    /// # Errors
    /// Any [`ConfigIssue`] raised by pin parsing, rotor, bank or engine
    /// construction. The first failing wheel aborts the build.
    pub fn build(&self) -> Result<CipherEngine, LorenzError> {
        let m61 = self.m61.build()?;
        let m37 = self.m37.build()?;
        let psi = Self::build_bank(&self.psi)?;
        let chi = Self::build_bank(&self.chi)?;
        debug!(
            m61_raised = bits::raised_count(m61.pins()),
            m37_raised = bits::raised_count(m37.pins()),
            "machine configuration validated"
        );
        CipherEngine::new(m61, m37, psi, chi)
    }

    fn build_bank(wheels: &[WheelConfig]) -> Result<RotorBank, LorenzError> {
        let rotors = wheels
            .iter()
            .map(WheelConfig::build)
            .collect::<Result<Vec<_>, _>>()?;
        RotorBank::new(rotors)
    }

    /// Checks that every wheel has its SZ42 pin count.
    ///
    /// # Errors
    /// [`ConfigIssue::WheelSizeMismatch`] naming the first bank (`chi`,
    /// `psi`) that is not five wheels wide, or else the first wheel
    /// (`chi1`..`chi5`, `psi1`..`psi5`, `m61`, `m37`) of the wrong size.
    pub fn check_sz42_layout(&self) -> Result<(), LorenzError> {
        for (bank, wheels, expected) in [
            ("chi", &self.chi, SZ42_CHI_SIZES.len()),
            ("psi", &self.psi, SZ42_PSI_SIZES.len()),
        ] {
            if wheels.len() != expected {
                return Err(ConfigIssue::WheelSizeMismatch {
                    wheel: bank.to_string(),
                    expected,
                    actual: wheels.len(),
                }
                .into());
            }
        }

        let named = self
            .chi
            .iter()
            .zip(SZ42_CHI_SIZES)
            .enumerate()
            .map(|(i, (w, n))| (format!("chi{}", i + 1), w, n))
            .chain(
                self.psi
                    .iter()
                    .zip(SZ42_PSI_SIZES)
                    .enumerate()
                    .map(|(i, (w, n))| (format!("psi{}", i + 1), w, n)),
            )
            .chain([
                ("m61".to_string(), &self.m61, SZ42_M61_SIZE),
                ("m37".to_string(), &self.m37, SZ42_M37_SIZE),
            ]);

        for (wheel, config, expected) in named {
            let actual = config.pin_count()?;
            if actual != expected {
                return Err(ConfigIssue::WheelSizeMismatch {
                    wheel,
                    expected,
                    actual,
                }
                .into());
            }
        }
        Ok(())
    }
}
