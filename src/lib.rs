//! Lorenz SZ40/42 teleprinter cipher machine.
//!
//! The Lorenz machine enciphered 5-bit Baudot (ITA2) teleprinter traffic by
//! XORing each character with a key built from two banks of pinned wheels.
//! The chi wheels step on every character; the psi wheels step only when
//! the M37 motor wheel shows a raised pin, and M37 itself steps only when
//! the M61 motor wheel does. That irregular motion is what this crate
//! models. The cipher has no security value today.
//!
//! # Architecture
//!
//! ```text
//! Rotor         (one wheel: cyclic pin pattern + position)
//!     ↕ grouped
//! RotorBank     (chi / psi: rotors read together as one multi-bit value)
//!     ↕ two banks + two motor rotors
//! CipherEngine  (key = psi ^ chi, XOR, then motor-controlled stepping)
//!     ↕ wrapped by
//! Teleprinter   (ITA2 text <-> codes)
//! ```
//!
//! # Examples
//!
//! Encipher and decipher with two identically set machines:
//!
//! ```
//! use lorenz_sz::{CipherEngine, Rotor, RotorBank};
//!
//! fn machine() -> CipherEngine {
//!     let bank = |patterns: &[&[u8]]| {
//!         RotorBank::new(
//!             patterns
//!                 .iter()
//!                 .map(|p| Rotor::new(p.to_vec()).unwrap())
//!                 .collect(),
//!         )
//!         .unwrap()
//!     };
//!     CipherEngine::new(
//!         Rotor::new(vec![1, 0, 1]).unwrap(),
//!         Rotor::new(vec![0, 1]).unwrap(),
//!         bank(&[&[1, 0], &[0, 1, 1]]),
//!         bank(&[&[0, 1, 1, 0, 1], &[1, 1, 0]]),
//!     )
//!     .unwrap()
//! }
//!
//! let plaintext = [0b00, 0b01, 0b10, 0b11, 0b10];
//!
//! let mut encoder = machine();
//! let ciphertext: Vec<u32> = plaintext.iter().map(|&c| encoder.process(c)).collect();
//!
//! let mut decoder = machine();
//! let recovered: Vec<u32> = ciphertext.iter().map(|&c| decoder.process(c)).collect();
//! assert_eq!(recovered, plaintext);
//! ```
//!
//! Build a machine from a configuration document and send text:
//!
//! ```
//! use lorenz_sz::{MachineConfig, Teleprinter};
//!
//! let config = MachineConfig::from_json(r#"{
//!     "m61": { "pins": "x.xx." },
//!     "m37": { "pins": "xx.", "start": 2 },
//!     "psi": [{ "pins": "x." }, { "pins": ".x" }, { "pins": "xx." },
//!             { "pins": "." }, { "pins": "x.." }],
//!     "chi": [{ "pins": ".x" }, { "pins": "x" }, { "pins": "x.x" },
//!             { "pins": "xx" }, { "pins": ".x.x" }]
//! }"#).unwrap();
//!
//! let mut sender = Teleprinter::new(config.build().unwrap()).unwrap();
//! let ciphertext = sender.encrypt_message("ATTACK AT DAWN").unwrap();
//!
//! let mut receiver = Teleprinter::new(config.build().unwrap()).unwrap();
//! assert_eq!(receiver.encrypt_message(&ciphertext).unwrap(), "ATTACK AT DAWN");
//! ```

#![deny(clippy::all)]

pub mod config;
pub mod error;
pub mod teleprinter;

mod cipher_engine;
mod rotor;
mod rotor_bank;
pub(crate) mod utils;

pub use cipher_engine::CipherEngine;
pub use config::{MachineConfig, WheelConfig};
pub use error::{ConfigIssue, LorenzError};
pub use rotor::Rotor;
pub use rotor_bank::{RotorBank, MAX_BANK_WIDTH};
pub use teleprinter::Teleprinter;
