//! Pin pattern text utilities.
//!
//! Wheel patterns are written either as binary digits (`0110`) or in the
//! Bletchley Park cross/dot notation (`.xx.`), where `x` is a raised pin
//! and `.` a lowered one. ASCII whitespace is ignored so long wheels can
//! be grouped for readability.

use crate::error::{ConfigIssue, LorenzError};

/// Parses a pin pattern into pin values.
///
/// # Parameters
/// - `text`: Pins as `0`/`1` or `.`/`x` (case-insensitive), mixed freely.
///
/// # Returns
/// One value (0 or 1) per pin symbol.
///
/// # Errors
/// Returns [`ConfigIssue::InvalidPinSymbol`] for any other character,
/// with the byte offset of that character.
pub(crate) fn parse_pins(text: &str) -> Result<Vec<u8>, LorenzError> {
    let mut pins = Vec::with_capacity(text.len());
    for (index, symbol) in text.char_indices() {
        match symbol {
            '0' | '.' => pins.push(0),
            '1' | 'x' | 'X' => pins.push(1),
            c if c.is_ascii_whitespace() => {}
            _ => return Err(ConfigIssue::InvalidPinSymbol { index, symbol }.into()),
        }
    }
    Ok(pins)
}

/// Renders pins in cross/dot notation.
pub(crate) fn format_pins(pins: &[u8]) -> String {
    pins.iter()
        .map(|&p| if p == 1 { 'x' } else { '.' })
        .collect()
}

/// Number of raised pins.
pub(crate) fn raised_count(pins: &[u8]) -> usize {
    pins.iter().filter(|&&p| p == 1).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_binary() {
        assert_eq!(parse_pins("0110").unwrap(), vec![0, 1, 1, 0]);
    }

    #[test]
    fn test_parse_cross_dot() {
        assert_eq!(parse_pins(".xX.").unwrap(), vec![0, 1, 1, 0]);
    }

    #[test]
    fn test_parse_ignores_whitespace() {
        assert_eq!(parse_pins("01 10\n x.").unwrap(), vec![0, 1, 1, 0, 1, 0]);
    }

    #[test]
    fn test_parse_empty_is_empty() {
        assert!(parse_pins("  ").unwrap().is_empty());
    }

    #[test]
    fn test_parse_invalid_symbol() {
        assert_eq!(
            parse_pins("01a"),
            Err(ConfigIssue::InvalidPinSymbol {
                index: 2,
                symbol: 'a'
            }
            .into())
        );
    }

    #[test]
    fn test_format_pins() {
        assert_eq!(format_pins(&[0, 1, 1, 0]), ".xx.");
        assert_eq!(parse_pins(&format_pins(&[1, 0, 1])).unwrap(), vec![1, 0, 1]);
    }

    #[test]
    fn test_raised_count() {
        assert_eq!(raised_count(&[1, 0, 1, 1]), 3);
        assert_eq!(raised_count(&[0]), 0);
    }
}
