//! Bit string ↔ integer conversions that keep leading zeros.
//!
//! Read as a base-2 number, "0011" and "11" are the same value. To keep every bit, a
//! sentinel '1' is put in front before the conversion and taken off again on the way
//! back, so "0011" is stored as 0b10011 = 19 and the empty string as 1. Every bit string
//! maps to exactly one positive integer and back.

use num_bigint::BigUint;

use crate::error::CodingError;

/// Check that `bits` only holds '0' and '1'.
fn check_bits(bits: &str) -> Result<(), CodingError> {
    match bits.chars().enumerate().find(|&(_, c)| c != '0' && c != '1') {
        Some((position, found)) => Err(CodingError::InvalidBit { position, found }),
        None => Ok(()),
    }
}

/// Sentinel-prefixed integer value of a bit string.
fn bits_as_int(bits: &str) -> Result<BigUint, CodingError> {
    check_bits(bits)?;
    // Pack sentinel + bits into big-endian bytes, zero padded at the front.
    let total = bits.len() + 1;
    let mut packed = vec![0_u8; (total + 7) / 8];
    let offset = packed.len() * 8 - total;
    for (i, digit) in std::iter::once(b'1').chain(bits.bytes()).enumerate() {
        if digit == b'1' {
            let pos = offset + i;
            packed[pos / 8] |= 0x80 >> (pos % 8);
        }
    }
    Ok(BigUint::from_bytes_be(&packed))
}

/// Bit string of a sentinel-prefixed integer. Zero has no sentinel and is refused.
fn int_as_bits(number: &BigUint, shown: impl FnOnce() -> String) -> Result<String, CodingError> {
    let binary = number.to_str_radix(2);
    match binary.strip_prefix('1') {
        Some(bits) => Ok(bits.to_string()),
        None => Err(CodingError::InvalidNumber(shown())),
    }
}

/// Returns the decimal form of a bit string, e.g. "0011" → "19".
pub fn sequence_of_bits_as_number(bits: &str) -> Result<String, CodingError> {
    Ok(bits_as_int(bits)?.to_str_radix(10))
}

/// Returns the bit string of a decimal number made by [`sequence_of_bits_as_number`],
/// e.g. "19" → "0011".
///
/// Only plain ASCII digits are accepted, and the value must be at least 1.
pub fn number_as_sequence_of_bits(number: &str) -> Result<String, CodingError> {
    if number.is_empty() || !number.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CodingError::InvalidNumber(number.to_string()));
    }
    let value = BigUint::parse_bytes(number.as_bytes(), 10)
        .ok_or_else(|| CodingError::InvalidNumber(number.to_string()))?;
    int_as_bits(&value, || number.to_string())
}

/// Same encoding as [`sequence_of_bits_as_number`], written as big-endian bytes.
/// This is the compact form used inside compressed files.
pub fn bits_as_bytes(bits: &str) -> Result<Vec<u8>, CodingError> {
    Ok(bits_as_int(bits)?.to_bytes_be())
}

/// Inverse of [`bits_as_bytes`].
pub fn bytes_as_bits(bytes: &[u8]) -> Result<String, CodingError> {
    let value = BigUint::from_bytes_be(bytes);
    int_as_bits(&value, || format!("0x{}", hex(bytes)))
}

fn hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn leading_zeros_survive() {
        let number = sequence_of_bits_as_number("0011").unwrap();
        assert_eq!(number, "19");
        assert_eq!(number_as_sequence_of_bits(&number).unwrap(), "0011");
    }

    #[test]
    fn empty_and_zero_strings() {
        assert_eq!(sequence_of_bits_as_number("").unwrap(), "1");
        assert_eq!(number_as_sequence_of_bits("1").unwrap(), "");
        assert_eq!(sequence_of_bits_as_number("0000").unwrap(), "16");
        assert_eq!(number_as_sequence_of_bits("16").unwrap(), "0000");
    }

    #[test]
    fn long_strings() {
        let bits = "0".repeat(300) + "1" + &"10".repeat(200);
        let number = sequence_of_bits_as_number(&bits).unwrap();
        assert_eq!(number_as_sequence_of_bits(&number).unwrap(), bits);
    }

    #[test]
    fn bad_bits() {
        assert_eq!(
            sequence_of_bits_as_number("0120"),
            Err(CodingError::InvalidBit { position: 2, found: '2' })
        );
    }

    #[test]
    fn bad_numbers() {
        for bad in ["", "0", "000", "-3", "+3", "1_0", "12a", " 7"] {
            assert_eq!(
                number_as_sequence_of_bits(bad),
                Err(CodingError::InvalidNumber(bad.to_string())),
                "{:?}",
                bad
            );
        }
    }

    #[test]
    fn bytes_test() {
        assert_eq!(bits_as_bytes("").unwrap(), vec![1]);
        assert_eq!(bits_as_bytes("0011").unwrap(), vec![19]);
        assert_eq!(bits_as_bytes("00000000").unwrap(), vec![1, 0]);
        assert_eq!(bytes_as_bits(&[1, 0]).unwrap(), "00000000");
        assert_eq!(bytes_as_bits(&[0, 0, 19]).unwrap(), "0011");
        assert_eq!(
            bytes_as_bits(&[0, 0]),
            Err(CodingError::InvalidNumber("0x0000".to_string()))
        );
        assert!(bytes_as_bits(&[]).is_err());
    }
}
