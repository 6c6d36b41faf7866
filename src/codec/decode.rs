use log::trace;

use crate::{
    codec::{alphabet::digit_value, radix::Radix, sign::SignMode},
    error::DecodeError,
    util::num::{checked_radix_pow, negated_u128_to_value_checked, u128_to_value_checked},
};

/// Result type used by the decoder.
pub type DecodeResult<T> = Result<T, DecodeError>;

/// Raw magnitudes from here on cannot be classified by sign once the
/// capacity of the digit string no longer fits into a `u128`.
const SIGN_UNDECIDABLE: u128 = 1 << 127;

/// Decodes a digit string into a 32-bit value.
///
/// The digits are read most significant first, with each digit weighted by
/// the matching power of `radix`. Letters may be written in either case.
///
/// With `signed` set, the magnitude is read as a radix complement of the
/// string's own length: a string of `n` digits whose magnitude reaches
/// `radix^n / 2` stands for `magnitude - radix^n`. In binary this is plain
/// two's complement, so `1000` is `-8` while `01000` is `8`.
///
/// # Errors
/// - `DecodeError::Empty` if `digits` is empty.
/// - `DecodeError::InvalidDigit` for the first character that is not a digit
///   of `radix`.
/// - `DecodeError::Overflow` if the result does not fit into an `i32`. Unsigned
///   results must lie within `0..=i32::MAX`.
///
/// # Example
/// ```
/// use radixa::codec::{decode::decode, radix::Radix};
///
/// assert_eq!(decode("ff", Radix::HEXADECIMAL, false), Ok(255));
/// assert_eq!(decode("1000", Radix::BINARY, false), Ok(8));
/// assert_eq!(decode("1000", Radix::BINARY, true), Ok(-8));
/// assert!(decode("G", Radix::HEXADECIMAL, false).is_err());
/// ```
pub fn decode(digits: &str, radix: Radix, signed: bool) -> DecodeResult<i32> {
    if signed {
        return decode_signed(digits, radix, SignMode::RadixComplement);
    }

    let (magnitude, _) = read_magnitude(digits, radix, false)?;
    u128_to_value_checked(magnitude).ok_or_else(|| overflow(digits, false))
}

/// Decodes a signed digit string, reading negative values according to
/// `mode`.
///
/// A string of `n` digits is negative once its raw magnitude reaches
/// `radix^n / 2`, whatever the mode.
///
/// # Errors
/// The same as [`decode`].
///
/// # Example
/// ```
/// use radixa::codec::{decode::decode_signed, radix::Radix, sign::SignMode};
///
/// assert_eq!(decode_signed("1010", Radix::BINARY, SignMode::OnesComplement), Ok(-5));
/// assert_eq!(decode_signed("1101", Radix::BINARY, SignMode::SignAndMagnitude), Ok(-5));
/// assert_eq!(decode_signed("1111", Radix::BINARY, SignMode::OnesComplement), Ok(0));
/// assert_eq!(decode_signed("0110", Radix::BINARY, SignMode::SignAndMagnitude), Ok(6));
/// ```
pub fn decode_signed(digits: &str, radix: Radix, mode: SignMode) -> DecodeResult<i32> {
    let (raw, count) = read_magnitude(digits, radix, true)?;
    let overflowed = || overflow(digits, true);

    match checked_radix_pow(radix.get(), count) {
        Some(capacity) if raw >= capacity / 2 => {
            negated_u128_to_value_checked(mode.negative_magnitude(raw, capacity)).ok_or_else(overflowed)
        },
        Some(_) => u128_to_value_checked(raw).ok_or_else(overflowed),
        None if raw < SIGN_UNDECIDABLE => u128_to_value_checked(raw).ok_or_else(overflowed),
        None => Err(overflowed()),
    }
}

/// Reads the plain positional magnitude of `digits` along with its digit
/// count.
fn read_magnitude(digits: &str, radix: Radix, signed: bool) -> DecodeResult<(u128, usize)> {
    if digits.is_empty() {
        return Err(DecodeError::Empty);
    }

    let base = u128::from(radix.get());
    let mut magnitude: u128 = 0;
    let mut count = 0;

    for (position, digit) in digits.chars().enumerate() {
        let Some(value) = digit_value(digit).filter(|&v| radix.admits(v)) else {
            return Err(DecodeError::InvalidDigit { digit,
                                                   position,
                                                   radix: radix.get() });
        };
        magnitude = magnitude.checked_mul(base)
                             .and_then(|m| m.checked_add(u128::from(value)))
                             .ok_or_else(|| overflow(digits, signed))?;
        count += 1;
    }

    trace!("Decoded {count} digits in radix {radix} to magnitude {magnitude}");
    Ok((magnitude, count))
}

fn overflow(digits: &str, signed: bool) -> DecodeError {
    DecodeError::Overflow { digits: digits.to_string(),
                            signed }
}
