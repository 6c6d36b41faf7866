use log::trace;

use crate::{
    codec::{alphabet::DIGITS, radix::Radix, sign::SignMode},
    error::EncodeError,
    util::num::{checked_radix_pow, value_magnitude},
};

/// Result type used by the encoder.
pub type EncodeResult<T> = Result<T, EncodeError>;

/// Encodes a 32-bit value as the shortest digit string in `radix`.
///
/// Unsigned values are written as plain positional digits. Signed values are
/// written by [`encode_signed`] as radix complements.
///
/// # Errors
/// Returns `EncodeError::NegativeUnsigned` if `value` is negative and `signed`
/// is `false`.
///
/// # Example
/// ```
/// use radixa::codec::{encode::encode, radix::Radix};
///
/// assert_eq!(encode(255, Radix::HEXADECIMAL, false).unwrap(), "FF");
/// assert_eq!(encode(8, Radix::BINARY, true).unwrap(), "01000");
/// assert_eq!(encode(-8, Radix::BINARY, true).unwrap(), "1000");
/// assert_eq!(encode(0, Radix::new(36).unwrap(), true).unwrap(), "0");
/// ```
pub fn encode(value: i32, radix: Radix, signed: bool) -> EncodeResult<String> {
    if signed {
        return Ok(encode_signed(value, radix, SignMode::RadixComplement));
    }
    if value < 0 {
        return Err(EncodeError::NegativeUnsigned { value });
    }
    Ok(to_digits(value_magnitude(value), radix))
}

/// Encodes a signed 32-bit value as the shortest digit string in `radix`
/// that decodes back to it under `mode`.
///
/// A positive value whose plain digits would already read as negative gets
/// one extra leading `0`. A negative value is written in the narrowest width
/// that can hold it under `mode`, see [`complement_capacity`] for the radix
/// complement.
///
/// # Example
/// ```
/// use radixa::codec::{encode::encode_signed, radix::Radix, sign::SignMode};
///
/// assert_eq!(encode_signed(-5, Radix::BINARY, SignMode::RadixComplement), "1011");
/// assert_eq!(encode_signed(-5, Radix::BINARY, SignMode::OnesComplement), "1010");
/// assert_eq!(encode_signed(-5, Radix::BINARY, SignMode::SignAndMagnitude), "1101");
/// assert_eq!(encode_signed(5, Radix::BINARY, SignMode::SignAndMagnitude), "0101");
/// ```
#[must_use]
pub fn encode_signed(value: i32, radix: Radix, mode: SignMode) -> String {
    let magnitude = value_magnitude(value);

    if value < 0 {
        let capacity = negative_capacity(magnitude, radix, mode);
        let digits = to_digits(mode.negative_raw(magnitude, capacity), radix);
        trace!("Encoded {value} in radix {radix} as {}-digit {mode} {digits}",
               digits.len());
        return digits;
    }

    let digits = to_digits(magnitude, radix);
    if reads_negative(magnitude, digits.len(), radix) {
        return format!("0{digits}");
    }
    digits
}

/// Finds the capacity `radix^n` of the shortest digit string that can hold
/// `-magnitude` as a radix complement.
///
/// The width grows one digit at a time until `capacity - magnitude` is at
/// least `capacity / 2`, which is exactly the condition under which the
/// decoder reads the complement back as negative. Only integer arithmetic is
/// involved, so powers of the radix are handled exactly.
///
/// `magnitude` must be non-zero and at most `2^31`.
///
/// # Example
/// ```
/// use radixa::codec::{encode::complement_capacity, radix::Radix};
///
/// // -3 needs three bits: 8 - 3 = 0b101.
/// assert_eq!(complement_capacity(3, Radix::BINARY), 8);
/// // -8 needs four bits: 16 - 8 = 0b1000.
/// assert_eq!(complement_capacity(8, Radix::BINARY), 16);
/// // -5 fits into a single decimal digit: 10 - 5 = 5.
/// assert_eq!(complement_capacity(5, Radix::DECIMAL), 10);
/// ```
#[must_use]
pub fn complement_capacity(magnitude: u128, radix: Radix) -> u128 {
    negative_capacity(magnitude, radix, SignMode::RadixComplement)
}

fn negative_capacity(magnitude: u128, radix: Radix, mode: SignMode) -> u128 {
    let base = u128::from(radix.get());
    let mut capacity = base;
    while magnitude > mode.max_negative(capacity) {
        capacity *= base;
    }
    capacity
}

/// Returns `true` if the plain `len`-digit string of `magnitude` would be
/// read as negative by a signed decoder, i.e. it reaches half its capacity.
fn reads_negative(magnitude: u128, len: usize, radix: Radix) -> bool {
    checked_radix_pow(radix.get(), len).is_some_and(|capacity| magnitude >= capacity / 2)
}

/// Writes a magnitude as plain positional digits, most significant first.
#[allow(clippy::cast_possible_truncation)]
fn to_digits(mut magnitude: u128, radix: Radix) -> String {
    if magnitude == 0 {
        return "0".to_string();
    }

    let base = u128::from(radix.get());
    let mut reversed = Vec::new();
    while magnitude > 0 {
        // Below `base`, which never exceeds the alphabet length.
        let index = (magnitude % base) as usize;
        reversed.push(char::from(DIGITS[index]));
        magnitude /= base;
    }
    reversed.iter().rev().collect()
}
