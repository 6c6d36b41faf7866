/// The digit alphabet shared by every radix.
///
/// A digit's value is its index in this table, so radix `R` uses the first
/// `R` entries.
pub const DIGITS: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Looks up the value of a digit character.
///
/// Lowercase letters are accepted and read as their uppercase counterparts.
/// Whether the value is valid for a particular radix is left to the caller.
///
/// # Returns
/// - `Some(u32)`: The digit's index in [`DIGITS`].
/// - `None`: If the character is not part of the alphabet.
///
/// # Example
/// ```
/// use radixa::codec::alphabet::digit_value;
///
/// assert_eq!(digit_value('7'), Some(7));
/// assert_eq!(digit_value('f'), Some(15));
/// assert_eq!(digit_value('Z'), Some(35));
/// assert_eq!(digit_value('-'), None);
/// ```
#[must_use]
pub fn digit_value(digit: char) -> Option<u32> {
    let upper = digit.to_ascii_uppercase();
    DIGITS.iter()
          .position(|&d| char::from(d) == upper)
          .and_then(|index| u32::try_from(index).ok())
}
