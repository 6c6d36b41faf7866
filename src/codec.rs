/// The digit alphabet shared by every radix.
///
/// Defines the 36 digit characters `0-9A-Z` and the case-insensitive lookup
/// from a character to its value.
pub mod alphabet;
/// Reads digit strings into values.
///
/// The decoder turns a digit string of a given radix into a 32-bit value,
/// either as a plain unsigned magnitude or as a radix complement whose width
/// is the length of the string itself.
///
/// # Responsibilities
/// - Rejects empty input and characters outside the radix's digits.
/// - Computes magnitudes exactly and reports values that do not fit 32 bits.
/// - Applies the radix complement, or another sign mode, for signed digit
///   strings.
pub mod decode;
/// Writes values as digit strings.
///
/// The encoder is the inverse of the decoder: for every value it produces the
/// shortest digit string that decodes back to the same value under the same
/// radix and signedness.
///
/// # Responsibilities
/// - Writes plain positional digits for non-negative values.
/// - Chooses the narrowest complement width for negative signed values.
/// - Adds a leading zero where a positive signed value would read as negative.
pub mod encode;
/// The validated radix type.
pub mod radix;
/// Representations of negative values.
///
/// The radix complement is the default. Ones' complement and sign and
/// magnitude are offered for signed binary values.
pub mod sign;

pub use decode::{decode, decode_signed};
pub use encode::{encode, encode_signed};
pub use radix::Radix;
pub use sign::SignMode;
