//! # radixa
//!
//! radixa converts integers between numeral systems of radix 2 to 36.
//! Values can be read and written unsigned, or signed as a radix complement
//! that behaves like two's complement in binary while working in any radix.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{convert::Conversion, error::ConvertError, system::NumeralSystem};

/// Converts between digit strings and 32-bit values.
///
/// This module holds the pure codec: the shared digit alphabet, the validated
/// radix type, the sign modes, and the decoder and encoder for unsigned and
/// signed digit strings. Nothing in it performs I/O or keeps
/// state, so every function can be called from any thread.
///
/// # Responsibilities
/// - Defines the digit alphabet `0-9A-Z` and the radix range `2..=36`.
/// - Decodes digit strings with exact integer arithmetic and overflow checks.
/// - Encodes values as the shortest digit string that decodes back to them.
pub mod codec;
/// Runs a conversion from one numeral system to another.
///
/// This module ties the numeral systems to the codec. It validates user input
/// for the chosen input system, reads signed decimal values with a `-` sign,
/// and writes the result in the chosen output system.
///
/// # Responsibilities
/// - Rejects empty and malformed input before any conversion.
/// - Treats decimal as sign-and-magnitude and every other radix as a
///   complement, with ones' complement or sign and magnitude as options for
///   signed binary.
/// - Passes normalized input through when both systems share a radix and
///   sign mode.
pub mod convert;
/// Provides error types for every failure mode.
///
/// This module defines the errors raised while choosing a radix, decoding,
/// encoding and converting. Each error carries the offending input and maps
/// to a short user-facing message through `ConvertError::user_message`.
///
/// # Responsibilities
/// - Defines one error enum per failure domain.
/// - Implements `Display` and `std::error::Error` for each of them.
pub mod error;
/// Numeral-system selection.
///
/// This module turns selector text such as `hex` or `other: 7` into a
/// `NumeralSystem`, which resolves to a single radix before the codec runs.
pub mod system;
/// Exact integer helpers shared by the codec.
pub mod util;

/// Converts a value between two numeral systems given as selector text.
///
/// Both selectors are parsed with `NumeralSystem::from_str`, then the value is
/// converted by a [`Conversion`].
///
/// # Errors
/// Returns an error if either selector is not a valid numeral system, or if
/// the value cannot be converted.
///
/// # Examples
/// ```
/// use radixa::convert_value;
///
/// assert_eq!(convert_value("255", "decimal", "hex", false).unwrap(), "FF");
/// assert_eq!(convert_value("-8", "dec", "bin", true).unwrap(), "1000");
///
/// // 'G' is not a hexadecimal digit.
/// let err = convert_value("G", "hex", "dec", false).unwrap_err();
/// assert_eq!(err.user_message(), "Please enter a valid value!");
/// ```
pub fn convert_value(input: &str, from: &str, to: &str, signed: bool) -> Result<String, ConvertError> {
    let from: NumeralSystem = from.parse()?;
    let to: NumeralSystem = to.parse()?;

    Conversion::new(from, to, signed).run(input)
}
