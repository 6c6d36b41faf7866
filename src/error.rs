/// Conversion errors.
///
/// Raised by the conversion pipeline that ties numeral-system selection,
/// decoding and encoding together. Wraps the lower level errors and maps each
/// of them to a short user-facing message.
pub mod convert_error;
/// Decoding errors.
///
/// Defines all error types that can occur while reading a digit string:
/// empty input, characters outside the digit alphabet of the radix, and
/// values that do not fit the 32-bit value width.
pub mod decode_error;
/// Encoding errors.
pub mod encode_error;
/// Radix errors.
///
/// Raised when a radix falls outside `2..=36` or a numeral-system selector
/// cannot be parsed.
pub mod radix_error;
/// Sign mode errors.
pub mod sign_mode_error;

pub use convert_error::ConvertError;
pub use decode_error::DecodeError;
pub use encode_error::EncodeError;
pub use radix_error::RadixError;
pub use sign_mode_error::SignModeError;
