/// Tokenizes numeral-system selectors.
///
/// The lexer reads the short phrases a user types to pick a numeral system,
/// such as `hex`, `Other system: 7` or `36`, and produces keyword, separator
/// and integer tokens.
pub mod lexer;
/// The numeral systems offered for conversion.
///
/// Declares the `NumeralSystem` variant over the named presets and custom
/// radices, resolves each to a single radix and parses selectors built from
/// the lexer's tokens.
pub mod numeral;

pub use numeral::NumeralSystem;
