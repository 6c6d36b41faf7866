use crate::codec::radix::{MAX_RADIX, MIN_RADIX};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while selecting a radix.
pub enum RadixError {
    /// The radix lies outside the supported range.
    OutOfRange {
        /// The rejected radix.
        radix: u32,
    },
    /// A numeral-system selector could not be understood.
    Malformed {
        /// The selector text as it was given.
        text: String,
    },
}

impl std::fmt::Display for RadixError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfRange { radix } => write!(f,
                                                 "Radix {radix} is out of range. Expected a radix between {MIN_RADIX} and {MAX_RADIX}."),
            Self::Malformed { text } => {
                write!(f, "'{text}' is not a numeral system or a radix.")
            },
        }
    }
}

impl std::error::Error for RadixError {}
