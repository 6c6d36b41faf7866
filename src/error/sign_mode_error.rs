use crate::{codec::sign::SignMode, system::NumeralSystem};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while choosing a sign mode.
pub enum SignModeError {
    /// The sign mode name is not known.
    Unknown {
        /// The name as it was given.
        text: String,
    },
    /// A sign mode other than the radix complement was chosen for a side of
    /// a conversion that is not signed binary.
    Unsupported {
        /// The rejected sign mode.
        mode:   SignMode,
        /// The numeral system of that side.
        system: NumeralSystem,
        /// Whether the conversion was signed.
        signed: bool,
    },
}

impl std::fmt::Display for SignModeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unknown { text } => write!(f,
                                             "'{text}' is not a sign mode. Expected radix complement, ones' complement or sign and magnitude."),
            Self::Unsupported { mode, signed: false, .. } => {
                write!(f, "The {mode} sign mode needs signed mode.")
            },
            Self::Unsupported { mode, system, .. } => {
                write!(f, "The {mode} sign mode is only available in binary, not in {system}.")
            },
        }
    }
}

impl std::error::Error for SignModeError {}
