use crate::error::{DecodeError, EncodeError, RadixError, SignModeError};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while converting a value between two
/// numeral systems.
pub enum ConvertError {
    /// No value was entered.
    EmptyValue,
    /// A decimal value could not be parsed as a 32-bit signed integer.
    InvalidDecimal {
        /// The rejected text.
        text: String,
    },
    /// A negative decimal value was entered in unsigned mode.
    NegativeUnsigned {
        /// The rejected value.
        value: i32,
    },
    /// A numeral system or radix was rejected.
    Radix(RadixError),
    /// The input digits could not be decoded.
    Decode(DecodeError),
    /// The decoded value could not be encoded.
    Encode(EncodeError),
    /// A sign mode was rejected.
    SignMode(SignModeError),
}

impl ConvertError {
    /// Returns the short message shown to a user for this error.
    ///
    /// Every error falls into one of four groups: a missing value, an
    /// unusable base, an unusable sign mode, or a value that is not valid for
    /// the chosen system.
    ///
    /// # Example
    /// ```
    /// use radixa::error::{ConvertError, RadixError};
    ///
    /// let err = ConvertError::Radix(RadixError::OutOfRange { radix: 40 });
    /// assert_eq!(err.user_message(),
    ///            "Please choose a base between 2 and 36 inclusive!");
    /// assert_eq!(ConvertError::EmptyValue.user_message(), "Please enter a value!");
    /// ```
    #[must_use]
    pub const fn user_message(&self) -> &'static str {
        match self {
            Self::EmptyValue | Self::Decode(DecodeError::Empty) => "Please enter a value!",
            Self::Radix(_) => "Please choose a base between 2 and 36 inclusive!",
            Self::SignMode(_) => "Please use sign modes with signed binary values only!",
            _ => "Please enter a valid value!",
        }
    }
}

impl From<RadixError> for ConvertError {
    fn from(e: RadixError) -> Self {
        Self::Radix(e)
    }
}

impl From<DecodeError> for ConvertError {
    fn from(e: DecodeError) -> Self {
        Self::Decode(e)
    }
}

impl From<EncodeError> for ConvertError {
    fn from(e: EncodeError) -> Self {
        Self::Encode(e)
    }
}

impl From<SignModeError> for ConvertError {
    fn from(e: SignModeError) -> Self {
        Self::SignMode(e)
    }
}

impl std::fmt::Display for ConvertError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyValue => write!(f, "No value was given."),
            Self::InvalidDecimal { text } => {
                write!(f, "'{text}' is not a valid 32-bit decimal integer.")
            },
            Self::NegativeUnsigned { value } => write!(f,
                                                       "Negative value {value} is not allowed in unsigned mode."),
            Self::Radix(e) => write!(f, "{e}"),
            Self::Decode(e) => write!(f, "{e}"),
            Self::Encode(e) => write!(f, "{e}"),
            Self::SignMode(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ConvertError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Radix(e) => Some(e),
            Self::Decode(e) => Some(e),
            Self::Encode(e) => Some(e),
            Self::SignMode(e) => Some(e),
            _ => None,
        }
    }
}
