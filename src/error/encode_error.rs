#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while encoding a value.
pub enum EncodeError {
    /// A negative value was encoded without a signed interpretation.
    NegativeUnsigned {
        /// The rejected value.
        value: i32,
    },
}

impl std::fmt::Display for EncodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NegativeUnsigned { value } => {
                write!(f, "Cannot encode {value} as an unsigned digit string.")
            },
        }
    }
}

impl std::error::Error for EncodeError {}
