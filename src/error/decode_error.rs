#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while decoding a digit string.
pub enum DecodeError {
    /// The digit string contained no digits.
    Empty,
    /// A character is not a digit of the requested radix.
    InvalidDigit {
        /// The offending character, as written.
        digit:    char,
        /// Zero-based character position, counted from the left.
        position: usize,
        /// The radix the string was decoded in.
        radix:    u32,
    },
    /// The decoded value does not fit into a 32-bit signed integer.
    Overflow {
        /// The digit string that was decoded.
        digits: String,
        /// Whether the string was read as a signed value.
        signed: bool,
    },
}

impl std::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "Cannot decode an empty digit string."),
            Self::InvalidDigit { digit, position, radix } => write!(f,
                                                                    "Invalid digit '{digit}' at position {position}: not a digit in radix {radix}."),
            Self::Overflow { digits, signed } => {
                let kind = if *signed { "signed" } else { "unsigned" };
                write!(f, "The {kind} value of '{digits}' does not fit into 32 bits.")
            },
        }
    }
}

impl std::error::Error for DecodeError {}
