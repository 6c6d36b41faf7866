use std::str::FromStr;

use crate::{
    codec::radix::Radix,
    error::RadixError,
    system::lexer::{Token, tokenize},
};

/// A numeral system the user can pick for either side of a conversion.
///
/// The four named systems are fixed presets; anything else is a `Custom`
/// radix. Every system resolves to a single [`Radix`] before it reaches the
/// codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumeralSystem {
    /// Radix 2.
    Binary,
    /// Radix 8.
    Octal,
    /// Radix 10. Decimal values are read and written with a `-` sign instead
    /// of a complement.
    Decimal,
    /// Radix 16.
    Hexadecimal,
    /// Any other radix in `2..=36`.
    Custom(Radix),
}

impl NumeralSystem {
    /// Returns the radix this system stands for.
    ///
    /// # Example
    /// ```
    /// use radixa::{codec::radix::Radix, system::numeral::NumeralSystem};
    ///
    /// assert_eq!(NumeralSystem::Hexadecimal.radix(), Radix::HEXADECIMAL);
    /// assert_eq!(NumeralSystem::custom(7).unwrap().radix().get(), 7);
    /// ```
    #[must_use]
    pub const fn radix(self) -> Radix {
        match self {
            Self::Binary => Radix::BINARY,
            Self::Octal => Radix::OCTAL,
            Self::Decimal => Radix::DECIMAL,
            Self::Hexadecimal => Radix::HEXADECIMAL,
            Self::Custom(radix) => radix,
        }
    }

    /// Returns the display name of the preset this system belongs to.
    ///
    /// # Example
    /// ```
    /// use radixa::system::numeral::NumeralSystem;
    ///
    /// assert_eq!(NumeralSystem::Hexadecimal.name(), "Hexadecimal");
    /// assert_eq!(NumeralSystem::custom(7).unwrap().name(), "Other");
    /// ```
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Binary => "Binary",
            Self::Octal => "Octal",
            Self::Decimal => "Decimal",
            Self::Hexadecimal => "Hexadecimal",
            Self::Custom(_) => "Other",
        }
    }

    /// Creates a custom system after checking the radix.
    ///
    /// # Errors
    /// Returns `RadixError::OutOfRange` if `radix` is not within `2..=36`.
    pub fn custom(radix: u32) -> Result<Self, RadixError> {
        Radix::new(radix).map(Self::Custom)
    }

    /// Returns `true` if values of this system are written in signed decimal
    /// notation. This holds for a custom radix of 10 as well.
    #[must_use]
    pub const fn is_decimal(self) -> bool {
        self.radix().get() == Radix::DECIMAL.get()
    }
}

impl From<Radix> for NumeralSystem {
    fn from(radix: Radix) -> Self {
        match radix {
            Radix::BINARY => Self::Binary,
            Radix::OCTAL => Self::Octal,
            Radix::DECIMAL => Self::Decimal,
            Radix::HEXADECIMAL => Self::Hexadecimal,
            _ => Self::Custom(radix),
        }
    }
}

impl FromStr for NumeralSystem {
    type Err = RadixError;

    /// Parses a selector such as `bin`, `Hexadecimal`, `other:7`,
    /// `base 36` or `12`.
    ///
    /// A bare radix that matches one of the presets yields that preset.
    ///
    /// # Example
    /// ```
    /// use radixa::{error::RadixError, system::numeral::NumeralSystem};
    ///
    /// assert_eq!("bin".parse::<NumeralSystem>(), Ok(NumeralSystem::Binary));
    /// assert_eq!("16".parse::<NumeralSystem>(), Ok(NumeralSystem::Hexadecimal));
    /// assert_eq!("other: 7".parse::<NumeralSystem>(), NumeralSystem::custom(7));
    /// assert_eq!("base 40".parse::<NumeralSystem>(),
    ///            Err(RadixError::OutOfRange { radix: 40 }));
    /// ```
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        match tokenize(text)?.as_slice() {
            [Token::Binary] => Ok(Self::Binary),
            [Token::Octal] => Ok(Self::Octal),
            [Token::Decimal] => Ok(Self::Decimal),
            [Token::Hexadecimal] => Ok(Self::Hexadecimal),
            [Token::Integer(radix)] => Radix::new(*radix).map(Self::from),
            [Token::Other, Token::Integer(radix)]
            | [Token::Other, Token::Separator, Token::Integer(radix)] => Self::custom(*radix),
            _ => Err(RadixError::Malformed { text: text.to_string() }),
        }
    }
}

impl std::fmt::Display for NumeralSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Binary => write!(f, "binary"),
            Self::Octal => write!(f, "octal"),
            Self::Decimal => write!(f, "decimal"),
            Self::Hexadecimal => write!(f, "hexadecimal"),
            Self::Custom(radix) => write!(f, "base {radix}"),
        }
    }
}
