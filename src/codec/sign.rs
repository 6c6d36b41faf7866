use std::str::FromStr;

use crate::error::SignModeError;

/// How a signed digit string stands for a negative value.
///
/// In every mode a string of `n` digits reads as negative once its raw
/// magnitude reaches half its capacity `radix^n`. The modes only differ in how
/// the remaining magnitude is laid out. `OnesComplement` and
/// `SignAndMagnitude` are the usual binary representations; in other radices
/// the former is the diminished radix complement.
///
/// Both of them have a second, negative form of zero, which decodes to `0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SignMode {
    /// `raw - radix^n`. Two's complement in binary.
    #[default]
    RadixComplement,
    /// `raw - (radix^n - 1)`.
    OnesComplement,
    /// `-(raw - radix^n / 2)`, the leading digit only carries the sign.
    SignAndMagnitude,
}

impl SignMode {
    /// Returns the magnitude of the negative value stored as `raw` in a
    /// digit string of the given capacity.
    ///
    /// `raw` must lie within `capacity / 2..capacity`.
    pub(crate) const fn negative_magnitude(self, raw: u128, capacity: u128) -> u128 {
        match self {
            Self::RadixComplement => capacity - raw,
            Self::OnesComplement => capacity - 1 - raw,
            Self::SignAndMagnitude => raw - capacity / 2,
        }
    }

    /// Returns the raw digits storing `-magnitude` in a digit string of the
    /// given capacity. Inverse of [`SignMode::negative_magnitude`].
    pub(crate) const fn negative_raw(self, magnitude: u128, capacity: u128) -> u128 {
        match self {
            Self::RadixComplement => capacity - magnitude,
            Self::OnesComplement => capacity - 1 - magnitude,
            Self::SignAndMagnitude => capacity / 2 + magnitude,
        }
    }

    /// Returns the largest magnitude a negative value may have in a digit
    /// string of the given capacity.
    pub(crate) const fn max_negative(self, capacity: u128) -> u128 {
        match self {
            Self::RadixComplement => capacity - capacity / 2,
            Self::OnesComplement | Self::SignAndMagnitude => capacity - capacity / 2 - 1,
        }
    }
}

impl FromStr for SignMode {
    type Err = SignModeError;

    /// Parses a sign mode name, ignoring case, apostrophes and the choice of
    /// space, `-` or `_` between words.
    ///
    /// # Example
    /// ```
    /// use radixa::codec::sign::SignMode;
    ///
    /// assert_eq!("twos".parse::<SignMode>(), Ok(SignMode::RadixComplement));
    /// assert_eq!("One's complement".parse::<SignMode>(), Ok(SignMode::OnesComplement));
    /// assert_eq!("sign_and_magnitude".parse::<SignMode>(), Ok(SignMode::SignAndMagnitude));
    /// assert!("nines".parse::<SignMode>().is_err());
    /// ```
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let name: String = text.trim()
                               .chars()
                               .filter(|&c| c != '\'')
                               .map(|c| match c {
                                   ' ' | '_' => '-',
                                   _ => c.to_ascii_lowercase(),
                               })
                               .collect();

        match name.as_str() {
            "radix-complement" | "twos-complement" | "twos" | "complement" => {
                Ok(Self::RadixComplement)
            },
            "ones-complement" | "ones" => Ok(Self::OnesComplement),
            "sign-and-magnitude" | "sign-magnitude" | "magnitude" => Ok(Self::SignAndMagnitude),
            _ => Err(SignModeError::Unknown { text: text.to_string() }),
        }
    }
}

impl std::fmt::Display for SignMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RadixComplement => write!(f, "radix complement"),
            Self::OnesComplement => write!(f, "ones' complement"),
            Self::SignAndMagnitude => write!(f, "sign and magnitude"),
        }
    }
}
