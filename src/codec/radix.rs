use crate::{codec::alphabet::DIGITS, error::RadixError};

/// Smallest supported radix.
pub const MIN_RADIX: u32 = 2;
/// Largest supported radix; one per alphabet entry.
#[allow(clippy::cast_possible_truncation)]
pub const MAX_RADIX: u32 = DIGITS.len() as u32;

/// The base of a positional numeral system.
///
/// A `Radix` can only be built through [`Radix::new`] (or `TryFrom<u32>`),
/// which checks the range `2..=36`. Code holding a `Radix` therefore never
/// re-validates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Radix(u32);

impl Radix {
    /// Radix 2.
    pub const BINARY: Self = Self(2);
    /// Radix 8.
    pub const OCTAL: Self = Self(8);
    /// Radix 10.
    pub const DECIMAL: Self = Self(10);
    /// Radix 16.
    pub const HEXADECIMAL: Self = Self(16);

    /// Creates a radix after checking that it lies within `2..=36`.
    ///
    /// # Errors
    /// Returns `RadixError::OutOfRange` for any other value.
    ///
    /// # Example
    /// ```
    /// use radixa::{codec::radix::Radix, error::RadixError};
    ///
    /// assert_eq!(Radix::new(16).unwrap().get(), 16);
    /// assert_eq!(Radix::new(37), Err(RadixError::OutOfRange { radix: 37 }));
    /// assert!(Radix::new(1).is_err());
    /// ```
    pub const fn new(radix: u32) -> Result<Self, RadixError> {
        if radix < MIN_RADIX || radix > MAX_RADIX {
            return Err(RadixError::OutOfRange { radix });
        }
        Ok(Self(radix))
    }

    /// Returns the radix as a plain integer.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Returns `true` if `digit` is a valid digit value in this radix.
    #[must_use]
    pub const fn admits(self, digit: u32) -> bool {
        digit < self.0
    }
}

impl TryFrom<u32> for Radix {
    type Error = RadixError;

    fn try_from(radix: u32) -> Result<Self, Self::Error> {
        Self::new(radix)
    }
}

impl std::fmt::Display for Radix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
