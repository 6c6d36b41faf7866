use log::debug;

use crate::{
    codec::{Radix, SignMode, decode, decode_signed, encode, encode_signed},
    error::{ConvertError, SignModeError},
    system::NumeralSystem,
};

/// Result type used by the conversion pipeline.
pub type ConvertResult<T> = Result<T, ConvertError>;

/// A conversion from one numeral system to another.
///
/// ## Usage
///
/// A `Conversion` holds the user's choice of input system, output system and
/// signedness. It is cheap to copy and can be reused for any number of
/// values through [`Conversion::run`].
///
/// Signed decimal values carry a `-` sign. Signed values of every other
/// system are radix complements, as read and written by the codec. Signed
/// binary values may use another [`SignMode`] on either side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Conversion {
    /// The system the input value is written in.
    pub from:      NumeralSystem,
    /// The system the result is written in.
    pub to:        NumeralSystem,
    /// Whether values are read and written as signed.
    pub signed:    bool,
    /// How negative input values are written.
    pub from_sign: SignMode,
    /// How negative results are written.
    pub to_sign:   SignMode,
}

impl Default for Conversion {
    /// Decimal to binary, unsigned.
    fn default() -> Self {
        Self::new(NumeralSystem::Decimal, NumeralSystem::Binary, false)
    }
}

impl Conversion {
    /// Creates a conversion between two systems using the radix complement on
    /// both sides.
    #[must_use]
    pub const fn new(from: NumeralSystem, to: NumeralSystem, signed: bool) -> Self {
        Self { from,
               to,
               signed,
               from_sign: SignMode::RadixComplement,
               to_sign: SignMode::RadixComplement }
    }

    /// Returns the same conversion with the given sign modes for input and
    /// output.
    ///
    /// # Example
    /// ```
    /// use radixa::{codec::SignMode, convert::Conversion, system::NumeralSystem};
    ///
    /// let conversion = Conversion::new(NumeralSystem::Binary, NumeralSystem::Binary, true)
    ///     .with_sign_modes(SignMode::OnesComplement, SignMode::SignAndMagnitude);
    /// assert_eq!(conversion.run("1010").unwrap(), "1101");
    /// ```
    #[must_use]
    pub const fn with_sign_modes(self, from_sign: SignMode, to_sign: SignMode) -> Self {
        Self { from_sign, to_sign, ..self }
    }

    /// Returns the same conversion with input and output systems exchanged.
    ///
    /// # Example
    /// ```
    /// use radixa::{convert::Conversion, system::NumeralSystem};
    ///
    /// let forward = Conversion::new(NumeralSystem::Hexadecimal, NumeralSystem::Octal, true);
    /// let back = forward.swapped();
    /// assert_eq!(back.from, NumeralSystem::Octal);
    /// assert_eq!(back.to, NumeralSystem::Hexadecimal);
    /// assert!(back.signed);
    /// ```
    #[must_use]
    pub const fn swapped(self) -> Self {
        Self { from:      self.to,
               to:        self.from,
               signed:    self.signed,
               from_sign: self.to_sign,
               to_sign:   self.from_sign, }
    }

    /// Converts a value written in the input system into the output system.
    ///
    /// The input is always validated against the input system first. If both
    /// systems share the same radix and sign mode, the validated input is
    /// returned in normal form: decimal values as plain integers, letters
    /// uppercased otherwise.
    ///
    /// # Errors
    /// - `ConvertError::EmptyValue` if `input` is empty.
    /// - `ConvertError::SignMode` if a side other than signed binary asks for
    ///   a sign mode besides the radix complement.
    /// - `ConvertError::InvalidDecimal` or `ConvertError::NegativeUnsigned` for
    ///   decimal input that is not a valid value.
    /// - `ConvertError::Decode` or `ConvertError::Encode` if the codec rejects
    ///   the value.
    ///
    /// # Example
    /// ```
    /// use radixa::{convert::Conversion, system::NumeralSystem};
    ///
    /// let to_hex = Conversion::new(NumeralSystem::Decimal, NumeralSystem::Hexadecimal, false);
    /// assert_eq!(to_hex.run("255").unwrap(), "FF");
    ///
    /// let signed = Conversion::new(NumeralSystem::Binary, NumeralSystem::Decimal, true);
    /// assert_eq!(signed.run("1000").unwrap(), "-8");
    /// ```
    pub fn run(&self, input: &str) -> ConvertResult<String> {
        if input.is_empty() {
            return Err(ConvertError::EmptyValue);
        }

        self.check_sign_mode(self.from_sign, self.from)?;
        self.check_sign_mode(self.to_sign, self.to)?;

        let value = self.read(input)?;

        if self.from.radix() == self.to.radix() && self.from_sign == self.to_sign {
            debug!("Input and output share radix {}, passing {input} through",
                   self.from.radix());
            return Ok(if self.from.is_decimal() {
                          value.to_string()
                      } else {
                          input.to_ascii_uppercase()
                      });
        }

        let output = self.write(value)?;
        debug!("Converted {input} ({}, {}) to {output} ({}, {}), signed: {}",
               self.from, self.from_sign, self.to, self.to_sign, self.signed);
        Ok(output)
    }

    fn check_sign_mode(&self, mode: SignMode, system: NumeralSystem) -> ConvertResult<()> {
        if mode == SignMode::RadixComplement || (self.signed && system.radix() == Radix::BINARY) {
            return Ok(());
        }
        Err(SignModeError::Unsupported { mode,
                                         system,
                                         signed: self.signed }.into())
    }

    fn read(&self, input: &str) -> ConvertResult<i32> {
        if !self.from.is_decimal() {
            let radix = self.from.radix();
            return Ok(if self.signed {
                          decode_signed(input, radix, self.from_sign)?
                      } else {
                          decode(input, radix, false)?
                      });
        }

        let value: i32 = input.parse()
                              .map_err(|_| ConvertError::InvalidDecimal { text: input.to_string() })?;
        if !self.signed && value < 0 {
            return Err(ConvertError::NegativeUnsigned { value });
        }
        Ok(value)
    }

    fn write(&self, value: i32) -> ConvertResult<String> {
        if self.to.is_decimal() {
            return Ok(value.to_string());
        }
        if self.signed {
            return Ok(encode_signed(value, self.to.radix(), self.to_sign));
        }
        Ok(encode(value, self.to.radix(), false)?)
    }
}
