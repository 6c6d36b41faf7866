use logos::Logos;

use crate::error::RadixError;

/// Represents a lexical token of a numeral-system selector.
///
/// Selectors are short phrases such as `hex`, `Binary`, `other: 7`,
/// `Other system 12` or a bare `36`. Keywords are matched without regard to
/// ASCII case and whitespace between tokens is skipped.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(skip r"[ \t\r\n]+")]
pub enum Token {
    /// `binary`, `bin`
    #[token("binary", ignore(ascii_case))]
    #[token("bin", ignore(ascii_case))]
    Binary,
    /// `octal`, `oct`
    #[token("octal", ignore(ascii_case))]
    #[token("oct", ignore(ascii_case))]
    Octal,
    /// `decimal`, `dec`
    #[token("decimal", ignore(ascii_case))]
    #[token("dec", ignore(ascii_case))]
    Decimal,
    /// `hexadecimal`, `hex`
    #[token("hexadecimal", ignore(ascii_case))]
    #[token("hex", ignore(ascii_case))]
    Hexadecimal,
    /// `other`, `base`, `radix`; introduces an explicit radix.
    #[token("other", ignore(ascii_case))]
    #[token("base", ignore(ascii_case))]
    #[token("radix", ignore(ascii_case))]
    Other,
    /// `system`, as in `Other system`. Carries no meaning.
    #[token("system", ignore(ascii_case))]
    System,
    /// `:` or `=` between `other` and its radix.
    #[token(":")]
    #[token("=")]
    Separator,
    /// Integer literal tokens, such as `16`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(u32),
}

/// Splits a selector into its meaningful tokens.
///
/// `System` tokens are dropped, since `Binary system` and `Binary` select the
/// same thing.
///
/// # Errors
/// Returns `RadixError::Malformed` if any part of the text is not a token,
/// including integers too large for a `u32`.
///
/// # Example
/// ```
/// use radixa::system::lexer::{Token, tokenize};
///
/// assert_eq!(tokenize("Other system: 7").unwrap(),
///            vec![Token::Other, Token::Separator, Token::Integer(7)]);
/// assert_eq!(tokenize("HEX").unwrap(), vec![Token::Hexadecimal]);
/// assert!(tokenize("hex!").is_err());
/// ```
pub fn tokenize(text: &str) -> Result<Vec<Token>, RadixError> {
    let mut tokens = Vec::new();

    for token in Token::lexer(text) {
        match token {
            Ok(Token::System) => {},
            Ok(tok) => tokens.push(tok),
            Err(()) => return Err(RadixError::Malformed { text: text.to_string() }),
        }
    }

    Ok(tokens)
}

/// Parses an integer literal from the current token slice.
///
/// # Parameters
/// - `lex`: The lexer positioned at a run of decimal digits.
///
/// # Returns
/// - `Some(u32)`: The parsed integer value if successful.
/// - `None`: If the literal does not fit into a `u32`.
fn parse_integer(lex: &mut logos::Lexer<Token>) -> Option<u32> {
    lex.slice().parse().ok()
}
