use log::debug;
use logos::Logos;

use crate::{ast::Operator, error::ExpressionError};

/// Represents a lexical token in an expression.
///
/// Whitespace never reaches the lexer: [`tokenize`] removes it first, so any
/// run of characters other than operators and parentheses is one literal.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
pub enum Token {
    /// Numeric literal tokens, such as `3`, `.5`, `2.0` or `1e3`.
    #[regex(r"[^+\-*/()]+", parse_number)]
    Number(f64),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

impl Token {
    /// Returns the arithmetic operator this token stands for, if any.
    #[must_use]
    pub const fn operator(&self) -> Option<Operator> {
        match self {
            Self::Plus => Some(Operator::Add),
            Self::Minus => Some(Operator::Sub),
            Self::Star => Some(Operator::Mul),
            Self::Slash => Some(Operator::Div),
            Self::Number(_) | Self::LParen | Self::RParen => None,
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value:?}"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
        }
    }
}

/// Parses a numeric literal from the current token slice.
///
/// Returns `None` when the slice is not a valid `f64`, which the lexer reports
/// as an error for that slice.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Splits an expression into tokens.
///
/// All whitespace is discarded before scanning, so `"1 2"` is the single
/// literal `12`. No grammar checks happen here beyond converting literals:
/// `"2 + + 3"` tokenizes fine and is rejected by the evaluator.
///
/// # Errors
/// Returns [`ExpressionError::Format`] with the offending text when a literal
/// cannot be parsed as a number.
///
/// # Example
/// ```
/// use safecalc::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("(1.5 + 2) * 4").unwrap();
/// assert_eq!(tokens,
///            [Token::LParen,
///             Token::Number(1.5),
///             Token::Plus,
///             Token::Number(2.0),
///             Token::RParen,
///             Token::Star,
///             Token::Number(4.0)]);
///
/// assert!(tokenize("2 + abc").is_err());
/// ```
pub fn tokenize(expression: &str) -> Result<Vec<Token>, ExpressionError> {
    let cleaned: String = expression.chars().filter(|c| !c.is_whitespace()).collect();

    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(&cleaned);

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push(tok);
        } else {
            return Err(ExpressionError::Format { literal: lexer.slice().to_string() });
        }
    }

    debug!("tokenized {expression:?} into {} tokens", tokens.len());
    Ok(tokens)
}
