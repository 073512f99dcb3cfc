//! Literal values decoded by the lexer and carried by literal expressions.

use std::fmt;

/// A decoded literal.
///
/// Numbers are stored as `f64` regardless of whether the source spelled
/// them with a fractional part; the language has a single numeric type.
#[derive(Clone, Debug, PartialEq)]
pub enum Literal {
    Number(f64),
    Str(String),
    Bool(bool),
    Nil,
}

impl fmt::Display for Literal {
    /// The textual form `print` uses: whole numbers without a trailing `.0`,
    /// strings without quotes, `nil` for absence.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Number(n) => write!(f, "{n}"),
            Literal::Str(s) => f.write_str(s),
            Literal::Bool(b) => write!(f, "{b}"),
            Literal::Nil => f.write_str("nil"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_numbers_print_without_fraction() {
        assert_eq!(Literal::Number(3.0).to_string(), "3");
        assert_eq!(Literal::Number(-12.0).to_string(), "-12");
        assert_eq!(Literal::Number(2.5).to_string(), "2.5");
    }

    #[test]
    fn other_literals_print_naturally() {
        assert_eq!(Literal::Str("hi there".into()).to_string(), "hi there");
        assert_eq!(Literal::Bool(false).to_string(), "false");
        assert_eq!(Literal::Nil.to_string(), "nil");
    }
}
