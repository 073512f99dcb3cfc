//! Error recovery for the parser.
//!
//! Provides token sets and synchronization for continuing parsing after errors.
//! Uses bitset-based O(1) membership testing.

use jess_ir::TokenKind;

use crate::cursor::Cursor;

// TokenSet uses a u64 bitset, so all discriminant indices must fit in 0..63.
const _: () = assert!(
    TokenKind::MAX_DISCRIMINANT <= 63,
    "TokenSet uses u64 bitset; all discriminant indices must be < 64"
);

/// A set of token kinds using bitset representation for O(1) membership testing.
///
/// Each bit in the u64 corresponds to a `TokenKind` discriminant index.
///
/// # Example
/// ```ignore
/// const LOOP_START: TokenSet = TokenSet::new()
///     .with(TokenKind::For)
///     .with(TokenKind::While);
///
/// if LOOP_START.contains(TokenKind::While) {
///     // O(1) lookup
/// }
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TokenSet(u64);

impl TokenSet {
    /// Create an empty token set.
    #[inline]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Add a token kind to this set (builder pattern for const contexts).
    #[inline]
    #[must_use]
    pub const fn with(self, kind: TokenKind) -> Self {
        Self(self.0 | (1u64 << kind.discriminant_index()))
    }

    /// Check if this set contains a token kind.
    #[inline]
    pub const fn contains(&self, kind: TokenKind) -> bool {
        (self.0 & (1u64 << kind.discriminant_index())) != 0
    }
}

/// Tokens that begin a statement.
///
/// `class` and `let` have no grammar yet but still mark a boundary, so a
/// stray one ends the skipped region instead of being swallowed into it.
pub const STMT_START: TokenSet = TokenSet::new()
    .with(TokenKind::Class)
    .with(TokenKind::Func)
    .with(TokenKind::Var)
    .with(TokenKind::Let)
    .with(TokenKind::For)
    .with(TokenKind::If)
    .with(TokenKind::While)
    .with(TokenKind::Print)
    .with(TokenKind::Return);

/// Discard tokens until a likely statement boundary.
///
/// The token that caused the error is always skipped. Stops just after a `;`
/// or just before a token in [`STMT_START`], or at `Eof`. Returns the number
/// of tokens discarded.
pub fn synchronize(cursor: &mut Cursor<'_>) -> usize {
    let start = cursor.position();
    cursor.advance();

    while !cursor.is_at_end() {
        if cursor.previous_kind() == TokenKind::Semicolon {
            break;
        }
        if STMT_START.contains(cursor.current_kind()) {
            break;
        }
        cursor.advance();
    }

    cursor.position() - start
}
