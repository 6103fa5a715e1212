//! Lexical tokens and source spans.

use serde::{Deserialize, Serialize};

/// Quote character of a string literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quote {
    /// `'...'`
    Single,
    /// `"..."`
    Double,
    /// `` `...` `` (template literal)
    Backtick,
}

impl Quote {
    /// Returns the quote character.
    #[must_use]
    pub fn char(self) -> char {
        match self {
            Self::Single => '\'',
            Self::Double => '"',
            Self::Backtick => '`',
        }
    }
}

/// Delimiter style of a comment.
///
/// Kept as an attribute on [`TokenKind::Comment`] rather than as separate
/// kinds, so rules that treat comments uniformly can match one variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommentStyle {
    /// `// ...` up to (not including) the line terminator.
    Line,
    /// `/* ... */`, possibly spanning lines.
    Block,
}

/// Kind of a lexical token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    /// Identifier (`name`, `$el`, `_private`).
    Identifier,
    /// Reserved word (`var`, `function`, `this`, ...).
    Keyword,
    /// String literal, including its delimiters.
    StringLiteral {
        /// Quote character used by the literal.
        quote: Quote,
        /// Whether the closing quote was found.
        terminated: bool,
    },
    /// Numeric literal.
    NumberLiteral,
    /// Operator or delimiter (`{`, `===`, `=>`, ...).
    Punctuator,
    /// Comment, including its delimiters.
    Comment {
        /// Line or block style.
        style: CommentStyle,
    },
    /// Run of non-newline whitespace.
    Whitespace,
    /// Single line terminator (`\n`, `\r\n`, or lone `\r`).
    Newline,
    /// Run of characters the tokenizer does not recognize.
    Unknown,
    /// End of input. Always the final token; carries empty text.
    Eof,
}

impl TokenKind {
    /// Returns `true` for whitespace, newlines, and comments.
    #[must_use]
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            Self::Whitespace | Self::Newline | Self::Comment { .. }
        )
    }

    /// Returns `true` for tokens that carry syntactic meaning.
    #[must_use]
    pub fn is_significant(self) -> bool {
        !self.is_trivia() && self != Self::Eof
    }
}

/// Position range of a token or violation in source text.
///
/// Lines and columns are 1-indexed; columns count characters. `offset` and
/// `len` are byte-based, suitable for slicing the original source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    /// Line of the first character.
    pub start_line: usize,
    /// Column of the first character.
    pub start_col: usize,
    /// Line just past the last character.
    pub end_line: usize,
    /// Column just past the last character.
    pub end_col: usize,
    /// Byte offset of the first character.
    pub offset: usize,
    /// Length in bytes.
    pub len: usize,
}

impl Span {
    /// Creates a single-line span.
    #[must_use]
    pub fn new(line: usize, col: usize, offset: usize, len: usize, width: usize) -> Self {
        Self {
            start_line: line,
            start_col: col,
            end_line: line,
            end_col: col + width,
            offset,
            len,
        }
    }

    /// Zero-width span at the start of input. Used for synthetic violations.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            start_line: 1,
            start_col: 1,
            end_line: 1,
            end_col: 1,
            offset: 0,
            len: 0,
        }
    }

    /// Byte range covered by this span.
    #[must_use]
    pub fn range(&self) -> std::ops::Range<usize> {
        self.offset..self.offset + self.len
    }

    /// Byte offset just past the last character.
    #[must_use]
    pub fn end_offset(&self) -> usize {
        self.offset + self.len
    }
}

/// A lexical token with its original text and position.
///
/// Tokens partition the source exactly: concatenating `text` over a token
/// sequence reproduces the input byte-for-byte.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Kind of this token.
    pub kind: TokenKind,
    /// Original source text, verbatim.
    pub text: String,
    /// Position range.
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }

    /// Returns `true` if this is a punctuator with the given text.
    #[must_use]
    pub fn is_punct(&self, text: &str) -> bool {
        self.kind == TokenKind::Punctuator && self.text == text
    }

    /// Returns `true` if this is a keyword with the given text.
    #[must_use]
    pub fn is_keyword(&self, text: &str) -> bool {
        self.kind == TokenKind::Keyword && self.text == text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trivia_classification() {
        assert!(TokenKind::Whitespace.is_trivia());
        assert!(TokenKind::Newline.is_trivia());
        assert!(TokenKind::Comment {
            style: CommentStyle::Line
        }
        .is_trivia());
        assert!(!TokenKind::Identifier.is_trivia());
        assert!(!TokenKind::Eof.is_trivia());
    }

    #[test]
    fn eof_is_not_significant() {
        assert!(!TokenKind::Eof.is_significant());
        assert!(TokenKind::Punctuator.is_significant());
    }

    #[test]
    fn span_range() {
        let span = Span::new(3, 5, 40, 4, 4);
        assert_eq!(span.range(), 40..44);
        assert_eq!(span.end_offset(), 44);
        assert_eq!(span.end_col, 9);
    }

    #[test]
    fn token_matchers() {
        let t = Token::new(TokenKind::Punctuator, "{", Span::zero());
        assert!(t.is_punct("{"));
        assert!(!t.is_punct("}"));
        assert!(!t.is_keyword("{"));
    }
}
