//! Tokenizer for JavaScript source text.
//!
//! The lexer is lossless and total: every byte of the input ends up in
//! exactly one token, unrecognized character runs are emitted as
//! [`TokenKind::Unknown`] instead of failing, and the sequence always ends
//! with a single [`TokenKind::Eof`] token. Whitespace, line terminators,
//! and comments are first-class tokens because several rules inspect them
//! directly.

use crate::token::{CommentStyle, Quote, Span, Token, TokenKind};

/// Reserved words recognized as [`TokenKind::Keyword`]. Sorted for binary search.
const KEYWORDS: &[&str] = &[
    "await",
    "break",
    "case",
    "catch",
    "class",
    "const",
    "continue",
    "debugger",
    "default",
    "delete",
    "do",
    "else",
    "enum",
    "export",
    "extends",
    "false",
    "finally",
    "for",
    "function",
    "if",
    "implements",
    "import",
    "in",
    "instanceof",
    "interface",
    "let",
    "new",
    "null",
    "of",
    "package",
    "private",
    "protected",
    "public",
    "return",
    "static",
    "super",
    "switch",
    "this",
    "throw",
    "true",
    "try",
    "typeof",
    "var",
    "void",
    "while",
    "with",
    "yield",
];

/// Multi-character punctuators, longest first within each group.
const PUNCT4: &[&str] = &[">>>="];
const PUNCT3: &[&str] = &["!==", "**=", "...", "<<=", "===", ">>=", ">>>"];
const PUNCT2: &[&str] = &[
    "!=", "%=", "&&", "&=", "**", "*=", "++", "+=", "--", "-=", "/=", "<<", "<=", "==", "=>", ">=",
    ">>", "?.", "??", "^=", "|=", "||",
];
const PUNCT1: &str = "{}()[];,.<>+-*/%&|^!~?:=";

/// Tokenizes the full input. Terminated by exactly one EOF token.
#[must_use]
pub fn tokenize(source: &str) -> Vec<Token> {
    Lexer::new(source).collect()
}

/// Streaming tokenizer over a borrowed source string.
///
/// Implements [`Iterator`]; yields the EOF token once, then `None`.
/// Restartable by constructing a fresh lexer over the same input.
#[derive(Debug)]
pub struct Lexer<'a> {
    source: &'a str,
    pos: usize,
    line: usize,
    col: usize,
    done: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            pos: 0,
            line: 1,
            col: 1,
            done: false,
        }
    }

    fn peek(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    fn peek_second(&self) -> Option<char> {
        let mut chars = self.source[self.pos..].chars();
        chars.next();
        chars.next()
    }

    /// Consumes one character, updating line and column bookkeeping.
    ///
    /// `\r\n` advances the line once, on the `\n`.
    fn bump(&mut self) {
        let Some(c) = self.peek() else { return };
        self.pos += c.len_utf8();
        match c {
            '\n' => {
                self.line += 1;
                self.col = 1;
            }
            '\r' => {
                if self.peek() == Some('\n') {
                    // Line accounting happens when the \n is consumed.
                } else {
                    self.line += 1;
                    self.col = 1;
                }
            }
            _ => self.col += 1,
        }
    }

    fn token_since(&self, kind: TokenKind, start: (usize, usize, usize)) -> Token {
        let (start_line, start_col, offset) = start;
        let span = Span {
            start_line,
            start_col,
            end_line: self.line,
            end_col: self.col,
            offset,
            len: self.pos - offset,
        };
        Token::new(kind, &self.source[offset..self.pos], span)
    }

    fn next_token(&mut self) -> Token {
        let start = (self.line, self.col, self.pos);

        let Some(c) = self.peek() else {
            return self.token_since(TokenKind::Eof, start);
        };

        match c {
            '\n' => {
                self.bump();
                self.token_since(TokenKind::Newline, start)
            }
            '\r' => {
                self.bump();
                if self.peek() == Some('\n') {
                    self.bump();
                }
                self.token_since(TokenKind::Newline, start)
            }
            c if c.is_whitespace() => {
                while let Some(c) = self.peek() {
                    if c.is_whitespace() && c != '\n' && c != '\r' {
                        self.bump();
                    } else {
                        break;
                    }
                }
                self.token_since(TokenKind::Whitespace, start)
            }
            '/' if self.peek_second() == Some('/') => {
                while let Some(c) = self.peek() {
                    if c == '\n' || c == '\r' {
                        break;
                    }
                    self.bump();
                }
                self.token_since(
                    TokenKind::Comment {
                        style: CommentStyle::Line,
                    },
                    start,
                )
            }
            '/' if self.peek_second() == Some('*') => {
                self.bump();
                self.bump();
                loop {
                    match self.peek() {
                        None => break,
                        Some('*') if self.peek_second() == Some('/') => {
                            self.bump();
                            self.bump();
                            break;
                        }
                        Some(_) => self.bump(),
                    }
                }
                self.token_since(
                    TokenKind::Comment {
                        style: CommentStyle::Block,
                    },
                    start,
                )
            }
            '\'' | '"' => self.string(start, c),
            '`' => self.template(start),
            c if c.is_ascii_digit() => self.number(start),
            '.' if self.peek_second().is_some_and(|c| c.is_ascii_digit()) => self.number(start),
            c if is_ident_start(c) => self.identifier(start),
            _ => self.punct_or_unknown(start),
        }
    }

    /// Single-line string literal. Stops before an unescaped line terminator
    /// so that an unterminated literal never swallows the rest of the file.
    fn string(&mut self, start: (usize, usize, usize), quote_char: char) -> Token {
        let quote = if quote_char == '\'' {
            Quote::Single
        } else {
            Quote::Double
        };
        self.bump();
        let mut terminated = false;
        while let Some(c) = self.peek() {
            match c {
                '\n' | '\r' => break,
                '\\' => {
                    self.bump();
                    if self.peek().is_some() {
                        self.bump();
                    }
                }
                c if c == quote_char => {
                    self.bump();
                    terminated = true;
                    break;
                }
                _ => self.bump(),
            }
        }
        self.token_since(TokenKind::StringLiteral { quote, terminated }, start)
    }

    /// Template literal. Unlike quoted strings, may span lines.
    fn template(&mut self, start: (usize, usize, usize)) -> Token {
        self.bump();
        let mut terminated = false;
        while let Some(c) = self.peek() {
            match c {
                '\\' => {
                    self.bump();
                    if self.peek().is_some() {
                        self.bump();
                    }
                }
                '`' => {
                    self.bump();
                    terminated = true;
                    break;
                }
                _ => self.bump(),
            }
        }
        self.token_since(
            TokenKind::StringLiteral {
                quote: Quote::Backtick,
                terminated,
            },
            start,
        )
    }

    /// Loose numeric scan: covers decimal, hex, binary, exponents, and
    /// numeric separators without validating the exact grammar.
    fn number(&mut self, start: (usize, usize, usize)) -> Token {
        let mut prev = '\0';
        while let Some(c) = self.peek() {
            let take = c.is_ascii_alphanumeric()
                || c == '.'
                || c == '_'
                || ((c == '+' || c == '-') && (prev == 'e' || prev == 'E'));
            if !take {
                break;
            }
            prev = c;
            self.bump();
        }
        self.token_since(TokenKind::NumberLiteral, start)
    }

    fn identifier(&mut self, start: (usize, usize, usize)) -> Token {
        while let Some(c) = self.peek() {
            if is_ident_continue(c) {
                self.bump();
            } else {
                break;
            }
        }
        let text = &self.source[start.2..self.pos];
        let kind = if KEYWORDS.binary_search(&text).is_ok() {
            TokenKind::Keyword
        } else {
            TokenKind::Identifier
        };
        self.token_since(kind, start)
    }

    fn punct_or_unknown(&mut self, start: (usize, usize, usize)) -> Token {
        if let Some(len) = self.match_punct() {
            for _ in 0..len {
                self.bump();
            }
            return self.token_since(TokenKind::Punctuator, start);
        }

        // Coalesce a run of characters no other branch accepts.
        while let Some(c) = self.peek() {
            if starts_known(c) || self.match_punct().is_some() {
                break;
            }
            self.bump();
        }
        self.token_since(TokenKind::Unknown, start)
    }

    /// Longest-match punctuator lookup. Returns the match length in chars
    /// (all punctuators are ASCII, so chars equal bytes).
    fn match_punct(&self) -> Option<usize> {
        let rest = &self.source[self.pos..];
        if PUNCT4.iter().any(|p| rest.starts_with(p)) {
            return Some(4);
        }
        if PUNCT3.iter().any(|p| rest.starts_with(p)) {
            return Some(3);
        }
        if PUNCT2.iter().any(|p| rest.starts_with(p)) {
            return Some(2);
        }
        rest.chars()
            .next()
            .filter(|c| PUNCT1.contains(*c))
            .map(|_| 1)
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.done {
            return None;
        }
        let token = self.next_token();
        if token.kind == TokenKind::Eof {
            self.done = true;
        }
        Some(token)
    }
}

fn is_ident_start(c: char) -> bool {
    c == '_' || c == '$' || c.is_alphabetic()
}

fn is_ident_continue(c: char) -> bool {
    c == '_' || c == '$' || c.is_alphanumeric()
}

/// Whether `c` begins a token of any kind other than `Unknown`.
fn starts_known(c: char) -> bool {
    c.is_whitespace()
        || c.is_ascii_digit()
        || is_ident_start(c)
        || c == '\'' || c == '"' || c == '`'
}
