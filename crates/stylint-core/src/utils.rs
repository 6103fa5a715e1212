//! Token scanning helpers for rule implementations.

use crate::token::{Token, TokenKind};

/// Index of the first significant token after `from`, skipping trivia.
#[must_use]
pub fn next_significant(tokens: &[Token], from: usize) -> Option<usize> {
    tokens
        .iter()
        .enumerate()
        .skip(from + 1)
        .find(|(_, t)| t.kind.is_significant())
        .map(|(i, _)| i)
}

/// Index of the last significant token before `from`, skipping trivia.
#[must_use]
pub fn prev_significant(tokens: &[Token], from: usize) -> Option<usize> {
    tokens[..from]
        .iter()
        .enumerate()
        .rev()
        .find(|(_, t)| t.kind.is_significant())
        .map(|(i, _)| i)
}

/// Whether any comment token sits strictly between two indices.
#[must_use]
pub fn has_comment_between(tokens: &[Token], start: usize, end: usize) -> bool {
    tokens[start + 1..end]
        .iter()
        .any(|t| matches!(t.kind, TokenKind::Comment { .. }))
}

/// Whether any newline token sits strictly between two indices.
#[must_use]
pub fn has_newline_between(tokens: &[Token], start: usize, end: usize) -> bool {
    tokens[start + 1..end]
        .iter()
        .any(|t| t.kind == TokenKind::Newline)
}

/// Index of the `(` matching the `)` at `close`, walking backwards.
///
/// Returns `None` when the input is unbalanced.
#[must_use]
pub fn matching_open_paren(tokens: &[Token], close: usize) -> Option<usize> {
    let mut depth = 0usize;
    for i in (0..=close).rev() {
        let t = &tokens[i];
        if t.is_punct(")") {
            depth += 1;
        } else if t.is_punct("(") {
            match depth {
                0 => return None,
                1 => return Some(i),
                _ => depth -= 1,
            }
        }
    }
    None
}

/// Index of the `}` matching the `{` at `open`, walking forwards.
///
/// Returns `None` when the input is unbalanced.
#[must_use]
pub fn matching_close_brace(tokens: &[Token], open: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (i, t) in tokens.iter().enumerate().skip(open) {
        if t.is_punct("{") {
            depth += 1;
        } else if t.is_punct("}") {
            match depth {
                0 => return None,
                1 => return Some(i),
                _ => depth -= 1,
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;

    #[test]
    fn skips_trivia_forward_and_backward() {
        let tokens = tokenize("a /* c */ b");
        // 0: a, 1: ws, 2: comment, 3: ws, 4: b
        assert_eq!(next_significant(&tokens, 0), Some(4));
        assert_eq!(prev_significant(&tokens, 4), Some(0));
    }

    #[test]
    fn none_at_the_edges() {
        let tokens = tokenize("a");
        assert_eq!(next_significant(&tokens, 0), None);
        assert_eq!(prev_significant(&tokens, 0), None);
    }

    #[test]
    fn comment_detection() {
        let tokens = tokenize("a /* c */ b");
        assert!(has_comment_between(&tokens, 0, 4));
        let tokens = tokenize("a  b");
        assert!(!has_comment_between(&tokens, 0, 2));
    }

    #[test]
    fn paren_matching_nested() {
        let tokens = tokenize("f(g(x), y)");
        // 0: f, 1: (, 2: g, 3: (, 4: x, 5: ), 6: ,, 7: ws, 8: y, 9: )
        assert_eq!(matching_open_paren(&tokens, 9), Some(1));
        assert_eq!(matching_open_paren(&tokens, 5), Some(3));
    }

    #[test]
    fn brace_matching_nested() {
        let tokens = tokenize("{ a { b } c }");
        let last = tokens.len() - 2; // final `}` before EOF
        assert_eq!(matching_close_brace(&tokens, 0), Some(last));
    }

    #[test]
    fn unbalanced_returns_none() {
        let tokens = tokenize(")");
        assert_eq!(matching_open_paren(&tokens, 0), None);
        let tokens = tokenize("{");
        assert_eq!(matching_close_brace(&tokens, 0), None);
    }
}
