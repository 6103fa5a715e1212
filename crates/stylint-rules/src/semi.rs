//! Rule to require statement-terminating semicolons.
//!
//! # Rationale
//!
//! Relying on automatic semicolon insertion makes behavior depend on line
//! layout. This rule flags lines that end an expression without `;`.
//!
//! Detection is token-based and deliberately conservative: a line is
//! flagged only when its last significant token can end an expression,
//! the token is not the header of a control statement, and the next line
//! does not continue the expression. Block and function-declaration
//! contexts are exempt.

use stylint_core::utils::{
    has_newline_between, matching_open_paren, next_significant, prev_significant,
};
use stylint_core::{FileContext, Fix, Rule, RuleOptions, Severity, Token, TokenKind, Violation};

/// Rule code for semi.
pub const CODE: &str = "SL004";

/// Rule id for semi.
pub const NAME: &str = "semi";

/// Keywords that can end an expression (`x = this`, `return`, ...).
const EXPRESSION_KEYWORDS: &[&str] = &[
    "break", "continue", "debugger", "false", "null", "return", "super", "this", "true",
];

/// Punctuators that can end an expression.
const EXPRESSION_PUNCTS: &[&str] = &[")", "]", "++", "--"];

/// Control keywords whose parenthesized header does not need `;`.
const CONTROL_KEYWORDS: &[&str] = &["catch", "for", "function", "if", "switch", "while", "with"];

/// Tokens that continue an expression when they start the next line.
const CONTINUATION_PUNCTS: &[&str] = &[
    ".", "+", "-", "*", "/", "%", "?", ":", ",", ")", "]", "{", "=", "==", "===", "!=", "!==",
    "<", ">", "<=", ">=", "&&", "||", "??", "?.", "=>", "+=", "-=", "*=", "/=", "%=", "&", "|",
    "^", "<<", ">>", ">>>", "**",
];

/// Keywords that continue the enclosing statement on the next line.
const CONTINUATION_KEYWORDS: &[&str] = &["catch", "else", "finally", "in", "instanceof", "while"];

/// Requires semicolons at the end of statements.
#[derive(Debug, Clone)]
pub struct Semi {
    severity: Severity,
}

impl Default for Semi {
    fn default() -> Self {
        Self::new()
    }
}

impl Semi {
    /// Creates the rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            severity: Severity::Warning,
        }
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

impl Rule for Semi {
    fn id(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Requires statement-terminating semicolons"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, ctx: &FileContext, _options: &RuleOptions) -> Vec<Violation> {
        let tokens = ctx.tokens;
        let mut violations = Vec::new();

        for (i, token) in tokens.iter().enumerate() {
            if token.kind != TokenKind::Newline && token.kind != TokenKind::Eof {
                continue;
            }
            let Some(li) = prev_significant(tokens, i) else {
                continue;
            };
            // Only the newline directly ending the token's own line counts;
            // blank and comment-only lines were handled when theirs did.
            if has_newline_between(tokens, li, i) {
                continue;
            }

            let last = &tokens[li];
            if !ends_expression(last) {
                continue;
            }
            if last.is_punct(")") && is_control_header(tokens, li) {
                continue;
            }
            if let Some(ni) = next_significant(tokens, i) {
                if is_continuation(&tokens[ni]) {
                    continue;
                }
                // A `}` closing an object literal exempts its final
                // property; a `}` closing a block does not exempt the
                // statement before it.
                if tokens[ni].is_punct("}") && is_property_line(tokens, li) {
                    continue;
                }
            }

            violations.push(
                Violation::new(CODE, NAME, self.severity, last.span, "Missing semicolon")
                    .with_fix(Fix::insert(last.span.end_offset(), ";")),
            );
        }
        violations
    }
}

/// Whether `token` can be the final token of an expression statement.
fn ends_expression(token: &Token) -> bool {
    match token.kind {
        TokenKind::Identifier | TokenKind::NumberLiteral | TokenKind::StringLiteral { .. } => true,
        TokenKind::Keyword => EXPRESSION_KEYWORDS.contains(&token.text.as_str()),
        TokenKind::Punctuator => EXPRESSION_PUNCTS.contains(&token.text.as_str()),
        _ => false,
    }
}

/// Whether the `)` at `close` ends a control-statement or declaration
/// header rather than a call expression.
fn is_control_header(tokens: &[Token], close: usize) -> bool {
    let Some(open) = matching_open_paren(tokens, close) else {
        return false;
    };
    let Some(bi) = prev_significant(tokens, open) else {
        return false;
    };
    let before = &tokens[bi];
    if CONTROL_KEYWORDS.iter().any(|k| before.is_keyword(k)) {
        return true;
    }
    // `function name (...)`: the identifier belongs to a declaration.
    if before.kind == TokenKind::Identifier {
        if let Some(b2) = prev_significant(tokens, bi) {
            return tokens[b2].is_keyword("function");
        }
    }
    false
}

/// Whether `token`, as the first significant token of the next line,
/// continues the current expression or statement.
fn is_continuation(token: &Token) -> bool {
    match token.kind {
        TokenKind::Punctuator => CONTINUATION_PUNCTS.contains(&token.text.as_str()),
        TokenKind::Keyword => CONTINUATION_KEYWORDS.contains(&token.text.as_str()),
        _ => false,
    }
}

/// Whether the line holding `last` reads as an object-literal property
/// (`name: value` or `'name': value`).
fn is_property_line(tokens: &[Token], last: usize) -> bool {
    let mut first = last;
    let mut j = last;
    while j > 0 {
        j -= 1;
        if tokens[j].kind == TokenKind::Newline {
            break;
        }
        if tokens[j].kind.is_significant() {
            first = j;
        }
    }
    let head = &tokens[first];
    let named = head.kind == TokenKind::Identifier
        || matches!(head.kind, TokenKind::StringLiteral { .. });
    if !named {
        return false;
    }
    next_significant(tokens, first).is_some_and(|n| tokens[n].is_punct(":"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use stylint_core::lexer::tokenize;
    use stylint_core::FileMeta;

    fn check_source(source: &str) -> Vec<Violation> {
        let meta = FileMeta::new("test.js");
        let tokens = tokenize(source);
        let ctx = FileContext::new(&meta, source, &tokens);
        Semi::new().check(&ctx, &RuleOptions::new())
    }

    #[test]
    fn flags_missing_semicolon_after_call() {
        let violations = check_source("var name = getName()\n");
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].message, "Missing semicolon");
    }

    #[test]
    fn fix_inserts_semicolon() {
        let source = "var a = 1\n";
        let violations = check_source(source);
        let fix = violations[0].fix.as_ref().unwrap();
        let mut out = String::new();
        out.push_str(&source[..fix.start]);
        out.push_str(&fix.text);
        out.push_str(&source[fix.start..]);
        assert_eq!(out, "var a = 1;\n");
    }

    #[test]
    fn accepts_terminated_statement() {
        assert!(check_source("var a = 1;\nvar b = 2;\n").is_empty());
    }

    #[test]
    fn flags_last_line_without_newline() {
        let violations = check_source("var a = 1");
        assert_eq!(violations.len(), 1);
    }

    #[test]
    fn control_headers_are_exempt() {
        assert!(check_source("if (test)\n  run();\n").is_empty());
        assert!(check_source("while (busy)\n  spin();\n").is_empty());
    }

    #[test]
    fn function_declarations_are_exempt() {
        assert!(check_source("function add(a, b)\n{\n  return a + b;\n}\n").is_empty());
        assert!(check_source("function add(a, b) {\n  return a + b;\n}\n").is_empty());
    }

    #[test]
    fn continuation_lines_are_exempt() {
        assert!(check_source("var total = a\n  + b;\n").is_empty());
        assert!(check_source("promise\n  .then(done);\n").is_empty());
    }

    #[test]
    fn object_literal_members_are_exempt() {
        assert!(check_source("var hero = {\n  power: 10\n};\n").is_empty());
    }

    #[test]
    fn bare_return_is_flagged() {
        let violations = check_source("function f() {\n  return\n}\n");
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].span.start_line, 2);
    }

    #[test]
    fn do_while_tail_is_exempt() {
        assert!(check_source("do {\n  step();\n}\nwhile (busy);\n").is_empty());
    }

    #[test]
    fn blank_lines_do_not_double_report() {
        let violations = check_source("var a = 1\n\n\n");
        assert_eq!(violations.len(), 1);
    }

    #[test]
    fn comment_after_expression_still_flags() {
        let violations = check_source("var a = 1 // note\n");
        assert_eq!(violations.len(), 1);
    }
}
