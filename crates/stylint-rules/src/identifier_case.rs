//! Rule to enforce naming conventions for bindings.
//!
//! # Rationale
//!
//! Constructor functions read as types and get PascalCase; everything
//! else gets camelCase. A function counts as constructor-like when its
//! body assigns to `this.<property>`, the pre-class idiom for defining
//! instance state. Plain variable bindings must be camelCase, with
//! SCREAMING_SNAKE_CASE tolerated for `const`.
//!
//! # Configuration
//!
//! - `allow_leading_underscore`: tolerate `_private` prefixes
//!   (default: true)
//!
//! No fixer: renaming a binding is a semantic change.

use stylint_core::utils::{matching_close_brace, matching_open_paren, next_significant};
use stylint_core::{
    FileContext, OptionKind, OptionSpec, Rule, RuleOptions, Severity, Token, TokenKind, Violation,
};
use tracing::trace;

/// Rule code for identifier-case.
pub const CODE: &str = "SL005";

/// Rule id for identifier-case.
pub const NAME: &str = "identifier-case";

const SCHEMA: &[OptionSpec] = &[OptionSpec {
    key: "allow_leading_underscore",
    kind: OptionKind::Bool,
}];

/// Enforces camelCase for ordinary bindings and PascalCase for
/// constructor-like functions and classes.
#[derive(Debug, Clone)]
pub struct IdentifierCase {
    allow_leading_underscore: bool,
    severity: Severity,
}

impl Default for IdentifierCase {
    fn default() -> Self {
        Self::new()
    }
}

impl IdentifierCase {
    /// Creates the rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            allow_leading_underscore: true,
            severity: Severity::Warning,
        }
    }

    /// Sets whether `_`-prefixed names are tolerated.
    #[must_use]
    pub fn allow_leading_underscore(mut self, allow: bool) -> Self {
        self.allow_leading_underscore = allow;
        self
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    fn violation(&self, token: &Token, message: String) -> Violation {
        Violation::new(CODE, NAME, self.severity, token.span, message)
    }
}

impl Rule for IdentifierCase {
    fn id(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Enforces camelCase bindings and PascalCase constructors"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn options_schema(&self) -> &'static [OptionSpec] {
        SCHEMA
    }

    fn default_options(&self) -> RuleOptions {
        RuleOptions::new().with("allow_leading_underscore", self.allow_leading_underscore)
    }

    fn check(&self, ctx: &FileContext, options: &RuleOptions) -> Vec<Violation> {
        let allow_underscore =
            options.get_bool("allow_leading_underscore", self.allow_leading_underscore);
        let tokens = ctx.tokens;
        let mut violations = Vec::new();

        for (i, token) in tokens.iter().enumerate() {
            if token.is_keyword("function") {
                self.check_function(tokens, i, allow_underscore, &mut violations);
            } else if token.is_keyword("class") {
                self.check_class(tokens, i, allow_underscore, &mut violations);
            } else if token.is_keyword("var") || token.is_keyword("let") || token.is_keyword("const")
            {
                self.check_binding(tokens, i, allow_underscore, &mut violations);
            }
        }
        violations
    }
}

impl IdentifierCase {
    fn check_function(
        &self,
        tokens: &[Token],
        keyword: usize,
        allow_underscore: bool,
        violations: &mut Vec<Violation>,
    ) {
        let Some(ni) = next_significant(tokens, keyword) else {
            return;
        };
        let name = &tokens[ni];
        if name.kind != TokenKind::Identifier {
            // Anonymous function expression.
            return;
        }

        let constructor_like = body_assigns_this(tokens, ni);
        trace!(name = %name.text, constructor_like, "checked function declaration");

        if constructor_like {
            if !is_pascal_case(&name.text, allow_underscore) {
                violations.push(self.violation(
                    name,
                    format!(
                        "Constructor function '{}' should use PascalCase",
                        name.text
                    ),
                ));
            }
        } else if !is_camel_case(&name.text, allow_underscore) {
            violations.push(self.violation(
                name,
                format!("Function name '{}' should use camelCase", name.text),
            ));
        }
    }

    fn check_class(
        &self,
        tokens: &[Token],
        keyword: usize,
        allow_underscore: bool,
        violations: &mut Vec<Violation>,
    ) {
        let Some(ni) = next_significant(tokens, keyword) else {
            return;
        };
        let name = &tokens[ni];
        if name.kind == TokenKind::Identifier && !is_pascal_case(&name.text, allow_underscore) {
            violations.push(self.violation(
                name,
                format!("Class name '{}' should use PascalCase", name.text),
            ));
        }
    }

    fn check_binding(
        &self,
        tokens: &[Token],
        keyword: usize,
        allow_underscore: bool,
        violations: &mut Vec<Violation>,
    ) {
        let Some(ni) = next_significant(tokens, keyword) else {
            return;
        };
        let name = &tokens[ni];
        if name.kind != TokenKind::Identifier {
            // Destructuring patterns are left alone.
            return;
        }
        if is_camel_case(&name.text, allow_underscore) {
            return;
        }
        // ALL_CAPS constants are conventional.
        if tokens[keyword].is_keyword("const") && is_screaming_case(&name.text) {
            return;
        }
        violations.push(self.violation(
            name,
            format!("Variable '{}' should use camelCase", name.text),
        ));
    }
}

/// Whether the function whose name sits at `name` assigns to `this.x`
/// somewhere in its body.
fn body_assigns_this(tokens: &[Token], name: usize) -> bool {
    let Some(open_paren) = next_significant(tokens, name).filter(|&i| tokens[i].is_punct("(")) else {
        return false;
    };
    // Walk forward to the matching `)` using the backwards matcher on each
    // candidate close.
    let mut close_paren = None;
    for (i, t) in tokens.iter().enumerate().skip(open_paren) {
        if t.is_punct(")") && matching_open_paren(tokens, i) == Some(open_paren) {
            close_paren = Some(i);
            break;
        }
    }
    let Some(close_paren) = close_paren else {
        return false;
    };
    let Some(open_brace) = next_significant(tokens, close_paren).filter(|&i| tokens[i].is_punct("{"))
    else {
        return false;
    };
    let Some(close_brace) = matching_close_brace(tokens, open_brace) else {
        return false;
    };

    let mut i = open_brace;
    while let Some(k) = next_significant(tokens, i) {
        if k >= close_brace {
            break;
        }
        if tokens[k].is_keyword("this") {
            let dot = next_significant(tokens, k).filter(|&d| tokens[d].is_punct("."));
            let prop = dot.and_then(|d| next_significant(tokens, d));
            let assign = prop
                .filter(|&p| tokens[p].kind == TokenKind::Identifier)
                .and_then(|p| next_significant(tokens, p));
            if assign.is_some_and(|a| tokens[a].is_punct("=")) {
                return true;
            }
        }
        i = k;
    }
    false
}

fn strip_prefix_chars(name: &str, allow_underscore: bool) -> &str {
    let mut s = name;
    while let Some(rest) = s.strip_prefix('$') {
        s = rest;
    }
    if allow_underscore {
        while let Some(rest) = s.strip_prefix('_') {
            s = rest;
        }
    }
    s
}

fn is_camel_case(name: &str, allow_underscore: bool) -> bool {
    let s = strip_prefix_chars(name, allow_underscore);
    let Some(first) = s.chars().next() else {
        // Bare `_` or `$` bindings pass.
        return true;
    };
    first.is_ascii_lowercase() && !s.contains('_')
}

fn is_pascal_case(name: &str, allow_underscore: bool) -> bool {
    let s = strip_prefix_chars(name, allow_underscore);
    let Some(first) = s.chars().next() else {
        return false;
    };
    first.is_ascii_uppercase()
        && !s.contains('_')
        && s.chars().any(|c| c.is_ascii_lowercase())
}

fn is_screaming_case(name: &str) -> bool {
    name.chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
        && name.chars().any(|c| c.is_ascii_uppercase())
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
        let rule = IdentifierCase::new();
        rule.check(&ctx, &rule.default_options())
    }

    #[test]
    fn constructor_function_must_be_pascal_case() {
        let violations =
            check_source("function user(options) { this.name = options.name; }");
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains("'user'"));
        assert!(violations[0].message.contains("PascalCase"));
    }

    #[test]
    fn plain_function_in_camel_case_passes() {
        assert!(check_source("function query(selector) { return find(selector); }").is_empty());
    }

    #[test]
    fn pascal_case_constructor_passes() {
        assert!(check_source("function User(options) { this.name = options.name; }").is_empty());
    }

    #[test]
    fn pascal_case_plain_function_is_flagged() {
        let violations = check_source("function Query(selector) { return find(selector); }");
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains("camelCase"));
    }

    #[test]
    fn snake_case_variable_is_flagged() {
        let violations = check_source("var user_name = 'Bob';");
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains("'user_name'"));
    }

    #[test]
    fn camel_case_variable_passes() {
        assert!(check_source("var userName = 'Bob';").is_empty());
    }

    #[test]
    fn screaming_const_passes() {
        assert!(check_source("const MAX_RETRIES = 3;").is_empty());
    }

    #[test]
    fn screaming_var_is_flagged() {
        let violations = check_source("var MAX_RETRIES = 3;");
        assert_eq!(violations.len(), 1);
    }

    #[test]
    fn class_names_must_be_pascal_case() {
        let violations = check_source("class queue {}");
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains("'queue'"));
        assert!(check_source("class Queue {}").is_empty());
    }

    #[test]
    fn leading_underscore_tolerated_by_default() {
        assert!(check_source("var _private = 1;").is_empty());
        assert!(check_source("var $el = node;").is_empty());
    }

    #[test]
    fn leading_underscore_rejected_when_disallowed() {
        let source = "var _private = 1;";
        let meta = FileMeta::new("test.js");
        let tokens = tokenize(source);
        let ctx = FileContext::new(&meta, source, &tokens);
        let options = RuleOptions::new().with("allow_leading_underscore", false);
        let violations = IdentifierCase::new().check(&ctx, &options);
        assert_eq!(violations.len(), 1);
    }

    #[test]
    fn anonymous_function_expression_is_ignored() {
        assert!(check_source("var go = function () { return 1; };").is_empty());
    }

    #[test]
    fn case_predicates() {
        assert!(is_camel_case("userName", true));
        assert!(!is_camel_case("UserName", true));
        assert!(!is_camel_case("user_name", true));
        assert!(is_pascal_case("UserName", true));
        assert!(!is_pascal_case("userName", true));
        assert!(!is_pascal_case("USER", true));
        assert!(is_screaming_case("MAX_VALUE"));
        assert!(!is_screaming_case("MaxValue"));
    }
}
