//! # stylint-core
//!
//! Core framework for token-based style linting of JavaScript sources.
//!
//! This crate provides the foundational types for building style linters:
//!
//! - [`lexer`] for lossless tokenization (tokens partition the source
//!   exactly; concatenating their text reproduces the input)
//! - [`Rule`] trait for token-stream rules with declarative option schemas
//! - [`RuleRegistry`] for the immutable, process-wide rule set
//! - [`resolve`] for merging rule defaults with user overrides
//! - [`Linter`] for orchestrating evaluation and the one-pass fixer
//!
//! The core is pure: it accepts in-memory text plus metadata and returns a
//! [`FileReport`]. File discovery, configuration loading, and report
//! rendering belong to the caller.
//!
//! ## Example
//!
//! ```ignore
//! use stylint_core::{Config, FileMeta, Linter, RuleRegistry, resolve};
//!
//! let registry = RuleRegistry::from_rules(my_rules)?;
//! let config = resolve(&registry, &Config::default())?;
//! let report = Linter::new(&registry).lint(source, &FileMeta::new("app.js"), &config);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod context;
mod engine;
mod registry;
mod resolver;
mod rule;
mod token;
mod types;

/// Tokenizer for JavaScript source text.
pub mod lexer;

/// Token scanning helpers for rule implementations.
pub mod utils;

pub use config::{Config, ConfigError, RuleOverride};
pub use context::{FileContext, FileMeta};
pub use engine::Linter;
pub use registry::{RegistryError, RuleRegistry};
pub use resolver::{resolve, ResolvedConfig, RuleSettings};
pub use rule::{OptionKind, OptionSpec, Rule, RuleBox, RuleOptions};
pub use token::{CommentStyle, Quote, Span, Token, TokenKind};
pub use types::{FileReport, Fix, Severity, Violation, ViolationDiagnostic};
