/*
 * ==========================================================================
 * SMOLC - Tiny C, Big Dreams!
 * ==========================================================================
 *
 * File:     error.rs
 * Purpose:  Parse-error taxonomy for the Smolc front end.
 *
 * License:
 * This file is part of the Smolc language project.
 *
 * Smolc is dual-licensed under the terms of:
 *   - The MIT license
 *   - The Apache License, Version 2.0
 *
 * You may choose either license to govern your use of this software.
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ==========================================================================
 */

use crate::span::Span;
use crate::token::Token;
use std::fmt;

/// The closed set of ways a Smolc parse can fail.
///
/// Every error is immediately fatal to the current parse: nothing is
/// caught or wrapped on the way out, and no partial AST is produced.
/// Callers match on this enum to react to specific failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// A required token was needed but the token producer was exhausted.
    UnexpectedEndOfInput,

    /// A required token's kind or exact text did not match what the
    /// current grammar rule demanded (missing `;`, missing `)`, …).
    UnexpectedToken {
        /// What the grammar rule wanted, e.g. `NAME` or `';'`.
        expected: String,
        /// The source text actually found.
        found: String,
    },

    /// At an expression-start position, the next token does not begin
    /// any known primary form.
    InvalidToken {
        /// The source text actually found.
        found: String,
    },

    /// An identifier was used as a binding name but belongs to the
    /// reserved keyword set.
    ReservedKeyword {
        /// The offending identifier.
        name: String,
    },
}

/// A fatal syntax error, carrying the source range it was detected at.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    /// Which grammar contract was violated.
    pub kind: ParseErrorKind,

    /// Primary source location.
    pub span: Span,

    /// Optional note / help text.
    pub help: Option<String>,
}

impl ParseError {
    /// Generic constructor.
    pub fn new(kind: ParseErrorKind, span: Span) -> Self {
        Self {
            kind,
            span,
            help: None,
        }
    }

    /// The token producer ran dry where the grammar still needed input.
    pub fn unexpected_eof(span: Span) -> Self {
        Self::new(ParseErrorKind::UnexpectedEndOfInput, span)
    }

    /// The next token did not match the kind/text the rule demanded.
    pub fn unexpected_token(expected: impl Into<String>, found: &Token) -> Self {
        Self::new(
            ParseErrorKind::UnexpectedToken {
                expected: expected.into(),
                found: found.lexeme.clone(),
            },
            found.span,
        )
    }

    /// The next token cannot start an expression.
    pub fn invalid_token(found: &Token) -> Self {
        Self::new(
            ParseErrorKind::InvalidToken {
                found: found.lexeme.clone(),
            },
            found.span,
        )
    }

    /// A reserved keyword appeared where a binding name is required.
    pub fn reserved_keyword(token: &Token) -> Self {
        Self::new(
            ParseErrorKind::ReservedKeyword {
                name: token.lexeme.clone(),
            },
            token.span,
        )
        .with_help("reserved keywords cannot be used as names")
    }

    /// Attach a help message to the error (builder-style).
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Stable error code (P0001, P0002, …), usable in documentation and
    /// scripted test assertions independently of message wording.
    pub fn code(&self) -> &'static str {
        match self.kind {
            ParseErrorKind::UnexpectedEndOfInput => "P0001",
            ParseErrorKind::UnexpectedToken { .. } => "P0002",
            ParseErrorKind::InvalidToken { .. } => "P0003",
            ParseErrorKind::ReservedKeyword { .. } => "P0004",
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ParseErrorKind::UnexpectedEndOfInput => {
                write!(f, "unexpected end of input")
            }
            ParseErrorKind::UnexpectedToken { expected, found } => {
                write!(f, "expected {}, found '{}'", expected, found)
            }
            ParseErrorKind::InvalidToken { found } => {
                write!(f, "invalid token '{}'", found)
            }
            ParseErrorKind::ReservedKeyword { name } => {
                write!(f, "'{}' is a reserved keyword", name)
            }
        }
    }
}

impl std::error::Error for ParseError {}
