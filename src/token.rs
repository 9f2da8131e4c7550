/*
 * ==========================================================================
 * SMOLC - Tiny C, Big Dreams!
 * ==========================================================================
 *
 * File:      token.rs
 * Purpose:   Defines the lexical token types the Smolc parser consumes.
 *            Tokens are produced by an external lexer; this module is the
 *            contract between that producer and the parsing stage.
 *
 * License:
 * This file is part of the Smolc language project.
 *
 * Smolc is dual-licensed under the terms of:
 *   - The MIT License
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
use serde::Serialize;
use std::fmt;

/// Represents the **category of a lexical token** in the Smolc language.
///
/// `TokenKind` identifies how a sequence of characters from the source
/// code should be interpreted by the parser.
///
/// # Pipeline Role
/// ```text
/// Source Code → (external lexer) → Tokens → Parser → AST
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TokenKind {
    /// A user-defined name.
    ///
    /// Used for:
    /// - Variable names
    /// - Type names
    /// - Function names
    ///
    /// The keywords `return` and `if` also arrive as `Name` tokens;
    /// telling them apart is the parser's job, not the lexer's.
    Name,

    /// A base-10 integer literal, e.g. `42`.
    Integer,

    /// A quoted string literal.
    ///
    /// The lexeme still **includes the surrounding quote characters**;
    /// the parser strips them when it builds the AST node.
    String,

    /// A symbolic operator or punctuation character.
    ///
    /// Includes the structural symbols `(`, `)`, `{`, `}` and the
    /// operators `=`, `,`, `;`. The lexeme is the literal operator text.
    Op,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Name => "NAME",
            TokenKind::Integer => "INTEGER",
            TokenKind::String => "STRING",
            TokenKind::Op => "OP",
        };
        write!(f, "{}", name)
    }
}

/// Represents a **single lexical token** handed to the Smolc parser.
///
/// A `Token` is a fully classified unit of source code consisting of:
/// - A token category (`TokenKind`)
/// - The original source text (`lexeme`)
/// - The source range it covers (`span`)
///
/// # Example Tokens
/// ```text
/// function →  { kind: Name,    lexeme: "function" }
/// 42       →  { kind: Integer, lexeme: "42" }
/// "hi"     →  { kind: String,  lexeme: "\"hi\"" }
/// ;        →  { kind: Op,      lexeme: ";" }
/// ```
///
/// Tokens are never mutated by the parser; their lexemes and spans flow
/// unchanged into AST nodes and error reports.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    /// The classified category of the token.
    pub kind: TokenKind,

    /// The exact source text that produced this token.
    pub lexeme: String,

    /// The source range the token covers.
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            span,
        }
    }

    /// A `Name` token.
    pub fn name(lexeme: impl Into<String>, span: Span) -> Self {
        Self::new(TokenKind::Name, lexeme, span)
    }

    /// An `Integer` token.
    pub fn integer(lexeme: impl Into<String>, span: Span) -> Self {
        Self::new(TokenKind::Integer, lexeme, span)
    }

    /// A `String` token. The lexeme must include the quote characters.
    pub fn string(lexeme: impl Into<String>, span: Span) -> Self {
        Self::new(TokenKind::String, lexeme, span)
    }

    /// An `Op` token whose lexeme is the literal operator text.
    pub fn op(lexeme: impl Into<String>, span: Span) -> Self {
        Self::new(TokenKind::Op, lexeme, span)
    }
}

impl fmt::Display for Token {
    /// Formats a token for **user-facing output**.
    ///
    /// This implementation intentionally prints only the token's lexeme
    /// (the exact source text), rather than its full internal structure.
    /// In error output, users care about *what they wrote*:
    /// ```text
    /// expected ';', found '}'
    /// ```
    /// not:
    /// ```text
    /// Token { kind: Op, lexeme: "}", span: ... }
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lexeme)
    }
}
