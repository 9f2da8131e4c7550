/*
 * ==========================================================================
 * SMOLC - Tiny C, Big Dreams!
 * ==========================================================================
 *
 * File:     lib.rs
 * Purpose:  Crate root for the Smolc language front end.
 *
 * Smolc is a small, C-like toy language. This crate is its parsing
 * stage only: it turns a stream of lexical tokens (produced by an
 * external lexer) into an abstract syntax tree with precise source
 * spans. Type checking, name resolution, and code generation live in
 * later phases, not here.
 *
 * --------------------------------------------------------------------------
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

/// The abstract syntax tree: spanned, immutable, exclusively owned nodes.
pub mod ast;

/// Compiler-style diagnostic rendering for parse errors.
pub mod diagnostics;

/// The parse-error taxonomy.
pub mod error;

/// The recursive-descent parser and its token cursor.
pub mod parser;

/// Source positions and spans.
pub mod span;

/// The token contract with the external lexer.
pub mod token;

pub use ast::{Expr, Name, Param, Stmt};
pub use diagnostics::DiagnosticPrinter;
pub use error::{ParseError, ParseErrorKind};
pub use parser::{parse, parse_program, Parser, Statements};
pub use span::{Position, Span};
pub use token::{Token, TokenKind};
