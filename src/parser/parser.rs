/*
 * ==========================================================================
 * SMOLC - Tiny C, Big Dreams!
 * ==========================================================================
 *
 * Core Recursive-Descent Parser Entry Point
 *
 * This file defines the primary `Parser` structure and the public
 * `parse()` / `parse_program()` driver functions used to transform a
 * token stream into Smolc AST statements.
 *
 * The parsing implementation itself is split across multiple modules:
 * - `statements.rs`   → Statement-level grammar and dispatch
 * - `expressions.rs`  → Primaries and postfix call chains
 * - `helpers.rs`      → Comma-list sub-grammar, type-and-name pairs
 * - `stream.rs`       → Lookahead-buffered token cursor
 *
 * This file serves as the **root coordinator** of the parsing process.
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

use crate::ast::Stmt;
use crate::error::ParseError;
use crate::parser::stream::TokenStream;
use crate::token::Token;
use tracing::trace;

/// Identifiers that may never be used as binding names.
///
/// Only these two. `function` and `returns` are recognized positionally
/// by the statement grammar but are NOT reserved, so a variable
/// literally named `function` parses wherever it is not the first
/// expected token. Extending this set is a language change, not a
/// cleanup.
pub(crate) const KEYWORDS: [&str; 2] = ["return", "if"];

/// The core Smolc recursive-descent parser.
///
/// Owns the single token cursor for the duration of one parse. The
/// grammar logic is implemented through extension modules
/// (`statements`, `expressions`, `helpers`) via additional
/// `impl Parser` blocks.
pub struct Parser<I: Iterator<Item = Token>> {
    /// Cursor over the externally produced token sequence.
    pub(crate) tokens: TokenStream<I>,
}

impl<I: Iterator<Item = Token>> Parser<I> {
    pub fn new(tokens: I) -> Self {
        Self {
            tokens: TokenStream::new(tokens),
        }
    }
}

/// Public entry point for the Smolc parsing phase.
///
/// Returns a **lazy** sequence of top-level statements: each statement
/// is parsed on demand when the caller requests the next element, and
/// the sequence ends cleanly once the producer is exhausted. The first
/// error ends the sequence permanently; there is no recovery and no
/// partial statement.
///
/// # Example
/// ```ignore
/// for stmt in smolc::parse(tokens) {
///     println!("{:?}", stmt?);
/// }
/// ```
pub fn parse<I>(tokens: I) -> Statements<I::IntoIter>
where
    I: IntoIterator<Item = Token>,
{
    Statements {
        parser: Parser::new(tokens.into_iter()),
        done: false,
    }
}

/// Parses the entire token stream into a list of top-level statements.
///
/// The collecting counterpart of [`parse`]: either every statement
/// parsed, or the first error encountered.
pub fn parse_program<I>(tokens: I) -> Result<Vec<Stmt>, ParseError>
where
    I: IntoIterator<Item = Token>,
{
    parse(tokens).collect()
}

/// Lazy iterator over the top-level statements of one parse.
///
/// Non-rewindable and consumed at most once; re-driving a parse requires
/// a fresh token producer. After yielding an `Err` the iterator is fused
/// and only returns `None`.
pub struct Statements<I: Iterator<Item = Token>> {
    parser: Parser<I>,
    done: bool,
}

impl<I: Iterator<Item = Token>> Iterator for Statements<I> {
    type Item = Result<Stmt, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        // Checked before each statement so trailing end-of-input
        // terminates cleanly instead of erroring.
        if !self.parser.tokens.has_more() {
            self.done = true;
            return None;
        }

        trace!("pulling next top-level statement");
        let result = self.parser.statement();
        if result.is_err() {
            self.done = true;
        }
        Some(result)
    }
}
