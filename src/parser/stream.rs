/*
 * ==========================================================================
 * SMOLC - Tiny C, Big Dreams!
 * ==========================================================================
 *
 * File:     stream.rs
 * Purpose:  Lookahead-buffered token cursor over a one-pass producer.
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

use crate::error::ParseError;
use crate::span::Span;
use crate::token::{Token, TokenKind};
use std::collections::VecDeque;

/// A pull-based token cursor with arbitrary-depth lookahead.
///
/// Wraps any one-pass token producer (`Iterator<Item = Token>`) and
/// buffers not-yet-consumed tokens in a small deque. Statement dispatch
/// needs to inspect up to two tokens ahead without consuming them, and
/// list/suffix parsing peeks one token at loop boundaries; this cursor
/// supports interleaving peeks and pops in any order.
///
/// Once a token has been buffered it is never re-fetched from the
/// producer; peeking is idempotent.
pub struct TokenStream<I: Iterator<Item = Token>> {
    /// The external, one-pass token producer.
    producer: I,

    /// Tokens pulled from the producer but not yet consumed,
    /// front = next up.
    lookahead: VecDeque<Token>,

    /// Span of the last token ever pulled, so end-of-input errors can
    /// still point somewhere useful.
    last_span: Span,
}

impl<I: Iterator<Item = Token>> TokenStream<I> {
    pub fn new(producer: I) -> Self {
        Self {
            producer,
            lookahead: VecDeque::new(),
            last_span: Span::default(),
        }
    }

    /// Pulls one token from the producer, remembering its span.
    fn pull(&mut self) -> Option<Token> {
        let token = self.producer.next()?;
        self.last_span = token.span;
        Some(token)
    }

    /// Consumes and returns the next token.
    ///
    /// Fails with `UnexpectedEndOfInput` if none remain.
    pub fn advance(&mut self) -> Result<Token, ParseError> {
        match self.lookahead.pop_front() {
            Some(token) => Ok(token),
            None => self
                .pull()
                .ok_or_else(|| ParseError::unexpected_eof(self.last_span)),
        }
    }

    /// Returns the `n`-th not-yet-consumed token (1-indexed) without
    /// consuming anything.
    ///
    /// Fails with `UnexpectedEndOfInput` if fewer than `n` tokens remain.
    pub fn peek(&mut self, n: usize) -> Result<&Token, ParseError> {
        debug_assert!(n >= 1, "peek is 1-indexed");
        while self.lookahead.len() < n {
            match self.pull() {
                Some(token) => self.lookahead.push_back(token),
                None => return Err(ParseError::unexpected_eof(self.last_span)),
            }
        }
        Ok(&self.lookahead[n - 1])
    }

    /// Returns whether at least one token remains. Never fails.
    pub fn has_more(&mut self) -> bool {
        if self.lookahead.is_empty() {
            match self.pull() {
                Some(token) => self.lookahead.push_back(token),
                None => return false,
            }
        }
        true
    }

    /// Whether the next token is an `Op` with exactly this text.
    ///
    /// Exhaustion is an error here, matching the grammar rules that call
    /// this at loop boundaries: running dry mid-construct is a failure,
    /// not a clean stop.
    pub fn next_is_op(&mut self, op: &str) -> Result<bool, ParseError> {
        let token = self.peek(1)?;
        Ok(token.kind == TokenKind::Op && token.lexeme == op)
    }

    /// Whether the next token is a `Name` with exactly this text.
    pub fn next_is_name(&mut self, name: &str) -> Result<bool, ParseError> {
        let token = self.peek(1)?;
        Ok(token.kind == TokenKind::Name && token.lexeme == name)
    }

    /// Checks the next token's kind, then consumes and returns it.
    ///
    /// On mismatch fails with `UnexpectedToken` **without consuming**,
    /// so callers may still dispatch on the unconsumed token. This must
    /// stay check-then-pop, not pop-then-check.
    pub fn consume(&mut self, kind: TokenKind) -> Result<Token, ParseError> {
        let next = self.peek(1)?;
        if next.kind != kind {
            return Err(ParseError::unexpected_token(kind.to_string(), next));
        }
        self.advance()
    }

    /// Checks that the next token is an `Op` with exactly this text,
    /// then consumes and returns it.
    pub fn consume_op(&mut self, op: &str) -> Result<Token, ParseError> {
        let next = self.peek(1)?;
        if next.kind != TokenKind::Op || next.lexeme != op {
            return Err(ParseError::unexpected_token(format!("'{}'", op), next));
        }
        self.advance()
    }

    /// Checks that the next token is a `Name` with exactly this text,
    /// then consumes and returns it.
    pub fn consume_name(&mut self, name: &str) -> Result<Token, ParseError> {
        let next = self.peek(1)?;
        if next.kind != TokenKind::Name || next.lexeme != name {
            return Err(ParseError::unexpected_token(format!("'{}'", name), next));
        }
        self.advance()
    }
}
