/*
 * ==========================================================================
 * SMOLC - Tiny C, Big Dreams!
 * ==========================================================================
 *
 * File:     expressions.rs
 * Purpose:  Implements the Smolc expression grammar using recursive descent
 *
 * The expression grammar is deliberately small:
 *
 *   expression → primary ( "(" comma-list ")" )*
 *   primary    → NAME | INTEGER | STRING
 *
 * The call suffix binds to whatever was parsed before it, so curried
 * chains like `thing()()()` fold into left-nested `Call` nodes.
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

use crate::ast::{Expr, Name};
use crate::error::ParseError;
use crate::parser::parser::{Parser, KEYWORDS};
use crate::token::{Token, TokenKind};
use tracing::trace;

impl<I: Iterator<Item = Token>> Parser<I> {
    /// name → NAME
    ///
    /// With `check_keywords` on (the default almost everywhere), a name
    /// from the reserved set fails with `ReservedKeyword` instead of
    /// silently shadowing a statement form.
    pub(crate) fn parse_name(&mut self, check_keywords: bool) -> Result<Name, ParseError> {
        let token = self.tokens.consume(TokenKind::Name)?;
        if check_keywords && KEYWORDS.contains(&token.lexeme.as_str()) {
            return Err(ParseError::reserved_keyword(&token));
        }
        Ok(Name {
            name: token.lexeme,
            span: token.span,
        })
    }

    /// integer → INTEGER
    fn parse_integer(&mut self) -> Result<Expr, ParseError> {
        let token = self.tokens.consume(TokenKind::Integer)?;
        let value = token
            .lexeme
            .parse::<i64>()
            .map_err(|_| ParseError::invalid_token(&token))?;
        Ok(Expr::Integer {
            value,
            span: token.span,
        })
    }

    /// string → STRING
    ///
    /// The lexer hands the lexeme over with its quote delimiters still
    /// attached; only those two characters are stripped here. Escape
    /// sequences and interpolation are not processed.
    fn parse_string(&mut self) -> Result<Expr, ParseError> {
        let token = self.tokens.consume(TokenKind::String)?;
        if token.lexeme.len() < 2 {
            // A string lexeme without room for both quotes breaks the
            // lexer contract.
            return Err(ParseError::invalid_token(&token));
        }
        let value = token.lexeme[1..token.lexeme.len() - 1].to_string();
        Ok(Expr::String {
            value,
            span: token.span,
        })
    }

    /// expression → primary ( "(" comma-list ")" )*
    pub(crate) fn expression(&mut self) -> Result<Expr, ParseError> {
        let next_kind = self.tokens.peek(1)?.kind;
        trace!(kind = %next_kind, "parsing expression");
        let mut result = match next_kind {
            TokenKind::Name => Expr::Name(self.parse_name(true)?),
            TokenKind::String => self.parse_string()?,
            TokenKind::Integer => self.parse_integer()?,
            TokenKind::Op => {
                let found = self.tokens.peek(1)?.clone();
                return Err(ParseError::invalid_token(&found));
            }
        };

        // Check for call suffixes; a loop so that nested calls like
        // thing()()() keep wrapping the previous result.
        loop {
            let next = self.tokens.peek(1)?;
            if next.kind != TokenKind::Op || next.lexeme != "(" {
                break;
            }

            self.tokens.consume_op("(")?;
            let (arguments, closing) = self.comma_list(")", Self::expression)?;
            let span = result.span().to(closing.span);
            result = Expr::Call {
                callee: Box::new(result),
                arguments,
                span,
            };
        }

        Ok(result)
    }
}
