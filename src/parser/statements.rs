/*
 * ==========================================================================
 * SMOLC - Tiny C, Big Dreams!
 * ==========================================================================
 *
 * Statement-Level Parsing Logic
 *
 * This file contains all grammar rules responsible for parsing **Smolc
 * statements** into their corresponding AST forms.
 *
 * It handles:
 * - Variable declarations (`Int a;`, `Int a = 1;`)
 * - Assignments (`a = f(1);`)
 * - Control flow (`if`, `return`)
 * - Function definitions (`function main(String s) returns Int { ... }`)
 * - Expression-backed statements
 *
 * This module forms the **top layer of the recursive-descent grammar**
 * and drives overall program structure.
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

use crate::ast::{Param, Stmt};
use crate::error::ParseError;
use crate::parser::parser::Parser;
use crate::token::{Token, TokenKind};
use tracing::trace;

impl<I: Iterator<Item = Token>> Parser<I> {
    /// Parses a single Smolc statement.
    ///
    /// This is the **main dispatcher** for all statement grammar forms.
    /// It inspects at most two upcoming tokens and routes to the
    /// appropriate parser. The two-token peek is always safe on valid
    /// input: every statement form has at least one token before its
    /// terminating `;` or opening `{`.
    pub(crate) fn statement(&mut self) -> Result<Stmt, ParseError> {
        trace!("dispatching statement");

        if self.tokens.peek(1)?.kind == TokenKind::Name {
            // ------------------------------------------------------------
            // KEYWORD-LED FORMS: return / if / function
            // ------------------------------------------------------------
            if self.tokens.next_is_name("return")? {
                return self.return_statement();
            }

            if self.tokens.next_is_name("if")? {
                return self.if_statement();
            }

            if self.tokens.next_is_name("function")? {
                return self.function_definition();
            }

            // ------------------------------------------------------------
            // NAME-LED FORMS: decided by the token after the name
            // ------------------------------------------------------------
            let after_name = self.tokens.peek(2)?;

            // name = ...
            if after_name.kind == TokenKind::Op && after_name.lexeme == "=" {
                return self.assignment();
            }

            // name name ...
            if after_name.kind == TokenKind::Name {
                return self.declaration();
            }
        }

        // ------------------------------------------------------------
        // FALLBACK: EXPRESSION STATEMENT
        // ------------------------------------------------------------
        self.expression_statement()
    }

    /// expression statement → expression ";"
    fn expression_statement(&mut self) -> Result<Stmt, ParseError> {
        let expression = self.expression()?;
        let semicolon = self.tokens.consume_op(";")?;
        let span = expression.span().to(semicolon.span);
        Ok(Stmt::Expression { expression, span })
    }

    /// assignment → NAME "=" expression ";"
    ///
    /// The target is a plain identifier; field-assignment forms like
    /// `thing's stuff = value` are not supported yet.
    fn assignment(&mut self) -> Result<Stmt, ParseError> {
        let variable = self.parse_name(true)?;
        self.tokens.consume_op("=")?;
        let value = self.expression()?;
        let semicolon = self.tokens.consume_op(";")?;
        let span = variable.span.to(semicolon.span);
        Ok(Stmt::Assignment {
            variable,
            value,
            span,
        })
    }

    /// declaration → type-and-name ( ";" | OP expression ";" )
    ///
    /// One operator token decides the shape: `;` ends an uninitialized
    /// declaration, anything else (in practice `=`) separates the
    /// initializer expression.
    fn declaration(&mut self) -> Result<Stmt, ParseError> {
        let Param {
            datatype,
            name: variable,
        } = self.type_and_name()?;

        let separator = self.tokens.consume(TokenKind::Op)?;
        let (value, last) = if separator.lexeme == ";" {
            (None, separator)
        } else {
            let value = self.expression()?;
            (Some(value), self.tokens.consume_op(";")?)
        };

        let span = datatype.span.to(last.span);
        Ok(Stmt::Declaration {
            datatype,
            variable,
            value,
            span,
        })
    }

    /// if → "if" expression "{" statement* "}"
    ///
    /// No else clause and no loop constructs in this language.
    fn if_statement(&mut self) -> Result<Stmt, ParseError> {
        let keyword = self.tokens.consume_name("if")?;
        let condition = self.expression()?;
        self.tokens.consume_op("{")?;

        let mut body = Vec::new();
        while !self.tokens.next_is_op("}")? {
            body.push(self.statement()?);
        }

        let closing = self.tokens.consume_op("}")?;
        Ok(Stmt::If {
            condition,
            body,
            span: keyword.span.to(closing.span),
        })
    }

    /// return → "return" expression ";"
    fn return_statement(&mut self) -> Result<Stmt, ParseError> {
        let keyword = self.tokens.consume_name("return")?;
        let value = self.expression()?;
        let semicolon = self.tokens.consume_op(";")?;
        Ok(Stmt::Return {
            value,
            span: keyword.span.to(semicolon.span),
        })
    }

    /// function → "function" NAME "(" type-and-name-list ")"
    ///            [ "returns" NAME ] "{" statement* "}"
    ///
    /// ```text
    /// function main() { ... }
    /// function thing(Int a, Int b) returns Int { ... }
    /// ```
    fn function_definition(&mut self) -> Result<Stmt, ParseError> {
        let keyword = self.tokens.consume_name("function")?;
        let name = self.parse_name(true)?;
        trace!(function = %name.name, "parsing function definition");

        self.tokens.consume_op("(")?;
        let (params, _closing) = self.comma_list(")", Self::type_and_name)?;

        // `returns` is positional, not reserved: it only means anything
        // right here.
        let return_type = if self.tokens.next_is_name("returns")? {
            self.tokens.advance()?;
            Some(self.parse_name(true)?)
        } else {
            None
        };

        self.tokens.consume_op("{")?;
        let mut body = Vec::new();
        while !self.tokens.next_is_op("}")? {
            body.push(self.statement()?);
        }
        let closing = self.tokens.consume_op("}")?;

        Ok(Stmt::Function {
            name: name.name,
            params,
            return_type,
            body,
            span: keyword.span.to(closing.span),
        })
    }
}
