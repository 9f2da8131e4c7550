/*
 * ==========================================================================
 * SMOLC - Tiny C, Big Dreams!
 * ==========================================================================
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

use crate::ast::Param;
use crate::error::ParseError;
use crate::parser::parser::Parser;
use crate::token::Token;

impl<I: Iterator<Item = Token>> Parser<I> {
    /// Parses a comma-separated list up to (and including) the closing
    /// `stop` operator:
    ///
    /// ```text
    /// )
    /// element )
    /// element , )
    /// element , element )
    /// element , element , )
    /// ...
    /// ```
    ///
    /// A single trailing comma is tolerated; an empty list is valid.
    /// Returns the elements plus the closing token, which callers fold
    /// into the surrounding node's span. After an element, a token that
    /// is neither `,` nor `stop` fails with `UnexpectedToken`.
    ///
    /// The element parser is passed in so argument lists (expressions)
    /// and parameter lists (type-and-name pairs) share one sub-grammar.
    pub(crate) fn comma_list<T>(
        &mut self,
        stop: &str,
        parse_element: fn(&mut Self) -> Result<T, ParseError>,
    ) -> Result<(Vec<T>, Token), ParseError> {
        let mut elements = Vec::new();

        // Empty list: the closing delimiter comes immediately.
        if self.tokens.next_is_op(stop)? {
            let closing = self.tokens.advance()?;
            return Ok((elements, closing));
        }

        loop {
            elements.push(parse_element(self)?);

            if self.tokens.next_is_op(stop)? {
                return Ok((elements, self.tokens.advance()?));
            }

            self.tokens.consume_op(",")?;
            if self.tokens.next_is_op(stop)? {
                // Trailing comma.
                return Ok((elements, self.tokens.advance()?));
            }
        }
    }

    /// Parses a type-and-name pair: two consecutive identifiers, the
    /// first used as a type, the second as a binding name.
    ///
    /// ```text
    /// Int a
    /// String greeting
    /// ```
    pub(crate) fn type_and_name(&mut self) -> Result<Param, ParseError> {
        let datatype = self.parse_name(true)?;
        let name = self.parse_name(true)?;
        Ok(Param {
            datatype,
            name: name.name,
        })
    }
}
