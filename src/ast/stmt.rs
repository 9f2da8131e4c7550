/*
 * ==========================================================================
 * SMOLC - Tiny C, Big Dreams!
 * ==========================================================================
 *
 * File:     stmt.rs
 * Purpose:  Statement nodes of the Smolc AST
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

use crate::ast::{Expr, Name, Param};
use crate::span::Span;
use serde::Serialize;

/// All Smolc statements.
///
/// Like `Expr`, a closed sum type with a span on every variant. Bodies
/// (`Vec<Stmt>`) and argument lists preserve source order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Stmt {
    /* ----------------------------- */
    /* EXPRESSIONS                   */
    /* ----------------------------- */

    /// A bare expression followed by `;`: `print("hi");`
    Expression { expression: Expr, span: Span },

    /* ----------------------------- */
    /* VARIABLES                     */
    /* ----------------------------- */

    /// `Int a;` or `Int a = expression;`
    Declaration {
        datatype: Name,
        variable: String,
        value: Option<Expr>,
        span: Span,
    },

    /// `a = expression;`
    ///
    /// The target is always a plain identifier; field-assignment forms
    /// are not supported yet.
    Assignment {
        variable: Name,
        value: Expr,
        span: Span,
    },

    /* ----------------------------- */
    /* CONTROL FLOW                  */
    /* ----------------------------- */

    /// `if condition { ... }` (no else clause, no loop constructs).
    If {
        condition: Expr,
        body: Vec<Stmt>,
        span: Span,
    },

    /// `return expression;`
    Return { value: Expr, span: Span },

    /* ----------------------------- */
    /* FUNCTIONS                     */
    /* ----------------------------- */

    /// `function name(Type arg, ...) [returns Type] { ... }`
    Function {
        name: String,
        params: Vec<Param>,
        return_type: Option<Name>,
        body: Vec<Stmt>,
        span: Span,
    },

    /* ----------------------------- */
    /* RESERVED                      */
    /* ----------------------------- */

    /// Reference-count decrement for a future ownership transform.
    ///
    /// The parser never constructs this variant; it exists so that later
    /// phases which insert it can share the statement type and match
    /// exhaustively without an escape hatch.
    DecRef { name: String, span: Span },
}

impl Stmt {
    /// The source range this statement covers.
    pub fn span(&self) -> Span {
        match self {
            Stmt::Expression { span, .. } => *span,
            Stmt::Declaration { span, .. } => *span,
            Stmt::Assignment { span, .. } => *span,
            Stmt::If { span, .. } => *span,
            Stmt::Return { span, .. } => *span,
            Stmt::Function { span, .. } => *span,
            Stmt::DecRef { span, .. } => *span,
        }
    }
}
