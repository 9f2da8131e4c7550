/*
 * ==========================================================================
 * SMOLC - Tiny C, Big Dreams!
 * ==========================================================================
 *
 * File:     expr.rs
 * Purpose:  Expression nodes of the Smolc AST
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
use serde::Serialize;

/// A syntactic identifier together with its source range.
///
/// Kept as its own struct (rather than only an `Expr` variant) because
/// several statement forms require *specifically* an identifier in a
/// given slot: a declaration's type, an assignment's target, a function's
/// return type. Holding a `Name` there makes that guarantee structural.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Name {
    pub name: String,
    pub span: Span,
}

/// All Smolc expressions.
///
/// A closed sum type: downstream phases match exhaustively over it, and
/// every variant carries the span of exactly the tokens it was built
/// from. Each node exclusively owns its children: the AST is a tree,
/// never a graph.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Expr {
    /// An identifier used as an expression: `hello`
    Name(Name),

    /// An integer literal: `3735928559`
    Integer { value: i64, span: Span },

    /// A string literal with its quote delimiters already stripped.
    /// Escape sequences are not processed.
    String { value: String, span: Span },

    /// A function call: `f(1, "x")`
    ///
    /// The callee is itself an expression, so curried chains like
    /// `thing()()()` nest left-associatively.
    Call {
        callee: Box<Expr>,
        arguments: Vec<Expr>,
        span: Span,
    },
}

impl Expr {
    /// The source range this expression covers.
    pub fn span(&self) -> Span {
        match self {
            Expr::Name(name) => name.span,
            Expr::Integer { span, .. } => *span,
            Expr::String { span, .. } => *span,
            Expr::Call { span, .. } => *span,
        }
    }
}
