/*
 * ==========================================================================
 * SMOLC - Tiny C, Big Dreams!
 * ==========================================================================
 *
 * File:     ast/mod.rs
 * Purpose:  Root module for the Smolc abstract syntax tree.
 *
 * The AST is the parser's output contract: a tree of immutable, spanned
 * nodes suitable for later semantic analysis or code generation.
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

/// Expression nodes:
/// - identifiers, integer and string literals
/// - left-associative function-call chains
pub mod expr;

/// The type-and-name pair shared by declarations and parameter lists.
pub mod param;

/// Statement nodes:
/// - declarations, assignments, conditionals, returns
/// - function definitions
/// - the reserved `DecRef` placeholder
pub mod stmt;

pub use expr::{Expr, Name};
pub use param::Param;
pub use stmt::Stmt;

/// Serializes a parsed program to pretty-printed JSON.
///
/// Handy for debugging a parse by eye and for feeding the tree to
/// out-of-process tooling. Spans are included, so two dumps compare
/// equal exactly when the ASTs do.
pub fn to_json(program: &[Stmt]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(program)
}
