/*
 * ==========================================================================
 * SMOLC - Tiny C, Big Dreams!
 * ==========================================================================
 *
 * File:     parser/mod.rs
 * Purpose:  Root module for the Smolc recursive-descent parser.
 *
 * This module wires together all parser sub-modules, including:
 *   - Core parser control logic and the lazy statement driver
 *   - Statement parsing
 *   - Expression parsing
 *   - The lookahead token cursor
 *   - Shared sub-grammar helpers
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

/// Core parser orchestration:
/// - Owns the `Parser` struct and the keyword set
/// - Exposes the `parse(tokens)` / `parse_program(tokens)` entry points
/// - Drives the lazy `Statements` iterator
pub mod parser;

/// Statement-level parsing:
/// - declarations, assignments
/// - if / return
/// - function definitions
pub mod statements;

/// Expression-level parsing:
/// - names, integer and string literals
/// - postfix call chains
pub mod expressions;

/// Shared sub-grammars:
/// - comma-separated lists with trailing-comma tolerance
/// - type-and-name pairs
pub mod helpers;

/// The lookahead-buffered token cursor over the external producer.
pub mod stream;

/// Re-export the public entry points so callers can use
/// `smolc::parser::parse(...)`.
pub use parser::{parse, parse_program, Parser, Statements};
pub use stream::TokenStream;
