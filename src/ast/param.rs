/*
 * ==========================================================================
 * SMOLC - Tiny C, Big Dreams!
 * ==========================================================================
 *
 * File:     param.rs
 * Purpose:  The type-and-name pair used by declarations and functions
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

use crate::ast::Name;
use serde::Serialize;

/// Represents **one type-and-name pair**: two consecutive identifiers,
/// the first used as a type, the second as a binding name.
///
/// Appears in two places:
/// - variable declarations: `Int a;`
/// - function parameter lists: `function main(String s) { ... }`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Param {
    /// The type identifier (`Int`, `String`, …).
    pub datatype: Name,

    /// The declared binding name.
    pub name: String,
}
