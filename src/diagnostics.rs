/*
 * ==========================================================================
 * SMOLC - Tiny C, Big Dreams!
 * ==========================================================================
 *
 * File:     diagnostics.rs
 * Purpose:  Human-friendly rendering of parse errors against source text.
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
use crate::span::Position;

/// Responsible for rendering human-friendly, compiler-style diagnostics
/// for Smolc parse errors.
///
/// The parser itself never prints; it hands back a `ParseError` with a
/// span and leaves reporting to its caller. This printer is that caller's
/// convenience:
/// - Formats errors with file/line/column information
/// - Displays the offending source line
/// - Highlights the error position using a caret (`^`)
/// - Optionally shows a helpful follow-up hint
///
/// The output is intentionally inspired by `rustc` diagnostics, but
/// simplified for Smolc and designed to remain readable without color.
pub struct DiagnosticPrinter {
    /// Full source code of the file that was tokenized and parsed.
    source: String,

    /// Name of the source file (e.g. `main.smol`), display-only.
    file_name: String,
}

impl DiagnosticPrinter {
    /// Creates a new diagnostic printer for a given source file.
    pub fn new(file_name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            source: source.into(),
        }
    }

    /// Renders a formatted diagnostic for the given error.
    ///
    /// # Output Example
    /// ```text
    /// error[P0002]: expected ';', found '}'
    ///   --> example.smol:3:9
    ///    |
    ///   3 |     Int a
    ///    |         ^
    /// ```
    pub fn render(&self, error: &ParseError) -> String {
        let Position { line, column } = error.span.start;

        // Lines are 1-indexed in diagnostics, vectors are 0-indexed.
        // `saturating_sub` guards a pathological line number of 0.
        let lines: Vec<&str> = self.source.lines().collect();
        let src_line = lines.get(line.saturating_sub(1)).unwrap_or(&"");

        let mut out = format!(
            "error[{}]: {}\n  --> {}:{}:{}\n",
            error.code(),
            error,
            self.file_name,
            line,
            column + 1
        );

        out.push_str("   |\n");
        out.push_str(&format!("{:>3} | {}\n", line, src_line));

        // Caret underline pointing exactly at the error column.
        let mut underline = String::new();
        for _ in 0..column {
            underline.push(' ');
        }
        underline.push('^');
        out.push_str(&format!("   | {}\n", underline));

        if let Some(help) = &error.help {
            out.push_str(&format!("\nhelp: {}\n", help));
        }

        out
    }

    /// Prints a formatted diagnostic to stderr.
    pub fn print(&self, error: &ParseError) {
        eprint!("{}", self.render(error));
    }
}
