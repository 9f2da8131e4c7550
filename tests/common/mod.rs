// Shared test support: a miniature lexer standing in for the external
// token producer the parser consumes in a real pipeline. Only the tests
// use it; the crate itself never tokenizes anything.

use smolc::{Position, Span, Token, TokenKind};

/// Tokenizes a source snippet into the parser's input contract:
/// names, base-10 integers, double-quoted strings (quotes kept in the
/// lexeme), single-character operators. Whitespace and `//` comments
/// are skipped. Lines are 1-based, columns 0-based.
pub fn lex(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();

    for (index, line) in source.lines().enumerate() {
        let lineno = index + 1;
        let chars: Vec<char> = line.chars().collect();
        let mut col = 0;

        while col < chars.len() {
            let c = chars[col];

            if c.is_whitespace() {
                col += 1;
                continue;
            }

            if c == '/' && chars.get(col + 1) == Some(&'/') {
                break;
            }

            let start = col;
            let kind = if c.is_ascii_digit() {
                while col < chars.len() && chars[col].is_ascii_digit() {
                    col += 1;
                }
                TokenKind::Integer
            } else if c.is_alphabetic() || c == '_' {
                while col < chars.len() && (chars[col].is_alphanumeric() || chars[col] == '_') {
                    col += 1;
                }
                TokenKind::Name
            } else if c == '"' {
                col += 1;
                while col < chars.len() && chars[col] != '"' {
                    col += 1;
                }
                col += 1; // closing quote
                TokenKind::String
            } else {
                col += 1;
                TokenKind::Op
            };

            let lexeme: String = chars[start..col].iter().collect();
            let span = Span::new(
                Position::new(lineno, start),
                Position::new(lineno, col),
            );
            tokens.push(Token::new(kind, lexeme, span));
        }
    }

    tokens
}
