#![allow(dead_code)]

use silk_token::{ErrorToken, Token, TokenKind};

pub fn symbol(kind: TokenKind, column: usize) -> Token {
    Token::new(kind, column).expect("fixed-form kind")
}

pub fn captured(kind: TokenKind, text: &str, column: usize) -> Token {
    Token::captured(kind, text, column).expect("captured kind")
}

pub fn error_token(column: usize, line: &str, message: &str) -> ErrorToken {
    ErrorToken::new(column, line, message).expect("column within line")
}

/// Helper: compare a report line by line for readable failures.
pub fn assert_report(token: &ErrorToken, expected: &[&str]) {
    let report = token.report();
    let lines: Vec<_> = report.split('\n').collect();
    assert_eq!(
        lines, expected,
        "report mismatch:\n--- expected ---\n{}\n--- got ---\n{report}",
        expected.join("\n")
    );
}
