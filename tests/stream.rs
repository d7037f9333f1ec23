//! Token stream ordering and error collection.

mod common;

use common::{captured, error_token, symbol};
use silk_token::{Token, TokenKind, TokenStream};

/// Tokens for `-person(id:1, name:"leo)` followed by `-book(`.
fn scanned() -> TokenStream {
    let mut stream = TokenStream::new();
    stream.push(symbol(TokenKind::NodeIndent, 0));
    stream.push(captured(TokenKind::Name, "person", 1));
    stream.push(symbol(TokenKind::LParen, 7));
    stream.push(captured(TokenKind::Name, "id", 8));
    stream.push(symbol(TokenKind::Colon, 10));
    stream.push(captured(TokenKind::PlainText, "1", 11));
    stream.push(symbol(TokenKind::Comma, 12));
    stream.push(captured(TokenKind::Name, "name", 14));
    stream.push(symbol(TokenKind::Colon, 18));
    stream.push(error_token(
        19,
        "-person(id:1, name:\"leo)\n",
        "unterminated string",
    ));
    stream.push(symbol(TokenKind::NodeIndent, 0));
    stream.push(captured(TokenKind::Name, "book", 1));
    stream.push(symbol(TokenKind::LParen, 5));
    stream.push(error_token(6, "-book(\n", "unexpected end of line"));
    stream
}

#[test]
fn stream_len_and_order() {
    let stream = scanned();
    assert_eq!(stream.len(), 14);
    let texts: Vec<_> = stream.iter().take(3).map(Token::text).collect();
    assert_eq!(texts, ["-", "person", "("]);
}

#[test]
fn errors_in_stream_order() {
    let stream = scanned();
    let columns: Vec<_> = stream.errors().map(|e| e.column()).collect();
    assert_eq!(columns, [19, 6]);
}

#[test]
fn joined_report() {
    let report = scanned().report().expect("stream has errors");
    assert_eq!(
        report,
        "pos:19 unterminated string\n\
         -person(id:1, name:\"leo)\n\
         \x20                  ^\n\
         \n\
         pos:6 unexpected end of line\n\
         -book(\n\
         \x20     ^"
    );
}

#[test]
fn lex_errors_display_matches_report() {
    let stream = scanned();
    let report = stream.report().expect("stream has errors");
    let err = stream.into_result().unwrap_err();
    assert_eq!(err.errors.len(), 2);
    assert_eq!(err.to_string(), report);
}

#[test]
fn clean_stream_yields_tokens() {
    let stream: TokenStream = [
        symbol(TokenKind::Preamble, 0),
        captured(TokenKind::LineComment, "# people", 6),
        symbol(TokenKind::LineBreak, 14),
    ]
    .into_iter()
    .collect();
    assert!(!stream.has_errors());
    assert!(stream.report().is_none());
    let tokens = stream.into_result().expect("no errors");
    assert_eq!(tokens[1].text(), "# people");
}

#[test]
fn extend_appends() {
    let mut stream = TokenStream::new();
    stream.push(symbol(TokenKind::Star, 0));
    stream.extend([symbol(TokenKind::Plus, 1), symbol(TokenKind::Question, 2)]);
    let kinds: Vec<_> = stream.as_slice().iter().map(Token::kind).collect();
    assert_eq!(kinds, [TokenKind::Star, TokenKind::Plus, TokenKind::Question]);
}

#[test]
fn borrowed_and_owned_iteration_agree() {
    let stream = scanned();
    let borrowed: Vec<_> = (&stream).into_iter().cloned().collect();
    let owned: Vec<_> = stream.into_iter().collect();
    assert_eq!(borrowed, owned);
}

#[test]
fn rescanning_gives_fresh_stream() {
    let first = scanned();
    let second = scanned();
    assert_eq!(first, second);
    drop(first);
    assert_eq!(second.errors().count(), 2);
}
