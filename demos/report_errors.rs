//! Demonstrate error tokens and their caret reports.
//!
//! Builds the token stream a scanner would produce for a short Silk
//! document containing two lexical errors.

use silk_token::{ErrorToken, Token, TokenError, TokenKind, TokenStream};

fn main() -> Result<(), TokenError> {
    let lines = [
        "-person(id, name)\n",
        "-person(id:1, name:\"leo)\n",
        "-book(\n",
    ];

    let mut stream = TokenStream::new();

    // -person(id, name)
    stream.push(Token::new(TokenKind::NodeIndent, 0)?);
    stream.push(Token::captured(TokenKind::Name, "person", 1)?);
    stream.push(Token::new(TokenKind::LParen, 7)?);
    stream.push(Token::captured(TokenKind::Name, "id", 8)?);
    stream.push(Token::new(TokenKind::Comma, 10)?);
    stream.push(Token::captured(TokenKind::Name, "name", 12)?);
    stream.push(Token::new(TokenKind::RParen, 16)?);
    stream.push(Token::new(TokenKind::LineBreak, 17)?);

    // -person(id:1, name:"leo)
    stream.push(Token::new(TokenKind::NodeIndent, 0)?);
    stream.push(Token::captured(TokenKind::Name, "person", 1)?);
    stream.push(Token::new(TokenKind::LParen, 7)?);
    stream.push(Token::captured(TokenKind::Name, "id", 8)?);
    stream.push(Token::new(TokenKind::Colon, 10)?);
    stream.push(Token::captured(TokenKind::PlainText, "1", 11)?);
    stream.push(Token::new(TokenKind::Comma, 12)?);
    stream.push(Token::captured(TokenKind::Name, "name", 14)?);
    stream.push(Token::new(TokenKind::Colon, 18)?);
    stream.push(ErrorToken::new(19, lines[1], "unterminated string")?);

    // -book(
    stream.push(Token::new(TokenKind::NodeIndent, 0)?);
    stream.push(Token::captured(TokenKind::Name, "book", 1)?);
    stream.push(Token::new(TokenKind::LParen, 5)?);
    stream.push(ErrorToken::new(6, lines[2], "unexpected end of line")?);

    println!("Tokens:");
    for token in &stream {
        println!("  {token}");
    }

    println!();

    match stream.report() {
        Some(report) => eprintln!("{report}"),
        None => println!("No lexical errors"),
    }

    if let Err(errors) = stream.into_result() {
        println!();
        println!("{} lexical error(s)", errors.errors.len());
        for error in &errors.errors {
            println!("  Message: {}", error.message());
            println!("  Location: column {}", error.column());
        }
    }

    Ok(())
}
