use std::slice;
use std::vec;

use crate::error_token::ErrorToken;
use crate::token::Token;

/// Lexical errors collected from a token stream.
///
/// Displays every error report, separated by a blank line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}", join_reports(.errors))]
pub struct LexErrors {
    pub errors: Vec<ErrorToken>,
}

fn join_reports<'a>(errors: impl IntoIterator<Item = &'a ErrorToken>) -> String {
    errors
        .into_iter()
        .map(ErrorToken::report)
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Tokens of one input, in the order the scanner produced them.
///
/// Error tokens stay in place among the other tokens; reporting code
/// pulls them out with [`errors`](Self::errors) or
/// [`report`](Self::report).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenStream {
    tokens: Vec<Token>,
}

impl TokenStream {
    #[must_use]
    pub const fn new() -> Self {
        Self { tokens: Vec::new() }
    }

    pub fn push(&mut self, token: impl Into<Token>) {
        self.tokens.push(token.into());
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    /// Error tokens in stream order.
    pub fn errors(&self) -> impl Iterator<Item = &ErrorToken> {
        self.tokens.iter().filter_map(Token::as_error)
    }

    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.tokens.iter().any(Token::is_error)
    }

    /// Reports of every error token, separated by a blank line.
    ///
    /// `None` when the stream holds no error token.
    #[must_use]
    pub fn report(&self) -> Option<String> {
        if self.has_errors() {
            Some(join_reports(self.errors()))
        } else {
            None
        }
    }

    /// Hand the tokens over, or the error tokens if there are any.
    pub fn into_result(self) -> Result<Vec<Token>, LexErrors> {
        if !self.has_errors() {
            return Ok(self.tokens);
        }
        let errors = self
            .tokens
            .into_iter()
            .filter_map(|token| match token {
                Token::Error(e) => Some(e),
                Token::Symbol(_) | Token::Text(_) => None,
            })
            .collect();
        Err(LexErrors { errors })
    }
}

impl FromIterator<Token> for TokenStream {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        Self {
            tokens: iter.into_iter().collect(),
        }
    }
}

impl Extend<Token> for TokenStream {
    fn extend<I: IntoIterator<Item = Token>>(&mut self, iter: I) {
        self.tokens.extend(iter);
    }
}

impl IntoIterator for TokenStream {
    type Item = Token;
    type IntoIter = vec::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

impl<'a> IntoIterator for &'a TokenStream {
    type Item = &'a Token;
    type IntoIter = slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::TokenKind;

    fn sample() -> TokenStream {
        let mut stream = TokenStream::new();
        stream.push(Token::new(TokenKind::NodeIndent, 0).expect("fixed"));
        stream.push(Token::captured(TokenKind::Name, "a", 1).expect("captured"));
        stream.push(Token::error(2, "-a$\n", "unexpected '$'").expect("valid"));
        stream
    }

    #[test]
    fn push_keeps_order() {
        let stream = sample();
        let kinds: Vec<_> = stream.iter().map(Token::kind).collect();
        assert_eq!(
            kinds,
            [TokenKind::NodeIndent, TokenKind::Name, TokenKind::Error]
        );
    }

    #[test]
    fn empty_stream_has_no_report() {
        let stream = TokenStream::new();
        assert!(stream.is_empty());
        assert!(!stream.has_errors());
        assert_eq!(stream.report(), None);
    }

    #[test]
    fn report_single_error() {
        assert_eq!(
            sample().report().as_deref(),
            Some("pos:2 unexpected '$'\n-a$\n  ^")
        );
    }

    #[test]
    fn into_result_collects_errors() {
        let err = sample().into_result().unwrap_err();
        assert_eq!(err.errors.len(), 1);
        assert_eq!(err.errors[0].message(), "unexpected '$'");
        assert_eq!(err.to_string(), "pos:2 unexpected '$'\n-a$\n  ^");
    }

    #[test]
    fn into_result_clean_stream() {
        let stream: TokenStream = [
            Token::new(TokenKind::LParen, 0).expect("fixed"),
            Token::new(TokenKind::RParen, 1).expect("fixed"),
        ]
        .into_iter()
        .collect();
        let tokens = stream.into_result().expect("no errors");
        assert_eq!(tokens.len(), 2);
    }
}
