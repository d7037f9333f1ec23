//! Tokens for the Silk text format.
//!
//! The data a Silk lexer hands to a parser: classified tokens with
//! their column in the source line, and error tokens that point at the
//! exact column where a lexical rule failed.
//!
//! # Quick start
//!
//! ## Build tokens
//!
//! ```
//! use silk_token::{Token, TokenKind};
//!
//! let colon = Token::new(TokenKind::Colon, 3).unwrap();
//! assert_eq!(colon.text(), ":");
//! assert_eq!(colon.render(), "pos: 3 [Colon] :");
//!
//! let name = Token::captured(TokenKind::Name, "person", 1).unwrap();
//! assert_eq!(name.text(), "person");
//! ```
//!
//! ## Report a lexical error
//!
//! ```
//! use silk_token::{ErrorToken, Token};
//!
//! let token = Token::error(5, "foo = bar\n", "unexpected '='").unwrap();
//! let error = token.narrow::<ErrorToken>();
//! assert_eq!(error.report(), "pos:5 unexpected '='\nfoo = bar\n     ^");
//! ```

// Allow noisy pedantic lints that don't add value for
// a library crate.
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

pub mod error;
pub mod error_token;
pub mod kind;
pub mod stream;
pub mod token;

pub use error::{PositionErrorKind, TokenError, column_from_offset};
pub use error_token::{ErrorToken, strip_line_terminator};
pub use kind::{Form, TokenKind};
pub use stream::{LexErrors, TokenStream};
pub use token::{SymbolToken, TextToken, Token, TokenVariant};
