//! Literal validation.
//!
//! Literals are spliced into declarations and `var()` fallbacks verbatim, so
//! a literal must not be able to end the declaration or open a new block.
//! Rejects top-level or nested `;`, `{`, `}`, `!`, unbalanced closing
//! brackets, and malformed strings or urls.

use cssparser::{ParseErrorKind, Parser, ParserInput, Token};

/// Checks that `text` is safe to place inside a declaration value.
///
/// Returns a human-readable reason on rejection.
pub fn validate_literal(text: &str) -> Result<(), String> {
    let mut input = ParserInput::new(text);
    let mut parser = Parser::new(&mut input);
    check_tokens(&mut parser)
}

fn check_tokens(parser: &mut Parser<'_, '_>) -> Result<(), String> {
    loop {
        let token = match parser.next_including_whitespace_and_comments() {
            Ok(token) => token.clone(),
            Err(_) => return Ok(()),
        };

        match token {
            Token::Semicolon => return Err("contains ';'".to_string()),
            Token::CurlyBracketBlock | Token::CloseCurlyBracket => {
                return Err("contains a curly bracket".to_string())
            }
            Token::CloseParenthesis | Token::CloseSquareBracket => {
                return Err("unbalanced closing bracket".to_string())
            }
            Token::BadString(_) | Token::BadUrl(_) => {
                return Err("malformed string or url".to_string())
            }
            Token::Delim('!') => return Err("contains '!'".to_string()),
            Token::Function(_) | Token::ParenthesisBlock | Token::SquareBracketBlock => {
                parser
                    .parse_nested_block(|nested| {
                        check_tokens(nested).map_err(|reason| nested.new_custom_error(reason))
                    })
                    .map_err(|err| match err.kind {
                        ParseErrorKind::Custom(reason) => reason,
                        ParseErrorKind::Basic(_) => "malformed block".to_string(),
                    })?;
            }
            _ => {}
        }
    }
}
