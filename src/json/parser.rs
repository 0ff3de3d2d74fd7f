//! Tolerant JSON parser.
//!
//! Recursive descent over the lexer's tokens. Accepts everything standard
//! JSON accepts plus comments and trailing commas in arrays and objects.
//! Unquoted keys, single-quoted strings and unclosed containers are still
//! errors.
//!
//! Duplicate keys do not fail: the later value wins and the key keeps the
//! position of its first occurrence.

use super::lexer::{Lexer, Token};
use super::limits::Limits;
use super::types::{JsonValue, Map};
use crate::error::{JsonError, JsonResult, Position};

/// Tolerant JSON parser.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
    at: Position,
    limits: Limits,
    depth: usize,
}

impl<'a> Parser<'a> {
    /// Create a new parser for the given input.
    pub fn new(input: &'a str, limits: Limits) -> JsonResult<Self> {
        let mut lexer = Lexer::new(input, limits)?;
        let (current, at) = lexer.next_token()?;
        Ok(Self {
            lexer,
            current,
            at,
            limits,
            depth: 0,
        })
    }

    /// Parse the input and return a JsonValue.
    pub fn parse(&mut self) -> JsonResult<JsonValue> {
        let value = self.parse_value()?;

        if self.current != Token::Eof {
            return Err(JsonError::TrailingContent { at: self.at });
        }

        Ok(value)
    }

    fn advance(&mut self) -> JsonResult<()> {
        let (token, at) = self.lexer.next_token()?;
        self.current = token;
        self.at = at;
        Ok(())
    }

    fn unexpected(&self, expected: &'static str) -> JsonError {
        match self.current {
            Token::Eof => JsonError::UnexpectedEnd {
                expected,
                at: self.at,
            },
            _ => JsonError::UnexpectedToken {
                found: self.current.describe(),
                expected,
                at: self.at,
            },
        }
    }

    fn parse_value(&mut self) -> JsonResult<JsonValue> {
        let value = match &mut self.current {
            Token::Null => JsonValue::Null,
            Token::True => JsonValue::Bool(true),
            Token::False => JsonValue::Bool(false),
            Token::Number(n) => JsonValue::Number(*n),
            Token::String(s) => JsonValue::String(std::mem::take(s)),
            Token::LeftBrace => return self.parse_object(),
            Token::LeftBracket => return self.parse_array(),
            _ => return Err(self.unexpected("a value")),
        };
        self.advance()?;
        Ok(value)
    }

    fn enter(&mut self) -> JsonResult<()> {
        self.depth += 1;
        if self.depth > self.limits.max_nesting_depth {
            return Err(JsonError::NestingTooDeep {
                depth: self.depth,
                limit: self.limits.max_nesting_depth,
                at: self.at,
            });
        }
        self.advance()
    }

    fn parse_object(&mut self) -> JsonResult<JsonValue> {
        self.enter()?;

        let mut map = Map::new();

        loop {
            let key = match &mut self.current {
                Token::RightBrace => break,
                Token::String(s) => std::mem::take(s),
                _ => return Err(self.unexpected("a string key or '}'")),
            };
            self.advance()?;

            if self.current != Token::Colon {
                return Err(self.unexpected("':'"));
            }
            self.advance()?;

            let value = self.parse_value()?;
            map.insert(key, value);

            match self.current {
                // A comma may be followed directly by '}', handled at the top of the loop.
                Token::Comma => self.advance()?,
                Token::RightBrace => break,
                _ => return Err(self.unexpected("',' or '}'")),
            }
        }

        self.advance()?;
        self.depth -= 1;
        Ok(JsonValue::Object(map))
    }

    fn parse_array(&mut self) -> JsonResult<JsonValue> {
        self.enter()?;

        let mut arr = Vec::new();

        loop {
            if self.current == Token::RightBracket {
                break;
            }

            arr.push(self.parse_value()?);

            match self.current {
                Token::Comma => self.advance()?,
                Token::RightBracket => break,
                _ => return Err(self.unexpected("',' or ']'")),
            }
        }

        self.advance()?;
        self.depth -= 1;
        Ok(JsonValue::Array(arr))
    }
}

/// Parse JSON text with the default limits.
pub fn parse(input: &str) -> JsonResult<JsonValue> {
    parse_with_limits(input, Limits::default())
}

/// Parse JSON text with custom limits.
pub fn parse_with_limits(input: &str, limits: Limits) -> JsonResult<JsonValue> {
    let mut parser = Parser::new(input, limits)?;
    parser.parse()
}
