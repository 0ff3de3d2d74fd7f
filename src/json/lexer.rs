//! JSON lexer/tokenizer.
//!
//! Converts source text into a stream of tokens for the parser. Besides
//! standard JSON it skips `//` line comments and `/* */` block comments, the
//! conveniences people put in hand-maintained config files.

use super::limits::Limits;
use crate::error::{JsonError, JsonResult, Position};

/// Token types produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Left brace `{`
    LeftBrace,
    /// Right brace `}`
    RightBrace,
    /// Left bracket `[`
    LeftBracket,
    /// Right bracket `]`
    RightBracket,
    /// Colon `:`
    Colon,
    /// Comma `,`
    Comma,
    /// Null literal
    Null,
    /// True literal
    True,
    /// False literal
    False,
    /// String value (unescaped)
    String(String),
    /// Number value
    Number(f64),
    /// End of input
    Eof,
}

impl Token {
    /// Short description for error messages.
    pub fn describe(&self) -> String {
        match self {
            Token::LeftBrace => "'{'".to_string(),
            Token::RightBrace => "'}'".to_string(),
            Token::LeftBracket => "'['".to_string(),
            Token::RightBracket => "']'".to_string(),
            Token::Colon => "':'".to_string(),
            Token::Comma => "','".to_string(),
            Token::Null => "null".to_string(),
            Token::True => "true".to_string(),
            Token::False => "false".to_string(),
            Token::String(s) => format!("string \"{}\"", s),
            Token::Number(n) => format!("number {}", n),
            Token::Eof => "end of input".to_string(),
        }
    }
}

/// JSON lexer that tokenizes input.
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
    line: usize,
    column: usize,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input.
    pub fn new(input: &'a str, limits: Limits) -> JsonResult<Self> {
        if input.len() as u64 > limits.max_input_size {
            return Err(JsonError::InputTooLarge {
                size: input.len() as u64,
                limit: limits.max_input_size,
            });
        }

        let input = input.strip_prefix('\u{FEFF}').unwrap_or(input);

        Ok(Self {
            input,
            pos: 0,
            line: 1,
            column: 1,
        })
    }

    /// Get the current position in the input.
    pub fn position(&self) -> Position {
        Position {
            line: self.line,
            column: self.column,
        }
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn peek_second(&self) -> Option<char> {
        let mut chars = self.input[self.pos..].chars();
        chars.next();
        chars.next()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    /// Skip whitespace and comments.
    fn skip_trivia(&mut self) -> JsonResult<()> {
        loop {
            match (self.peek(), self.peek_second()) {
                (Some(' ' | '\t' | '\n' | '\r'), _) => {
                    self.advance();
                }
                (Some('/'), Some('/')) => {
                    while let Some(c) = self.advance() {
                        if c == '\n' {
                            break;
                        }
                    }
                }
                (Some('/'), Some('*')) => {
                    let start = self.position();
                    self.advance();
                    self.advance();
                    loop {
                        match self.advance() {
                            None => return Err(JsonError::UnterminatedComment { at: start }),
                            Some('*') if self.peek() == Some('/') => {
                                self.advance();
                                break;
                            }
                            Some(_) => {}
                        }
                    }
                }
                _ => return Ok(()),
            }
        }
    }

    /// Read the next token, returning it with its starting position.
    pub fn next_token(&mut self) -> JsonResult<(Token, Position)> {
        self.skip_trivia()?;
        let start = self.position();

        let token = match self.peek() {
            None => Token::Eof,
            Some('{') => self.single(Token::LeftBrace),
            Some('}') => self.single(Token::RightBrace),
            Some('[') => self.single(Token::LeftBracket),
            Some(']') => self.single(Token::RightBracket),
            Some(':') => self.single(Token::Colon),
            Some(',') => self.single(Token::Comma),
            Some('"') => self.read_string()?,
            Some('-' | '0'..='9') => self.read_number()?,
            Some('t') => self.read_keyword("true", Token::True)?,
            Some('f') => self.read_keyword("false", Token::False)?,
            Some('n') => self.read_keyword("null", Token::Null)?,
            Some(found) => return Err(JsonError::UnexpectedCharacter { found, at: start }),
        };

        Ok((token, start))
    }

    fn single(&mut self, token: Token) -> Token {
        self.advance();
        token
    }

    /// Read a string token, handling escape sequences.
    fn read_string(&mut self) -> JsonResult<Token> {
        let start = self.position();
        self.advance();

        let mut result = String::new();
        loop {
            let at = self.position();
            match self.advance() {
                None => return Err(JsonError::UnterminatedString { at: start }),
                Some('"') => break,
                Some('\\') => result.push(self.read_escape_sequence(at)?),
                Some(c) if (c as u32) < 0x20 => {
                    return Err(JsonError::ControlCharacter {
                        codepoint: c as u32,
                        at,
                    });
                }
                Some(c) => result.push(c),
            }
        }

        Ok(Token::String(result))
    }

    /// Read an escape sequence after a backslash.
    fn read_escape_sequence(&mut self, at: Position) -> JsonResult<char> {
        match self.advance() {
            Some('"') => Ok('"'),
            Some('\\') => Ok('\\'),
            Some('/') => Ok('/'),
            Some('b') => Ok('\x08'),
            Some('f') => Ok('\x0C'),
            Some('n') => Ok('\n'),
            Some('r') => Ok('\r'),
            Some('t') => Ok('\t'),
            Some('u') => self.read_unicode_escape(at),
            _ => Err(JsonError::InvalidEscape { at }),
        }
    }

    /// Read a \uXXXX escape, combining surrogate pairs.
    fn read_unicode_escape(&mut self, at: Position) -> JsonResult<char> {
        let high = self.read_hex4(at)?;

        if (0xD800..=0xDBFF).contains(&high) {
            if self.advance() != Some('\\') || self.advance() != Some('u') {
                return Err(JsonError::InvalidEscape { at });
            }
            let low = self.read_hex4(at)?;
            if !(0xDC00..=0xDFFF).contains(&low) {
                return Err(JsonError::InvalidEscape { at });
            }
            let combined = 0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00);
            return char::from_u32(combined).ok_or(JsonError::InvalidEscape { at });
        }

        char::from_u32(high).ok_or(JsonError::InvalidEscape { at })
    }

    fn read_hex4(&mut self, at: Position) -> JsonResult<u32> {
        let mut value = 0;
        for _ in 0..4 {
            let digit = self
                .advance()
                .and_then(|c| c.to_digit(16))
                .ok_or(JsonError::InvalidEscape { at })?;
            value = (value << 4) | digit;
        }
        Ok(value)
    }

    /// Read a number token following the JSON number grammar.
    fn read_number(&mut self) -> JsonResult<Token> {
        let at = self.position();
        let start = self.pos;

        if self.peek() == Some('-') {
            self.advance();
        }

        let valid = match self.peek() {
            Some('0') => {
                self.advance();
                !matches!(self.peek(), Some('0'..='9'))
            }
            Some('1'..='9') => {
                self.skip_digits();
                true
            }
            _ => false,
        };

        let valid = valid && self.read_fraction() && self.read_exponent();

        // Swallow the rest of an alphanumeric run so the error shows the whole literal.
        if !valid {
            while matches!(self.peek(), Some(c) if c.is_ascii_alphanumeric() || c == '.') {
                self.advance();
            }
        }

        // A well-formed literal beyond f64 range parses to an infinity; the
        // encoder rejects it later.
        let literal = &self.input[start..self.pos];
        match literal.parse::<f64>() {
            Ok(n) if valid => Ok(Token::Number(n)),
            _ => Err(JsonError::InvalidNumber {
                literal: literal.to_string(),
                at,
            }),
        }
    }

    fn skip_digits(&mut self) -> usize {
        let mut count = 0;
        while matches!(self.peek(), Some('0'..='9')) {
            self.advance();
            count += 1;
        }
        count
    }

    fn read_fraction(&mut self) -> bool {
        if self.peek() != Some('.') {
            return true;
        }
        self.advance();
        self.skip_digits() > 0
    }

    fn read_exponent(&mut self) -> bool {
        if !matches!(self.peek(), Some('e' | 'E')) {
            return true;
        }
        self.advance();
        if matches!(self.peek(), Some('+' | '-')) {
            self.advance();
        }
        self.skip_digits() > 0
    }

    fn read_keyword(&mut self, keyword: &'static str, token: Token) -> JsonResult<Token> {
        let at = self.position();
        for expected in keyword.chars() {
            match self.peek() {
                Some(c) if c == expected => {
                    self.advance();
                }
                Some(found) => {
                    return Err(JsonError::UnexpectedCharacter {
                        found,
                        at: self.position(),
                    })
                }
                None => {
                    return Err(JsonError::UnexpectedEnd {
                        expected: keyword,
                        at,
                    })
                }
            }
        }
        Ok(token)
    }
}
