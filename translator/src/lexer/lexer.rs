use std::{mem, ops::Range, str::Chars};

use tracing::trace;

use crate::{
    lexer::{
        literal::{is_frame, is_name, is_type_keyword, is_valid_symbol},
        token::{Token, TokenKind},
    },
    parser::{ErrorKind, ParseError},
};

pub const HEADER: &str = ".IPPcode24";

fn is_literal_end(c: char) -> bool {
    c.is_whitespace() || c == '#'
}

/// Pull-based tokenizer. Once it returns `Eof` it keeps returning `Eof`.
pub struct Lexer<'a> {
    chars: Chars<'a>,
    pos: usize,
    curr: Option<char>,
    literal: String,
    comments: usize,
    header_seen: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        let mut chars = source.chars();
        let curr = chars.next();

        Self {
            chars,
            pos: 0,
            curr,
            literal: String::new(),
            comments: 0,
            header_seen: false,
        }
    }

    /// Number of comments skipped so far.
    pub fn comments(&self) -> usize {
        self.comments
    }

    pub fn next_token(&mut self) -> Result<Token, ParseError> {
        let token = self.lex_next_token()?;
        trace!(kind = %token.kind, text = %token.text, "token");
        Ok(token)
    }

    fn advance(&mut self) {
        if self.curr.is_some() {
            self.pos += 1;
        }
        self.curr = self.chars.next();
    }

    fn lex_next_token(&mut self) -> Result<Token, ParseError> {
        loop {
            match self.curr {
                None => return Ok(Token::eof(self.pos)),
                Some('\n') => {
                    let pos = self.pos;
                    self.advance();
                    return Ok(Token::eol(pos));
                }
                Some('#') => self.skip_comment(),
                Some(c) if c.is_whitespace() => self.advance(),
                Some(_) => return self.lex_literal(),
            }
        }
    }

    fn skip_comment(&mut self) {
        self.comments += 1;
        while self.curr.is_some_and(|c| c != '\n') {
            self.advance();
        }
    }

    fn lex_literal(&mut self) -> Result<Token, ParseError> {
        let start = self.pos;
        self.literal.clear();

        while let Some(c) = self.curr.filter(|&c| !is_literal_end(c)) {
            if c == '@' {
                return if is_frame(&self.literal) {
                    self.lex_var(start)
                } else {
                    self.lex_symbol(start)
                };
            }
            self.literal.push(c);
            self.advance();
        }

        let text = mem::take(&mut self.literal);
        let span = start..self.pos;

        if text.eq_ignore_ascii_case(HEADER) {
            self.header_seen = true;
            Ok(Token::new(TokenKind::Header, text, span))
        } else if is_type_keyword(&text) {
            Ok(Token::new(TokenKind::Type, text, span))
        } else if is_name(&text) {
            Ok(Token::new(TokenKind::Label, text, span))
        } else {
            Err(self.error(format!("unexpected: {text}"), span))
        }
    }

    /// `FRAME@name`, the frame prefix already sits in the literal buffer.
    fn lex_var(&mut self, start: usize) -> Result<Token, ParseError> {
        let frame = mem::take(&mut self.literal);
        self.advance(); // Skip @
        let name = self.collect_rest();

        if !is_name(&name) {
            return Err(self.error(
                format!("invalid variable name: {name}"),
                start..self.pos,
            ));
        }

        Ok(Token::new(
            TokenKind::Var,
            format!("{frame}@{name}"),
            start..self.pos,
        ))
    }

    /// `tag@value`, the type tag already sits in the literal buffer.
    fn lex_symbol(&mut self, start: usize) -> Result<Token, ParseError> {
        let tag = mem::take(&mut self.literal);
        let tag_span = start..self.pos;
        self.advance(); // Skip @
        let value = self.collect_rest();

        let Some(kind) = TokenKind::from_type_tag(&tag) else {
            return Err(self.error(format!("invalid data type: {tag}"), tag_span));
        };

        if !is_valid_symbol(kind, &value) {
            return Err(self.error(
                format!("invalid {tag} value: {value}"),
                start..self.pos,
            ));
        }

        Ok(Token::new(kind, value, start..self.pos))
    }

    fn collect_rest(&mut self) -> String {
        while let Some(c) = self.curr.filter(|&c| !is_literal_end(c)) {
            self.literal.push(c);
            self.advance();
        }
        mem::take(&mut self.literal)
    }

    /// Anything malformed before the header means the header itself is missing.
    fn error(&self, message: String, span: Range<usize>) -> ParseError {
        let kind = if self.header_seen {
            ErrorKind::Syntax
        } else {
            ErrorKind::Header
        };
        ParseError::new(kind, message, span)
    }
}
