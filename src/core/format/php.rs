//! PHP array literal dictionaries.
//!
//! Rendering produces one entry per line with 4-space indentation:
//!
//! ```php
//! <?php
//!
//! return [
//!     'auth' => [
//!         'failed' => 'auth.failed',
//!     ],
//! ];
//! ```
//!
//! Parsing accepts the subset of PHP that dictionary files are written in:
//! a `return` of nested `[...]` or `array(...)` literals with quoted or
//! numeric keys and scalar values.

use crate::core::{
    error::DecodeError,
    tree::{Children, DictionaryNode, DictionaryTree},
};

const INDENT: &str = "    ";

/// Content written before the real dictionary so the file is always valid PHP.
pub const EMPTY_DOCUMENT: &str = "<?php\n\nreturn [];\n";

pub fn render(tree: &DictionaryTree) -> String {
    let mut out = String::from("<?php\n\nreturn [");
    write_entries(&mut out, tree.children(), 1);
    out.push_str("\n];\n");
    out
}

fn write_entries(out: &mut String, children: &Children, depth: usize) {
    let indent = INDENT.repeat(depth);
    for (key, node) in children {
        match node {
            DictionaryNode::Leaf(value) => {
                out.push_str(&format!("\n{}'{}' => '{}',", indent, quote(key), quote(value)));
            }
            DictionaryNode::SubTree(nested) => {
                out.push_str(&format!("\n{}'{}' => [", indent, quote(key)));
                write_entries(out, nested, depth + 1);
                out.push_str(&format!("\n{}],", indent));
            }
        }
    }
}

/// Escape for a single-quoted PHP string.
fn quote(value: &str) -> String {
    value.replace('\\', "\\\\").replace('\'', "\\'")
}

// ============================================================
// Parsing
// ============================================================

#[derive(Debug, Clone, PartialEq)]
enum Token {
    OpenBracket,
    CloseBracket,
    OpenParen,
    CloseParen,
    Arrow,
    Comma,
    Semicolon,
    Str(String),
    Word(String),
    /// Operators and punctuation that never appear inside a dictionary.
    Other(char),
}

struct Lexer<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
    line: usize,
}

impl<'a> Lexer<'a> {
    fn new(content: &'a str) -> Self {
        Self {
            chars: content.chars().peekable(),
            line: 1,
        }
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        if c == '\n' {
            self.line += 1;
        }
        Some(c)
    }

    fn tokenize(mut self) -> Result<Vec<(Token, usize)>, DecodeError> {
        let mut tokens = Vec::new();
        while let Some(&c) = self.chars.peek() {
            let line = self.line;
            match c {
                c if c.is_whitespace() => {
                    self.bump();
                }
                '<' if self.at("<?php") => self.skip_open_tag(),
                '?' if self.at("?>") => self.skip_close_tag(),
                '#' => self.skip_line(),
                '/' => self.skip_comment()?,
                '[' | ']' | '(' | ')' | ',' | ';' => {
                    self.bump();
                    let token = match c {
                        '[' => Token::OpenBracket,
                        ']' => Token::CloseBracket,
                        '(' => Token::OpenParen,
                        ')' => Token::CloseParen,
                        ',' => Token::Comma,
                        _ => Token::Semicolon,
                    };
                    tokens.push((token, line));
                }
                '=' => {
                    self.bump();
                    if self.chars.peek() == Some(&'>') {
                        self.bump();
                        tokens.push((Token::Arrow, line));
                    } else {
                        tokens.push((Token::Other('='), line));
                    }
                }
                '\'' => {
                    self.bump();
                    let s = self.single_quoted(line)?;
                    tokens.push((Token::Str(s), line));
                }
                '"' => {
                    self.bump();
                    let s = self.double_quoted(line)?;
                    tokens.push((Token::Str(s), line));
                }
                c if is_word_char(c) => {
                    let mut word = String::new();
                    while let Some(&c) = self.chars.peek() {
                        if !is_word_char(c) {
                            break;
                        }
                        word.push(c);
                        self.bump();
                    }
                    tokens.push((Token::Word(word), line));
                }
                other => {
                    self.bump();
                    tokens.push((Token::Other(other), line));
                }
            }
        }
        Ok(tokens)
    }

    /// Whether the remaining input starts with `s`.
    fn at(&self, s: &str) -> bool {
        let mut rest = self.chars.clone();
        s.chars().all(|c| rest.next() == Some(c))
    }

    fn skip_open_tag(&mut self) {
        for _ in "<?php".chars() {
            self.bump();
        }
    }

    fn skip_close_tag(&mut self) {
        // `?>` ends the PHP block; nothing after it is part of the dictionary.
        while self.bump().is_some() {}
    }

    fn skip_line(&mut self) {
        while let Some(c) = self.bump() {
            if c == '\n' {
                break;
            }
        }
    }

    fn skip_comment(&mut self) -> Result<(), DecodeError> {
        let line = self.line;
        self.bump();
        match self.bump() {
            Some('/') => {
                self.skip_line();
                Ok(())
            }
            Some('*') => {
                let mut previous = '\0';
                while let Some(c) = self.bump() {
                    if previous == '*' && c == '/' {
                        return Ok(());
                    }
                    previous = c;
                }
                Err(DecodeError::new(line, "unterminated block comment"))
            }
            _ => Err(DecodeError::new(line, "unexpected character '/'")),
        }
    }

    fn single_quoted(&mut self, line: usize) -> Result<String, DecodeError> {
        let mut out = String::new();
        loop {
            match self.bump() {
                Some('\'') => return Ok(out),
                Some('\\') => match self.bump() {
                    Some(c @ ('\'' | '\\')) => out.push(c),
                    Some(c) => {
                        out.push('\\');
                        out.push(c);
                    }
                    None => break,
                },
                Some(c) => out.push(c),
                None => break,
            }
        }
        Err(DecodeError::new(line, "unterminated string"))
    }

    fn double_quoted(&mut self, line: usize) -> Result<String, DecodeError> {
        let mut out = String::new();
        loop {
            match self.bump() {
                Some('"') => return Ok(out),
                Some('\\') => match self.bump() {
                    Some('n') => out.push('\n'),
                    Some('t') => out.push('\t'),
                    Some('r') => out.push('\r'),
                    Some('0') => out.push('\0'),
                    Some(c @ ('"' | '\\' | '$')) => out.push(c),
                    Some(c) => {
                        out.push('\\');
                        out.push(c);
                    }
                    None => break,
                },
                Some(c) => out.push(c),
                None => break,
            }
        }
        Err(DecodeError::new(line, "unterminated string"))
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | '-' | '+' | '.' | '\\' | '$')
}

/// A parsed PHP value.
enum PhpValue {
    Scalar(String),
    Array(Children),
}

struct Parser {
    tokens: Vec<(Token, usize)>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos).map(|(token, _)| token)
    }

    fn line(&self) -> usize {
        self.tokens
            .get(self.pos)
            .or_else(|| self.tokens.last())
            .map(|(_, line)| *line)
            .unwrap_or(1)
    }

    fn next(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).map(|(token, _)| token.clone());
        self.pos += 1;
        token
    }

    fn expect(&mut self, expected: Token) -> Result<(), DecodeError> {
        let line = self.line();
        match self.next() {
            Some(token) if token == expected => Ok(()),
            Some(token) => Err(DecodeError::new(
                line,
                format!("expected {:?}, found {:?}", expected, token),
            )),
            None => Err(DecodeError::new(line, format!("expected {:?}, found end of file", expected))),
        }
    }

    /// Skip statements until the `return` keyword.
    fn seek_return(&mut self) -> bool {
        while let Some(token) = self.next() {
            if matches!(&token, Token::Word(word) if word.eq_ignore_ascii_case("return")) {
                return true;
            }
        }
        false
    }

    fn value(&mut self) -> Result<PhpValue, DecodeError> {
        let line = self.line();
        match self.next() {
            Some(Token::OpenBracket) => self.entries(Token::CloseBracket).map(PhpValue::Array),
            Some(Token::Word(word)) if word.eq_ignore_ascii_case("array") => {
                self.expect(Token::OpenParen)?;
                self.entries(Token::CloseParen).map(PhpValue::Array)
            }
            Some(Token::Word(word)) if word.eq_ignore_ascii_case("null") => {
                Ok(PhpValue::Scalar(String::new()))
            }
            Some(Token::Word(word)) | Some(Token::Str(word)) => Ok(PhpValue::Scalar(word)),
            Some(token) => Err(DecodeError::new(line, format!("unexpected {:?}", token))),
            None => Err(DecodeError::new(line, "unexpected end of file")),
        }
    }

    fn entries(&mut self, close: Token) -> Result<Children, DecodeError> {
        let mut children = Children::new();
        let mut next_index: i64 = 0;

        loop {
            if self.peek() == Some(&close) {
                self.pos += 1;
                return Ok(children);
            }

            let line = self.line();
            let first = self.value()?;
            let (key, value) = if self.peek() == Some(&Token::Arrow) {
                self.pos += 1;
                let PhpValue::Scalar(key) = first else {
                    return Err(DecodeError::new(line, "array used as array key"));
                };
                if let Ok(index) = key.parse::<i64>() {
                    next_index = next_index.max(index.saturating_add(1));
                }
                (key, self.value()?)
            } else {
                let key = next_index.to_string();
                if children.contains_key(&key) {
                    return Err(DecodeError::new(
                        line,
                        "cannot append element, the next array index is already in use",
                    ));
                }
                next_index = next_index.saturating_add(1);
                (key, first)
            };

            let node = match value {
                PhpValue::Scalar(s) => DictionaryNode::Leaf(s),
                PhpValue::Array(nested) => DictionaryNode::SubTree(nested),
            };
            children.insert(key, node);

            match self.peek() {
                Some(Token::Comma) => self.pos += 1,
                Some(token) if *token == close => {}
                _ => {
                    return Err(DecodeError::new(
                        self.line(),
                        "expected ',' or end of array",
                    ));
                }
            }
        }
    }
}

/// Parse an existing PHP dictionary file.
///
/// A file without a `return`, or returning something other than an array,
/// yields an empty dictionary.
pub fn parse(content: &str) -> Result<DictionaryTree, DecodeError> {
    let tokens = Lexer::new(content).tokenize()?;
    let mut parser = Parser { tokens, pos: 0 };

    if !parser.seek_return() {
        return Ok(DictionaryTree::new());
    }

    match parser.value()? {
        PhpValue::Array(children) => Ok(DictionaryTree::from_children(children)),
        PhpValue::Scalar(_) => Ok(DictionaryTree::new()),
    }
}
