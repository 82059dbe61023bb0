//! Recursive descent parser producing one [`ParsedValue`] per statement.

use tracing::debug;

use core_types::{ParseResult, ParsedValue, Properties, SyntaxErrorKind};

use crate::classes::ClassRegistry;
use crate::lexer::is_ident_start;
use crate::scanner::Scanner;

/// Deepest array/object nesting accepted
pub const MAX_NESTING_DEPTH: usize = 128;

/// Parser for extended JSON documents
pub struct Parser<'a> {
    scanner: Scanner,
    classes: &'a ClassRegistry,
    depth: usize,
}

impl<'a> Parser<'a> {
    /// Create a parser over `source`; `classes` decides which tags are kept
    pub fn new(source: &str, classes: &'a ClassRegistry) -> Self {
        Self {
            scanner: Scanner::new(source),
            classes,
            depth: 0,
        }
    }

    /// Parse `statement (";" statement)*` and require the input to end.
    ///
    /// The returned table holds the statements in source order; `$n`
    /// placeholders inside them are not resolved yet.
    pub fn parse_document(&mut self) -> ParseResult<Vec<ParsedValue>> {
        let mut table = vec![self.parse_value()?];
        self.scanner.skip_whitespace();
        while self.scanner.eat(';') {
            table.push(self.parse_value()?);
            self.scanner.skip_whitespace();
        }
        if !self.scanner.is_at_end() {
            return Err(self.scanner.error(SyntaxErrorKind::TrailingInput));
        }
        debug!(statements = table.len(), "parsed document");
        Ok(table)
    }

    /// Parse a single value, dispatching on its first character
    pub fn parse_value(&mut self) -> ParseResult<ParsedValue> {
        self.scanner.skip_whitespace();
        match self.scanner.peek() {
            Some('$') => Ok(ParsedValue::Reference(self.scanner.scan_reference()?)),
            Some('{') => Ok(ParsedValue::Object(self.nested(Self::parse_object)?)),
            Some('[') => self.nested(Self::parse_array),
            Some('/') => self.scanner.scan_regexp(),
            Some('"') => Ok(ParsedValue::String(self.scanner.scan_string()?)),
            Some('-' | '0'..='9') => self.scanner.scan_number(),
            Some(ch) if is_ident_start(ch) => self.parse_bareword(),
            _ => Err(self.scanner.error(SyntaxErrorKind::UnexpectedToken)),
        }
    }

    /// Run `parse` one nesting level deeper; the cursor is on the opening bracket
    fn nested<T>(&mut self, parse: fn(&mut Self) -> ParseResult<T>) -> ParseResult<T> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(self.scanner.error(SyntaxErrorKind::NestingTooDeep));
        }
        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }

    fn parse_object(&mut self) -> ParseResult<Properties<ParsedValue>> {
        self.scanner.expect("{")?;
        let mut fields = Properties::new();

        self.scanner.skip_whitespace();
        if self.scanner.eat('}') {
            return Ok(fields);
        }

        loop {
            self.scanner.skip_whitespace();
            if self.scanner.peek() != Some('"') {
                return Err(self.scanner.error(SyntaxErrorKind::UnexpectedToken));
            }
            let key = self.scanner.scan_string()?;
            self.scanner.skip_whitespace();
            self.scanner.expect(":")?;
            let value = self.parse_value()?;
            // Duplicate keys: last write wins
            fields.insert(key, value);

            self.scanner.skip_whitespace();
            if self.scanner.eat(',') {
                continue;
            }
            if self.scanner.eat('}') {
                return Ok(fields);
            }
            return Err(self.scanner.error(SyntaxErrorKind::UnexpectedToken));
        }
    }

    fn parse_array(&mut self) -> ParseResult<ParsedValue> {
        self.scanner.expect("[")?;
        let mut elements = Vec::new();

        self.scanner.skip_whitespace();
        if self.scanner.eat(']') {
            return Ok(ParsedValue::Array(elements));
        }

        loop {
            elements.push(self.parse_value()?);
            self.scanner.skip_whitespace();
            if self.scanner.eat(',') {
                continue;
            }
            if self.scanner.eat(']') {
                return Ok(ParsedValue::Array(elements));
            }
            return Err(self.scanner.error(SyntaxErrorKind::UnexpectedToken));
        }
    }

    /// Keyword literal, or class tag when an object literal follows
    fn parse_bareword(&mut self) -> ParseResult<ParsedValue> {
        let start = self.scanner.current_position();
        let word = self.scanner.scan_identifier();
        match word.as_str() {
            "NaN" => return Ok(ParsedValue::Number(f64::NAN)),
            "Infinity" => return Ok(ParsedValue::Number(f64::INFINITY)),
            "undefined" => return Ok(ParsedValue::Undefined),
            "null" => return Ok(ParsedValue::Null),
            "true" => return Ok(ParsedValue::Bool(true)),
            "false" => return Ok(ParsedValue::Bool(false)),
            _ => {}
        }

        self.scanner.skip_whitespace();
        if self.scanner.peek() != Some('{') {
            return Err(self
                .scanner
                .error_at(SyntaxErrorKind::UnknownIdentifier(word), start));
        }
        let fields = self.nested(Self::parse_object)?;
        Ok(self.classes.tag_object(word, fields, start))
    }
}
