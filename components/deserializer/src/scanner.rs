//! Cursor over the input text.
//!
//! The scanner is the only component that moves through the input and the
//! only source of positions for error messages.

use core_types::{ParseResult, SourcePosition, SyntaxError, SyntaxErrorKind};

/// Character cursor with line/column tracking.
pub struct Scanner {
    chars: Vec<char>,
    position: usize,
    line: u32,
    column: u32,
}

impl Scanner {
    /// Create a scanner positioned at the start of `source`
    pub fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Whether every character has been consumed
    pub fn is_at_end(&self) -> bool {
        self.position >= self.chars.len()
    }

    /// The character under the cursor, `None` at end of input
    pub fn peek(&self) -> Option<char> {
        self.chars.get(self.position).copied()
    }

    /// Consume and return the character under the cursor
    pub fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += 1;
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    /// Consume `expected` if it is the next character
    pub fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume the next character if it satisfies `pred`
    pub fn eat_if(&mut self, pred: impl Fn(char) -> bool) -> Option<char> {
        match self.peek() {
            Some(ch) if pred(ch) => self.advance(),
            _ => None,
        }
    }

    /// Skip space, tab, CR and LF
    pub fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(' ' | '\t' | '\r' | '\n')) {
            self.advance();
        }
    }

    /// Consume an exact literal.
    ///
    /// The whole literal is checked before the cursor moves, so a mismatch
    /// leaves the cursor where it was. The error points at the first
    /// character that differs.
    pub fn expect(&mut self, literal: &str) -> ParseResult<()> {
        let start = self.current_position();
        for (i, want) in literal.chars().enumerate() {
            let found = self.chars.get(self.position + i).copied();
            if found != Some(want) {
                let kind = if found.is_some() {
                    SyntaxErrorKind::UnexpectedToken
                } else {
                    SyntaxErrorKind::UnexpectedEnd
                };
                let at = SourcePosition::new(start.line, start.column + i as u32, start.offset + i);
                return Err(SyntaxError::new(kind, found, at));
            }
        }
        for _ in literal.chars() {
            self.advance();
        }
        Ok(())
    }

    /// Current cursor position
    pub fn current_position(&self) -> SourcePosition {
        SourcePosition {
            line: self.line,
            column: self.column,
            offset: self.position,
        }
    }

    /// Build an error of `kind` at the cursor, reporting the character there.
    ///
    /// `UnexpectedToken` becomes `UnexpectedEnd` when there is no character.
    pub fn error(&self, kind: SyntaxErrorKind) -> SyntaxError {
        let found = self.peek();
        let kind = match (kind, found) {
            (SyntaxErrorKind::UnexpectedToken, None) => SyntaxErrorKind::UnexpectedEnd,
            (kind, _) => kind,
        };
        SyntaxError::new(kind, found, self.current_position())
    }

    /// Build an error of `kind` at an earlier position
    pub fn error_at(&self, kind: SyntaxErrorKind, position: SourcePosition) -> SyntaxError {
        let found = self.chars.get(position.offset).copied();
        SyntaxError::new(kind, found, position)
    }
}
