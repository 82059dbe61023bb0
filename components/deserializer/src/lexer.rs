//! Token-level productions: numbers, strings, regular expressions,
//! identifiers and reference indices.

use num_bigint::BigInt;

use core_types::{ParseResult, ParsedValue, RegExpFlags, RegExpValue, SyntaxErrorKind};

use crate::scanner::Scanner;

/// Whether `ch` can start a bareword
pub fn is_ident_start(ch: char) -> bool {
    ch.is_alphabetic() || ch == '_'
}

fn is_ident_continue(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_' || ch == '$'
}

impl Scanner {
    fn scan_digits(&mut self) -> String {
        let mut digits = String::new();
        while let Some(ch) = self.eat_if(|c| c.is_ascii_digit()) {
            digits.push(ch);
        }
        digits
    }

    /// Scan a number: `-`? (`Infinity` | digits (`n` | frac? exp?))
    pub fn scan_number(&mut self) -> ParseResult<ParsedValue> {
        let negative = self.eat('-');

        if self.peek() == Some('I') {
            self.expect("Infinity")?;
            let inf = if negative {
                f64::NEG_INFINITY
            } else {
                f64::INFINITY
            };
            return Ok(ParsedValue::Number(inf));
        }

        let digits = self.scan_digits();
        if digits.is_empty() {
            return Err(self.error(SyntaxErrorKind::MalformedNumber));
        }

        // BigInt suffix ends the number
        if self.eat('n') {
            let magnitude = BigInt::parse_bytes(digits.as_bytes(), 10)
                .ok_or_else(|| self.error(SyntaxErrorKind::MalformedNumber))?;
            return Ok(ParsedValue::BigInt(if negative { -magnitude } else { magnitude }));
        }

        let mut num_str = String::with_capacity(digits.len() + 8);
        if negative {
            num_str.push('-');
        }
        num_str.push_str(&digits);

        if self.eat('.') {
            let fraction = self.scan_digits();
            if fraction.is_empty() {
                return Err(self.error(SyntaxErrorKind::MalformedNumber));
            }
            num_str.push('.');
            num_str.push_str(&fraction);
        }

        if let Some(marker) = self.eat_if(|c| c == 'e' || c == 'E') {
            num_str.push(marker);
            if let Some(sign) = self.eat_if(|c| c == '+' || c == '-') {
                num_str.push(sign);
            }
            let exponent = self.scan_digits();
            if exponent.is_empty() {
                return Err(self.error(SyntaxErrorKind::MalformedNumber));
            }
            num_str.push_str(&exponent);
        }

        num_str
            .parse::<f64>()
            .map(ParsedValue::Number)
            .map_err(|_| self.error(SyntaxErrorKind::MalformedNumber))
    }

    /// Scan a double-quoted string literal
    pub fn scan_string(&mut self) -> ParseResult<String> {
        self.expect("\"")?;
        let mut value = String::new();

        loop {
            match self.peek() {
                None => return Err(self.error(SyntaxErrorKind::UnterminatedString)),
                Some('"') => {
                    self.advance();
                    return Ok(value);
                }
                Some('\\') => {
                    self.advance();
                    self.scan_escape(&mut value)?;
                }
                Some(_) => {
                    if let Some(ch) = self.advance() {
                        value.push(ch);
                    }
                }
            }
        }
    }

    fn scan_escape(&mut self, value: &mut String) -> ParseResult<()> {
        let escaped = match self.peek() {
            None => return Err(self.error(SyntaxErrorKind::UnterminatedString)),
            Some('"') => '"',
            Some('\\') => '\\',
            Some('b') => '\u{8}',
            Some('f') => '\u{c}',
            Some('n') => '\n',
            Some('r') => '\r',
            Some('t') => '\t',
            Some('u') => {
                self.advance();
                let unit = self.scan_hex4()?;
                return self.push_code_unit(unit, value);
            }
            Some(_) => return Err(self.error(SyntaxErrorKind::InvalidEscape)),
        };
        self.advance();
        value.push(escaped);
        Ok(())
    }

    fn scan_hex4(&mut self) -> ParseResult<u32> {
        let mut code = 0u32;
        for _ in 0..4 {
            let digit = match self.peek() {
                None => return Err(self.error(SyntaxErrorKind::UnterminatedString)),
                Some(ch) => ch
                    .to_digit(16)
                    .ok_or_else(|| self.error(SyntaxErrorKind::InvalidHexDigit))?,
            };
            self.advance();
            code = code * 16 + digit;
        }
        Ok(code)
    }

    /// Push the character for a `\u` escape, joining a UTF-16 surrogate
    /// pair written as two escapes. Unpaired surrogates become U+FFFD.
    fn push_code_unit(&mut self, unit: u32, value: &mut String) -> ParseResult<()> {
        if !(0xD800..0xDC00).contains(&unit) {
            value.push(char::from_u32(unit).unwrap_or(char::REPLACEMENT_CHARACTER));
            return Ok(());
        }
        if self.peek() != Some('\\') || self.expect("\\u").is_err() {
            value.push(char::REPLACEMENT_CHARACTER);
            return Ok(());
        }
        let next = self.scan_hex4()?;
        if (0xDC00..0xE000).contains(&next) {
            let code = 0x10000 + ((unit - 0xD800) << 10) + (next - 0xDC00);
            value.push(char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER));
            Ok(())
        } else {
            value.push(char::REPLACEMENT_CHARACTER);
            self.push_code_unit(next, value)
        }
    }

    /// Scan `/pattern/flags`
    pub fn scan_regexp(&mut self) -> ParseResult<ParsedValue> {
        self.expect("/")?;
        if self.peek() == Some('/') {
            return Err(self.error(SyntaxErrorKind::EmptyRegex));
        }

        let mut pattern = String::new();
        let mut in_class = false; // Inside character class [...]
        loop {
            match self.advance() {
                None => return Err(self.error(SyntaxErrorKind::UnterminatedRegex)),
                Some('\\') => {
                    // Escapes are copied through untouched
                    pattern.push('\\');
                    match self.advance() {
                        Some(escaped) => pattern.push(escaped),
                        None => return Err(self.error(SyntaxErrorKind::UnterminatedRegex)),
                    }
                }
                Some('/') if !in_class => break,
                Some(ch) => {
                    match ch {
                        '[' => in_class = true,
                        ']' => in_class = false,
                        _ => {}
                    }
                    pattern.push(ch);
                }
            }
        }

        let mut flags = RegExpFlags::default();
        while let Some(flag) = self.eat_if(|c| matches!(c, 'g' | 'i' | 'm')) {
            flags.insert(flag);
        }

        Ok(ParsedValue::Regex(RegExpValue::new(pattern, flags)))
    }

    /// Scan an identifier; the cursor must be on an identifier start
    pub fn scan_identifier(&mut self) -> String {
        let mut ident = String::new();
        if let Some(first) = self.eat_if(is_ident_start) {
            ident.push(first);
            while let Some(ch) = self.eat_if(is_ident_continue) {
                ident.push(ch);
            }
        }
        ident
    }

    /// Scan `$digits` and return the index.
    ///
    /// A bare `$` is rejected. An index too large for `usize` saturates, which
    /// is out of range for any document.
    pub fn scan_reference(&mut self) -> ParseResult<usize> {
        self.expect("$")?;
        let digits = self.scan_digits();
        if digits.is_empty() {
            return Err(self.error(SyntaxErrorKind::MissingReferenceIndex));
        }
        Ok(digits.parse().unwrap_or(usize::MAX))
    }
}
