// SDLite - Simple Declarative Language for Rust
//
// Copyright (c) 2025 SDLite contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The SDLang lexer.
//!
//! A forward, stateful iterator over a UTF-8 input that classifies and
//! delimits tokens without decoding their values. The lexer never fails:
//! malformed constructs become [`TokenKind::Invalid`] tokens covering the
//! failed extent, and the parser decides whether to raise.
//!
//! Numbers, durations, dates, and date-times share a numeric prefix and are
//! disambiguated by trying sub-grammars; the only multi-character backtracks
//! (date vs. date-time, and time with vs. without seconds) restore a saved
//! cursor snapshot in O(1).

use crate::lex::token::{Location, Token, TokenKind};

/// Creates a token stream over `input`, attributing positions to `filename`.
///
/// Every input yields at least one token; [`TokenKind::Eof`] is yielded
/// exactly once, after which the iterator terminates.
///
/// # Examples
///
/// ```
/// use sdlite_core::{lex, TokenKind};
///
/// let kinds: Vec<_> = lex("port 8080", "conf.sdl").map(|t| t.kind).collect();
/// assert_eq!(
///     kinds,
///     [TokenKind::Identifier, TokenKind::Number, TokenKind::Eof]
/// );
/// ```
pub fn lex<'a>(input: &'a str, filename: &'a str) -> Lexer<'a> {
    Lexer {
        input,
        filename,
        pos: 0,
        line: 0,
        column: 0,
        finished: false,
    }
}

/// A forward iterator producing [`Token`]s. Created by [`lex`].
#[derive(Debug)]
pub struct Lexer<'a> {
    input: &'a str,
    filename: &'a str,
    pos: usize,
    line: u32,
    column: u32,
    finished: bool,
}

/// A saved cursor used for the date/date-time backtracks.
#[derive(Clone, Copy)]
struct Snapshot {
    pos: usize,
    line: u32,
    column: u32,
}

impl<'a> Lexer<'a> {
    /// The file name positions are attributed to.
    pub fn filename(&self) -> &'a str {
        self.filename
    }

    #[inline]
    fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    #[inline]
    fn peek_at(&self, n: usize) -> Option<u8> {
        self.input.as_bytes().get(self.pos + n).copied()
    }

    /// Advances one byte. Safe anywhere the byte is not a line break.
    #[inline]
    fn bump(&mut self) {
        self.pos += 1;
        self.column += 1;
    }

    /// Advances one whole code point.
    #[inline]
    fn bump_char(&mut self) {
        let len = self.current_char().len_utf8();
        self.pos += len;
        self.column += len as u32;
    }

    /// Consumes `\n`, `\r`, or `\r\n` as a single line break.
    fn bump_newline(&mut self) {
        if self.peek() == Some(b'\r') && self.peek_at(1) == Some(b'\n') {
            self.pos += 2;
        } else {
            self.pos += 1;
        }
        self.line += 1;
        self.column = 0;
    }

    /// The code point at the cursor. Callers must know input remains.
    #[inline]
    fn current_char(&self) -> char {
        self.input[self.pos..]
            .chars()
            .next()
            .unwrap_or('\u{FFFD}')
    }

    #[inline]
    fn snapshot(&self) -> Snapshot {
        Snapshot {
            pos: self.pos,
            line: self.line,
            column: self.column,
        }
    }

    #[inline]
    fn restore(&mut self, snap: Snapshot) {
        self.pos = snap.pos;
        self.line = snap.line;
        self.column = snap.column;
    }

    #[inline]
    fn location(&self) -> Location {
        Location {
            line: self.line,
            column: self.column,
            offset: self.pos as u64,
        }
    }

    fn scan_token(&mut self, c: u8) -> TokenKind {
        match c {
            b'\n' | b'\r' => {
                self.bump_newline();
                TokenKind::Eol
            }
            b'/' => match self.peek_at(1) {
                Some(b'/') => self.scan_line_comment(),
                Some(b'*') => self.scan_block_comment(),
                _ => {
                    self.bump();
                    TokenKind::Invalid
                }
            },
            b'-' => match self.peek_at(1) {
                Some(b'-') => self.scan_line_comment(),
                Some(d) if d.is_ascii_digit() => {
                    self.bump();
                    self.scan_numeric()
                }
                _ => {
                    self.bump();
                    TokenKind::Invalid
                }
            },
            b'#' => self.scan_line_comment(),
            b'"' => self.scan_quoted_string(),
            b'`' => self.scan_backtick_string(),
            b'[' => self.scan_base64(),
            b'{' => {
                self.bump();
                TokenKind::BlockOpen
            }
            b'}' => {
                self.bump();
                TokenKind::BlockClose
            }
            b';' => {
                self.bump();
                TokenKind::Semicolon
            }
            b'=' => {
                self.bump();
                TokenKind::Assign
            }
            b':' => {
                self.bump();
                TokenKind::Namespace
            }
            b'\\' => {
                self.bump();
                TokenKind::Backslash
            }
            b'0'..=b'9' => self.scan_numeric(),
            b'A'..=b'Z' | b'a'..=b'z' | b'_' => self.scan_identifier(),
            _ => {
                if self.current_char().is_alphabetic() {
                    self.scan_identifier()
                } else {
                    self.bump_char();
                    TokenKind::Invalid
                }
            }
        }
    }

    /// Consumes to just before the end of the line (the EOL stays unconsumed).
    fn scan_line_comment(&mut self) -> TokenKind {
        while let Some(c) = self.peek() {
            if c == b'\n' || c == b'\r' {
                break;
            }
            self.bump();
        }
        TokenKind::Comment
    }

    fn scan_block_comment(&mut self) -> TokenKind {
        self.bump();
        self.bump();
        while let Some(c) = self.peek() {
            match c {
                b'*' if self.peek_at(1) == Some(b'/') => {
                    self.bump();
                    self.bump();
                    return TokenKind::Comment;
                }
                b'\n' | b'\r' => self.bump_newline(),
                _ => self.bump(),
            }
        }
        TokenKind::Invalid
    }

    fn scan_quoted_string(&mut self) -> TokenKind {
        self.bump();
        loop {
            match self.peek() {
                None => return TokenKind::Invalid,
                Some(b'"') => {
                    self.bump();
                    return TokenKind::Text;
                }
                // A raw line break inside a quoted string is malformed; the
                // EOL itself stays outside the invalid token.
                Some(b'\n') | Some(b'\r') => return TokenKind::Invalid,
                Some(b'\\') => {
                    self.bump();
                    match self.peek() {
                        Some(b'"') | Some(b'\\') | Some(b'n') | Some(b'r') | Some(b't') => {
                            self.bump()
                        }
                        Some(b'\n') | Some(b'\r') => {
                            // Continuation splice: EOL plus trailing run of
                            // horizontal whitespace.
                            self.bump_newline();
                            while matches!(self.peek(), Some(b' ') | Some(b'\t')) {
                                self.bump();
                            }
                        }
                        Some(_) => {
                            self.bump_char();
                            return TokenKind::Invalid;
                        }
                        None => return TokenKind::Invalid,
                    }
                }
                Some(_) => self.bump(),
            }
        }
    }

    fn scan_backtick_string(&mut self) -> TokenKind {
        self.bump();
        loop {
            match self.peek() {
                None => return TokenKind::Invalid,
                Some(b'`') => {
                    self.bump();
                    return TokenKind::Text;
                }
                Some(b'\n') | Some(b'\r') => self.bump_newline(),
                Some(_) => self.bump(),
            }
        }
    }

    fn scan_base64(&mut self) -> TokenKind {
        self.bump();
        let mut count = 0usize;
        loop {
            match self.peek() {
                None => return TokenKind::Invalid,
                Some(b']') => {
                    self.bump();
                    break;
                }
                Some(b' ') | Some(b'\t') => self.bump(),
                Some(b'\n') | Some(b'\r') => self.bump_newline(),
                Some(c) if c.is_ascii_alphanumeric() || c == b'+' || c == b'/' || c == b'=' => {
                    count += 1;
                    self.bump();
                }
                Some(_) => {
                    self.bump_char();
                    return TokenKind::Invalid;
                }
            }
        }
        if count % 4 == 0 {
            TokenKind::Binary
        } else {
            TokenKind::Invalid
        }
    }

    fn scan_identifier(&mut self) -> TokenKind {
        let start = self.pos;
        loop {
            match self.peek() {
                Some(b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'_' | b'-' | b'.' | b'$') => {
                    self.bump()
                }
                Some(c) if c >= 0x80 => {
                    if self.current_char().is_alphabetic() {
                        self.bump_char();
                    } else {
                        break;
                    }
                }
                _ => break,
            }
        }
        // Reserved words only count when not continued by an identifier
        // character, so `on_` or `null_` stay identifiers.
        match &self.input[start..self.pos] {
            "true" | "false" | "on" | "off" => TokenKind::Boolean,
            "null" => TokenKind::Null,
            _ => TokenKind::Identifier,
        }
    }

    #[inline]
    fn scan_digits(&mut self) -> usize {
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
            self.bump();
        }
        self.pos - start
    }

    #[inline]
    fn scan_digits_at_least_one(&mut self) -> bool {
        self.scan_digits() > 0
    }

    /// Entered at the first digit; a leading `-` has already been consumed.
    fn scan_numeric(&mut self) -> TokenKind {
        self.scan_digits();
        match self.peek() {
            Some(b':') => self.scan_duration_tail(),
            Some(b'D') => {
                self.bump();
                TokenKind::Number
            }
            Some(b'f') | Some(b'F') => {
                self.bump();
                TokenKind::Number
            }
            Some(b'd') => {
                if self.peek_at(1) == Some(b':') {
                    self.bump();
                    self.bump();
                    if !self.scan_digits_at_least_one() {
                        return TokenKind::Invalid;
                    }
                    self.scan_duration_tail()
                } else {
                    self.bump();
                    TokenKind::Number
                }
            }
            Some(b'/') => self.scan_date_tail(),
            Some(b'.') => self.scan_fraction_tail(),
            Some(b'l') | Some(b'L') => {
                self.bump();
                TokenKind::Number
            }
            _ => TokenKind::Number,
        }
    }

    /// `:MM[:SS[.frac]]` after the hours integer. The two-segment form is
    /// accepted so that generated durations with zero seconds re-lex.
    fn scan_duration_tail(&mut self) -> TokenKind {
        if self.peek() != Some(b':') {
            return TokenKind::Invalid;
        }
        self.bump();
        if !self.scan_digits_at_least_one() {
            return TokenKind::Invalid;
        }
        if self.peek() == Some(b':') {
            self.bump();
            if !self.scan_digits_at_least_one() {
                return TokenKind::Invalid;
            }
            if self.peek() == Some(b'.') {
                self.bump();
                if !self.scan_digits_at_least_one() {
                    return TokenKind::Invalid;
                }
            }
        }
        TokenKind::Duration
    }

    /// `/MM/DD`, then optionally a time of day and timezone.
    fn scan_date_tail(&mut self) -> TokenKind {
        self.bump();
        if !self.scan_digits_at_least_one() {
            return TokenKind::Invalid;
        }
        if self.peek() != Some(b'/') {
            return TokenKind::Invalid;
        }
        self.bump();
        if !self.scan_digits_at_least_one() {
            return TokenKind::Invalid;
        }
        if self.peek() != Some(b' ') {
            return TokenKind::Date;
        }
        let snap = self.snapshot();
        self.bump();
        if !self.scan_time_of_day() {
            self.restore(snap);
            return TokenKind::Date;
        }
        if self.peek() == Some(b'-') {
            if self.scan_timezone() {
                TokenKind::DateTime
            } else {
                TokenKind::Invalid
            }
        } else {
            TokenKind::DateTime
        }
    }

    /// `HH:MM[:SS[.frac]]`.
    fn scan_time_of_day(&mut self) -> bool {
        if !self.scan_digits_at_least_one() {
            return false;
        }
        if self.peek() != Some(b':') {
            return false;
        }
        self.bump();
        if !self.scan_digits_at_least_one() {
            return false;
        }
        if self.peek() == Some(b':') {
            let snap = self.snapshot();
            self.bump();
            if !self.scan_digits_at_least_one() {
                self.restore(snap);
                return true;
            }
            if self.peek() == Some(b'.') {
                let frac_snap = self.snapshot();
                self.bump();
                if !self.scan_digits_at_least_one() {
                    self.restore(frac_snap);
                }
            }
        }
        true
    }

    /// `-LLL[±HH[:MM]]` where `LLL` is exactly three uppercase letters.
    fn scan_timezone(&mut self) -> bool {
        self.bump();
        for _ in 0..3 {
            match self.peek() {
                Some(c) if c.is_ascii_uppercase() => self.bump(),
                _ => return false,
            }
        }
        if matches!(self.peek(), Some(b'+') | Some(b'-')) {
            self.bump();
            if !self.scan_digits_at_least_one() {
                return false;
            }
            if self.peek() == Some(b':') {
                self.bump();
                if !self.scan_digits_at_least_one() {
                    return false;
                }
            }
        }
        true
    }

    /// `.digits` with an optional `f`/`F`/`d`/`D`/`bd`/`BD` suffix.
    fn scan_fraction_tail(&mut self) -> TokenKind {
        self.bump();
        if !self.scan_digits_at_least_one() {
            return TokenKind::Invalid;
        }
        match self.peek() {
            Some(b'f') | Some(b'F') | Some(b'd') | Some(b'D') => {
                self.bump();
                TokenKind::Number
            }
            Some(b'b') | Some(b'B') => {
                if matches!(self.peek_at(1), Some(b'd') | Some(b'D')) {
                    self.bump();
                    self.bump();
                    TokenKind::Number
                } else {
                    self.bump();
                    TokenKind::Invalid
                }
            }
            Some(c) if c.is_ascii_alphabetic() => {
                self.bump();
                TokenKind::Invalid
            }
            _ => TokenKind::Number,
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        if self.finished {
            return None;
        }
        let ws_start = self.pos;
        while matches!(self.peek(), Some(b' ') | Some(b'\t')) {
            self.bump();
        }
        let whitespace = &self.input[ws_start..self.pos];
        let start = self.pos;
        let location = self.location();
        let kind = match self.peek() {
            None => {
                self.finished = true;
                TokenKind::Eof
            }
            Some(c) => self.scan_token(c),
        };
        Some(Token {
            kind,
            location,
            whitespace,
            text: &self.input[start..self.pos],
        })
    }
}
