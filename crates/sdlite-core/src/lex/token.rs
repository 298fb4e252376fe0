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

//! Token and source-location types for SDLang lexical analysis.

use std::fmt;

/// Classification of a lexed token.
///
/// The lexer never fails; malformed constructs (unterminated strings,
/// bad escapes, odd base64 lengths) are classified as [`TokenKind::Invalid`]
/// and rejected by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A malformed construct. Terminal: the parser always rejects it.
    Invalid,
    /// End of input. Yielded exactly once.
    Eof,
    /// `\n`, `\r`, or `\r\n`.
    Eol,
    /// `=` between an attribute name and its value.
    Assign,
    /// `:` between a namespace and a name.
    Namespace,
    /// `{` opening a child block.
    BlockOpen,
    /// `}` closing a child block.
    BlockClose,
    /// `;` separating statements on one line.
    Semicolon,
    /// `//…`, `#…`, `--…` line comments or `/*…*/` block comments.
    Comment,
    /// `\` introducing a line continuation.
    Backslash,
    /// A node, namespace, or attribute name.
    Identifier,
    /// The literal `null`.
    Null,
    /// A quoted or backtick string literal.
    Text,
    /// A `[base64]` binary literal.
    Binary,
    /// An integer or floating-point literal, with optional type suffix.
    Number,
    /// `true`, `false`, `on`, or `off`.
    Boolean,
    /// `YYYY/MM/DD HH:MM[:SS[.frac]][-TZ]`.
    DateTime,
    /// `YYYY/MM/DD`.
    Date,
    /// `[Dd:]HH:MM[:SS[.frac]]`.
    Duration,
}

impl TokenKind {
    /// Returns `true` for token kinds that carry a scalar value.
    #[inline]
    pub fn is_value(self) -> bool {
        matches!(
            self,
            Self::Null
                | Self::Text
                | Self::Binary
                | Self::Number
                | Self::Boolean
                | Self::DateTime
                | Self::Date
                | Self::Duration
        )
    }

    /// Fixed phrase used in "Unexpected …, expected …" messages.
    ///
    /// `Invalid` and `Identifier` are described with their source text by
    /// [`Token::describe`]; the phrase here is a fallback.
    pub fn describe(self) -> &'static str {
        match self {
            Self::Invalid => "malformed token",
            Self::Eof => "end of file",
            Self::Eol => "end of line",
            Self::Assign => "'='",
            Self::Namespace => "':'",
            Self::BlockOpen => "'{'",
            Self::BlockClose => "'}'",
            Self::Semicolon => "';'",
            Self::Comment => "comment",
            Self::Backslash => "'\\'",
            Self::Identifier => "identifier",
            Self::Null => "'null'",
            Self::Text => "string",
            Self::Binary => "binary data",
            Self::Number => "number",
            Self::Boolean => "Boolean value",
            Self::DateTime => "date/time value",
            Self::Date => "date value",
            Self::Duration => "duration value",
        }
    }
}

/// A position in the input.
///
/// `line` and `column` are 0-based; user-visible messages render `line + 1`.
/// `column` counts bytes, matching the forward byte cursor of the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    /// Line number, 0-based.
    pub line: u32,
    /// Byte column within the line, 0-based.
    pub column: u32,
    /// Absolute byte offset from the start of the input.
    pub offset: u64,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line + 1, self.column + 1)
    }
}

/// A single lexed token.
///
/// `text` is a view over the original input covering exactly the token's
/// characters; `whitespace` covers the run of spaces and tabs that preceded
/// it. Concatenating `whitespace` and `text` of every token in order
/// reconstructs the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// Classification of the token.
    pub kind: TokenKind,
    /// Position of the first character of `text`.
    pub location: Location,
    /// Spaces and tabs preceding the token.
    pub whitespace: &'a str,
    /// The token's characters, uninterpreted.
    pub text: &'a str,
}

impl Token<'_> {
    /// Human-readable description for error messages.
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::Invalid => format!("malformed token '{}'", self.text),
            TokenKind::Identifier => format!("identifier '{}'", self.text),
            kind => kind.describe().to_string(),
        }
    }
}
