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

//! Error types for SDLang parsing and generation.

use crate::lex::Location;
use std::fmt;
use thiserror::Error;

/// The kind of error that occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SdlErrorKind {
    /// Grammar violation: a token that is not allowed at its position.
    /// Unterminated constructs surface here as malformed tokens.
    Syntax,
    /// Backslash line continuation not followed by an end of line.
    Continuation,
    /// A scalar payload that failed to decode (out-of-range temporal
    /// component, bad escape, bad base64 padding).
    Value,
    /// A resource limit was exceeded.
    Security,
    /// A byte sink failed while generating output.
    Io,
}

impl fmt::Display for SdlErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Syntax => write!(f, "SyntaxError"),
            Self::Continuation => write!(f, "ContinuationError"),
            Self::Value => write!(f, "ValueError"),
            Self::Security => write!(f, "SecurityError"),
            Self::Io => write!(f, "IOError"),
        }
    }
}

/// A structured error raised while parsing or generating SDLang.
///
/// Renders as `"<file>:<line>: <message>"` with a 1-based line number.
#[derive(Debug, Clone, Error)]
#[error("{file}:{}: {message}", .location.line + 1)]
pub struct SdlError {
    /// The kind of error.
    pub kind: SdlErrorKind,
    /// Human-readable error message.
    pub message: String,
    /// The file the input was attributed to.
    pub file: String,
    /// Position of the offending construct (0-based internally).
    pub location: Location,
}

impl SdlError {
    /// Create a new error. The file name is attached later by the caller
    /// that knows it, via [`SdlError::with_file`].
    pub fn new(kind: SdlErrorKind, message: impl Into<String>, location: Location) -> Self {
        Self {
            kind,
            message: message.into(),
            file: String::new(),
            location,
        }
    }

    /// Attach the file name the input was read from.
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = file.into();
        self
    }

    // Convenience constructors for each error kind.

    pub fn syntax(message: impl Into<String>, location: Location) -> Self {
        Self::new(SdlErrorKind::Syntax, message, location)
    }

    pub fn continuation(location: Location) -> Self {
        Self::new(
            SdlErrorKind::Continuation,
            "Expected EOL after backslash",
            location,
        )
    }

    pub fn value(message: impl Into<String>, location: Location) -> Self {
        Self::new(SdlErrorKind::Value, message, location)
    }

    pub fn security(message: impl Into<String>, location: Location) -> Self {
        Self::new(SdlErrorKind::Security, message, location)
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::new(SdlErrorKind::Io, message, Location::default())
    }
}

/// Result type for SDLang operations.
pub type SdlResult<T> = Result<T, SdlError>;

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== SdlErrorKind Display tests ====================

    #[test]
    fn test_kind_display() {
        assert_eq!(format!("{}", SdlErrorKind::Syntax), "SyntaxError");
        assert_eq!(format!("{}", SdlErrorKind::Continuation), "ContinuationError");
        assert_eq!(format!("{}", SdlErrorKind::Value), "ValueError");
        assert_eq!(format!("{}", SdlErrorKind::Security), "SecurityError");
        assert_eq!(format!("{}", SdlErrorKind::Io), "IOError");
    }

    // ==================== SdlError tests ====================

    #[test]
    fn test_error_display_renders_one_based_line() {
        let loc = Location {
            line: 2,
            column: 4,
            offset: 17,
        };
        let err = SdlError::syntax("Unexpected '=', expected end of node", loc)
            .with_file("config.sdl");
        assert_eq!(
            format!("{}", err),
            "config.sdl:3: Unexpected '=', expected end of node"
        );
    }

    #[test]
    fn test_error_constructors_set_kind() {
        let loc = Location::default();
        assert_eq!(SdlError::syntax("x", loc).kind, SdlErrorKind::Syntax);
        assert_eq!(SdlError::continuation(loc).kind, SdlErrorKind::Continuation);
        assert_eq!(SdlError::value("x", loc).kind, SdlErrorKind::Value);
        assert_eq!(SdlError::security("x", loc).kind, SdlErrorKind::Security);
        assert_eq!(SdlError::io("x").kind, SdlErrorKind::Io);
    }

    #[test]
    fn test_continuation_message() {
        let err = SdlError::continuation(Location::default());
        assert_eq!(err.message, "Expected EOL after backslash");
    }

    #[test]
    fn test_with_file() {
        let err = SdlError::value("month out of range", Location::default()).with_file("a.sdl");
        assert_eq!(err.file, "a.sdl");
    }

    #[test]
    fn test_error_is_std_error() {
        fn accepts_error<E: std::error::Error>(_: E) {}
        accepts_error(SdlError::syntax("test", Location::default()));
    }

    #[test]
    fn test_error_clone() {
        let original = SdlError::syntax("message", Location::default()).with_file("f.sdl");
        let cloned = original.clone();
        assert_eq!(original.kind, cloned.kind);
        assert_eq!(original.message, cloned.message);
        assert_eq!(original.file, cloned.file);
    }
}
