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

//! Lexical analysis subsystem for SDLang.
//!
//! # Module Structure
//!
//! - [`token`] - Token kinds, source locations, and error-message phrases
//! - [`lexer`] - The forward token-stream iterator
//!
//! # Examples
//!
//! ```
//! use sdlite_core::lex::{lex, TokenKind};
//!
//! let mut tokens = lex("host \"localhost\"", "conf.sdl");
//! assert_eq!(tokens.next().unwrap().kind, TokenKind::Identifier);
//! assert_eq!(tokens.next().unwrap().kind, TokenKind::Text);
//! assert_eq!(tokens.next().unwrap().kind, TokenKind::Eof);
//! assert!(tokens.next().is_none());
//! ```

pub mod lexer;
pub mod token;

pub use lexer::{lex, Lexer};
pub use token::{Location, Token, TokenKind};
