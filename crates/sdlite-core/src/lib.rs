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

//! Core parser and data model for the SDLang data language.
//!
//! SDLang is a line-oriented, hierarchical format carrying typed scalar
//! values (null, strings, binary, integers, floats, booleans, dates,
//! date-times, durations) inside a tree of named nodes with optional
//! namespaces, positional values, named attributes, and child blocks.
//!
//! This crate provides the forward pipeline: a lossless [`lex`] token
//! stream, a [`decode_value`] scalar decoder, and a streaming [`parse`]
//! that hands each fully materialized top-level [`Node`] to a callback.
//! Pool appenders (see [`pool`]) recycle allocations between siblings, so
//! peak memory follows tree depth rather than document size.
//!
//! # Quick Start
//!
//! ```
//! use sdlite_core::{parse, Value};
//!
//! let source = "server {\n\thost \"localhost\" port=8080\n}\n";
//! let mut hosts = Vec::new();
//! parse(source, "example.sdl", |node| {
//!     for child in &node.children {
//!         if let Some(host) = child.values.first().and_then(Value::as_str) {
//!             hosts.push(host.to_string());
//!         }
//!     }
//!     Ok(())
//! })
//! .unwrap();
//! assert_eq!(hosts, ["localhost"]);
//! ```
//!
//! The reverse direction (writing a node tree back out as SDLang text)
//! lives in the companion `sdlite-gen` crate.

mod decode;
mod error;
mod node;
mod parser;
mod value;

pub mod lex;
pub mod pool;

pub use decode::decode_value;
pub use error::{SdlError, SdlErrorKind, SdlResult};
pub use lex::{lex, Lexer, Location, Token, TokenKind};
pub use node::{Attribute, Node, ANONYMOUS_NAME};
pub use parser::{parse, parse_with_options, ParseOptions, ParseOptionsBuilder};
pub use value::{SdlDateTime, Timezone, Value, HNSECS_PER_SECOND};
