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

//! # SDLite
//!
//! Parser and generator for SDLang (Simple Declarative Language), a
//! line-oriented format carrying typed scalar values inside a tree of
//! named nodes with namespaces, positional values, named attributes, and
//! child blocks.
//!
//! ## Quick Start
//!
//! ```rust
//! use sdlite::{parse_to_vec, to_sdl_string, Value};
//!
//! let source = "folder \"docs\" {\n\tfile \"readme.txt\" size=12L\n}\n";
//! let nodes = parse_to_vec(source, "files.sdl").unwrap();
//!
//! assert_eq!(nodes[0].values[0], Value::Text("docs".into()));
//! assert_eq!(
//!     nodes[0].children[0].attribute("size"),
//!     Some(&Value::I64(12))
//! );
//!
//! // The round trip re-renders the same tree.
//! assert_eq!(to_sdl_string(&nodes), source);
//! ```
//!
//! ## Streaming
//!
//! For large documents, use the callback form from the core crate so only
//! one top-level subtree is alive at a time:
//!
//! ```rust
//! use sdlite::parse;
//!
//! let mut names = Vec::new();
//! parse("a\nb\nc\n", "list.sdl", |node| {
//!     names.push(node.qualified_name.clone());
//!     Ok(())
//! })
//! .unwrap();
//! assert_eq!(names, ["a", "b", "c"]);
//! ```

// Re-export the core data model and parsing surface.
pub use sdlite_core::{
    decode_value,
    lex,
    parse,
    parse_with_options,
    Attribute,
    Lexer,
    Location,
    Node,
    ParseOptions,
    ParseOptionsBuilder,
    SdlDateTime,
    SdlError,
    SdlErrorKind,
    SdlResult,
    Timezone,
    Token,
    TokenKind,
    Value,
    ANONYMOUS_NAME,
    HNSECS_PER_SECOND,
};

// Re-export the pool appenders for advanced decode_value callers.
pub use sdlite_core::pool;

// Re-export generation.
pub use sdlite_gen::{escape_sdl_string, generate, generate_to_string, write_float, write_value};

/// Parses a whole document into a vector of top-level nodes.
///
/// A convenience over the streaming [`parse`]; peak memory is the whole
/// tree, so prefer the callback form for very large inputs.
pub fn parse_to_vec(input: &str, filename: &str) -> SdlResult<Vec<Node>> {
    let mut nodes = Vec::new();
    parse(input, filename, |node| {
        nodes.push(node);
        Ok(())
    })?;
    Ok(nodes)
}

/// Renders a sequence of nodes to an owned SDLang string.
pub fn to_sdl_string(nodes: &[Node]) -> String {
    generate_to_string(nodes)
}

/// Checks a document for validity without keeping any of it.
pub fn validate(input: &str, filename: &str) -> SdlResult<()> {
    parse(input, filename, |_| Ok(()))
}

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_to_vec() {
        let nodes = parse_to_vec("a 1\nb 2\n", "test.sdl").unwrap();
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[1].values, vec![Value::I32(2)]);
    }

    #[test]
    fn test_validate() {
        assert!(validate("a 1\n", "test.sdl").is_ok());
        assert!(validate("a=1\n", "test.sdl").is_err());
    }

    #[test]
    fn test_round_trip() {
        let source = "ne {\n\tfoo:nf {\n\t\tng\n\t}\n}\n";
        let nodes = parse_to_vec(source, "test.sdl").unwrap();
        assert_eq!(to_sdl_string(&nodes), source);
    }

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
