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

//! Property-based tests for the lexer and parser.
//!
//! The central lexer property is losslessness: concatenating every token's
//! whitespace prefix and text reconstructs the input byte for byte, for any
//! input whatsoever, malformed ones included, since the lexer never raises
//! and classifies bad extents as invalid tokens.

use proptest::prelude::*;
use sdlite_core::{lex, parse, TokenKind};

fn reassemble(input: &str) -> String {
    let mut rebuilt = String::new();
    for token in lex(input, "prop.sdl") {
        rebuilt.push_str(token.whitespace);
        rebuilt.push_str(token.text);
    }
    rebuilt
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Property: the token stream is lossless for arbitrary input.
    #[test]
    fn prop_lex_lossless_arbitrary(input in ".{0,200}") {
        prop_assert_eq!(reassemble(&input), input);
    }

    /// Property: the token stream is lossless for well-formed documents.
    #[test]
    fn prop_lex_lossless_documents(
        name in "[a-z][a-z0-9_]{0,10}".prop_filter(
            "reserved words are not node names",
            |s| !matches!(s.as_str(), "on" | "off" | "true" | "false" | "null"),
        ),
        value in -100000i64..100000,
        text in "[a-zA-Z0-9 ]{0,30}",
    ) {
        let doc = format!("{name} {value} label=\"{text}\"\n{name} {{\n\tchild {value}\n}}\n");
        prop_assert_eq!(reassemble(&doc), doc.clone());

        // And such documents parse cleanly.
        let mut count = 0usize;
        parse(&doc, "prop.sdl", |_| { count += 1; Ok(()) }).unwrap();
        prop_assert_eq!(count, 2);
    }

    /// Property: lexing always terminates with exactly one EOF token.
    #[test]
    fn prop_single_eof(input in ".{0,100}") {
        let kinds: Vec<_> = lex(&input, "prop.sdl").map(|t| t.kind).collect();
        prop_assert_eq!(kinds.iter().filter(|k| **k == TokenKind::Eof).count(), 1);
        prop_assert_eq!(*kinds.last().unwrap(), TokenKind::Eof);
    }

    /// Property: integer values survive the parse unscathed.
    #[test]
    fn prop_integer_values(value in any::<i32>()) {
        let doc = format!("n {value}\n");
        let mut seen = None;
        parse(&doc, "prop.sdl", |node| {
            seen = node.values.first().cloned();
            Ok(())
        }).unwrap();
        prop_assert_eq!(seen, Some(sdlite_core::Value::I32(value)));
    }

    /// Property: offsets in the token stream are strictly non-decreasing.
    #[test]
    fn prop_monotonic_offsets(input in ".{0,150}") {
        let mut last = 0u64;
        for token in lex(&input, "prop.sdl") {
            prop_assert!(token.location.offset >= last);
            last = token.location.offset;
        }
    }
}
