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

//! The SDLang parser.
//!
//! A recursive-descent consumer of the token stream that invokes a caller
//! callback once per completed top-level node, in source order, with child
//! nodes already attached. Comments are filtered out and the backslash
//! line-continuation rule is applied below the grammar.
//!
//! All per-parse allocation goes through the pool appenders of a
//! [`ParserContext`] local to the call: one appender each for values,
//! attributes, string payloads, and binary payloads, plus one node appender
//! per tree depth. Each appender is drained into the finished node and
//! reused for the next sibling, so peak memory follows the width of the
//! deepest spine rather than the size of the document.

use crate::decode::decode_value;
use crate::error::{SdlError, SdlResult};
use crate::lex::{lex, Lexer, Location, Token, TokenKind};
use crate::node::{Attribute, Node, ANONYMOUS_NAME};
use crate::pool::{Appender, StringAppender};
use crate::value::Value;
use tracing::debug;

/// Options controlling a parse call.
///
/// # Examples
///
/// ```
/// use sdlite_core::ParseOptions;
///
/// let options = ParseOptions::builder().max_depth(64).build();
/// assert_eq!(options.max_depth, 64);
/// ```
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Maximum node nesting depth (default: 1000). Documents nested deeper
    /// fail with a `SecurityError` instead of exhausting the stack.
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self { max_depth: 1000 }
    }
}

impl ParseOptions {
    /// Create a new builder for `ParseOptions`.
    pub fn builder() -> ParseOptionsBuilder {
        ParseOptionsBuilder::new()
    }
}

/// Builder for ergonomic construction of [`ParseOptions`].
#[derive(Debug, Clone, Default)]
pub struct ParseOptionsBuilder {
    options: ParseOptions,
}

impl ParseOptionsBuilder {
    /// Create a builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum nesting depth.
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.options.max_depth = depth;
        self
    }

    /// Build the `ParseOptions`.
    pub fn build(self) -> ParseOptions {
        self.options
    }
}

/// Parses an SDLang document, calling `on_node` once per top-level node.
///
/// Nodes arrive in source order with their children fully attached. An
/// `Err` returned from the callback aborts the parse and propagates
/// unchanged. The first syntactic or semantic violation is fatal; there is
/// no resynchronization.
///
/// # Examples
///
/// ```
/// use sdlite_core::{parse, Value};
///
/// let mut ports = Vec::new();
/// parse("server port=8080\nserver port=8081\n", "servers.sdl", |node| {
///     ports.push(node.attribute("port").cloned());
///     Ok(())
/// })
/// .unwrap();
/// assert_eq!(ports, [Some(Value::I32(8080)), Some(Value::I32(8081))]);
/// ```
pub fn parse<F>(input: &str, filename: &str, on_node: F) -> SdlResult<()>
where
    F: FnMut(Node) -> SdlResult<()>,
{
    parse_with_options(input, filename, &ParseOptions::default(), on_node)
}

/// Parses an SDLang document with explicit [`ParseOptions`].
pub fn parse_with_options<F>(
    input: &str,
    filename: &str,
    options: &ParseOptions,
    on_node: F,
) -> SdlResult<()>
where
    F: FnMut(Node) -> SdlResult<()>,
{
    debug!(file = filename, "parsing SDLang document");
    let mut parser = Parser {
        tokens: TokenStream::new(lex(input, filename), filename),
        ctx: ParserContext::default(),
        max_depth: options.max_depth,
        on_node,
        filename,
        emitted: 0,
    };
    parser.parse_document()?;
    debug!(file = filename, nodes = parser.emitted, "parsed SDLang document");
    Ok(())
}

/// The pool appenders shared by one parse call.
#[derive(Default)]
struct ParserContext {
    values: Appender<Value>,
    attributes: Appender<Attribute>,
    strings: StringAppender,
    bytes: Appender<u8>,
    /// One node appender per tree depth, grown on demand and reused across
    /// all sibling groups at that depth.
    nodes: Vec<Appender<Node>>,
}

/// The comment-filtered, continuation-spliced view of the lexer stream.
struct TokenStream<'a> {
    lexer: Lexer<'a>,
    peeked: Option<Token<'a>>,
    filename: &'a str,
    last_location: Location,
}

impl<'a> TokenStream<'a> {
    fn new(lexer: Lexer<'a>, filename: &'a str) -> Self {
        Self {
            lexer,
            peeked: None,
            filename,
            last_location: Location::default(),
        }
    }

    fn peek(&mut self) -> SdlResult<Token<'a>> {
        if self.peeked.is_none() {
            self.peeked = Some(self.advance()?);
        }
        Ok(self.peeked.unwrap())
    }

    fn pop(&mut self) -> SdlResult<Token<'a>> {
        match self.peeked.take() {
            Some(token) => Ok(token),
            None => self.advance(),
        }
    }

    fn advance(&mut self) -> SdlResult<Token<'a>> {
        loop {
            let token = self.raw_next();
            match token.kind {
                TokenKind::Comment => continue,
                TokenKind::Backslash => {
                    // The continuation glues physical lines together; only
                    // an end of line (comments aside) may follow.
                    let next = loop {
                        let t = self.raw_next();
                        if t.kind != TokenKind::Comment {
                            break t;
                        }
                    };
                    if next.kind != TokenKind::Eol {
                        return Err(
                            SdlError::continuation(token.location).with_file(self.filename)
                        );
                    }
                }
                _ => return Ok(token),
            }
        }
    }

    fn raw_next(&mut self) -> Token<'a> {
        match self.lexer.next() {
            Some(token) => {
                self.last_location = token.location;
                token
            }
            // The lexer yields Eof exactly once; repeat it for callers that
            // look past the end.
            None => Token {
                kind: TokenKind::Eof,
                location: self.last_location,
                whitespace: "",
                text: "",
            },
        }
    }
}

struct Parser<'a, F> {
    tokens: TokenStream<'a>,
    ctx: ParserContext,
    max_depth: usize,
    on_node: F,
    filename: &'a str,
    emitted: usize,
}

impl<'a, F> Parser<'a, F>
where
    F: FnMut(Node) -> SdlResult<()>,
{
    fn parse_document(&mut self) -> SdlResult<()> {
        loop {
            self.skip_separators()?;
            if self.tokens.peek()?.kind == TokenKind::Eof {
                self.tokens.pop()?;
                return Ok(());
            }
            let node = self.parse_node(0)?;
            self.emitted += 1;
            (self.on_node)(node)?;
        }
    }

    fn skip_separators(&mut self) -> SdlResult<()> {
        while matches!(
            self.tokens.peek()?.kind,
            TokenKind::Eol | TokenKind::Semicolon
        ) {
            self.tokens.pop()?;
        }
        Ok(())
    }

    fn unexpected(&self, token: &Token<'_>, expected: &str) -> SdlError {
        SdlError::syntax(
            format!("Unexpected {}, expected {}", token.describe(), expected),
            token.location,
        )
        .with_file(self.filename)
    }

    fn expect_identifier(&mut self) -> SdlResult<Token<'a>> {
        let token = self.tokens.pop()?;
        if token.kind != TokenKind::Identifier {
            return Err(self.unexpected(&token, "identifier"));
        }
        Ok(token)
    }

    /// `ident (':' ident)?`, the shared shape of node and attribute names.
    fn parse_qualified_name(&mut self, first: Token<'a>) -> SdlResult<String> {
        if self.tokens.peek()?.kind == TokenKind::Namespace {
            self.tokens.pop()?;
            let second = self.expect_identifier()?;
            Ok(format!("{}:{}", first.text, second.text))
        } else {
            Ok(first.text.to_string())
        }
    }

    fn decode(&mut self, token: &Token<'_>) -> SdlResult<Value> {
        decode_value(token, &mut self.ctx.strings, &mut self.ctx.bytes)
            .map_err(|e| e.with_file(self.filename))
    }

    /// One node: `qname? values attributes block?` plus its terminator.
    fn parse_node(&mut self, depth: usize) -> SdlResult<Node> {
        let start = self.tokens.peek()?;
        if depth >= self.max_depth {
            return Err(SdlError::security(
                format!("nesting depth {} exceeds limit {}", depth, self.max_depth),
                start.location,
            )
            .with_file(self.filename));
        }
        let location = start.location;

        let qualified_name = if start.kind == TokenKind::Identifier {
            let first = self.tokens.pop()?;
            self.parse_qualified_name(first)?
        } else {
            ANONYMOUS_NAME.to_string()
        };
        let anonymous = start.kind != TokenKind::Identifier;

        // Positional values.
        while self.tokens.peek()?.kind.is_value() {
            let token = self.tokens.pop()?;
            let value = self.decode(&token)?;
            self.ctx.values.put(value);
        }
        if anonymous && self.ctx.values.is_empty() {
            let token = self.tokens.pop()?;
            return Err(self.unexpected(&token, "values for anonymous node"));
        }
        let values = self.ctx.values.extract_array();

        // Named attributes.
        while self.tokens.peek()?.kind == TokenKind::Identifier {
            let first = self.tokens.pop()?;
            let qualified_name = self.parse_qualified_name(first)?;
            let token = self.tokens.pop()?;
            if token.kind != TokenKind::Assign {
                return Err(self.unexpected(&token, "'='"));
            }
            let token = self.tokens.pop()?;
            if !token.kind.is_value() {
                return Err(self.unexpected(&token, "value"));
            }
            let value = self.decode(&token)?;
            self.ctx.attributes.put(Attribute {
                qualified_name,
                value,
            });
        }
        let attributes = self.ctx.attributes.extract_array();

        // Child block, or the end of the statement.
        let mut children = Vec::new();
        if self.tokens.peek()?.kind == TokenKind::BlockOpen {
            self.tokens.pop()?;
            let token = self.tokens.pop()?;
            if token.kind != TokenKind::Eol {
                return Err(self.unexpected(&token, "end of line"));
            }
            children = self.parse_children(depth)?;
            // The closing brace ends the line it is on.
            let token = self.tokens.peek()?;
            match token.kind {
                TokenKind::Eol => {
                    self.tokens.pop()?;
                }
                TokenKind::Eof => {}
                _ => {
                    let token = self.tokens.pop()?;
                    return Err(self.unexpected(&token, "end of line"));
                }
            }
        } else {
            let token = self.tokens.peek()?;
            match token.kind {
                TokenKind::Eol | TokenKind::Semicolon => {
                    self.tokens.pop()?;
                }
                TokenKind::Eof => {}
                _ => {
                    let token = self.tokens.pop()?;
                    return Err(self.unexpected(&token, "end of node"));
                }
            }
        }

        Ok(Node {
            qualified_name,
            location,
            values,
            attributes,
            children,
        })
    }

    /// Parses the nodes of a `{ … }` block whose parent sits at `depth`,
    /// consuming the closing brace. Siblings accumulate in the depth's node
    /// appender and are extracted as the owned children array.
    fn parse_children(&mut self, depth: usize) -> SdlResult<Vec<Node>> {
        while self.ctx.nodes.len() <= depth {
            self.ctx.nodes.push(Appender::new());
        }
        loop {
            self.skip_separators()?;
            let token = self.tokens.peek()?;
            match token.kind {
                TokenKind::BlockClose => {
                    self.tokens.pop()?;
                    break;
                }
                TokenKind::Eof => {
                    let token = self.tokens.pop()?;
                    return Err(self.unexpected(&token, "'}'"));
                }
                _ => {
                    let node = self.parse_node(depth + 1)?;
                    self.ctx.nodes[depth].put(node);
                }
            }
        }
        Ok(self.ctx.nodes[depth].extract_array())
    }
}
