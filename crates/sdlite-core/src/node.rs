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

//! Document nodes for parsed SDLang.

use crate::lex::Location;
use crate::value::Value;

/// Qualified name given to anonymous nodes (statements that begin with a
/// value rather than an identifier).
pub const ANONYMOUS_NAME: &str = "content";

/// A named attribute on a node.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attribute {
    /// `name` or `namespace:name`; at most one `:`.
    pub qualified_name: String,
    /// The attribute's value.
    pub value: Value,
}

impl Attribute {
    /// Creates an attribute.
    pub fn new(qualified_name: impl Into<String>, value: Value) -> Self {
        Self {
            qualified_name: qualified_name.into(),
            value,
        }
    }

    /// The namespace part of the qualified name, if any.
    pub fn namespace(&self) -> Option<&str> {
        self.qualified_name.split_once(':').map(|(ns, _)| ns)
    }

    /// The name without its namespace.
    pub fn name(&self) -> &str {
        match self.qualified_name.split_once(':') {
            Some((_, name)) => name,
            None => &self.qualified_name,
        }
    }
}

/// A statement in an SDLang document: a (possibly anonymous) name,
/// positional values, named attributes, and an optional child block.
///
/// `values`, `attributes`, and `children` are in source order; attributes
/// are not deduplicated. All payloads are owned by the node.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    /// `name` or `namespace:name`, or [`ANONYMOUS_NAME`].
    pub qualified_name: String,
    /// Position of the first token of the statement.
    pub location: Location,
    /// Positional values.
    pub values: Vec<Value>,
    /// Named attributes.
    pub attributes: Vec<Attribute>,
    /// Parsed child nodes; empty when no `{ … }` block was present.
    pub children: Vec<Node>,
}

// Location is where the node was read from, not part of its identity:
// regenerated documents must compare equal to their originals.
impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.qualified_name == other.qualified_name
            && self.values == other.values
            && self.attributes == other.attributes
            && self.children == other.children
    }
}

impl Node {
    /// Creates an empty node with the given qualified name.
    pub fn new(qualified_name: impl Into<String>) -> Self {
        Self {
            qualified_name: qualified_name.into(),
            location: Location::default(),
            values: Vec::new(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Creates a node with positional values.
    pub fn with_values(qualified_name: impl Into<String>, values: Vec<Value>) -> Self {
        Self {
            values,
            ..Self::new(qualified_name)
        }
    }

    /// Returns `true` for anonymous nodes.
    pub fn is_anonymous(&self) -> bool {
        self.qualified_name == ANONYMOUS_NAME
    }

    /// The namespace part of the qualified name, if any.
    pub fn namespace(&self) -> Option<&str> {
        self.qualified_name.split_once(':').map(|(ns, _)| ns)
    }

    /// The name without its namespace.
    pub fn name(&self) -> &str {
        match self.qualified_name.split_once(':') {
            Some((_, name)) => name,
            None => &self.qualified_name,
        }
    }

    /// Appends a positional value.
    pub fn add_value(&mut self, value: Value) {
        self.values.push(value);
    }

    /// Appends an attribute.
    pub fn add_attribute(&mut self, attribute: Attribute) {
        self.attributes.push(attribute);
    }

    /// Appends a child node.
    pub fn add_child(&mut self, child: Node) {
        self.children.push(child);
    }

    /// First attribute with the given qualified name, if any.
    pub fn attribute(&self, qualified_name: &str) -> Option<&Value> {
        self.attributes
            .iter()
            .find(|a| a.qualified_name == qualified_name)
            .map(|a| &a.value)
    }

    /// First child with the given qualified name, if any.
    pub fn child(&self, qualified_name: &str) -> Option<&Node> {
        self.children
            .iter()
            .find(|c| c.qualified_name == qualified_name)
    }
}
