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

//! SDLang text generation.
//!
//! The reverse direction of `sdlite-core`: [`generate`] writes a tree of
//! [`Node`](sdlite_core::Node)s back out as SDLang text, one tab of
//! indentation per nesting level. Together with the parser this closes the
//! round trip: parsing generated output yields a tree equal to the one
//! that was written.
//!
//! # Examples
//!
//! ```
//! use sdlite_core::{Node, Value};
//! use sdlite_gen::generate_to_string;
//!
//! let mut tire = Node::new("tire:pressure");
//! tire.add_value(Value::F64(2.5));
//! let mut car = Node::new("car");
//! car.add_child(tire);
//!
//! assert_eq!(
//!     generate_to_string(&[car]),
//!     "car {\n\ttire:pressure 2.5\n}\n"
//! );
//! ```

mod scalar;
mod writer;

pub use scalar::{escape_sdl_string, write_float, SdlFloat};
pub use writer::{generate, generate_to_string, write_value};
