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

//! Pool appenders: reusable accumulation buffers for parser payloads.
//!
//! An [`Appender`] collects elements one at a time and hands them out as an
//! independent owned array via [`Appender::extract_array`]. The backing
//! buffer keeps its capacity across extractions, so a parser that
//! accumulates and extracts once per node pays for the allocation of the
//! widest sibling group at each depth, not for every node it visits.
//!
//! # Examples
//!
//! ```
//! use sdlite_core::pool::Appender;
//!
//! let mut pool = Appender::new();
//! pool.put(1);
//! pool.put(2);
//! let first = pool.extract_array();
//! assert_eq!(first, vec![1, 2]);
//!
//! // The backing capacity is reused for the next accumulation.
//! pool.put(3);
//! assert_eq!(pool.extract_array(), vec![3]);
//! assert_eq!(first, vec![1, 2]);
//! ```

/// A reusable append buffer that hands out owned arrays.
///
/// Appends are amortized O(1). Extracted arrays are independent of the
/// appender and are never invalidated by later appends. Not clonable: each
/// appender represents one accumulation region.
#[derive(Debug)]
pub struct Appender<T> {
    buf: Vec<T>,
}

impl<T> Appender<T> {
    /// Minimum backing capacity reserved on first growth: 64 KiB worth of
    /// elements, but never fewer than 100.
    const MIN_CAPACITY: usize = {
        let elem = std::mem::size_of::<T>();
        if elem == 0 || 65536 / elem < 100 {
            100
        } else {
            65536 / elem
        }
    };

    /// Creates an empty appender. No memory is allocated until the first
    /// `put`.
    pub fn new() -> Self {
        Self { buf: Vec::new() }
    }

    /// Appends a single element.
    #[inline]
    pub fn put(&mut self, item: T) {
        self.reserve(1);
        self.buf.push(item);
    }

    /// Appends all elements of a slice.
    pub fn put_slice(&mut self, items: &[T])
    where
        T: Clone,
    {
        self.reserve(items.len());
        self.buf.extend_from_slice(items);
    }

    /// Moves the accumulated elements out as an owned array, leaving the
    /// appender empty but with its backing capacity intact.
    pub fn extract_array(&mut self) -> Vec<T> {
        self.buf.split_off(0)
    }

    /// Number of elements accumulated since the last extraction.
    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns `true` if nothing has been accumulated since the last
    /// extraction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Current backing capacity in elements.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    #[inline]
    fn reserve(&mut self, additional: usize) {
        if self.buf.capacity() == 0 {
            self.buf.reserve(additional.max(Self::MIN_CAPACITY));
        } else if self.buf.capacity() - self.buf.len() < additional {
            self.buf.reserve(additional);
        }
    }
}

impl<T> Default for Appender<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// An [`Appender`] specialized for character data.
///
/// Accumulates into a `String` so that extracted payloads are UTF-8 by
/// construction, which is what decoded SDLang strings require.
#[derive(Debug, Default)]
pub struct StringAppender {
    buf: String,
}

impl StringAppender {
    /// Minimum backing capacity in bytes reserved on first growth.
    const MIN_CAPACITY: usize = 65536;

    /// Creates an empty appender. No memory is allocated until the first
    /// `put`.
    pub fn new() -> Self {
        Self { buf: String::new() }
    }

    /// Appends a single character.
    #[inline]
    pub fn put(&mut self, ch: char) {
        self.reserve(ch.len_utf8());
        self.buf.push(ch);
    }

    /// Appends a string slice.
    #[inline]
    pub fn put_str(&mut self, s: &str) {
        self.reserve(s.len());
        self.buf.push_str(s);
    }

    /// Moves the accumulated text out as an owned `String`, leaving the
    /// appender empty but with its backing capacity intact.
    pub fn extract_string(&mut self) -> String {
        self.buf.split_off(0)
    }

    /// Number of bytes accumulated since the last extraction.
    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns `true` if nothing has been accumulated since the last
    /// extraction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    #[inline]
    fn reserve(&mut self, additional: usize) {
        if self.buf.capacity() == 0 {
            self.buf.reserve(additional.max(Self::MIN_CAPACITY));
        } else if self.buf.capacity() - self.buf.len() < additional {
            self.buf.reserve(additional);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Appender tests ====================

    #[test]
    fn test_put_and_extract() {
        let mut pool = Appender::new();
        pool.put(10);
        pool.put(20);
        pool.put(30);
        assert_eq!(pool.len(), 3);
        assert_eq!(pool.extract_array(), vec![10, 20, 30]);
        assert!(pool.is_empty());
    }

    #[test]
    fn test_extract_empty() {
        let mut pool: Appender<u8> = Appender::new();
        assert_eq!(pool.extract_array(), Vec::<u8>::new());
    }

    #[test]
    fn test_extracted_arrays_are_independent() {
        let mut pool = Appender::new();
        pool.put("a".to_string());
        let first = pool.extract_array();
        pool.put("b".to_string());
        pool.put("c".to_string());
        let second = pool.extract_array();
        assert_eq!(first, vec!["a"]);
        assert_eq!(second, vec!["b", "c"]);
    }

    #[test]
    fn test_capacity_retained_across_extractions() {
        let mut pool = Appender::new();
        for i in 0..500 {
            pool.put(i);
        }
        let _ = pool.extract_array();
        let cap = pool.capacity();
        assert!(cap >= 500);

        // Re-accumulating the same amount must not grow the buffer.
        for i in 0..500 {
            pool.put(i);
        }
        assert_eq!(pool.capacity(), cap);
    }

    #[test]
    fn test_min_capacity_on_first_growth() {
        let mut pool: Appender<u8> = Appender::new();
        pool.put(1);
        assert!(pool.capacity() >= 65536);

        let mut wide: Appender<[u8; 4096]> = Appender::new();
        wide.put([0; 4096]);
        assert!(wide.capacity() >= 100);
    }

    #[test]
    fn test_lazy_allocation() {
        let pool: Appender<u64> = Appender::new();
        assert_eq!(pool.capacity(), 0);
    }

    #[test]
    fn test_put_slice() {
        let mut pool = Appender::new();
        pool.put_slice(&[1, 2, 3]);
        pool.put(4);
        assert_eq!(pool.extract_array(), vec![1, 2, 3, 4]);
    }

    // ==================== StringAppender tests ====================

    #[test]
    fn test_string_put_and_extract() {
        let mut pool = StringAppender::new();
        pool.put('h');
        pool.put_str("ello");
        assert_eq!(pool.extract_string(), "hello");
        assert!(pool.is_empty());
    }

    #[test]
    fn test_string_capacity_retained() {
        let mut pool = StringAppender::new();
        pool.put_str(&"x".repeat(1000));
        let _ = pool.extract_string();
        assert!(pool.buf.capacity() >= 1000);
        assert_eq!(pool.len(), 0);
    }

    #[test]
    fn test_string_unicode() {
        let mut pool = StringAppender::new();
        pool.put('日');
        pool.put_str("本語");
        assert_eq!(pool.extract_string(), "日本語");
    }

    #[test]
    fn test_string_extract_twice() {
        let mut pool = StringAppender::new();
        pool.put_str("first");
        let a = pool.extract_string();
        pool.put_str("second");
        let b = pool.extract_string();
        assert_eq!(a, "first");
        assert_eq!(b, "second");
    }
}
