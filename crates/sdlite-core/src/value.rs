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

//! Value types for SDLang scalars.

use chrono::{NaiveDate, NaiveDateTime};

/// Number of hundred-nanosecond ticks per second, the internal unit for
/// durations and fractional seconds.
pub const HNSECS_PER_SECOND: i64 = 10_000_000;

/// Timezone attached to a date-time value.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Timezone {
    /// No timezone suffix: interpreted in the reader's local time.
    Local,
    /// `-UTC` or `-GMT` without an offset.
    Utc,
    /// `-GMT±HH:MM` style fixed offset, in minutes east of UTC.
    Offset(i32),
    /// A three-letter standard name the host may resolve, e.g. `-KST`.
    Named(String),
}

/// A civil date-time with optional sub-second precision and timezone.
///
/// The fraction is kept apart from the civil time so that the full
/// hundred-nanosecond precision of the wire format survives untouched.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SdlDateTime {
    /// Date and time of day, at whole-second precision.
    pub date_time: NaiveDateTime,
    /// Sub-second part in hundred-nanosecond ticks, `0..10_000_000`.
    pub fractional_hnsecs: u32,
    /// The timezone suffix, if any.
    pub timezone: Timezone,
}

impl SdlDateTime {
    /// Creates a date-time value.
    pub fn new(date_time: NaiveDateTime, fractional_hnsecs: u32, timezone: Timezone) -> Self {
        Self {
            date_time,
            fractional_hnsecs,
            timezone,
        }
    }
}

/// A scalar value in SDLang.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    /// The literal `null`.
    Null,
    /// A quoted or backtick string.
    Text(String),
    /// A `[base64]` binary payload.
    Binary(Vec<u8>),
    /// 32-bit integer (the default for plain integer literals).
    I32(i32),
    /// 64-bit integer (`L` suffix).
    I64(i64),
    /// Reserved for arbitrary-precision decimals (`bd` suffix). The current
    /// decoder produces `Null` for those literals; the variant stays in the
    /// tag set so a real decimal payload can be added without relayout.
    Decimal,
    /// 32-bit float (`f` suffix).
    F32(f32),
    /// 64-bit float (plain fractional or `d` suffix).
    F64(f64),
    /// `true`/`false`/`on`/`off`.
    Bool(bool),
    /// A date-time, optionally zoned.
    DateTime(SdlDateTime),
    /// A calendar date.
    Date(NaiveDate),
    /// A signed duration in hundred-nanosecond ticks.
    Duration(i64),
}

impl Value {
    /// Returns `true` if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Try to get the value as a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get the value as binary data.
    pub fn as_binary(&self) -> Option<&[u8]> {
        match self {
            Self::Binary(b) => Some(b),
            _ => None,
        }
    }

    /// Try to get the value as a 32-bit integer.
    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Self::I32(n) => Some(*n),
            _ => None,
        }
    }

    /// Try to get the value as a 64-bit integer. `I32` widens.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::I32(n) => Some(i64::from(*n)),
            Self::I64(n) => Some(*n),
            _ => None,
        }
    }

    /// Try to get the value as a 64-bit float. `F32` widens.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::F32(v) => Some(f64::from(*v)),
            Self::F64(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get the value as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get the value as a date.
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Date(d) => Some(*d),
            _ => None,
        }
    }

    /// Try to get the value as a date-time.
    pub fn as_date_time(&self) -> Option<&SdlDateTime> {
        match self {
            Self::DateTime(dt) => Some(dt),
            _ => None,
        }
    }

    /// Try to get the value as a duration in hundred-nanosecond ticks.
    pub fn as_duration_hnsecs(&self) -> Option<i64> {
        match self {
            Self::Duration(t) => Some(*t),
            _ => None,
        }
    }

    /// Builds a duration value from calendar-free components.
    ///
    /// # Examples
    ///
    /// ```
    /// use sdlite_core::Value;
    ///
    /// let v = Value::duration_from_units(2, 12, 14, 34, 0);
    /// assert_eq!(v.as_duration_hnsecs(), Some(2_168_740_000_000));
    /// ```
    pub fn duration_from_units(
        days: i64,
        hours: i64,
        minutes: i64,
        seconds: i64,
        hnsecs: i64,
    ) -> Self {
        let ticks =
            (((days * 24 + hours) * 60 + minutes) * 60 + seconds) * HNSECS_PER_SECOND + hnsecs;
        Self::Duration(ticks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    // ==================== Accessor tests ====================

    #[test]
    fn test_is_null() {
        assert!(Value::Null.is_null());
        assert!(!Value::Bool(false).is_null());
        assert!(!Value::I32(0).is_null());
    }

    #[test]
    fn test_as_str() {
        assert_eq!(Value::Text("hi".into()).as_str(), Some("hi"));
        assert_eq!(Value::I32(1).as_str(), None);
    }

    #[test]
    fn test_as_binary() {
        assert_eq!(
            Value::Binary(vec![1, 2, 3]).as_binary(),
            Some([1, 2, 3].as_slice())
        );
        assert_eq!(Value::Null.as_binary(), None);
    }

    #[test]
    fn test_integer_accessors() {
        assert_eq!(Value::I32(7).as_i32(), Some(7));
        assert_eq!(Value::I64(7).as_i32(), None);
        assert_eq!(Value::I32(7).as_i64(), Some(7));
        assert_eq!(Value::I64(i64::MAX).as_i64(), Some(i64::MAX));
    }

    #[test]
    fn test_float_accessors() {
        assert_eq!(Value::F64(1.5).as_f64(), Some(1.5));
        assert_eq!(Value::F32(0.5).as_f64(), Some(0.5));
        assert_eq!(Value::I32(1).as_f64(), None);
    }

    #[test]
    fn test_as_bool() {
        assert_eq!(Value::Bool(true).as_bool(), Some(true));
        assert_eq!(Value::Text("true".into()).as_bool(), None);
    }

    #[test]
    fn test_temporal_accessors() {
        let date = NaiveDate::from_ymd_opt(2015, 12, 6).unwrap();
        assert_eq!(Value::Date(date).as_date(), Some(date));

        let dt = SdlDateTime::new(
            date.and_time(NaiveTime::from_hms_opt(12, 0, 0).unwrap()),
            0,
            Timezone::Utc,
        );
        let value = Value::DateTime(dt.clone());
        assert_eq!(value.as_date_time(), Some(&dt));
        assert_eq!(value.as_date(), None);
    }

    #[test]
    fn test_duration_from_units() {
        assert_eq!(
            Value::duration_from_units(0, 0, 0, 1, 0).as_duration_hnsecs(),
            Some(HNSECS_PER_SECOND)
        );
        assert_eq!(
            Value::duration_from_units(0, 1, 30, 0, 5).as_duration_hnsecs(),
            Some((90 * 60) * HNSECS_PER_SECOND + 5)
        );
    }

    // ==================== Equality tests ====================

    #[test]
    fn test_value_equality() {
        assert_eq!(Value::Null, Value::Null);
        assert_eq!(Value::I32(1), Value::I32(1));
        assert_ne!(Value::I32(1), Value::I64(1));
        assert_ne!(Value::Null, Value::Decimal);
    }

    #[test]
    fn test_timezone_equality() {
        assert_eq!(Timezone::Offset(-150), Timezone::Offset(-150));
        assert_ne!(Timezone::Utc, Timezone::Named("UTC".into()));
    }

    #[test]
    fn test_value_clone() {
        let values = vec![
            Value::Null,
            Value::Text("x".into()),
            Value::Binary(vec![0xFF]),
            Value::I32(-1),
            Value::I64(2),
            Value::Decimal,
            Value::F32(0.5),
            Value::F64(2.5),
            Value::Bool(true),
            Value::Duration(42),
        ];
        for v in values {
            assert_eq!(v.clone(), v);
        }
    }
}
