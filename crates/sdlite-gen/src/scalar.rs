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

//! Scalar rendering: strings, floats, binary, and temporal values.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::{Datelike, NaiveDate, Timelike};
use sdlite_core::{SdlDateTime, Timezone, HNSECS_PER_SECOND};
use std::io::{self, Write};

/// Writes `text` with the SDLang escape table applied (`"`, `\`, tab,
/// newline, carriage return). The surrounding quotes are the caller's.
///
/// # Examples
///
/// ```
/// let mut out = Vec::new();
/// sdlite_gen::escape_sdl_string(&mut out, "foo\"bar").unwrap();
/// assert_eq!(out, b"foo\\\"bar");
/// ```
pub fn escape_sdl_string<W: Write>(sink: &mut W, text: &str) -> io::Result<()> {
    let mut start = 0;
    for (i, c) in text.char_indices() {
        let escaped: &[u8] = match c {
            '"' => b"\\\"",
            '\\' => b"\\\\",
            '\t' => b"\\t",
            '\n' => b"\\n",
            '\r' => b"\\r",
            _ => continue,
        };
        sink.write_all(text[start..i].as_bytes())?;
        sink.write_all(escaped)?;
        start = i + c.len_utf8();
    }
    sink.write_all(text[start..].as_bytes())
}

/// Floating-point types the generator can render. Implemented for `f32`
/// and `f64`; each formats through its own shortest-round-trip `Display`
/// so the printed digits parse back to the identical value.
pub trait SdlFloat: Copy {
    #[doc(hidden)]
    fn write_decimal<W: Write>(self, sink: &mut W) -> io::Result<()>;
}

macro_rules! impl_sdl_float {
    ($ty:ty) => {
        impl SdlFloat for $ty {
            fn write_decimal<W: Write>(self, sink: &mut W) -> io::Result<()> {
                // NaN and infinities have no SDLang syntax; zero keeps the
                // grammar's mandatory fractional digit.
                if !self.is_finite() || self == 0.0 {
                    return sink.write_all(b"0.0");
                }
                if self.fract() == 0.0 {
                    return write!(sink, "{:.1}", self);
                }
                write!(sink, "{}", self)
            }
        }
    };
}

impl_sdl_float!(f32);
impl_sdl_float!(f64);

/// Writes a float in SDLang decimal form: always at least one fractional
/// digit, no redundant trailing zeros, never exponent notation.
///
/// # Examples
///
/// ```
/// let mut out = Vec::new();
/// sdlite_gen::write_float(&mut out, 1.0_f64).unwrap();
/// assert_eq!(out, b"1.0");
/// ```
pub fn write_float<W: Write, F: SdlFloat>(sink: &mut W, value: F) -> io::Result<()> {
    value.write_decimal(sink)
}

pub(crate) fn write_binary<W: Write>(sink: &mut W, data: &[u8]) -> io::Result<()> {
    sink.write_all(b"[")?;
    sink.write_all(STANDARD.encode(data).as_bytes())?;
    sink.write_all(b"]")
}

pub(crate) fn write_date<W: Write>(sink: &mut W, date: &NaiveDate) -> io::Result<()> {
    write!(
        sink,
        "{:04}/{:02}/{:02}",
        date.year(),
        date.month(),
        date.day()
    )
}

/// `0` prints nothing; whole milliseconds print 3 digits; anything finer
/// prints the full 7-digit hnsec field.
fn write_fraction<W: Write>(sink: &mut W, hnsecs: u32) -> io::Result<()> {
    if hnsecs == 0 {
        Ok(())
    } else if hnsecs % 10_000 == 0 {
        write!(sink, ".{:03}", hnsecs / 10_000)
    } else {
        write!(sink, ".{:07}", hnsecs)
    }
}

/// `[Dd:]HH:MM[:SS[.frac]]`; days are omitted when zero, seconds and
/// fraction when both are zero.
pub(crate) fn write_duration<W: Write>(sink: &mut W, hnsecs: i64) -> io::Result<()> {
    let mut ticks = i128::from(hnsecs);
    if ticks < 0 {
        sink.write_all(b"-")?;
        ticks = -ticks;
    }
    let fraction = (ticks % i128::from(HNSECS_PER_SECOND)) as u32;
    let total_seconds = ticks / i128::from(HNSECS_PER_SECOND);
    let seconds = (total_seconds % 60) as u32;
    let minutes = (total_seconds / 60 % 60) as u32;
    let hours = (total_seconds / 3600 % 24) as u32;
    let days = total_seconds / 86_400;

    if days > 0 {
        write!(sink, "{}d:", days)?;
    }
    write!(sink, "{:02}:{:02}", hours, minutes)?;
    if seconds != 0 || fraction != 0 {
        write!(sink, ":{:02}", seconds)?;
        write_fraction(sink, fraction)?;
    }
    Ok(())
}

/// `YYYY/MM/DD HH:MM:SS[.frac]` plus the timezone suffix, if any.
pub(crate) fn write_date_time<W: Write>(sink: &mut W, value: &SdlDateTime) -> io::Result<()> {
    write_date(sink, &value.date_time.date())?;
    let time = value.date_time.time();
    write!(
        sink,
        " {:02}:{:02}:{:02}",
        time.hour(),
        time.minute(),
        time.second()
    )?;
    write_fraction(sink, value.fractional_hnsecs)?;
    match &value.timezone {
        Timezone::Local => Ok(()),
        // SDLang spells the singleton -UTC; fixed offsets use -GMT.
        Timezone::Utc => sink.write_all(b"-UTC"),
        Timezone::Offset(minutes) => {
            let sign = if *minutes < 0 { '-' } else { '+' };
            let magnitude = minutes.unsigned_abs();
            write!(sink, "-GMT{}{:02}:{:02}", sign, magnitude / 60, magnitude % 60)
        }
        Timezone::Named(name) => write!(sink, "-{}", name),
    }
}
