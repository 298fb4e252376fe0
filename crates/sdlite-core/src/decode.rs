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

//! The value decoder: converts a scalar token's text into a typed [`Value`].
//!
//! The lexer only classifies and delimits; this module interprets the token
//! text: escape sequences, base64 payloads, number suffixes, temporal
//! components, timezones. String and binary payloads accumulate in the
//! caller's pool appenders and are extracted as independent owned buffers.

use crate::error::{SdlError, SdlResult};
use crate::lex::{Token, TokenKind};
use crate::pool::{Appender, StringAppender};
use crate::value::{SdlDateTime, Timezone, Value, HNSECS_PER_SECOND};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Decodes a scalar token into a typed [`Value`].
///
/// Tokens whose kind is not a scalar decode to [`Value::Null`]. Out-of-range
/// temporal components and undecodable payloads are
/// [`SdlErrorKind::Value`](crate::SdlErrorKind::Value) errors at the token's
/// location (without a file name; the parser attaches it).
///
/// # Examples
///
/// ```
/// use sdlite_core::pool::{Appender, StringAppender};
/// use sdlite_core::{decode_value, lex, Value};
///
/// let token = lex("42", "inline").next().unwrap();
/// let mut strings = StringAppender::new();
/// let mut bytes = Appender::new();
/// let value = decode_value(&token, &mut strings, &mut bytes).unwrap();
/// assert_eq!(value, Value::I32(42));
/// ```
pub fn decode_value(
    token: &Token<'_>,
    strings: &mut StringAppender,
    bytes: &mut Appender<u8>,
) -> SdlResult<Value> {
    match token.kind {
        TokenKind::Null => Ok(Value::Null),
        TokenKind::Boolean => Ok(Value::Bool(decode_boolean(token.text))),
        TokenKind::Text => decode_text(token, strings),
        TokenKind::Binary => decode_binary(token, bytes),
        TokenKind::Number => decode_number(token),
        TokenKind::Date => Ok(Value::Date(decode_date(token.text, token)?)),
        TokenKind::Duration => decode_duration(token),
        TokenKind::DateTime => decode_date_time(token),
        _ => Ok(Value::Null),
    }
}

fn decode_boolean(text: &str) -> bool {
    match text {
        "on" => true,
        "off" => false,
        other => other.starts_with('t'),
    }
}

fn decode_text(token: &Token<'_>, strings: &mut StringAppender) -> SdlResult<Value> {
    let body = &token.text[1..token.text.len() - 1];
    if token.text.starts_with('`') {
        strings.put_str(body);
        return Ok(Value::Text(strings.extract_string()));
    }

    let bytes = body.as_bytes();
    let mut run_start = 0;
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] != b'\\' {
            i += 1;
            continue;
        }
        strings.put_str(&body[run_start..i]);
        i += 1;
        match bytes.get(i) {
            Some(b'"') => strings.put('"'),
            Some(b'\\') => strings.put('\\'),
            Some(b'n') => strings.put('\n'),
            Some(b'r') => strings.put('\r'),
            Some(b't') => strings.put('\t'),
            Some(b'\r') | Some(b'\n') => {
                // Continuation splice: drop the EOL and the run of
                // horizontal whitespace that follows it.
                if bytes[i] == b'\r' && bytes.get(i + 1) == Some(&b'\n') {
                    i += 1;
                }
                while matches!(bytes.get(i + 1), Some(b' ') | Some(b'\t')) {
                    i += 1;
                }
                i += 1;
                run_start = i;
                continue;
            }
            _ => {
                return Err(SdlError::value(
                    "invalid escape sequence in string literal",
                    token.location,
                ))
            }
        }
        i += 1;
        run_start = i;
    }
    strings.put_str(&body[run_start..]);
    Ok(Value::Text(strings.extract_string()))
}

fn decode_binary(token: &Token<'_>, bytes: &mut Appender<u8>) -> SdlResult<Value> {
    let body = &token.text[1..token.text.len() - 1];
    let mut compact = String::with_capacity(body.len());
    for piece in body.split_ascii_whitespace() {
        compact.push_str(piece);
    }
    let decoded = STANDARD
        .decode(compact.as_bytes())
        .map_err(|e| SdlError::value(format!("invalid base64 payload: {e}"), token.location))?;
    bytes.put_slice(&decoded);
    Ok(Value::Binary(bytes.extract_array()))
}

fn decode_number(token: &Token<'_>) -> SdlResult<Value> {
    let text = token.text;
    if !text.contains('.') {
        let digits_end = text
            .find(|c: char| !c.is_ascii_digit() && c != '-')
            .unwrap_or(text.len());
        let (digits, suffix) = text.split_at(digits_end);
        let n: i64 = digits
            .parse()
            .map_err(|_| SdlError::value("integer out of range", token.location))?;
        return Ok(match suffix.as_bytes().first() {
            Some(b'l') | Some(b'L') => Value::I64(n),
            Some(b'd') | Some(b'D') => Value::F64(n as f64),
            Some(b'f') | Some(b'F') => Value::F32(n as f32),
            _ => Value::I32(n.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32),
        });
    }

    if text.len() >= 2 && text[text.len() - 2..].eq_ignore_ascii_case("bd") {
        // Decimal placeholder: recognized but not represented yet.
        return Ok(Value::Null);
    }
    let err = |_| SdlError::value("malformed floating-point literal", token.location);
    if text.ends_with('f') || text.ends_with('F') {
        Ok(Value::F32(text[..text.len() - 1].parse().map_err(err)?))
    } else if text.ends_with('d') || text.ends_with('D') {
        Ok(Value::F64(text[..text.len() - 1].parse().map_err(err)?))
    } else {
        Ok(Value::F64(text.parse().map_err(err)?))
    }
}

fn decode_date(text: &str, token: &Token<'_>) -> SdlResult<NaiveDate> {
    let err = || SdlError::value("date component out of range", token.location);
    let mut parts = text.split('/');
    let year: i32 = parts.next().ok_or_else(err)?.parse().map_err(|_| err())?;
    let month: u32 = parts.next().ok_or_else(err)?.parse().map_err(|_| err())?;
    let day: u32 = parts.next().ok_or_else(err)?.parse().map_err(|_| err())?;
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(err)
}

/// Parses `HH:MM[:SS[.frac]]` segments shared by durations and times of day.
fn decode_time_segments(text: &str, token: &Token<'_>) -> SdlResult<(i64, i64, i64, u32)> {
    let err = || SdlError::value("malformed time component", token.location);
    let mut parts = text.split(':');
    let hours: i64 = parts.next().ok_or_else(err)?.parse().map_err(|_| err())?;
    let minutes: i64 = parts.next().ok_or_else(err)?.parse().map_err(|_| err())?;
    let (seconds, fraction) = match parts.next() {
        None => (0, 0),
        Some(s) => match s.split_once('.') {
            Some((sec, frac)) => (sec.parse().map_err(|_| err())?, decode_fraction(frac)),
            None => (s.parse().map_err(|_| err())?, 0),
        },
    };
    Ok((hours, minutes, seconds, fraction))
}

/// Right-pads the fraction digits to 7 and converts to hnsecs.
fn decode_fraction(frac: &str) -> u32 {
    let mut value = 0u32;
    let mut digits = 0;
    for b in frac.bytes().take(7) {
        value = value * 10 + u32::from(b - b'0');
        digits += 1;
    }
    while digits < 7 {
        value *= 10;
        digits += 1;
    }
    value
}

fn decode_duration(token: &Token<'_>) -> SdlResult<Value> {
    let mut text = token.text;
    let negative = text.starts_with('-');
    if negative {
        text = &text[1..];
    }
    let mut days: i64 = 0;
    if let Some(marker) = text.find('d') {
        days = text[..marker]
            .parse()
            .map_err(|_| SdlError::value("malformed time component", token.location))?;
        text = &text[marker + 2..];
    }
    let (hours, minutes, seconds, fraction) = decode_time_segments(text, token)?;
    let ticks = ((((days as i128 * 24 + hours as i128) * 60 + minutes as i128) * 60
        + seconds as i128)
        * HNSECS_PER_SECOND as i128)
        + fraction as i128;
    let ticks = if negative { -ticks } else { ticks };
    let ticks = i64::try_from(ticks)
        .map_err(|_| SdlError::value("duration out of range", token.location))?;
    Ok(Value::Duration(ticks))
}

fn decode_date_time(token: &Token<'_>) -> SdlResult<Value> {
    let err = || SdlError::value("time of day out of range", token.location);
    let (date_part, rest) = token
        .text
        .split_once(' ')
        .ok_or_else(|| SdlError::value("malformed time component", token.location))?;
    let date = decode_date(date_part, token)?;

    let (time_part, timezone_part) = match rest.find('-') {
        Some(i) => (&rest[..i], Some(&rest[i + 1..])),
        None => (rest, None),
    };
    let (hours, minutes, seconds, fraction) = decode_time_segments(time_part, token)?;
    let hours = u32::try_from(hours).map_err(|_| err())?;
    let minutes = u32::try_from(minutes).map_err(|_| err())?;
    let seconds = u32::try_from(seconds).map_err(|_| err())?;
    let time = NaiveTime::from_hms_opt(hours, minutes, seconds).ok_or_else(err)?;

    let timezone = match timezone_part {
        None => Timezone::Local,
        Some(tz) => decode_timezone(tz, token)?,
    };
    Ok(Value::DateTime(SdlDateTime::new(
        NaiveDateTime::new(date, time),
        fraction,
        timezone,
    )))
}

fn decode_timezone(text: &str, token: &Token<'_>) -> SdlResult<Timezone> {
    let err = || SdlError::value("malformed timezone offset", token.location);
    let (name, offset) = text.split_at(3);
    if offset.is_empty() {
        return Ok(match name {
            "UTC" | "GMT" => Timezone::Utc,
            other => Timezone::Named(other.to_string()),
        });
    }
    let sign: i32 = if offset.starts_with('-') { -1 } else { 1 };
    let body = &offset[1..];
    let (hours, minutes): (i32, i32) = match body.split_once(':') {
        Some((h, m)) => (
            h.parse().map_err(|_| err())?,
            m.parse().map_err(|_| err())?,
        ),
        None => (body.parse().map_err(|_| err())?, 0),
    };
    Ok(Timezone::Offset(sign * (hours * 60 + minutes)))
}
