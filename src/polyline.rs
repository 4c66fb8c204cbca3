// ABOUTME: Encoded polyline codec for activity routes
// ABOUTME: Signed, delta-encoded 5-bit chunks offset by 63 at 1e-5 degree precision
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Encoded polyline codec
//!
//! Each coordinate is scaled by 1e5, rounded, and stored as the difference
//! from the previous point. Values are zigzag-folded so the sign lives in the
//! lowest bit, then split into 5-bit chunks, least significant first. Every
//! chunk but the last carries the `0x20` continuation bit, and each chunk is
//! offset by 63 so the result is printable ASCII.

use crate::models::LatLng;
use thiserror::Error;

/// Coordinate scale factor
const PRECISION: f64 = 1e5;

/// Offset added to each chunk to land in printable ASCII
const CHUNK_OFFSET: u8 = 63;

/// Continuation bit of a chunk
const CONTINUATION: i64 = 0x20;

/// Payload bits of a chunk
const CHUNK_MASK: i64 = 0x1f;

/// Largest shift that keeps a decoded value inside 32 bits
const MAX_SHIFT: u32 = 30;

/// Reasons an encoded polyline cannot be decoded
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolylineError {
    /// A byte outside the printable chunk range `?`..=`~`
    #[error("invalid byte 0x{byte:02x} at offset {offset}")]
    InvalidByte {
        /// Byte position in the input
        offset: usize,
        /// Offending byte
        byte: u8,
    },
    /// Input ended while a value still had its continuation bit set
    #[error("value starting at offset {offset} is truncated")]
    Truncated {
        /// Byte position where the unfinished value starts
        offset: usize,
    },
    /// A value needed more chunks than a coordinate delta can hold
    #[error("value starting at offset {offset} overflows")]
    Overflow {
        /// Byte position where the oversized value starts
        offset: usize,
    },
    /// A latitude delta with no longitude delta after it
    #[error("latitude at offset {offset} has no matching longitude")]
    MissingLongitude {
        /// Byte position where the longitude was expected
        offset: usize,
    },
}

/// Decode an encoded polyline into ordered coordinate pairs
///
/// An empty string decodes to an empty path.
///
/// # Errors
///
/// Returns [`PolylineError`] if the input has bytes outside the chunk range,
/// ends mid-value, holds a value too large for a coordinate, or carries an
/// odd number of values.
///
/// # Examples
///
/// ```rust
/// use activity_map::polyline::decode;
///
/// let path = decode("_p~iF~ps|U_ulLnnqC_mqNvxq`@").unwrap();
/// assert_eq!(path.len(), 3);
/// assert!((path[0].lat - 38.5).abs() < 1e-9);
/// assert!((path[0].lng + 120.2).abs() < 1e-9);
/// ```
pub fn decode(encoded: &str) -> Result<Vec<LatLng>, PolylineError> {
    let bytes = encoded.as_bytes();
    let mut points = Vec::new();
    let mut index = 0;
    let mut lat: i64 = 0;
    let mut lng: i64 = 0;

    while index < bytes.len() {
        let (lat_delta, lng_start) = decode_value(bytes, index)?;
        if lng_start >= bytes.len() {
            return Err(PolylineError::MissingLongitude { offset: lng_start });
        }
        let (lng_delta, next) = decode_value(bytes, lng_start)?;

        lat += lat_delta;
        lng += lng_delta;
        points.push(LatLng::new(lat as f64 / PRECISION, lng as f64 / PRECISION));
        index = next;
    }

    Ok(points)
}

/// Encode coordinate pairs into a polyline string
///
/// Coordinates are rounded to five decimal places.
#[must_use]
pub fn encode(points: &[LatLng]) -> String {
    let mut encoded = String::new();
    let mut prev_lat: i64 = 0;
    let mut prev_lng: i64 = 0;

    for point in points {
        let lat = scale(point.lat);
        let lng = scale(point.lng);
        encode_value(lat - prev_lat, &mut encoded);
        encode_value(lng - prev_lng, &mut encoded);
        prev_lat = lat;
        prev_lng = lng;
    }

    encoded
}

/// Read one zigzag value starting at `start`, returning it with the next offset
fn decode_value(bytes: &[u8], start: usize) -> Result<(i64, usize), PolylineError> {
    let mut result: i64 = 0;
    let mut shift: u32 = 0;
    let mut index = start;

    loop {
        let Some(&byte) = bytes.get(index) else {
            return Err(PolylineError::Truncated { offset: start });
        };
        if !(CHUNK_OFFSET..=b'~').contains(&byte) {
            return Err(PolylineError::InvalidByte {
                offset: index,
                byte,
            });
        }
        if shift > MAX_SHIFT {
            return Err(PolylineError::Overflow { offset: start });
        }

        let chunk = i64::from(byte - CHUNK_OFFSET);
        result |= (chunk & CHUNK_MASK) << shift;
        shift += 5;
        index += 1;

        if chunk & CONTINUATION == 0 {
            break;
        }
    }

    let value = if result & 1 == 1 {
        !(result >> 1)
    } else {
        result >> 1
    };
    Ok((value, index))
}

/// Append one zigzag value as chunks
fn encode_value(value: i64, out: &mut String) {
    let mut folded = if value < 0 {
        !(value << 1)
    } else {
        value << 1
    };

    while folded >= CONTINUATION {
        out.push(chunk_char((folded & CHUNK_MASK) | CONTINUATION));
        folded >>= 5;
    }
    out.push(chunk_char(folded));
}

/// Printable character for a chunk in `0..64`
fn chunk_char(chunk: i64) -> char {
    char::from(chunk as u8 + CHUNK_OFFSET)
}

/// Degrees to fixed-point
fn scale(degrees: f64) -> i64 {
    (degrees * PRECISION).round() as i64
}
