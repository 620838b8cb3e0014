use anyhow::Result;

use crate::route_vector::RoutePoint;

/* Google's encoded polyline format: coordinates are scaled by 1e5 and stored
as deltas against the previous point, zig-zag encoded, then written as 5-bit
groups offset by 63 with 0x20 as the continuation bit.
https://developers.google.com/maps/documentation/utilities/polylinealgorithm
*/

const PRECISION: f64 = 1e5;
const BYTE_OFFSET: u8 = 63;
const CONTINUATION_BIT: i64 = 0x20;

fn decode_value(bytes: &[u8], pos: &mut usize) -> Result<i64> {
    let mut shift = 0;
    let mut result: i64 = 0;
    loop {
        let byte = match bytes.get(*pos) {
            Some(byte) => *byte,
            None => bail!("truncated polyline value at byte {}", *pos),
        };
        *pos += 1;
        if !(BYTE_OFFSET..=126).contains(&byte) {
            bail!("invalid polyline byte {:#04x} at offset {}", byte, *pos - 1);
        }
        let chunk = (byte - BYTE_OFFSET) as i64;
        result |= (chunk & 0x1f) << shift;
        if chunk & CONTINUATION_BIT == 0 {
            break;
        }
        shift += 5;
        // a single coordinate delta never needs more than 32 bits
        if shift > 30 {
            bail!("polyline value overflow at offset {}", *pos - 1);
        }
    }
    Ok(if result & 1 != 0 {
        !(result >> 1)
    } else {
        result >> 1
    })
}

pub fn decode_polyline(encoded: &str) -> Result<Vec<RoutePoint>> {
    let bytes = encoded.as_bytes();
    let mut pos = 0;
    let mut lat: i64 = 0;
    let mut lng: i64 = 0;
    let mut route_points = Vec::new();
    while pos < bytes.len() {
        lat += decode_value(bytes, &mut pos)?;
        lng += decode_value(bytes, &mut pos)?;
        route_points.push(RoutePoint {
            latitude: lat as f64 / PRECISION,
            longitude: lng as f64 / PRECISION,
        });
    }
    Ok(route_points)
}

fn encode_value(value: i64, out: &mut String) {
    let mut value = if value < 0 { !(value << 1) } else { value << 1 };
    while value >= CONTINUATION_BIT {
        out.push((((value & 0x1f) | CONTINUATION_BIT) as u8 + BYTE_OFFSET) as char);
        value >>= 5;
    }
    out.push((value as u8 + BYTE_OFFSET) as char);
}

pub fn encode_polyline(route_points: &[RoutePoint]) -> String {
    let mut out = String::new();
    let mut prev_lat: i64 = 0;
    let mut prev_lng: i64 = 0;
    for point in route_points {
        let lat = (point.latitude * PRECISION).round() as i64;
        let lng = (point.longitude * PRECISION).round() as i64;
        encode_value(lat - prev_lat, &mut out);
        encode_value(lng - prev_lng, &mut out);
        prev_lat = lat;
        prev_lng = lng;
    }
    out
}
