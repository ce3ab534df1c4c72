//! Console formatting for SMC readings

use std::fmt::Write;

/// Render bytes as `[ 0A FF 00 ]`: two uppercase hex digits per byte, each
/// followed by a space, between `[ ` and `]`.
pub fn render_hex(data: &[u8]) -> String {
    let mut out = String::with_capacity(3 + data.len() * 3);
    out.push_str("[ ");
    for byte in data {
        let _ = write!(out, "{:02X} ", byte);
    }
    out.push(']');
    out
}

pub fn signature_line(signature: u64) -> String {
    format!("Signature: 0x{:x}", signature)
}

pub fn reading_line(name: &str, data: &[u8]) -> String {
    format!("{}: {}", name, render_hex(data))
}
