// rrhfoem-rs/rrhfoem/src/utils/hex.rs

//! Hexadecimal helpers used for UID/key parsing and debug output.

/// Convert a byte slice to a lowercase hex string without separators.
///
/// Example: `&[0xde, 0xad]` -> `"dead"`
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    use std::fmt::Write;
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        // write! never fails writing to a String
        let _ = write!(&mut s, "{:02x}", b);
    }
    s
}

/// Convert a byte slice to a lowercase hex string with a single space
/// between each byte.
pub fn bytes_to_hex_spaced(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse a hex string into bytes. Accepts optional ASCII whitespace and
/// either case. Returns an error message string on parse failure.
pub fn parse_hex(s: &str) -> Result<Vec<u8>, String> {
    let cleaned: Vec<u8> = s.bytes().filter(|b| !b.is_ascii_whitespace()).collect();
    if cleaned.len() % 2 != 0 {
        return Err("hex string has odd length".to_string());
    }

    cleaned
        .chunks(2)
        .map(|pair| {
            let pair = std::str::from_utf8(pair).map_err(|_| "non-ascii hex input".to_string())?;
            u8::from_str_radix(pair, 16).map_err(|e| format!("invalid hex pair '{}': {}", pair, e))
        })
        .collect()
}
