//! Hex color parsing for the canvas background.

/// Parse a hex color string into RGBA bytes.
///
/// Accepts, with or without a leading `#`:
/// - `RGB` — 3-digit hex, alpha = 0xFF
/// - `RGBA` — 4-digit hex
/// - `RRGGBB` — 6-digit hex, alpha = 0xFF
/// - `RRGGBBAA` — 8-digit hex
pub fn parse_color(s: &str) -> Option<[u8; 4]> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    let hex = s.strip_prefix('#').unwrap_or(s);
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    match hex.len() {
        3 => {
            let r = expand_nibble(hex.as_bytes()[0])?;
            let g = expand_nibble(hex.as_bytes()[1])?;
            let b = expand_nibble(hex.as_bytes()[2])?;
            Some([r, g, b, 255])
        }
        4 => {
            let r = expand_nibble(hex.as_bytes()[0])?;
            let g = expand_nibble(hex.as_bytes()[1])?;
            let b = expand_nibble(hex.as_bytes()[2])?;
            let a = expand_nibble(hex.as_bytes()[3])?;
            Some([r, g, b, a])
        }
        6 => {
            let r = parse_byte(&hex[0..2])?;
            let g = parse_byte(&hex[2..4])?;
            let b = parse_byte(&hex[4..6])?;
            Some([r, g, b, 255])
        }
        8 => {
            let r = parse_byte(&hex[0..2])?;
            let g = parse_byte(&hex[2..4])?;
            let b = parse_byte(&hex[4..6])?;
            let a = parse_byte(&hex[6..8])?;
            Some([r, g, b, a])
        }
        _ => None,
    }
}

/// Expand a single hex nibble: 'f' → 0xFF, 'a' → 0xAA.
fn expand_nibble(ch: u8) -> Option<u8> {
    let n = hex_val(ch)?;
    Some(n << 4 | n)
}

fn hex_val(ch: u8) -> Option<u8> {
    match ch {
        b'0'..=b'9' => Some(ch - b'0'),
        b'a'..=b'f' => Some(ch - b'a' + 10),
        b'A'..=b'F' => Some(ch - b'A' + 10),
        _ => None,
    }
}

fn parse_byte(s: &str) -> Option<u8> {
    let hi = hex_val(s.as_bytes()[0])?;
    let lo = hex_val(s.as_bytes()[1])?;
    Some(hi << 4 | lo)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_six_digit_hex() {
        assert_eq!(parse_color("#ffffff"), Some([255, 255, 255, 255]));
        assert_eq!(parse_color("#1a2b3c"), Some([0x1a, 0x2b, 0x3c, 255]));
        assert_eq!(parse_color("1A2B3C"), Some([0x1a, 0x2b, 0x3c, 255]));
    }

    #[test]
    fn test_short_hex_expands_nibbles() {
        assert_eq!(parse_color("#fff"), Some([255, 255, 255, 255]));
        assert_eq!(parse_color("#a5c"), Some([0xaa, 0x55, 0xcc, 255]));
        assert_eq!(parse_color("#a5c8"), Some([0xaa, 0x55, 0xcc, 0x88]));
    }

    #[test]
    fn test_eight_digit_hex_carries_alpha() {
        assert_eq!(parse_color("#00000080"), Some([0, 0, 0, 0x80]));
    }

    #[test]
    fn test_rejects_garbage() {
        assert_eq!(parse_color(""), None);
        assert_eq!(parse_color("#"), None);
        assert_eq!(parse_color("#ggg"), None);
        assert_eq!(parse_color("#fffff"), None);
        assert_eq!(parse_color("red#"), None);
    }
}
