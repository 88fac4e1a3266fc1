//! Hex color token parsing.
//!
//! The particle field is a background decoration, so a malformed token is a
//! cosmetic problem rather than a fatal one: we log it and substitute the
//! default white triple instead of propagating an error.

/// Built-in neutral palette used when the host supplies an empty one.
pub const DEFAULT_PALETTE: [&str; 3] = ["#ffffff", "#ffffff", "#ffffff"];

const DEFAULT_COLOR: [f32; 3] = [1.0, 1.0, 1.0];

/// Converts a 3- or 6-digit hex token (optional leading `#`) into a
/// normalized `[r, g, b]` triple. Malformed input yields the default color.
pub fn parse_hex(token: &str) -> [f32; 3] {
    match try_parse_hex(token) {
        Some(rgb) => rgb,
        None => {
            tracing::warn!(token, "malformed color token; using default white");
            DEFAULT_COLOR
        }
    }
}

fn try_parse_hex(token: &str) -> Option<[f32; 3]> {
    let hex = token.trim().trim_start_matches('#');
    let expanded: String = match hex.len() {
        3 => hex.chars().flat_map(|c| [c, c]).collect(),
        6 => hex.to_string(),
        _ => return None,
    };
    let value = u32::from_str_radix(&expanded, 16).ok()?;
    let r = ((value >> 16) & 0xff) as f32 / 255.0;
    let g = ((value >> 8) & 0xff) as f32 / 255.0;
    let b = (value & 0xff) as f32 / 255.0;
    Some([r, g, b])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_six_digit_tokens() {
        assert_eq!(parse_hex("#ffffff"), [1.0, 1.0, 1.0]);
        assert_eq!(parse_hex("000000"), [0.0, 0.0, 0.0]);
        let [r, g, b] = parse_hex("#1a2b3c");
        assert!((r - 0x1a as f32 / 255.0).abs() < 1e-6);
        assert!((g - 0x2b as f32 / 255.0).abs() < 1e-6);
        assert!((b - 0x3c as f32 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn expands_three_digit_tokens() {
        assert_eq!(parse_hex("#fff"), [1.0, 1.0, 1.0]);
        assert_eq!(parse_hex("f00"), [1.0, 0.0, 0.0]);
    }

    #[test]
    fn tolerates_surrounding_whitespace() {
        assert_eq!(parse_hex("  #fff  "), [1.0, 1.0, 1.0]);
    }

    #[test]
    fn malformed_tokens_fall_back_to_white() {
        assert_eq!(parse_hex(""), DEFAULT_COLOR);
        assert_eq!(parse_hex("#zzz"), DEFAULT_COLOR);
        assert_eq!(parse_hex("#12345"), DEFAULT_COLOR);
        assert_eq!(parse_hex("not-a-color"), DEFAULT_COLOR);
    }
}
