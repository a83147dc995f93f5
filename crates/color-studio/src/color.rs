//! Hex color strings as the studio stores them.

use rand::Rng;
use studio_engine::paint::Color;

/// Exclusive upper bound of random colors, `0xFFFFFF`.
const RANDOM_LIMIT: u32 = 16_777_215;

/// Decodes `#RGB` or `#RRGGBB` (any case) into 8-bit channels.
///
/// Anything else, including the shorter strings a random draw can produce,
/// yields `None`.
pub fn parse_hex(s: &str) -> Option<[u8; 3]> {
    let digits = s.strip_prefix('#')?;
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    match digits.len() {
        3 => {
            let mut out = [0u8; 3];
            for (o, c) in out.iter_mut().zip(digits.chars()) {
                let v = c.to_digit(16)? as u8;
                *o = v * 17;
            }
            Some(out)
        }
        6 => {
            let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
            Some([channel(0)?, channel(2)?, channel(4)?])
        }
        _ => None,
    }
}

/// Opaque engine color for a decodable hex string.
pub fn to_color(s: &str) -> Option<Color> {
    parse_hex(s).map(|[r, g, b]| Color::from_rgb_u8(r, g, b))
}

/// Draws a color in `[0, 0xFFFFFF)` and formats it as `#` plus lowercase
/// hex digits, without zero padding.
pub fn random_hex(rng: &mut impl Rng) -> String {
    format!("#{:x}", rng.random_range(0..RANDOM_LIMIT))
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn parses_long_form_any_case() {
        assert_eq!(parse_hex("#abcdef"), Some([0xab, 0xcd, 0xef]));
        assert_eq!(parse_hex("#FF0000"), Some([0xff, 0, 0]));
    }

    #[test]
    fn parses_short_form() {
        assert_eq!(parse_hex("#f0a"), Some([0xff, 0x00, 0xaa]));
    }

    #[test]
    fn rejects_other_shapes() {
        for s in ["", "#", "abcdef", "#abcd", "#12345", "#gggggg", "#1234567", "#+1f"] {
            assert_eq!(parse_hex(s), None, "{s}");
        }
    }

    #[test]
    fn random_hex_is_unpadded_lowercase() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..2000 {
            let s = random_hex(&mut rng);
            let digits = s.strip_prefix('#').expect("leading #");
            assert!((1..=6).contains(&digits.len()), "{s}");
            assert!(digits.bytes().all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b)), "{s}");
            assert!(!digits.starts_with('0') || digits == "0", "{s}");
        }
    }
}
