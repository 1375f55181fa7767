//! Color predicates for confetti classification.
//!
//! The logo assets this tool was written for carry two kinds of decorative
//! noise: gold confetti dots and pink/salmon paint splashes. Both are
//! classified with plain RGB box tests whose thresholds were tuned against
//! one specific asset family. The thresholds live here as named constants so
//! the classifier's behavior can be audited without re-deriving them from
//! pixel dumps.

use image::Rgba;

/// Pixels below this alpha are treated as effectively transparent and are
/// never classified as confetti.
pub const CONFETTI_MIN_ALPHA: u8 = 100;

/// Gold: lower bound on the red channel (exclusive).
pub const GOLD_MIN_RED: u8 = 180;
/// Gold: open interval for the green channel.
pub const GOLD_GREEN_RANGE: (u8, u8) = (100, 220);
/// Gold: upper bound on the blue channel (exclusive).
pub const GOLD_MAX_BLUE: u8 = 100;
/// Gold: minimum red-minus-blue separation (exclusive).
pub const GOLD_MIN_WARMTH: i32 = 80;

/// Pink: lower bound on the red channel (exclusive).
pub const PINK_MIN_RED: u8 = 200;
/// Pink: open interval for the green channel.
pub const PINK_GREEN_RANGE: (u8, u8) = (100, 180);
/// Pink: open interval for the blue channel.
pub const PINK_BLUE_RANGE: (u8, u8) = (80, 160);

/// Dark text: alpha must be strictly above this value.
pub const DARK_TEXT_MIN_ALPHA: u8 = 100;
/// Dark text: every color channel must be strictly below this value.
pub const DARK_TEXT_MAX_CHANNEL: u8 = 100;

/// Whether a pixel is gold confetti: high red, medium green, low blue.
#[must_use]
pub fn is_gold(px: Rgba<u8>) -> bool {
    let [r, g, b, a] = px.0;
    if a < CONFETTI_MIN_ALPHA {
        return false;
    }
    r > GOLD_MIN_RED
        && g > GOLD_GREEN_RANGE.0
        && g < GOLD_GREEN_RANGE.1
        && b < GOLD_MAX_BLUE
        && i32::from(r) - i32::from(b) > GOLD_MIN_WARMTH
}

/// Whether a pixel is a pink/salmon paint splash: high red, medium green,
/// medium-low blue.
#[must_use]
pub fn is_pink(px: Rgba<u8>) -> bool {
    let [r, g, b, a] = px.0;
    if a < CONFETTI_MIN_ALPHA {
        return false;
    }
    r > PINK_MIN_RED
        && g > PINK_GREEN_RANGE.0
        && g < PINK_GREEN_RANGE.1
        && b > PINK_BLUE_RANGE.0
        && b < PINK_BLUE_RANGE.1
}

/// Whether a pixel belongs to the charcoal-colored logo text.
///
/// Used as a guard: gold pixels touching dark text are assumed to be part of
/// a glyph (serif, flourish) rather than free-floating confetti.
#[must_use]
pub fn is_dark_text(px: Rgba<u8>) -> bool {
    let [r, g, b, a] = px.0;
    a > DARK_TEXT_MIN_ALPHA
        && r < DARK_TEXT_MAX_CHANNEL
        && g < DARK_TEXT_MAX_CHANNEL
        && b < DARK_TEXT_MAX_CHANNEL
}

#[cfg(test)]
mod tests {
    use super::*;

    fn px(r: u8, g: u8, b: u8, a: u8) -> Rgba<u8> {
        Rgba([r, g, b, a])
    }

    #[test]
    fn gold_matches_typical_confetti_color() {
        assert!(is_gold(px(200, 150, 50, 255)));
        assert!(is_gold(px(220, 180, 30, 255)));
    }

    #[test]
    fn gold_alpha_threshold_is_inclusive_at_100() {
        assert!(!is_gold(px(200, 150, 50, 99)));
        assert!(is_gold(px(200, 150, 50, 100)));
    }

    #[test]
    fn gold_channel_bounds_are_exclusive() {
        // red must exceed 180
        assert!(!is_gold(px(180, 150, 50, 255)));
        assert!(is_gold(px(181, 150, 50, 255)));
        // green strictly inside (100, 220)
        assert!(!is_gold(px(200, 100, 50, 255)));
        assert!(!is_gold(px(200, 220, 50, 255)));
        assert!(is_gold(px(200, 101, 50, 255)));
        assert!(is_gold(px(200, 219, 50, 255)));
        // blue must stay below 100
        assert!(!is_gold(px(200, 150, 100, 255)));
        assert!(is_gold(px(200, 150, 99, 255)));
    }

    #[test]
    fn pink_matches_typical_splash_color() {
        assert!(is_pink(px(230, 140, 120, 255)));
        assert!(!is_pink(px(200, 140, 120, 255))); // red bound is exclusive
        assert!(!is_pink(px(230, 180, 120, 255)));
        assert!(!is_pink(px(230, 140, 160, 255)));
        assert!(!is_pink(px(230, 140, 120, 50)));
    }

    #[test]
    fn dark_text_requires_alpha_strictly_above_100() {
        assert!(!is_dark_text(px(50, 50, 50, 100)));
        assert!(is_dark_text(px(50, 50, 50, 101)));
        assert!(!is_dark_text(px(100, 50, 50, 255)));
    }

    #[test]
    fn transparent_black_matches_no_predicate() {
        let erased = px(0, 0, 0, 0);
        assert!(!is_gold(erased));
        assert!(!is_pink(erased));
        assert!(!is_dark_text(erased));
    }
}
