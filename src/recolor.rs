//! Gold text recoloring.
//!
//! The logo text itself is gold-toned (roughly RGB 160, 120-140, 40-80).
//! These transforms produce lighter or hue-shifted variants of it while
//! leaving every non-gold pixel untouched. The gold-text predicate here is
//! deliberately looser than the confetti one in [`crate::classify`]: it has
//! to catch the full tonal range of the lettering, not just bright dots.

use image::RgbaImage;

/// Pixels below this alpha are skipped entirely.
pub const TEXT_MIN_ALPHA: u8 = 50;

/// Gold text: lower bound on red (exclusive).
pub const TEXT_MIN_RED: u8 = 100;
/// Gold text: lower bound on green (exclusive).
pub const TEXT_MIN_GREEN: u8 = 60;
/// Gold text: upper bound on blue (exclusive).
pub const TEXT_MAX_BLUE: u8 = 150;
/// Gold text: minimum red-minus-blue separation (exclusive).
pub const TEXT_MIN_WARMTH: i32 = 50;

/// How a recoloring pass transforms matched gold pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RecolorMode {
    /// Multiply all channels by `factor`, optionally adding `blue_boost` to
    /// the blue channel for a more pastel result.
    Brighten {
        /// Brightness multiplier; `1.0` is a no-op, `1.3` is 30% brighter.
        factor: f64,
        /// Added to the blue channel after scaling.
        blue_boost: f64,
    },
    /// Blend each channel toward a target gold, modulating the target by the
    /// pixel's luminance so tonal variation in the lettering survives.
    ShiftToTarget {
        /// Target gold color.
        target: [u8; 3],
        /// Blend weight toward the target; `0.7` by default at the CLI.
        blend: f64,
    },
}

/// Whether a pixel belongs to the gold lettering.
#[must_use]
pub fn is_gold_text(r: u8, g: u8, b: u8, a: u8) -> bool {
    a >= TEXT_MIN_ALPHA
        && r > TEXT_MIN_RED
        && g > TEXT_MIN_GREEN
        && b < TEXT_MAX_BLUE
        && i32::from(r) - i32::from(b) > TEXT_MIN_WARMTH
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn channel(value: f64) -> u8 {
    value.clamp(0.0, 255.0) as u8
}

/// Recolor gold text pixels in-place according to `mode`.
///
/// Returns the number of adjusted pixels. Alpha is always preserved.
pub fn recolor_gold(image: &mut RgbaImage, mode: RecolorMode) -> u64 {
    match mode {
        RecolorMode::Brighten { factor, blue_boost } => lighten_gold(image, factor, blue_boost),
        RecolorMode::ShiftToTarget { target, blend } => shift_gold(image, target, blend),
    }
}

/// Brighten gold text pixels by a multiplicative factor.
///
/// Each channel is scaled by `factor` and truncated, with `blue_boost` added
/// to blue before truncation; results saturate at 255.
pub fn lighten_gold(image: &mut RgbaImage, factor: f64, blue_boost: f64) -> u64 {
    let mut adjusted = 0u64;
    for px in image.pixels_mut() {
        let [r, g, b, a] = px.0;
        if !is_gold_text(r, g, b, a) {
            continue;
        }
        px.0 = [
            channel((f64::from(r) * factor).trunc()),
            channel((f64::from(g) * factor).trunc()),
            channel((f64::from(b) * factor + blue_boost).trunc()),
            a,
        ];
        adjusted += 1;
    }
    adjusted
}

/// Shift gold text pixels toward a target gold color.
///
/// The target contribution is modulated by `0.8 + 0.4 * luminance` so darker
/// strokes stay darker than highlights after the shift.
pub fn shift_gold(image: &mut RgbaImage, target: [u8; 3], blend: f64) -> u64 {
    let mut adjusted = 0u64;
    for px in image.pixels_mut() {
        let [r, g, b, a] = px.0;
        if !is_gold_text(r, g, b, a) {
            continue;
        }
        let lum = (f64::from(r) + f64::from(g) + f64::from(b)) / 3.0 / 255.0;
        let tone = 0.8 + 0.4 * lum;
        let mix = |c: u8, t: u8| -> u8 {
            channel((f64::from(c) * (1.0 - blend) + f64::from(t) * blend * tone).trunc())
        };
        px.0 = [mix(r, target[0]), mix(g, target[1]), mix(b, target[2]), a];
        adjusted += 1;
    }
    adjusted
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn gold_text_predicate_bounds() {
        assert!(is_gold_text(160, 130, 60, 255));
        assert!(!is_gold_text(100, 130, 60, 255)); // red bound exclusive
        assert!(!is_gold_text(160, 60, 60, 255));
        assert!(!is_gold_text(160, 130, 150, 255));
        assert!(!is_gold_text(160, 130, 115, 255)); // warmth gap 45 <= 50
        assert!(!is_gold_text(160, 130, 60, 49)); // alpha bound inclusive at 50
        assert!(is_gold_text(160, 130, 60, 50));
    }

    #[test]
    fn lighten_scales_channels_with_truncation() {
        let mut img = RgbaImage::new(2, 1);
        img.put_pixel(0, 0, Rgba([160, 120, 40, 255]));
        img.put_pixel(1, 0, Rgba([50, 50, 200, 255])); // not gold text

        let adjusted = lighten_gold(&mut img, 1.5, 0.0);
        assert_eq!(adjusted, 1);
        assert_eq!(*img.get_pixel(0, 0), Rgba([240, 180, 60, 255]));
        assert_eq!(*img.get_pixel(1, 0), Rgba([50, 50, 200, 255]));
    }

    #[test]
    fn lighten_saturates_at_255_and_applies_blue_boost() {
        let mut img = RgbaImage::new(1, 1);
        img.put_pixel(0, 0, Rgba([200, 180, 100, 255]));
        let adjusted = lighten_gold(&mut img, 1.5, 30.0);
        assert_eq!(adjusted, 1);
        // r: 300 -> 255, g: 270 -> 255, b: 150 + 30 = 180
        assert_eq!(*img.get_pixel(0, 0), Rgba([255, 255, 180, 255]));
    }

    #[test]
    fn lighten_skips_transparent_pixels() {
        let mut img = RgbaImage::new(1, 1);
        img.put_pixel(0, 0, Rgba([160, 120, 40, 49]));
        let adjusted = lighten_gold(&mut img, 1.5, 0.0);
        assert_eq!(adjusted, 0);
        assert_eq!(*img.get_pixel(0, 0), Rgba([160, 120, 40, 49]));
    }

    #[test]
    fn shift_preserves_alpha_and_counts_matches() {
        let mut img = RgbaImage::new(2, 1);
        img.put_pixel(0, 0, Rgba([160, 120, 40, 200]));
        img.put_pixel(1, 0, Rgba([30, 30, 30, 255]));

        let adjusted = shift_gold(&mut img, [220, 195, 145], 0.7);
        assert_eq!(adjusted, 1);
        assert_eq!(img.get_pixel(0, 0).0[3], 200);
        assert_eq!(*img.get_pixel(1, 0), Rgba([30, 30, 30, 255]));
    }

    #[test]
    fn shift_with_zero_blend_is_identity() {
        let mut img = RgbaImage::new(1, 1);
        img.put_pixel(0, 0, Rgba([160, 120, 40, 255]));
        let adjusted = shift_gold(&mut img, [220, 195, 145], 0.0);
        assert_eq!(adjusted, 1);
        assert_eq!(*img.get_pixel(0, 0), Rgba([160, 120, 40, 255]));
    }

    #[test]
    fn shift_moves_channels_toward_bright_target() {
        let mut img = RgbaImage::new(1, 1);
        img.put_pixel(0, 0, Rgba([160, 120, 40, 255]));
        shift_gold(&mut img, [235, 215, 175], 0.7);
        let px = img.get_pixel(0, 0).0;
        assert!(px[0] > 160, "red should move up, got {}", px[0]);
        assert!(px[1] > 120, "green should move up, got {}", px[1]);
        assert!(px[2] > 40, "blue should move up, got {}", px[2]);
    }

    #[test]
    fn recolor_dispatches_both_modes() {
        let mut a = RgbaImage::new(1, 1);
        a.put_pixel(0, 0, Rgba([160, 120, 40, 255]));
        let mut b = a.clone();

        let na = recolor_gold(
            &mut a,
            RecolorMode::Brighten {
                factor: 1.35,
                blue_boost: 20.0,
            },
        );
        let nb = recolor_gold(
            &mut b,
            RecolorMode::ShiftToTarget {
                target: [220, 195, 145],
                blend: 0.7,
            },
        );
        assert_eq!(na, 1);
        assert_eq!(nb, 1);
    }
}
