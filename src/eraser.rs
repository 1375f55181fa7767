//! Region-aware confetti erasure.
//!
//! The image is divided into horizontal bands and vertical margins by fixed
//! fractions of its dimensions. Confetti-colored pixels in the top band and
//! the side margins are erased outright; the bottom band (the subtitle) is
//! protected absolutely; everywhere else a gold pixel is only erased when a
//! 5x5 neighborhood vote says it is an isolated dot rather than part of a
//! glyph or a dense cluster.
//!
//! The scan mutates a single buffer in row-major order and the neighborhood
//! vote reads that same buffer, so a neighbor erased earlier in the scan no
//! longer counts as gold. This order dependence is intentional and matches
//! the behavior the thresholds were tuned against.

use image::{Rgba, RgbaImage};

use crate::classify::{is_dark_text, is_gold, is_pink};

/// Band geometry and the interior cluster limit for [`erase_confetti`].
///
/// All fractions are of the image dimension they cut (heights for bands,
/// widths for margins) and are truncated to whole pixel rows/columns.
#[derive(Debug, Clone)]
pub struct EraserConfig {
    /// Rows with `y < trunc(top_fraction * height)` form the top band, where
    /// confetti is removed aggressively. Default `0.12`.
    pub top_fraction: f64,
    /// Rows with `y > trunc(protected_fraction * height)` are never touched,
    /// preserving the subtitle. Default `0.72`.
    pub protected_fraction: f64,
    /// Columns with `x > trunc(right_fraction * width)` form the right
    /// margin. Default `0.75`.
    pub right_fraction: f64,
    /// Columns with `x < trunc(left_fraction * width)` form the left margin.
    /// Default `0.15`.
    pub left_fraction: f64,
    /// Interior gold pixels whose 5x5 window holds at least this many gold
    /// pixels (the pixel itself included) are kept as part of a cluster.
    /// Default `15`.
    pub max_gold_cluster: u32,
}

impl Default for EraserConfig {
    fn default() -> Self {
        Self {
            top_fraction: 0.12,
            protected_fraction: 0.72,
            right_fraction: 0.75,
            left_fraction: 0.15,
            max_gold_cluster: 15,
        }
    }
}

/// Where the band cutoffs land for one concrete image size.
#[derive(Debug, Clone, Copy)]
struct Bands {
    top: u32,
    protected: u32,
    right: u32,
    left: u32,
}

impl Bands {
    fn new(config: &EraserConfig, width: u32, height: u32) -> Self {
        Self {
            top: cutoff(height, config.top_fraction),
            protected: cutoff(height, config.protected_fraction),
            right: cutoff(width, config.right_fraction),
            left: cutoff(width, config.left_fraction),
        }
    }

    fn is_protected(self, y: u32) -> bool {
        y > self.protected
    }

    fn in_top_band(self, y: u32) -> bool {
        y < self.top
    }

    fn in_right_margin(self, x: u32) -> bool {
        x > self.right
    }

    fn in_left_margin(self, x: u32) -> bool {
        x < self.left
    }
}

/// Truncating fractional cutoff, computed in f64 to keep the exact rounding
/// the fractions were calibrated with.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn cutoff(dim: u32, fraction: f64) -> u32 {
    (f64::from(dim) * fraction) as u32
}

/// Count gold and dark-text pixels in the 5x5 window centered on `(x, y)`,
/// clipped to image bounds. The center pixel itself is included.
fn window_census(image: &RgbaImage, x: u32, y: u32) -> (u32, u32) {
    let width = i64::from(image.width());
    let height = i64::from(image.height());
    let mut gold = 0;
    let mut dark = 0;

    for dx in -2_i64..=2 {
        for dy in -2_i64..=2 {
            let nx = i64::from(x) + dx;
            let ny = i64::from(y) + dy;
            if nx < 0 || nx >= width || ny < 0 || ny >= height {
                continue;
            }
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let px = *image.get_pixel(nx as u32, ny as u32);
            if is_gold(px) {
                gold += 1;
            }
            if is_dark_text(px) {
                dark += 1;
            }
        }
    }

    (gold, dark)
}

/// Erase confetti-colored pixels from an image in-place.
///
/// Per-pixel decision cascade, in priority order:
///
/// 1. protected band: leave unchanged, no further rules apply;
/// 2. top band, gold or pink: erase;
/// 3. right margin, gold or pink: erase;
/// 4. left margin, gold or pink: erase;
/// 5. otherwise, gold only: erase when the 5x5 window census finds fewer
///    than [`EraserConfig::max_gold_cluster`] gold pixels and no dark-text
///    pixel at all.
///
/// Pink pixels are only ever erased by rules 2-4; an interior pink splash
/// survives. Erasing sets the pixel to transparent black `(0, 0, 0, 0)`.
///
/// Returns the number of erased pixels.
pub fn erase_confetti(image: &mut RgbaImage, config: &EraserConfig) -> u64 {
    let bands = Bands::new(config, image.width(), image.height());
    let erased_px = Rgba([0, 0, 0, 0]);
    let mut erased = 0u64;

    for y in 0..image.height() {
        if bands.is_protected(y) {
            continue;
        }
        for x in 0..image.width() {
            let px = *image.get_pixel(x, y);
            let confetti = is_gold(px) || is_pink(px);

            if bands.in_top_band(y) && confetti {
                image.put_pixel(x, y, erased_px);
                erased += 1;
                continue;
            }

            if bands.in_right_margin(x) && confetti {
                image.put_pixel(x, y, erased_px);
                erased += 1;
                continue;
            }

            if bands.in_left_margin(x) && confetti {
                image.put_pixel(x, y, erased_px);
                erased += 1;
                continue;
            }

            // Interior (or a band pixel that matched no rule above): only
            // isolated gold dots go, and never next to dark text.
            if is_gold(px) {
                let (gold, dark) = window_census(image, x, y);
                if gold < config.max_gold_cluster && dark == 0 {
                    image.put_pixel(x, y, erased_px);
                    erased += 1;
                }
            }
        }
    }

    erased
}
