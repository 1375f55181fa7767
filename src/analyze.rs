//! Dominant color analysis.
//!
//! Quantizes every sufficiently opaque pixel into coarse RGB buckets and
//! reports the most populated ones. Useful for finding out what the text
//! pixels of a logo actually are before tuning thresholds.

use std::collections::HashMap;

use image::RgbaImage;

/// Pixels must have alpha strictly above this value to be counted.
pub const OPAQUE_MIN_ALPHA: u8 = 50;

/// Channel values are grouped into buckets of this width.
pub const BUCKET_WIDTH: u8 = 20;

/// One quantized color bucket and how many pixels fell into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorCount {
    /// Bucket representative: each channel rounded down to a multiple of
    /// [`BUCKET_WIDTH`].
    pub rgb: [u8; 3],
    /// Number of pixels in the bucket.
    pub count: u64,
}

fn bucket(c: u8) -> u8 {
    (c / BUCKET_WIDTH) * BUCKET_WIDTH
}

/// Count quantized colors among opaque pixels and return the `top_n` most
/// common, ordered by descending count (ties broken by ascending RGB so the
/// result is deterministic).
#[must_use]
pub fn dominant_colors(image: &RgbaImage, top_n: usize) -> Vec<ColorCount> {
    let mut counts: HashMap<[u8; 3], u64> = HashMap::new();
    for px in image.pixels() {
        let [r, g, b, a] = px.0;
        if a <= OPAQUE_MIN_ALPHA {
            continue;
        }
        *counts.entry([bucket(r), bucket(g), bucket(b)]).or_insert(0) += 1;
    }

    let mut ranked: Vec<ColorCount> = counts
        .into_iter()
        .map(|(rgb, count)| ColorCount { rgb, count })
        .collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count).then(a.rgb.cmp(&b.rgb)));
    ranked.truncate(top_n);
    ranked
}
