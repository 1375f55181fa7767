//! File-level orchestration: load, transform, save, batch.

use std::path::{Path, PathBuf};

use image::{ImageFormat, RgbaImage};

use crate::analyze::{self, ColorCount};
use crate::eraser::{self, EraserConfig};
use crate::error::{Error, Result};
use crate::recolor::{self, RecolorMode};

/// Result of processing a single image file.
#[derive(Debug)]
pub struct ProcessResult {
    /// Path of the processed file.
    pub path: PathBuf,
    /// Whether processing succeeded.
    pub success: bool,
    /// Whether the file was skipped (input not found).
    pub skipped: bool,
    /// Number of erased pixels.
    pub erased: u64,
    /// Human-readable status message.
    pub message: String,
}

impl ProcessResult {
    fn pending(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            success: false,
            skipped: false,
            erased: 0,
            message: String::new(),
        }
    }
}

/// The retouch engine holding the eraser configuration.
///
/// Create once and reuse across a batch of logo variants.
#[derive(Debug, Default)]
pub struct RetouchEngine {
    config: EraserConfig,
}

impl RetouchEngine {
    /// Create an engine with the default band geometry and cluster limit.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with an explicit eraser configuration.
    #[must_use]
    pub fn with_config(config: EraserConfig) -> Self {
        Self { config }
    }

    /// The eraser configuration this engine applies.
    #[must_use]
    pub fn config(&self) -> &EraserConfig {
        &self.config
    }

    /// Clean confetti from a single image file: load, erase, save.
    ///
    /// A missing input is reported as skipped so a batch over several logo
    /// variants keeps going. Decode and save failures are reported in the
    /// result message; no partial output is written on failure.
    #[must_use]
    pub fn clean_file(&self, input: &Path, output: &Path) -> ProcessResult {
        let mut result = ProcessResult::pending(input);

        if !input.exists() {
            result.skipped = true;
            result.success = true;
            result.message = "file not found, skipping".to_string();
            return result;
        }

        let mut img = match load_rgba(input) {
            Ok(img) => img,
            Err(e) => {
                result.message = format!("Failed to load: {e}");
                return result;
            }
        };

        result.erased = eraser::erase_confetti(&mut img, &self.config);

        if let Err(e) = ensure_parent_dir(output) {
            result.message = format!("Failed to create output directory: {e}");
            return result;
        }

        match save_image(&img, output) {
            Ok(()) => {
                result.success = true;
                result.message = format!("removed {} confetti pixels", result.erased);
            }
            Err(e) => {
                result.message = format!("Failed to save: {e}");
            }
        }

        result
    }

    /// Clean every supported image in a directory.
    ///
    /// Uses parallel iteration when the `cli` feature is enabled (via rayon);
    /// each file is still scanned sequentially. Returns a [`ProcessResult`]
    /// per image found.
    ///
    /// # Panics
    ///
    /// Panics if a directory entry has no filename (not possible for regular
    /// files).
    #[must_use]
    pub fn clean_directory(&self, input_dir: &Path, output_dir: &Path) -> Vec<ProcessResult> {
        let entries: Vec<_> = match std::fs::read_dir(input_dir) {
            Ok(rd) => rd
                .filter_map(std::result::Result::ok)
                .filter(|e| e.file_type().map(|ft| ft.is_file()).unwrap_or(false))
                .filter(|e| is_supported_image(e.path().as_path()))
                .collect(),
            Err(e) => {
                let mut r = ProcessResult::pending(input_dir);
                r.message = format!("Failed to read directory: {e}");
                return vec![r];
            }
        };

        if !output_dir.exists() {
            if let Err(e) = std::fs::create_dir_all(output_dir) {
                let mut r = ProcessResult::pending(output_dir);
                r.message = format!("Failed to create output directory: {e}");
                return vec![r];
            }
        }

        let clean_entry = |entry: &std::fs::DirEntry| {
            let input_path = entry.path();
            let filename = input_path.file_name().unwrap();
            let output_path = output_dir.join(filename);
            self.clean_file(&input_path, &output_path)
        };

        #[cfg(feature = "cli")]
        {
            use rayon::prelude::*;
            entries.par_iter().map(clean_entry).collect()
        }

        #[cfg(not(feature = "cli"))]
        {
            entries.iter().map(clean_entry).collect()
        }
    }

    /// Recolor the gold lettering of a single image file.
    ///
    /// Returns the number of adjusted pixels.
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be decoded or the output cannot
    /// be written.
    pub fn recolor_file(&self, input: &Path, output: &Path, mode: RecolorMode) -> Result<u64> {
        let mut img = load_rgba(input)?;
        let adjusted = recolor::recolor_gold(&mut img, mode);
        ensure_parent_dir(output)?;
        save_image(&img, output)?;
        Ok(adjusted)
    }

    /// Report the `top_n` dominant quantized colors of an image file.
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be decoded.
    pub fn analyze_file(&self, input: &Path, top_n: usize) -> Result<Vec<ColorCount>> {
        let img = load_rgba(input)?;
        Ok(analyze::dominant_colors(&img, top_n))
    }
}

fn load_rgba(path: &Path) -> Result<RgbaImage> {
    Ok(image::open(path)?.to_rgba8())
}

fn ensure_parent_dir(output: &Path) -> std::io::Result<()> {
    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

/// Check if a file has a supported (alpha-capable) image extension.
#[must_use]
pub fn is_supported_image(path: &Path) -> bool {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => matches!(ext.to_lowercase().as_str(), "png" | "webp" | "bmp"),
        None => false,
    }
}

/// Save an RGBA image, rejecting formats that would drop the alpha channel.
///
/// # Errors
///
/// Returns [`Error::UnsupportedFormat`] for formats without alpha support
/// (notably JPEG), or an encoding/I/O error if writing fails.
pub fn save_image(img: &RgbaImage, path: &Path) -> Result<()> {
    let format =
        ImageFormat::from_path(path).map_err(|e| Error::UnsupportedFormat(e.to_string()))?;

    match format {
        ImageFormat::Png | ImageFormat::WebP | ImageFormat::Bmp => {
            img.save(path)?;
            Ok(())
        }
        _ => Err(Error::UnsupportedFormat(format!("{format:?}"))),
    }
}

/// Generate a default output path from an input path.
///
/// Example: `"logo.png"` becomes `"logo-no-blobs.png"`, matching the naming
/// scheme of the cleaned logo variants.
#[must_use]
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input.file_stem().unwrap_or_default().to_string_lossy();
    let ext = input.extension().unwrap_or_default().to_string_lossy();
    let parent = input.parent().unwrap_or(Path::new("."));
    parent.join(format!("{stem}-no-blobs.{ext}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_output_path_appends_no_blobs_suffix() {
        let p = default_output_path(Path::new("/tmp/logo.png"));
        assert_eq!(p, PathBuf::from("/tmp/logo-no-blobs.png"));

        let p = default_output_path(Path::new("nav.webp"));
        assert_eq!(p.file_name().unwrap().to_str().unwrap(), "nav-no-blobs.webp");
    }

    #[test]
    fn is_supported_image_accepts_alpha_capable_formats() {
        assert!(is_supported_image(Path::new("logo.png")));
        assert!(is_supported_image(Path::new("logo.PNG")));
        assert!(is_supported_image(Path::new("logo.webp")));
        assert!(is_supported_image(Path::new("logo.bmp")));
    }

    #[test]
    fn is_supported_image_rejects_formats_without_alpha() {
        assert!(!is_supported_image(Path::new("logo.jpg")));
        assert!(!is_supported_image(Path::new("logo.gif")));
        assert!(!is_supported_image(Path::new("logo")));
    }

    #[test]
    fn save_image_rejects_jpeg() {
        let img = RgbaImage::new(1, 1);
        let err = save_image(&img, Path::new("/tmp/out.jpg")).unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat(_)));
    }

    #[test]
    fn clean_file_skips_missing_input() {
        let engine = RetouchEngine::new();
        let result = engine.clean_file(
            Path::new("/nonexistent/logo.png"),
            Path::new("/tmp/out.png"),
        );
        assert!(result.skipped);
        assert!(result.success);
        assert!(result.message.contains("not found"));
    }
}
