//! Pixel-level retouching for logo image assets.
//!
//! The logo family this crate was built for is decorated with gold confetti
//! dots and pink paint splashes that look great on a hero banner and terrible
//! in a nav bar. The core operation erases those confetti pixels using fixed
//! color thresholds plus a region-aware decision cascade: the subtitle band
//! is never touched, the top band and side margins are cleaned aggressively,
//! and in the interior a 5x5 neighborhood vote keeps gold that belongs to
//! lettering.
//!
//! # Quick Start
//!
//! ```no_run
//! use logo_retouch::RetouchEngine;
//! use std::path::Path;
//!
//! let engine = RetouchEngine::new();
//! let result = engine.clean_file(Path::new("logo.png"), Path::new("logo-no-blobs.png"));
//! println!("{}", result.message);
//! ```
//!
//! The in-memory API is available too:
//!
//! ```no_run
//! use logo_retouch::{erase_confetti, EraserConfig};
//!
//! let mut img = image::open("logo.png").unwrap().to_rgba8();
//! let erased = erase_confetti(&mut img, &EraserConfig::default());
//! println!("removed {erased} confetti pixels");
//! ```
//!
//! Two companion operations cover the rest of the logo maintenance chores:
//! [`recolor`] brightens or hue-shifts the gold lettering, and [`analyze`]
//! reports the dominant quantized colors of an asset.

#![deny(missing_docs)]

pub mod analyze;
pub mod classify;
mod engine;
pub mod eraser;
pub mod error;
pub mod recolor;

pub use analyze::{dominant_colors, ColorCount};
pub use engine::{
    default_output_path, is_supported_image, save_image, ProcessResult, RetouchEngine,
};
pub use eraser::{erase_confetti, EraserConfig};
pub use error::{Error, Result};
pub use recolor::{recolor_gold, RecolorMode};
