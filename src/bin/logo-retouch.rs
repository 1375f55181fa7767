use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};

use logo_retouch::{
    default_output_path, EraserConfig, ProcessResult, RecolorMode, RetouchEngine,
};

#[derive(Parser)]
#[command(
    name = "logo-retouch",
    about = "Region-aware confetti removal, gold recoloring and color analysis for logo images",
    version,
    after_help = "Simple usage: logo-retouch clean <logo.png>  (writes <logo-no-blobs.png>)"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Suppress all non-error output
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Erase gold/pink confetti pixels from an image or a directory of images
    Clean {
        /// Input image file or directory
        input: String,

        /// Output file or directory (default: {name}-no-blobs.{ext})
        #[arg(short, long)]
        output: Option<String>,

        /// Top band height as a fraction of image height
        #[arg(long, default_value = "0.12")]
        top_fraction: f64,

        /// Start of the protected subtitle band as a fraction of image height
        #[arg(long, default_value = "0.72")]
        protected_fraction: f64,

        /// Start of the right margin as a fraction of image width
        #[arg(long, default_value = "0.75")]
        right_fraction: f64,

        /// End of the left margin as a fraction of image width
        #[arg(long, default_value = "0.15")]
        left_fraction: f64,

        /// Interior gold clusters at or above this size are kept
        #[arg(long, default_value = "15")]
        max_cluster: u32,
    },

    /// Recolor the gold lettering of an image
    Recolor {
        /// Input image file
        input: String,

        /// Output file (default: {name}-recolored.{ext})
        #[arg(short, long)]
        output: Option<String>,

        /// Multiply gold channels by this factor (e.g. 1.35)
        #[arg(long, conflicts_with = "target")]
        brighten: Option<f64>,

        /// Added to the blue channel when brightening, for a pastel tint
        #[arg(long, default_value = "0", requires = "brighten")]
        blue_boost: f64,

        /// Shift gold toward this target color, as "R,G,B"
        #[arg(long)]
        target: Option<String>,

        /// Blend weight toward the target color (0.0-1.0)
        #[arg(long, default_value = "0.7", requires = "target")]
        blend: f64,
    },

    /// Report the dominant quantized colors of an image
    Analyze {
        /// Input image file
        input: String,

        /// How many colors to report
        #[arg(long, default_value = "20")]
        top: usize,
    },
}

fn main() {
    let cli = Cli::parse();

    let exit_code = match cli.command {
        Command::Clean {
            input,
            output,
            top_fraction,
            protected_fraction,
            right_fraction,
            left_fraction,
            max_cluster,
        } => {
            for (name, value) in [
                ("--top-fraction", top_fraction),
                ("--protected-fraction", protected_fraction),
                ("--right-fraction", right_fraction),
                ("--left-fraction", left_fraction),
            ] {
                if !(0.0..=1.0).contains(&value) {
                    eprintln!("Error: {name} must be between 0.0 and 1.0");
                    process::exit(1);
                }
            }
            let config = EraserConfig {
                top_fraction,
                protected_fraction,
                right_fraction,
                left_fraction,
                max_gold_cluster: max_cluster,
            };
            run_clean(&RetouchEngine::with_config(config), &input, output, cli.quiet)
        }
        Command::Recolor {
            input,
            output,
            brighten,
            blue_boost,
            target,
            blend,
        } => run_recolor(
            &input, output, brighten, blue_boost, target, blend, cli.quiet,
        ),
        Command::Analyze { input, top } => run_analyze(&input, top),
    };

    process::exit(exit_code);
}

fn run_clean(engine: &RetouchEngine, input: &str, output: Option<String>, quiet: bool) -> i32 {
    let input_path = Path::new(input);
    if !input_path.exists() {
        eprintln!("Error: Input path does not exist: {input}");
        return 1;
    }

    let results = if input_path.is_dir() {
        let Some(output_dir) = output.map(PathBuf::from) else {
            eprintln!("Error: Output directory is required for batch processing");
            eprintln!("Usage: logo-retouch clean <input_dir> -o <output_dir>");
            return 1;
        };
        engine.clean_directory(input_path, &output_dir)
    } else {
        let output_path = output
            .map_or_else(|| default_output_path(input_path), PathBuf::from);
        vec![engine.clean_file(input_path, &output_path)]
    };

    let mut success_count = 0u32;
    let mut skip_count = 0u32;
    let mut fail_count = 0u32;

    for r in &results {
        print_result(r, quiet);
        if r.skipped {
            skip_count += 1;
        } else if r.success {
            success_count += 1;
        } else {
            fail_count += 1;
        }
    }

    if results.len() > 1 && !quiet {
        eprintln!();
        eprint!("[Summary] Cleaned: {success_count}");
        if skip_count > 0 {
            eprint!(", Skipped: {skip_count}");
        }
        if fail_count > 0 {
            eprint!(", Failed: {fail_count}");
        }
        eprintln!(" (Total: {})", results.len());
    }

    i32::from(fail_count > 0)
}

fn print_result(result: &ProcessResult, quiet: bool) {
    let filename = result.path.file_name().map_or_else(
        || result.path.display().to_string(),
        |f| f.to_string_lossy().to_string(),
    );

    if result.skipped {
        if !quiet {
            eprintln!("[SKIP] {filename}: {}", result.message);
        }
    } else if result.success {
        if !quiet {
            println!("Cleaned {filename}: {}", result.message);
        }
    } else {
        eprintln!("[FAIL] {filename}: {}", result.message);
    }
}

fn run_recolor(
    input: &str,
    output: Option<String>,
    brighten: Option<f64>,
    blue_boost: f64,
    target: Option<String>,
    blend: f64,
    quiet: bool,
) -> i32 {
    let mode = match (brighten, target) {
        (Some(factor), None) => {
            if factor <= 0.0 {
                eprintln!("Error: --brighten must be positive");
                return 1;
            }
            RecolorMode::Brighten { factor, blue_boost }
        }
        (None, Some(triple)) => {
            if !(0.0..=1.0).contains(&blend) {
                eprintln!("Error: --blend must be between 0.0 and 1.0");
                return 1;
            }
            match parse_rgb(&triple) {
                Ok(target) => RecolorMode::ShiftToTarget { target, blend },
                Err(e) => {
                    eprintln!("Error: invalid --target value: {e}");
                    return 1;
                }
            }
        }
        _ => {
            eprintln!("Error: specify exactly one of --brighten or --target");
            return 1;
        }
    };

    let input_path = Path::new(input);
    let output_path = output
        .map_or_else(|| suffixed_output_path(input_path, "recolored"), PathBuf::from);

    let engine = RetouchEngine::new();
    match engine.recolor_file(input_path, &output_path, mode) {
        Ok(adjusted) => {
            if !quiet {
                println!(
                    "Created {}: adjusted {adjusted} pixels",
                    output_path.display()
                );
            }
            0
        }
        Err(e) => {
            eprintln!("[FAIL] {input}: {e}");
            1
        }
    }
}

fn run_analyze(input: &str, top: usize) -> i32 {
    let engine = RetouchEngine::new();
    match engine.analyze_file(Path::new(input), top) {
        Ok(colors) => {
            println!("Top {top} colors in {input}:");
            for c in colors {
                let [r, g, b] = c.rgb;
                println!("  RGB({r:3}, {g:3}, {b:3}): {:6} pixels", c.count);
            }
            0
        }
        Err(e) => {
            eprintln!("[FAIL] {input}: {e}");
            1
        }
    }
}

/// Parse a color given as `"R,G,B"` with each component in `0..=255`.
fn parse_rgb(triple: &str) -> Result<[u8; 3], String> {
    let parts: Vec<&str> = triple.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(format!("expected \"R,G,B\", got \"{triple}\""));
    }
    let mut rgb = [0u8; 3];
    for (slot, part) in rgb.iter_mut().zip(&parts) {
        *slot = part
            .parse::<u8>()
            .map_err(|_| format!("\"{part}\" is not a channel value in 0..=255"))?;
    }
    Ok(rgb)
}

fn suffixed_output_path(input: &Path, suffix: &str) -> PathBuf {
    let stem = input.file_stem().unwrap_or_default().to_string_lossy();
    let ext = input.extension().unwrap_or_default().to_string_lossy();
    let parent = input.parent().unwrap_or(Path::new("."));
    parent.join(format!("{stem}-{suffix}.{ext}"))
}

#[cfg(test)]
mod tests {
    use super::parse_rgb;

    #[test]
    fn parse_rgb_accepts_comma_triples() {
        assert_eq!(parse_rgb("220,195,145"), Ok([220, 195, 145]));
        assert_eq!(parse_rgb("0, 0, 255"), Ok([0, 0, 255]));
    }

    #[test]
    fn parse_rgb_rejects_malformed_input() {
        assert!(parse_rgb("220,195").is_err());
        assert!(parse_rgb("220,195,300").is_err());
        assert!(parse_rgb("gold").is_err());
    }
}
