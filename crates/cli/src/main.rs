#![deny(unsafe_code)]
//! CLI binary for the dotfield particle animation system.
//!
//! Subcommands:
//! - `render <engine>` — seed from an image (or the uniform fallback grid),
//!   advance N frames on a synthetic 60 fps clock, write the final frame
//!   as a PNG
//! - `replay <scene.json>` — run a reproducible scene file
//! - `list` — print available engines

mod error;

use clap::{Parser, Subcommand};
use dotfield_core::{FrameInput, ParticleEngine, PixelGrid, Rgb, Scene, ViewportConfig};
use dotfield_engines::image_io::{load_pixel_grid, Fit};
use dotfield_engines::{snapshot, EngineKind};
use error::CliError;
use glam::DVec2;
use std::path::{Path, PathBuf};
use std::process;

/// Synthetic frame clock rate, in frames per second.
const FPS: f64 = 60.0;

#[derive(Parser)]
#[command(name = "dotfield", about = "Image-to-particle animation CLI")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run an engine for N frames and write a PNG of the final frame.
    Render {
        /// Engine name (e.g. "force-field", "assembly").
        engine: String,

        /// Source image; omitted means a uniform white grid.
        #[arg(long)]
        image: Option<PathBuf>,

        /// Canvas width in pixels.
        #[arg(short = 'W', long, default_value_t = 1200)]
        width: u32,

        /// Canvas height in pixels.
        #[arg(short = 'H', long, default_value_t = 800)]
        height: u32,

        /// Number of frames to advance.
        #[arg(short, long, default_value_t = 300)]
        frames: u32,

        /// PRNG seed for deterministic scatter placement.
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Pointer position as "x,y"; defaults to the canvas center.
        #[arg(long)]
        pointer: Option<String>,

        /// Fire a toggle event every N frames (0 = never).
        #[arg(long, default_value_t = 0)]
        toggle_every: u32,

        /// Engine parameters as a JSON string.
        #[arg(long, default_value = "{}")]
        params: String,

        /// Background color as a hex string.
        #[arg(long, default_value = "#000000")]
        background: String,

        /// Output file path.
        #[arg(short, long, default_value = "frame.png")]
        output: PathBuf,
    },
    /// Run a reproducible scene file and write a PNG of the final frame.
    Replay {
        /// Path to a Scene JSON file.
        scene: PathBuf,

        /// Output file path.
        #[arg(short, long, default_value = "frame.png")]
        output: PathBuf,
    },
    /// List available engines.
    List,
}

/// Parses an "x,y" pointer spec.
fn parse_pointer(spec: &str) -> Result<DVec2, CliError> {
    let parts: Vec<&str> = spec.split(',').collect();
    if parts.len() != 2 {
        return Err(CliError::Input(format!(
            "invalid --pointer '{spec}': expected \"x,y\""
        )));
    }
    let x: f64 = parts[0]
        .trim()
        .parse()
        .map_err(|e| CliError::Input(format!("invalid --pointer x: {e}")))?;
    let y: f64 = parts[1]
        .trim()
        .parse()
        .map_err(|e| CliError::Input(format!("invalid --pointer y: {e}")))?;
    Ok(DVec2::new(x, y))
}

/// The fit policy matching each engine's layout.
fn fit_for(engine: &str) -> Fit {
    if engine == "assembly" {
        Fit::Ring
    } else {
        Fit::Contain
    }
}

/// Advances the engine through `frames` frames at the synthetic clock.
fn run_frames(
    engine: &mut EngineKind,
    frames: u32,
    pointer: DVec2,
    toggle_every: u32,
) -> Result<(), CliError> {
    for frame in 0..frames {
        let toggle = toggle_every > 0 && frame > 0 && frame % toggle_every == 0;
        let input = FrameInput {
            pointer,
            now: f64::from(frame) / FPS,
            toggle,
        };
        engine.update(&input)?;
    }
    Ok(())
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::List => {
            let engines = EngineKind::list_engines();
            if cli.json {
                let info = serde_json::json!({ "engines": engines });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Engines:");
                for name in engines {
                    println!("  {name}");
                }
            }
        }
        Command::Render {
            engine,
            image,
            width,
            height,
            frames,
            seed,
            pointer,
            toggle_every,
            params,
            background,
            output,
        } => {
            let viewport = ViewportConfig::new(width, height)?;
            let params: serde_json::Value = serde_json::from_str(&params)
                .map_err(|e| CliError::Input(format!("invalid --params JSON: {e}")))?;
            let background =
                Rgb::from_hex(&background).map_err(|e| CliError::Input(e.to_string()))?;
            let pointer = match pointer {
                Some(spec) => parse_pointer(&spec)?,
                None => viewport.center(),
            };

            // Render is forgiving: a missing image degrades to the uniform
            // white grid. Replay is the strict path.
            let grid = match image {
                Some(path) => match load_pixel_grid(&path, viewport, fit_for(&engine)) {
                    Ok(grid) => grid,
                    Err(e) => {
                        log::warn!("{e}; falling back to a uniform grid");
                        PixelGrid::filled(viewport.width(), viewport.height(), Rgb::WHITE)?
                    }
                },
                None => PixelGrid::filled(viewport.width(), viewport.height(), Rgb::WHITE)?,
            };

            let mut eng = EngineKind::from_name(&engine, viewport, &grid, seed, &params)?;
            run_frames(&mut eng, frames, pointer, toggle_every)?;
            snapshot::write_png(&eng.draw(), viewport, background, &output)?;

            if cli.json {
                let info = serde_json::json!({
                    "engine": engine,
                    "width": width,
                    "height": height,
                    "frames": frames,
                    "seed": seed,
                    "particles": eng.particle_count(),
                    "output": output.display().to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                eprintln!(
                    "rendered {engine} ({width}x{height}, {frames} frames, {} particles) -> {}",
                    eng.particle_count(),
                    output.display()
                );
            }
        }
        Command::Replay { scene, output } => {
            let text = std::fs::read_to_string(&scene)
                .map_err(|e| CliError::Io(format!("{}: {e}", scene.display())))?;
            let scene: Scene = serde_json::from_str(&text)?;
            scene.validate()?;
            let viewport = ViewportConfig::new(scene.width, scene.height)?;

            // Replay is strict: a scene that names an image fails fast when
            // the image cannot be loaded.
            let grid = match &scene.image {
                Some(path) => load_pixel_grid(Path::new(path), viewport, fit_for(&scene.engine))?,
                None => PixelGrid::filled(viewport.width(), viewport.height(), Rgb::WHITE)?,
            };

            let mut eng =
                EngineKind::from_name(&scene.engine, viewport, &grid, scene.seed, &scene.params)?;
            run_frames(&mut eng, scene.frames, viewport.center(), 0)?;
            snapshot::write_png(&eng.draw(), viewport, Rgb::BLACK, &output)?;

            if cli.json {
                let info = serde_json::json!({
                    "engine": scene.engine,
                    "frames": scene.frames,
                    "seed": scene.seed,
                    "particles": eng.particle_count(),
                    "output": output.display().to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                eprintln!(
                    "replayed {} ({} frames, seed {}) -> {}",
                    scene.engine,
                    scene.frames,
                    scene.seed,
                    output.display()
                );
            }
        }
    }

    Ok(())
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_pointer_accepts_floats_and_whitespace() {
        let p = parse_pointer("100.5, 200").unwrap();
        assert_eq!(p, DVec2::new(100.5, 200.0));
    }

    #[test]
    fn parse_pointer_rejects_malformed_specs() {
        assert!(parse_pointer("100").is_err());
        assert!(parse_pointer("a,b").is_err());
        assert!(parse_pointer("1,2,3").is_err());
    }

    #[test]
    fn fit_policy_follows_engine() {
        assert_eq!(fit_for("assembly"), Fit::Ring);
        assert_eq!(fit_for("force-field"), Fit::Contain);
    }

    #[test]
    fn run_frames_advances_and_toggles() {
        let viewport = ViewportConfig::new(200, 200).unwrap();
        let grid = PixelGrid::filled(50, 50, Rgb::WHITE).unwrap();
        let mut engine = EngineKind::from_name(
            "assembly",
            viewport,
            &grid,
            1,
            &serde_json::json!({"stride": 10}),
        )
        .unwrap();
        run_frames(&mut engine, 120, viewport.center(), 60).unwrap();
        assert_eq!(engine.draw().len(), engine.particle_count());
    }
}
