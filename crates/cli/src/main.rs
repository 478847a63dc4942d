#![deny(unsafe_code)]
//! CLI binary for heartfield.
//!
//! Subcommands:
//! - `render`: animate the scene and write one PNG per frame
//! - `texture`: write the sampled heart texture as a PNG
//! - `stats`: summarize the circle field
//! - `schema`: print the parameter schema
//! - `view`: live preview window (feature `window`)

mod error;
mod options;
#[cfg(feature = "window")]
mod window;

use clap::{Parser, Subcommand};
use error::CliError;
use heartfield_core::{Scene, SceneConfig};
use heartfield_raster::snapshot::write_png;
use heartfield_raster::{SoftwareBackend, SoftwareSurface};
use heartfield_scene::HeartScene;
use options::SceneArgs;
use std::fs;
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "heartfield", about = "Pulsing circle field sampled from a heart texture")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Animate the scene and write each frame as a PNG.
    Render {
        #[command(flatten)]
        scene: SceneArgs,

        /// Number of frames to write.
        #[arg(short, long, default_value_t = 1)]
        frames: u64,

        /// Frame number of the first written frame.
        #[arg(long, default_value_t = 0)]
        start_frame: u64,

        /// Output directory for frame_NNNNN.png files.
        #[arg(short, long, default_value = "frames")]
        output: PathBuf,
    },
    /// Write the offscreen heart texture as a PNG.
    Texture {
        #[command(flatten)]
        scene: SceneArgs,

        /// Output file path.
        #[arg(short, long, default_value = "texture.png")]
        output: PathBuf,
    },
    /// Print circle count, grid size and scale range.
    Stats {
        #[command(flatten)]
        scene: SceneArgs,
    },
    /// Print the parameter schema with defaults.
    Schema,
    /// Open a window and animate until closed or Escape is pressed.
    #[cfg(feature = "window")]
    View {
        #[command(flatten)]
        scene: SceneArgs,
    },
}

fn build_scene(args: &SceneArgs) -> Result<HeartScene, CliError> {
    let config = args.resolve()?;
    log::info!(
        "building {}x{} scene ({} hearts, {} grid divisions)",
        config.width,
        config.height,
        config.heart_count,
        config.grid_divisions
    );
    Ok(HeartScene::new(&SoftwareBackend, config)?)
}

fn frame_path(dir: &std::path::Path, frame: u64) -> PathBuf {
    dir.join(format!("frame_{frame:05}.png"))
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Render {
            scene,
            frames,
            start_frame,
            output,
        } => {
            let mut scene = build_scene(&scene)?;
            fs::create_dir_all(&output)
                .map_err(|e| CliError::Io(format!("{}: {e}", output.display())))?;
            let config = scene.config().clone();
            let mut surface = SoftwareSurface::new(config.width, config.height)?;

            let mut written = Vec::new();
            for frame in start_frame..start_frame + frames {
                scene.seek(frame)?;
                scene.render(&mut surface)?;
                let path = frame_path(&output, frame);
                write_png(surface.buffer(), &path)?;
                log::debug!("frame {frame} -> {}", path.display());
                written.push(path.display().to_string());
            }

            if cli.json {
                let info = serde_json::json!({
                    "width": config.width,
                    "height": config.height,
                    "start_frame": start_frame,
                    "frames": frames,
                    "circles": scene.field().len(),
                    "files": written,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                log::info!(
                    "rendered {frames} frame(s) ({}x{}, {} circles) -> {}",
                    config.width,
                    config.height,
                    scene.field().len(),
                    output.display()
                );
            }
        }
        Command::Texture { scene, output } => {
            let scene = build_scene(&scene)?;
            write_png(scene.texture().buffer(), &output)?;
            if cli.json {
                let info = serde_json::json!({
                    "width": scene.config().width,
                    "height": scene.config().height,
                    "output": output.display().to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                log::info!("wrote heart texture -> {}", output.display());
            }
        }
        Command::Stats { scene } => {
            let scene = build_scene(&scene)?;
            let stats = scene.field().stats();
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                println!("circles:   {}", stats.circles);
                println!("grid:      {} x {}", stats.columns, stats.rows);
                println!("step:      {:.3}", stats.step);
                println!("scale:     {:.3} .. {:.3}", stats.min_scale, stats.max_scale);
            }
        }
        Command::Schema => {
            let schema = SceneConfig::schema();
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&schema)?);
            } else if let Some(params) = schema.as_object() {
                for (name, entry) in params {
                    println!(
                        "{name:<16} default {:<10} {}",
                        entry["default"].to_string(),
                        entry["description"].as_str().unwrap_or_default()
                    );
                }
            }
        }
        #[cfg(feature = "window")]
        Command::View { scene } => {
            let mut scene = build_scene(&scene)?;
            let frames = window::run(&mut scene)?;
            log::info!("window closed after {frames} frames");
        }
    }

    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            log::error!("{e}");
        }
        process::exit(e.exit_code());
    }
}
