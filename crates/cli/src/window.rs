//! Live preview window.
//!
//! Drives the scene once per display refresh: step the clock, composite into
//! a software surface, and push the packed `0x00RRGGBB` pixels to `minifb`.

use heartfield_core::Scene;
use heartfield_raster::SoftwareSurface;
use heartfield_scene::HeartScene;
use minifb::{Key, Window, WindowOptions};

use crate::error::CliError;

const TARGET_FPS: usize = 60;

/// Runs until the window is closed or Escape is pressed.
pub fn run(scene: &mut HeartScene) -> Result<u64, CliError> {
    let width = scene.config().width;
    let height = scene.config().height;
    let mut window = Window::new("heartfield", width, height, WindowOptions::default())
        .map_err(|e| CliError::Io(format!("window init failed: {e}")))?;
    window.set_target_fps(TARGET_FPS);

    let mut surface = SoftwareSurface::new(width, height)?;
    let mut frames = 0_u64;
    while window.is_open() && !window.is_key_down(Key::Escape) {
        scene.step()?;
        scene.render(&mut surface)?;
        window
            .update_with_buffer(&surface.buffer().to_packed_rgb(), width, height)
            .map_err(|e| CliError::Io(format!("window update failed: {e}")))?;
        frames += 1;
    }
    Ok(frames)
}
