//! Saddle - headless frame driver
//!
//! Runs the per-frame transform pipeline without a window: it builds the
//! surface grid, simulates a short sequence of frames with a resize and a zoom
//! key press in between, and prints the resulting matrices. Useful for checking
//! the numbers the renderer would receive.
//!
//! # Usage
//! Run with `cargo run`. Set `RUST_LOG=debug` to see input handling.

use saddle::scene::{SceneConfig, SceneTransforms, ZoomKey};
use saddle::surface::SurfaceGrid;
use saddle::uniform::Uniforms;

#[cfg(feature = "dhat-heap")]
#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

/// Timestamps, in seconds, of the simulated frames.
const FRAME_TIMES: [f32; 4] = [0.0, 0.5, 1.0, 2.0];

fn main() {
    #[cfg(feature = "dhat-heap")]
    let _profiler = dhat::Profiler::new_heap();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = SceneConfig::default();
    let grid = SurfaceGrid::new(config.grid_size);
    log::info!(
        "Surface grid: {} vertices, {} indices ({} bytes)",
        grid.vertices.len(),
        grid.index_count(),
        grid.vertex_bytes().len() + grid.index_bytes().len()
    );

    let mut scene = SceneTransforms::new(config);
    let mut uniforms = Uniforms::new();

    for (frame_index, &time) in FRAME_TIMES.iter().enumerate() {
        match frame_index {
            1 => scene.resize(800, 600),
            2 => {
                if let Some(key) = ZoomKey::from_key_name("ArrowUp") {
                    scene.press(key);
                }
            }
            _ => {}
        }

        let frame = scene.frame(time);
        uniforms.update(&frame);
        log::info!(
            "Frame {} at t={}s: aspect {}, zoom {}, {} uniform bytes",
            frame_index,
            time,
            scene.aspect(),
            scene.zoom(),
            uniforms.as_bytes().len()
        );

        println!("MVP:");
        frame.mvp.print();
    }
}
