//! Per-frame transform driver for the surface.
//!
//! This module turns the scalars the windowing layer produces (elapsed time,
//! framebuffer size, zoom key presses) into the model-view and
//! model-view-projection matrices the renderer uploads each frame.
//!
//! # Pipeline
//! Each frame composes, right to left:
//! - a fixed tilt about X,
//! - a spin about Y proportional to elapsed time,
//! - a uniform zoom scale,
//! - a fixed camera translation,
//!
//! giving `MV = T * S * Ry * Rx` and `MVP = P * MV`.

mod keys;


pub use keys::ZoomKey;

use crate::math::{Mat4, Vec3};
use std::f32::consts::PI;

/// Configuration for the surface scene.
#[derive(Debug, Clone)]
pub struct SceneConfig {
    /// Near clip plane distance.
    pub near: f32,
    /// Far clip plane distance.
    pub far: f32,
    /// Vertical field of view in radians.
    pub fov_rad: f32,
    /// Aspect ratio before the first resize.
    pub initial_aspect: f32,
    /// Zoom factor before any key press.
    pub initial_zoom: f32,
    /// Zoom change per key press.
    pub zoom_step: f32,
    /// Camera translation applied after the model transforms.
    pub camera_offset: Vec3,
    /// Fixed rotation about X, in radians.
    pub tilt_rad: f32,
    /// Rotation rate about Y, in radians per second.
    pub spin_rate: f32,
    /// Vertices per side of the surface grid.
    pub grid_size: usize,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            near: 0.01,
            far: 1000.0,
            fov_rad: crate::math::deg_to_rad(45.0),
            initial_aspect: 4.0 / 3.0,
            initial_zoom: 1.0,
            zoom_step: 0.2,
            camera_offset: Vec3::new(0.0, 0.0, -5.0),
            tilt_rad: -PI / 1.75,
            spin_rate: PI / 2.0,
            grid_size: 100,
        }
    }
}

/// Matrices produced for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameMatrices {
    /// Model-view matrix.
    pub model_view: Mat4,
    /// Model-view-projection matrix.
    pub mvp: Mat4,
    /// Upper-left 3x3 block of the model-view matrix, column-major.
    pub normal: [f32; 9],
}

/// Mutable per-window transform state.
#[derive(Debug, Clone)]
pub struct SceneTransforms {
    config: SceneConfig,
    aspect: f32,
    zoom: f32,
    scale: Vec3,
    translation: Mat4,
}

impl Default for SceneTransforms {
    fn default() -> Self {
        Self::new(SceneConfig::default())
    }
}

impl SceneTransforms {
    /// Creates the transform state from `config`.
    pub fn new(config: SceneConfig) -> Self {
        let translation = Mat4::translation(&config.camera_offset);
        Self {
            aspect: config.initial_aspect,
            zoom: config.initial_zoom,
            scale: Vec3::new(1.0, 1.0, 1.0),
            translation,
            config,
        }
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Updates the aspect ratio after a framebuffer resize.
    ///
    /// A zero height (minimised window) is ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if height == 0 {
            log::warn!("Ignoring resize to {}x{}: zero height", width, height);
            return;
        }
        self.aspect = width as f32 / height as f32;
        log::debug!("Resized to {}x{}, aspect {}", width, height, self.aspect);
    }

    /// Applies one zoom key press.
    pub fn press(&mut self, key: ZoomKey) {
        self.zoom += key.delta(self.config.zoom_step);
        log::debug!("{:?} pressed, zoom {}", key, self.zoom);
    }

    /// Builds the matrices for the frame at `time_secs` since start.
    pub fn frame(&mut self, time_secs: f32) -> FrameMatrices {
        let rx = Mat4::rotation(&Vec3::new(1.0, 0.0, 0.0), self.config.tilt_rad);
        let ry = Mat4::rotation(&Vec3::new(0.0, 1.0, 0.0), time_secs * self.config.spin_rate);

        self.scale.set_xyz(self.zoom);
        let s = Mat4::scaling(&self.scale);

        let p = Mat4::perspective_projection(
            self.config.near,
            self.config.far,
            self.aspect,
            self.config.fov_rad,
        );

        let model_view = self.translation * s * ry * rx;
        let mvp = p * model_view;

        FrameMatrices {
            model_view,
            mvp,
            normal: model_view.upper_left_3x3(),
        }
    }
}
