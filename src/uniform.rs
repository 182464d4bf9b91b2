//! Uniform block handed to the renderer.
//!
//! This module provides the [`Uniforms`] struct, which packs the per-frame
//! matrices into the exact byte image the renderer uploads.

use crate::scene::FrameMatrices;

/// Uniforms for the surface shader.
///
/// Both matrices are stored as flat column-major buffers, matching `u_mv` and
/// `u_mvp` in the vertex stage.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Uniforms {
    /// Model-view matrix.
    pub mv: [f32; 16],
    /// Model-view-projection matrix.
    pub mvp: [f32; 16],
}

impl Default for Uniforms {
    /// Returns a new [`Uniforms`] with all elements set to zero.
    fn default() -> Self {
        Self::new()
    }
}

impl Uniforms {
    /// Creates a new [`Uniforms`] with all elements set to zero.
    pub fn new() -> Self {
        Self {
            mv: [0.0; 16],
            mvp: [0.0; 16],
        }
    }

    /// Copies the frame's matrices in.
    pub fn update(&mut self, frame: &FrameMatrices) {
        self.mv = *frame.model_view.ptr();
        self.mvp = *frame.mvp.ptr();
    }

    /// Returns the raw bytes of the uniform struct for uploading to the GPU.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

impl From<&FrameMatrices> for Uniforms {
    fn from(frame: &FrameMatrices) -> Self {
        let mut uniforms = Uniforms::new();
        uniforms.update(frame);
        uniforms
    }
}
