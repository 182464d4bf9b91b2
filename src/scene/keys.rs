//! Discrete zoom input.
//!
//! This module defines [`ZoomKey`], which abstracts the zoom actions from the
//! physical keys that trigger them. Only key presses matter: each press moves
//! the zoom factor by one configured step.

/// Zoom actions triggered by a single key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZoomKey {
    /// Enlarge the surface (Up Arrow).
    In,
    /// Shrink the surface (Down Arrow).
    Out,
}

impl ZoomKey {
    /// Signed zoom change for one press, given the configured step.
    pub fn delta(self, step: f32) -> f32 {
        match self {
            ZoomKey::In => step,
            ZoomKey::Out => -step,
        }
    }

    /// Maps a key name, as reported by the windowing layer, to a zoom action.
    ///
    /// Matching is case-insensitive. Unmapped keys return `None`.
    pub fn from_key_name(name: &str) -> Option<ZoomKey> {
        match name.to_ascii_lowercase().as_str() {
            "arrowup" | "up" => Some(ZoomKey::In),
            "arrowdown" | "down" => Some(ZoomKey::Out),
            _ => None,
        }
    }
}
