//! Saddle - transforms for rendering a parametric surface
//!
//! This crate builds the model, view and projection matrices used to draw a
//! hyperbolic paraboloid. The renderer itself is an external collaborator: it
//! consumes the flat column-major matrix buffers and the grid mesh produced
//! here.
//!
//! # Architecture
//! - `math/`: [`Vec3`](math::Vec3) and [`Mat4`](math::Mat4) with the transform factories
//! - `scene/`: per-frame transform state driven by time, resize and zoom keys
//! - `surface`: the grid mesh and the saddle height function
//! - `uniform`: the byte image of the per-frame uniform block

#![warn(missing_docs)]
pub mod math;
pub mod scene;
pub mod surface;
pub mod uniform;
