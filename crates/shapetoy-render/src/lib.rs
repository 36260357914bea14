//! Shape Toy Render Library
//!
//! Renderer abstraction for the editor canvas. The default implementation
//! records each canvas layer into its own Vello scene and composites them.

mod renderer;

#[cfg(feature = "vello-renderer")]
mod vello_impl;

pub use renderer::{RenderContext, RenderResult, Renderer, RendererError};

#[cfg(feature = "vello-renderer")]
pub use vello_impl::{VelloRenderer, VelloSurface};
