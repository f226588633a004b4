//! Rendering module
//!
//! The core only hands a [`FrameView`] to a [`RenderSink`] once per frame.
//! How (or whether) it gets drawn is up to the sink: the browser build paints
//! it onto a Canvas 2D context, the native build just logs.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod shapes;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;
pub use shapes::FillRect;

use glam::Vec2;

use crate::sim::Rect;

/// Read-only snapshot of everything a renderer may show
#[derive(Debug, Clone, PartialEq)]
pub struct FrameView {
    pub player: Rect,
    pub bounds: Vec2,
    pub score: u64,
    pub paused: bool,
    pub fps: u32,
}

/// Receives one frame per loop iteration
pub trait RenderSink {
    fn present(&mut self, view: &FrameView);
}
