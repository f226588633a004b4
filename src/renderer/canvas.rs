//! Canvas 2D render sink (browser only)

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::{FrameView, RenderSink, shapes};
use crate::error::{GameError, Result};

/// Paints each frame onto a `<canvas>` with the 2D context
pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    /// Size the canvas to the arena and grab its 2D context
    pub fn new(canvas: &HtmlCanvasElement, width: u32, height: u32) -> Result<Self> {
        canvas.set_width(width);
        canvas.set_height(height);

        let ctx = canvas
            .get_context("2d")
            .map_err(|e| GameError::SurfaceUnavailable(format!("{:?}", e)))?
            .ok_or_else(|| {
                GameError::SurfaceUnavailable("could not get 2D context from canvas".to_string())
            })?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| GameError::SurfaceUnavailable("context is not 2D".to_string()))?;

        Ok(Self { ctx })
    }

    /// Look up a canvas by element id and wrap it
    pub fn from_element_id(id: &str, width: u32, height: u32) -> Result<Self> {
        let canvas = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
            .ok_or_else(|| GameError::SurfaceUnavailable(format!("no element #{}", id)))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| GameError::SurfaceUnavailable(format!("#{} is not a canvas", id)))?;
        Self::new(&canvas, width, height)
    }
}

impl RenderSink for CanvasRenderer {
    fn present(&mut self, view: &FrameView) {
        for shape in shapes::scene(view) {
            self.ctx.set_fill_style_str(shape.color);
            self.ctx.fill_rect(
                shape.rect.x as f64,
                shape.rect.y as f64,
                shape.rect.width as f64,
                shape.rect.height as f64,
            );
        }
    }
}
