//! Browser implementations: canvas surface and `setInterval` timer

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::timer::{Timer, TimerHandle};
use crate::renderer::Surface;

/// A `<canvas>` element and its 2D context
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Look up a canvas by element id. `None` if it is missing or has no
    /// 2D context, in which case the play simply isn't drawn.
    pub fn by_id(id: &str) -> Option<Self> {
        let document = web_sys::window()?.document()?;
        let canvas: HtmlCanvasElement = document.get_element_by_id(id)?.dyn_into().ok()?;
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self { canvas, ctx })
    }
}

impl Surface for CanvasSurface {
    fn set_size(&mut self, width: f32, height: f32) {
        self.canvas.set_width(width as u32);
        self.canvas.set_height(height as u32);
    }

    fn set_fill_style(&mut self, color: &str) {
        self.ctx.set_fill_style_str(color);
    }

    fn set_stroke_style(&mut self, color: &str) {
        self.ctx.set_stroke_style_str(color);
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.ctx.fill_rect(x as f64, y as f64, w as f64, h as f64);
    }

    fn stroke_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.ctx.stroke_rect(x as f64, y as f64, w as f64, h as f64);
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn move_to(&mut self, x: f32, y: f32) {
        self.ctx.move_to(x as f64, y as f64);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.ctx.line_to(x as f64, y as f64);
    }

    fn arc(&mut self, cx: f32, cy: f32, radius: f32, start: f32, end: f32) {
        if let Err(e) = self
            .ctx
            .arc(cx as f64, cy as f64, radius as f64, start as f64, end as f64)
        {
            log::warn!("arc failed: {:?}", e);
        }
    }

    fn close_path(&mut self) {
        self.ctx.close_path();
    }

    fn fill(&mut self) {
        self.ctx.fill();
    }

    fn stroke(&mut self) {
        self.ctx.stroke();
    }
}

/// `window.setInterval` running a fixed callback
pub struct IntervalTimer {
    callback: Closure<dyn FnMut()>,
}

impl IntervalTimer {
    pub fn new(callback: Closure<dyn FnMut()>) -> Self {
        Self { callback }
    }
}

impl Timer for IntervalTimer {
    fn schedule(&mut self, interval_ms: u32) -> Option<TimerHandle> {
        let window = web_sys::window()?;
        match window.set_interval_with_callback_and_timeout_and_arguments_0(
            self.callback.as_ref().unchecked_ref(),
            interval_ms as i32,
        ) {
            Ok(id) => Some(TimerHandle(id)),
            Err(e) => {
                log::warn!("setInterval failed: {:?}", e);
                None
            }
        }
    }

    fn cancel(&mut self, handle: TimerHandle) {
        if let Some(window) = web_sys::window() {
            window.clear_interval_with_handle(handle.0);
        }
    }
}
