use game_core::{Color, Font, Rect, Renderer};
use glam::IVec2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Canvas 2D implementation of the game's drawing contract
pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl CanvasRenderer {
    pub fn new(canvas: &HtmlCanvasElement, width: u32, height: u32) -> Result<Self, JsValue> {
        canvas.set_width(width);
        canvas.set_height(height);

        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("Canvas 2D context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        ctx.set_text_baseline("top");

        Ok(Self {
            ctx,
            width: f64::from(width),
            height: f64::from(height),
        })
    }

    fn set_fill(&self, color: Color) {
        let Color(r, g, b) = color;
        self.ctx
            .set_fill_style_str(&format!("rgb({}, {}, {})", r, g, b));
    }
}

impl Renderer for CanvasRenderer {
    type Error = JsValue;

    fn clear(&mut self, color: Color) -> Result<(), JsValue> {
        self.set_fill(color);
        self.ctx.fill_rect(0.0, 0.0, self.width, self.height);
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), JsValue> {
        self.set_fill(color);
        self.ctx.fill_rect(
            f64::from(rect.x),
            f64::from(rect.y),
            f64::from(rect.w),
            f64::from(rect.h),
        );
        Ok(())
    }

    fn fill_ellipse(&mut self, rect: Rect, color: Color) -> Result<(), JsValue> {
        let rx = f64::from(rect.w) / 2.0;
        let ry = f64::from(rect.h) / 2.0;
        self.set_fill(color);
        self.ctx.begin_path();
        self.ctx.ellipse(
            f64::from(rect.x) + rx,
            f64::from(rect.y) + ry,
            rx,
            ry,
            0.0,
            0.0,
            std::f64::consts::TAU,
        )?;
        self.ctx.fill();
        Ok(())
    }

    fn draw_text(&mut self, text: &str, font: Font, color: Color, pos: IVec2) -> Result<(), JsValue> {
        self.set_fill(color);
        self.ctx.set_font(&format!("{}px sans-serif", font.size()));
        self.ctx.fill_text(text, f64::from(pos.x), f64::from(pos.y))
    }

    fn present(&mut self) -> Result<(), JsValue> {
        // The browser composites the canvas once the animation frame returns
        Ok(())
    }
}
