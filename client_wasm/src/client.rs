use game_core::{Config, Flow, FrameLoop, GameSession, GameState};
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

use crate::canvas::CanvasRenderer;
use crate::input::BrowserInput;
use crate::logger;
use crate::ticker::{FrameTicker, HostPaced};

/// Main client state, owned by JavaScript
#[wasm_bindgen]
pub struct Client {
    frames: FrameLoop<CanvasRenderer, BrowserInput, HostPaced>,
    ticker: FrameTicker,
    canvas: HtmlCanvasElement,
    running: bool,
}

#[wasm_bindgen]
impl Client {
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement) -> Result<Client, JsValue> {
        logger::init(log::LevelFilter::Info);

        let config = Config::new();
        let renderer = CanvasRenderer::new(
            &canvas,
            config.arena_width.unsigned_abs(),
            config.arena_height.unsigned_abs(),
        )?;
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            document.set_title("2D Table Tennis");
        }

        let seed = (js_sys::Math::random() * f64::from(u32::MAX)) as u64;
        let ticker = FrameTicker::new(config.tick_rate);
        let session = GameSession::new(config, seed);
        log::info!("client ready (seed {})", seed);

        Ok(Self {
            frames: FrameLoop::new(session, renderer, BrowserInput::new(), HostPaced),
            ticker,
            canvas,
            running: true,
        })
    }

    /// Forward a `keydown` event's `key`. Returns true if the game uses it,
    /// so the page can call `preventDefault` (arrow keys scroll otherwise).
    pub fn key_down(&mut self, key: &str) -> bool {
        self.frames.input_mut().key_down(key)
    }

    pub fn key_up(&mut self, key: &str) -> bool {
        self.frames.input_mut().key_up(key)
    }

    /// Page lost focus: key-up events will not arrive
    pub fn blur(&mut self) {
        self.frames.input_mut().release_all();
    }

    /// Pointer press at CSS pixel offsets inside the canvas
    pub fn pointer_click(&mut self, offset_x: f64, offset_y: f64) {
        let client_w = f64::from(self.canvas.client_width().max(1));
        let client_h = f64::from(self.canvas.client_height().max(1));
        let x = offset_x * f64::from(self.canvas.width()) / client_w;
        let y = offset_y * f64::from(self.canvas.height()) / client_h;
        self.frames.input_mut().pointer_click(x as i32, y as i32);
    }

    /// Page is going away (`pagehide`)
    pub fn close(&mut self) {
        self.frames.input_mut().close();
    }

    /// Call from `requestAnimationFrame` with its timestamp. Runs every game
    /// tick that is due and returns false once the loop has stopped.
    pub fn frame(&mut self, now_ms: f64) -> Result<bool, JsValue> {
        if !self.running {
            return Ok(false);
        }

        for _ in 0..self.ticker.advance(now_ms) {
            if self.frames.frame()? == Flow::Exit {
                self.running = false;
                break;
            }
        }
        Ok(self.running)
    }

    #[wasm_bindgen(getter)]
    pub fn state(&self) -> String {
        match self.frames.session().state() {
            GameState::Menu => "menu",
            GameState::Playing => "playing",
            GameState::Paused => "paused",
        }
        .to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn score_left(&self) -> u32 {
        self.frames.session().score().left
    }

    #[wasm_bindgen(getter)]
    pub fn score_right(&self) -> u32 {
        self.frames.session().score().right
    }
}
