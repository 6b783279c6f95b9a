//! Browser client for table tennis
//!
//! Draws through the canvas 2D API and feeds DOM input into `game_core`.
//! JavaScript owns the `Client` and calls `frame` from
//! `requestAnimationFrame`:
//!
//! ```js
//! const client = new Client(canvas);
//! addEventListener("keydown", (e) => { if (client.key_down(e.key)) e.preventDefault(); });
//! addEventListener("keyup", (e) => client.key_up(e.key));
//! addEventListener("blur", () => client.blur());
//! addEventListener("pagehide", () => client.close());
//! canvas.addEventListener("mousedown", (e) => client.pointer_click(e.offsetX, e.offsetY));
//! const tick = (t) => { if (client.frame(t)) requestAnimationFrame(tick); };
//! requestAnimationFrame(tick);
//! ```

pub mod input;
pub mod ticker;

#[cfg(target_arch = "wasm32")]
mod canvas;
#[cfg(target_arch = "wasm32")]
mod client;
#[cfg(target_arch = "wasm32")]
mod logger;

#[cfg(target_arch = "wasm32")]
pub use client::Client;
