//! Fixed-rate frame loop
//!
//! Each frame drains host events, advances or draws the current scene and
//! presents it. `run` blocks on a [`Clock`] between frames; hosts that own
//! their own timer (the browser) call [`FrameLoop::frame`] directly.

use std::time::{Duration, Instant};

use crate::{
    draw_menu, draw_paused, draw_playfield, GameSession, GameState, InputEvent, KeyState,
    Renderer,
};

/// Event and key source supplied by the host
pub trait InputSource {
    /// Take all events queued since the last call
    fn poll_events(&mut self) -> Vec<InputEvent>;
    /// Keys held right now
    fn held_keys(&self) -> KeyState;
}

/// Frame pacing
pub trait Clock {
    /// Block until the next tick is due
    fn wait_for_next_tick(&mut self);
}

/// Sleeps so that consecutive ticks are at least `interval` apart
#[derive(Debug)]
pub struct FixedRateClock {
    interval: Duration,
    last_tick: Instant,
}

impl FixedRateClock {
    pub fn new(tick_rate: u32) -> Self {
        Self {
            interval: Duration::from_secs(1) / tick_rate.max(1),
            last_tick: Instant::now(),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}

impl Clock for FixedRateClock {
    fn wait_for_next_tick(&mut self) {
        let elapsed = self.last_tick.elapsed();
        if elapsed < self.interval {
            std::thread::sleep(self.interval - elapsed);
        }
        self.last_tick = Instant::now();
    }
}

/// Whether the host should keep calling `frame`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct FrameLoop<R, I, C> {
    session: GameSession,
    renderer: R,
    input: I,
    clock: C,
}

impl<R: Renderer, I: InputSource, C: Clock> FrameLoop<R, I, C> {
    pub fn new(session: GameSession, renderer: R, input: I, clock: C) -> Self {
        Self {
            session,
            renderer,
            input,
            clock,
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    /// Run frames until the host reports a close
    pub fn run(&mut self) -> Result<(), R::Error> {
        while self.frame()? == Flow::Continue {
            self.clock.wait_for_next_tick();
        }
        log::info!("frame loop stopped");
        Ok(())
    }

    /// One iteration: events, update/draw for the current state, present.
    ///
    /// A close event still lets the current frame finish.
    pub fn frame(&mut self) -> Result<Flow, R::Error> {
        let mut flow = Flow::Continue;
        let pause_key = self.session.config().bindings.pause;

        for event in self.input.poll_events() {
            match event {
                InputEvent::Close => flow = Flow::Exit,
                InputEvent::PointerClick(pos) => {
                    self.session.handle_click(pos);
                }
                InputEvent::KeyPressed(key) if key == pause_key => {
                    self.session.toggle_pause();
                }
                InputEvent::KeyPressed(_) => {}
            }
        }

        match self.session.state() {
            GameState::Menu => draw_menu(&mut self.renderer, self.session.config())?,
            GameState::Playing => {
                let keys = self.input.held_keys();
                self.session.update(&keys);
                // A win sends the session back to the menu, but this frame
                // still shows the reset table
                draw_playfield(&mut self.renderer, &self.session)?;
            }
            GameState::Paused => {
                draw_playfield(&mut self.renderer, &self.session)?;
                draw_paused(&mut self.renderer, self.session.config())?;
            }
        }

        self.renderer.present()?;
        Ok(flow)
    }
}
