//! Browser binding
//!
//! Exposes a [`WebGame`] to JavaScript. The page owns the canvas, DOM
//! overlays and the `requestAnimationFrame` loop; it forwards input events
//! and frame times here and draws [`WebGame::vertices`].

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;

use super::frame::FrameClock;
use crate::renderer;
use crate::session::Session;
use crate::sim::PaddleIntent;
use crate::tuning::Tuning;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // A second init (e.g. hot reload) is harmless
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Breaker Nano starting...");
}

/// Game instance driven by the page
#[wasm_bindgen]
pub struct WebGame {
    session: Session,
    clock: FrameClock,
    left_pressed: bool,
    right_pressed: bool,
    listener: Rc<RefCell<Option<js_sys::Function>>>,
}

#[wasm_bindgen]
impl WebGame {
    /// Create a game on the start screen; seeds from the clock when omitted
    #[wasm_bindgen(constructor)]
    pub fn new(seed: Option<f64>) -> WebGame {
        let seed = seed.unwrap_or_else(js_sys::Date::now) as u64;
        log::info!("Game initialized with seed: {}", seed);

        let mut session = Session::new(Tuning::default(), seed);
        let listener: Rc<RefCell<Option<js_sys::Function>>> = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&listener);
        session.subscribe(move |event| {
            let Some(name) = event.phase_name() else {
                return;
            };
            // The game is still borrowed here, so the value travels with the event
            let value = event
                .value()
                .map_or(JsValue::UNDEFINED, |v| JsValue::from_f64(v as f64));
            if let Some(callback) = sink.borrow().as_ref() {
                if let Err(e) = callback.call2(&JsValue::NULL, &JsValue::from_str(name), &value) {
                    log::warn!("Event listener threw: {:?}", e);
                }
            }
        });

        WebGame {
            session,
            clock: FrameClock::new(),
            left_pressed: false,
            right_pressed: false,
            listener,
        }
    }

    /// Register `callback(name, value)` for phase transitions
    ///
    /// `name` is "started", "leveled-up" (value: new level) or "game-over"
    /// (value: final score). The callback runs inside `frame`/`new_game`, so
    /// it must not call back into this game; defer that work to a microtask.
    pub fn set_listener(&mut self, callback: js_sys::Function) {
        *self.listener.borrow_mut() = Some(callback);
    }

    /// Start or restart (start and restart buttons)
    pub fn new_game(&mut self) {
        self.clock.reset();
        self.session.new_game();
        self.push_keys();
    }

    /// Run however many ticks `dt` seconds of wall time covers
    pub fn frame(&mut self, dt: f32) {
        for _ in 0..self.clock.advance(dt) {
            self.session.tick();
        }
    }

    pub fn key_down(&mut self, code: &str) {
        self.set_key(code, true);
    }

    pub fn key_up(&mut self, code: &str) {
        self.set_key(code, false);
    }

    /// Mouse/touch x relative to the canvas's left edge, in playfield pixels
    pub fn pointer_move(&mut self, x: f32) {
        self.session.set_paddle_intent(PaddleIntent::Pointer { x });
    }

    pub fn score(&self) -> f64 {
        self.session.score() as f64
    }

    /// Frozen score after game over, undefined otherwise
    pub fn final_score(&self) -> Option<f64> {
        self.session.final_score().map(|s| s as f64)
    }

    pub fn level(&self) -> u32 {
        self.session.level()
    }

    pub fn phase(&self) -> String {
        self.session.phase().as_str().to_string()
    }

    pub fn share_text(&self, url: &str) -> String {
        self.session.share_text(url)
    }

    /// Current frame as flat `[x, y, r, g, b, a]` triangles
    pub fn vertices(&self) -> Vec<f32> {
        let vertices = renderer::frame_vertices(self.session.state());
        bytemuck::cast_slice::<_, f32>(&vertices).to_vec()
    }
}

impl WebGame {
    fn set_key(&mut self, code: &str, pressed: bool) {
        match code {
            "ArrowLeft" => self.left_pressed = pressed,
            "ArrowRight" => self.right_pressed = pressed,
            _ => return,
        }
        self.push_keys();
    }

    fn push_keys(&mut self) {
        self.session.set_paddle_intent(PaddleIntent::Keys {
            left: self.left_pressed,
            right: self.right_pressed,
        });
    }
}
