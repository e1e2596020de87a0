//! Browser client for the Pong arcade game.
//!
//! The page glue owns the requestAnimationFrame loop and the DOM event
//! listeners; it forwards everything through the exported hooks below.
//! Each frame samples the input state once, advances the owned
//! `GameSession`, and redraws the 2D canvas.

#![cfg(target_arch = "wasm32")]

mod assets;
mod input;
mod renderer;

use assets::{Assets, BALL_FRAME_COUNT, BALL_FRAME_MS};
use game_core::{Config, GameSession};
use input::InputState;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

pub struct Client {
    session: GameSession,
    input: InputState,
    assets: Assets,
    ctx: CanvasRenderingContext2d,
    spin_clock_ms: f32,
    last_frame_ms: Option<f64>,
}

impl Client {
    async fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d canvas context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        let assets = Assets::load("assets").await?;

        let config = Config::default();
        let pointer_start = config.field_height / 2.0;
        let seed = js_sys::Date::now() as u64;
        let session = GameSession::new(config, seed);

        Ok(Self {
            session,
            input: InputState::new(pointer_start),
            assets,
            ctx,
            spin_clock_ms: 0.0,
            last_frame_ms: None,
        })
    }

    fn frame(&mut self, now_ms: f64) -> Result<(), JsValue> {
        let dt_ms = match self.last_frame_ms {
            Some(prev) => (now_ms - prev) as f32,
            None => 16.6,
        };
        self.last_frame_ms = Some(now_ms);

        let sample = self.input.sample();
        self.session.advance_frame(&sample, dt_ms);

        if self.session.view().ball_spinning {
            self.spin_clock_ms += dt_ms;
        } else {
            self.spin_clock_ms = 0.0;
        }
        let ball_frame = (self.spin_clock_ms / BALL_FRAME_MS) as usize % BALL_FRAME_COUNT;

        renderer::draw_frame(&self.ctx, &self.assets, &self.session, ball_frame)
    }
}

// Global client storage for WASM bindings
static mut CLIENT: Option<Client> = None;

#[wasm_bindgen]
pub fn init_client(canvas: HtmlCanvasElement) -> js_sys::Promise {
    console_error_panic_hook::set_once();
    wasm_bindgen_futures::future_to_promise(async move {
        match Client::new(canvas).await {
            Ok(client) => {
                unsafe {
                    CLIENT = Some(client);
                }
                Ok(JsValue::UNDEFINED)
            }
            Err(e) => Err(e),
        }
    })
}

#[wasm_bindgen]
pub fn frame(now_ms: f64) -> Result<(), JsValue> {
    unsafe {
        if let Some(ref mut client) = CLIENT {
            client.frame(now_ms)
        } else {
            Err(JsValue::from_str("Client not initialized"))
        }
    }
}

#[wasm_bindgen]
pub fn pointer_moved(y: f32) {
    unsafe {
        if let Some(ref mut client) = CLIENT {
            client.input.pointer_moved(y);
        }
    }
}

#[wasm_bindgen]
pub fn pointer_pressed() {
    unsafe {
        if let Some(ref mut client) = CLIENT {
            let trigger = client.session.config().launch_trigger;
            client.input.pointer_pressed(trigger);
        }
    }
}

#[wasm_bindgen]
pub fn key_down(key: &str) {
    unsafe {
        if let Some(ref mut client) = CLIENT {
            let trigger = client.session.config().launch_trigger;
            client.input.key_down(key, trigger);
        }
    }
}

#[wasm_bindgen]
pub fn key_up(key: &str) {
    unsafe {
        if let Some(ref mut client) = CLIENT {
            client.input.key_up(key);
        }
    }
}
