//! Sprite loading. Everything is fetched before the first frame; once
//! `Assets::load` resolves the renderer assumes the images are ready.

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlImageElement;

/// Ball spin animation: five frames, 50ms each, looping
pub const BALL_FRAME_COUNT: usize = 5;
pub const BALL_FRAME_MS: f32 = 50.0;

pub struct Assets {
    pub background: HtmlImageElement,
    pub paddle_left: HtmlImageElement,
    pub paddle_right: HtmlImageElement,
    pub ball_frames: Vec<HtmlImageElement>,
}

impl Assets {
    pub async fn load(base: &str) -> Result<Self, JsValue> {
        let background = load_image(&format!("{base}/starfield.jpg")).await?;
        let paddle_left = load_image(&format!("{base}/paddle-vertical-left.png")).await?;
        let paddle_right = load_image(&format!("{base}/paddle-vertical-right.png")).await?;

        let mut ball_frames = Vec::with_capacity(BALL_FRAME_COUNT);
        for i in 1..=BALL_FRAME_COUNT {
            ball_frames.push(load_image(&format!("{base}/ball_{i}.png")).await?);
        }

        Ok(Self {
            background,
            paddle_left,
            paddle_right,
            ball_frames,
        })
    }
}

async fn load_image(src: &str) -> Result<HtmlImageElement, JsValue> {
    let image = HtmlImageElement::new()?;
    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        image.set_onload(Some(&resolve));
        image.set_onerror(Some(&reject));
    });
    image.set_src(src);
    JsFuture::from(promise).await?;
    Ok(image)
}
