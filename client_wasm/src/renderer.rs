//! 2D-canvas drawing of the field, entities, and HUD text

use crate::assets::Assets;
use game_core::hud;
use game_core::{GameSession, Side};
use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlImageElement};

pub fn draw_frame(
    ctx: &CanvasRenderingContext2d,
    assets: &Assets,
    session: &GameSession,
    ball_frame: usize,
) -> Result<(), JsValue> {
    let config = session.config();
    let view = session.view();

    ctx.draw_image_with_html_image_element(&assets.background, 0.0, 0.0)?;

    draw_centered(
        ctx,
        &assets.paddle_left,
        config.paddle_x(Side::Left) as f64,
        view.left_paddle_y as f64,
    )?;
    draw_centered(
        ctx,
        &assets.paddle_right,
        config.paddle_x(Side::Right) as f64,
        view.right_paddle_y as f64,
    )?;
    draw_centered(
        ctx,
        &assets.ball_frames[ball_frame],
        view.ball_x as f64,
        view.ball_y as f64,
    )?;

    let center_x = (config.field_width / 2.0) as f64;
    ctx.set_fill_style_str("#ffffff");
    ctx.set_text_align("center");

    if hud::scoreboard_visible(view.phase) {
        ctx.set_font("20px Arial");
        ctx.fill_text(
            &hud::scoreboard_text(&view.score),
            center_x,
            (config.field_height - 50.0) as f64,
        )?;
    }

    if let Some(text) = hud::banner_text(view.phase, &view.score, config) {
        ctx.set_font("40px Arial");
        ctx.fill_text(&text, center_x, 400.0)?;
    }

    Ok(())
}

fn draw_centered(
    ctx: &CanvasRenderingContext2d,
    image: &HtmlImageElement,
    x: f64,
    y: f64,
) -> Result<(), JsValue> {
    let w = image.width() as f64;
    let h = image.height() as f64;
    ctx.draw_image_with_html_image_element(image, x - w / 2.0, y - h / 2.0)
}
