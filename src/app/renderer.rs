// src/app/renderer.rs
//! GameApp の描画関連ロジック。背景 → プレイヤー → 説明テキスト の順に描く。

use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use crate::config::scene::{
    BACKGROUND_CENTER_X, BACKGROUND_CENTER_Y, BACKGROUND_DISPLAY_HEIGHT, BACKGROUND_DISPLAY_WIDTH,
    INSTRUCTIONS_FILL, INSTRUCTIONS_FONT, INSTRUCTIONS_STROKE, INSTRUCTIONS_STROKE_WIDTH,
    INSTRUCTIONS_TEXT, INSTRUCTIONS_X, INSTRUCTIONS_Y,
};
use crate::config::SceneConfig;
use crate::scene::gameplay_scene::PlayerSnapshot;

/// ページ側で読み込み済みの画像。まだ無ければ None (その部分は描かない)。
#[derive(Default)]
pub(crate) struct Textures {
    pub background: Option<HtmlImageElement>,
    pub character_sheet: Option<HtmlImageElement>,
}

/// スプライトシート上のコマの左上座標 (横に並んで、端で折り返す前提)。
pub(crate) fn frame_source_rect(
    frame: usize,
    frame_width: f64,
    frame_height: f64,
    sheet_width: f64,
) -> (f64, f64) {
    let columns = if frame_width > 0.0 {
        ((sheet_width / frame_width).floor() as usize).max(1)
    } else {
        1
    };
    let column = frame % columns;
    let row = frame / columns;
    (column as f64 * frame_width, row as f64 * frame_height)
}

/// Rust 側で Canvas にシーンを描画する。
pub(crate) fn render_scene(
    canvas: &HtmlCanvasElement,
    context: &CanvasRenderingContext2d,
    textures: &Textures,
    config: &SceneConfig,
    player: Option<&PlayerSnapshot>,
) -> Result<(), JsValue> {
    context.clear_rect(0.0, 0.0, canvas.width() as f64, canvas.height() as f64);

    // --- 背景 (中心 (600, 300) に 1200x600 で) ---
    if let Some(background) = textures.background.as_ref() {
        context.draw_image_with_html_image_element_and_dw_and_dh(
            background,
            BACKGROUND_CENTER_X - BACKGROUND_DISPLAY_WIDTH / 2.0,
            BACKGROUND_CENTER_Y - BACKGROUND_DISPLAY_HEIGHT / 2.0,
            BACKGROUND_DISPLAY_WIDTH,
            BACKGROUND_DISPLAY_HEIGHT,
        )?;
    }

    if let Some(player) = player {
        draw_player(context, textures, config, player)?;
    }

    draw_instructions(context)?;
    Ok(())
}

fn draw_player(
    context: &CanvasRenderingContext2d,
    textures: &Textures,
    config: &SceneConfig,
    player: &PlayerSnapshot,
) -> Result<(), JsValue> {
    let display_width = player.display_width as f64;
    let display_height = player.display_height as f64;

    context.save();
    context.translate(player.x as f64, player.y as f64)?;
    if player.facing_left {
        // 左向きは左右反転
        context.scale(-1.0, 1.0)?;
    }

    let result = match textures.character_sheet.as_ref() {
        Some(sheet) => {
            let frame_width = config.frame_width as f64;
            let frame_height = config.frame_height as f64;
            let (sx, sy) = frame_source_rect(
                player.frame,
                frame_width,
                frame_height,
                sheet.natural_width() as f64,
            );
            context.draw_image_with_html_image_element_and_sw_and_sh_and_dx_and_dy_and_dw_and_dh(
                sheet,
                sx,
                sy,
                frame_width,
                frame_height,
                -display_width / 2.0,
                -display_height / 2.0,
                display_width,
                display_height,
            )
        }
        None => {
            // 画像がまだ無い時は四角で代用
            context.set_fill_style_str("#ff9900");
            context.fill_rect(-display_width / 2.0, -display_height / 2.0, display_width, display_height);
            Ok(())
        }
    };

    // 失敗しても変換行列は戻しておく
    context.restore();
    result
}

fn draw_instructions(context: &CanvasRenderingContext2d) -> Result<(), JsValue> {
    context.set_font(INSTRUCTIONS_FONT);
    context.set_text_align("center");
    context.set_text_baseline("middle");
    context.set_line_width(INSTRUCTIONS_STROKE_WIDTH);
    context.set_stroke_style_str(INSTRUCTIONS_STROKE);
    context.set_fill_style_str(INSTRUCTIONS_FILL);
    context.stroke_text(INSTRUCTIONS_TEXT, INSTRUCTIONS_X, INSTRUCTIONS_Y)?;
    context.fill_text(INSTRUCTIONS_TEXT, INSTRUCTIONS_X, INSTRUCTIONS_Y)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frames_wrap_to_next_row() {
        // 1行に4コマのシート
        assert_eq!(frame_source_rect(0, 100.0, 80.0, 400.0), (0.0, 0.0));
        assert_eq!(frame_source_rect(3, 100.0, 80.0, 400.0), (300.0, 0.0));
        assert_eq!(frame_source_rect(5, 100.0, 80.0, 400.0), (100.0, 80.0));
    }

    #[test]
    fn single_row_sheet_keeps_row_zero() {
        for frame in 0..10 {
            let (x, y) = frame_source_rect(frame, 256.0, 256.0, 2560.0);
            assert_eq!(x, frame as f64 * 256.0);
            assert_eq!(y, 0.0);
        }
    }

    #[test]
    fn narrow_or_unloaded_sheet_uses_one_column() {
        assert_eq!(frame_source_rect(2, 256.0, 256.0, 0.0), (0.0, 512.0));
        assert_eq!(frame_source_rect(2, 0.0, 256.0, 100.0), (0.0, 512.0));
    }
}
