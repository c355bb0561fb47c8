// src/app/init_handler.rs
//! GameApp の初期化 (Canvas の準備とシーンの作成) に関するロジック。

use js_sys::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, CanvasRenderingContext2d, HtmlCanvasElement};

use crate::config::SceneConfig;
use crate::scene::{GameplayScene, Scene};

fn js_error(message: &str) -> JsValue {
    JsValue::from(Error::new(message))
}

/// id で Canvas を探して、ワールドの大きさに合わせて 2D コンテキストを取ってくる。
pub(crate) fn initialize_canvas(
    canvas_id: &str,
    config: &SceneConfig,
) -> Result<(HtmlCanvasElement, CanvasRenderingContext2d), JsValue> {
    log::info!("App::Init: looking up canvas '{}'", canvas_id);
    let document = window()
        .ok_or_else(|| js_error("Failed to get window"))?
        .document()
        .ok_or_else(|| js_error("Failed to get document"))?;

    let canvas = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| js_error(&format!("Canvas element '{}' not found", canvas_id)))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| js_error(&format!("Element '{}' is not a canvas", canvas_id)))?;

    canvas.set_width(config.world_width.round() as u32);
    canvas.set_height(config.world_height.round() as u32);

    let context = canvas
        .get_context("2d")?
        .ok_or_else(|| js_error("Canvas has no 2d context"))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| js_error("Failed to cast to CanvasRenderingContext2d"))?;

    log::info!(
        "App::Init: canvas ready ({} x {})",
        canvas.width(),
        canvas.height()
    );
    Ok((canvas, context))
}

/// ゲームプレイシーンを作って create() まで済ませる。
pub(crate) fn initialize_scene(config: SceneConfig) -> GameplayScene {
    let mut scene = GameplayScene::new(config);
    scene.create();
    scene
}
