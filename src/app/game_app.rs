// src/app/game_app.rs

use std::sync::{Arc, Mutex};

use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};
use js_sys::Error;
use log::{error, info, warn};

use crate::config::SceneConfig;
use crate::input::KeyboardState;
use crate::scene::{GameplayScene, Scene, SceneTransition};

use super::browser_event_manager::{self, lock_keyboard, KeyboardListenersSlot};
use super::frame_clock::FrameClock;
use super::init_handler;
use super::renderer::{self, Textures};
use super::state_getter;

// --- ゲーム全体のアプリケーション状態を管理する構造体 ---
#[wasm_bindgen]
pub struct GameApp {
    scene: GameplayScene,
    // キーボードの状態はリスナーのクロージャと共有するので Arc<Mutex<>> で持つ
    keyboard: Arc<Mutex<KeyboardState>>,
    // window に付けたリスナー (付けてない時は None)
    keyboard_listeners: KeyboardListenersSlot,
    clock: FrameClock,
    // Escape で決まった次のシーン。JS 側が取りに来るまで持っておく
    pending_transition: Option<String>,
    finished: bool,
    textures: Textures,
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl GameApp {
    fn from_config(canvas_id: &str, config: SceneConfig) -> Result<GameApp, JsValue> {
        info!("GameApp: 初期化中...");
        let (canvas, context) = init_handler::initialize_canvas(canvas_id, &config)?;
        let scene = init_handler::initialize_scene(config);
        info!("GameApp: 初期化完了。");
        Ok(Self {
            scene,
            keyboard: Arc::new(Mutex::new(KeyboardState::new())),
            keyboard_listeners: Arc::new(Mutex::new(None)),
            clock: FrameClock::new(),
            pending_transition: None,
            finished: false,
            textures: Textures::default(),
            canvas,
            context,
        })
    }
}

#[wasm_bindgen]
impl GameApp {
    /// デフォルト設定でアプリを作る。`canvas_id` の Canvas に描くよ。
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str) -> Result<GameApp, JsValue> {
        Self::from_config(canvas_id, SceneConfig::default())
    }

    /// JSON で設定を上書きして作る。書いてない項目はデフォルトのまま。
    pub fn with_config(canvas_id: &str, config_json: &str) -> Result<GameApp, JsValue> {
        let config = SceneConfig::from_json(config_json).map_err(|e| {
            error!("GameApp: 設定の読み込みに失敗: {}", e);
            JsValue::from(Error::new(&e))
        })?;
        Self::from_config(canvas_id, config)
    }

    pub fn attach_keyboard_listeners(&self) -> Result<(), JsValue> {
        browser_event_manager::attach_keyboard_listeners(
            Arc::clone(&self.keyboard),
            &self.keyboard_listeners,
        )
    }

    pub fn detach_keyboard_listeners(&self) -> Result<(), JsValue> {
        browser_event_manager::detach_keyboard_listeners(&self.keyboard, &self.keyboard_listeners)
    }

    /// JS 側で自分でイベントを拾う場合用。関係あるキーなら true。
    pub fn key_down(&self, key: &str) -> bool {
        lock_keyboard(&self.keyboard).key_down(key)
    }

    pub fn key_up(&self, key: &str) -> bool {
        lock_keyboard(&self.keyboard).key_up(key)
    }

    /// 読み込み済みの画像を渡してもらう。None ならその部分は描かない。
    pub fn set_textures(
        &mut self,
        background: Option<HtmlImageElement>,
        character_sheet: Option<HtmlImageElement>,
    ) {
        self.textures = Textures { background, character_sheet };
    }

    /// requestAnimationFrame から毎フレーム呼ぶ。
    /// シーンがまだ続いていれば true、次のシーンに切り替わったら false。
    pub fn frame(&mut self, timestamp_ms: f64) -> bool {
        if self.finished {
            return false;
        }
        let delta_seconds = self.clock.tick(timestamp_ms);

        // キーの状態と終了リクエストはフレームの最初に一回だけ読む
        let (input, exit_requested) = {
            let mut keyboard = lock_keyboard(&self.keyboard);
            (keyboard.snapshot(), keyboard.take_exit_request())
        };

        match self.scene.update(&input, exit_requested, delta_seconds) {
            SceneTransition::Continue => true,
            SceneTransition::Start(next) => {
                info!("GameApp: シーン切り替え {} -> {}", self.scene.key(), next);
                self.pending_transition = Some(next);
                self.finished = true;
                if let Err(e) = self.detach_keyboard_listeners() {
                    warn!("GameApp: リスナーの解除に失敗: {:?}", e);
                }
                false
            }
        }
    }

    /// 今の状態を Canvas に描く。
    pub fn render(&self) -> Result<(), JsValue> {
        let player = self.scene.player_snapshot();
        renderer::render_scene(
            &self.canvas,
            &self.context,
            &self.textures,
            self.scene.config(),
            player.as_ref(),
        )
    }

    /// 次に開始するシーンのキー。一回取ったら None に戻る。
    pub fn take_scene_transition(&mut self) -> Option<String> {
        self.pending_transition.take()
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn get_player_state_json(&self) -> Result<String, JsValue> {
        state_getter::get_player_state_json(&self.scene).map_err(|e| JsValue::from(Error::new(&e)))
    }

    pub fn get_scene_state_json(&self) -> Result<String, JsValue> {
        let input = lock_keyboard(&self.keyboard).snapshot();
        state_getter::get_scene_state_json(
            self.scene.key(),
            &self.scene,
            input,
            self.pending_transition.as_deref(),
        )
        .map_err(|e| JsValue::from(Error::new(&e)))
    }
}

// GameApp が不要になった時に window のリスナーを外す
impl Drop for GameApp {
    fn drop(&mut self) {
        if let Err(e) = browser_event_manager::detach_keyboard_listeners(
            &self.keyboard,
            &self.keyboard_listeners,
        ) {
            error!("GameApp: 破棄中のリスナー解除に失敗: {:?}", e);
        }
    }
}
