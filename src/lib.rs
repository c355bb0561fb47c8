// src/lib.rs

// WASM と JavaScript を繋ぐための基本！
use wasm_bindgen::prelude::*;

// 自分で作ったモジュールたち！ これでコードを整理してるんだ。
pub mod entity;
pub mod component;
pub mod world;
pub mod system;
pub mod components;
pub mod systems;
pub mod config;
pub mod input;
pub mod logic;
pub mod scene;
pub mod app;

// JS から使うのはこれ
pub use app::game_app::GameApp;

// main 関数の代わりに、Wasm がロードされた時に最初に実行される関数だよ。
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    init_logger();
}

// log クレートの出力先をブラウザの console にする (二回目以降は何もしない)
#[cfg(target_arch = "wasm32")]
fn init_logger() {
    if console_log::init_with_level(log::Level::Info).is_ok() {
        log::info!("Panic hook and logger set!");
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn init_logger() {}
