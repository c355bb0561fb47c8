// src/config/mod.rs
//! シーンの設定値。定数 (`scene`) と、JS から JSON で上書きできる `SceneConfig`。

pub mod scene;
pub mod scene_config;

pub use scene_config::SceneConfig;
