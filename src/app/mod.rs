// src/app/mod.rs
//! GameApp の内部ロジックを役割ごとに分割して置くモジュールだよ！

pub mod browser_event_manager;
pub mod frame_clock;
pub mod game_app;
pub mod init_handler;
pub mod renderer;
pub mod state_getter;
