// src/input.rs
//! キーボード入力の状態を管理するよ！⌨️
//!
//! ブラウザの keydown / keyup イベントで `KeyboardState` を更新して、
//! 毎フレームの最初に `snapshot()` で「今押されているか」だけを取り出す。
//! Escape はイベントのコールバックでシーンを切り替えたりせず、フラグを立てておくだけ。
//! シーンが1フレームに1回 `take_exit_request()` で確認するよ。

use serde::Serialize;

/// 1フレーム分の方向キーの状態。全部の組み合わせがあり得る。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct InputSnapshot {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

/// このシーンが気にするキー
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Escape,
}

impl Key {
    /// `KeyboardEvent.key` の文字列からキーを判定する。関係ないキーは None。
    /// 古いブラウザの "Left" / "Esc" みたいな名前も受け付けるよ。
    pub fn from_key_name(name: &str) -> Option<Key> {
        match name {
            "ArrowUp" | "Up" => Some(Key::Up),
            "ArrowDown" | "Down" => Some(Key::Down),
            "ArrowLeft" | "Left" => Some(Key::Left),
            "ArrowRight" | "Right" => Some(Key::Right),
            "Escape" | "Esc" => Some(Key::Escape),
            _ => None,
        }
    }
}

#[derive(Debug, Default)]
pub struct KeyboardState {
    held: InputSnapshot,
    exit_requested: bool,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// keydown を反映する。知らないキーなら false を返す (preventDefault しない目印)。
    pub fn key_down(&mut self, name: &str) -> bool {
        let key = match Key::from_key_name(name) {
            Some(key) => key,
            None => return false,
        };
        match key {
            Key::Up => self.held.up = true,
            Key::Down => self.held.down = true,
            Key::Left => self.held.left = true,
            Key::Right => self.held.right = true,
            Key::Escape => {
                if !self.exit_requested {
                    log::info!("Input: Escape pressed, exit requested.");
                }
                self.exit_requested = true;
            }
        }
        true
    }

    pub fn key_up(&mut self, name: &str) -> bool {
        let key = match Key::from_key_name(name) {
            Some(key) => key,
            None => return false,
        };
        match key {
            Key::Up => self.held.up = false,
            Key::Down => self.held.down = false,
            Key::Left => self.held.left = false,
            Key::Right => self.held.right = false,
            // Escape は押した瞬間だけ意味があるので、離しても何もしない
            Key::Escape => {}
        }
        true
    }

    /// 押しっぱなしの状態を全部クリアする (ウィンドウのフォーカスが外れた時とか)。
    /// 終了リクエストは消さない。
    pub fn release_all(&mut self) {
        self.held = InputSnapshot::default();
    }

    pub fn snapshot(&self) -> InputSnapshot {
        self.held
    }

    /// 終了リクエストを取り出してクリアする。
    pub fn take_exit_request(&mut self) -> bool {
        std::mem::take(&mut self.exit_requested)
    }
}
