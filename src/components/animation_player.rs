// src/components/animation_player.rs

use serde::Serialize;

use crate::component::Component;
use crate::logic::animation::{AnimationLibrary, Repeat};

/// スプライトのアニメーション再生状態だよ！🎞️
///
/// どのクリップの何コマ目を表示しているか、次のコマまでの経過時間、
/// 何回ループしたか、を持つ。クリップの中身は `AnimationLibrary` 側。
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AnimationPlayer {
    current_key: Option<String>,
    /// クリップ内の位置 (0 始まり)
    cursor: usize,
    /// シートのコマ番号 (描画に使う)
    frame: usize,
    elapsed: f32,
    repeats_done: u32,
    playing: bool,
}

impl AnimationPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// クリップを再生する。
    ///
    /// `ignore_if_playing` が true で、同じクリップを再生中なら何もしない
    /// (コマ位置も経過時間もそのまま)。
    /// 実際に (再) スタートした時だけ true を返すよ。
    pub fn play(&mut self, library: &AnimationLibrary, key: &str, ignore_if_playing: bool) -> bool {
        if ignore_if_playing && self.playing && self.current_key.as_deref() == Some(key) {
            return false;
        }
        let clip = match library.get(key) {
            Some(clip) => clip,
            None => {
                log::warn!("AnimationPlayer: unknown clip '{}', ignored.", key);
                return false;
            }
        };
        self.current_key = Some(clip.key.clone());
        self.cursor = 0;
        self.frame = clip.frames[0];
        self.elapsed = 0.0;
        self.repeats_done = 0;
        self.playing = true;
        true
    }

    /// 時間を進めて、必要ならコマを送る。
    pub fn update(&mut self, library: &AnimationLibrary, delta_seconds: f32) {
        if !self.playing || !delta_seconds.is_finite() || delta_seconds <= 0.0 {
            return;
        }
        let clip = match self.current_key.as_deref().and_then(|key| library.get(key)) {
            Some(clip) => clip,
            None => return,
        };
        let frame_duration = match clip.frame_duration() {
            Some(duration) => duration,
            None => return,
        };

        self.elapsed += delta_seconds;

        // 何周分も溜まったら、丸ごとの周回はまとめて飛ばす (ループは最大2周分しか回らない)
        let cycle = frame_duration * clip.frames.len() as f32;
        if self.elapsed >= cycle * 2.0 {
            let skipped = (self.elapsed / cycle).floor() - 1.0;
            self.repeats_done = self.repeats_done.saturating_add(skipped.min(u32::MAX as f32) as u32);
            self.elapsed = cycle + self.elapsed % cycle;
        }

        while self.elapsed >= frame_duration {
            self.elapsed -= frame_duration;

            if self.cursor + 1 < clip.frames.len() {
                self.cursor += 1;
            } else {
                // 最後のコマまで来た
                let finished = match clip.repeat {
                    Repeat::Forever => false,
                    Repeat::Times(times) => self.repeats_done >= times,
                };
                if finished {
                    self.playing = false;
                    self.elapsed = 0.0;
                    break;
                }
                self.repeats_done = self.repeats_done.saturating_add(1);
                self.cursor = 0;
            }
            self.frame = clip.frames[self.cursor];
        }
    }

    pub fn current_key(&self) -> Option<&str> {
        self.current_key.as_deref()
    }

    pub fn current_frame(&self) -> usize {
        self.frame
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }
}

impl Component for AnimationPlayer {}
