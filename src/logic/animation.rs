// src/logic/animation.rs
//! スプライトシートのアニメーションクリップを管理するよ！🎞️
//!
//! クリップは「コマ番号の並び + フレームレート + ループ設定」で、キーで登録する。
//! 再生中の状態 (どのクリップの何コマ目か) は `components::AnimationPlayer` が持つ。

use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repeat {
    /// ずっとループ
    Forever,
    /// 最初の1回に加えて n 回繰り返したら最後のコマで止まる
    Times(u32),
}

impl Repeat {
    /// 繰り返し回数から作る。マイナスならずっとループ。
    pub fn from_count(count: i32) -> Self {
        if count < 0 {
            Repeat::Forever
        } else {
            Repeat::Times(count as u32)
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnimationClip {
    pub key: String,
    /// スプライトシートのコマ番号。再生順。
    pub frames: Vec<usize>,
    pub frame_rate: f32,
    pub repeat: Repeat,
}

impl AnimationClip {
    pub fn new(key: &str, frames: Vec<usize>, frame_rate: f32, repeat: Repeat) -> Self {
        Self {
            key: key.to_string(),
            frames,
            frame_rate,
            repeat,
        }
    }

    /// 1コマの表示時間 (秒)。フレームレートが 0 以下なら None (進めない)。
    pub fn frame_duration(&self) -> Option<f32> {
        if self.frame_rate > 0.0 && self.frame_rate.is_finite() {
            Some(1.0 / self.frame_rate)
        } else {
            None
        }
    }
}

/// `start..=end` のコマ番号を並べるだけのヘルパー。
pub fn frame_range(start: usize, end: usize) -> Vec<usize> {
    (start..=end).collect()
}

/// 登録済みクリップの置き場所。シーンの create で作って、あとは読むだけ。
#[derive(Debug, Default)]
pub struct AnimationLibrary {
    clips: HashMap<String, AnimationClip>,
}

impl AnimationLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// クリップを登録する。同じキーが既にあるか、コマが空なら登録しないで false。
    pub fn create(&mut self, clip: AnimationClip) -> bool {
        if clip.frames.is_empty() {
            log::warn!("Animation: clip '{}' has no frames, skipped.", clip.key);
            return false;
        }
        if self.clips.contains_key(&clip.key) {
            log::warn!("Animation: clip '{}' already exists, skipped.", clip.key);
            return false;
        }
        log::debug!(
            "Animation: registered '{}' ({} frames @ {} fps)",
            clip.key,
            clip.frames.len(),
            clip.frame_rate
        );
        self.clips.insert(clip.key.clone(), clip);
        true
    }

    pub fn get(&self, key: &str) -> Option<&AnimationClip> {
        self.clips.get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_range_is_inclusive() {
        assert_eq!(frame_range(0, 9), vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
        assert_eq!(frame_range(3, 3), vec![3]);
    }

    #[test]
    fn duplicate_and_empty_clips_are_rejected() {
        let mut library = AnimationLibrary::new();
        assert!(library.create(AnimationClip::new("walk", frame_range(0, 9), 10.0, Repeat::Forever)));
        assert!(
            !library.create(AnimationClip::new("walk", vec![0], 5.0, Repeat::Forever)),
            "同じキーは二回登録できないはず"
        );
        assert!(!library.create(AnimationClip::new("empty", vec![], 10.0, Repeat::Forever)));

        assert_eq!(library.clips.len(), 1);
        // 最初に登録した方が残ってる
        assert_eq!(library.get("walk").map(|c| c.frames.len()), Some(10));
        assert!(library.get("empty").is_none());
    }

    #[test]
    fn negative_repeat_count_loops_forever() {
        assert_eq!(Repeat::from_count(-1), Repeat::Forever);
        assert_eq!(Repeat::from_count(0), Repeat::Times(0));
        assert_eq!(Repeat::from_count(3), Repeat::Times(3));
    }

    #[test]
    fn frame_duration_from_rate() {
        let clip = AnimationClip::new("walk", vec![0], 10.0, Repeat::Forever);
        assert_eq!(clip.frame_duration(), Some(0.1));
        let frozen = AnimationClip::new("still", vec![0], 0.0, Repeat::Forever);
        assert_eq!(frozen.frame_duration(), None);
    }
}
