// src/logic/movement.rs
//! プレイヤーの移動とアニメーションを1フレーム分決めるロジック！🐈
//!
//! 入力と今の位置から「速度」「再生するアニメーション」「向き」を決めるだけで、
//! World には触らない純粋な関数だよ。速度を物理に反映したり、アニメーションを
//! 再生したりするのは呼び出し側 (MovementControlSystem) のお仕事。

use serde::Serialize;

use crate::config::scene::{IDLE_CLIP, JUMP_VELOCITY, PLAYER_SPEED, WALK_CLIP};
use crate::input::InputSnapshot;
use crate::logic::bounds::WorldBounds;

/// 再生するアニメーション。フレームごとに毎回決め直す。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AnimationChoice {
    Walk,
    Idle,
}

impl AnimationChoice {
    pub fn clip_key(self) -> &'static str {
        match self {
            AnimationChoice::Walk => WALK_CLIP,
            AnimationChoice::Idle => IDLE_CLIP,
        }
    }
}

/// コントローラーが見るプレイヤーの状態 (フレーム開始時点)。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActorState {
    pub x: f32,
    pub y: f32,
    /// スプライトの見た目の半分の幅。0 より大きいこと。
    pub half_width: f32,
    pub facing_left: bool,
}

/// 1フレーム分の決定。
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MovementDecision {
    pub vx: f32,
    /// ジャンプした時だけ Some。None なら縦の速度には触らない。
    pub vy: Option<f32>,
    pub animation: AnimationChoice,
    pub facing_left: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovementController {
    pub speed: f32,
    pub jump_velocity: f32,
}

impl Default for MovementController {
    fn default() -> Self {
        Self {
            speed: PLAYER_SPEED,
            jump_velocity: JUMP_VELOCITY,
        }
    }
}

impl MovementController {
    pub fn new(speed: f32, jump_velocity: f32) -> Self {
        Self { speed, jump_velocity }
    }

    /// 1ティック分の移動を決めるよ。
    ///
    /// - 横の速度は毎回 0 から (慣性なし)
    /// - 上キー + 接地中ならジャンプ。押しっぱなしだと、落ちてきて接地ラインを
    ///   越えるたびにまた跳ぶ
    /// - 左 → 右 → 停止 の順で判定。左右同時押しは左が勝つ
    /// - 画面端から半分の幅以内では、その方向の入力は無視 (位置は書き換えない)
    pub fn tick(
        &self,
        actor: &ActorState,
        input: &InputSnapshot,
        bounds: &WorldBounds,
    ) -> MovementDecision {
        let vy = if input.up && bounds.is_grounded(actor.y) {
            Some(self.jump_velocity)
        } else {
            None
        };

        if input.left && actor.x > actor.half_width {
            MovementDecision {
                vx: -self.speed,
                vy,
                animation: AnimationChoice::Walk,
                facing_left: true,
            }
        } else if input.right && actor.x < bounds.width - actor.half_width {
            MovementDecision {
                vx: self.speed,
                vy,
                animation: AnimationChoice::Walk,
                facing_left: false,
            }
        } else {
            MovementDecision {
                vx: 0.0,
                vy,
                animation: AnimationChoice::Idle,
                facing_left: actor.facing_left,
            }
        }
    }
}
