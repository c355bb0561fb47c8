// src/logic/physics.rs
//! シンプルなアーケード物理だよ！🍎⬇️
//!
//! - 固定ステップ (1/60 秒) で積分する。描画フレームの長さはバラバラなので、
//!   `FixedTimestep` で時間を貯めて、何ステップ回すかを決める
//! - 1ステップ: 重力 → 速度 → 位置 → ワールド端との衝突
//! - 端にぶつかったら、ボディを中に押し戻して、その軸の速度を 0 にする (跳ね返りなし)

use serde::Serialize;

use crate::components::body::{Blocked, PhysicsBody};
use crate::components::position::Position;
use crate::components::sprite::Sprite;
use crate::components::velocity::Velocity;
use crate::config::scene::{MAX_PHYSICS_SUBSTEPS, PHYSICS_FPS};
use crate::logic::bounds::WorldBounds;

/// 当たり判定の四角 (ワールド座標、左上 + サイズ)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BodyRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl BodyRect {
    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }
}

/// スプライトの中心位置から、ボディの四角を計算する。
pub fn body_rect(position: &Position, sprite: &Sprite, body: &PhysicsBody) -> BodyRect {
    let display_width = sprite.display_width();
    let display_height = sprite.display_height();
    let sprite_left = position.x - display_width * 0.5;
    let sprite_top = position.y - display_height * 0.5;
    BodyRect {
        left: sprite_left + display_width * body.offset_x_factor,
        top: sprite_top + display_height * body.offset_y_factor,
        width: display_width * body.width_factor,
        height: display_height * body.height_factor,
    }
}

/// 1ステップ分だけ積分する。
pub fn step_body(
    position: &mut Position,
    velocity: &mut Velocity,
    body: &mut PhysicsBody,
    sprite: &Sprite,
    bounds: &WorldBounds,
    step_seconds: f32,
) {
    if body.allow_gravity {
        velocity.y += bounds.gravity_y * step_seconds;
    }
    position.x += velocity.x * step_seconds;
    position.y += velocity.y * step_seconds;

    body.blocked = Blocked::default();
    if body.collide_world_bounds {
        collide_with_world_bounds(position, velocity, body, sprite, bounds);
    }
}

fn collide_with_world_bounds(
    position: &mut Position,
    velocity: &mut Velocity,
    body: &mut PhysicsBody,
    sprite: &Sprite,
    bounds: &WorldBounds,
) {
    let rect = body_rect(position, sprite, body);

    if rect.left < 0.0 {
        position.x -= rect.left;
        velocity.x = 0.0;
        body.blocked.left = true;
    } else if rect.right() > bounds.width {
        position.x -= rect.right() - bounds.width;
        velocity.x = 0.0;
        body.blocked.right = true;
    }

    if rect.top < 0.0 {
        position.y -= rect.top;
        velocity.y = 0.0;
        body.blocked.up = true;
    } else if rect.bottom() > bounds.height {
        position.y -= rect.bottom() - bounds.height;
        velocity.y = 0.0;
        body.blocked.down = true;
    }
}

/// 可変長のフレーム時間を固定ステップに切り分けるよ。
#[derive(Debug, Clone, PartialEq)]
pub struct FixedTimestep {
    step_seconds: f32,
    max_substeps: u32,
    accumulator: f32,
}

impl Default for FixedTimestep {
    fn default() -> Self {
        Self::new(PHYSICS_FPS, MAX_PHYSICS_SUBSTEPS)
    }
}

impl FixedTimestep {
    pub fn new(fps: f32, max_substeps: u32) -> Self {
        Self {
            step_seconds: 1.0 / fps,
            max_substeps,
            accumulator: 0.0,
        }
    }

    pub fn step_seconds(&self) -> f32 {
        self.step_seconds
    }

    /// フレーム時間を足して、このフレームで回すステップ数を返す。
    /// 上限を超えた分の時間は捨てる (タブが裏にいた後とかに一気に進まないように)。
    pub fn advance(&mut self, delta_seconds: f32) -> u32 {
        if delta_seconds.is_finite() && delta_seconds > 0.0 {
            self.accumulator += delta_seconds;
        }
        let mut steps = 0;
        while self.accumulator >= self.step_seconds && steps < self.max_substeps {
            self.accumulator -= self.step_seconds;
            steps += 1;
        }
        if steps == self.max_substeps && self.accumulator >= self.step_seconds {
            log::debug!(
                "Physics: dropping {:.3}s of simulation time",
                self.accumulator
            );
            self.accumulator = 0.0;
        }
        steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> WorldBounds {
        WorldBounds { width: 1200.0, height: 600.0, ground_y: 480.0, gravity_y: 300.0 }
    }

    fn sprite() -> Sprite {
        Sprite::new("character", 256.0, 256.0, 0.5)
    }

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn body_rect_uses_size_and_offset_factors() {
        let rect = body_rect(&Position::new(170.0, 450.0), &sprite(), &PhysicsBody::default());
        // 表示サイズ 128x128、左上 (106, 386)
        assert!(approx(rect.left, 106.0 + 25.6));
        assert!(approx(rect.top, 386.0 + 25.6));
        assert!(approx(rect.width, 76.8));
        assert!(approx(rect.height, 102.4));
        assert!(approx(rect.bottom(), 514.0));
    }

    #[test]
    fn gravity_accumulates_vertical_velocity() {
        let mut pos = Position::new(600.0, 100.0);
        let mut vel = Velocity::default();
        let mut body = PhysicsBody::default();
        for _ in 0..60 {
            step_body(&mut pos, &mut vel, &mut body, &sprite(), &bounds(), 1.0 / 60.0);
        }
        assert!(approx(vel.y, 300.0), "1秒で重力分の速度になるはず: {}", vel.y);
        assert!(pos.y > 100.0, "下に落ちてるはず");
        assert_eq!(pos.x, 600.0);
    }

    #[test]
    fn floor_stops_the_body_and_zeroes_velocity() {
        let mut pos = Position::new(600.0, 530.0);
        let mut vel = Velocity { x: 0.0, y: 400.0 };
        let mut body = PhysicsBody::default();
        step_body(&mut pos, &mut vel, &mut body, &sprite(), &bounds(), 1.0 / 60.0);

        let rect = body_rect(&pos, &sprite(), &body);
        assert!(approx(rect.bottom(), 600.0));
        assert!(approx(pos.y, 536.0), "ボディの下端が 600 になる位置: {}", pos.y);
        assert_eq!(vel.y, 0.0);
        assert!(body.blocked.down);
    }

    #[test]
    fn side_walls_clamp_the_body() {
        let mut pos = Position::new(30.0, 300.0);
        let mut vel = Velocity { x: -160.0, y: 0.0 };
        let mut body = PhysicsBody::default();
        body.allow_gravity = false;
        step_body(&mut pos, &mut vel, &mut body, &sprite(), &bounds(), 1.0 / 60.0);
        let rect = body_rect(&pos, &sprite(), &body);
        assert!(approx(rect.left, 0.0));
        assert_eq!(vel.x, 0.0);
        assert!(body.blocked.left);

        let mut pos = Position::new(1190.0, 300.0);
        let mut vel = Velocity { x: 160.0, y: 0.0 };
        step_body(&mut pos, &mut vel, &mut body, &sprite(), &bounds(), 1.0 / 60.0);
        let rect = body_rect(&pos, &sprite(), &body);
        assert!(approx(rect.right(), 1200.0));
        assert!(body.blocked.right);
        assert!(!body.blocked.left, "blocked はステップごとにリセット");
    }

    #[test]
    fn ceiling_stops_upward_motion() {
        let mut pos = Position::new(600.0, 40.0);
        let mut vel = Velocity { x: 0.0, y: -330.0 };
        let mut body = PhysicsBody::default();
        step_body(&mut pos, &mut vel, &mut body, &sprite(), &bounds(), 1.0 / 60.0);
        assert!(body.blocked.up);
        assert_eq!(vel.y, 0.0);
    }

    #[test]
    fn without_world_collision_body_leaves_the_world() {
        let mut pos = Position::new(5.0, 300.0);
        let mut vel = Velocity { x: -600.0, y: 0.0 };
        let mut body = PhysicsBody { collide_world_bounds: false, allow_gravity: false, ..PhysicsBody::default() };
        step_body(&mut pos, &mut vel, &mut body, &sprite(), &bounds(), 0.1);
        assert!(approx(pos.x, -55.0));
        assert_eq!(body.blocked, Blocked::default());
    }

    #[test]
    fn fixed_timestep_splits_frames() {
        let mut timestep = FixedTimestep::new(60.0, 4);
        assert_eq!(timestep.advance(0.0), 0, "0秒のフレームではステップしない");
        assert_eq!(timestep.advance(1.0 / 120.0), 0);
        assert_eq!(timestep.advance(1.0 / 120.0 + 1e-4), 1, "貯まった分で1ステップ");
        assert_eq!(timestep.advance(2.0 / 60.0 + 1e-4), 2);
    }

    #[test]
    fn fixed_timestep_caps_substeps_and_drops_backlog() {
        let mut timestep = FixedTimestep::new(60.0, 4);
        assert_eq!(timestep.advance(5.0), 4);
        assert_eq!(timestep.advance(0.0), 0, "捨てた時間は次のフレームに持ち越さない");
        assert_eq!(timestep.advance(f32::NAN), 0);
        assert_eq!(timestep.advance(-1.0), 0);
    }
}
