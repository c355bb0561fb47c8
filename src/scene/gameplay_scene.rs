// src/scene/gameplay_scene.rs

use std::rc::Rc;

use serde::Serialize;

use super::{Scene, SceneTransition};
use crate::components::{AnimationPlayer, PhysicsBody, Player, Position, Sprite, Velocity};
use crate::config::scene::{
    GAMEPLAY_SCENE_KEY, IDLE_CLIP, IDLE_FRAME, IDLE_FRAME_RATE, MAX_FRAME_DELTA, WALK_CLIP,
};
use crate::config::SceneConfig;
use crate::entity::Entity;
use crate::input::InputSnapshot;
use crate::logic::animation::{frame_range, AnimationClip, AnimationLibrary, Repeat};
use crate::logic::movement::MovementController;
use crate::system::System;
use crate::systems::{AnimationSystem, MovementControlSystem, PhysicsSystem};
use crate::world::World;

pub const CHARACTER_TEXTURE: &str = "character";

/// 描画とデバッグ用に、プレイヤーの今の状態をまとめたもの。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerSnapshot {
    pub entity: Entity,
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub facing_left: bool,
    pub clip: Option<String>,
    pub frame: usize,
    /// 有限回のクリップを最後まで再生したら false
    pub animating: bool,
    pub display_width: f32,
    pub display_height: f32,
    pub on_floor: bool,
}

struct SceneSystems {
    movement: MovementControlSystem,
    physics: PhysicsSystem,
    animation: AnimationSystem,
}

/// 猫が歩いたり跳んだりするゲームプレイシーンだよ！🐈
///
/// `create()` でアニメーションとプレイヤーを用意して、
/// `update()` で 終了チェック → 移動 → 物理 → アニメーション の順に回す。
pub struct GameplayScene {
    config: SceneConfig,
    world: World,
    player: Option<Entity>,
    library: Rc<AnimationLibrary>,
    systems: Option<SceneSystems>,
}

impl GameplayScene {
    pub fn new(config: SceneConfig) -> Self {
        Self {
            config,
            world: World::new(),
            player: None,
            library: Rc::new(AnimationLibrary::new()),
            systems: None,
        }
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    fn is_created(&self) -> bool {
        self.systems.is_some()
    }

    fn create_animations(&self) -> AnimationLibrary {
        let mut library = AnimationLibrary::new();
        // 歩き: シートの 0〜(n-1) コマを全部使う
        let last_walk_frame = self.config.walk_frame_count.saturating_sub(1);
        library.create(AnimationClip::new(
            WALK_CLIP,
            frame_range(0, last_walk_frame),
            self.config.walk_frame_rate,
            Repeat::from_count(self.config.walk_repeat),
        ));
        // 立ち: 歩きの最初のコマだけ
        library.create(AnimationClip::new(
            IDLE_CLIP,
            vec![IDLE_FRAME],
            IDLE_FRAME_RATE,
            Repeat::Forever,
        ));
        library
    }

    fn create_player(&mut self) -> Entity {
        let world = &mut self.world;
        let entity = world.create_entity();
        world.add_component(entity, Player { name: "cat".to_string() });
        world.add_component(
            entity,
            Position::new(self.config.player_start_x, self.config.player_start_y),
        );
        world.add_component(entity, Velocity::default());
        world.add_component(
            entity,
            Sprite::new(
                CHARACTER_TEXTURE,
                self.config.frame_width,
                self.config.frame_height,
                self.config.player_scale,
            ),
        );
        // 当たり判定はスプライトの 60% x 80%、左上から 20% ずらす (PhysicsBody のデフォルト)
        world.add_component(entity, PhysicsBody::default());

        let mut animation = AnimationPlayer::new();
        animation.play(&self.library, IDLE_CLIP, true);
        world.add_component(entity, animation);
        entity
    }

    /// 今のプレイヤーの状態。create 前なら None。
    pub fn player_snapshot(&self) -> Option<PlayerSnapshot> {
        let entity = self.player?;
        let position = self.world.get_component::<Position>(entity)?;
        let velocity = self.world.get_component::<Velocity>(entity)?;
        let sprite = self.world.get_component::<Sprite>(entity)?;
        let animation = self.world.get_component::<AnimationPlayer>(entity)?;
        let on_floor = self
            .world
            .get_component::<PhysicsBody>(entity)
            .map(|body| body.blocked.down)
            .unwrap_or(false);
        Some(PlayerSnapshot {
            entity,
            x: position.x,
            y: position.y,
            vx: velocity.x,
            vy: velocity.y,
            facing_left: sprite.facing_left,
            clip: animation.current_key().map(str::to_string),
            frame: animation.current_frame(),
            animating: animation.is_playing(),
            display_width: sprite.display_width(),
            display_height: sprite.display_height(),
            on_floor,
        })
    }
}

impl Scene for GameplayScene {
    fn key(&self) -> &str {
        GAMEPLAY_SCENE_KEY
    }

    fn create(&mut self) {
        if self.is_created() {
            log::warn!("GameplayScene: create() called twice, ignored.");
            return;
        }
        log::info!("GameplayScene: creating...");

        self.world.register_component::<Player>();
        self.world.register_component::<Position>();
        self.world.register_component::<Velocity>();
        self.world.register_component::<Sprite>();
        self.world.register_component::<PhysicsBody>();
        self.world.register_component::<AnimationPlayer>();

        self.library = Rc::new(self.create_animations());
        self.player = Some(self.create_player());

        let bounds = self.config.bounds();
        let controller = MovementController::new(self.config.player_speed, self.config.jump_velocity);
        self.systems = Some(SceneSystems {
            movement: MovementControlSystem::new(controller, bounds, Rc::clone(&self.library)),
            physics: PhysicsSystem::new(bounds),
            animation: AnimationSystem::new(Rc::clone(&self.library)),
        });
        log::info!("GameplayScene: created. Player = {:?}", self.player);
    }

    fn update(
        &mut self,
        input: &InputSnapshot,
        exit_requested: bool,
        delta_seconds: f32,
    ) -> SceneTransition {
        let systems = match self.systems.as_mut() {
            Some(systems) => systems,
            None => {
                log::warn!("GameplayScene: update() before create(), skipped.");
                return SceneTransition::Continue;
            }
        };

        if exit_requested {
            log::info!("GameplayScene: exit requested -> {}", self.config.next_scene);
            return SceneTransition::Start(self.config.next_scene.clone());
        }

        // タブが裏にいた後や、時計の違うタイムスタンプが混ざった時の巨大な値は切り詰める
        let delta_seconds = if delta_seconds.is_finite() {
            delta_seconds.clamp(0.0, MAX_FRAME_DELTA)
        } else {
            0.0
        };

        systems.movement.set_input(*input);
        systems.movement.run(&mut self.world, delta_seconds);
        systems.physics.run(&mut self.world, delta_seconds);
        systems.animation.run(&mut self.world, delta_seconds);

        SceneTransition::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f32 = 1.0 / 60.0 + 1e-5;

    fn created_scene() -> GameplayScene {
        let mut scene = GameplayScene::new(SceneConfig::default());
        scene.create();
        scene
    }

    fn held(up: bool, left: bool, right: bool) -> InputSnapshot {
        InputSnapshot { up, down: false, left, right }
    }

    #[test]
    fn create_spawns_idle_player_at_start_position() {
        let scene = created_scene();
        assert_eq!(scene.key(), "GameplayScene");
        let player = scene.player_snapshot().expect("player should exist after create");
        assert_eq!((player.x, player.y), (170.0, 450.0));
        assert_eq!(player.clip.as_deref(), Some("idle"));
        assert_eq!(player.frame, 0);
        assert_eq!(player.display_width, 128.0);
        assert!(!player.facing_left);
    }

    #[test]
    fn update_before_create_is_a_no_op() {
        let mut scene = GameplayScene::new(SceneConfig::default());
        let transition = scene.update(&held(false, true, false), true, FRAME);
        assert_eq!(transition, SceneTransition::Continue);
        assert!(scene.player_snapshot().is_none());
    }

    #[test]
    fn create_twice_keeps_single_player() {
        let mut scene = created_scene();
        let first = scene.player;
        scene.create();
        assert_eq!(scene.player, first);
        assert_eq!(scene.world.get_all_entities_with_component::<Player>().len(), 1);
    }

    #[test]
    fn exit_request_starts_game_over_without_moving() {
        let mut scene = created_scene();
        let transition = scene.update(&held(false, false, true), true, FRAME);
        assert_eq!(transition, SceneTransition::Start("GameOverScene".to_string()));
        let player = scene.player_snapshot().unwrap();
        assert_eq!(player.vx, 0.0, "終了するフレームは何も動かさない");
    }

    #[test]
    fn player_falls_to_floor_and_idles() {
        let mut scene = created_scene();
        for _ in 0..120 {
            assert_eq!(scene.update(&InputSnapshot::default(), false, FRAME), SceneTransition::Continue);
        }
        let player = scene.player_snapshot().unwrap();
        assert!(player.on_floor);
        assert!((player.y - 536.0).abs() < 0.01, "床の上: {}", player.y);
        assert_eq!(player.clip.as_deref(), Some("idle"));
    }

    #[test]
    fn walking_left_stops_at_half_width() {
        let mut scene = created_scene();
        for _ in 0..240 {
            scene.update(&held(false, true, false), false, FRAME);
        }
        let player = scene.player_snapshot().unwrap();
        let half_width = scene.config().half_width();
        assert!(player.x <= half_width, "端の手前で止まる: {}", player.x);
        assert!(player.x > half_width - 160.0 * FRAME - 0.01);
        assert_eq!(player.vx, 0.0);
        assert_eq!(player.clip.as_deref(), Some("idle"));
        assert!(player.facing_left);
    }

    #[test]
    fn walking_right_animates_through_walk_frames() {
        let mut scene = created_scene();
        for _ in 0..15 {
            scene.update(&held(false, false, true), false, FRAME);
        }
        let player = scene.player_snapshot().unwrap();
        assert_eq!(player.clip.as_deref(), Some("walk"));
        assert_eq!(player.vx, 160.0);
        assert!(player.x > 170.0);
        assert!(player.frame >= 1, "0.25秒歩けば何コマか進んでるはず: {}", player.frame);
    }

    #[test]
    fn jump_from_floor_goes_up() {
        let mut scene = created_scene();
        for _ in 0..120 {
            scene.update(&InputSnapshot::default(), false, FRAME);
        }
        let before = scene.player_snapshot().unwrap().y;
        scene.update(&held(true, false, false), false, FRAME);
        let after = scene.player_snapshot().unwrap();
        assert!(after.vy < 0.0, "上向きの速度: {}", after.vy);
        assert!(after.y < before);
    }

    #[test]
    fn zero_length_frame_only_runs_controller() {
        let mut scene = created_scene();
        scene.update(&held(false, false, true), false, 0.0);
        let player = scene.player_snapshot().unwrap();
        assert_eq!(player.vx, 160.0);
        assert_eq!((player.x, player.y), (170.0, 450.0), "0秒なら位置は変わらない");
    }

    #[test]
    fn walk_repeat_count_from_config_stops_walk_cycle() {
        let config = SceneConfig { walk_repeat: 0, ..SceneConfig::default() };
        let mut scene = GameplayScene::new(config);
        scene.create();
        // ちょうど1周 (10コマ = 1秒) 歩く
        for _ in 0..60 {
            scene.update(&held(false, false, true), false, FRAME);
        }
        let player = scene.player_snapshot().unwrap();
        assert_eq!(player.clip.as_deref(), Some("walk"));
        assert!(!player.animating, "繰り返し 0 回なら1周で止まる");
        assert_eq!(player.frame, 9, "最後のコマで止まる");

        // デフォルトはずっとループ
        let mut looping = created_scene();
        for _ in 0..60 {
            looping.update(&held(false, false, true), false, FRAME);
        }
        let player = looping.player_snapshot().unwrap();
        assert!(player.animating);
        assert_eq!(player.frame, 0);
    }

    #[test]
    fn huge_frame_delta_is_clamped() {
        let mut scene = created_scene();
        let transition = scene.update(&held(false, false, true), false, 3.0e6);
        assert_eq!(transition, SceneTransition::Continue);
        let player = scene.player_snapshot().unwrap();
        // 物理は最大4ステップ分しか進まない
        assert!(player.x <= 170.0 + 160.0 * 4.0 / 60.0 + 0.01, "x = {}", player.x);
        assert!(player.frame < 10);

        scene.update(&held(false, false, true), false, f32::INFINITY);
        assert!(scene.player_snapshot().unwrap().x.is_finite());
    }

    #[test]
    fn custom_config_flows_into_scene() {
        let config = SceneConfig {
            player_start_x: 400.0,
            player_speed: 100.0,
            next_scene: "TitleScene".to_string(),
            ..SceneConfig::default()
        };
        let mut scene = GameplayScene::new(config);
        scene.create();
        scene.update(&held(false, true, false), false, FRAME);
        let player = scene.player_snapshot().unwrap();
        assert_eq!(player.vx, -100.0);
        assert_eq!(
            scene.update(&InputSnapshot::default(), true, FRAME),
            SceneTransition::Start("TitleScene".to_string())
        );
    }
}
