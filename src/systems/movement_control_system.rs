// src/systems/movement_control_system.rs

use std::rc::Rc;

use crate::components::{AnimationPlayer, Player, Position, Sprite, Velocity};
use crate::entity::Entity;
use crate::input::InputSnapshot;
use crate::logic::animation::AnimationLibrary;
use crate::logic::bounds::WorldBounds;
use crate::logic::movement::{ActorState, MovementController, MovementDecision};
use crate::system::System;
use crate::world::World;

/// キーボード入力でプレイヤーを動かすシステムだよ！🎮
///
/// 入力はフレームの最初に `set_input` で渡してもらう。
/// やることは `MovementController::tick` の結果を World に書き戻すだけ:
/// - Velocity の x を上書き、ジャンプした時だけ y も上書き
/// - Sprite の向き
/// - AnimationPlayer に同じクリップなら続けて再生するようお願い
pub struct MovementControlSystem {
    controller: MovementController,
    bounds: WorldBounds,
    library: Rc<AnimationLibrary>,
    input: InputSnapshot,
}

impl MovementControlSystem {
    pub fn new(
        controller: MovementController,
        bounds: WorldBounds,
        library: Rc<AnimationLibrary>,
    ) -> Self {
        Self {
            controller,
            bounds,
            library,
            input: InputSnapshot::default(),
        }
    }

    pub fn set_input(&mut self, input: InputSnapshot) {
        self.input = input;
    }

    fn apply(&self, world: &mut World, entity: Entity, decision: &MovementDecision) {
        if let Some(velocity) = world.get_component_mut::<Velocity>(entity) {
            velocity.x = decision.vx;
            if let Some(vy) = decision.vy {
                velocity.y = vy;
            }
        }
        if let Some(sprite) = world.get_component_mut::<Sprite>(entity) {
            sprite.facing_left = decision.facing_left;
        }
        if let Some(animation) = world.get_component_mut::<AnimationPlayer>(entity) {
            animation.play(&self.library, decision.animation.clip_key(), true);
        }
    }
}

impl System for MovementControlSystem {
    fn run(&mut self, world: &mut World, _delta_seconds: f32) {
        for entity in world.get_all_entities_with_component::<Player>() {
            let actor = match (
                world.get_component::<Position>(entity),
                world.get_component::<Sprite>(entity),
            ) {
                (Some(position), Some(sprite)) => ActorState {
                    x: position.x,
                    y: position.y,
                    half_width: sprite.half_width(),
                    facing_left: sprite.facing_left,
                },
                _ => {
                    log::warn!(
                        "MovementControlSystem: {:?} is missing Position or Sprite, skipped.",
                        entity
                    );
                    continue;
                }
            };

            let decision = self.controller.tick(&actor, &self.input, &self.bounds);
            self.apply(world, entity, &decision);
        }
    }
}
