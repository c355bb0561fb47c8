// src/systems/physics_system.rs

use crate::components::{PhysicsBody, Position, Sprite, Velocity};
use crate::logic::bounds::WorldBounds;
use crate::logic::physics::{step_body, FixedTimestep};
use crate::system::System;
use crate::world::World;

/// 物理ボディを持つ全エンティティを動かすシステムだよ！
///
/// フレーム時間を `FixedTimestep` で固定ステップに分けて、
/// ステップごとに重力・移動・ワールド端の衝突を計算する。
pub struct PhysicsSystem {
    bounds: WorldBounds,
    timestep: FixedTimestep,
}

impl PhysicsSystem {
    pub fn new(bounds: WorldBounds) -> Self {
        Self {
            bounds,
            timestep: FixedTimestep::default(),
        }
    }
}

impl System for PhysicsSystem {
    fn run(&mut self, world: &mut World, delta_seconds: f32) {
        let steps = self.timestep.advance(delta_seconds);
        if steps == 0 {
            return;
        }
        let step_seconds = self.timestep.step_seconds();

        for entity in world.get_all_entities_with_component::<PhysicsBody>() {
            // 4つのコンポーネントを同時に借りられないので、コピーして計算してから書き戻す
            let (mut position, mut velocity, mut body, sprite) = match (
                world.get_component::<Position>(entity),
                world.get_component::<Velocity>(entity),
                world.get_component::<PhysicsBody>(entity),
                world.get_component::<Sprite>(entity),
            ) {
                (Some(p), Some(v), Some(b), Some(s)) => (*p, *v, *b, s.clone()),
                _ => continue,
            };

            for _ in 0..steps {
                step_body(&mut position, &mut velocity, &mut body, &sprite, &self.bounds, step_seconds);
            }

            world.add_component(entity, position);
            world.add_component(entity, velocity);
            world.add_component(entity, body);
        }
    }
}
