// src/systems/animation_system.rs

use std::rc::Rc;

use crate::components::AnimationPlayer;
use crate::logic::animation::AnimationLibrary;
use crate::system::System;
use crate::world::World;

/// 再生中のアニメーションを時間で進めるシステム。🎞️
pub struct AnimationSystem {
    library: Rc<AnimationLibrary>,
}

impl AnimationSystem {
    pub fn new(library: Rc<AnimationLibrary>) -> Self {
        Self { library }
    }
}

impl System for AnimationSystem {
    fn run(&mut self, world: &mut World, delta_seconds: f32) {
        if let Some(players) = world.storage_mut::<AnimationPlayer>() {
            for (_entity, player) in players.iter_mut() {
                player.update(&self.library, delta_seconds);
            }
        }
    }
}
