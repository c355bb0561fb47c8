// src/components/player.rs

use serde::{Deserialize, Serialize};

use crate::component::Component;

/// キーボードで操作するキャラクターの目印コンポーネントだよ！🐈
///
/// MovementControlSystem はこれが付いたエンティティだけを動かす。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
}

impl Component for Player {}
