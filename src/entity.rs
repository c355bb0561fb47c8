// src/entity.rs

// Entity の ID をデバッグ用 JSON に載せるので serde を使うよ。
use serde::{Deserialize, Serialize};

/// Entity（エンティティ）は、シーンに登場する「モノ」を表すただの識別子（ID）だよ！
/// プレイヤーのキャラクターもエンティティの一つ。
///
/// ID だけだと意味はなくて、Position や Velocity みたいなコンポーネントと
/// 組み合わせることで「ID 0 は (170, 450) にいる猫」みたいに意味を持つんだ。🐈
#[derive(
    PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug, Serialize, Deserialize,
)]
pub struct Entity(pub usize);
