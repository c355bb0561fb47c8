//! ゲームプレイシーンの定数を定義するよ！
//! 画面サイズ、物理、プレイヤーの初期配置、アニメーション、テキストの位置など。

// --- ワールド (画面) ---
pub const WORLD_WIDTH: f32 = 1200.0; // キャンバスの幅
pub const WORLD_HEIGHT: f32 = 600.0; // キャンバスの高さ
pub const GROUND_Y: f32 = 480.0; // これより下 (y が大きい) にいたら「接地」扱い
pub const GRAVITY_Y: f32 = 300.0; // 重力加速度 (units/s²)

// --- 物理ステップ ---
pub const PHYSICS_FPS: f32 = 60.0; // 固定ステップの回数 (1秒あたり)
pub const MAX_PHYSICS_SUBSTEPS: u32 = 4; // 1フレームで回す最大ステップ数
pub const MAX_FRAME_DELTA: f32 = 0.25; // 1フレームとして扱う最大の経過時間 (秒)

// --- プレイヤー ---
pub const PLAYER_SPEED: f32 = 160.0; // 横移動の速さ (units/s)
pub const JUMP_VELOCITY: f32 = -330.0; // ジャンプ時の縦速度 (マイナスが上！)
pub const PLAYER_START_X: f32 = 170.0;
pub const PLAYER_START_Y: f32 = 450.0;
pub const PLAYER_SCALE: f32 = 0.5; // 猫のスプライトは大きいので半分に
pub const SPRITE_FRAME_WIDTH: f32 = 256.0; // スプライトシート1コマの幅
pub const SPRITE_FRAME_HEIGHT: f32 = 256.0; // スプライトシート1コマの高さ

// 当たり判定 (ボディ) はスプライトより一回り小さくする
pub const BODY_WIDTH_FACTOR: f32 = 0.6; // 幅の 60%
pub const BODY_HEIGHT_FACTOR: f32 = 0.8; // 高さの 80%
pub const BODY_OFFSET_X_FACTOR: f32 = 0.2; // 左から 20%
pub const BODY_OFFSET_Y_FACTOR: f32 = 0.2; // 上から 20%

// --- アニメーション ---
pub const WALK_CLIP: &str = "walk";
pub const IDLE_CLIP: &str = "idle";
pub const WALK_FRAME_COUNT: usize = 10; // 0〜9 の10コマ
pub const WALK_FRAME_RATE: f32 = 10.0;
pub const WALK_REPEAT: i32 = -1; // -1 でずっとループ
pub const IDLE_FRAME: usize = 0; // 立ちポーズは最初のコマ
pub const IDLE_FRAME_RATE: f32 = 10.0;

// --- シーン ---
pub const GAMEPLAY_SCENE_KEY: &str = "GameplayScene";
pub const GAME_OVER_SCENE_KEY: &str = "GameOverScene";

// --- 背景と説明テキスト ---
pub const BACKGROUND_CENTER_X: f64 = 600.0;
pub const BACKGROUND_CENTER_Y: f64 = 300.0;
pub const BACKGROUND_DISPLAY_WIDTH: f64 = 1200.0;
pub const BACKGROUND_DISPLAY_HEIGHT: f64 = 600.0;

pub const INSTRUCTIONS_TEXT: &str = "Use Arrow Keys to Move • Press ESC to End";
pub const INSTRUCTIONS_X: f64 = 600.0;
pub const INSTRUCTIONS_Y: f64 = 50.0;
pub const INSTRUCTIONS_FONT: &str = "24px Arial";
pub const INSTRUCTIONS_FILL: &str = "#ffffff";
pub const INSTRUCTIONS_STROKE: &str = "#000000";
pub const INSTRUCTIONS_STROKE_WIDTH: f64 = 2.0;
