//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! ## 設計方針
//!
//! - 各ハンドラはサブモジュールに配置し、ここで re-export する
//! - ハンドラはエラーを外に漏らさない。失敗はすべて 500 と
//!   エンドポイントごとの失敗時ボディに変換する

pub mod ping;
pub mod status;
pub mod user;

pub use ping::{PingState, get_ping};
pub use status::{StatusState, get_status};
pub use user::{UserDto, UserState, list_users};
