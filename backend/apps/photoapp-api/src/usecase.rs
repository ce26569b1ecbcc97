//! # ユースケース層
//!
//! エンドポイントごとの処理の流れを実装する。
//!
//! ## 設計方針
//!
//! - **依存性注入**: リポジトリ・S3 クライアントを `Arc<dyn Trait>` で外部から注入
//! - **リトライはデータベース呼び出しのみ**: S3 の一覧取得は SDK の再試行に任せる
//! - **結果は `Result` で返す**: レスポンスの番兵値への変換はハンドラで行う

pub mod fan_out;
pub mod ping;
pub mod user;

pub use ping::PingUseCaseImpl;
pub use user::UserUseCaseImpl;
