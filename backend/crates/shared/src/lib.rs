//! # PhotoApp 共有ユーティリティ
//!
//! API のレスポンスエンベロープと Observability 基盤を提供する。
//!
//! ## 設計方針
//!
//! - ビジネスロジックを含まない純粋なユーティリティのみを配置
//! - axum には依存しない（`IntoResponse` 変換は API 側の責務）
//! - Observability 関連は `observability` feature で有効化する

#[cfg(feature = "observability")]
pub mod canonical_log;
pub mod envelope;
pub mod observability;

pub use envelope::{DataResponse, PingResponse, RUNNING_STATUS, SUCCESS_MESSAGE, StatusResponse};
