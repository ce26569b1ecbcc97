//! # ドメイン層エラー定義
//!
//! ドメイン固有の例外状態を表現するエラー型。
//!
//! ## 使用例
//!
//! ```rust
//! use photoapp_domain::DomainError;
//!
//! let error = DomainError::InvalidTime("開始時刻より前の時刻です".to_string());
//! assert_eq!(error.to_string(), "時刻が不正です: 開始時刻より前の時刻です");
//! ```

use thiserror::Error;

/// ドメイン層で発生するエラー
///
/// API 層でこのエラーを受け取り、レスポンスのメッセージに変換する。
#[derive(Debug, Error)]
pub enum DomainError {
    /// 時刻の前後関係が不正
    ///
    /// 稼働時間の計算で、現在時刻がプロセス起動時刻より前になった場合に使用する。
    /// 単調時計を使う限り本番では発生しない。
    #[error("時刻が不正です: {0}")]
    InvalidTime(String),
}
