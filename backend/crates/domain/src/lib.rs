//! # PhotoApp ドメイン層
//!
//! API が扱う値の型を定義する。
//!
//! ## 設計方針
//!
//! - **リクエストスコープの値のみ**: このクレートの型はすべて 1 リクエストの中で
//!   生成・破棄され、永続化はしない
//! - **インフラ非依存**: DB や S3 の型には一切依存しない
//!
//! ## 依存関係の方向
//!
//! ```text
//! api → infra → domain
//! ```
//!
//! ## モジュール構成
//!
//! - [`clock`] - 現在時刻の抽象化
//! - [`error`] - ドメイン層で発生するエラーの定義
//! - [`status`] - `/ping` が返す件数ペア
//! - [`uptime`] - 稼働時間の計算
//! - [`user`] - ユーザーレコード
//!
//! ## 使用例
//!
//! ```rust
//! use photoapp_domain::status::StatusCounts;
//!
//! let counts = StatusCounts::new(3, 5);
//! assert_eq!(counts.item_count(), 3);
//! assert_eq!(counts.user_count(), 5);
//! ```

pub mod clock;
pub mod error;
pub mod status;
pub mod uptime;
pub mod user;

pub use error::DomainError;
