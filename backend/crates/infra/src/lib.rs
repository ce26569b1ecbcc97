//! # PhotoApp インフラ層
//!
//! 外部システムとの接続・通信を担当するインフラストラクチャ層。
//!
//! ## 責務
//!
//! - **設定ファイル**: 接続情報（INI 形式）の読み込み
//! - **データベース接続**: MySQL への接続と確実な切断（プールは持たない）
//! - **S3 接続**: バケット内オブジェクトの一覧取得
//! - **リトライ**: 失敗した非同期処理の再実行
//! - **リポジトリ実装**: users テーブルへの読み取りクエリ
//!
//! ## 依存関係
//!
//! ```text
//! api → infra → domain
//! ```
//!
//! ## モジュール構成
//!
//! - [`settings`] - 接続情報ファイルの読み込み
//! - [`db`] - MySQL 接続管理
//! - [`s3`] - S3 クライアント
//! - [`retry`] - リトライポリシーとリトライ実行
//! - [`error`] - インフラ層エラー定義
//! - [`repository`] - リポジトリ実装
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use photoapp_infra::{db, repository::MySqlUserRepository, settings::PhotoappSettings};
//!
//! async fn setup() -> Result<(), Box<dyn std::error::Error>> {
//!     let settings = PhotoappSettings::load("photoapp-config.ini", "s3readwrite")?;
//!     let users = MySqlUserRepository::new(db::connect_options(&settings.rds));
//!     Ok(())
//! }
//! ```

pub mod db;
pub mod error;
pub mod repository;
pub mod retry;
pub mod s3;
pub mod settings;

// テスト用モック（test-utils feature で公開）
#[cfg(any(test, feature = "test-utils"))]
pub mod mock;

pub use error::{InfraError, InfraErrorKind};
pub use retry::RetryPolicy;
