//! # リポジトリ実装
//!
//! users テーブルへの読み取りクエリを提供する。
//!
//! ## 設計方針
//!
//! - **呼び出し単位の接続**: 各メソッドが接続を張り、結果に関わらず切断して返る。
//!   そのためメソッド呼び出しをリトライすれば、接続からやり直しになる
//! - **テスタビリティ**: トレイト経由でモック可能な設計

pub mod user_repository;

pub use user_repository::{MySqlUserRepository, UserRepository};
