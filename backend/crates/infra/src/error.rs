//! # インフラ層エラー定義
//!
//! データベース・S3・設定ファイルとのやり取りで発生するエラーを表現する。
//!
//! ## 構造
//!
//! `std::io::Error` と同じ struct + enum パターンを採用:
//! - [`InfraError`]: エラー種別（[`InfraErrorKind`]）と [`SpanTrace`] を保持するラッパー
//! - [`InfraErrorKind`]: エラーの具体的な種別（Connection, Query, Storage 等）
//!
//! `From` 実装や convenience constructor でエラーを生成すると、
//! その時点のスパン情報が自動的にキャプチャされる。

use std::fmt;

use derive_more::Display;
use thiserror::Error;
use tracing_error::SpanTrace;

/// インフラ層で発生するエラー
///
/// `Display` はエラー種別のメッセージをそのまま出力する。
/// API 層はこのメッセージをレスポンスの `message` に載せる。
#[derive(Display)]
#[display("{kind}")]
pub struct InfraError {
    kind:       InfraErrorKind,
    span_trace: SpanTrace,
}

/// インフラ層エラーの種別
#[derive(Debug, Error)]
pub enum InfraErrorKind {
    /// データベース接続エラー
    ///
    /// 接続先に到達できない、認証に失敗したなど。
    #[error("データベース接続エラー: {0}")]
    Connection(#[source] sqlx::Error),

    /// クエリ実行エラー
    ///
    /// SQL の実行失敗、結果行のデコード失敗など。
    #[error("クエリ実行エラー: {0}")]
    Query(#[source] sqlx::Error),

    /// S3 エラー
    ///
    /// AWS SDK のエラー型はジェネリクスが深く `#[from]` が困難なため、
    /// 手動で String にマップする。
    #[error("S3 エラー: {0}")]
    Storage(String),

    /// 設定ファイルエラー
    ///
    /// 接続情報ファイルが存在しない、必須キーが欠けているなど。
    #[error("設定ファイルエラー: {0}")]
    Config(#[source] config::ConfigError),

    /// 予期しないエラー
    #[error("予期しないエラー: {0}")]
    Unexpected(String),
}

impl InfraError {
    /// エラー種別を取得する
    pub fn kind(&self) -> &InfraErrorKind {
        &self.kind
    }

    /// SpanTrace を取得する
    pub fn span_trace(&self) -> &SpanTrace {
        &self.span_trace
    }

    fn new(kind: InfraErrorKind) -> Self {
        Self {
            kind,
            span_trace: SpanTrace::capture(),
        }
    }

    // ===== Convenience constructors =====

    /// データベース接続エラーを生成する
    ///
    /// `From<sqlx::Error>` はクエリエラーに変換されるため、
    /// 接続確立時の失敗はこちらを使う。
    pub fn connection(source: sqlx::Error) -> Self {
        Self::new(InfraErrorKind::Connection(source))
    }

    /// S3 エラーを生成する
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::new(InfraErrorKind::Storage(msg.into()))
    }

    /// 予期しないエラーを生成する
    pub fn unexpected(msg: impl Into<String>) -> Self {
        Self::new(InfraErrorKind::Unexpected(msg.into()))
    }
}

// ===== トレイト実装 =====

impl fmt::Debug for InfraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InfraError")
            .field("kind", &self.kind)
            .field("span_trace", &self.span_trace)
            .finish()
    }
}

impl std::error::Error for InfraError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.kind.source()
    }
}

// ===== From 実装（SpanTrace 自動キャプチャ） =====

impl From<sqlx::Error> for InfraError {
    fn from(source: sqlx::Error) -> Self {
        Self::new(InfraErrorKind::Query(source))
    }
}

impl From<config::ConfigError> for InfraError {
    fn from(source: config::ConfigError) -> Self {
        Self::new(InfraErrorKind::Config(source))
    }
}
