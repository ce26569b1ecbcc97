//! # PhotoApp API エラー定義
//!
//! ハンドラ境界で扱うエラーと、失敗レスポンスへの変換を定義する。
//!
//! エンドポイントごとにレスポンスの形が異なるため `IntoResponse` は実装せず、
//! 各ハンドラが [`failure_response`] に失敗時のボディを渡す。
//! ステータスコードは常に 500（4xx は返さない）。

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use photoapp_domain::DomainError;
use photoapp_infra::InfraError;
use serde::Serialize;
use thiserror::Error;
use tracing_error::SpanTrace;

/// PhotoApp API で発生するエラー
///
/// `Display` はレスポンスの `message`（または `status`）にそのまま載る。
#[derive(Debug, Error)]
pub enum ApiError {
    /// データベース・S3・設定ファイルのエラー
    #[error(transparent)]
    Infra(#[from] InfraError),

    /// ドメインルール違反
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// 並行実行したタスクが完了しなかった（パニック・中断）
    #[error("並行タスクの合流に失敗しました: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl ApiError {
    /// エラー発生時点のスパン情報（インフラ層のエラーのみ保持する）
    pub fn span_trace(&self) -> Option<&SpanTrace> {
        match self {
            Self::Infra(e) => Some(e.span_trace()),
            Self::Domain(_) | Self::Join(_) => None,
        }
    }
}

/// エラーを ERROR ログに残し、500 と失敗時のボディを返す
pub fn failure_response<T: Serialize>(error: &ApiError, body: T) -> Response {
    match error.span_trace() {
        Some(span_trace) => tracing::error!(
            error = %error,
            span_trace = %span_trace,
            "リクエストの処理に失敗しました"
        ),
        None => tracing::error!(error = %error, "リクエストの処理に失敗しました"),
    }

    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
}
