//! # 件数集計ハンドラ

use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use photoapp_shared::PingResponse;

use crate::{error::failure_response, usecase::PingUseCaseImpl};

/// 件数集計ハンドラーの State
pub struct PingState {
    pub usecase: PingUseCaseImpl,
}

/// バケット内のオブジェクト数（`M`）とユーザー数（`N`）を返す
///
/// 失敗時は `M` / `N` ともに `-1` になる。
///
/// ## エンドポイント
/// GET /ping
#[tracing::instrument(skip_all)]
pub async fn get_ping(State(state): State<Arc<PingState>>) -> Response {
    match state.usecase.get_counts().await {
        Ok(counts) => {
            tracing::debug!(
                item_count = counts.item_count(),
                user_count = counts.user_count(),
                "件数を取得しました"
            );
            (
                StatusCode::OK,
                Json(PingResponse::success(
                    counts.item_count(),
                    counts.user_count(),
                )),
            )
                .into_response()
        }
        Err(e) => failure_response(&e, PingResponse::failure(e.to_string())),
    }
}
