//! # ステータス確認ハンドラ
//!
//! 稼働中であることと、プロセス起動からの経過秒数を返す。
//! 外部への呼び出しは行わない。

use std::{sync::Arc, time::Instant};

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use photoapp_domain::{clock::Clock, uptime::Uptime};
use photoapp_shared::StatusResponse;

use crate::error::{ApiError, failure_response};

/// ステータス確認ハンドラーの State
pub struct StatusState {
    pub clock:      Arc<dyn Clock>,
    /// プロセス起動時刻（起動時に一度だけ設定する）
    pub started_at: Instant,
}

/// 稼働状態を返す
///
/// ## エンドポイント
/// GET /
#[tracing::instrument(skip_all)]
pub async fn get_status(State(state): State<Arc<StatusState>>) -> Response {
    match Uptime::between(state.started_at, state.clock.now()) {
        Ok(uptime) => (
            StatusCode::OK,
            Json(StatusResponse::running(uptime.as_secs())),
        )
            .into_response(),
        Err(e) => {
            let error = ApiError::from(e);
            failure_response(&error, StatusResponse::failure(error.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use axum::{Router, body::Body, http::Request, routing::get};
    use photoapp_domain::clock::ManualClock;
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use super::*;

    async fn request(clock: Arc<ManualClock>, started_at: Instant) -> (StatusCode, Value) {
        let state = Arc::new(StatusState { clock, started_at });
        let sut = Router::new().route("/", get(get_status)).with_state(state);

        let response = sut
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_時刻の経過に合わせて稼働秒数が増える() {
        // Given
        let started_at = Instant::now();
        let clock = Arc::new(ManualClock::new(started_at));

        // When / Then
        let (status, body) = request(clock.clone(), started_at).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "status": "running", "uptime_in_secs": 0 }));

        clock.advance(Duration::from_secs(3));
        let (_, body) = request(clock.clone(), started_at).await;
        assert_eq!(body["uptime_in_secs"], json!(3));

        clock.advance(Duration::from_millis(400));
        let (_, body) = request(clock, started_at).await;
        assert_eq!(body["uptime_in_secs"], json!(3));
    }

    #[tokio::test]
    async fn test_時刻が巻き戻った場合は500と稼働秒数0を返す() {
        // Given
        let started_at = Instant::now();
        let clock = Arc::new(ManualClock::new(started_at));
        clock.rewind(Duration::from_secs(2));

        // When
        let (status, body) = request(clock, started_at).await;

        // Then
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["uptime_in_secs"], json!(0));
    }
}
