//! # ルーター構築
//!
//! ルートとミドルウェアを組み立てる。テストからも同じルーターを使う。
//!
//! ## ミドルウェアの順序（外側から）
//!
//! ```text
//! SetRequestId → PropagateRequestId → TraceLayer → CanonicalLogLine → body limit → handler
//! ```

use std::sync::Arc;

use axum::{Router, body::Body, extract::DefaultBodyLimit, routing::get};
use photoapp_shared::{
    canonical_log::CanonicalLogLineLayer,
    observability::{MakeRequestUuidV7, make_request_span},
};
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::handler::{
    PingState,
    StatusState,
    UserState,
    get_ping,
    get_status,
    list_users,
};

/// リクエストボディの上限（50 MB）
pub const REQUEST_BODY_LIMIT: usize = 50 * 1024 * 1024;

/// ルーターを構築する
pub fn build_router(
    status_state: Arc<StatusState>,
    ping_state: Arc<PingState>,
    user_state: Arc<UserState>,
) -> Router {
    Router::new()
        .route("/", get(get_status))
        .with_state(status_state)
        .route("/ping", get(get_ping))
        .with_state(ping_state)
        .route("/users", get(list_users))
        .with_state(user_state)
        .layer(DefaultBodyLimit::max(REQUEST_BODY_LIMIT))
        .layer(CanonicalLogLineLayer)
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span::<Body>))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
}
