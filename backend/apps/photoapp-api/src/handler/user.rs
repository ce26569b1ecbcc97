//! # ユーザー一覧ハンドラ

use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use photoapp_domain::user::User;
use photoapp_shared::DataResponse;
use serde::Serialize;

use crate::{error::failure_response, usecase::UserUseCaseImpl};

/// ユーザー一覧ハンドラーの State
pub struct UserState {
    pub usecase: UserUseCaseImpl,
}

/// ユーザー DTO
///
/// フィールド名は `users` テーブルの列名と同じにする。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserDto {
    pub userid:     i64,
    pub username:   String,
    pub givenname:  String,
    pub familyname: String,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            userid:     user.id().as_i64(),
            username:   user.user_name().to_string(),
            givenname:  user.given_name().to_string(),
            familyname: user.family_name().to_string(),
        }
    }
}

/// 全ユーザーを `userid` 昇順で返す
///
/// ## エンドポイント
/// GET /users
#[tracing::instrument(skip_all)]
pub async fn list_users(State(state): State<Arc<UserState>>) -> Response {
    match state.usecase.list_users().await {
        Ok(users) => {
            let data: Vec<UserDto> = users.into_iter().map(UserDto::from).collect();
            tracing::debug!(count = data.len(), "ユーザー一覧を取得しました");
            (StatusCode::OK, Json(DataResponse::success(data))).into_response()
        }
        Err(e) => failure_response(&e, DataResponse::<UserDto>::failure(e.to_string())),
    }
}
