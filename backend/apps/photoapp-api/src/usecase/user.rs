//! # ユーザー一覧ユースケース

use std::sync::Arc;

use photoapp_domain::user::User;
use photoapp_infra::{RetryPolicy, repository::UserRepository, retry::retry};

use crate::error::ApiError;

/// ユーザー一覧ユースケース実装
pub struct UserUseCaseImpl {
    user_repo:    Arc<dyn UserRepository>,
    retry_policy: RetryPolicy,
}

impl UserUseCaseImpl {
    pub fn new(user_repo: Arc<dyn UserRepository>, retry_policy: RetryPolicy) -> Self {
        Self {
            user_repo,
            retry_policy,
        }
    }

    /// 全ユーザーを `userid` 昇順で取得する
    ///
    /// 接続・クエリ・切断をひとまとまりとしてリトライする。
    pub async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        let users = retry(&self.retry_policy, "list_users", || self.user_repo.find_all()).await?;
        Ok(users)
    }
}
