//! # 件数集計ユースケース
//!
//! バケット内のオブジェクト数（M）とユーザー数（N）を並行に取得する。
//!
//! ユーザー数の取得はリトライ付きで、接続の確立からやり直す。
//! S3 の一覧取得はリトライしない。

use std::sync::Arc;

use photoapp_domain::status::StatusCounts;
use photoapp_infra::{RetryPolicy, repository::UserRepository, retry::retry, s3::S3Client};

use crate::{error::ApiError, usecase::fan_out::join_pair};

/// 件数集計ユースケース実装
pub struct PingUseCaseImpl {
    user_repo:    Arc<dyn UserRepository>,
    s3:           Arc<dyn S3Client>,
    retry_policy: RetryPolicy,
}

impl PingUseCaseImpl {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        s3: Arc<dyn S3Client>,
        retry_policy: RetryPolicy,
    ) -> Self {
        Self {
            user_repo,
            s3,
            retry_policy,
        }
    }

    /// オブジェクト数とユーザー数を取得する
    ///
    /// どちらか一方でも失敗した場合はエラーを返す（片方の件数だけを返すことはない）。
    /// 両方失敗した場合はデータベース側のエラーを返す。
    pub async fn get_counts(&self) -> Result<StatusCounts, ApiError> {
        let user_repo = Arc::clone(&self.user_repo);
        let policy = self.retry_policy.clone();
        let count_users = async move {
            retry(&policy, "count_users", || user_repo.count())
                .await
                .map_err(ApiError::from)
        };

        let s3 = Arc::clone(&self.s3);
        let count_objects = async move { s3.count_objects().await.map_err(ApiError::from) };

        // S3 側は中断されうるので secondary に置く
        let (user_count, item_count) = join_pair(count_users, count_objects).await?;

        Ok(StatusCounts::new(item_count as u64, user_count))
    }
}
