//! # テスト用モック
//!
//! ユースケース・ハンドラのテストで使用するインメモリモック。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! photoapp-infra = { workspace = true, features = ["test-utils"] }
//! ```
//!
//! どちらのモックも「最初の N 回だけ失敗する」挙動を設定でき、
//! 呼び出し回数を記録する。

use std::sync::{
    Arc,
    atomic::{AtomicU32, Ordering},
};

use async_trait::async_trait;
use photoapp_domain::user::User;

use crate::{error::InfraError, repository::UserRepository, s3::S3Client};

/// 失敗回数の設定
#[derive(Debug, Clone, Copy)]
enum Failures {
    /// 最初の N 回だけ失敗する
    First(u32),
    /// 常に失敗する
    Always,
}

/// 失敗の注入と呼び出し回数の記録
#[derive(Debug, Clone)]
struct FailureScript {
    failures: Failures,
    message:  String,
    calls:    Arc<AtomicU32>,
}

impl FailureScript {
    fn new(failures: Failures, message: impl Into<String>) -> Self {
        Self {
            failures,
            message: message.into(),
            calls: Arc::new(AtomicU32::new(0)),
        }
    }

    /// 呼び出しを記録し、この呼び出しが失敗すべきかを返す
    fn next_call_fails(&self) -> bool {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        match self.failures {
            Failures::First(n) => call <= n,
            Failures::Always => true,
        }
    }

    fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

// ===== MockUserRepository =====

#[derive(Debug, Clone)]
pub struct MockUserRepository {
    users:  Arc<Vec<User>>,
    script: FailureScript,
}

impl MockUserRepository {
    /// 常に成功するリポジトリを作成する
    ///
    /// `users` は挿入順のまま保持し、`find_all` で `userid` 昇順に並べて返す。
    pub fn new(users: Vec<User>) -> Self {
        Self {
            users:  Arc::new(users),
            script: FailureScript::new(Failures::First(0), ""),
        }
    }

    /// 最初の `failures` 回だけ接続エラー相当で失敗するリポジトリを作成する
    pub fn failing_first(users: Vec<User>, failures: u32, message: impl Into<String>) -> Self {
        Self {
            users:  Arc::new(users),
            script: FailureScript::new(Failures::First(failures), message),
        }
    }

    /// 常に失敗するリポジトリを作成する
    pub fn always_failing(message: impl Into<String>) -> Self {
        Self {
            users:  Arc::new(Vec::new()),
            script: FailureScript::new(Failures::Always, message),
        }
    }

    /// これまでの呼び出し回数（count / find_all の合計）
    pub fn calls(&self) -> u32 {
        self.script.calls()
    }

    fn fail_if_scripted(&self) -> Result<(), InfraError> {
        if self.script.next_call_fails() {
            return Err(InfraError::unexpected(self.script.message.clone()));
        }
        Ok(())
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn count(&self) -> Result<u64, InfraError> {
        self.fail_if_scripted()?;
        Ok(self.users.len() as u64)
    }

    async fn find_all(&self) -> Result<Vec<User>, InfraError> {
        self.fail_if_scripted()?;
        let mut users = self.users.to_vec();
        users.sort_by_key(User::id);
        Ok(users)
    }
}

// ===== MockS3Client =====

#[derive(Debug, Clone)]
pub struct MockS3Client {
    object_count: usize,
    script:       FailureScript,
}

impl MockS3Client {
    /// 常に `object_count` を返すクライアントを作成する
    pub fn new(object_count: usize) -> Self {
        Self {
            object_count,
            script: FailureScript::new(Failures::First(0), ""),
        }
    }

    /// 常に失敗するクライアントを作成する
    pub fn always_failing(message: impl Into<String>) -> Self {
        Self {
            object_count: 0,
            script:       FailureScript::new(Failures::Always, message),
        }
    }

    /// これまでの呼び出し回数
    pub fn calls(&self) -> u32 {
        self.script.calls()
    }
}

#[async_trait]
impl S3Client for MockS3Client {
    async fn count_objects(&self) -> Result<usize, InfraError> {
        if self.script.next_call_fails() {
            return Err(InfraError::storage(self.script.message.clone()));
        }
        Ok(self.object_count)
    }
}

#[cfg(test)]
mod tests {
    use photoapp_domain::user::UserId;
    use pretty_assertions::assert_eq;

    use super::*;

    #[tokio::test]
    async fn test_mock_user_repositoryはfind_allで昇順に並べて返す() {
        let sut = MockUserRepository::new(vec![
            User::from_db(UserId::new(3), "c", "C", "C"),
            User::from_db(UserId::new(1), "a", "A", "A"),
        ]);

        let users = sut.find_all().await.unwrap();

        let ids: Vec<i64> = users.iter().map(|u| u.id().as_i64()).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[tokio::test]
    async fn test_mock_user_repositoryは指定回数だけ失敗する() {
        let sut = MockUserRepository::failing_first(Vec::new(), 2, "接続失敗");

        assert!(sut.count().await.is_err());
        assert!(sut.count().await.is_err());
        assert_eq!(sut.count().await.unwrap(), 0);
        assert_eq!(sut.calls(), 3);
    }

    #[tokio::test]
    async fn test_mock_s3_clientは失敗時にs3エラーを返す() {
        let sut = MockS3Client::always_failing("NoSuchBucket");

        let err = sut.count_objects().await.unwrap_err();

        assert_eq!(err.to_string(), "S3 エラー: NoSuchBucket");
        assert_eq!(sut.calls(), 1);
    }
}
