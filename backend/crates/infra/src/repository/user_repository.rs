//! # UserRepository
//!
//! users テーブルの件数取得と一覧取得を担当するリポジトリ。

use async_trait::async_trait;
use photoapp_domain::user::{User, UserId};
use sqlx::{FromRow, mysql::MySqlConnectOptions};

use crate::{
    db::{self, count_from_row},
    error::InfraError,
};

/// ユーザーリポジトリトレイト
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// users テーブルの行数を返す
    async fn count(&self) -> Result<u64, InfraError>;

    /// 全ユーザーを `userid` の昇順で返す
    ///
    /// テーブルが空の場合は空の Vec を返す。
    async fn find_all(&self) -> Result<Vec<User>, InfraError>;
}

/// users テーブルの行
#[derive(Debug, FromRow)]
struct UserRow {
    userid:     i64,
    username:   String,
    givenname:  String,
    familyname: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User::from_db(
            UserId::new(row.userid),
            row.username,
            row.givenname,
            row.familyname,
        )
    }
}

/// MySQL 実装の UserRepository
///
/// 接続オプションのみを保持し、呼び出しごとに接続する。
#[derive(Debug, Clone)]
pub struct MySqlUserRepository {
    options: MySqlConnectOptions,
}

impl MySqlUserRepository {
    /// 新しいリポジトリインスタンスを作成
    pub fn new(options: MySqlConnectOptions) -> Self {
        Self { options }
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    #[tracing::instrument(skip_all, level = "debug")]
    async fn count(&self) -> Result<u64, InfraError> {
        let mut conn = db::open_connection(&self.options).await?;

        tracing::debug!("ユーザー数を集計します");
        let result = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(userid) AS num_users
            FROM users
            "#,
        )
        .fetch_one(&mut conn)
        .await;

        count_from_row(db::close_then(conn, result).await?)
    }

    #[tracing::instrument(skip_all, level = "debug")]
    async fn find_all(&self) -> Result<Vec<User>, InfraError> {
        let mut conn = db::open_connection(&self.options).await?;

        tracing::debug!("ユーザー一覧を取得します");
        let result = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT userid, username, givenname, familyname
            FROM users
            ORDER BY userid ASC
            "#,
        )
        .fetch_all(&mut conn)
        .await;

        let rows = db::close_then(conn, result).await?;
        tracing::debug!(rows = rows.len(), "ユーザー一覧を取得しました");

        Ok(rows.into_iter().map(User::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_user_rowからユーザーに変換する() {
        let row = UserRow {
            userid:     80001,
            username:   "p_sarkar".to_string(),
            givenname:  "Pooja".to_string(),
            familyname: "Sarkar".to_string(),
        };

        let user = User::from(row);

        assert_eq!(user.id(), UserId::new(80001));
        assert_eq!(user.user_name(), "p_sarkar");
        assert_eq!(user.given_name(), "Pooja");
        assert_eq!(user.family_name(), "Sarkar");
    }

    #[tokio::test]
    async fn test_接続できない場合はcountもfind_allも接続エラー() {
        let options = MySqlConnectOptions::new()
            .host("127.0.0.1")
            .port(1)
            .username("nobody")
            .database("photoapp");
        let sut = MySqlUserRepository::new(options);

        let count_err = sut.count().await.unwrap_err();
        let find_err = sut.find_all().await.unwrap_err();

        assert!(matches!(count_err.kind(), crate::InfraErrorKind::Connection(_)));
        assert!(matches!(find_err.kind(), crate::InfraErrorKind::Connection(_)));
    }
}
