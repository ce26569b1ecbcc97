//! # MySQL データベース接続管理
//!
//! 呼び出しごとに接続を張り、処理が終わったら必ず切断する。
//!
//! ## 設計方針
//!
//! - **プールを持たない**: 1 回の呼び出しにつき 1 接続。リトライ時も接続を張り直す
//! - **切断失敗は握りつぶす**: 切断エラーで本来の結果（成功・失敗）を上書きしない。
//!   ただし WARN ログには残す
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use photoapp_infra::db;
//!
//! async fn example(options: &sqlx::mysql::MySqlConnectOptions) -> Result<i64, InfraError> {
//!     let mut conn = db::open_connection(options).await?;
//!     let result = sqlx::query_scalar("SELECT COUNT(*) FROM users")
//!         .fetch_one(&mut conn)
//!         .await;
//!     db::close_then(conn, result).await
//! }
//! ```

use std::future::Future;

use sqlx::{Connection, MySqlConnection, mysql::MySqlConnectOptions};

use crate::{error::InfraError, settings::RdsSettings};

/// `[rds]` セクションから接続オプションを組み立てる
///
/// 起動時に一度だけ呼び出し、リポジトリに渡す。
pub fn connect_options(rds: &RdsSettings) -> MySqlConnectOptions {
    MySqlConnectOptions::new()
        .host(&rds.endpoint)
        .port(rds.port_number)
        .username(&rds.user_name)
        .password(&rds.user_pwd)
        .database(&rds.db_name)
}

/// MySQL への接続を確立する
///
/// # エラー
///
/// 接続先に到達できない、認証に失敗した場合は `InfraErrorKind::Connection` を返す。
pub async fn open_connection(options: &MySqlConnectOptions) -> Result<MySqlConnection, InfraError> {
    MySqlConnection::connect_with(options)
        .await
        .map_err(InfraError::connection)
}

/// 接続を切断してからクエリ結果を返す
///
/// 結果が成功でも失敗でも先に切断する。切断の失敗は呼び出し元に返さず、
/// WARN ログに残すだけにする。
///
/// # エラー
///
/// クエリが失敗していた場合は `InfraErrorKind::Query` を返す。
pub async fn close_then<T>(
    conn: MySqlConnection,
    result: Result<T, sqlx::Error>,
) -> Result<T, InfraError> {
    settle(conn.close(), result).await
}

async fn settle<T, C>(close: C, result: Result<T, sqlx::Error>) -> Result<T, InfraError>
where
    C: Future<Output = Result<(), sqlx::Error>>,
{
    if let Err(e) = close.await {
        tracing::warn!(error = %e, "データベース接続の切断に失敗しました（無視します）");
    }
    Ok(result?)
}

/// `COUNT(...)` の結果を件数に変換する
///
/// MySQL の `COUNT` は `BIGINT` を返すため `i64` で受け取り、負値は不正として扱う。
pub(crate) fn count_from_row(value: i64) -> Result<u64, InfraError> {
    u64::try_from(value).map_err(|_| InfraError::unexpected(format!("件数が負の値です: {value}")))
}
