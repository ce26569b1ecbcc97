//! # 2 並列の実行と合流
//!
//! 2 つの処理をそれぞれ独立したタスクとして起動し、両方の結果がそろった
//! 場合だけ成功とする。片方だけ成功した結果を返すことはない。
//!
//! ## 失敗時の挙動
//!
//! - `primary` を先に待つ。`primary` が失敗（またはパニック）したら
//!   `secondary` を中断し、`primary` のエラーを返す
//! - `primary` が成功し `secondary` が失敗したら `secondary` のエラーを返す
//!
//! `secondary` は途中で中断されうるため、後始末の必要な処理
//! （データベース接続など）は `primary` 側に置くこと。

use std::future::Future;

use tracing::Instrument;

use crate::error::ApiError;

/// 2 つの処理を並行実行し、両方成功した場合のみ結果の組を返す
///
/// どちらのタスクも呼び出し元のスパンを引き継ぐ。
pub async fn join_pair<P, S, A, B>(primary: P, secondary: S) -> Result<(A, B), ApiError>
where
    P: Future<Output = Result<A, ApiError>> + Send + 'static,
    S: Future<Output = Result<B, ApiError>> + Send + 'static,
    A: Send + 'static,
    B: Send + 'static,
{
    let primary = tokio::spawn(primary.in_current_span());
    let secondary = tokio::spawn(secondary.in_current_span());

    let primary_value = match primary.await {
        Ok(Ok(value)) => value,
        Ok(Err(e)) => {
            secondary.abort();
            return Err(e);
        }
        Err(e) => {
            secondary.abort();
            return Err(ApiError::Join(e));
        }
    };

    let secondary_value = secondary.await??;

    Ok((primary_value, secondary_value))
}
