//! # リトライ
//!
//! 失敗した非同期処理を、指定回数まで再実行する。
//!
//! ## 保証すること
//!
//! - 総実行回数は `max_retries + 1` 回以下
//! - すべて失敗した場合は **最後の** 試行のエラーを返す
//! - 各試行の失敗は WARN ログに残す（握りつぶさない）
//!
//! 待機時間は指数バックオフ（初期 1 秒、倍率 2、上限 30 秒）。
//!
//! ## 使用例
//!
//! ```rust
//! use photoapp_infra::{RetryPolicy, retry::retry};
//!
//! # tokio_test::block_on(async {
//! let policy = RetryPolicy::no_backoff(2);
//! let result: Result<u32, String> = retry(&policy, "example", || async { Ok(42) }).await;
//! assert_eq!(result, Ok(42));
//! # });
//! ```

use std::{fmt::Display, future::Future, time::Duration};

/// リトライポリシー
#[derive(Debug, Clone, PartialEq)]
pub struct RetryPolicy {
    /// 初回を除く最大リトライ回数
    pub max_retries:     u32,
    /// 1 回目のリトライ前の待機時間
    pub initial_backoff: Duration,
    /// 待機時間の倍率
    pub multiplier:      f64,
    /// 待機時間の上限
    pub max_backoff:     Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(2)
    }
}

impl RetryPolicy {
    /// 指定回数までリトライするポリシーを作成する
    pub fn new(max_retries: u32) -> Self {
        Self {
            max_retries,
            initial_backoff: Duration::from_secs(1),
            multiplier: 2.0,
            max_backoff: Duration::from_secs(30),
        }
    }

    /// 待機なしでリトライするポリシーを作成する（テスト用）
    pub fn no_backoff(max_retries: u32) -> Self {
        Self {
            initial_backoff: Duration::ZERO,
            max_backoff: Duration::ZERO,
            ..Self::new(max_retries)
        }
    }

    /// 総試行回数の上限
    pub fn max_attempts(&self) -> u32 {
        self.max_retries.saturating_add(1)
    }

    /// `retry_index` 回目（0 始まり）のリトライ前の待機時間
    fn backoff(&self, retry_index: u32) -> Duration {
        // 上限に張り付いた後は指数計算を続けない
        let exponent = retry_index.min(16) as i32;
        let scaled = self.initial_backoff.as_secs_f64() * self.multiplier.powi(exponent);
        Duration::try_from_secs_f64(scaled)
            .unwrap_or(self.max_backoff)
            .min(self.max_backoff)
    }
}

/// 処理をリトライ付きで実行する
///
/// # 引数
///
/// * `policy` - リトライポリシー
/// * `operation` - ログに出力する処理名
/// * `f` - 実行する処理。試行ごとに呼び出され、新しい Future を返す
///
/// # 戻り値
///
/// 最初に成功した試行の結果。すべて失敗した場合は最後の試行のエラー。
pub async fn retry<T, E, F, Fut>(policy: &RetryPolicy, operation: &str, mut f: F) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
{
    let mut retry_index = 0;

    loop {
        match f().await {
            Ok(value) => {
                if retry_index > 0 {
                    tracing::info!(
                        operation,
                        attempt = retry_index + 1,
                        "リトライ後に成功しました"
                    );
                }
                return Ok(value);
            }
            Err(e) if retry_index >= policy.max_retries => {
                tracing::warn!(
                    operation,
                    attempt = retry_index + 1,
                    error = %e,
                    "リトライ上限に達しました"
                );
                return Err(e);
            }
            Err(e) => {
                let backoff = policy.backoff(retry_index);
                tracing::warn!(
                    operation,
                    attempt = retry_index + 1,
                    error = %e,
                    backoff_ms = backoff.as_millis() as u64,
                    "失敗したためリトライします"
                );
                tokio::time::sleep(backoff).await;
                retry_index += 1;
            }
        }
    }
}
