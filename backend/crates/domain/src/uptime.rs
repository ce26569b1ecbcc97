//! # 稼働時間
//!
//! プロセス起動時刻から現在時刻までの経過秒数を計算する。

use std::time::Instant;

use crate::DomainError;

/// 稼働時間（秒）
///
/// ミリ秒単位の経過時間を最も近い秒に丸めた値を保持する。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Uptime(u64);

impl Uptime {
    /// 起動時刻と現在時刻から稼働時間を計算する
    ///
    /// 0.5 秒以上の端数は切り上げる（起動直後は 0 秒）。
    ///
    /// # エラー
    ///
    /// `now` が `started_at` より前の場合は `DomainError::InvalidTime` を返す。
    /// 単調時計から取得した時刻どうしでは発生しない。
    pub fn between(started_at: Instant, now: Instant) -> Result<Self, DomainError> {
        let elapsed = now.checked_duration_since(started_at).ok_or_else(|| {
            DomainError::InvalidTime("現在時刻が起動時刻より前です".to_string())
        })?;

        let secs = elapsed.as_millis().saturating_add(500) / 1000;
        Ok(Self(u64::try_from(secs).unwrap_or(u64::MAX)))
    }

    /// 秒数を取得する
    pub fn as_secs(&self) -> u64 {
        self.0
    }
}
