//! # Clock
//!
//! 稼働時間の計算で使う現在時刻の取得元。
//!
//! 壁時計（`Utc::now`）ではなく単調増加する [`Instant`] を使うため、
//! NTP による時刻補正で稼働時間が巻き戻ることはない。
//! テストでは [`ManualClock`] を注入し、実際に待たずに「起動から t 秒後」を再現する。

use std::{
    sync::Mutex,
    time::{Duration, Instant},
};

/// 現在時刻の取得元
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

/// OS の単調時計
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// 手動で進める時刻
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<Instant>,
}

impl ManualClock {
    pub fn new(now: Instant) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    /// 時刻を `by` だけ進める
    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap_or_else(|e| e.into_inner());
        *now += by;
    }

    /// 時刻を `by` だけ戻す（表現できない場合は動かさない）
    pub fn rewind(&self, by: Duration) {
        let mut now = self.now.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(earlier) = now.checked_sub(by) {
            *now = earlier;
        }
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        *self.now.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_system_clockは単調に増加する() {
        let first = SystemClock.now();
        let second = SystemClock.now();

        assert!(first <= second);
    }

    #[test]
    fn test_manual_clockは進めるまで同じ時刻を返す() {
        let start = Instant::now();
        let clock = ManualClock::new(start);

        assert_eq!(clock.now(), start);
        assert_eq!(clock.now(), start);
    }

    #[test]
    fn test_manual_clockのadvanceで時刻が進む() {
        let start = Instant::now();
        let clock = ManualClock::new(start);

        clock.advance(Duration::from_secs(5));
        clock.advance(Duration::from_millis(250));

        assert_eq!(clock.now(), start + Duration::from_millis(5_250));
    }

    #[test]
    fn test_manual_clockのrewindで時刻が戻る() {
        let start = Instant::now();
        let clock = ManualClock::new(start);
        clock.advance(Duration::from_secs(3));

        clock.rewind(Duration::from_secs(4));

        assert!(clock.now() < start);
    }
}
