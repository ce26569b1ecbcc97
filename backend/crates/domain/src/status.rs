//! # ステータス件数
//!
//! `/ping` が返す 2 つの件数（バケット内オブジェクト数とユーザー数）を表現する。
//!
//! ## 設計方針
//!
//! - **ペアでのみ生成**: 片方だけが有効な状態を型で表現できないようにする
//! - **番兵値を持たない**: 失敗時の `-1` はレスポンス変換時にのみ現れる

/// バケット内オブジェクト数とユーザー数のペア
///
/// 両方の取得に成功した場合にのみ生成される。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusCounts {
    item_count: u64,
    user_count: u64,
}

impl StatusCounts {
    /// 件数ペアを作成する
    pub fn new(item_count: u64, user_count: u64) -> Self {
        Self {
            item_count,
            user_count,
        }
    }

    /// バケット内のオブジェクト数（M）
    pub fn item_count(&self) -> u64 {
        self.item_count
    }

    /// users テーブルの行数（N）
    pub fn user_count(&self) -> u64 {
        self.user_count
    }
}
