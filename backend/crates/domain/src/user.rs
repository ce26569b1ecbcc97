//! # ユーザー
//!
//! `users` テーブルの 1 行を表すユーザーレコードを定義する。
//!
//! ## 設計方針
//!
//! - **Newtype パターン**: UserId は数値 ID をラップし、型安全性を確保
//! - **不変性**: DB から読み出した時点のスナップショットで、変更メソッドは持たない
//!
//! ## 使用例
//!
//! ```rust
//! use photoapp_domain::user::{User, UserId};
//!
//! let user = User::from_db(UserId::new(80001), "p_sarkar", "Pooja", "Sarkar");
//! assert_eq!(user.id().as_i64(), 80001);
//! assert_eq!(user.user_name(), "p_sarkar");
//! ```

/// ユーザー ID
///
/// `users.userid` 列（AUTO_INCREMENT の数値キー）に対応する。
/// 一覧は常にこの値の昇順で返す。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UserId(i64);

impl UserId {
    /// 数値からユーザー ID を作成する
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// 内部の数値を取得する
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

/// ユーザーレコード
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id:          UserId,
    user_name:   String,
    given_name:  String,
    family_name: String,
}

impl User {
    /// データベースの行からユーザーを復元する
    pub fn from_db(
        id: UserId,
        user_name: impl Into<String>,
        given_name: impl Into<String>,
        family_name: impl Into<String>,
    ) -> Self {
        Self {
            id,
            user_name: user_name.into(),
            given_name: given_name.into(),
            family_name: family_name.into(),
        }
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    pub fn given_name(&self) -> &str {
        &self.given_name
    }

    pub fn family_name(&self) -> &str {
        &self.family_name
    }
}
