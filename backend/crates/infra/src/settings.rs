//! # 接続情報ファイル
//!
//! RDS（MySQL）と S3 への接続情報を INI 形式のファイルから読み込む。
//!
//! ## 設計方針
//!
//! - **起動時に一度だけ読み込む**: リクエストごとにファイルを読み直さない。
//!   読み込んだ [`PhotoappSettings`] を各アクセサに渡す
//! - **パスワード・秘密鍵はログに出さない**: `Debug` 出力では伏字にする
//!
//! ## ファイル形式
//!
//! ```ini
//! [rds]
//! endpoint = photoapp.xxxx.us-east-2.rds.amazonaws.com
//! port_number = 3306
//! user_name = photoapp-read-only
//! user_pwd = secret
//! db_name = photoapp
//!
//! [s3]
//! region_name = us-east-2
//! bucket_name = photoapp-bucket
//!
//! [s3readwrite]
//! aws_access_key_id = AKIA...
//! aws_secret_access_key = ...
//! ```
//!
//! `[s3]` には S3 互換ストレージ（MinIO 等）向けに `endpoint_url` を任意で指定できる。
//! アクセスキーのセクション名はプロファイル名（デフォルト `s3readwrite`）で決まる。

use std::{fmt, path::Path};

use config::{Config, File, FileFormat};
use serde::Deserialize;

use crate::error::InfraError;

/// 接続情報ファイル全体
#[derive(Debug, Clone)]
pub struct PhotoappSettings {
    /// `[rds]` セクション
    pub rds:            RdsSettings,
    /// `[s3]` セクション
    pub s3:             S3Settings,
    /// プロファイル名のセクション（S3 アクセスキー）
    pub s3_credentials: S3Credentials,
}

/// `[rds]` セクション
#[derive(Clone, Deserialize)]
pub struct RdsSettings {
    pub endpoint:    String,
    pub port_number: u16,
    pub user_name:   String,
    pub user_pwd:    String,
    pub db_name:     String,
}

/// `[s3]` セクション
#[derive(Debug, Clone, Deserialize)]
pub struct S3Settings {
    pub region_name:  String,
    pub bucket_name:  String,
    /// S3 互換エンドポイント（未設定で AWS S3 デフォルト）
    #[serde(default)]
    pub endpoint_url: Option<String>,
}

/// S3 アクセスキー
#[derive(Clone, Deserialize)]
pub struct S3Credentials {
    pub aws_access_key_id:     String,
    pub aws_secret_access_key: String,
}

impl PhotoappSettings {
    /// 接続情報ファイルを読み込む
    ///
    /// # 引数
    ///
    /// * `path` - INI ファイルのパス
    /// * `s3_profile` - アクセスキーを保持するセクション名
    ///
    /// # エラー
    ///
    /// ファイルが存在しない、必須キーが欠けている、値の型が不正な場合は
    /// `InfraErrorKind::Config` を返す。
    pub fn load(path: impl AsRef<Path>, s3_profile: &str) -> Result<Self, InfraError> {
        let source = Config::builder()
            .add_source(File::from(path.as_ref()).format(FileFormat::Ini))
            .build()?;

        Ok(Self {
            rds:            source.get("rds")?,
            s3:             source.get("s3")?,
            s3_credentials: source.get(s3_profile)?,
        })
    }
}

impl fmt::Debug for RdsSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RdsSettings")
            .field("endpoint", &self.endpoint)
            .field("port_number", &self.port_number)
            .field("user_name", &self.user_name)
            .field("user_pwd", &"***")
            .field("db_name", &self.db_name)
            .finish()
    }
}

impl fmt::Debug for S3Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("S3Credentials")
            .field("aws_access_key_id", &self.aws_access_key_id)
            .field("aws_secret_access_key", &"***")
            .finish()
    }
}
