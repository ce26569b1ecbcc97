//! # PhotoApp API 設定
//!
//! 環境変数からサーバーの設定を読み込む。
//! 接続情報（RDS / S3）は環境変数ではなく `PHOTOAPP_CONFIG_FILE` が指す
//! INI ファイルに置き、`photoapp_infra::settings` で読み込む。

use std::{env, path::PathBuf, str::FromStr};

use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_CONFIG_FILE: &str = "photoapp-config.ini";
const DEFAULT_S3_PROFILE: &str = "s3readwrite";
const DEFAULT_PAGE_SIZE: u32 = 12;

/// 設定の読み込みエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// 値を期待する型に変換できない
    #[error("{name} の値が不正です: {value:?}")]
    InvalidValue { name: &'static str, value: String },
}

/// PhotoApp API サーバーの設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// バインドアドレス
    pub host:               String,
    /// ポート番号
    pub port:               u16,
    /// 接続情報ファイルのパス
    pub config_file:        PathBuf,
    /// S3 アクセスキーを保持するセクション名
    pub s3_profile:         String,
    /// 一覧のページサイズ（現状ページングは行わない）
    pub response_page_size: u32,
}

impl ApiConfig {
    /// 環境変数から設定を読み込む
    ///
    /// 未設定の項目はデフォルト値を使う。
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// 任意の取得関数から設定を読み込む
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            host:               lookup("API_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port:               parse_or(&lookup, "API_PORT", DEFAULT_PORT)?,
            config_file:        lookup("PHOTOAPP_CONFIG_FILE")
                .map_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE), PathBuf::from),
            s3_profile:         lookup("PHOTOAPP_S3_PROFILE")
                .unwrap_or_else(|| DEFAULT_S3_PROFILE.to_string()),
            response_page_size: parse_or(&lookup, "RESPONSE_PAGE_SIZE", DEFAULT_PAGE_SIZE)?,
        })
    }

    /// `host:port` 形式のバインドアドレス
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(name) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { name, value }),
        None => Ok(default),
    }
}
