//! # S3 接続管理
//!
//! Amazon S3 / MinIO への接続管理とバケット内オブジェクトの一覧取得を行う。
//!
//! ## 設計方針
//!
//! - **認証情報**: 接続情報ファイルのプロファイルセクションのアクセスキーを静的に使う
//! - **SDK リトライ**: SDK の standard モード（最大 3 回）に任せ、
//!   アプリケーション側ではリトライしない
//! - **ローカル開発**: `[s3] endpoint_url` で MinIO に接続する
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use photoapp_infra::s3;
//!
//! let client = s3::create_client(&settings.s3, &settings.s3_credentials).await;
//! let s3 = s3::AwsS3Client::new(client, settings.s3.bucket_name.clone());
//! let count = s3.count_objects().await?;
//! ```

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region, retry::RetryConfig};
use aws_sdk_s3::{Client, config::Credentials};

use crate::{
    InfraError,
    settings::{S3Credentials, S3Settings},
};

/// SDK 内部のリトライ回数（初回を含む）
const SDK_MAX_ATTEMPTS: u32 = 3;

/// 認証情報プロバイダ名（SDK のログに出力される）
const CREDENTIALS_PROVIDER_NAME: &str = "photoapp-config";

/// S3 クライアントのインターフェース
///
/// テスト時はモックに差し替え可能。
#[async_trait]
pub trait S3Client: Send + Sync {
    /// バケット内のオブジェクト数を返す
    ///
    /// `ListObjectsV2` を 1 回呼び、`Contents` の要素数を返す。
    /// バケットが空の場合は 0 を返す（エラーではない）。
    async fn count_objects(&self) -> Result<usize, InfraError>;
}

/// AWS S3 クライアント
///
/// `aws-sdk-s3` を使用した [`S3Client`] の実装。
/// MinIO とも互換動作する。
pub struct AwsS3Client {
    client:      Client,
    bucket_name: String,
}

impl AwsS3Client {
    /// 新しい S3 クライアントを作成する
    pub fn new(client: Client, bucket_name: String) -> Self {
        Self {
            client,
            bucket_name,
        }
    }
}

#[async_trait]
impl S3Client for AwsS3Client {
    async fn count_objects(&self) -> Result<usize, InfraError> {
        tracing::debug!(bucket = %self.bucket_name, "S3 オブジェクト一覧を取得します");

        let output = self
            .client
            .list_objects_v2()
            .bucket(&self.bucket_name)
            .send()
            .await
            .map_err(|e| {
                InfraError::storage(format!(
                    "ListObjectsV2 の実行に失敗: {}",
                    aws_sdk_s3::error::DisplayErrorContext(&e)
                ))
            })?;

        Ok(output.contents().len())
    }
}

/// S3 クライアントを作成する
///
/// 認証情報は SDK のデフォルト認証チェーンではなく、接続情報ファイルの
/// アクセスキーを静的に使う。
/// `endpoint_url` が設定されている場合は MinIO 等のカスタムエンドポイントに
/// パススタイルで接続する。
pub async fn create_client(settings: &S3Settings, credentials: &S3Credentials) -> Client {
    let credentials = Credentials::new(
        &credentials.aws_access_key_id,
        &credentials.aws_secret_access_key,
        None,
        None,
        CREDENTIALS_PROVIDER_NAME,
    );

    let mut loader = aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(settings.region_name.clone()))
        .credentials_provider(credentials)
        .retry_config(RetryConfig::standard().with_max_attempts(SDK_MAX_ATTEMPTS));

    if let Some(endpoint_url) = &settings.endpoint_url {
        loader = loader.endpoint_url(endpoint_url);
    }

    let sdk_config = loader.load().await;

    // MinIO はパススタイルが必要（バーチャルホスト型 URL を使わない）
    let s3_config = aws_sdk_s3::config::Builder::from(&sdk_config)
        .force_path_style(settings.endpoint_url.is_some())
        .build();

    Client::from_conf(s3_config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> (S3Settings, S3Credentials) {
        (
            S3Settings {
                region_name:  "us-east-2".to_string(),
                bucket_name:  "photoapp-test-bucket".to_string(),
                endpoint_url: Some("http://127.0.0.1:1".to_string()),
            },
            S3Credentials {
                aws_access_key_id:     "AKIATEST".to_string(),
                aws_secret_access_key: "secret".to_string(),
            },
        )
    }

    #[tokio::test]
    async fn test_create_clientで設定したリージョンが反映される() {
        let (s3, credentials) = settings();

        let client = create_client(&s3, &credentials).await;

        assert_eq!(
            client.config().region().map(|r| r.as_ref()),
            Some("us-east-2")
        );
    }

    #[tokio::test]
    async fn test_count_objectsで接続できない場合はs3エラー() {
        let (s3, credentials) = settings();
        let client = AwsS3Client::new(create_client(&s3, &credentials).await, s3.bucket_name);

        let err = client.count_objects().await.unwrap_err();

        assert!(matches!(err.kind(), crate::InfraErrorKind::Storage(_)));
        assert!(err.to_string().starts_with("S3 エラー: ListObjectsV2 の実行に失敗"));
    }
}
