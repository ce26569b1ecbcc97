//! # PhotoApp API サーバー
//!
//! S3 バケットと MySQL の `users` テーブルを読み取る HTTP API。
//!
//! ## エンドポイント
//!
//! | メソッド | パス | 内容 |
//! |----------|------|------|
//! | GET | `/` | 稼働状態と稼働秒数 |
//! | GET | `/ping` | バケット内のオブジェクト数（`M`）とユーザー数（`N`） |
//! | GET | `/users` | 全ユーザー（`userid` 昇順） |
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `API_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `API_PORT` | No | ポート番号（デフォルト: `8080`） |
//! | `PHOTOAPP_CONFIG_FILE` | No | 接続情報ファイル（デフォルト: `photoapp-config.ini`） |
//! | `PHOTOAPP_S3_PROFILE` | No | アクセスキーのセクション名（デフォルト: `s3readwrite`） |
//! | `LOG_FORMAT` | No | `json` / `pretty`（デフォルト: `pretty`） |
//!
//! ## 起動方法
//!
//! ```bash
//! PHOTOAPP_CONFIG_FILE=./photoapp-config.ini cargo run -p photoapp-api
//! ```

use std::sync::Arc;

use anyhow::Context as _;
use photoapp_api::{
    app::build_router,
    config::ApiConfig,
    handler::{PingState, StatusState, UserState},
    usecase::{PingUseCaseImpl, UserUseCaseImpl},
};
use photoapp_domain::clock::{Clock, SystemClock};
use photoapp_infra::{
    RetryPolicy,
    db,
    repository::MySqlUserRepository,
    s3::{self, AwsS3Client},
    settings::PhotoappSettings,
};
use photoapp_shared::observability::{TracingConfig, init_tracing};
use tokio::net::TcpListener;

const SERVICE_NAME: &str = "photoapp-api";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    let tracing_config = TracingConfig::from_env(SERVICE_NAME);
    init_tracing(&tracing_config);
    let _tracing_guard = tracing::info_span!("app", service = SERVICE_NAME).entered();

    let config = ApiConfig::from_env().context("環境変数の読み込みに失敗しました")?;

    // 接続情報はここで一度だけ読み込み、以降は読み直さない
    let settings = PhotoappSettings::load(&config.config_file, &config.s3_profile)
        .with_context(|| {
            format!(
                "接続情報ファイルの読み込みに失敗しました: {}",
                config.config_file.display()
            )
        })?;
    tracing::info!(
        rds_endpoint = %settings.rds.endpoint,
        bucket = %settings.s3.bucket_name,
        region = %settings.s3.region_name,
        "接続情報を読み込みました"
    );

    let user_repo = Arc::new(MySqlUserRepository::new(db::connect_options(&settings.rds)));
    let s3_client = Arc::new(AwsS3Client::new(
        s3::create_client(&settings.s3, &settings.s3_credentials).await,
        settings.s3.bucket_name.clone(),
    ));
    let retry_policy = RetryPolicy::default();

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let status_state = Arc::new(StatusState {
        started_at: clock.now(),
        clock,
    });
    let ping_state = Arc::new(PingState {
        usecase: PingUseCaseImpl::new(user_repo.clone(), s3_client, retry_policy.clone()),
    });
    let user_state = Arc::new(UserState {
        usecase: UserUseCaseImpl::new(user_repo, retry_policy),
    });

    let app = build_router(status_state, ping_state, user_state);

    let addr = config.bind_address();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("{addr} にバインドできませんでした"))?;
    tracing::info!("PhotoApp API サーバーが起動しました: {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
