//! ルーター全体の統合テスト
//!
//! 実際の axum ルーターにモックのリポジトリ・S3 クライアントを注入し、
//! `oneshot` でリクエストを送ってレスポンスの形とステータスコードを検証する。

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use std::time::{Duration, Instant};
use photoapp_api::{
    app::build_router,
    handler::{PingState, StatusState, UserState},
    usecase::{PingUseCaseImpl, UserUseCaseImpl},
};
use photoapp_domain::{
    clock::ManualClock,
    user::{User, UserId},
};
use photoapp_infra::{
    RetryPolicy,
    mock::{MockS3Client, MockUserRepository},
};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use tower::ServiceExt;

fn user(id: i64, name: &str, given: &str, family: &str) -> User {
    User::from_db(UserId::new(id), name, given, family)
}

struct TestApp {
    user_repo: MockUserRepository,
    s3:         MockS3Client,
    started_at: Instant,
    now:        Instant,
}

impl TestApp {
    fn new(user_repo: MockUserRepository, s3: MockS3Client) -> Self {
        let started_at = Instant::now();
        Self {
            user_repo,
            s3,
            started_at,
            now: started_at,
        }
    }

    /// 起動から `elapsed` 経過した時点の時計を使う
    fn after(mut self, elapsed: Duration) -> Self {
        self.now = self.started_at + elapsed;
        self
    }

    /// 起動時刻より `by` だけ前を指す時計を使う
    fn before(mut self, by: Duration) -> Self {
        self.now = self.started_at.checked_sub(by).unwrap();
        self
    }

    fn router(&self) -> Router {
        let policy = RetryPolicy::no_backoff(2);
        let status_state = Arc::new(StatusState {
            clock:      Arc::new(ManualClock::new(self.now)),
            started_at: self.started_at,
        });
        let ping_state = Arc::new(PingState {
            usecase: PingUseCaseImpl::new(
                Arc::new(self.user_repo.clone()),
                Arc::new(self.s3.clone()),
                policy.clone(),
            ),
        });
        let user_state = Arc::new(UserState {
            usecase: UserUseCaseImpl::new(Arc::new(self.user_repo.clone()), policy),
        });
        build_router(status_state, ping_state, user_state)
    }

    async fn get(&self, path: &str) -> (StatusCode, Value) {
        let request = Request::builder().uri(path).body(Body::empty()).unwrap();
        let response = self.router().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }
}

fn three_users() -> Vec<User> {
    vec![
        user(3, "p_sarkar", "Pooja", "Sarkar"),
        user(1, "e_ricci", "Emanuele", "Ricci"),
        user(2, "l_chen", "Li", "Chen"),
    ]
}

// ===== GET / =====

#[tokio::test]
async fn test_status_起動直後は稼働秒数0を返す() {
    // Given
    let app = TestApp::new(MockUserRepository::new(Vec::new()), MockS3Client::new(0));

    // When
    let (status, body) = app.get("/").await;

    // Then
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "running", "uptime_in_secs": 0 }));
}

#[tokio::test]
async fn test_status_経過時間を秒に丸めて返す() {
    // Given
    let app = TestApp::new(MockUserRepository::new(Vec::new()), MockS3Client::new(0))
        .after(Duration::from_millis(42_600));

    // When
    let (status, body) = app.get("/").await;

    // Then
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "running", "uptime_in_secs": 43 }));
}

#[tokio::test]
async fn test_status_時刻が巻き戻った場合は500と稼働秒数0を返す() {
    // Given
    let app = TestApp::new(MockUserRepository::new(Vec::new()), MockS3Client::new(0))
        .before(Duration::from_secs(1));

    // When
    let (status, body) = app.get("/").await;

    // Then
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["uptime_in_secs"], json!(0));
    assert!(body["status"].as_str().unwrap().starts_with("時刻が不正です"));
}

// ===== GET /ping =====

#[tokio::test]
async fn test_ping_成功時にオブジェクト数とユーザー数を返す() {
    // Given
    let app = TestApp::new(MockUserRepository::new(three_users()), MockS3Client::new(8));

    // When
    let (status, body) = app.get("/ping").await;

    // Then
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "success", "M": 8, "N": 3 }));
}

#[tokio::test]
async fn test_ping_空のバケットはm0で成功する() {
    // Given
    let app = TestApp::new(MockUserRepository::new(three_users()), MockS3Client::new(0));

    // When
    let (status, body) = app.get("/ping").await;

    // Then
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "success", "M": 0, "N": 3 }));
}

#[tokio::test]
async fn test_ping_s3が失敗した場合は両方を番兵値にする() {
    // Given
    let app = TestApp::new(
        MockUserRepository::new(three_users()),
        MockS3Client::always_failing("NoSuchBucket"),
    );

    // When
    let (status, body) = app.get("/ping").await;

    // Then
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({ "message": "S3 エラー: NoSuchBucket", "M": -1, "N": -1 })
    );
}

#[tokio::test]
async fn test_ping_データベースがリトライ上限まで失敗した場合は番兵値を返す() {
    // Given
    let user_repo = MockUserRepository::always_failing("Access denied");
    let app = TestApp::new(user_repo.clone(), MockS3Client::new(8));

    // When
    let (status, body) = app.get("/ping").await;

    // Then
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({ "message": "予期しないエラー: Access denied", "M": -1, "N": -1 })
    );
    assert_eq!(user_repo.calls(), 3);
}

#[tokio::test]
async fn test_ping_データベースの一時的な失敗はリトライで回復する() {
    // Given
    let user_repo = MockUserRepository::failing_first(three_users(), 2, "Too many connections");
    let app = TestApp::new(user_repo.clone(), MockS3Client::new(8));

    // When
    let (status, body) = app.get("/ping").await;

    // Then
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "success", "M": 8, "N": 3 }));
    assert_eq!(user_repo.calls(), 3);
}

// ===== GET /users =====

#[tokio::test]
async fn test_users_userid昇順で全件返す() {
    // Given
    let app = TestApp::new(MockUserRepository::new(three_users()), MockS3Client::new(0));

    // When
    let (status, body) = app.get("/users").await;

    // Then
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "message": "success",
            "data": [
                { "userid": 1, "username": "e_ricci", "givenname": "Emanuele", "familyname": "Ricci" },
                { "userid": 2, "username": "l_chen", "givenname": "Li", "familyname": "Chen" },
                { "userid": 3, "username": "p_sarkar", "givenname": "Pooja", "familyname": "Sarkar" },
            ]
        })
    );
}

#[tokio::test]
async fn test_users_ユーザーがいない場合は空配列で成功する() {
    // Given
    let app = TestApp::new(MockUserRepository::new(Vec::new()), MockS3Client::new(0));

    // When
    let (status, body) = app.get("/users").await;

    // Then
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "success", "data": [] }));
}

#[tokio::test]
async fn test_users_リトライ上限を超えた場合は500と空配列を返す() {
    // Given
    let user_repo = MockUserRepository::always_failing("Unknown database");
    let app = TestApp::new(user_repo.clone(), MockS3Client::new(0));

    // When
    let (status, body) = app.get("/users").await;

    // Then
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({ "message": "予期しないエラー: Unknown database", "data": [] })
    );
    assert_eq!(user_repo.calls(), 3);
}

// ===== 横断的な性質 =====

#[tokio::test]
async fn test_同じリクエストを繰り返しても同じボディを返す() {
    // Given
    let app = TestApp::new(MockUserRepository::new(three_users()), MockS3Client::new(8));

    for path in ["/ping", "/users"] {
        // When
        let first = app.get(path).await;
        let second = app.get(path).await;

        // Then
        assert_eq!(first, second, "{path} のレスポンスが一致すること");
    }
}

#[tokio::test]
async fn test_レスポンスにリクエストidが付与される() {
    // Given
    let app = TestApp::new(MockUserRepository::new(Vec::new()), MockS3Client::new(0));
    let request = Request::builder().uri("/").body(Body::empty()).unwrap();

    // When
    let response = app.router().oneshot(request).await.unwrap();

    // Then
    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn test_指定されたリクエストidをそのまま返す() {
    // Given
    let app = TestApp::new(MockUserRepository::new(Vec::new()), MockS3Client::new(0));
    let request = Request::builder()
        .uri("/users")
        .header("x-request-id", "req-from-client")
        .body(Body::empty())
        .unwrap();

    // When
    let response = app.router().oneshot(request).await.unwrap();

    // Then
    assert_eq!(
        response.headers().get("x-request-id").unwrap(),
        "req-from-client"
    );
}
