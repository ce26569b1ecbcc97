//! # レスポンスエンベロープ
//!
//! 各エンドポイントが返す JSON の形を定義する。
//!
//! 失敗時もステータスコード以外は成功時と同じ形を保ち、ペイロードには
//! 番兵値（`-1` / `[]` / `0`）を入れる。内部では `Result` で扱い、
//! 番兵値への変換はここで定義するコンストラクタだけで行う。

use serde::{Deserialize, Serialize};

/// 成功時の `message`
pub const SUCCESS_MESSAGE: &str = "success";

/// 稼働中を表す `status`
pub const RUNNING_STATUS: &str = "running";

/// 件数取得に失敗したことを表す番兵値
const COUNT_SENTINEL: i64 = -1;

/// `GET /` のレスポンス
///
/// ```
/// use photoapp_shared::StatusResponse;
///
/// let response = StatusResponse::running(12);
/// assert_eq!(response.status, "running");
/// assert_eq!(response.uptime_in_secs, 12);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResponse {
    /// `"running"` またはエラーメッセージ
    pub status:         String,
    pub uptime_in_secs: u64,
}

impl StatusResponse {
    pub fn running(uptime_in_secs: u64) -> Self {
        Self {
            status: RUNNING_STATUS.to_string(),
            uptime_in_secs,
        }
    }

    /// 稼働時間を計算できなかった場合のレスポンス（稼働時間は 0）
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            status:         message.into(),
            uptime_in_secs: 0,
        }
    }
}

/// `GET /ping` のレスポンス
///
/// `M` はバケット内のオブジェクト数、`N` はユーザー数。
/// 両方が有効な件数か、両方が `-1` のどちらかで、片方だけ有効になることはない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PingResponse {
    pub message: String,
    #[serde(rename = "M")]
    pub m:       i64,
    #[serde(rename = "N")]
    pub n:       i64,
}

impl PingResponse {
    pub fn success(item_count: u64, user_count: u64) -> Self {
        Self {
            message: SUCCESS_MESSAGE.to_string(),
            m:       saturating_i64(item_count),
            n:       saturating_i64(user_count),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            m:       COUNT_SENTINEL,
            n:       COUNT_SENTINEL,
        }
    }
}

fn saturating_i64(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

/// 一覧を返すエンドポイントのレスポンス（`{ message, data }`）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataResponse<T> {
    pub message: String,
    pub data:    Vec<T>,
}

impl<T> DataResponse<T> {
    pub fn success(data: Vec<T>) -> Self {
        Self {
            message: SUCCESS_MESSAGE.to_string(),
            data,
        }
    }

    /// 失敗時は `data` を空配列にする
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            data:    Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_status_response_runningのjson形状() {
        let json = serde_json::to_value(StatusResponse::running(3)).unwrap();

        assert_eq!(json, json!({ "status": "running", "uptime_in_secs": 3 }));
    }

    #[test]
    fn test_status_response_failureは稼働時間を0にする() {
        let json = serde_json::to_value(StatusResponse::failure("clock error")).unwrap();

        assert_eq!(json, json!({ "status": "clock error", "uptime_in_secs": 0 }));
    }

    #[test]
    fn test_ping_response_successは大文字のmとnで出力する() {
        let json = serde_json::to_value(PingResponse::success(0, 4)).unwrap();

        assert_eq!(json, json!({ "message": "success", "M": 0, "N": 4 }));
    }

    #[test]
    fn test_ping_response_failureは両方を番兵値にする() {
        let json = serde_json::to_value(PingResponse::failure("NoSuchBucket")).unwrap();

        assert_eq!(json, json!({ "message": "NoSuchBucket", "M": -1, "N": -1 }));
    }

    #[test]
    fn test_ping_response_successでi64を超える件数は上限に丸める() {
        let response = PingResponse::success(u64::MAX, 1);

        assert_eq!(response.m, i64::MAX);
        assert_eq!(response.n, 1);
    }

    #[test]
    fn test_data_response_failureは空配列を返す() {
        let json = serde_json::to_value(DataResponse::<u32>::failure("接続失敗")).unwrap();

        assert_eq!(json, json!({ "message": "接続失敗", "data": [] }));
    }

    #[test]
    fn test_data_response_successは順序を保つ() {
        let json = serde_json::to_value(DataResponse::success(vec![3, 1, 2])).unwrap();

        assert_eq!(json, json!({ "message": "success", "data": [3, 1, 2] }));
    }
}
