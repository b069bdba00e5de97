/// クエリ検証エコーハンドラー
///
/// クエリパラメータをスキーマ検証し、適合すればそのままJSONで返す。
/// 不適合の場合は違反内容をJSON配列で返す。
use serde_json::Value;
use tracing::{info, warn};

use crate::domain::{GatewayResponse, QueryValidator};

/// クエリ検証エコーハンドラー
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryEchoHandler;

impl QueryEchoHandler {
    pub fn new() -> Self {
        Self
    }

    /// 受信イベントを処理
    ///
    /// # 戻り値
    /// * 適合: 200、ボディはクエリパラメータのJSON
    /// * 不適合: 400、ボディは違反1件を含むJSON配列
    pub fn handle(&self, event: &Value) -> Result<GatewayResponse, serde_json::Error> {
        let query = event.get("queryStringParameters");
        info!(query = ?query, "クエリ検証リクエスト受信");

        match QueryValidator::validate(query) {
            Ok(()) => {
                let body = serde_json::to_string(query.unwrap_or(&Value::Null))?;
                Ok(GatewayResponse::ok(body))
            }
            Err(violation) => {
                warn!(message = %violation.message, "クエリがスキーマに適合しない");
                let body = serde_json::to_string(&[violation])?;
                Ok(GatewayResponse::bad_request(body))
            }
        }
    }
}
