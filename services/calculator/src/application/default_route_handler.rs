/// デフォルトルートハンドラー
///
/// どのルートにも一致しなかったリクエストに対し、
/// 受信したイベントをそのまま埋め込んだ診断メッセージを返す。
use serde_json::Value;
use tracing::info;

use crate::domain::GatewayResponse;
use crate::infrastructure::to_python_json;

/// レスポンスボディの固定プレフィックス
pub const DEFAULT_ROUTE_GREETING: &str =
    "Hello! This is the default route without authentication.\nReceived event: ";

/// デフォルトルートハンドラー
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultRouteHandler;

impl DefaultRouteHandler {
    pub fn new() -> Self {
        Self
    }

    /// 受信イベントを処理
    ///
    /// 常に200を返す。エラーはJSONシリアライズ自体の失敗のみ。
    pub fn handle(&self, event: &Value) -> Result<GatewayResponse, serde_json::Error> {
        let serialized = to_python_json(event)?;
        info!(event = %serialized, "デフォルトルートでイベント受信");

        Ok(GatewayResponse::ok(format!("{DEFAULT_ROUTE_GREETING}{serialized}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_returns_greeting_with_event() {
        let handler = DefaultRouteHandler::new();
        let event: Value =
            serde_json::from_str(r#"{"rawPath":"/unknown","queryStringParameters":{"a":"1"}}"#)
                .unwrap();

        let response = handler.handle(&event).unwrap();

        assert_eq!(response.status_code, 200);
        assert_eq!(
            response.body,
            "Hello! This is the default route without authentication.\nReceived event: \
             {\"rawPath\": \"/unknown\", \"queryStringParameters\": {\"a\": \"1\"}}"
        );
    }

    #[test]
    fn test_accepts_any_event() {
        let handler = DefaultRouteHandler::new();

        for event in [json!(null), json!({}), json!([1, 2]), json!("text")] {
            let response = handler.handle(&event).unwrap();
            assert_eq!(response.status_code, 200);
            assert!(response.body.starts_with(DEFAULT_ROUTE_GREETING));
        }
    }

    #[test]
    fn test_empty_event() {
        let response = DefaultRouteHandler::new().handle(&json!({})).unwrap();

        assert_eq!(response.body, format!("{DEFAULT_ROUTE_GREETING}{{}}"));
    }

    #[test]
    fn test_idempotent() {
        let handler = DefaultRouteHandler::new();
        let event = json!({"rawPath": "/", "headers": {"user-agent": "curl/8.0"}});

        assert_eq!(handler.handle(&event).unwrap(), handler.handle(&event).unwrap());
    }
}
