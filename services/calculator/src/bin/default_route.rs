/// デフォルトルートLambdaエントリポイント
///
/// HTTP API の `$default` ルート（認証なし）から呼び出され、
/// 受信イベントを埋め込んだ診断メッセージを返却する。
use calculator::application::DefaultRouteHandler;
use calculator::domain::GatewayResponse;
use calculator::infrastructure::init_logging;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Error> {
    // 構造化ログを初期化
    init_logging();

    info!("デフォルトルートLambda関数を初期化");

    let func = service_fn(handler);
    lambda_runtime::run(func).await?;
    Ok(())
}

/// Lambda関数のメインハンドラー
async fn handler(event: LambdaEvent<Value>) -> Result<GatewayResponse, Error> {
    info!(request_id = %event.context.request_id, "リクエスト受信");

    DefaultRouteHandler::new()
        .handle(&event.payload)
        .map_err(|err| {
            error!(error = %err, "イベントのシリアライズに失敗");
            Error::from(err)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use calculator::application::DEFAULT_ROUTE_GREETING;
    use lambda_runtime::Context;
    use serde_json::json;

    #[tokio::test]
    async fn test_handler_echoes_event() {
        init_logging();
        let payload: Value = serde_json::from_str(
            r#"{"version":"2.0","routeKey":"$default","rawPath":"/hello","headers":{"accept":"*/*"}}"#,
        )
        .unwrap();

        let response = handler(LambdaEvent::new(payload, Context::default()))
            .await
            .unwrap();

        assert_eq!(response.status_code, 200);
        assert_eq!(
            response.body,
            format!(
                "{DEFAULT_ROUTE_GREETING}{}",
                r#"{"version": "2.0", "routeKey": "$default", "rawPath": "/hello", "headers": {"accept": "*/*"}}"#
            )
        );
    }

    #[tokio::test]
    async fn test_handler_accepts_empty_event() {
        init_logging();

        let response = handler(LambdaEvent::new(json!({}), Context::default()))
            .await
            .unwrap();

        assert_eq!(
            response.body,
            "Hello! This is the default route without authentication.\nReceived event: {}"
        );
    }
}
