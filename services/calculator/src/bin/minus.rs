/// 減算Lambdaエントリポイント
///
/// HTTP API の `GET /minus` ルートから呼び出され、
/// クエリパラメータval1からval2を引いた値を返却する。
use calculator::application::ArithmeticHandler;
use calculator::domain::{GatewayResponse, Operation};
use calculator::infrastructure::{init_logging, CalculatorConfig};
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // 構造化ログを初期化
    init_logging();

    info!("減算Lambda関数を初期化");

    let func = service_fn(handler);
    lambda_runtime::run(func).await?;
    Ok(())
}

/// Lambda関数のメインハンドラー
async fn handler(event: LambdaEvent<Value>) -> Result<GatewayResponse, Error> {
    info!(request_id = %event.context.request_id, "リクエスト受信");

    let config = CalculatorConfig::from_env();
    let handler = ArithmeticHandler::with_wording(Operation::Minus, config.error_wording);

    Ok(handler.handle_event(&event.payload))
}

#[cfg(test)]
mod tests {
    use super::*;
    use lambda_runtime::Context;
    use serde_json::json;
    use serial_test::serial;

    unsafe fn set_env(key: &str, value: &str) {
        unsafe { std::env::set_var(key, value) };
    }

    unsafe fn remove_env(key: &str) {
        unsafe { std::env::remove_var(key) };
    }

    fn lambda_event(payload: Value) -> LambdaEvent<Value> {
        LambdaEvent::new(payload, Context::default())
    }

    #[tokio::test]
    #[serial(calculator_env)]
    async fn test_handler_returns_difference() {
        init_logging();
        unsafe { remove_env("CALCULATOR_ERROR_WORDING") };

        let event = lambda_event(json!({
            "routeKey": "GET /minus",
            "queryStringParameters": {"val1": "10", "val2": "4"}
        }));

        let response = handler(event).await.unwrap();

        assert_eq!(response, GatewayResponse::ok("6"));
    }

    #[tokio::test]
    #[serial(calculator_env)]
    async fn test_handler_missing_key() {
        init_logging();
        unsafe { remove_env("CALCULATOR_ERROR_WORDING") };

        let event = lambda_event(json!({
            "queryStringParameters": {"val1": "10"}
        }));

        let response = handler(event).await.unwrap();

        assert_eq!(
            response,
            GatewayResponse::bad_request("can not convert to integer")
        );
    }

    #[tokio::test]
    #[serial(calculator_env)]
    async fn test_handler_reflects_wording_env() {
        init_logging();
        unsafe { set_env("CALCULATOR_ERROR_WORDING", "corrected") };

        let event = lambda_event(json!({
            "queryStringParameters": {"val1": "10", "val2": "four"}
        }));

        let response = handler(event).await.unwrap();

        assert_eq!(
            response,
            GatewayResponse::bad_request("The value must be a valid integer")
        );

        unsafe { remove_env("CALCULATOR_ERROR_WORDING") };
    }
}
