/// 加算Lambdaエントリポイント
///
/// HTTP API の `GET /plus` ルートから呼び出され、
/// クエリパラメータval1とval2の和を返却する。
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

    info!("加算Lambda関数を初期化");

    let func = service_fn(handler);
    lambda_runtime::run(func).await?;
    Ok(())
}

/// Lambda関数のメインハンドラー
///
/// 入力エラーは400レスポンスとして返却し、Lambdaのエラーにはしない。
async fn handler(event: LambdaEvent<Value>) -> Result<GatewayResponse, Error> {
    info!(request_id = %event.context.request_id, "リクエスト受信");

    let config = CalculatorConfig::from_env();
    let handler = ArithmeticHandler::with_wording(Operation::Plus, config.error_wording);

    Ok(handler.handle_event(&event.payload))
}
