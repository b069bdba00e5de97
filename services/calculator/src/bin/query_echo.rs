/// クエリ検証エコーLambdaエントリポイント
///
/// クエリパラメータをスキーマ検証し、適合すればそのまま返却する。
/// HTTP APIのルートには割り当てていない。
use calculator::application::QueryEchoHandler;
use calculator::domain::GatewayResponse;
use calculator::infrastructure::init_logging;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Error> {
    // 構造化ログを初期化
    init_logging();

    info!("クエリ検証Lambda関数を初期化");

    let func = service_fn(handler);
    lambda_runtime::run(func).await?;
    Ok(())
}

/// Lambda関数のメインハンドラー
async fn handler(event: LambdaEvent<Value>) -> Result<GatewayResponse, Error> {
    info!(request_id = %event.context.request_id, "リクエスト受信");

    QueryEchoHandler::new()
        .handle(&event.payload)
        .map_err(|err| {
            error!(error = %err, "レスポンスのシリアライズに失敗");
            Error::from(err)
        })
}
