/// ローカル実行用CLI
///
/// API Gateway v2形式のイベントJSONを読み込み、ハンドラーを実行して
/// Lambdaプロキシ統合のレスポンスJSONを標準出力へ書き出す。
///
/// # ローカル実行
/// ```bash
/// # ルートキーからハンドラーを自動選択
/// cargo run --bin invoke -- --event event.json
///
/// # 標準入力から読み込み、ハンドラーを明示
/// echo '{"queryStringParameters":{"val1":"2","val2":"3"}}' | cargo run --bin invoke -- --handler plus
/// ```
///
/// # 環境変数
/// - CALCULATOR_ERROR_WORDING: 400レスポンスの文言セット（legacy / corrected）
use std::io::Read;
use std::path::PathBuf;

use calculator::application::{QueryEchoHandler, Router};
use calculator::domain::{GatewayResponse, Route};
use calculator::infrastructure::{init_logging, CalculatorConfig};
use clap::{Parser, ValueEnum};
use lambda_runtime::Error;
use serde_json::Value;
use tracing::{error, info};

/// 実行するハンドラー
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum HandlerKind {
    /// 加算（GET /plus）
    Plus,
    /// 減算（GET /minus）
    Minus,
    /// デフォルトルート（$default）
    DefaultRoute,
    /// クエリ検証エコー
    QueryEcho,
}

/// コマンドライン引数
#[derive(Parser, Debug)]
#[command(name = "invoke")]
#[command(about = "イベントJSONを指定してハンドラーをローカル実行")]
struct CliArgs {
    /// イベントJSONファイル（省略時は標準入力）
    #[arg(long, short = 'e')]
    event: Option<PathBuf>,

    /// 実行するハンドラー（省略時はイベントのルートから解決）
    #[arg(long, short = 'H', value_enum)]
    handler: Option<HandlerKind>,
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_logging();

    let args = CliArgs::parse();
    let event = read_event(args.event.as_ref())?;

    let config = CalculatorConfig::from_env();
    let response = invoke(args.handler, &event, &config)?;

    info!(status_code = response.status_code, "ハンドラー実行完了");
    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}

/// イベントJSONをファイルまたは標準入力から読み込む
fn read_event(path: Option<&PathBuf>) -> Result<Value, Error> {
    let text = match path {
        Some(path) => std::fs::read_to_string(path).map_err(|e| {
            error!(error = %e, path = %path.display(), "イベントファイルの読み込みに失敗");
            Error::from(format!("Failed to read event file {}: {}", path.display(), e))
        })?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    serde_json::from_str(&text).map_err(|e| {
        error!(error = %e, "イベントJSONのパースに失敗");
        Error::from(format!("Invalid event JSON: {}", e))
    })
}

/// 指定（または解決）したハンドラーでイベントを処理
fn invoke(
    kind: Option<HandlerKind>,
    event: &Value,
    config: &CalculatorConfig,
) -> Result<GatewayResponse, serde_json::Error> {
    let router = Router::new(config.error_wording);

    match kind {
        Some(HandlerKind::Plus) => router.dispatch(Route::Plus, event),
        Some(HandlerKind::Minus) => router.dispatch(Route::Minus, event),
        Some(HandlerKind::DefaultRoute) => router.dispatch(Route::Default, event),
        Some(HandlerKind::QueryEcho) => QueryEchoHandler::new().handle(event),
        None => router.route(event),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calculator::domain::ErrorWording;
    use serde_json::json;

    #[test]
    fn test_cli_parses_handler() {
        let args = CliArgs::parse_from(["invoke", "--handler", "default-route", "-e", "event.json"]);

        assert_eq!(args.handler, Some(HandlerKind::DefaultRoute));
        assert_eq!(args.event, Some(PathBuf::from("event.json")));
    }

    #[test]
    fn test_cli_defaults() {
        let args = CliArgs::parse_from(["invoke"]);

        assert!(args.handler.is_none());
        assert!(args.event.is_none());
    }

    #[test]
    fn test_invoke_resolves_route_from_event() {
        let event = json!({
            "routeKey": "GET /minus",
            "queryStringParameters": {"val1": "10", "val2": "4"}
        });

        let response = invoke(None, &event, &CalculatorConfig::default()).unwrap();

        assert_eq!(response, GatewayResponse::ok("6"));
    }

    #[test]
    fn test_invoke_with_explicit_handler() {
        let event = json!({"queryStringParameters": {"val1": "2", "val2": "3"}});

        let response = invoke(Some(HandlerKind::Plus), &event, &CalculatorConfig::default()).unwrap();

        assert_eq!(response, GatewayResponse::ok("5"));
    }

    #[test]
    fn test_invoke_query_echo() {
        let event = json!({"queryStringParameters": {"param2": "x"}});

        let response =
            invoke(Some(HandlerKind::QueryEcho), &event, &CalculatorConfig::default()).unwrap();

        assert_eq!(response.status_code, 200);
    }

    #[test]
    fn test_invoke_uses_configured_wording() {
        let event = json!({"queryStringParameters": {"val1": "2"}});
        let config = CalculatorConfig::new(ErrorWording::Corrected);

        let response = invoke(Some(HandlerKind::Plus), &event, &config).unwrap();

        assert_eq!(response, GatewayResponse::bad_request("cannot convert to integer"));
    }

    #[test]
    fn test_read_event_from_missing_file() {
        let path = PathBuf::from("/nonexistent/event.json");

        assert!(read_event(Some(&path)).is_err());
    }
}
