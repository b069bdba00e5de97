// アプリケーション層モジュール
pub mod arithmetic_handler;
pub mod default_route_handler;
pub mod query_echo_handler;
pub mod router;

// 再エクスポート
pub use arithmetic_handler::ArithmeticHandler;
pub use default_route_handler::{DefaultRouteHandler, DEFAULT_ROUTE_GREETING};
pub use query_echo_handler::QueryEchoHandler;
pub use router::Router;
