/// ローカル実行用ルーター
///
/// デプロイ環境ではAPI Gatewayがルートキーに応じてLambda関数を選択する。
/// ローカル実行時は同じ対応表（`Route`）に従ってハンドラーを選択する。
use serde_json::Value;
use tracing::debug;

use crate::application::{ArithmeticHandler, DefaultRouteHandler};
use crate::domain::{ErrorWording, GatewayResponse, Operation, Route};

/// ルートごとのハンドラーを保持するルーター
#[derive(Debug, Clone, Copy)]
pub struct Router {
    plus: ArithmeticHandler,
    minus: ArithmeticHandler,
    default_route: DefaultRouteHandler,
}

impl Router {
    /// 文言セットを指定してルーターを作成
    pub fn new(wording: ErrorWording) -> Self {
        Self {
            plus: ArithmeticHandler::with_wording(Operation::Plus, wording),
            minus: ArithmeticHandler::with_wording(Operation::Minus, wording),
            default_route: DefaultRouteHandler::new(),
        }
    }

    /// イベントのルートを解決してハンドラーに委譲
    pub fn route(&self, event: &Value) -> Result<GatewayResponse, serde_json::Error> {
        let route = Route::from_event(event);
        debug!(route_key = route.route_key(), "ルート解決");
        self.dispatch(route, event)
    }

    /// 指定したルートのハンドラーでイベントを処理
    pub fn dispatch(&self, route: Route, event: &Value) -> Result<GatewayResponse, serde_json::Error> {
        match route {
            Route::Plus => Ok(self.plus.handle_event(event)),
            Route::Minus => Ok(self.minus.handle_event(event)),
            Route::Default => self.default_route.handle(event),
        }
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new(ErrorWording::default())
    }
}
