// HTTP APIのルート定義
//
// デプロイ済みのHTTP APIが持つルートキーとLambda関数の対応を、
// ローカル実行時のディスパッチ用にデータとして保持する。
// 認可（JWT）の検証自体はAPI Gateway側で行われ、ハンドラーは関与しない。

use serde_json::Value;

/// /plus ルートキー
pub const ROUTE_KEY_PLUS: &str = "GET /plus";

/// /minus ルートキー
pub const ROUTE_KEY_MINUS: &str = "GET /minus";

/// デフォルトルートキー
pub const ROUTE_KEY_DEFAULT: &str = "$default";

/// ルート
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// GET /plus → 加算ハンドラー
    Plus,
    /// GET /minus → 減算ハンドラー
    Minus,
    /// 上記以外 → デフォルトルートハンドラー
    Default,
}

impl Route {
    /// ルートキー（"GET /plus" 形式）からルートを解決
    ///
    /// 一致しないキーはすべてデフォルトルートに割り当てる。
    pub fn from_route_key(route_key: &str) -> Self {
        match route_key {
            ROUTE_KEY_PLUS => Self::Plus,
            ROUTE_KEY_MINUS => Self::Minus,
            _ => Self::Default,
        }
    }

    /// Lambdaイベントからルートを解決
    ///
    /// `routeKey`が存在し`$default`以外であればそれを使用する。
    /// それ以外は`requestContext.http.method`と`rawPath`からルートキーを組み立てる。
    pub fn from_event(event: &Value) -> Self {
        if let Some(route_key) = event.get("routeKey").and_then(Value::as_str) {
            if route_key != ROUTE_KEY_DEFAULT {
                return Self::from_route_key(route_key);
            }
        }

        let method = event
            .get("requestContext")
            .and_then(|ctx| ctx.get("http"))
            .and_then(|http| http.get("method"))
            .and_then(Value::as_str);
        let path = event.get("rawPath").and_then(Value::as_str);

        match (method, path) {
            (Some(method), Some(path)) => {
                Self::from_route_key(&format!("{} {}", method.to_ascii_uppercase(), path))
            }
            _ => Self::Default,
        }
    }

    /// ルートキー
    pub fn route_key(self) -> &'static str {
        match self {
            Self::Plus => ROUTE_KEY_PLUS,
            Self::Minus => ROUTE_KEY_MINUS,
            Self::Default => ROUTE_KEY_DEFAULT,
        }
    }

    /// JWT認可が必要なルートか
    pub fn requires_authorization(self) -> bool {
        !matches!(self, Self::Default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_route_key() {
        assert_eq!(Route::from_route_key("GET /plus"), Route::Plus);
        assert_eq!(Route::from_route_key("GET /minus"), Route::Minus);
        assert_eq!(Route::from_route_key("$default"), Route::Default);
    }

    #[test]
    fn test_unmatched_route_key_falls_back_to_default() {
        assert_eq!(Route::from_route_key("POST /plus"), Route::Default);
        assert_eq!(Route::from_route_key("GET /times"), Route::Default);
        assert_eq!(Route::from_route_key("GET /plus/"), Route::Default);
    }

    #[test]
    fn test_from_event_uses_route_key() {
        let event = json!({"routeKey": "GET /minus", "rawPath": "/plus"});
        assert_eq!(Route::from_event(&event), Route::Minus);
    }

    #[test]
    fn test_from_event_falls_back_to_method_and_path() {
        let event = json!({
            "routeKey": "$default",
            "rawPath": "/plus",
            "requestContext": {"http": {"method": "get"}}
        });
        assert_eq!(Route::from_event(&event), Route::Plus);

        let event = json!({
            "rawPath": "/minus",
            "requestContext": {"http": {"method": "GET"}}
        });
        assert_eq!(Route::from_event(&event), Route::Minus);
    }

    #[test]
    fn test_from_event_without_routing_info() {
        assert_eq!(Route::from_event(&json!({})), Route::Default);
        assert_eq!(Route::from_event(&json!({"rawPath": "/plus"})), Route::Default);
    }

    #[test]
    fn test_route_key_round_trip() {
        for route in [Route::Plus, Route::Minus, Route::Default] {
            assert_eq!(Route::from_route_key(route.route_key()), route);
        }
    }

    #[test]
    fn test_requires_authorization() {
        assert!(Route::Plus.requires_authorization());
        assert!(Route::Minus.requires_authorization());
        assert!(!Route::Default.requires_authorization());
    }
}
