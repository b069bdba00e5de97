/// API Gateway HTTP API (payload v2.0) のリクエスト/レスポンス型
///
/// Lambdaプロキシ統合で受け取るイベントのうち、ハンドラーが参照する
/// フィールドだけを型として定義する。method, path, headersなどの
/// その他のフィールドは無視する。
use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// ハンドラーが参照するリクエスト
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayRequest {
    /// クエリ文字列パラメータ（クエリ文字列が無い場合は欠落またはnull）
    ///
    /// 文字列以外の値を持つキーは読み飛ばす。
    #[serde(default, deserialize_with = "string_entries")]
    pub query_string_parameters: Option<HashMap<String, String>>,
}

impl GatewayRequest {
    /// クエリパラメータを指定して作成
    pub fn with_query<I, K, V>(params: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            query_string_parameters: Some(
                params
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    /// 生のLambdaイベントからリクエストを構築
    ///
    /// # 戻り値
    /// * `Ok(GatewayRequest)` - 変換成功時
    /// * `Err(serde_json::Error)` - クエリパラメータがオブジェクトでない場合など
    pub fn from_event(event: &Value) -> Result<Self, serde_json::Error> {
        Self::deserialize(event)
    }

    /// クエリパラメータを1件取得
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query_string_parameters
            .as_ref()
            .and_then(|params| params.get(name))
            .map(String::as_str)
    }
}

/// オブジェクトのうち文字列値のエントリだけを取り出す
fn string_entries<'de, D>(deserializer: D) -> Result<Option<HashMap<String, String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = Option::<HashMap<String, Value>>::deserialize(deserializer)?;
    Ok(entries.map(|entries| {
        entries
            .into_iter()
            .filter_map(|(key, value)| match value {
                Value::String(text) => Some((key, text)),
                _ => None,
            })
            .collect()
    }))
}

/// Lambdaプロキシ統合のレスポンス
///
/// `{"statusCode": 200, "body": "..."}` 形式でシリアライズされる。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayResponse {
    /// HTTPステータスコード
    pub status_code: u16,
    /// レスポンスボディ
    pub body: String,
}

impl GatewayResponse {
    /// 200 OKレスポンスを作成
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status_code: 200,
            body: body.into(),
        }
    }

    /// 400 Bad Requestレスポンスを作成
    pub fn bad_request(body: impl Into<String>) -> Self {
        Self {
            status_code: 400,
            body: body.into(),
        }
    }
}
