/// クエリパラメータのスキーマ検証
///
/// スキーマ:
/// - param1: 任意、整数
/// - param2: 必須、文字列
/// - その他のプロパティは許可
///
/// 検証は最初の違反で打ち切り、違反を1件だけ返す。
/// クエリ文字列の値は常に文字列なので、param1は整数として解釈できる文字列も受け付ける。
use serde::Serialize;
use serde_json::{json, Map, Value};

use super::operand::parse_integer;

/// 任意の整数パラメータ名
pub const PARAM1: &str = "param1";

/// 必須の文字列パラメータ名
pub const PARAM2: &str = "param2";

/// スキーマ違反
///
/// JSONとして `{instancePath, schemaPath, keyword, params, message}` 形式で出力される。
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaViolation {
    /// 違反箇所（例: "/param1"、ルートは空文字列）
    pub instance_path: String,
    /// 違反したスキーマ位置
    pub schema_path: String,
    /// 違反したキーワード（"type" / "required"）
    pub keyword: String,
    /// キーワード固有の情報
    pub params: Value,
    /// 人間向けメッセージ
    pub message: String,
}

impl SchemaViolation {
    /// 型違反を作成
    fn type_mismatch(property: Option<&str>, expected: &str) -> Self {
        let (instance_path, schema_path) = match property {
            Some(name) => (format!("/{name}"), format!("#/properties/{name}/type")),
            None => (String::new(), "#/type".to_string()),
        };
        Self {
            instance_path,
            schema_path,
            keyword: "type".to_string(),
            params: json!({ "type": expected }),
            message: format!("must be {expected}"),
        }
    }

    /// 必須プロパティ欠落を作成
    fn missing_property(name: &str) -> Self {
        Self {
            instance_path: String::new(),
            schema_path: "#/required".to_string(),
            keyword: "required".to_string(),
            params: json!({ "missingProperty": name }),
            message: format!("must have required property '{name}'"),
        }
    }
}

/// クエリパラメータのバリデータ
pub struct QueryValidator;

impl QueryValidator {
    /// クエリパラメータを検証
    ///
    /// # 引数
    /// * `query` - イベントの`queryStringParameters`（欠落時は`None`）
    ///
    /// # 戻り値
    /// * `Ok(())` - スキーマに適合
    /// * `Err(SchemaViolation)` - 最初に見つかった違反
    pub fn validate(query: Option<&Value>) -> Result<(), SchemaViolation> {
        let object = query
            .and_then(Value::as_object)
            .ok_or_else(|| SchemaViolation::type_mismatch(None, "object"))?;

        if !object.contains_key(PARAM2) {
            return Err(SchemaViolation::missing_property(PARAM2));
        }

        if let Some(param1) = object.get(PARAM1) {
            if !Self::is_integer(param1) {
                return Err(SchemaViolation::type_mismatch(Some(PARAM1), "integer"));
            }
        }

        if !Self::has_string(object, PARAM2) {
            return Err(SchemaViolation::type_mismatch(Some(PARAM2), "string"));
        }

        Ok(())
    }

    fn is_integer(value: &Value) -> bool {
        match value {
            Value::Number(n) => n.is_i64() || n.is_u64(),
            Value::String(s) => parse_integer(PARAM1, s).is_ok(),
            _ => false,
        }
    }

    fn has_string(object: &Map<String, Value>, name: &str) -> bool {
        object.get(name).is_some_and(Value::is_string)
    }
}
