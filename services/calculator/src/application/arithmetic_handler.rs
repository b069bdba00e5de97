/// 四則演算ハンドラー
///
/// クエリパラメータval1, val2を整数として読み取り、演算結果を返す。
/// 入力の誤りはすべてハンドラー内で400レスポンスに変換し、呼び出し元には伝播させない。
use num_bigint::BigInt;
use serde_json::Value;
use tracing::{info, warn};

use crate::domain::{ErrorWording, GatewayRequest, GatewayResponse, Operands, Operation, ValidationError};

/// 1つの演算を担当するハンドラー
///
/// 状態を持たないため、同一リクエストに対して常に同一のレスポンスを返す。
#[derive(Debug, Clone, Copy)]
pub struct ArithmeticHandler {
    /// 適用する演算
    operation: Operation,
    /// 400レスポンスの文言セット
    wording: ErrorWording,
}

impl ArithmeticHandler {
    /// 既定の文言セットでハンドラーを作成
    pub fn new(operation: Operation) -> Self {
        Self::with_wording(operation, ErrorWording::default())
    }

    /// 文言セットを指定してハンドラーを作成
    pub fn with_wording(operation: Operation, wording: ErrorWording) -> Self {
        Self { operation, wording }
    }

    /// 演算結果を計算
    pub fn calculate(&self, request: &GatewayRequest) -> Result<BigInt, ValidationError> {
        let operands = Operands::from_query(request.query_string_parameters.as_ref())?;
        Ok(self.operation.apply(&operands.val1, &operands.val2))
    }

    /// リクエストを処理してレスポンスを生成
    ///
    /// # 戻り値
    /// * 成功時: 200、ボディは演算結果の10進表記
    /// * 整数変換エラー: 400、「整数でない」文言
    /// * パラメータ欠落など: 400、「変換できない」文言
    pub fn handle(&self, request: &GatewayRequest) -> GatewayResponse {
        let response = match self.calculate(request) {
            Ok(result) => GatewayResponse::ok(result.to_string()),
            Err(err) => {
                warn!(
                    operation = self.operation.name(),
                    error = %err,
                    "バリデーションエラー"
                );
                GatewayResponse::bad_request(self.error_body(&err))
            }
        };

        info!(
            operation = self.operation.name(),
            status_code = response.status_code,
            body = %response.body,
            "レスポンス送信"
        );

        response
    }

    /// 生のLambdaイベントを処理
    ///
    /// クエリパラメータを型に変換できないイベントは「変換できない」400として扱う。
    pub fn handle_event(&self, event: &Value) -> GatewayResponse {
        match GatewayRequest::from_event(event) {
            Ok(request) => {
                info!(
                    operation = self.operation.name(),
                    query = ?request.query_string_parameters,
                    "計算リクエスト受信"
                );
                self.handle(&request)
            }
            Err(err) => {
                warn!(
                    operation = self.operation.name(),
                    error = %err,
                    "リクエストの変換に失敗"
                );
                GatewayResponse::bad_request(self.wording.conversion_failed())
            }
        }
    }

    fn error_body(&self, err: &ValidationError) -> &'static str {
        match err {
            ValidationError::InvalidInteger(_) => self.wording.invalid_integer(),
            ValidationError::ConversionFailed(_) => self.wording.conversion_failed(),
        }
    }
}
