// 計算APIの設定
//
// 環境変数からハンドラーの動作設定を読み込むインフラストラクチャ層コンポーネント。
// 未設定・不正値の場合はデフォルト値を使用し、エラーにはしない。

use tracing::{info, warn};

use crate::domain::ErrorWording;

/// 環境変数名: 400レスポンスの文言セット（legacy / corrected）
pub const ENV_ERROR_WORDING: &str = "CALCULATOR_ERROR_WORDING";

/// 計算APIの設定
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CalculatorConfig {
    /// 400レスポンスの文言セット
    pub error_wording: ErrorWording,
}

impl CalculatorConfig {
    /// 環境変数から設定を読み込み
    ///
    /// # 環境変数
    /// - CALCULATOR_ERROR_WORDING: `legacy`（デフォルト）または`corrected`
    pub fn from_env() -> Self {
        let error_wording = match std::env::var(ENV_ERROR_WORDING) {
            Ok(value) => match ErrorWording::parse(&value) {
                Some(wording) => wording,
                None => {
                    warn!(
                        key = ENV_ERROR_WORDING,
                        value = %value,
                        default = ErrorWording::default().as_str(),
                        "Environment variable parse error, using default"
                    );
                    ErrorWording::default()
                }
            },
            Err(_) => ErrorWording::default(),
        };

        info!(error_wording = error_wording.as_str(), "CalculatorConfig loaded");

        Self { error_wording }
    }

    /// テスト用に明示的な値で作成
    pub fn new(error_wording: ErrorWording) -> Self {
        Self { error_wording }
    }
}
