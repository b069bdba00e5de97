// エラーレスポンス文言
//
// 400レスポンスのボディ文言を保持するドメイン層コンポーネント。
// 既存デプロイメントとバイト単位で互換な旧文言（スペルミスを含む）と、
// 修正済みの文言を切り替えられる。

/// 旧文言: 整数として解釈できない値
pub const LEGACY_INVALID_INTEGER: &str = "The value must be a valide integer";

/// 旧文言: 変換できない（パラメータ欠落など）
pub const LEGACY_CONVERSION_FAILED: &str = "can not convert to integer";

/// 修正文言: 整数として解釈できない値
pub const CORRECTED_INVALID_INTEGER: &str = "The value must be a valid integer";

/// 修正文言: 変換できない（パラメータ欠落など）
pub const CORRECTED_CONVERSION_FAILED: &str = "cannot convert to integer";

/// 400レスポンスの文言セット
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorWording {
    /// 既存デプロイメントと同一の文言
    #[default]
    Legacy,
    /// スペルを修正した文言
    Corrected,
}

impl ErrorWording {
    /// 設定値文字列から文言セットを解決
    ///
    /// 大文字小文字は区別しない。未知の値は`None`。
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "legacy" => Some(Self::Legacy),
            "corrected" => Some(Self::Corrected),
            _ => None,
        }
    }

    /// 整数として解釈できない値に対するボディ
    pub fn invalid_integer(self) -> &'static str {
        match self {
            Self::Legacy => LEGACY_INVALID_INTEGER,
            Self::Corrected => CORRECTED_INVALID_INTEGER,
        }
    }

    /// パラメータ欠落などの変換失敗に対するボディ
    pub fn conversion_failed(self) -> &'static str {
        match self {
            Self::Legacy => LEGACY_CONVERSION_FAILED,
            Self::Corrected => CORRECTED_CONVERSION_FAILED,
        }
    }

    /// 設定値としての表記
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Legacy => "legacy",
            Self::Corrected => "corrected",
        }
    }
}
