/// 演算対象パラメータ（val1, val2）の読み取りと整数変換
///
/// クエリパラメータは先にval1を読み取り・変換し、続いてval2を処理する。
/// 最初に発生したエラーがそのまま結果となる。
use std::collections::HashMap;

use num_bigint::BigInt;
use thiserror::Error;

/// 1つ目のオペランドのクエリパラメータ名
pub const VAL1: &str = "val1";

/// 2つ目のオペランドのクエリパラメータ名
pub const VAL2: &str = "val2";

/// Unicode 10進数字（一般カテゴリNd）の各ブロックにおける「0」のコードポイント
///
/// 各ブロックは「0」から連続する10文字で構成される。
const DECIMAL_DIGIT_ZEROS: &[u32] = &[
    0x0030, 0x0660, 0x06F0, 0x07C0, 0x0966, 0x09E6, 0x0A66, 0x0AE6, 0x0B66, 0x0BE6, 0x0C66,
    0x0CE6, 0x0D66, 0x0DE6, 0x0E50, 0x0ED0, 0x0F20, 0x1040, 0x1090, 0x17E0, 0x1810, 0x1946,
    0x19D0, 0x1A80, 0x1A90, 0x1B50, 0x1BB0, 0x1C40, 0x1C50, 0xA620, 0xA8D0, 0xA900, 0xA9D0,
    0xA9F0, 0xAA50, 0xABF0, 0xFF10, 0x104A0, 0x10D30, 0x11066, 0x110F0, 0x11136, 0x111D0,
    0x112F0, 0x11450, 0x114D0, 0x11650, 0x116C0, 0x11730, 0x118E0, 0x11950, 0x11C50,
    0x11D50, 0x11DA0, 0x16A60, 0x16AC0, 0x16B50, 0x1D7CE, 0x1D7D8, 0x1D7E2, 0x1D7EC,
    0x1D7F6, 0x1E140, 0x1E2F0, 0x1E950, 0x1FBF0,
];

/// オペランドのバリデーションエラー
///
/// いずれもクライアント入力の誤りであり、ハンドラー内で400レスポンスに変換される。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// 値は存在するが整数として解釈できない
    #[error("value must be a valid integer: {0}")]
    InvalidInteger(String),
    /// クエリ文字列やパラメータの欠落など、その他の変換失敗
    #[error("cannot convert to integer: {0}")]
    ConversionFailed(String),
}

/// 検証済みのオペランド組
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operands {
    pub val1: BigInt,
    pub val2: BigInt,
}

impl Operands {
    /// クエリパラメータからオペランドを読み取る
    ///
    /// # 戻り値
    /// * `Ok(Operands)` - 両方の値が整数として解釈できた場合
    /// * `Err(ValidationError::ConversionFailed)` - クエリ文字列またはキーが欠落
    /// * `Err(ValidationError::InvalidInteger)` - 値が整数として解釈できない
    pub fn from_query(query: Option<&HashMap<String, String>>) -> Result<Self, ValidationError> {
        let query = query
            .ok_or_else(|| ValidationError::ConversionFailed("missing query string".to_string()))?;

        let val1 = read_param(query, VAL1)?;
        let val2 = read_param(query, VAL2)?;

        Ok(Self { val1, val2 })
    }
}

fn read_param(query: &HashMap<String, String>, name: &str) -> Result<BigInt, ValidationError> {
    let raw = query
        .get(name)
        .ok_or_else(|| ValidationError::ConversionFailed(format!("missing parameter: {name}")))?;
    parse_integer(name, raw)
}

/// 10進数字1文字の値（Unicode 10進数字を含む）
fn decimal_digit_value(c: char) -> Option<u32> {
    let code = u32::from(c);
    DECIMAL_DIGIT_ZEROS
        .iter()
        .find_map(|&zero| code.checked_sub(zero).filter(|offset| *offset < 10))
}

/// 10進整数文字列を任意精度整数に変換
///
/// 受け付ける形式:
/// - 前後の空白は無視
/// - 先頭の符号（`+` / `-`）
/// - 数字間の単一アンダースコア区切り（例: `1_000`）
/// - ASCII以外のUnicode 10進数字（例: `٣`、全角`３`）
///
/// 桁数に上限はない。
pub fn parse_integer(name: &str, raw: &str) -> Result<BigInt, ValidationError> {
    let invalid = || ValidationError::InvalidInteger(name.to_string());

    let trimmed = raw.trim();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'+') => (false, &trimmed[1..]),
        Some(b'-') => (true, &trimmed[1..]),
        _ => (false, trimmed),
    };

    // アンダースコアは数字の間にのみ1つずつ置ける
    if digits.is_empty()
        || digits.starts_with('_')
        || digits.ends_with('_')
        || digits.contains("__")
    {
        return Err(invalid());
    }

    let mut normalized = String::with_capacity(digits.len() + 1);
    if negative {
        normalized.push('-');
    }
    for c in digits.chars().filter(|c| *c != '_') {
        let value = decimal_digit_value(c).ok_or_else(invalid)?;
        normalized.extend(char::from_digit(value, 10));
    }

    normalized.parse::<BigInt>().map_err(|_| invalid())
}
