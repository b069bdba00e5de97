use num_bigint::BigInt;

/// 演算種別
///
/// ルートごとに1つの演算が割り当てられる（/plus: 加算、/minus: 減算）。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// 加算: val1 + val2
    Plus,
    /// 減算: val1 - val2
    Minus,
}

impl Operation {
    /// 2つのオペランドに演算を適用
    ///
    /// 任意精度で計算するため、オペランドの桁数によらずオーバーフローしない。
    pub fn apply(self, val1: &BigInt, val2: &BigInt) -> BigInt {
        match self {
            Self::Plus => val1 + val2,
            Self::Minus => val1 - val2,
        }
    }

    /// 演算名（Lambda関数名・ルートパスに対応）
    pub fn name(self) -> &'static str {
        match self {
            Self::Plus => "plus",
            Self::Minus => "minus",
        }
    }
}
