// 数値への強制変換

use crate::core::Operand;

/// テキストを浮動小数点数として解釈する
///
/// 前後の空白は無視する。`inf`・`nan`・指数表記（`1e3`）も数値として扱う。
/// 解釈できない場合は `None`（エラーではない）。
pub fn parse_number(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok()
}

/// コマンドライン引数1つをオペランドに変換
pub fn coerce(text: &str) -> Operand {
    Operand::new(text, parse_number(text))
}
