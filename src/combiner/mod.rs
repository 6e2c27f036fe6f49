// 結合ロジック
// 両方が数値なら和、そうでなければ引数順の連結（区切りなし）

pub mod coercion;

pub use coercion::{coerce, parse_number};

use crate::core::{Combined, Operand, Value};

/// 2つの値を結合する
///
/// 両方が数値の場合のみ算術和。片方だけが数値の場合も連結になる
/// （数値側はテキスト表現で連結され、混合型の算術は行わない）。
/// 失敗することはない。
pub fn combine(a: &Value, b: &Value) -> Combined {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => Combined::Sum(x + y),
        _ => Combined::Concatenation(format!("{}{}", a.as_text(), b.as_text())),
    }
}

/// 強制変換済みのオペランドを結合する
///
/// 連結時は強制変換前の元テキストを使う（`"42.0"` と `"x"` は `"42.0x"`）。
pub fn combine_operands(a: &Operand, b: &Operand) -> Combined {
    match (a.number(), b.number()) {
        (Some(x), Some(y)) => Combined::Sum(x + y),
        _ => Combined::Concatenation(format!("{}{}", a.raw(), b.raw())),
    }
}

/// 2つのテキスト引数を強制変換して結合する
pub fn combine_args(a: &str, b: &str) -> Combined {
    combine_operands(&coerce(a), &coerce(b))
}
