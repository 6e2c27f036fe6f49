// コアデータ型
// 入力値・強制変換済みオペランド・結合結果

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// 結合対象の値（数値またはテキスト）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Number(f64),
    Text(String),
}

impl Value {
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            Value::Text(_) => None,
        }
    }

    /// 連結に使うテキスト表現
    ///
    /// 数値は最短の往復可能表現（`42.0` は `42`）
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            Value::Number(n) => Cow::Owned(n.to_string()),
            Value::Text(s) => Cow::Borrowed(s),
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_text())
    }
}

/// コマンドライン引数1つ分のオペランド
///
/// 元のテキストを保持したまま、数値への強制変換結果を持つ。
/// 変換はオペランドごとに独立して行われる。
#[derive(Debug, Clone, PartialEq)]
pub struct Operand {
    raw: String,
    number: Option<f64>,
}

impl Operand {
    pub fn new(raw: impl Into<String>, number: Option<f64>) -> Self {
        Self {
            raw: raw.into(),
            number,
        }
    }

    /// 元のテキスト
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// 強制変換に成功した場合の数値
    pub fn number(&self) -> Option<f64> {
        self.number
    }

    pub fn is_numeric(&self) -> bool {
        self.number.is_some()
    }

    /// 強制変換後の値
    pub fn value(&self) -> Value {
        match self.number {
            Some(n) => Value::Number(n),
            None => Value::Text(self.raw.clone()),
        }
    }
}

/// 結合結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Combined {
    /// 両方が数値の場合の和
    Sum(f64),
    /// どちらかが数値でない場合の連結
    Concatenation(String),
}

impl Combined {
    pub fn kind(&self) -> &'static str {
        match self {
            Combined::Sum(_) => "sum",
            Combined::Concatenation(_) => "concatenation",
        }
    }

    pub fn as_sum(&self) -> Option<f64> {
        match self {
            Combined::Sum(n) => Some(*n),
            Combined::Concatenation(_) => None,
        }
    }

    pub fn as_concatenation(&self) -> Option<&str> {
        match self {
            Combined::Sum(_) => None,
            Combined::Concatenation(s) => Some(s),
        }
    }
}

impl fmt::Display for Combined {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Combined::Sum(n) => f.write_str(&format_float(*n)),
            Combined::Concatenation(s) => f.write_str(s),
        }
    }
}

/// 浮動小数点の和を表示用に整形
///
/// 整数値でも小数点以下1桁を付ける（`8` ではなく `8.0`）
pub fn format_float(n: f64) -> String {
    if n.is_nan() {
        "nan".to_string()
    } else if n.is_infinite() {
        let sign = if n > 0.0 { "" } else { "-" };
        format!("{sign}inf")
    } else if n.fract() == 0.0 {
        format!("{n:.1}")
    } else {
        n.to_string()
    }
}
