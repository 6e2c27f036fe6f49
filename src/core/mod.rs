// コアレイヤー - 型とエラー定義
// 他のレイヤーから参照される基本的な型を提供

pub mod error;
pub mod types;

// 公開API
pub use error::{CombineError, CombineResult};
pub use types::{format_float, Combined, Operand, Value};
