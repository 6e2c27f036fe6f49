// 出力報告
//
// 結果行・診断・エラーの出力先をトレイトで差し替え可能にする

pub mod implementations;
pub mod traits;

// 公開API
pub use implementations::{ConsoleReporter, MemoryReporter, NoOpReporter};
pub use traits::*;
