//! ワイヤアクセスコア機能
//! ビットウィンドウ抽出とエラー型

pub mod bit_window;
pub mod exceptions;

// 便利な再エクスポート
pub use bit_window::{read_bits_from_byte, read_bits_from_ushort, BYTE_WINDOW_BITS, USHORT_WINDOW_BITS};
pub use exceptions::{RangeError, RangeResult, WireAccessError, WireResult};
