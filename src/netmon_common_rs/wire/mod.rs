//! ワイヤフォーマットアクセス層
//! バッファ/ストリームからのビット精度フィールド読み取り

pub mod buffer_reader;
pub mod byte_stream;
pub mod core;
pub mod stream_reader;

// 便利な再エクスポート
pub use byte_stream::ByteStream;
pub use self::core::bit_window::{read_bits_from_byte, read_bits_from_ushort};
pub use self::core::exceptions::{RangeError, RangeResult, WireAccessError, WireResult};
