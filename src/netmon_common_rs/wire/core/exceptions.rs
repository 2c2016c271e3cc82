/// ワイヤフォーマット読み取り用エラー型定義
/// 呼び出し側の定義ミス（範囲エラー）とストリーム由来のI/Oエラーを区別する

use std::error::Error;
use std::fmt;
use std::io;

/// ビット範囲・バッファ範囲エラー
/// 受信データの不良ではなく、フィールド定義の誤りを示す
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
    /// ビット範囲がウィンドウ幅を超過
    WindowExceeded {
        bit_position: usize,
        bit_length: usize,
        window_bits: usize,
    },
    /// ビット長が0
    EmptyWindow {
        bit_position: usize,
        window_bits: usize,
    },
    /// バッファ終端を越える読み取り
    BufferOverrun {
        buffer_offset: usize,
        required: usize,
        available: usize,
    },
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeError::WindowExceeded {
                bit_position,
                bit_length,
                window_bits,
            } => {
                write!(
                    f,
                    "ビット範囲が{}ビットウィンドウを超過: 位置 {} + 長さ {}",
                    window_bits, bit_position, bit_length
                )
            }
            RangeError::EmptyWindow {
                bit_position,
                window_bits,
            } => {
                write!(
                    f,
                    "ビット長が0です: 位置 {} ({}ビットウィンドウ)",
                    bit_position, window_bits
                )
            }
            RangeError::BufferOverrun {
                buffer_offset,
                required,
                available,
            } => {
                write!(
                    f,
                    "バッファ範囲外の読み取り: オフセット {} から {}バイト必要, 残り {}バイト",
                    buffer_offset, required, available
                )
            }
        }
    }
}

impl Error for RangeError {}

/// エラーヘルパー関数
impl RangeError {
    /// ウィンドウ超過エラーを作成
    pub fn window_exceeded(bit_position: usize, bit_length: usize, window_bits: usize) -> Self {
        RangeError::WindowExceeded {
            bit_position,
            bit_length,
            window_bits,
        }
    }

    /// ビット長0エラーを作成
    pub fn empty_window(bit_position: usize, window_bits: usize) -> Self {
        RangeError::EmptyWindow {
            bit_position,
            window_bits,
        }
    }

    /// バッファ範囲外エラーを作成
    pub fn buffer_overrun(buffer_offset: usize, required: usize, available: usize) -> Self {
        RangeError::BufferOverrun {
            buffer_offset,
            required,
            available,
        }
    }
}

/// ワイヤアクセスの統合エラー型
/// ストリーム側の操作は範囲エラーに加えてI/Oエラーを返しうる
#[derive(Debug)]
pub enum WireAccessError {
    /// ビット範囲・バッファ範囲エラー
    Range(RangeError),
    /// ストリーム自身のI/Oエラー（データ終端を含む）
    /// 上流で切断パケットとして扱えるよう元のエラーをそのまま保持する
    Io(io::Error),
}

impl fmt::Display for WireAccessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WireAccessError::Range(err) => write!(f, "範囲エラー: {}", err),
            WireAccessError::Io(err) => write!(f, "I/Oエラー: {}", err),
        }
    }
}

impl Error for WireAccessError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            WireAccessError::Range(err) => Some(err),
            WireAccessError::Io(err) => Some(err),
        }
    }
}

// From実装で自動変換をサポート
impl From<RangeError> for WireAccessError {
    fn from(err: RangeError) -> Self {
        WireAccessError::Range(err)
    }
}

impl From<io::Error> for WireAccessError {
    fn from(err: io::Error) -> Self {
        WireAccessError::Io(err)
    }
}

impl WireAccessError {
    /// ストリームのデータ終端によるエラーかどうか
    pub fn is_end_of_data(&self) -> bool {
        matches!(self, WireAccessError::Io(err) if err.kind() == io::ErrorKind::UnexpectedEof)
    }
}

/// バッファ側のResult型エイリアス
pub type RangeResult<T> = Result<T, RangeError>;

/// ストリーム側のResult型エイリアス
pub type WireResult<T> = Result<T, WireAccessError>;
