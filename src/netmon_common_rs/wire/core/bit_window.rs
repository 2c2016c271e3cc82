/// ビットウィンドウ抽出ユーティリティ
/// 1バイト/2バイトのウィンドウからビット範囲を取り出す共通実装

use super::exceptions::{RangeError, RangeResult};

/// バイトモードのウィンドウ幅（ビット）
pub const BYTE_WINDOW_BITS: usize = 8;

/// ushortモードのウィンドウ幅（ビット）
pub const USHORT_WINDOW_BITS: usize = 16;

/// ウィンドウ内のビット範囲を検証し、右詰めに必要なシフト量を返す
///
/// Args:
///     window_bits: ウィンドウ全体の幅（8または16）
///     bit_position: MSB基準の開始ビット位置
///     bit_length: 抽出するビット長
///
/// Returns:
///     シフト量 = window_bits - bit_position - bit_length
fn window_shift(window_bits: usize, bit_position: usize, bit_length: usize) -> RangeResult<usize> {
    if bit_length == 0 {
        return Err(RangeError::empty_window(bit_position, window_bits));
    }
    match bit_position.checked_add(bit_length) {
        Some(end) if end <= window_bits => Ok(window_bits - end),
        _ => Err(RangeError::window_exceeded(
            bit_position,
            bit_length,
            window_bits,
        )),
    }
}

/// ウィンドウ値からビット範囲を抽出する
///
/// 符号拡張を避けるため、シフトより先に上位 bit_position ビットを
/// マスクで落とす。結果は右詰めで、bit_length ビットの範囲外はすべて0。
fn extract_window(
    value: u16,
    window_bits: usize,
    bit_position: usize,
    bit_length: usize,
) -> RangeResult<u16> {
    let shift = window_shift(window_bits, bit_position, bit_length)?;
    let mask = ((1u32 << (window_bits - bit_position)) - 1) as u16;
    Ok((value & mask) >> shift)
}

/// 1バイトからビット範囲を抽出する
///
/// Args:
///     value: 抽出元のバイト値
///     bit_position: MSB基準の開始ビット位置
///     bit_length: 抽出するビット長
///
/// Returns:
///     右詰めされた抽出値
pub fn read_bits_from_byte(value: u8, bit_position: usize, bit_length: usize) -> RangeResult<u8> {
    extract_window(value as u16, BYTE_WINDOW_BITS, bit_position, bit_length).map(|v| v as u8)
}

/// ホストオーダーの16ビット値からビット範囲を抽出する
///
/// ネットワークオーダーからの変換は呼び出し側（バッファ/ストリームの
/// 各アクセサ）が行い、ここには変換済みの値が渡される。
pub fn read_bits_from_ushort(
    value: u16,
    bit_position: usize,
    bit_length: usize,
) -> RangeResult<u16> {
    extract_window(value, USHORT_WINDOW_BITS, bit_position, bit_length)
}
