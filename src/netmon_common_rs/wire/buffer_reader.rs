/// バッファアクセサ
/// バイトバッファ + 明示オフセットからフィールドを読み取るステートレスな関数群
/// 共有状態を持たないため複数の呼び出し側から同時に利用できる

use std::net::Ipv4Addr;

use super::core::bit_window::{read_bits_from_byte, read_bits_from_ushort};
use super::core::exceptions::{RangeError, RangeResult};

/// オフセットから必要バイト数が残っているか確認して切り出す
fn fetch(buffer: &[u8], buffer_offset: usize, required: usize) -> RangeResult<&[u8]> {
    let available = buffer.len().saturating_sub(buffer_offset);
    if available < required {
        return Err(RangeError::buffer_overrun(buffer_offset, required, available));
    }
    Ok(&buffer[buffer_offset..buffer_offset + required])
}

/// オフセット位置のバイトからビット範囲を読み取る
///
/// Args:
///     buffer: 読み取り元のバッファ
///     buffer_offset: 対象バイトのオフセット
///     bit_position: MSB基準の開始ビット位置
///     bit_length: 抽出するビット長
///
/// Returns:
///     右詰めされた抽出値
pub fn read_bits(
    buffer: &[u8],
    buffer_offset: usize,
    bit_position: usize,
    bit_length: usize,
) -> RangeResult<u8> {
    let byte = fetch(buffer, buffer_offset, 1)?[0];
    read_bits_from_byte(byte, bit_position, bit_length)
}

/// オフセット位置の2バイトをネットワークオーダーのushortとして読み取る
///
/// 残り2バイト未満の場合はバッファ範囲外エラー
pub fn read_net_order_ushort(buffer: &[u8], buffer_offset: usize) -> RangeResult<u16> {
    let bytes = fetch(buffer, buffer_offset, 2)?;
    Ok(u16::from_be_bytes([bytes[0], bytes[1]]))
}

/// オフセット位置のネットワークオーダーushortからビット範囲を読み取る
///
/// バイト境界をまたぐフィールド（IPv4のフラグメントオフセット等）を
/// ホストオーダー変換済みの16ビットウィンドウとして抽出する
pub fn read_net_order_ushort_bits(
    buffer: &[u8],
    buffer_offset: usize,
    bit_position: usize,
    bit_length: usize,
) -> RangeResult<u16> {
    let value = read_net_order_ushort(buffer, buffer_offset)?;
    read_bits_from_ushort(value, bit_position, bit_length)
}

/// オフセット位置の4バイトをIPv4アドレスとして読み取る
///
/// オクテットは格納順のまま解釈する（バイトオーダー変換なし）
pub fn read_ipv4(buffer: &[u8], buffer_offset: usize) -> RangeResult<Ipv4Addr> {
    let bytes = fetch(buffer, buffer_offset, 4)?;
    Ok(Ipv4Addr::new(bytes[0], bytes[1], bytes[2], bytes[3]))
}
