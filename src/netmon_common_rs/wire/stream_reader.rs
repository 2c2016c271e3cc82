/// ストリームアクセサ
/// ByteStream からフィールドを読み取る関数群
/// 消費する読み取り（consume/read）と消費しない読み取り（peek）を名前で区別する

use std::net::Ipv4Addr;

use super::byte_stream::ByteStream;
use super::core::bit_window::{read_bits_from_byte, read_bits_from_ushort};
use super::core::exceptions::WireResult;

/// カーソルを動かさずに次のバイトを読む
pub fn peek_byte<S: ByteStream>(stream: &mut S) -> WireResult<u8> {
    Ok(stream.peek_byte()?)
}

/// 次のバイトを読み取り、カーソルを1進める
pub fn read_byte<S: ByteStream>(stream: &mut S) -> WireResult<u8> {
    Ok(stream.next_byte()?)
}

/// カーソルを動かさずに次のバイトからビット範囲を読み取る
///
/// フィールド値を確認してから消費するかどうか判断する用途向け。
/// 連続して呼んでも同じ値を返し、カーソルは移動しない。
pub fn peek_bits<S: ByteStream>(
    stream: &mut S,
    bit_position: usize,
    bit_length: usize,
) -> WireResult<u8> {
    let byte = stream.peek_byte()?;
    Ok(read_bits_from_byte(byte, bit_position, bit_length)?)
}

/// 1バイトを消費してビット範囲を読み取る
pub fn consume_bits<S: ByteStream>(
    stream: &mut S,
    bit_position: usize,
    bit_length: usize,
) -> WireResult<u8> {
    let byte = stream.next_byte()?;
    Ok(read_bits_from_byte(byte, bit_position, bit_length)?)
}

/// 2バイトを消費し、ネットワークオーダーのushortとして読み取る
pub fn read_net_order_ushort<S: ByteStream>(stream: &mut S) -> WireResult<u16> {
    let mut bytes = [0u8; 2];
    stream.take_exact(&mut bytes)?;
    Ok(u16::from_be_bytes(bytes))
}

/// 2バイトを消費し、ネットワークオーダーのushortからビット範囲を読み取る
pub fn read_net_order_ushort_bits<S: ByteStream>(
    stream: &mut S,
    bit_position: usize,
    bit_length: usize,
) -> WireResult<u16> {
    let value = read_net_order_ushort(stream)?;
    Ok(read_bits_from_ushort(value, bit_position, bit_length)?)
}

/// 4バイトを消費し、IPv4アドレスとして読み取る
///
/// オクテットは格納順のまま解釈する（バイトオーダー変換なし）
pub fn read_ipv4<S: ByteStream>(stream: &mut S) -> WireResult<Ipv4Addr> {
    let mut octets = [0u8; 4];
    stream.take_exact(&mut octets)?;
    Ok(Ipv4Addr::from(octets))
}
