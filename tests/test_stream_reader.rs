use netmon_rust::netmon_common_rs::wire::core::exceptions::{RangeError, WireAccessError};
use netmon_rust::netmon_common_rs::wire::stream_reader::{
    consume_bits, peek_bits, peek_byte, read_byte, read_ipv4, read_net_order_ushort,
    read_net_order_ushort_bits,
};
use std::io::Cursor;
use std::net::Ipv4Addr;

/// Captured IPv4 header: 192.168.1.100 -> 192.168.1.1, UDP, DF set
fn captured_header() -> Cursor<Vec<u8>> {
    Cursor::new(hex::decode("4500005426b140004011728bc0a80164c0a80101").unwrap())
}

#[test]
fn test_peek_then_read_returns_same_byte() {
    let mut stream = Cursor::new(vec![0x7E, 0x10]);
    let start = stream.position();

    let peeked = peek_byte(&mut stream).unwrap();
    let consumed = read_byte(&mut stream).unwrap();

    assert_eq!(peeked, consumed);
    // Net cursor movement over peek + read is exactly one byte
    assert_eq!(stream.position(), start + 1);
}

#[test]
fn test_peek_bits_is_cursor_neutral() {
    let mut stream = Cursor::new(vec![0b1011_0000]);

    let first = peek_bits(&mut stream, 0, 3).unwrap();
    let second = peek_bits(&mut stream, 0, 3).unwrap();

    assert_eq!(first, 0b101);
    assert_eq!(first, second);
    assert_eq!(stream.position(), 0);
}

#[test]
fn test_consume_bits_advances_exactly_one_byte() {
    let mut stream = Cursor::new(vec![0b1011_0000, 0xEE]);

    assert_eq!(consume_bits(&mut stream, 0, 3).unwrap(), 0b101);
    assert_eq!(stream.position(), 1);
}

#[test]
fn test_peek_bits_then_consume_bits() {
    // Inspect a field without committing, then consume it
    let mut stream = Cursor::new(vec![0x45, 0x00]);

    let version = peek_bits(&mut stream, 0, 4).unwrap();
    assert_eq!(version, 4);
    assert_eq!(stream.position(), 0);

    assert_eq!(consume_bits(&mut stream, 0, 4).unwrap(), version);
    assert_eq!(stream.position(), 1);
}

#[test]
fn test_sequential_header_decode() {
    let mut stream = captured_header();

    // Version (peek first, then consume the byte)
    assert_eq!(peek_bits(&mut stream, 0, 4).unwrap(), 4);
    assert_eq!(consume_bits(&mut stream, 4, 4).unwrap(), 5);

    // DSCP/ECN byte
    assert_eq!(read_byte(&mut stream).unwrap(), 0x00);

    // Total length, identification
    assert_eq!(read_net_order_ushort(&mut stream).unwrap(), 84);
    assert_eq!(read_net_order_ushort(&mut stream).unwrap(), 0x26B1);

    // Flags out of the flags/fragment-offset word
    assert_eq!(read_net_order_ushort_bits(&mut stream, 0, 3).unwrap(), 0b010);

    // TTL, protocol, checksum
    assert_eq!(read_byte(&mut stream).unwrap(), 64);
    assert_eq!(read_byte(&mut stream).unwrap(), 17);
    assert_eq!(read_net_order_ushort(&mut stream).unwrap(), 0x728B);

    // Source and destination addresses
    assert_eq!(
        read_ipv4(&mut stream).unwrap(),
        Ipv4Addr::new(192, 168, 1, 100)
    );
    assert_eq!(
        read_ipv4(&mut stream).unwrap(),
        Ipv4Addr::new(192, 168, 1, 1)
    );

    // The whole header is consumed
    assert_eq!(stream.position(), 20);
}

#[test]
fn test_read_ipv4_consumes_four_bytes() {
    let mut stream = Cursor::new(vec![192, 168, 1, 1, 0xAA]);

    assert_eq!(
        read_ipv4(&mut stream).unwrap(),
        Ipv4Addr::new(192, 168, 1, 1)
    );
    assert_eq!(stream.position(), 4);
}

#[test]
fn test_end_of_data_propagates_stream_error() {
    let mut stream = Cursor::new(vec![0x01]);

    let err = read_net_order_ushort(&mut stream).unwrap_err();
    assert!(err.is_end_of_data());
}

#[test]
fn test_empty_stream_peek_reports_end_of_data() {
    let mut stream = Cursor::new(Vec::<u8>::new());

    let err = peek_bits(&mut stream, 0, 4).unwrap_err();
    assert!(err.is_end_of_data());
}

#[test]
fn test_window_error_is_not_end_of_data() {
    let mut stream = Cursor::new(vec![0x01, 0x02]);

    let err = read_net_order_ushort_bits(&mut stream, 9, 8).unwrap_err();
    assert!(!err.is_end_of_data());
    match err {
        WireAccessError::Range(range) => {
            assert_eq!(range, RangeError::window_exceeded(9, 8, 16));
        }
        other => panic!("Unexpected error: {:?}", other),
    }
}
