/// キャプチャ済みIPv4ヘッダをデコードするデモ
/// バッファアクセサとストリームアクセサの両方で同じヘッダを読む

use netmon_rust::netmon_common_rs::snmp::enterprise::enterprise_name;
use netmon_rust::netmon_common_rs::wire::{buffer_reader, stream_reader};
use std::io::Cursor;

fn main() {
    env_logger::init();

    // 192.168.1.100 -> 192.168.1.1 のUDPパケットのIPv4ヘッダ
    let header = hex::decode("4500005426b140004011728bc0a80164c0a80101").expect("valid hex dump");

    println!("-- buffer accessor --");
    let version = buffer_reader::read_bits(&header, 0, 0, 4).unwrap();
    let ihl = buffer_reader::read_bits(&header, 0, 4, 4).unwrap();
    let total_length = buffer_reader::read_net_order_ushort(&header, 2).unwrap();
    let flags = buffer_reader::read_net_order_ushort_bits(&header, 6, 0, 3).unwrap();
    let fragment_offset = buffer_reader::read_net_order_ushort_bits(&header, 6, 3, 13).unwrap();
    let ttl = buffer_reader::read_bits(&header, 8, 0, 8).unwrap();
    let protocol = buffer_reader::read_bits(&header, 9, 0, 8).unwrap();
    let source = buffer_reader::read_ipv4(&header, 12).unwrap();
    let destination = buffer_reader::read_ipv4(&header, 16).unwrap();

    println!("version: {}, header length: {} words", version, ihl);
    println!("total length: {} bytes", total_length);
    println!("flags: {:#05b}, fragment offset: {}", flags, fragment_offset);
    println!("ttl: {}, protocol: {}", ttl, protocol);
    println!("{} -> {}", source, destination);

    println!("-- stream accessor --");
    let mut stream = Cursor::new(header);

    // バージョンを確認してから消費する
    let peeked_version = stream_reader::peek_bits(&mut stream, 0, 4).unwrap();
    println!("peeked version: {}", peeked_version);

    stream_reader::consume_bits(&mut stream, 4, 4).unwrap();
    stream_reader::read_byte(&mut stream).unwrap();
    let total_length = stream_reader::read_net_order_ushort(&mut stream).unwrap();
    println!("total length from stream: {} bytes", total_length);

    println!("-- enterprise resolution --");
    for oid in ["1.3.6.1.4.1.9.1.1", "1.3.6.1.4.1.99999.1", "1.3.6.1.2.1.1"] {
        match enterprise_name(oid) {
            Some(name) => println!("{} => {}", oid, name),
            None => println!("{} => no enterprise information", oid),
        }
    }
}
