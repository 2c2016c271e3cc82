/// NetMon Rust Implementation
/// Network wire-format field access and SNMP utilities in Rust

pub mod netmon_common_rs;

// 便利な再エクスポート
pub mod prelude {
    pub use crate::netmon_common_rs::snmp::enterprise::{enterprise_name, enterprise_name_from_oid};
    pub use crate::netmon_common_rs::snmp::oid::ObjectIdentifier;
    pub use crate::netmon_common_rs::wire::byte_stream::ByteStream;
    pub use crate::netmon_common_rs::wire::core::bit_window::{
        read_bits_from_byte, read_bits_from_ushort,
    };
    pub use crate::netmon_common_rs::wire::core::exceptions::{
        RangeError, RangeResult, WireAccessError, WireResult,
    };
    pub use crate::netmon_common_rs::wire::{buffer_reader, stream_reader};
}
