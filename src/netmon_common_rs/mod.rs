//! NetMon 共通ライブラリ
//! ワイヤフォーマットのフィールド読み取りとSNMPユーティリティ

pub mod snmp;
pub mod wire;
