/// エンタープライズ番号の解決
/// IANA登録のprivate enterprise番号からベンダー名を引く

use std::collections::HashMap;

use log::debug;
use once_cell::sync::Lazy;

use super::oid::ObjectIdentifier;

/// エンタープライズ名テーブル
/// https://www.iana.org/assignments/enterprise-numbers/
static ENTERPRISE_NAMES: Lazy<HashMap<u32, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (9, "Cisco"),
        (21296, "Infinera"),
        (3780, "Level3"),
        (6027, "Force10"),
        (30065, "Arista"),
        (2636, "Juniper"),
        (8072, "net-snmp"),
    ])
});

/// private enterprise配下を示すプレフィックス
static ENTERPRISE_PREFIX: Lazy<ObjectIdentifier> =
    Lazy::new(|| ObjectIdentifier::new(vec![1, 3, 6, 1, 4, 1]));

/// エンタープライズ番号が現れる要素インデックス（プレフィックスの直後）
const ENTERPRISE_INDEX: usize = 6;

/// OID文字列からエンタープライズ名を解決する
///
/// Args:
///     oid: ドット区切りのOID文字列
///
/// Returns:
///     ベンダー名。エンタープライズ情報を持たないOIDはNone
pub fn enterprise_name(oid: &str) -> Option<String> {
    if oid.is_empty() || oid.len() < 6 {
        return None;
    }

    let parsed: ObjectIdentifier = match oid.parse() {
        Ok(parsed) => parsed,
        Err(_) => {
            debug!("OIDを解析できないため解決をスキップ: {}", oid);
            return None;
        }
    };
    enterprise_name_from_oid(&parsed)
}

/// 解析済みOIDからエンタープライズ名を解決する
///
/// プレフィックス 1.3.6.1.4.1 で始まり、エンタープライズ番号より
/// 深い要素を持つOIDのみが解決対象
pub fn enterprise_name_from_oid(oid: &ObjectIdentifier) -> Option<String> {
    if !oid.starts_with(&ENTERPRISE_PREFIX) || oid.len() <= ENTERPRISE_INDEX {
        return None;
    }

    let number = oid.get(ENTERPRISE_INDEX)?;
    match ENTERPRISE_NAMES.get(&number) {
        Some(name) => Some((*name).to_string()),
        None => {
            debug!("未登録のエンタープライズ番号: {}", number);
            Some(format!("Unknown ({})", number))
        }
    }
}
