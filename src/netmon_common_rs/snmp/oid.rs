/// SNMPオブジェクト識別子（最小実装）
/// エンタープライズ解決が必要とする機能のみを提供する

use std::error::Error;
use std::fmt;
use std::str::FromStr;

/// ドット区切り数値列のオブジェクト識別子
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectIdentifier {
    components: Vec<u32>,
}

/// OID文字列の解析エラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OidParseError {
    input: String,
}

impl fmt::Display for OidParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OID文字列を解析できません: '{}'", self.input)
    }
}

impl Error for OidParseError {}

impl ObjectIdentifier {
    /// 要素列からOIDを作成
    pub fn new(components: Vec<u32>) -> Self {
        Self { components }
    }

    /// 要素数を取得
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// 要素が空かどうか
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// 指定インデックスの要素を取得
    pub fn get(&self, index: usize) -> Option<u32> {
        self.components.get(index).copied()
    }

    /// このOIDが指定プレフィックスのサブツリーに属するか判定する
    pub fn starts_with(&self, prefix: &ObjectIdentifier) -> bool {
        self.components.len() >= prefix.components.len()
            && self.components[..prefix.components.len()] == prefix.components[..]
    }
}

impl FromStr for ObjectIdentifier {
    type Err = OidParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(OidParseError {
                input: s.to_string(),
            });
        }

        let mut components = Vec::new();
        for part in s.split('.') {
            match part.parse::<u32>() {
                Ok(value) => components.push(value),
                Err(_) => {
                    return Err(OidParseError {
                        input: s.to_string(),
                    })
                }
            }
        }
        Ok(Self { components })
    }
}

impl fmt::Display for ObjectIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for component in &self.components {
            if !first {
                write!(f, ".")?;
            }
            write!(f, "{}", component)?;
            first = false;
        }
        Ok(())
    }
}
