/// 位置付きバイトストリームの抽象
/// 「消費しない読み取り」をストリーム側の明示的な能力として提供する

use std::io::{self, Read, Seek, SeekFrom};

/// 読み取り位置を持つバイトストリーム
///
/// 1つのストリームは同時に1つの論理的な呼び出し側が所有する前提で、
/// 内部ロックは持たない。peek中のカーソル退避・復元は実装側で完結する。
pub trait ByteStream {
    /// 次のバイトを読み取り、カーソルを1進める
    fn next_byte(&mut self) -> io::Result<u8>;

    /// カーソルを動かさずに次のバイトを読む
    /// エラー時もカーソル位置は変化しない
    fn peek_byte(&mut self) -> io::Result<u8>;

    /// buf.len() バイトちょうどを読み取り、カーソルを進める
    /// 残量が不足する場合はストリーム自身の終端エラーをそのまま返す
    fn take_exact(&mut self, buf: &mut [u8]) -> io::Result<()>;
}

impl<R: Read + Seek> ByteStream for R {
    fn next_byte(&mut self) -> io::Result<u8> {
        let mut byte = [0u8; 1];
        self.read_exact(&mut byte)?;
        Ok(byte[0])
    }

    fn peek_byte(&mut self) -> io::Result<u8> {
        let saved = self.stream_position()?;
        let mut byte = [0u8; 1];
        let result = self.read_exact(&mut byte);
        // 読み取りの成否に関わらず位置を復元する
        self.seek(SeekFrom::Start(saved))?;
        result?;
        Ok(byte[0])
    }

    fn take_exact(&mut self, buf: &mut [u8]) -> io::Result<()> {
        self.read_exact(buf)
    }
}
