// 旧ランタイム互換のJSONシリアライズ
//
// デフォルトルートのレスポンスボディには受信イベントをJSON文字列として埋め込む。
// 既存デプロイメントと同じ文字列を返すため、以下の書式で出力する:
// - 区切り文字は ", " と ": "
// - キーは受信順（serde_jsonのpreserve_order）
// - 印字可能ASCII（' '..='~'）以外の文字は小文字の \uXXXX でエスケープ

use std::io;

use serde::Serialize;
use serde_json::ser::{Formatter, Serializer};
use serde_json::Value;

/// 旧ランタイム互換の書式を出力するFormatter
struct PythonCompatFormatter;

impl Formatter for PythonCompatFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut units = [0u16; 2];
        for ch in fragment.chars() {
            if (' '..='~').contains(&ch) {
                writer.write_all(&[ch as u8])?;
            } else {
                for unit in ch.encode_utf16(&mut units) {
                    write!(writer, "\\u{unit:04x}")?;
                }
            }
        }
        Ok(())
    }
}

/// JSON値を旧ランタイム互換の書式で文字列化
///
/// 出力はASCIIのみで構成される。
pub fn to_python_json(value: &Value) -> Result<String, serde_json::Error> {
    let mut buffer = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buffer, PythonCompatFormatter);
    value.serialize(&mut serializer)?;
    String::from_utf8(buffer).map_err(<serde_json::Error as serde::ser::Error>::custom)
}
