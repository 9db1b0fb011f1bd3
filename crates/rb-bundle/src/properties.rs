//! Line-oriented `key=value` text codec.
//!
//! Each line holding a `=` is split at the first `=` into key and value;
//! the value may itself contain `=`. Lines without `=` are skipped. There is
//! no escaping, no comment syntax and no whitespace trimming.

use std::collections::BTreeMap;
use std::io::{BufRead, BufReader, Read, Write};

/// Flat key to text mapping held by a bundle.
pub type TextMap = BTreeMap<String, String>;

/// Split a single line at its first `=`.
///
/// Returns `None` for lines that carry no separator.
pub fn parse_line(line: &str) -> Option<(&str, &str)> {
    line.split_once('=')
}

/// Decode `key=value` lines from a reader.
///
/// Only fails when the reader fails; malformed lines never do. Bytes that
/// are not UTF-8 are replaced within their own line. Later duplicates
/// overwrite earlier ones.
pub fn decode<R: Read>(reader: R) -> std::io::Result<TextMap> {
    let mut reader = BufReader::new(reader);
    let mut map = TextMap::new();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let line = String::from_utf8_lossy(trim_line_ending(&buf));
        if let Some((key, value)) = parse_line(&line) {
            map.insert(key.to_string(), value.to_string());
        }
    }
    Ok(map)
}

fn trim_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

/// Decode `key=value` lines from an in-memory buffer.
pub fn decode_bytes(data: &[u8]) -> std::io::Result<TextMap> {
    decode(data)
}

/// Write one `key=value\n` line per entry.
pub fn encode_to<W: Write>(map: &TextMap, mut writer: W) -> std::io::Result<()> {
    for (key, value) in map {
        writeln!(writer, "{}={}", key, value)?;
    }
    Ok(())
}

/// Encode a mapping into `key=value\n` lines.
pub fn encode(map: &TextMap) -> Vec<u8> {
    let mut buf = Vec::with_capacity(map.iter().map(|(k, v)| k.len() + v.len() + 2).sum());
    for (key, value) in map {
        buf.extend_from_slice(key.as_bytes());
        buf.push(b'=');
        buf.extend_from_slice(value.as_bytes());
        buf.push(b'\n');
    }
    buf
}
