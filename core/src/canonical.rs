//! Canonical JSON encoding.
//!
//! Sign bytes are verified by a remote chain that re-encodes the message with
//! its own JSON encoder, so the output here must match it byte for byte:
//! compact, fields in declaration order, and HTML-sensitive characters plus
//! U+2028/U+2029 escaped as `\uXXXX`.

use std::io;

use serde::Serialize;
use serde_json::ser::Formatter;

use crate::Result;

/// Encodes `value` as canonical JSON bytes.
pub fn to_vec<T>(value: &T) -> Result<Vec<u8>>
where
    T: Serialize + ?Sized,
{
    let mut out = Vec::with_capacity(128);
    let mut ser = serde_json::Serializer::with_formatter(&mut out, CanonicalFormatter);
    value.serialize(&mut ser)?;
    Ok(out)
}

/// Encodes `value` as a canonical JSON string.
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: Serialize + ?Sized,
{
    let bytes = to_vec(value)?;
    // serde_json only ever emits UTF-8
    String::from_utf8(bytes).map_err(|e| crate::BridgeError::Encoding(e.to_string()))
}

/// Compact formatter with the additional string escapes of the verifier.
#[derive(Debug, Clone, Copy, Default)]
pub struct CanonicalFormatter;

impl Formatter for CanonicalFormatter {
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut start = 0;
        for (i, c) in fragment.char_indices() {
            if matches!(c, '<' | '>' | '&' | '\u{2028}' | '\u{2029}') {
                writer.write_all(&fragment.as_bytes()[start..i])?;
                write!(writer, "\\u{:04x}", c as u32)?;
                start = i + c.len_utf8();
            }
        }
        writer.write_all(&fragment.as_bytes()[start..])
    }
}
