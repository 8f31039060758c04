//! HTTP/1 wire encoding of header collections.
use bytes::BufMut;

use super::Headers;

const HEADER_SEPARATOR: &[u8] = b": ";
const CRLF: &[u8] = b"\r\n";

/// Write every entry of `headers` as `name: value\r\n`, in collection order.
///
/// The blank line ending a header section is not written, message framing adds it.
///
/// Text is written with [`encode_ascii`], names and values are expected to be valid header text
/// already.
pub fn encode<B: BufMut + ?Sized>(headers: &dyn Headers, buf: &mut B) {
    match headers.as_http_headers() {
        Some(headers) => headers.encode(buf),
        None => {
            for (name, value) in headers.iter() {
                encode_entry(name, value, buf);
            }
        }
    }
}

pub(crate) fn encode_entry<B: BufMut + ?Sized>(name: &str, value: &str, buf: &mut B) {
    encode_ascii(name, buf);
    buf.put_slice(HEADER_SEPARATOR);
    encode_ascii(value, buf);
    buf.put_slice(CRLF);
}

/// Write `seq` as one byte per `char`.
///
/// ASCII text is copied as is. Any `char` outside ASCII is truncated to its low byte, including
/// those outside the Basic Multilingual Plane, so `"a\u{1F600}b"` is written as three bytes.
pub fn encode_ascii<B: BufMut + ?Sized>(seq: &str, buf: &mut B) {
    if seq.is_ascii() {
        buf.put_slice(seq.as_bytes());
    } else {
        for c in seq.chars() {
            buf.put_u8(c as u32 as u8);
        }
    }
}
