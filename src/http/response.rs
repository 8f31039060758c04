use bytes::{BufMut, BytesMut};

use crate::http::headers::{self, HeaderError, Headers, HttpHeaders, ToHeaderValue};
use crate::http::names;
use crate::http::status::HttpStatus;
use crate::http::{HttpMessage, HttpVersion};

/// Common HTTP response headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseHeader {
    ContentLength,
    ContentType,
    Connection,
    Date,
    Server,
}

impl ResponseHeader {
    pub const fn name(self) -> &'static str {
        match self {
            ResponseHeader::ContentType => names::CONTENT_TYPE,
            ResponseHeader::ContentLength => names::CONTENT_LENGTH,
            ResponseHeader::Connection => names::CONNECTION,
            ResponseHeader::Date => names::DATE,
            ResponseHeader::Server => names::SERVER,
        }
    }
}

#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub version: HttpVersion,
    pub status: HttpStatus,
    pub headers: HttpHeaders,
    pub body: Vec<u8>,
}

impl Default for HttpResponse {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpResponse {
    pub fn new() -> Self {
        Self::with_status(HttpStatus::Ok)
    }

    pub fn with_status(status: HttpStatus) -> Self {
        Self {
            version: HttpVersion::V1_1,
            status,
            headers: HttpHeaders::new(),
            body: Vec::new(),
        }
    }

    /// Sets a response header, replacing any previous value.
    pub fn set_header<V: ToHeaderValue>(
        &mut self,
        h: ResponseHeader,
        value: V,
    ) -> Result<(), HeaderError> {
        self.headers.set(h.name(), value)?;
        Ok(())
    }

    /// Sets the body and a matching `Content-Length`.
    pub fn set_body(&mut self, body: Vec<u8>) -> Result<(), HeaderError> {
        self.set_header(ResponseHeader::ContentLength, body.len())?;
        self.body = body;
        Ok(())
    }

    /// Writes the status line, the headers, and the blank line ending the head.
    pub fn encode_head<B: BufMut + ?Sized>(&self, buf: &mut B) {
        // <version> <status> <reason>\r\n
        buf.put_slice(self.version.as_str().as_bytes());
        buf.put_u8(b' ');
        buf.put_slice(itoa::Buffer::new().format(self.status.code()).as_bytes());
        buf.put_u8(b' ');
        buf.put_slice(self.status.reason().as_bytes());
        buf.put_slice(b"\r\n");

        // <header_name>: <header_value>\r\n
        // ...
        // \r\n
        headers::encode(&self.headers, buf);
        buf.put_slice(b"\r\n");
    }

    /// Encodes the whole response, head then body.
    pub fn to_bytes(&self) -> BytesMut {
        let mut buf = BytesMut::with_capacity(self.headers.encoded_len() + self.body.len() + 64);
        self.encode_head(&mut buf);
        buf.put_slice(&self.body);
        buf
    }
}

impl HttpMessage for HttpResponse {
    fn version(&self) -> HttpVersion {
        self.version
    }

    fn headers(&self) -> &HttpHeaders {
        &self.headers
    }

    fn headers_mut(&mut self) -> &mut HttpHeaders {
        &mut self.headers
    }
}
