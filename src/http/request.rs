use bytes::BufMut;

use crate::http::headers::{self, HeaderError, Headers, HttpHeaders, ToHeaderValue};
use crate::http::names;
use crate::http::{HttpMessage, HttpMethod, HttpVersion};

/// Common HTTP request headers
/// This enum defines the set of headers that can be explicitly set on an
/// [`HttpRequest`] through its safe wrapper API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestHeader {
    Host,
    ContentLength,
    ContentType,
}

impl RequestHeader {
    pub const fn name(self) -> &'static str {
        match self {
            RequestHeader::ContentLength => names::CONTENT_LENGTH,
            RequestHeader::ContentType => names::CONTENT_TYPE,
            RequestHeader::Host => names::HOST,
        }
    }
}

#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub uri: String,
    pub version: HttpVersion,

    // headers
    pub headers: HttpHeaders,
    pub body: Vec<u8>,
}

impl HttpRequest {
    pub fn new(method: HttpMethod, uri: impl Into<String>) -> Self {
        Self {
            method,
            uri: uri.into(),
            version: HttpVersion::V1_1,
            headers: HttpHeaders::new(),
            body: Vec::new(),
        }
    }

    /// Sets a request header constrained to the allowed [`RequestHeader`] variants.
    ///
    /// This method acts as a safe wrapper around [`Headers::set`], ensuring that only headers
    /// explicitly supported by [`RequestHeader`] can be set through this API.
    ///
    /// No validation is performed on the header value itself.
    pub fn set_header<V: ToHeaderValue>(
        &mut self,
        h: RequestHeader,
        value: V,
    ) -> Result<(), HeaderError> {
        self.headers.set(h.name(), value)?;
        Ok(())
    }

    /// Writes the request line, the headers, and the blank line ending the head.
    pub fn encode_head<B: BufMut + ?Sized>(&self, buf: &mut B) {
        // <method> <uri> <version>\r\n
        buf.put_slice(self.method.as_str().as_bytes());
        buf.put_u8(b' ');
        buf.put_slice(self.uri.as_bytes());
        buf.put_u8(b' ');
        buf.put_slice(self.version.as_str().as_bytes());
        buf.put_slice(b"\r\n");

        headers::encode(&self.headers, buf);
        buf.put_slice(b"\r\n");
    }
}

impl HttpMessage for HttpRequest {
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
