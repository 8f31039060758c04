use serde::Deserialize;

pub mod date;
pub mod headers;
pub mod names;
pub mod request;
pub mod response;
pub mod status;
pub mod values;

use headers::HttpHeaders;

/// HTTP versions a message can be written with.
#[derive(PartialEq, PartialOrd, Debug, Clone, Copy, Default, Deserialize)]
pub enum HttpVersion {
    V0_9,
    V1_0,
    #[default]
    V1_1,
    V2_0,
    V3_0,
}

impl HttpVersion {
    pub const fn as_str(&self) -> &'static str {
        match self {
            HttpVersion::V0_9 => "HTTP/0.9",
            HttpVersion::V1_0 => "HTTP/1.0",
            HttpVersion::V1_1 => "HTTP/1.1",
            HttpVersion::V2_0 => "HTTP/2.0",
            HttpVersion::V3_0 => "HTTP/3.0",
        }
    }
}

#[derive(PartialEq, Debug, Clone, Copy)]
pub enum HttpMethod {
    Get,
    Head,
    Post,
    Put,
    Delete,
    Connect,
    Options,
    Trace,
}

impl HttpMethod {
    pub const fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Head => "HEAD",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Connect => "CONNECT",
            HttpMethod::Options => "OPTIONS",
            HttpMethod::Trace => "TRACE",
        }
    }
}

/// A message owning a header collection.
pub trait HttpMessage {
    fn version(&self) -> HttpVersion;

    fn headers(&self) -> &HttpHeaders;

    fn headers_mut(&mut self) -> &mut HttpHeaders;
}
