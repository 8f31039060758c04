//! Ordered, case-insensitive HTTP header collections and their HTTP/1.x wire encoding.

pub mod config;
pub mod http;

pub use http::headers::{
    EMPTY_HEADERS, EmptyHeaders, HeaderEntry, HeaderError, Headers, HttpHeaders, ToHeaderValue,
};
