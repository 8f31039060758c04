//! Standard header names.

pub const ACCEPT: &str = "Accept";
pub const ACCEPT_CHARSET: &str = "Accept-Charset";
pub const ACCEPT_ENCODING: &str = "Accept-Encoding";
pub const ACCEPT_LANGUAGE: &str = "Accept-Language";
pub const ACCEPT_RANGES: &str = "Accept-Ranges";
pub const ACCEPT_PATCH: &str = "Accept-Patch";
pub const ACCESS_CONTROL_ALLOW_CREDENTIALS: &str = "Access-Control-Allow-Credentials";
pub const ACCESS_CONTROL_ALLOW_HEADERS: &str = "Access-Control-Allow-Headers";
pub const ACCESS_CONTROL_ALLOW_METHODS: &str = "Access-Control-Allow-Methods";
pub const ACCESS_CONTROL_ALLOW_ORIGIN: &str = "Access-Control-Allow-Origin";
pub const ACCESS_CONTROL_EXPOSE_HEADERS: &str = "Access-Control-Expose-Headers";
pub const ACCESS_CONTROL_MAX_AGE: &str = "Access-Control-Max-Age";
pub const ACCESS_CONTROL_REQUEST_HEADERS: &str = "Access-Control-Request-Headers";
pub const ACCESS_CONTROL_REQUEST_METHOD: &str = "Access-Control-Request-Method";
pub const AGE: &str = "Age";
pub const ALLOW: &str = "Allow";
pub const AUTHORIZATION: &str = "Authorization";
pub const CACHE_CONTROL: &str = "Cache-Control";
pub const CONNECTION: &str = "Connection";
pub const CONTENT_BASE: &str = "Content-Base";
pub const CONTENT_ENCODING: &str = "Content-Encoding";
pub const CONTENT_LANGUAGE: &str = "Content-Language";
pub const CONTENT_LENGTH: &str = "Content-Length";
pub const CONTENT_LOCATION: &str = "Content-Location";
pub const CONTENT_TRANSFER_ENCODING: &str = "Content-Transfer-Encoding";
pub const CONTENT_MD5: &str = "Content-MD5";
pub const CONTENT_RANGE: &str = "Content-Range";
pub const CONTENT_TYPE: &str = "Content-Type";
pub const COOKIE: &str = "Cookie";
pub const DATE: &str = "Date";
pub const ETAG: &str = "ETag";
pub const EXPECT: &str = "Expect";
pub const EXPIRES: &str = "Expires";
pub const FROM: &str = "From";
pub const HOST: &str = "Host";
pub const IF_MATCH: &str = "If-Match";
pub const IF_MODIFIED_SINCE: &str = "If-Modified-Since";
pub const IF_NONE_MATCH: &str = "If-None-Match";
pub const IF_RANGE: &str = "If-Range";
pub const IF_UNMODIFIED_SINCE: &str = "If-Unmodified-Since";
pub const LAST_MODIFIED: &str = "Last-Modified";
pub const LOCATION: &str = "Location";
pub const MAX_FORWARDS: &str = "Max-Forwards";
pub const ORIGIN: &str = "Origin";
pub const PRAGMA: &str = "Pragma";
pub const PROXY_AUTHENTICATE: &str = "Proxy-Authenticate";
pub const PROXY_AUTHORIZATION: &str = "Proxy-Authorization";
pub const RANGE: &str = "Range";
pub const REFERER: &str = "Referer";
pub const RETRY_AFTER: &str = "Retry-After";
pub const SEC_WEBSOCKET_KEY1: &str = "Sec-WebSocket-Key1";
pub const SEC_WEBSOCKET_KEY2: &str = "Sec-WebSocket-Key2";
pub const SEC_WEBSOCKET_LOCATION: &str = "Sec-WebSocket-Location";
pub const SEC_WEBSOCKET_ORIGIN: &str = "Sec-WebSocket-Origin";
pub const SEC_WEBSOCKET_PROTOCOL: &str = "Sec-WebSocket-Protocol";
pub const SEC_WEBSOCKET_VERSION: &str = "Sec-WebSocket-Version";
pub const SEC_WEBSOCKET_KEY: &str = "Sec-WebSocket-Key";
pub const SEC_WEBSOCKET_ACCEPT: &str = "Sec-WebSocket-Accept";
pub const SERVER: &str = "Server";
pub const SET_COOKIE: &str = "Set-Cookie";
pub const SET_COOKIE2: &str = "Set-Cookie2";
pub const TE: &str = "TE";
pub const TRAILER: &str = "Trailer";
pub const TRANSFER_ENCODING: &str = "Transfer-Encoding";
pub const UPGRADE: &str = "Upgrade";
pub const USER_AGENT: &str = "User-Agent";
pub const VARY: &str = "Vary";
pub const VIA: &str = "Via";
pub const WARNING: &str = "Warning";
pub const WEBSOCKET_LOCATION: &str = "WebSocket-Location";
pub const WEBSOCKET_ORIGIN: &str = "WebSocket-Origin";
pub const WEBSOCKET_PROTOCOL: &str = "WebSocket-Protocol";
pub const WWW_AUTHENTICATE: &str = "WWW-Authenticate";
