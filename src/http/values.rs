//! Common header values.

pub const APPLICATION_X_WWW_FORM_URLENCODED: &str = "application/x-www-form-urlencoded";
pub const BASE64: &str = "base64";
pub const BINARY: &str = "binary";
pub const BOUNDARY: &str = "boundary";
pub const BYTES: &str = "bytes";
pub const CHARSET: &str = "charset";
pub const CHUNKED: &str = "chunked";
pub const CLOSE: &str = "close";
pub const COMPRESS: &str = "compress";
pub const CONTINUE: &str = "100-continue";
pub const DEFLATE: &str = "deflate";
pub const GZIP: &str = "gzip";
pub const IDENTITY: &str = "identity";
pub const KEEP_ALIVE: &str = "keep-alive";
pub const MAX_AGE: &str = "max-age";
pub const MAX_STALE: &str = "max-stale";
pub const MIN_FRESH: &str = "min-fresh";
pub const MULTIPART_FORM_DATA: &str = "multipart/form-data";
pub const MUST_REVALIDATE: &str = "must-revalidate";
pub const NO_CACHE: &str = "no-cache";
pub const NO_STORE: &str = "no-store";
pub const NO_TRANSFORM: &str = "no-transform";
pub const NONE: &str = "none";
pub const ONLY_IF_CACHED: &str = "only-if-cached";
pub const PRIVATE: &str = "private";
pub const PROXY_REVALIDATE: &str = "proxy-revalidate";
pub const PUBLIC: &str = "public";
pub const QUOTED_PRINTABLE: &str = "quoted-printable";
pub const S_MAXAGE: &str = "s-maxage";
pub const TRAILERS: &str = "trailers";
pub const UPGRADE: &str = "Upgrade";
pub const WEBSOCKET: &str = "WebSocket";
