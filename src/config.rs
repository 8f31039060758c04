use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::time::SystemTime;

use crate::http::headers::{HeaderError, Headers, HttpHeaders};
use crate::http::response::{HttpResponse, ResponseHeader};
use crate::http::status::HttpStatus;
use crate::http::{HttpVersion, names};

static CONFIG: OnceCell<DumpConfig> = OnceCell::new();

/// A single `name = value` pair from the config file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HeaderField {
    pub name: String,
    pub value: String,
}

/// Describes the response head written by the `netheaders` binary.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DumpConfig {
    pub http_version: HttpVersion,
    pub status: u16,

    pub server_name: String,
    pub date: bool,

    /// Appended in order, repeated names are kept.
    pub headers: Vec<HeaderField>,
    /// Replace every configured value of the same name.
    pub overrides: Vec<HeaderField>,
}

impl Default for DumpConfig {
    fn default() -> Self {
        Self {
            http_version: HttpVersion::V1_1,
            status: 200,

            server_name: "netheaders/0.1".to_string(),
            date: true,

            headers: Vec::new(),
            overrides: Vec::new(),
        }
    }
}

impl DumpConfig {
    pub fn from_file(path: &str) -> Self {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                log::warn!("fail to read {path}: {err}, fall back to default config");
                return DumpConfig::default();
            }
        };

        Self::from_toml(&content).unwrap_or_else(|err| {
            log::warn!("fail to deserialize config file {path}: {err}, fall back to default config");
            DumpConfig::default()
        })
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn to_response(&self) -> Result<HttpResponse, HeaderError> {
        let status = HttpStatus::from_code(self.status).unwrap_or_else(|| {
            log::warn!("unknown status code {}, using 200", self.status);
            HttpStatus::Ok
        });

        let mut res = HttpResponse::with_status(status);
        res.version = self.http_version;

        for field in &self.headers {
            res.headers.add(&field.name, &field.value)?;
        }

        if !res.headers.contains(names::SERVER) {
            res.set_header(ResponseHeader::Server, &self.server_name)?;
        }
        if self.date && !res.headers.contains(names::DATE) {
            res.set_header(ResponseHeader::Date, SystemTime::now())?;
        }

        let mut overrides = HttpHeaders::with_capacity(self.overrides.len());
        for field in &self.overrides {
            overrides.add(&field.name, &field.value)?;
        }
        res.headers.set_all(&overrides)?;

        Ok(res)
    }
}

/// Installs the process-wide config. Returns the rejected value when one is already set.
pub fn set_config(cfg: DumpConfig) -> Result<(), DumpConfig> {
    CONFIG.set(cfg)
}

pub fn config() -> &'static DumpConfig {
    CONFIG.get_or_init(DumpConfig::default)
}
