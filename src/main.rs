use std::error::Error;
use std::io::Write;

use bytes::BytesMut;

use netheaders::config::{self, DumpConfig};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let cfg = match std::env::args().nth(1) {
        Some(path) => DumpConfig::from_file(&path),
        None => DumpConfig::default(),
    };
    if config::set_config(cfg).is_err() {
        log::warn!("config already set, keeping the first one");
    }

    let res = config::config().to_response()?;
    log::debug!("writing {} headers", res.headers.len());

    let mut buf = BytesMut::with_capacity(res.headers.encoded_len() + 64);
    res.encode_head(&mut buf);

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(&buf)?;
    stdout.flush()?;
    Ok(())
}
