//! Tracing setup.
//!
//! - `LOG_LEVEL` controls the filter (e.g. "debug" or "info,gsfa=trace").
//! - `LOG_FORMAT=json` switches to structured JSON lines.
//!
//! Logs go to stderr; stdout carries the run status only.

use tracing_subscriber::EnvFilter;

pub fn init_tracing() {
    let filter = EnvFilter::try_from_env("LOG_LEVEL").unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true);

    match std::env::var("LOG_FORMAT").as_deref() {
        Ok("json") => builder.json().init(),
        _ => builder.init(),
    }
}
