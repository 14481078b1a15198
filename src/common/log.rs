//! Logging setup and the structured event schema shared by all services.

use tracing_subscriber::EnvFilter;

use crate::common::config::{AppCfg, LogFormat};
use crate::common::error::ErrorCode;

/// Install the global subscriber. Later calls are no-ops.
pub fn init(cfg: &AppCfg) {
    let filter = EnvFilter::try_new(&cfg.log_filter).unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let _ = match cfg.log_format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Text => builder.try_init(),
    };
}

/// Emit one event line: `mod`, `ev`, `code` and `dur_us`.
pub fn event(module: &'static str, event: &'static str, code: ErrorCode, dur_us: u64) {
    let code = code as u32;
    if code == ErrorCode::Ok as u32 {
        tracing::info!(target: "attrition", r#mod = module, ev = event, code, dur_us);
    } else {
        tracing::warn!(target: "attrition", r#mod = module, ev = event, code, dur_us);
    }
}
