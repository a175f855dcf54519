//! CLI configuration from environment variables.
//!
//! Every variable has a default, so loading never fails; the lookup is
//! injected as a closure so tests drive it from a plain `HashMap` without
//! touching process env.

use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Where route snapshots live.
    pub data_dir: PathBuf,
    /// Default tracing filter when `RUST_LOG` is unset.
    pub log_level: String,
    /// Page URL appended to share text.
    pub page_url: String,
}

/// Load configuration from process environment variables.
///
/// Call after `dotenvy::dotenv()` so `.env` files are visible.
pub fn load_config() -> CliConfig {
    build_config(|key| std::env::var(key))
}

/// Build configuration using the provided env-var lookup function.
pub fn build_config<F>(lookup: F) -> CliConfig
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    CliConfig {
        data_dir: PathBuf::from(or_default("NOMADIA_DATA_DIR", "./data")),
        log_level: or_default("NOMADIA_LOG_LEVEL", "info"),
        page_url: or_default("NOMADIA_PAGE_URL", "https://nomadia.example/"),
    }
}
