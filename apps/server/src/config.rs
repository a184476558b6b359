use std::{net::SocketAddr, path::PathBuf, time::Duration};

use anyhow::Context;
use showroom_market_data::provider::{exchangerate_host, ipapi};

/// Geolocation is disabled when the base URL is set to this value (or empty)
const GEO_DISABLED: &str = "off";

pub struct Config {
    pub listen_addr: SocketAddr,
    pub data_dir: PathBuf,
    pub catalog_path: PathBuf,
    pub static_dir: String,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub fx_base_url: String,
    pub fx_access_key: Option<String>,
    /// `None` turns IP geolocation off
    pub geo_base_url: Option<String>,
    pub rate_refresh: Duration,
}

fn var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn var_u64(name: &str, default: u64) -> u64 {
    var(name).and_then(|v| v.parse().ok()).unwrap_or(default)
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = var("SHOWROOM_LISTEN_ADDR")
            .unwrap_or_else(|| "0.0.0.0:8080".to_string())
            .parse()
            .context("Invalid SHOWROOM_LISTEN_ADDR")?;
        let data_dir = var("SHOWROOM_DATA_DIR").unwrap_or_else(|| "./data".into());
        let catalog_path =
            var("SHOWROOM_CATALOG_PATH").unwrap_or_else(|| "assets/catalog.html".into());
        let static_dir = var("SHOWROOM_STATIC_DIR").unwrap_or_else(|| "dist".into());
        let cors_allow = var("SHOWROOM_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms = var_u64("SHOWROOM_REQUEST_TIMEOUT_MS", 30_000);
        let fx_base_url = var("SHOWROOM_FX_BASE_URL")
            .unwrap_or_else(|| exchangerate_host::DEFAULT_BASE_URL.to_string());
        let geo_base_url = match var("SHOWROOM_GEO_BASE_URL") {
            Some(url) if url.eq_ignore_ascii_case(GEO_DISABLED) => None,
            Some(url) => Some(url),
            None => Some(ipapi::DEFAULT_BASE_URL.to_string()),
        };
        let refresh_secs = var_u64("SHOWROOM_RATE_REFRESH_SECS", 12 * 60 * 60).max(60);

        Ok(Self {
            listen_addr,
            data_dir: PathBuf::from(data_dir),
            catalog_path: PathBuf::from(catalog_path),
            static_dir,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            fx_base_url,
            fx_access_key: var("SHOWROOM_FX_ACCESS_KEY"),
            geo_base_url,
            rate_refresh: Duration::from_secs(refresh_secs),
        })
    }
}
