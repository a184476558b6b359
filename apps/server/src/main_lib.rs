use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use showroom_core::{
    fx::{FxService, FxServiceTrait},
    storage::KeyValueStore,
    SiteCatalog, SiteService,
};
use showroom_market_data::{
    ExchangeRateHostProvider, GeoProvider, IpapiProvider, RateProvider, ResolverChain,
};

use crate::{config::Config, store::FileStore};

/// File holding the FX cache and visitor preferences, inside the data dir
const STORE_FILE: &str = "store.json";

pub struct AppState {
    pub site: Arc<SiteService>,
    pub fx_service: Arc<dyn FxServiceTrait>,
    pub store: Arc<dyn KeyValueStore>,
}

pub fn init_tracing() {
    let fmt_layer = fmt::layer().json().with_current_span(false);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    std::fs::create_dir_all(&config.data_dir).with_context(|| {
        format!("Failed to create data dir {}", config.data_dir.display())
    })?;
    let store_path = config.data_dir.join(STORE_FILE);
    tracing::info!("Store path in use: {}", store_path.display());
    let store: Arc<dyn KeyValueStore> = Arc::new(FileStore::new(store_path));

    let catalog = SiteCatalog::from_file(&config.catalog_path).with_context(|| {
        format!("Failed to load catalog {}", config.catalog_path.display())
    })?;

    let rate_provider: Arc<dyn RateProvider> = Arc::new(ExchangeRateHostProvider::with_base_url(
        config.fx_base_url.clone(),
        config.fx_access_key.clone(),
    ));
    let fx_service = Arc::new(FxService::new(rate_provider, store.clone()));
    // Cache or static table; the live fetch is left to the scheduler.
    fx_service.initialize();
    let fx_service: Arc<dyn FxServiceTrait> = fx_service;

    let geo_provider: Option<Arc<dyn GeoProvider>> = match &config.geo_base_url {
        Some(url) => Some(Arc::new(IpapiProvider::with_base_url(url.clone()))),
        None => {
            tracing::info!("IP geolocation disabled");
            None
        }
    };
    let resolver = Arc::new(ResolverChain::new(geo_provider));

    let site = Arc::new(SiteService::new(
        Arc::new(catalog),
        fx_service.clone(),
        resolver,
        store.clone(),
    ));

    Ok(Arc::new(AppState {
        site,
        fx_service,
        store,
    }))
}
