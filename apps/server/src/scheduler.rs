//! Background scheduler for periodic FX refresh.
//!
//! The first refresh runs immediately so a server started on cached or
//! static rates upgrades to live rates as soon as the provider answers.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::main_lib::AppState;

/// Start the FX refresh loop on the current runtime.
pub fn start_rate_refresh_scheduler(state: Arc<AppState>, period: Duration) {
    info!(
        "Starting FX refresh scheduler (every {} seconds)",
        period.as_secs()
    );

    tokio::spawn(async move {
        let mut ticker = interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            debug!("Running scheduled FX refresh");
            match state.fx_service.refresh().await {
                Some(snapshot) => info!(
                    "FX refresh complete: {} currencies",
                    snapshot.rates.len()
                ),
                None => warn!(
                    "FX refresh failed, keeping {} rates",
                    state.fx_service.snapshot().source.as_str()
                ),
            }
        }
    });
}
