use serde::{Deserialize, Serialize};

use showroom_core::forms::{FormStatus, TripPlan};
use showroom_core::pricing::RenderedPrice;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyUpdate {
    #[serde(default)]
    pub currency: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricesQuery {
    pub currency: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricesResponse {
    pub currency: String,
    pub prices: Vec<RenderedPrice>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripPlannerResponse {
    #[serde(flatten)]
    pub status: FormStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<TripPlan>,
}
