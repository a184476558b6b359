use serde::{Deserialize, Serialize};

use crate::calculators::inputs::{lenient_number, lenient_optional_number};
use crate::constants::TRIP_PLACEHOLDER_DISTANCE_KM;

use super::validation::{required, FormStatus, ValidationError};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TripPlannerForm {
    pub origin: String,
    pub destination: String,
    /// Selected vehicle model
    pub vehicle: String,
    /// Rated range of the selected vehicle
    #[serde(deserialize_with = "lenient_number")]
    pub range_km: f64,
    /// Route distance; the placeholder distance is used when absent
    #[serde(deserialize_with = "lenient_optional_number")]
    pub distance_km: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripPlan {
    pub origin: String,
    pub destination: String,
    pub vehicle: String,
    pub distance_km: f64,
    pub range_km: f64,
    pub stops: u32,
}

/// Charging stops needed to cover `distance_km`: `max(0, ceil(d / r) - 1)`.
pub fn required_stops(distance_km: f64, range_km: f64) -> u32 {
    if !(range_km.is_finite() && range_km > 0.0) || !distance_km.is_finite() || distance_km <= 0.0
    {
        return 0;
    }
    let legs = (distance_km / range_km).ceil();
    (legs - 1.0).clamp(0.0, u32::MAX as f64) as u32
}

impl TripPlannerForm {
    pub fn plan(&self) -> Result<TripPlan, ValidationError> {
        let origin = required(&self.origin, "starting point")?;
        let destination = required(&self.destination, "destination")?;
        let vehicle = self.vehicle.trim();
        if vehicle.is_empty() {
            return Err(ValidationError::MissingVehicle);
        }
        if !(self.range_km.is_finite() && self.range_km > 0.0) {
            return Err(ValidationError::InvalidRange);
        }

        let distance_km = self
            .distance_km
            .filter(|d| d.is_finite() && *d > 0.0)
            .unwrap_or(TRIP_PLACEHOLDER_DISTANCE_KM);

        Ok(TripPlan {
            origin: origin.to_string(),
            destination: destination.to_string(),
            vehicle: vehicle.to_string(),
            distance_km,
            range_km: self.range_km,
            stops: required_stops(distance_km, self.range_km),
        })
    }
}

/// Validate a trip request and describe the plan, or why there is none.
pub fn plan_trip(form: &TripPlannerForm) -> (FormStatus, Option<TripPlan>) {
    match form.plan() {
        Ok(plan) => {
            let stops = match plan.stops {
                0 => "no charging stops".to_string(),
                1 => "1 charging stop".to_string(),
                n => format!("{n} charging stops"),
            };
            let message = format!(
                "{} to {} in the {}: about {} km with {}.",
                plan.origin, plan.destination, plan.vehicle, plan.distance_km, stops
            );
            (FormStatus::success(message), Some(plan))
        }
        Err(e) => (e.into(), None),
    }
}
