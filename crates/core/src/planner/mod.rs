//! Trip budget estimator.
//!
//! Rough per-trip cost arithmetic for the planning view: transport by
//! mode, food per head per day, accommodation per night, and a flat local
//! guide fee. All amounts are whole rupees.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Per-km transport rates (₹). Car and bike are whole-vehicle costs
/// shared by the group; bus fares are per person.
const CAR_RATE_PER_KM: u32 = 12;
const BIKE_RATE_PER_KM: u32 = 5;
const BUS_RATE_PER_KM: u32 = 2;

/// Average homestay cost per person per night (₹).
const STAY_RATE_PER_NIGHT: u32 = 800;

/// Flat local guide fee per trip (₹).
const GUIDE_FEE: u32 = 500;

/// How the group travels to the trailhead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportMode {
    Car,
    Bike,
    Bus,
}

/// Inputs to a trip estimate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripParams {
    /// Group size. Must be at least 1.
    pub participants: u32,
    /// One-way distance to the fort in km.
    pub distance_km: u32,
    pub transport: TransportMode,
    /// Nights spent near the fort. 0 for a day trek.
    #[serde(default)]
    pub stay_nights: u32,
    /// Food budget per person per day (₹).
    pub food_per_person: u32,
}

/// An estimated cost breakdown (₹).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripPlan {
    pub transport_cost: u32,
    pub food_cost: u32,
    pub stay_cost: u32,
    pub guide_cost: u32,
    pub total_cost: u32,
    pub participants: u32,
    pub per_person_cost: u32,
}

/// Errors for trip estimation.
#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("A trip needs at least one participant")]
    NoParticipants,
}

/// Estimate trip costs from the given parameters.
///
/// Pure arithmetic, no state. Distances are doubled for the round trip;
/// food covers the trek day plus each stay night.
pub fn estimate(params: &TripParams) -> Result<TripPlan, PlannerError> {
    if params.participants == 0 {
        return Err(PlannerError::NoParticipants);
    }

    let round_trip_km = params.distance_km * 2;
    let transport_cost = match params.transport {
        TransportMode::Car => round_trip_km * CAR_RATE_PER_KM,
        TransportMode::Bike => round_trip_km * BIKE_RATE_PER_KM,
        TransportMode::Bus => round_trip_km * BUS_RATE_PER_KM * params.participants,
    };

    let food_cost = params.food_per_person * params.participants * (params.stay_nights + 1);
    let stay_cost = params.stay_nights * STAY_RATE_PER_NIGHT * params.participants;
    let guide_cost = GUIDE_FEE;

    let total_cost = transport_cost + food_cost + stay_cost + guide_cost;

    Ok(TripPlan {
        transport_cost,
        food_cost,
        stay_cost,
        guide_cost,
        total_cost,
        participants: params.participants,
        per_person_cost: total_cost / params.participants,
    })
}
