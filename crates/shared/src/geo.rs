//! Great-circle helpers behind the service-area map.

use serde::{Deserialize, Serialize};

pub const EARTH_RADIUS_KM: f64 = 6371.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub fn new(name: impl Into<String>, lat: f64, lng: f64) -> Self {
        Self {
            name: name.into(),
            lat,
            lng,
        }
    }
}

/// A line drawn from a market to the office serving it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Connector {
    pub from: Location,
    pub to: Location,
    pub distance_km: f64,
}

/// Haversine distance in kilometres.
pub fn haversine_km(a: &Location, b: &Location) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lng / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_KM * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Closest candidate to `point`. Ties keep the earliest candidate.
pub fn nearest<'a>(point: &Location, candidates: &'a [Location]) -> Option<(&'a Location, f64)> {
    candidates
        .iter()
        .map(|candidate| (candidate, haversine_km(point, candidate)))
        .fold(None, |best, (candidate, distance)| match best {
            Some((_, best_distance)) if best_distance <= distance => best,
            _ => Some((candidate, distance)),
        })
}

pub fn connectors(offices: &[Location], markets: &[Location]) -> Vec<Connector> {
    markets
        .iter()
        .filter_map(|market| {
            nearest(market, offices).map(|(office, distance_km)| Connector {
                from: market.clone(),
                to: office.clone(),
                distance_km,
            })
        })
        .collect()
}
