//! Trip distance and fuel-cost estimation over an assembled path.
//!
//! Distances are great-circle (haversine) sums over consecutive positions,
//! which estimates the drawn route rather than reproducing the provider's
//! road distances.

use geo::Coord;
use thiserror::Error;

/// Mean Earth radius in kilometres.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Default vehicle efficiency in kilometres per litre.
pub const DEFAULT_KM_PER_LITRE: f64 = 12.0;

/// Default fuel price per litre.
pub const DEFAULT_PRICE_PER_LITRE: f64 = 1250.0;

/// Vehicle efficiency and fuel price used by [`estimate_trip`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FuelParams {
    km_per_litre: f64,
    price_per_litre: f64,
}

/// Errors returned by [`FuelParams::new`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FuelParamsError {
    /// Efficiency must be a positive number of kilometres per litre.
    #[error("fuel efficiency must be positive")]
    NonPositiveEfficiency,
    /// The fuel price must be positive.
    #[error("fuel price must be positive")]
    NonPositivePrice,
}

impl Default for FuelParams {
    fn default() -> Self {
        Self {
            km_per_litre: DEFAULT_KM_PER_LITRE,
            price_per_litre: DEFAULT_PRICE_PER_LITRE,
        }
    }
}

impl FuelParams {
    /// Validate and construct fuel parameters.
    ///
    /// # Examples
    /// ```
    /// use lastmile_core::FuelParams;
    ///
    /// # fn main() -> Result<(), lastmile_core::FuelParamsError> {
    /// let params = FuelParams::new(10.0, 1400.0)?;
    /// assert_eq!(params.km_per_litre(), 10.0);
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(km_per_litre: f64, price_per_litre: f64) -> Result<Self, FuelParamsError> {
        if !km_per_litre.is_finite() || km_per_litre <= 0.0 {
            return Err(FuelParamsError::NonPositiveEfficiency);
        }
        if !price_per_litre.is_finite() || price_per_litre <= 0.0 {
            return Err(FuelParamsError::NonPositivePrice);
        }
        Ok(Self {
            km_per_litre,
            price_per_litre,
        })
    }

    /// Vehicle efficiency in kilometres per litre.
    #[must_use]
    pub fn km_per_litre(&self) -> f64 {
        self.km_per_litre
    }

    /// Fuel price per litre.
    #[must_use]
    pub fn price_per_litre(&self) -> f64 {
        self.price_per_litre
    }
}

/// Estimated distance, consumption, and cost for one trip.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TripEstimate {
    /// Great-circle path length in kilometres.
    pub distance_km: f64,
    /// Estimated fuel consumption in litres.
    pub fuel_litres: f64,
    /// Estimated fuel cost in the price's currency.
    pub fuel_cost: f64,
}

/// Estimate distance, fuel, and cost over a path of positions.
///
/// A path with fewer than two positions has zero distance and zero cost.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use lastmile_core::{FuelParams, estimate_trip};
///
/// let estimate = estimate_trip(&[], &FuelParams::default());
/// assert_eq!(estimate.distance_km, 0.0);
/// ```
#[must_use]
pub fn estimate_trip(path: &[Coord<f64>], params: &FuelParams) -> TripEstimate {
    let distance_km: f64 = path
        .windows(2)
        .map(|leg| match leg {
            [from, to] => haversine_km(*from, *to),
            _ => 0.0,
        })
        .sum();
    let fuel_litres = distance_km / params.km_per_litre;
    TripEstimate {
        distance_km,
        fuel_litres,
        fuel_cost: fuel_litres * params.price_per_litre,
    }
}

fn haversine_km(from: Coord<f64>, to: Coord<f64>) -> f64 {
    let (lat1, lat2) = (from.y.to_radians(), to.y.to_radians());
    let dlat = (to.y - from.y).to_radians();
    let dlng = (to.x - from.x).to_radians();
    let s1 = (dlat / 2.0).sin();
    let s2 = (dlng / 2.0).sin();
    let h = s1 * s1 + lat1.cos() * lat2.cos() * s2 * s2;
    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}
