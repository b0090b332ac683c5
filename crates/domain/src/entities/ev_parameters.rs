//! Electric vehicle parameters
//!
//! EV parameters are used for calculating consumption and for calculating
//! EV routes with automatically added charging stations.
//!
//! Required for consumption: `free_flow_speed_table`, `ascent`, `descent`.
//! Additionally required for reachable routes: `initial_charge`,
//! `max_charge`, `charging_curve`, `max_charge_after_charging_station` and
//! `make_reachable` set to `true`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CurveError;

/// A piecewise function encoded as `x0,y0,x1,y1,...,xN,yN`
///
/// Speed tables are linearly interpolated between points; charging curves
/// are piecewise constant. In both cases the `x` values must be strictly
/// increasing and every value must be non-negative.
#[derive(Debug, Clone, PartialEq)]
pub struct ConsumptionCurve {
    points: Vec<(f64, f64)>,
}

impl ConsumptionCurve {
    /// Build a curve from `(x, y)` points
    ///
    /// # Errors
    ///
    /// Returns a [`CurveError`] when the curve is empty, contains a
    /// non-finite or negative value, or `x` is not strictly increasing.
    pub fn new(points: Vec<(f64, f64)>) -> Result<Self, CurveError> {
        if points.is_empty() {
            return Err(CurveError::Empty);
        }

        if let Some(index) = points
            .iter()
            .position(|&(x, y)| !x.is_finite() || !y.is_finite() || x < 0.0 || y < 0.0)
        {
            return Err(CurveError::InvalidValue { index });
        }

        for (i, pair) in points.windows(2).enumerate() {
            let (previous, value) = (pair[0].0, pair[1].0);
            if value <= previous {
                return Err(CurveError::NotIncreasing {
                    index: i + 1,
                    value,
                    previous,
                });
            }
        }

        Ok(Self { points })
    }

    /// The validated data points
    #[must_use]
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }
}

impl fmt::Display for ConsumptionCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (x, y)) in self.points.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{x},{y}")?;
        }
        Ok(())
    }
}

impl FromStr for ConsumptionCurve {
    type Err = CurveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = s
            .split(',')
            .map(|v| {
                v.trim()
                    .parse::<f64>()
                    .map_err(|_| CurveError::Malformed(format!("not a number: {v:?}")))
            })
            .collect::<Result<Vec<_>, _>>()?;

        if values.len() % 2 != 0 {
            return Err(CurveError::Malformed(format!(
                "expected pairs, got {} values",
                values.len()
            )));
        }

        Self::new(values.chunks_exact(2).map(|c| (c[0], c[1])).collect())
    }
}

impl From<ConsumptionCurve> for String {
    fn from(curve: ConsumptionCurve) -> Self {
        curve.to_string()
    }
}

/// EV parameter block of a route request
///
/// **Note on `make_reachable`:** the service only honours it when
/// `transportMode=car`, `routingMode=fast`, no `avoid` options and no
/// `alternatives` are requested. These conditions are not checked locally;
/// the service reports violations in its response.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvParameters {
    /// Consumption rate (Wh/m) at a given free flow speed (km/h) on flat road
    pub free_flow_speed_table: String,
    /// Consumption rate at a given traffic-reduced speed, same format
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub traffic_speed_table: Option<String>,
    /// Energy consumed per meter of ascent (Wh/m)
    pub ascent: f32,
    /// Energy recovered per meter of descent (Wh/m)
    pub descent: f32,
    /// Auxiliary consumption (Wh/s)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auxiliary_consumption: Option<f32>,
    /// Battery charge at departure (kWh), at most `max_charge`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_charge: Option<f32>,
    /// Battery capacity (kWh)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_charge: Option<f32>,
    /// Maximum charging rate (kW) by charge level (kWh), piecewise constant
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub charging_curve: Option<String>,
    /// Maximum charging voltage (V)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_charging_voltage: Option<f32>,
    /// Maximum charging current (A)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_charging_current: Option<f32>,
    /// Charge level to stop charging at (kWh)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_charge_after_charging_station: Option<f32>,
    /// Minimum charge on arrival at a charging station (kWh)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_charge_at_charging_station: Option<f32>,
    /// Minimum charge at the final destination (kWh)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_charge_at_destination: Option<f32>,
    /// Time spent at a charging station before charging starts (seconds)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub charging_setup_duration: Option<u32>,
    /// Insert charging stations so the route stays reachable
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub make_reachable: bool,
}

impl EvParameters {
    /// Create the minimal parameter set needed for consumption calculation
    #[must_use]
    pub fn new(free_flow_speed_table: impl Into<String>, ascent: f32, descent: f32) -> Self {
        Self {
            free_flow_speed_table: free_flow_speed_table.into(),
            ascent,
            descent,
            ..Default::default()
        }
    }

    /// Set the traffic speed table
    #[must_use]
    pub fn with_traffic_speed_table(mut self, table: impl Into<String>) -> Self {
        self.traffic_speed_table = Some(table.into());
        self
    }

    /// Set the auxiliary consumption
    #[must_use]
    pub const fn with_auxiliary_consumption(mut self, wh_per_sec: f32) -> Self {
        self.auxiliary_consumption = Some(wh_per_sec);
        self
    }

    /// Set battery bounds: charge at departure and capacity
    #[must_use]
    pub const fn with_battery(mut self, initial_charge: f32, max_charge: f32) -> Self {
        self.initial_charge = Some(initial_charge);
        self.max_charge = Some(max_charge);
        self
    }

    /// Set the charging curve
    #[must_use]
    pub fn with_charging_curve(mut self, curve: impl Into<String>) -> Self {
        self.charging_curve = Some(curve.into());
        self
    }

    /// Set the supported charging voltage and current
    #[must_use]
    pub const fn with_charging_limits(mut self, voltage: f32, current: f32) -> Self {
        self.max_charging_voltage = Some(voltage);
        self.max_charging_current = Some(current);
        self
    }

    /// Set charge thresholds around charging stops and at the destination
    #[must_use]
    pub const fn with_charge_thresholds(
        mut self,
        max_after_station: f32,
        min_at_station: f32,
        min_at_destination: f32,
    ) -> Self {
        self.max_charge_after_charging_station = Some(max_after_station);
        self.min_charge_at_charging_station = Some(min_at_station);
        self.min_charge_at_destination = Some(min_at_destination);
        self
    }

    /// Set the charging setup duration in seconds
    #[must_use]
    pub const fn with_charging_setup_duration(mut self, secs: u32) -> Self {
        self.charging_setup_duration = Some(secs);
        self
    }

    /// Request automatic insertion of charging stops
    #[must_use]
    pub const fn make_reachable(mut self) -> Self {
        self.make_reachable = true;
        self
    }

    /// Query parameters in `ev[<name>]` form, for every field that is set
    #[must_use]
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let optional_floats = [
            ("ev[auxiliaryConsumption]", self.auxiliary_consumption),
            ("ev[initialCharge]", self.initial_charge),
            ("ev[maxCharge]", self.max_charge),
            ("ev[maxChargingVoltage]", self.max_charging_voltage),
            ("ev[maxChargingCurrent]", self.max_charging_current),
            (
                "ev[maxChargeAfterChargingStation]",
                self.max_charge_after_charging_station,
            ),
            (
                "ev[minChargeAtChargingStation]",
                self.min_charge_at_charging_station,
            ),
            ("ev[minChargeAtDestination]", self.min_charge_at_destination),
        ];

        let mut pairs = vec![
            ("ev[freeFlowSpeedTable]", self.free_flow_speed_table.clone()),
            ("ev[ascent]", self.ascent.to_string()),
            ("ev[descent]", self.descent.to_string()),
        ];
        if let Some(table) = &self.traffic_speed_table {
            pairs.push(("ev[trafficSpeedTable]", table.clone()));
        }
        if let Some(curve) = &self.charging_curve {
            pairs.push(("ev[chargingCurve]", curve.clone()));
        }
        pairs.extend(
            optional_floats
                .into_iter()
                .filter_map(|(key, value)| value.map(|v| (key, v.to_string()))),
        );
        if let Some(secs) = self.charging_setup_duration {
            pairs.push(("ev[chargingSetupDuration]", secs.to_string()));
        }
        if self.make_reachable {
            pairs.push(("ev[makeReachable]", "true".to_string()));
        }
        pairs
    }
}
