//! Route summary shown in the route information panel

use std::fmt;

use serde::{Deserialize, Serialize};

/// Distance and travel time of the displayed route
///
/// Values are kept unrounded. The text accessors round the exact binary
/// value to two decimals, with exact ties going up, so `1005 m` (stored as
/// `1.00499..`) reads `"1.00"` while `125 m` reads `"0.13"`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RouteSummary {
    distance_km: f64,
    eta_minutes: f64,
}

impl RouteSummary {
    /// Build a summary from the routing service totals
    ///
    /// `total_distance_m` is in meters and `total_time_s` in seconds.
    /// Negative or non-finite totals are treated as zero.
    #[must_use]
    pub fn from_totals(total_distance_m: f64, total_time_s: f64) -> Self {
        let meters = sanitize(total_distance_m);
        let seconds = sanitize(total_time_s);

        Self {
            distance_km: meters / 1000.0,
            eta_minutes: seconds / 60.0,
        }
    }

    /// Distance in kilometers
    #[must_use]
    pub const fn distance_km(&self) -> f64 {
        self.distance_km
    }

    /// Estimated travel time in minutes
    #[must_use]
    pub const fn eta_minutes(&self) -> f64 {
        self.eta_minutes
    }

    /// Distance formatted with exactly two decimals, e.g. `"12.35"`
    #[must_use]
    pub fn distance_km_text(&self) -> String {
        to_fixed_2(self.distance_km)
    }

    /// Travel time formatted with exactly two decimals, e.g. `"15.50"`
    #[must_use]
    pub fn eta_minutes_text(&self) -> String {
        to_fixed_2(self.eta_minutes)
    }
}

fn sanitize(value: f64) -> f64 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}

/// Two-decimal text of a non-negative value
///
/// `{:.2}` already rounds the exact binary value but breaks exact ties to
/// even; ties are rounded up here instead.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_fixed_2(value: f64) -> String {
    let expansion = format!("{value:.40}");
    let is_tie = expansion
        .split_once('.')
        .is_some_and(|(_, digits)| digits[2..].starts_with('5') && digits[3..].bytes().all(|d| d == b'0'));

    if is_tie {
        let hundredths = (value * 100.0).floor() as u64 + 1;
        format!("{}.{:02}", hundredths / 100, hundredths % 100)
    } else {
        format!("{value:.2}")
    }
}

impl fmt::Display for RouteSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} km, {} min",
            self.distance_km_text(),
            self.eta_minutes_text()
        )
    }
}
