//! Household water usage data model.
//!
//! Volumes are in gallons, flow rates in gallons per minute (GPM) and bills
//! in dollars.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

/// Running totals for the current day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyStats {
    /// Gallons consumed today.
    pub used: f64,
    /// Daily consumption target in gallons.
    pub goal: f64,
    /// Projected bill for the current period.
    pub projected_bill: f64,
    /// Average bill for comparable periods.
    pub average_bill: f64,
}

impl DailyStats {
    /// Share of the daily goal already consumed, as a percentage in `[0, 100]`.
    pub fn fill_percent(&self) -> f64 {
        if self.goal <= 0.0 {
            return 0.0;
        }
        (self.used / self.goal * 100.0).clamp(0.0, 100.0)
    }

    /// How far the projected bill sits above (positive) or below the average.
    pub fn bill_delta(&self) -> f64 {
        self.projected_bill - self.average_bill
    }
}

impl Default for DailyStats {
    fn default() -> Self {
        Self {
            used: 42.5,
            goal: 80.0,
            projected_bill: 55.20,
            average_bill: 45.00,
        }
    }
}

/// Icon tag shown next to a feed entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventIcon {
    Shower,
    Toilet,
    Dishwasher,
    Tap,
}

/// A completed water-use event in the feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterEvent {
    /// Unique, strictly increasing identifier.
    pub id: u64,
    /// Unix epoch milliseconds when the event was recorded.
    pub timestamp_ms: i64,
    /// Appliance that used the water.
    pub appliance: String,
    /// Gallons used.
    pub volume: f64,
    /// Feed icon.
    pub icon: EventIcon,
}

/// An in-progress simulated flow.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveFlow {
    pub appliance: &'static str,
    /// Flow rate in GPM.
    pub rate: f64,
}

/// A suspected silent leak tracked by the Ghost Hunter.
#[derive(Debug, Clone, PartialEq)]
pub struct GhostLeak {
    /// Estimated gallons lost so far.
    pub wasted: f64,
    /// Time since the leak was first suspected.
    pub duration: Duration,
}

impl GhostLeak {
    /// Whole seconds since the leak was first suspected.
    pub fn duration_secs(&self) -> u64 {
        self.duration.as_secs()
    }
}

/// A transient toast message.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub text: String,
    /// Time until the toast clears itself.
    pub remaining: Duration,
}

/// A fixed appliance the simulation can start.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Appliance {
    pub name: &'static str,
    /// Flow rate in GPM.
    pub rate: f64,
}

/// Appliances the simulation picks from, uniformly.
pub const APPLIANCES: [Appliance; 4] = [
    Appliance {
        name: "Kitchen Sink",
        rate: 1.5,
    },
    Appliance {
        name: "Garden Hose",
        rate: 5.0,
    },
    Appliance {
        name: "Toilet Flush",
        rate: 2.0,
    },
    Appliance {
        name: "Shower",
        rate: 2.5,
    },
];

/// Consumption for one day of the week.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayUsage {
    pub day: &'static str,
    pub gallons: f64,
}

/// Days above this many gallons are highlighted on the weekly chart.
pub const HIGH_USAGE_GALLONS: f64 = 60.0;

/// Weekly consumption shown on the dashboard chart.
pub const WEEKLY_USAGE: [DayUsage; 7] = [
    DayUsage { day: "Mon", gallons: 45.0 },
    DayUsage { day: "Tue", gallons: 52.0 },
    DayUsage { day: "Wed", gallons: 38.0 },
    DayUsage { day: "Thu", gallons: 65.0 },
    DayUsage { day: "Fri", gallons: 48.0 },
    DayUsage { day: "Sat", gallons: 70.0 },
    DayUsage { day: "Sun", gallons: 55.0 },
];

impl DayUsage {
    /// Whether this day exceeded the high-usage mark.
    pub fn is_high(&self) -> bool {
        self.gallons > HIGH_USAGE_GALLONS
    }
}

/// Get the current Unix timestamp in milliseconds.
pub fn current_timestamp_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_percent() {
        let stats = DailyStats::default();
        assert!((stats.fill_percent() - 53.125).abs() < 1e-9);

        let over = DailyStats {
            used: 120.0,
            ..DailyStats::default()
        };
        assert_eq!(over.fill_percent(), 100.0);

        let no_goal = DailyStats {
            goal: 0.0,
            ..DailyStats::default()
        };
        assert_eq!(no_goal.fill_percent(), 0.0);
    }

    #[test]
    fn test_bill_delta() {
        let stats = DailyStats::default();
        assert!((stats.bill_delta() - 10.2).abs() < 1e-9);
    }

    #[test]
    fn test_weekly_high_usage() {
        let high: Vec<_> = WEEKLY_USAGE
            .iter()
            .filter(|d| d.is_high())
            .map(|d| d.day)
            .collect();
        assert_eq!(high, vec!["Thu", "Sat"]);
    }
}
