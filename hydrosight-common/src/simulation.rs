//! Household water simulation.
//!
//! All simulated state lives in [`HomeState`] and only changes through
//! [`tick`], a pure transition driven by an injectable random source. The
//! [`Simulator`] owns the state, its random source and the leak sensitivity,
//! and is what the application drives once per timer tick.
//!
//! Every random decision is a single uniform draw in `[0, 1)`, compared
//! against a fixed threshold, so a scripted source reproduces any scenario.
//! Chances are per tick; volumes and clocks scale with the tick's elapsed time.

use std::time::Duration;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::config::SimulationConfig;
use crate::usage::{
    APPLIANCES, ActiveFlow, DailyStats, EventIcon, GhostLeak, Notification, WaterEvent,
};

/// A draw above this starts a flow (about 15% per idle tick).
pub const FLOW_START_THRESHOLD: f64 = 0.85;
/// A draw above this ends the active flow (about 20% per tick).
pub const FLOW_STOP_THRESHOLD: f64 = 0.8;
/// A draw above this clears the suspected leak (about 10% per tick).
pub const LEAK_CLEAR_THRESHOLD: f64 = 0.9;
/// Leak start threshold at sensitivity 0.
pub const LEAK_BASE_THRESHOLD: f64 = 0.995;
/// How far full sensitivity lowers the leak start threshold.
pub const LEAK_SENSITIVITY_SPAN: f64 = 0.09;
/// Gallons a suspected leak wastes per second.
///
/// Illustrative only: roughly a 0.12 GPM drip.
pub const DRIP_GALLONS_PER_SECOND: f64 = 0.002;
/// Gallons already attributed to a leak when it is first suspected.
pub const LEAK_INITIAL_WASTE: f64 = 0.05;
/// Largest volume, in gallons, logged for a completed flow.
pub const MAX_EVENT_VOLUME: u32 = 5;
/// How long the shower toast stays up.
pub const NOTIFICATION_LIFETIME: Duration = Duration::from_secs(5);
/// Simulation tick period unless configured otherwise.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_secs(1);

const SHOWER: &str = "Shower";
const SHOWER_NOTIFICATION: &str = "Shower started! Playing 'Eco-Jams' playlist on Hue speakers.";

/// Ghost Hunter sensitivity, from 0 (conservative) to 100 (aggressive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LeakSensitivity(u8);

impl LeakSensitivity {
    pub const MIN: u8 = 0;
    pub const MAX: u8 = 100;
    pub const DEFAULT: u8 = 75;

    /// Create a sensitivity, clamping to `0..=100`.
    pub fn new(value: u8) -> Self {
        Self(value.min(Self::MAX))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Draw threshold above which a leak starts.
    ///
    /// Higher sensitivity lowers the threshold: 0 gives 0.995, 100 gives 0.905.
    pub fn threshold(self) -> f64 {
        LEAK_BASE_THRESHOLD - LEAK_SENSITIVITY_SPAN * (f64::from(self.0) / 100.0)
    }

    /// Chance that an idle tick starts a leak.
    pub fn trigger_probability(self) -> f64 {
        1.0 - self.threshold()
    }
}

impl Default for LeakSensitivity {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl std::fmt::Display for LeakSensitivity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Per-tick inputs that do not come from the random source.
#[derive(Debug, Clone, Copy)]
pub struct TickInput {
    /// Wall clock in Unix epoch milliseconds, used to stamp new events.
    pub now_ms: i64,
    /// Simulated time covered by this tick.
    pub elapsed: Duration,
    /// Current Ghost Hunter sensitivity.
    pub sensitivity: LeakSensitivity,
}

/// Complete simulated household state.
#[derive(Debug, Clone, PartialEq)]
pub struct HomeState {
    /// Today's running totals.
    pub stats: DailyStats,
    /// Completed events, newest first.
    pub events: Vec<WaterEvent>,
    /// The flow in progress, if any.
    pub active_flow: Option<ActiveFlow>,
    /// The suspected leak, if any.
    pub ghost_leak: Option<GhostLeak>,
    /// Toast currently on screen, if any.
    pub notification: Option<Notification>,
    /// Number of ticks applied so far.
    pub ticks: u64,
    next_event_id: u64,
}

impl HomeState {
    /// A quiet household with no history.
    pub fn empty(stats: DailyStats) -> Self {
        Self {
            stats,
            events: Vec::new(),
            active_flow: None,
            ghost_leak: None,
            notification: None,
            ticks: 0,
            next_event_id: 1,
        }
    }

    /// The startup household: default stats plus this morning's feed.
    pub fn seeded(now_ms: i64) -> Self {
        const MINUTE_MS: i64 = 60_000;
        let history = [
            ("Dishwasher", 4.5, EventIcon::Dishwasher, 120),
            ("Guest Toilet", 1.6, EventIcon::Toilet, 45),
            ("Master Shower", 14.2, EventIcon::Shower, 15),
        ];

        let mut state = Self::empty(DailyStats::default());
        for (appliance, volume, icon, minutes_ago) in history {
            state.record_event(
                now_ms - minutes_ago * MINUTE_MS,
                appliance.to_string(),
                volume,
                icon,
            );
        }
        state
    }

    /// Start a flow directly, bypassing the random start.
    pub fn with_flow(mut self, appliance: &'static str, rate: f64) -> Self {
        self.active_flow = Some(ActiveFlow { appliance, rate });
        self
    }

    /// Start a suspected leak directly, bypassing the random start.
    pub fn with_leak(mut self, wasted: f64, duration_secs: u64) -> Self {
        self.ghost_leak = Some(GhostLeak {
            wasted,
            duration: Duration::from_secs(duration_secs),
        });
        self
    }

    /// Whether water is currently flowing.
    pub fn is_flowing(&self) -> bool {
        self.active_flow.is_some()
    }

    /// Whether the Ghost Hunter currently suspects a leak.
    pub fn leak_suspected(&self) -> bool {
        self.ghost_leak.is_some()
    }

    fn record_event(&mut self, timestamp_ms: i64, appliance: String, volume: f64, icon: EventIcon) {
        let event = WaterEvent {
            id: self.next_event_id,
            timestamp_ms,
            appliance,
            volume,
            icon,
        };
        self.next_event_id += 1;
        self.events.insert(0, event);
    }

    fn advance_notification(&mut self, elapsed: Duration) {
        if let Some(notification) = self.notification.as_mut() {
            notification.remaining = notification.remaining.saturating_sub(elapsed);
            if notification.remaining.is_zero() {
                self.notification = None;
            }
        }
    }

    fn advance_flow<R: Rng + ?Sized>(&mut self, input: &TickInput, rng: &mut R) {
        match self.active_flow.take() {
            None => {
                if rng.random::<f64>() > FLOW_START_THRESHOLD {
                    let pick = (rng.random::<f64>() * APPLIANCES.len() as f64) as usize;
                    let appliance = APPLIANCES[pick.min(APPLIANCES.len() - 1)];
                    tracing::debug!(appliance = appliance.name, rate = appliance.rate, "Flow started");

                    if appliance.name == SHOWER {
                        self.notification = Some(Notification {
                            text: SHOWER_NOTIFICATION.to_string(),
                            remaining: NOTIFICATION_LIFETIME,
                        });
                    }

                    self.active_flow = Some(ActiveFlow {
                        appliance: appliance.name,
                        rate: appliance.rate,
                    });
                }
            }
            Some(flow) => {
                self.stats.used += flow.rate / 60.0 * input.elapsed.as_secs_f64();

                if rng.random::<f64>() > FLOW_STOP_THRESHOLD {
                    let volume = (rng.random::<f64>() * f64::from(MAX_EVENT_VOLUME)).floor() + 1.0;
                    let volume = volume.min(f64::from(MAX_EVENT_VOLUME));
                    tracing::debug!(appliance = flow.appliance, volume, "Flow ended");
                    self.record_event(input.now_ms, flow.appliance.to_string(), volume, EventIcon::Tap);
                } else {
                    self.active_flow = Some(flow);
                }
            }
        }
    }

    fn advance_leak<R: Rng + ?Sized>(&mut self, input: &TickInput, rng: &mut R) {
        let sensitivity = input.sensitivity;
        match self.ghost_leak.as_mut() {
            None => {
                if rng.random::<f64>() > sensitivity.threshold() {
                    tracing::warn!(sensitivity = sensitivity.value(), "Ghost Hunter suspects a leak");
                    self.ghost_leak = Some(GhostLeak {
                        wasted: LEAK_INITIAL_WASTE,
                        duration: Duration::ZERO,
                    });
                }
            }
            Some(leak) => {
                leak.wasted += DRIP_GALLONS_PER_SECOND * input.elapsed.as_secs_f64();
                leak.duration += input.elapsed;

                if rng.random::<f64>() > LEAK_CLEAR_THRESHOLD {
                    tracing::info!(
                        wasted = leak.wasted,
                        duration_secs = leak.duration_secs(),
                        "Suspected leak cleared"
                    );
                    self.ghost_leak = None;
                }
            }
        }
    }
}

/// Advance the household by one tick.
///
/// Order within a tick: the toast clock, then the flow update, then the leak
/// update. Flow and leak updates are independent of each other.
pub fn tick<R: Rng + ?Sized>(state: &HomeState, input: &TickInput, rng: &mut R) -> HomeState {
    let mut next = state.clone();
    next.ticks += 1;
    next.advance_notification(input.elapsed);
    next.advance_flow(input, rng);
    next.advance_leak(input, rng);
    next
}

/// Owner of the simulated household.
///
/// The application holds one simulator and reads state through [`Simulator::state`];
/// the state is only replaced by [`tick`].
#[derive(Debug)]
pub struct Simulator<R = SmallRng> {
    state: HomeState,
    rng: R,
    sensitivity: LeakSensitivity,
    tick_interval: Duration,
}

impl Simulator<SmallRng> {
    /// Create a simulator from configuration, seeded household included.
    pub fn from_config(config: &SimulationConfig, now_ms: i64) -> Self {
        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        Self::new(HomeState::seeded(now_ms), rng, config.sensitivity())
            .with_tick_interval(config.tick_interval())
    }
}

impl<R: Rng> Simulator<R> {
    /// Create a simulator around an existing state and random source.
    pub fn new(state: HomeState, rng: R, sensitivity: LeakSensitivity) -> Self {
        Self {
            state,
            rng,
            sensitivity,
            tick_interval: DEFAULT_TICK_INTERVAL,
        }
    }

    /// Set the simulated time each [`Simulator::step`] covers.
    pub fn with_tick_interval(mut self, tick_interval: Duration) -> Self {
        self.tick_interval = tick_interval;
        self
    }

    /// Simulated time covered by each step.
    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    /// Current household state.
    pub fn state(&self) -> &HomeState {
        &self.state
    }

    /// Current Ghost Hunter sensitivity.
    pub fn sensitivity(&self) -> LeakSensitivity {
        self.sensitivity
    }

    /// Change the Ghost Hunter sensitivity for subsequent ticks.
    pub fn set_sensitivity(&mut self, sensitivity: LeakSensitivity) {
        if sensitivity != self.sensitivity {
            tracing::info!(
                from = self.sensitivity.value(),
                to = sensitivity.value(),
                "Leak sensitivity changed"
            );
            self.sensitivity = sensitivity;
        }
    }

    /// Apply one tick at the given wall-clock time.
    pub fn step(&mut self, now_ms: i64) -> &HomeState {
        let input = TickInput {
            now_ms,
            elapsed: self.tick_interval,
            sensitivity: self.sensitivity,
        };
        self.state = tick(&self.state, &input, &mut self.rng);
        &self.state
    }

    /// The random source, for presentation data generated alongside the simulation.
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }
}
