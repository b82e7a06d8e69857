//! Launch countdown: remaining-time decomposition and the tick state machine.
//!
//! The countdown never touches the page directly. Each tick writes into a
//! [`CountdownView`], so the browser component and the tests drive the same
//! logic.

use chrono::{Local, NaiveDateTime, TimeZone};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SharedError};

pub const SECOND_MS: i64 = 1_000;
pub const MINUTE_MS: i64 = 60 * SECOND_MS;
pub const HOUR_MS: i64 = 60 * MINUTE_MS;
pub const DAY_MS: i64 = 24 * HOUR_MS;

/// Period of the recurring display refresh.
pub const TICK_INTERVAL_MS: u32 = 1_000;

/// Format accepted for configured target instants, interpreted in local time.
pub const TARGET_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

pub const ARRIVED_MESSAGE: &str = "¡Hora de presentar! Suerte 🍀";

/// Fixed point in time the countdown runs to, in epoch milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TargetInstant(i64);

impl TargetInstant {
    pub fn from_millis(epoch_ms: i64) -> Self {
        Self(epoch_ms)
    }

    pub fn as_millis(self) -> i64 {
        self.0
    }

    /// Parses `YYYY-MM-DDTHH:MM:SS` as a wall-clock time in the local zone.
    pub fn from_local_str(value: &str) -> Result<Self> {
        let naive = NaiveDateTime::parse_from_str(value.trim(), TARGET_FORMAT).map_err(|e| {
            SharedError::InvalidTargetInstant {
                value: value.to_string(),
                reason: e.to_string(),
            }
        })?;
        Self::from_naive_local(naive).ok_or_else(|| SharedError::InvalidTargetInstant {
            value: value.to_string(),
            reason: "time does not exist in the local timezone".to_string(),
        })
    }

    /// Ambiguous local times (DST fall-back) resolve to the earlier instant.
    pub fn from_naive_local(naive: NaiveDateTime) -> Option<Self> {
        Local
            .from_local_datetime(&naive)
            .earliest()
            .map(|dt| Self(dt.timestamp_millis()))
    }

    pub fn distance_from(self, now_ms: i64) -> i64 {
        self.0 - now_ms
    }
}

/// One of the four digit groups on the countdown face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Days,
    Hours,
    Minutes,
    Seconds,
}

impl Slot {
    pub const ALL: [Slot; 4] = [Slot::Days, Slot::Hours, Slot::Minutes, Slot::Seconds];

    pub fn element_id(self) -> &'static str {
        match self {
            Slot::Days => "days",
            Slot::Hours => "hours",
            Slot::Minutes => "minutes",
            Slot::Seconds => "seconds",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Slot::Days => "Días",
            Slot::Hours => "Horas",
            Slot::Minutes => "Minutos",
            Slot::Seconds => "Segundos",
        }
    }

    fn index(self) -> usize {
        match self {
            Slot::Days => 0,
            Slot::Hours => 1,
            Slot::Minutes => 2,
            Slot::Seconds => 3,
        }
    }
}

/// Remaining time split into whole days, hours, minutes and seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Remaining {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Remaining {
    /// Returns `None` for negative distances; sub-second remainders are dropped.
    pub fn from_distance(distance_ms: i64) -> Option<Self> {
        if distance_ms < 0 {
            return None;
        }
        Some(Self {
            days: distance_ms / DAY_MS,
            hours: (distance_ms % DAY_MS) / HOUR_MS,
            minutes: (distance_ms % HOUR_MS) / MINUTE_MS,
            seconds: (distance_ms % MINUTE_MS) / SECOND_MS,
        })
    }

    pub fn as_millis(&self) -> i64 {
        self.days * DAY_MS + self.hours * HOUR_MS + self.minutes * MINUTE_MS + self.seconds * SECOND_MS
    }

    pub fn value(&self, slot: Slot) -> i64 {
        match slot {
            Slot::Days => self.days,
            Slot::Hours => self.hours,
            Slot::Minutes => self.minutes,
            Slot::Seconds => self.seconds,
        }
    }
}

/// Two-character display form: single digits get a leading zero, everything
/// else is rendered unchanged (so days can run to three digits).
pub fn pad2(value: i64) -> String {
    if value < 10 {
        format!("0{}", value)
    } else {
        value.to_string()
    }
}

/// Display surface the countdown writes to. Implementations skip slots they
/// do not have.
pub trait CountdownView {
    fn set_slot(&mut self, slot: Slot, text: &str);
    fn show_arrived(&mut self, message: &str);
}

/// In-memory countdown face. The Yew component renders from it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountdownFace {
    digits: [Option<String>; 4],
    arrived: Option<String>,
}

impl CountdownFace {
    pub fn digit(&self, slot: Slot) -> Option<&str> {
        self.digits[slot.index()].as_deref()
    }

    /// Digit text or the `--` placeholder shown before the first tick.
    pub fn digit_or_placeholder(&self, slot: Slot) -> &str {
        self.digit(slot).unwrap_or("--")
    }

    pub fn arrived_message(&self) -> Option<&str> {
        self.arrived.as_deref()
    }
}

impl CountdownView for CountdownFace {
    fn set_slot(&mut self, slot: Slot, text: &str) {
        self.digits[slot.index()] = Some(text.to_string());
    }

    fn show_arrived(&mut self, message: &str) {
        self.arrived = Some(message.to_string());
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Display refreshed with the remaining time.
    Running(Remaining),
    /// Target reached on this tick; the arrived message was rendered.
    Arrived,
    /// Countdown already finished or stopped; nothing was touched.
    Inert,
}

#[derive(Debug, Clone)]
pub struct Countdown {
    target: TargetInstant,
    arrived_message: String,
    finished: bool,
}

impl Countdown {
    pub fn new(target: TargetInstant) -> Self {
        Self {
            target,
            arrived_message: ARRIVED_MESSAGE.to_string(),
            finished: false,
        }
    }

    pub fn with_arrived_message(mut self, message: impl Into<String>) -> Self {
        self.arrived_message = message.into();
        self
    }

    pub fn target(&self) -> TargetInstant {
        self.target
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Makes every later tick inert without rendering the arrived message.
    pub fn stop(&mut self) {
        self.finished = true;
    }

    pub fn tick<V: CountdownView + ?Sized>(&mut self, now_ms: i64, view: &mut V) -> TickOutcome {
        if self.finished {
            return TickOutcome::Inert;
        }

        let distance = self.target.distance_from(now_ms);
        let remaining = match Remaining::from_distance(distance) {
            Some(remaining) if distance > 0 => remaining,
            _ => {
                debug!("Countdown reached target {}", self.target.as_millis());
                self.finished = true;
                view.show_arrived(&self.arrived_message);
                return TickOutcome::Arrived;
            }
        };

        for slot in Slot::ALL {
            view.set_slot(slot, &pad2(remaining.value(slot)));
        }
        TickOutcome::Running(remaining)
    }
}
