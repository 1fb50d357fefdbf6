use std::fmt;

use chrono::{DateTime, Utc};

use crate::clock::TimeSource;

/// How often the page should resample the clock while the countdown is on screen
pub const TICK_INTERVAL_MS: u32 = 1_000;

pub const COUNTDOWN_LABELS: [&str; 4] = ["Days", "Hours", "Minutes", "Seconds"];

const SECS_PER_MINUTE: u64 = 60;
const SECS_PER_HOUR: u64 = 60 * SECS_PER_MINUTE;
const SECS_PER_DAY: u64 = 24 * SECS_PER_HOUR;

/// Whole days, hours, minutes and seconds left until the target.
///
/// Anything at or past the target is `Remaining::ZERO`; we never go negative and never wrap
/// around to counting up.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Remaining {
	pub days: u64,
	pub hours: u8,
	pub minutes: u8,
	pub seconds: u8
}

impl Remaining {
	pub const ZERO: Self = Self { days: 0, hours: 0, minutes: 0, seconds: 0 };

	// the casts below are fine since each field is reduced modulo something below 256
	#[must_use]
	#[allow(clippy::cast_possible_truncation)]
	pub fn from_millis(millis: i64) -> Self {
		// `try_from` only fails on negative values, which all saturate to zero
		let Ok(millis) = u64::try_from(millis) else {
			return Self::ZERO;
		};

		let total = millis / 1_000;

		Self {
			days: total / SECS_PER_DAY,
			hours: ((total % SECS_PER_DAY) / SECS_PER_HOUR) as u8,
			minutes: ((total % SECS_PER_HOUR) / SECS_PER_MINUTE) as u8,
			seconds: (total % SECS_PER_MINUTE) as u8
		}
	}

	#[must_use]
	pub fn between(target: DateTime<Utc>, now: DateTime<Utc>) -> Self {
		Self::from_millis((target - now).num_milliseconds())
	}

	#[must_use]
	pub fn total_seconds(&self) -> u64 {
		self.days * SECS_PER_DAY
			+ u64::from(self.hours) * SECS_PER_HOUR
			+ u64::from(self.minutes) * SECS_PER_MINUTE
			+ u64::from(self.seconds)
	}

	#[must_use]
	pub fn is_zero(&self) -> bool {
		*self == Self::ZERO
	}

	/// Each field padded to at least two digits, in days/hours/minutes/seconds order. Days aren't
	/// truncated, so 123 days stays "123".
	#[must_use]
	pub fn segments(&self) -> [String; 4] {
		[
			format!("{:02}", self.days),
			format!("{:02}", self.hours),
			format!("{:02}", self.minutes),
			format!("{:02}", self.seconds),
		]
	}

	/// The segments, each paired with the unit it counts
	#[must_use]
	pub fn labelled(&self) -> [(String, &'static str); 4] {
		let [d, h, m, s] = self.segments();
		let [dl, hl, ml, sl] = COUNTDOWN_LABELS;
		[(d, dl), (h, hl), (m, ml), (s, sl)]
	}
}

impl fmt::Display for Remaining {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let [d, h, m, s] = self.segments();
		write!(f, "{d}:{h}:{m}:{s}")
	}
}

/// Counts down to a fixed instant, sampling `C` whenever it's ticked.
///
/// The only thing kept between ticks is the most recent clock sample; everything else is derived
/// from it on demand.
#[derive(Debug)]
pub struct Countdown<C> {
	target: DateTime<Utc>,
	clock: C,
	sample: DateTime<Utc>
}

impl<C: TimeSource> Countdown<C> {
	pub fn new(target: DateTime<Utc>, clock: C) -> Self {
		let sample = clock.now();
		Self { target, clock, sample }
	}

	/// Resample the clock and recompute.
	pub fn tick(&mut self) -> Remaining {
		self.sample = self.clock.now();
		self.remaining()
	}

	#[must_use]
	pub fn remaining(&self) -> Remaining {
		Remaining::between(self.target, self.sample)
	}

	#[must_use]
	pub fn target(&self) -> DateTime<Utc> {
		self.target
	}

	#[must_use]
	pub fn last_sample(&self) -> DateTime<Utc> {
		self.sample
	}

	#[must_use]
	pub fn is_finished(&self) -> bool {
		self.sample >= self.target
	}
}
