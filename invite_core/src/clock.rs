use std::{cell::Cell, rc::Rc};

use chrono::{DateTime, TimeDelta, Utc};

/// Something that can tell us what time it is right now.
///
/// The countdown never reaches for the wall clock itself; it's handed one of these so tests (and
/// anyone who wants to preview the page as if it were a different day) can swap in a fixed clock.
pub trait TimeSource {
	fn now(&self) -> DateTime<Utc>;
}

/// The real wall clock. In the browser this ends up calling `Date.now()`, and it's not corrected
/// for the system clock jumping around.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SystemClock;

impl TimeSource for SystemClock {
	fn now(&self) -> DateTime<Utc> {
		Utc::now()
	}
}

/// A clock that only moves when told to.
#[derive(Debug)]
pub struct FixedClock {
	instant: Cell<DateTime<Utc>>
}

impl FixedClock {
	#[must_use]
	pub fn new(instant: DateTime<Utc>) -> Self {
		Self { instant: Cell::new(instant) }
	}

	pub fn set(&self, instant: DateTime<Utc>) {
		self.instant.set(instant);
	}

	// negative deltas are allowed so we can pretend the system clock got set backwards
	pub fn advance(&self, delta: TimeDelta) {
		self.instant.set(self.instant.get() + delta);
	}
}

impl TimeSource for FixedClock {
	fn now(&self) -> DateTime<Utc> {
		self.instant.get()
	}
}

impl<T: TimeSource + ?Sized> TimeSource for &T {
	fn now(&self) -> DateTime<Utc> {
		(**self).now()
	}
}

impl<T: TimeSource + ?Sized> TimeSource for Rc<T> {
	fn now(&self) -> DateTime<Utc> {
		(**self).now()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use chrono::TimeZone;

	#[test]
	fn fixed_clock_moves_only_when_told() {
		let start = Utc.with_ymd_and_hms(2025, 9, 25, 11, 0, 0).unwrap();
		let clock = Rc::new(FixedClock::new(start));
		let shared = Rc::clone(&clock);

		assert_eq!(shared.now(), start);

		clock.advance(TimeDelta::seconds(90));
		assert_eq!(shared.now(), start + TimeDelta::seconds(90));

		clock.advance(TimeDelta::seconds(-30));
		assert_eq!(shared.now(), start + TimeDelta::seconds(60));

		clock.set(start);
		assert_eq!((&*shared).now(), start);
	}

	#[test]
	fn system_clock_is_after_the_unix_epoch() {
		assert!(SystemClock.now().timestamp() > 0);
	}
}
