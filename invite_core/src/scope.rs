/// Owns something that keeps running in the background (a repeating timer, an observer) and tears
/// it down exactly once, either when asked to or when dropped.
pub struct Scoped<H> {
	live: Option<(H, Box<dyn FnOnce(H)>)>
}

impl<H> Scoped<H> {
	pub fn new(handle: H, teardown: impl FnOnce(H) + 'static) -> Self {
		Self { live: Some((handle, Box::new(teardown))) }
	}

	#[must_use]
	pub fn is_live(&self) -> bool {
		self.live.is_some()
	}

	/// Runs the teardown if it hasn't run yet. Returns whether it ran this time.
	pub fn release(&mut self) -> bool {
		match self.live.take() {
			Some((handle, teardown)) => {
				teardown(handle);
				true
			},
			None => false
		}
	}
}

impl<H> Drop for Scoped<H> {
	fn drop(&mut self) {
		self.release();
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{clock::FixedClock, countdown::{Countdown, Remaining}};
	use chrono::{TimeDelta, TimeZone, Utc};
	use std::{cell::{Cell, RefCell}, rc::Rc};

	type Callback = Box<dyn FnMut()>;

	/// Stands in for the browser's timer queue: callbacks stay registered until cleared, and
	/// `fire` runs whatever is still registered.
	#[derive(Clone, Default)]
	struct FakeTimers {
		slots: Rc<RefCell<Vec<Option<Callback>>>>
	}

	impl FakeTimers {
		fn every(&self, callback: impl FnMut() + 'static) -> Scoped<usize> {
			let mut slots = self.slots.borrow_mut();
			slots.push(Some(Box::new(callback)));
			let id = slots.len() - 1;

			let timers = self.clone();
			Scoped::new(id, move |id| timers.slots.borrow_mut()[id] = None)
		}

		fn fire(&self) {
			// take them out first so callbacks can't see the RefCell borrowed
			let len = self.slots.borrow().len();
			for id in 0..len {
				let callback = self.slots.borrow_mut()[id].take();
				if let Some(mut callback) = callback {
					callback();
					self.slots.borrow_mut()[id] = Some(callback);
				}
			}
		}

		fn registered(&self) -> usize {
			self.slots.borrow().iter().flatten().count()
		}
	}

	#[test]
	fn teardown_runs_once_on_drop() {
		let released = Rc::new(Cell::new(0));
		let counter = Rc::clone(&released);

		let guard = Scoped::new((), move |()| counter.set(counter.get() + 1));
		assert!(guard.is_live());
		drop(guard);

		assert_eq!(released.get(), 1);
	}

	#[test]
	fn explicit_release_isnt_repeated_by_drop() {
		let released = Rc::new(Cell::new(0));
		let counter = Rc::clone(&released);

		let mut guard = Scoped::new(7, move |handle| {
			assert_eq!(handle, 7);
			counter.set(counter.get() + 1);
		});

		assert!(guard.release());
		assert!(!guard.release());
		assert!(!guard.is_live());
		drop(guard);

		assert_eq!(released.get(), 1);
	}

	#[test]
	fn countdown_stops_ticking_once_released() {
		let start = Utc.with_ymd_and_hms(2025, 9, 26, 10, 59, 50).unwrap();
		let target = Utc.with_ymd_and_hms(2025, 9, 26, 11, 0, 0).unwrap();
		let clock = Rc::new(FixedClock::new(start));
		let mut countdown = Countdown::new(target, Rc::clone(&clock));

		let shown = Rc::new(Cell::new(countdown.remaining()));
		let ticks = Rc::new(Cell::new(0));

		let timers = FakeTimers::default();
		let guard = {
			let shown = Rc::clone(&shown);
			let ticks = Rc::clone(&ticks);
			timers.every(move || {
				ticks.set(ticks.get() + 1);
				shown.set(countdown.tick());
			})
		};

		clock.advance(TimeDelta::seconds(1));
		timers.fire();
		clock.advance(TimeDelta::seconds(1));
		timers.fire();
		assert_eq!(ticks.get(), 2);
		assert_eq!(shown.get().total_seconds(), 8);

		// the display goes away
		drop(guard);
		assert_eq!(timers.registered(), 0);

		clock.advance(TimeDelta::seconds(20));
		timers.fire();
		timers.fire();
		assert_eq!(ticks.get(), 2);
		assert_eq!(shown.get().total_seconds(), 8);
		assert_ne!(shown.get(), Remaining::ZERO);
	}

	#[test]
	fn one_guard_per_unit_releases_independently() {
		let timers = FakeTimers::default();
		let first = timers.every(|| ());
		let second = timers.every(|| ());
		assert_eq!(timers.registered(), 2);

		drop(first);
		assert_eq!(timers.registered(), 1);
		drop(second);
		assert_eq!(timers.registered(), 0);
	}
}
