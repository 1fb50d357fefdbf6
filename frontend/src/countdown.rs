use std::rc::Rc;

use chrono::{DateTime, Utc};
use gloo_console::log;
use gloo_timers::callback::Interval;
use invite_core::{Countdown, Remaining, Scoped, SystemClock, TICK_INTERVAL_MS};
use yew::prelude::*;

// the only place the page picks which clock to count with
fn start_countdown(target: DateTime<Utc>) -> Countdown<SystemClock> {
	Countdown::new(target, SystemClock)
}

/// Time left until `target`, resampled every second for as long as the calling component is
/// mounted. The interval is released when the component goes away or the target changes.
#[hook]
pub fn use_countdown(target: DateTime<Utc>) -> Remaining {
	let countdown = use_mut_ref(|| start_countdown(target));
	let remaining = use_state_eq(|| countdown.borrow().remaining());

	{
		let countdown = Rc::clone(&countdown);
		let remaining = remaining.clone();
		use_effect_with(target, move |target| {
			if countdown.borrow().target() != *target {
				*countdown.borrow_mut() = start_countdown(*target);
			}
			remaining.set(countdown.borrow_mut().tick());

			// so we only say something the first time we hit zero
			let mut finished = countdown.borrow().is_finished();
			log!(format!("Starting countdown to {target}"));

			let interval = Interval::new(TICK_INTERVAL_MS, move || {
				let now = countdown.borrow_mut().tick();
				if now.is_zero() && !finished {
					finished = true;
					log!("Countdown reached zero");
				}
				remaining.set(now);
			});

			let guard = Scoped::new(interval, |interval| {
				drop(interval);
				log!("Released countdown timer");
			});

			move || drop(guard)
		});
	}

	*remaining
}

#[derive(Properties, PartialEq)]
pub struct CountdownProps {
	pub target: DateTime<Utc>,
	pub title: String
}

#[function_component(CountdownView)]
pub fn countdown_view(props: &CountdownProps) -> Html {
	let remaining = use_countdown(props.target);

	let units = remaining.labelled()
		.into_iter()
		.enumerate()
		.map(|(idx, (value, label))| html! {
			<>
				if idx != 0 {
					<span class="countdown-separator">{ ":" }</span>
				}
				<span class="countdown-unit">
					<span class="countdown-value">{ value }</span>
					<span class="countdown-label">{ label }</span>
				</span>
			</>
		})
		.collect::<Html>();

	html! {
		<div id="countdown">
			<div id="countdown-title" class="serif-italic">{ &props.title }</div>
			<div id="countdown-digits" aria-label={ remaining.to_string() }>
				{ units }
			</div>
		</div>
	}
}
