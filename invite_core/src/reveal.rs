/// Whether a block of content has scrolled into view yet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RevealState {
	#[default]
	Hidden,
	Revealed
}

/// What happened as a result of feeding a single intersection signal to a tracker
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
	/// This was the first time the unit was seen; it's now revealed
	Revealed,
	Unchanged
}

/// A one-shot latch from `Hidden` to `Revealed`.
///
/// The first `true` signal flips it, and after that it ignores everything. Scrolling back out of
/// view doesn't hide the content again.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealTracker {
	state: RevealState
}

impl RevealTracker {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	pub fn observe(&mut self, intersecting: bool) -> Transition {
		match (self.state, intersecting) {
			(RevealState::Hidden, true) => {
				self.state = RevealState::Revealed;
				Transition::Revealed
			},
			_ => Transition::Unchanged
		}
	}

	#[must_use]
	pub fn state(&self) -> RevealState {
		self.state
	}

	#[must_use]
	pub fn is_revealed(&self) -> bool {
		self.state == RevealState::Revealed
	}
}

pub const DEFAULT_OFFSET_Y: f64 = 24.;
pub const DEFAULT_DURATION: f64 = 0.7;
pub const DEFAULT_EASING: &str = "ease-out";
// a negative margin so things start appearing a little before they're all the way on screen
pub const DEFAULT_ROOT_MARGIN: &str = "-10% 0px";
/// The delay added per item when revealing a list one after the other
pub const STAGGER_STEP: f64 = 0.05;

/// How a reveal unit animates between its two states. This is all static configuration; nothing
/// here is computed from what's on screen.
#[derive(Clone, Debug, PartialEq)]
pub struct RevealOptions {
	/// How far below its final position (in px) the unit sits while hidden
	pub offset_y: f64,
	/// Seconds
	pub delay: f64,
	/// Seconds
	pub duration: f64,
	pub easing: &'static str,
	pub root_margin: &'static str
}

impl Default for RevealOptions {
	fn default() -> Self {
		Self {
			offset_y: DEFAULT_OFFSET_Y,
			delay: 0.,
			duration: DEFAULT_DURATION,
			easing: DEFAULT_EASING,
			root_margin: DEFAULT_ROOT_MARGIN
		}
	}
}

impl RevealOptions {
	#[must_use]
	pub fn with_delay(delay: f64) -> Self {
		Self { delay, ..Self::default() }
	}

	/// The options for the `index`th item of a list that reveals `step` seconds apart
	#[must_use]
	pub fn staggered(index: usize, step: f64) -> Self {
		// lists on the page are tiny, so this can't lose precision in practice
		#[allow(clippy::cast_precision_loss)]
		let index = index as f64;
		// rounded to the millisecond so the css doesn't end up with 0.15000000000000002s
		Self::with_delay((index * step * 1000.).round() / 1000.)
	}

	#[must_use]
	pub fn transition(&self) -> String {
		let Self { duration, easing, delay, .. } = self;
		format!("opacity {duration}s {easing} {delay}s, transform {duration}s {easing} {delay}s")
	}

	/// The inline style to put on a unit in the given state
	#[must_use]
	pub fn style_for(&self, state: RevealState) -> String {
		let (opacity, offset) = match state {
			RevealState::Hidden => (0, self.offset_y),
			RevealState::Revealed => (1, 0.)
		};

		format!(
			"opacity: {opacity}; transform: translateY({offset}px); transition: {};",
			self.transition()
		)
	}
}
