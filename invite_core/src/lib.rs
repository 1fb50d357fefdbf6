mod clock;
mod config;
mod countdown;
mod reveal;
mod scope;
mod style;

pub use clock::{FixedClock, SystemClock, TimeSource};
pub use config::{
	parse_target,
	parse_target_in,
	Blessing,
	Ceremony,
	Closing,
	ConfigError,
	Couple,
	DressCode,
	Event,
	Hero,
	Image,
	Intro,
	InviteConfig,
	Parents,
	Photos,
	Program,
	ProgramItem,
	Rsvp,
	Side,
	DEFAULT_INVITE,
};
pub use countdown::{Countdown, Remaining, COUNTDOWN_LABELS, TICK_INTERVAL_MS};
pub use reveal::{RevealOptions, RevealState, RevealTracker, Transition, STAGGER_STEP};
pub use scope::Scoped;
pub use style::{BASE_STYLE, HERO_STYLE, SECTIONS_STYLE};
