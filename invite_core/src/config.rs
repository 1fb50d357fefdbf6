use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};
use serde::Deserialize;

use crate::reveal::{RevealOptions, STAGGER_STEP};

/// The invitation we ship with. Edit `content/invite.json` to change what the page says.
pub static DEFAULT_INVITE: &str = include_str!("../../content/invite.json");

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	#[error("couldn't parse invitation content: {0}")]
	Json(#[from] serde_json::Error),
	#[error("'{value}' isn't a valid target date-time: {reason}")]
	InvalidTarget { value: String, reason: String },
	#[error("'{0}' doesn't exist in the local time zone")]
	NonexistentLocalTime(String),
	#[error("{0} can't be empty")]
	EmptyField(&'static str),
	#[error("'{0}' isn't a #rrggbb color")]
	InvalidColor(String)
}

/// Everything the page displays. None of this is interpreted beyond some basic sanity checks;
/// it's just handed to the views.
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct InviteConfig {
	pub couple: Couple,
	pub event: Event,
	pub hero: Hero,
	pub intro: Intro,
	pub blessing: Blessing,
	#[serde(default)]
	pub photos: Photos,
	pub ceremony: Ceremony,
	pub program: Program,
	pub dress_code: DressCode,
	pub rsvp: Rsvp,
	pub closing: Closing,
	pub footer: String
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Couple {
	pub left: String,
	#[serde(default = "default_ampersand")]
	pub ampersand: String,
	pub right: String,
	pub monogram: String
}

fn default_ampersand() -> String {
	"&".into()
}

impl Couple {
	#[must_use]
	pub fn title(&self) -> String {
		format!("{} {} {}", self.left, self.ampersand, self.right)
	}
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Event {
	/// Either RFC 3339 with an offset, or a bare `YYYY-MM-DDTHH:MM[:SS]` that's read as the
	/// viewer's local time (which is what a browser does with the same string)
	pub target: String,
	pub display_date: String
}

impl Event {
	pub fn target_instant(&self) -> Result<DateTime<Utc>, ConfigError> {
		parse_target(&self.target)
	}
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Image {
	pub src: String,
	#[serde(default)]
	pub alt: String
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Hero {
	pub image: String
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Intro {
	pub text: String,
	pub countdown_title: String
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Blessing {
	pub heading: String,
	pub bride_parents: Parents,
	pub groom_parents: Parents
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Parents {
	pub title: String,
	pub names: Vec<String>
}

/// Full-width photos that sit between sections. Any of them can be left out.
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Photos {
	pub after_blessing: Option<Image>,
	pub after_ceremony: Option<Image>,
	pub after_program: Option<Image>
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Ceremony {
	pub title: String,
	pub venue: String,
	pub address: String,
	pub time: String,
	pub map_url: String,
	#[serde(default = "default_map_label")]
	pub map_label: String
}

fn default_map_label() -> String {
	"See location".into()
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Program {
	pub title: String,
	pub items: Vec<ProgramItem>
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ProgramItem {
	pub time: String,
	pub title: String,
	pub icon: String
}

/// Which side of the timeline an item's text goes on
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
	Left,
	Right
}

impl Side {
	// the first item goes on the right, then they alternate
	#[must_use]
	pub fn for_index(index: usize) -> Self {
		if index % 2 == 0 { Self::Right } else { Self::Left }
	}
}

impl Program {
	/// Each item along with where it sits on the timeline and when it should fade in
	pub fn entries(&self) -> impl Iterator<Item = (&ProgramItem, Side, RevealOptions)> {
		self.items.iter()
			.enumerate()
			.map(|(idx, item)| (item, Side::for_index(idx), RevealOptions::staggered(idx, STAGGER_STEP)))
	}
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DressCode {
	pub title: String,
	pub note: String,
	#[serde(default)]
	pub avoid_colors: Vec<String>
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Rsvp {
	pub title: String,
	pub note: String,
	/// This can just be "#" until there's somewhere real to send people
	pub link: String,
	pub button: String
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Closing {
	pub photo: Option<Image>,
	pub thanks: String,
	pub signature: String
}

impl InviteConfig {
	pub fn from_json(json: &str) -> Result<Self, ConfigError> {
		let config: Self = serde_json::from_str(json)?;
		config.validate()?;
		Ok(config)
	}

	pub fn validate(&self) -> Result<(), ConfigError> {
		non_empty(&self.couple.left, "couple.left")?;
		non_empty(&self.couple.right, "couple.right")?;
		non_empty(&self.ceremony.map_url, "ceremony.map_url")?;
		non_empty(&self.rsvp.link, "rsvp.link")?;

		if self.program.items.is_empty() {
			return Err(ConfigError::EmptyField("program.items"));
		}

		if let Some(bad) = self.dress_code.avoid_colors.iter().find(|c| !is_hex_color(c)) {
			return Err(ConfigError::InvalidColor(bad.clone()));
		}

		self.event.target_instant().map(|_| ())
	}
}

fn non_empty(value: &str, field: &'static str) -> Result<(), ConfigError> {
	if value.trim().is_empty() {
		Err(ConfigError::EmptyField(field))
	} else {
		Ok(())
	}
}

fn is_hex_color(color: &str) -> bool {
	color.len() == 7
		&& color.starts_with('#')
		&& color[1..].chars().all(|c| c.is_ascii_hexdigit())
}

/// Parses a target, reading offset-less values in the viewer's local time zone
pub fn parse_target(value: &str) -> Result<DateTime<Utc>, ConfigError> {
	parse_target_in(value, &Local)
}

/// Same as [`parse_target`], but with the zone to read offset-less values in picked by the caller
pub fn parse_target_in<Tz: TimeZone>(value: &str, zone: &Tz) -> Result<DateTime<Utc>, ConfigError> {
	let value = value.trim();

	if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
		return Ok(dt.with_timezone(&Utc));
	}

	let naive = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
		.or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M"))
		.map_err(|e| ConfigError::InvalidTarget { value: value.to_string(), reason: e.to_string() })?;

	// when the clocks go back, an hour happens twice; we go with the first one
	zone.from_local_datetime(&naive)
		.earliest()
		.map(|dt| dt.with_timezone(&Utc))
		.ok_or_else(|| ConfigError::NonexistentLocalTime(value.to_string()))
}

#[cfg(test)]
mod tests {
	use super::*;
	use chrono::FixedOffset;
	use chrono_tz::Europe::Berlin;
	use pretty_assertions::assert_eq;

	fn shipped() -> InviteConfig {
		InviteConfig::from_json(DEFAULT_INVITE).unwrap()
	}

	fn with(edit: impl FnOnce(&mut serde_json::Value)) -> Result<InviteConfig, ConfigError> {
		let mut value: serde_json::Value = serde_json::from_str(DEFAULT_INVITE).unwrap();
		edit(&mut value);
		InviteConfig::from_json(&value.to_string())
	}

	#[test]
	fn shipped_invite_is_valid() {
		let config = shipped();
		assert_eq!(config.couple.title(), "Dinesh & Melina");
		assert_eq!(config.event.target, "2025-09-26T11:00:00");
		assert_eq!(config.program.items.len(), 5);
		// the last photo was never filled in, so there's nothing to show
		assert_eq!(config.closing.photo, None);
	}

	#[test]
	fn naive_target_uses_the_given_zone() {
		let kathmandu = FixedOffset::east_opt(5 * 3600 + 45 * 60).unwrap();
		let parsed = parse_target_in("2025-09-26T11:00:00", &kathmandu).unwrap();
		assert_eq!(parsed.to_rfc3339(), "2025-09-26T05:15:00+00:00");

		let no_seconds = parse_target_in("2025-09-26T11:00", &kathmandu).unwrap();
		assert_eq!(no_seconds, parsed);
	}

	#[test]
	fn explicit_offset_wins() {
		let parsed = parse_target_in("2025-09-26T11:00:00+05:45", &Utc).unwrap();
		assert_eq!(parsed.to_rfc3339(), "2025-09-26T05:15:00+00:00");
	}

	#[test]
	fn skipped_local_time_is_rejected() {
		// berlin jumps from 02:00 straight to 03:00 on this night
		let res = parse_target_in("2025-03-30T02:30:00", &Berlin);
		assert!(matches!(
			res,
			Err(ConfigError::NonexistentLocalTime(value)) if value == "2025-03-30T02:30:00"
		));

		// either side of the gap is fine
		let before = parse_target_in("2025-03-30T01:59:00", &Berlin).unwrap();
		assert_eq!(before.to_rfc3339(), "2025-03-30T00:59:00+00:00");
		let after = parse_target_in("2025-03-30T03:00", &Berlin).unwrap();
		assert_eq!(after.to_rfc3339(), "2025-03-30T01:00:00+00:00");
	}

	#[test]
	fn repeated_local_time_takes_the_first() {
		// 02:30 happens once in summer time (+02:00) and again in winter time (+01:00)
		let parsed = parse_target_in("2025-10-26T02:30:00", &Berlin).unwrap();
		assert_eq!(parsed.to_rfc3339(), "2025-10-26T00:30:00+00:00");

		// an explicit offset can still pick the second one
		let second = parse_target_in("2025-10-26T02:30:00+01:00", &Berlin).unwrap();
		assert_eq!(second.to_rfc3339(), "2025-10-26T01:30:00+00:00");
		assert!(parsed < second);
	}

	#[test]
	fn garbage_target_is_rejected() {
		assert!(matches!(
			parse_target_in("next friday", &Utc),
			Err(ConfigError::InvalidTarget { value, .. }) if value == "next friday"
		));
	}

	#[test]
	fn shipped_photos_fill_every_slot() {
		let photos = shipped().photos;
		let alts = [&photos.after_blessing, &photos.after_ceremony, &photos.after_program]
			.map(|slot| slot.as_ref().map(|image| image.alt.as_str()));
		assert_eq!(alts, [Some("couple"), Some("dance"), Some("stairs")]);
	}

	#[test]
	fn a_single_photo_slot_can_be_left_out() {
		let photos = with(|v| {
			v["photos"].as_object_mut().unwrap().remove("after_ceremony");
		}).unwrap().photos;

		assert_eq!(photos.after_ceremony, None);
		assert!(photos.after_blessing.is_some());
		assert!(photos.after_program.is_some());
	}

	#[test]
	fn sides_alternate_starting_right() {
		let sides = shipped().program.entries().map(|(_, side, _)| side).collect::<Vec<_>>();
		assert_eq!(sides, vec![Side::Right, Side::Left, Side::Right, Side::Left, Side::Right]);
	}

	#[test]
	fn program_reveals_are_staggered() {
		let delays = shipped().program.entries().map(|(_, _, opts)| opts.delay).collect::<Vec<_>>();
		assert_eq!(delays, vec![0., 0.05, 0.1, 0.15, 0.2]);
	}

	#[test]
	fn empty_name_is_rejected() {
		let res = with(|v| v["couple"]["left"] = "  ".into());
		assert!(matches!(res, Err(ConfigError::EmptyField("couple.left"))));
	}

	#[test]
	fn bad_swatch_is_rejected() {
		let res = with(|v| v["dress_code"]["avoid_colors"] = serde_json::json!(["#000000", "black"]));
		assert!(matches!(res, Err(ConfigError::InvalidColor(c)) if c == "black"));
	}

	#[test]
	fn empty_program_is_rejected() {
		let res = with(|v| v["program"]["items"] = serde_json::json!([]));
		assert!(matches!(res, Err(ConfigError::EmptyField("program.items"))));
	}

	#[test]
	fn unknown_fields_are_rejected() {
		let res = with(|v| v["footer_text"] = "oops".into());
		assert!(matches!(res, Err(ConfigError::Json(_))));
	}

	#[test]
	fn optional_bits_fill_in_defaults() {
		let config = with(|v| {
			let couple = v["couple"].as_object_mut().unwrap();
			couple.remove("ampersand");
			v["ceremony"].as_object_mut().unwrap().remove("map_label");
			v.as_object_mut().unwrap().remove("photos");
		}).unwrap();

		assert_eq!(config.couple.ampersand, "&");
		assert_eq!(config.ceremony.map_label, "See location");
		assert_eq!(config.photos, Photos::default());
	}
}
