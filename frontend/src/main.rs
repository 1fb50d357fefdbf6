use std::rc::Rc;

use chrono::{DateTime, Utc};
use gloo_console::error;
use invite_core::{InviteConfig, DEFAULT_INVITE};
use yew::prelude::*;
use hero::SplitHero;
use sections::{
	BlessingSection,
	CeremonySection,
	ClosingSection,
	DressCodeSection,
	Footer,
	IntroSection,
	PhotoSection,
	ProgramSection,
	RsvpSection,
};
use style::SharedStyle;

mod countdown;
mod hero;
mod reveal;
mod sections;
mod style;

/// The parsed invitation, along with the instant it's counting down to
#[derive(Clone, PartialEq)]
pub struct Invitation {
	pub config: Rc<InviteConfig>,
	pub target: DateTime<Utc>
}

impl Invitation {
	fn load(json: &str) -> Result<Self, String> {
		let config = InviteConfig::from_json(json).map_err(|e| e.to_string())?;
		let target = config.event.target_instant().map_err(|e| e.to_string())?;
		Ok(Self { config: Rc::new(config), target })
	}
}

#[derive(Properties, PartialEq)]
pub struct FrontendProps {
	pub invitation: Result<Invitation, String>
}

#[function_component(Frontend)]
pub fn frontend(props: &FrontendProps) -> Html {
	let invitation = match &props.invitation {
		Ok(invitation) => invitation,
		Err(err) => return html! {
			<>
				<SharedStyle />
				<div id="load-error">
					<h1>{ "Couldn't load this invitation" }</h1>
					<p>{ err }</p>
				</div>
			</>
		}
	};

	let config = &invitation.config;

	html! {
		<>
			<SharedStyle />
			<SplitHero
				couple={ config.couple.clone() }
				image={ config.hero.image.clone() }
				display_date={ config.event.display_date.clone() }
			/>
			<IntroSection intro={ config.intro.clone() } target={ invitation.target }/>
			<BlessingSection blessing={ config.blessing.clone() }/>
			<PhotoSection photo={ config.photos.after_blessing.clone() }/>
			<CeremonySection ceremony={ config.ceremony.clone() }/>
			<PhotoSection photo={ config.photos.after_ceremony.clone() }/>
			<ProgramSection program={ config.program.clone() }/>
			<PhotoSection photo={ config.photos.after_program.clone() }/>
			<DressCodeSection dress_code={ config.dress_code.clone() }/>
			<RsvpSection rsvp={ config.rsvp.clone() }/>
			<ClosingSection closing={ config.closing.clone() } monogram={ config.couple.monogram.clone() }/>
			<Footer text={ config.footer.clone() }/>
		</>
	}
}

fn main() {
	console_error_panic_hook::set_once();

	let invitation = Invitation::load(DEFAULT_INVITE);

	match &invitation {
		Ok(invitation) => {
			if let Some(document) = web_sys::window().and_then(|w| w.document()) {
				document.set_title(&invitation.config.couple.title());
			}
		},
		Err(e) => error!(format!("Couldn't load the invitation: {e}"))
	}

	yew::Renderer::<Frontend>::with_props(FrontendProps { invitation }).render();
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn shipped_invitation_loads() {
		let invitation = Invitation::load(DEFAULT_INVITE).unwrap();
		assert_eq!(invitation.config.couple.monogram, "D & M");
	}

	#[test]
	fn broken_invitation_reports_why() {
		let err = Invitation::load("{ \"couple\": 4 }").map(|_| ()).unwrap_err();
		assert!(err.starts_with("couldn't parse invitation content"));
	}
}
