use chrono::{DateTime, Utc};
use invite_core::{
	Blessing,
	Ceremony,
	Closing,
	DressCode,
	Image,
	Intro,
	Parents,
	Program,
	ProgramItem,
	Rsvp,
	Side,
};
use yew::prelude::*;
use crate::{countdown::CountdownView, reveal::Reveal};

#[derive(Properties, PartialEq)]
pub struct CardProps {
	pub children: Children
}

#[function_component(Card)]
pub fn card(props: &CardProps) -> Html {
	html! {
		<div class="card">{ for props.children.iter() }</div>
	}
}

#[derive(Properties, PartialEq)]
pub struct IntroProps {
	pub intro: Intro,
	pub target: DateTime<Utc>
}

#[function_component(IntroSection)]
pub fn intro_section(props: &IntroProps) -> Html {
	html! {
		<section id="intro" class="narrow">
			<Reveal>
				<p id="intro-text">{ &props.intro.text }</p>
			</Reveal>
			<Reveal>
				<CountdownView target={ props.target } title={ props.intro.countdown_title.clone() }/>
			</Reveal>
		</section>
	}
}

fn parents_column(parents: &Parents) -> Html {
	html! {
		<div>
			<div class="parents-title">{ &parents.title }</div>
			{ parents.names.iter().map(|name| html! { <div>{ name }</div> }).collect::<Html>() }
		</div>
	}
}

#[derive(Properties, PartialEq)]
pub struct BlessingProps {
	pub blessing: Blessing
}

#[function_component(BlessingSection)]
pub fn blessing_section(props: &BlessingProps) -> Html {
	html! {
		<section id="blessing" class="narrow">
			<Card>
				<Reveal>
					<h2 class="serif-italic">{ &props.blessing.heading }</h2>
				</Reveal>
				<div id="parents">
					{ parents_column(&props.blessing.bride_parents) }
					{ parents_column(&props.blessing.groom_parents) }
				</div>
			</Card>
		</section>
	}
}

#[derive(Properties, PartialEq)]
pub struct PhotoProps {
	pub photo: Option<Image>
}

/// A full-width photo between sections, or nothing at all if there isn't one configured
#[function_component(PhotoSection)]
pub fn photo_section(props: &PhotoProps) -> Html {
	let Some(photo) = &props.photo else {
		return html! {};
	};

	html! {
		<section class="narrow">
			<Reveal>
				<img class="photo" src={ photo.src.clone() } alt={ photo.alt.clone() }/>
			</Reveal>
		</section>
	}
}

#[derive(Properties, PartialEq)]
pub struct CeremonyProps {
	pub ceremony: Ceremony
}

#[function_component(CeremonySection)]
pub fn ceremony_section(props: &CeremonyProps) -> Html {
	let ceremony = &props.ceremony;

	html! {
		<section id="ceremony" class="narrow">
			<Reveal>
				<Card>
					<div>
						<span aria-hidden="true">{ "✦" }</span>
						<div>
							<div class="serif-italic">{ &ceremony.title }</div>
							<div id="ceremony-venue">{ &ceremony.venue }</div>
							<div id="ceremony-address">{ &ceremony.address }</div>
							<div id="ceremony-time">{ "◷ " }{ &ceremony.time }</div>
							<a
								class="outline-button"
								href={ ceremony.map_url.clone() }
								target="_blank"
								rel="noopener noreferrer"
							>{ &ceremony.map_label }</a>
						</div>
					</div>
				</Card>
			</Reveal>
		</section>
	}
}

#[derive(Properties, PartialEq)]
pub struct TimelineItemProps {
	pub item: ProgramItem,
	pub side: Side
}

#[function_component(TimelineItem)]
pub fn timeline_item(props: &TimelineItemProps) -> Html {
	let text = html! {
		<div>
			<div class="timeline-time">{ &props.item.time }</div>
			<div class="timeline-title">{ &props.item.title }</div>
		</div>
	};
	let icon = html! { <div class="timeline-icon">{ &props.item.icon }</div> };
	let marker = html! {
		<div class="timeline-marker">
			<div class="timeline-dot"/>
			<div class="timeline-line"/>
		</div>
	};

	// the text always sits on its own side, with the icon mirrored across the line
	let (class, first, last) = match props.side {
		Side::Left => ("timeline-item left", text, icon),
		Side::Right => ("timeline-item right", icon, text)
	};

	html! {
		<div class={ class }>
			{ first }
			{ marker }
			{ last }
		</div>
	}
}

#[derive(Properties, PartialEq)]
pub struct ProgramProps {
	pub program: Program
}

#[function_component(ProgramSection)]
pub fn program_section(props: &ProgramProps) -> Html {
	let items = props.program.entries()
		.map(|(item, side, options)| html! {
			<Reveal options={ options }>
				<TimelineItem item={ item.clone() } side={ side }/>
			</Reveal>
		})
		.collect::<Html>();

	html! {
		<section id="program" class="narrow">
			<Card>
				<Reveal>
					<h3 class="serif-italic">{ &props.program.title }</h3>
				</Reveal>
				<div>{ items }</div>
			</Card>
		</section>
	}
}

#[derive(Properties, PartialEq)]
pub struct DressCodeProps {
	pub dress_code: DressCode
}

#[function_component(DressCodeSection)]
pub fn dress_code_section(props: &DressCodeProps) -> Html {
	let swatches = props.dress_code.avoid_colors.iter()
		.map(|color| html! {
			<div class="swatch" title={ color.clone() } style={ format!("background-color: {color};") }/>
		})
		.collect::<Html>();

	html! {
		<section class="narrow">
			<Reveal>
				<Card>
					<div id="dress-code">
						<div id="dress-code-title">{ &props.dress_code.title }</div>
						<p class="note">{ &props.dress_code.note }</p>
						<div id="swatches">{ swatches }</div>
					</div>
				</Card>
			</Reveal>
		</section>
	}
}

#[derive(Properties, PartialEq)]
pub struct RsvpProps {
	pub rsvp: Rsvp
}

#[function_component(RsvpSection)]
pub fn rsvp_section(props: &RsvpProps) -> Html {
	html! {
		<section id="rsvp" class="narrow">
			<Reveal>
				<div id="rsvp-title" class="serif-italic">{ &props.rsvp.title }</div>
				<p class="note">{ &props.rsvp.note }</p>
				<a class="outline-button" href={ props.rsvp.link.clone() }>{ &props.rsvp.button }</a>
			</Reveal>
		</section>
	}
}

#[derive(Properties, PartialEq)]
pub struct ClosingProps {
	pub closing: Closing,
	pub monogram: String
}

#[function_component(ClosingSection)]
pub fn closing_section(props: &ClosingProps) -> Html {
	let photo = props.closing.photo.as_ref().map(|photo| html! {
		<Reveal>
			<img class="photo" src={ photo.src.clone() } alt={ photo.alt.clone() }/>
		</Reveal>
	});

	html! {
		<section id="closing" class="narrow">
			{ photo }
			<Reveal>
				<p id="closing-thanks">{ &props.closing.thanks }</p>
				<div class="serif-italic">{ &props.closing.signature }</div>
				<div id="closing-monogram">{ &props.monogram }</div>
			</Reveal>
		</section>
	}
}

#[derive(Properties, PartialEq)]
pub struct FooterProps {
	pub text: String
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
	html! {
		<footer id="footer">
			<div>{ &props.text }</div>
		</footer>
	}
}
