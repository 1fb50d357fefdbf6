use invite_core::Couple;
use yew::prelude::*;
use crate::reveal::Reveal;

// seconds between each panel starting to slide up
const PANEL_STAGGER: f64 = 0.2;

// the one image gets split across the three panels, each showing a different part of it
const PANEL_POSITIONS: [&str; 3] = ["left", "center", "right"];

#[derive(Properties, PartialEq)]
pub struct HeroProps {
	pub couple: Couple,
	pub image: String,
	pub display_date: String
}

#[function_component(SplitHero)]
pub fn split_hero(props: &HeroProps) -> Html {
	let panels = PANEL_POSITIONS.iter()
		.enumerate()
		.map(|(idx, position)| {
			// there's only three of them, so this cast is fine
			#[allow(clippy::cast_precision_loss)]
			let delay = idx as f64 * PANEL_STAGGER;
			html! {
				<div class="hero-panel" style={ format!("animation-delay: {delay:.1}s;") }>
					<div style={ format!(
						"background-image: url({}); background-position: {position} center;",
						props.image
					) }/>
				</div>
			}
		})
		.collect::<Html>();

	html! {
		<section id="hero">
			<div id="hero-monogram">{ &props.couple.monogram }</div>
			<div id="hero-body">
				<div id="hero-panels">
					{ panels }
					<div id="hero-names">
						<div class="script">
							<span id="hero-left-name">{ &props.couple.left }</span>
							<span>{ &props.couple.ampersand }</span>
							<span id="hero-right-name">{ &props.couple.right }</span>
						</div>
					</div>
				</div>
				<Reveal>
					<div id="hero-date">
						{ &props.display_date }
						<hr/>
					</div>
				</Reveal>
			</div>
		</section>
	}
}
