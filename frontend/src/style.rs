use yew::prelude::*;

#[function_component(SharedStyle)]
pub fn shared_style() -> Html {
	html! {
		<style>
			{ invite_core::BASE_STYLE }
			{ invite_core::HERO_STYLE }
			{ invite_core::SECTIONS_STYLE }
		</style>
	}
}
