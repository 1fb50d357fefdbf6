use gloo_console::warn;
use invite_core::{RevealOptions, RevealState, RevealTracker, Scoped, Transition};
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

fn watch(
	node: &NodeRef,
	root_margin: &str,
	state: UseStateHandle<RevealState>
) -> Result<Scoped<(IntersectionObserver, ObserverCallback)>, String> {
	let element = node.cast::<Element>()
		.ok_or_else(|| "reveal unit isn't mounted".to_string())?;

	let mut tracker = RevealTracker::new();
	let callback = ObserverCallback::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
		for entry in entries.iter() {
			let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
				continue;
			};

			if tracker.observe(entry.is_intersecting()) == Transition::Revealed {
				state.set(tracker.state());
				// it's never going back to hidden, so there's nothing left to watch for
				observer.disconnect();
			}
		}
	});

	let init = IntersectionObserverInit::new();
	init.set_root_margin(root_margin);

	let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
		.map_err(|e| format!("couldn't create an IntersectionObserver: {e:?}"))?;
	observer.observe(&element);

	// the callback has to outlive the observer, since the browser holds a reference to it
	Ok(Scoped::new((observer, callback), |(observer, callback)| {
		observer.disconnect();
		drop(callback);
	}))
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
	#[prop_or_default]
	pub options: RevealOptions,
	pub children: Children
}

/// Keeps its children hidden (shifted down and transparent) until they first scroll into view,
/// then fades them in and leaves them there.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
	let node = use_node_ref();
	let state = use_state_eq(RevealState::default);

	{
		let node = node.clone();
		let state = state.clone();
		let root_margin = props.options.root_margin;
		use_effect_with((), move |_| {
			let watching = match watch(&node, root_margin, state.clone()) {
				Ok(watching) => Some(watching),
				Err(e) => {
					// better to just show everything than to have it stuck invisible
					warn!(format!("Revealing immediately: {e}"));
					state.set(RevealState::Revealed);
					None
				}
			};

			move || drop(watching)
		});
	}

	html! {
		<div ref={ node } style={ props.options.style_for(*state) }>
			{ for props.children.iter() }
		</div>
	}
}
