use leptos::prelude::*;

use crate::dom;
use crate::scaling::ServingState;

/// Minus/count/plus controls for the serving counter.
///
/// The quantity labels stay where the server rendered them; an effect
/// rewrites their text whenever the count changes.
#[component]
pub fn ServingControls(
    /// Counter and baseline quantities.
    state: RwSignal<ServingState>,
    /// Quantity label elements, index-aligned with the baseline quantities.
    labels: Vec<web_sys::Element>,
) -> impl IntoView {
    let originals: Vec<String> = labels.iter().map(dom::text_of).collect();
    Effect::new(move |_| {
        let texts = state.with(|s| s.display_labels(&originals));
        dom::set_texts(&labels, &texts);
    });

    let at_minimum = move || state.with(|s| s.servings() <= 1);
    let changed = move || state.with(|s| s.servings() != s.baseline_servings());

    view! {
        <span class="serving-controls">
            <button
                type="button"
                class="button is-small serving-decr"
                title="Fewer servings"
                disabled=at_minimum
                on:click=move |_| state.update(|s| s.decrement())
            >
                "\u{2212}"
            </button>
            <span class="serving-count">{move || state.with(|s| s.servings())}</span>
            <button
                type="button"
                class="button is-small serving-incr"
                title="More servings"
                on:click=move |_| state.update(|s| s.increment())
            >
                "+"
            </button>
            <Show when=changed>
                <button
                    type="button"
                    class="button is-small is-text serving-reset"
                    on:click=move |_| state.update(|s| s.reset())
                >
                    "Reset"
                </button>
            </Show>
        </span>
    }
}
