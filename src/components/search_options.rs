use leptos::prelude::*;
use tracing::debug;

use crate::params::SortOrder;
use crate::visibility::{SearchMode, ToggleOutcome, ToggleValue, VisibilityToggle};

#[component]
pub fn SearchOptions(
    /// Search mode, ubiquitous checkbox visibility and the best-match gate.
    toggle: RwSignal<VisibilityToggle>,
    /// Initial state of the "include ubiquitous ingredients" checkbox.
    ubiquitous_checked: bool,
    initial_sort: Option<SortOrder>,
) -> impl IntoView {
    let (sort_by, set_sort_by) = signal(initial_sort.unwrap_or_default());

    // A removed best-match option can't stay selected
    Effect::new(move |_| {
        let available = toggle.with(|t| t.best_match_available());
        if !available && sort_by.get_untracked() == SortOrder::BestMatch {
            set_sort_by.set(SortOrder::default());
        }
    });

    let on_mode_change = move |ev: leptos::ev::Event| {
        let raw = event_target_value(&ev);
        let mut outcome = ToggleOutcome::Unrecognized;
        toggle.update(|t| outcome = t.on_change(&raw));
        debug!("Search mode {:?} -> {:?}", raw, outcome);
    };
    let mode_is = move |mode: SearchMode| toggle.with(|t| t.mode() == mode);

    let container_display = move || {
        if toggle.with(|t| t.container_visible()) {
            "block"
        } else {
            "none"
        }
    };

    let sort_options = move || {
        let best_match = toggle.with(|t| t.best_match_available());
        SortOrder::ALL
            .into_iter()
            .filter(|order| *order != SortOrder::BestMatch || best_match)
            .map(|order| {
                let is_selected = move || sort_by.get() == order;
                view! {
                    <option value=order.as_wire() selected=is_selected>
                        {order.label()}
                    </option>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <div class="search-options">
            <div class="field control">
                <label class="radio">
                    <input
                        type="radio"
                        name="exclusive"
                        value={ToggleValue::True.as_str()}
                        prop:checked=move || mode_is(SearchMode::Exclusive)
                        on:change=on_mode_change
                    />
                    " Only these ingredients"
                </label>
                <label class="radio">
                    <input
                        type="radio"
                        name="exclusive"
                        value={ToggleValue::False.as_str()}
                        prop:checked=move || mode_is(SearchMode::Inclusive)
                        on:change=on_mode_change
                    />
                    " Any of these ingredients"
                </label>
            </div>

            <div id="ubiq-checkbox-container" class="field" style:display=container_display>
                <label class="checkbox">
                    <input
                        type="checkbox"
                        name="include-ubiquitous"
                        prop:checked=ubiquitous_checked
                    />
                    " Include common ingredients (salt, water, oil)"
                </label>
            </div>

            <div class="field">
                <div class="select">
                    <select
                        name="sort_by"
                        on:change=move |ev| {
                            if let Some(order) = SortOrder::from_wire(&event_target_value(&ev)) {
                                set_sort_by.set(order);
                            }
                        }
                    >
                        {sort_options}
                    </select>
                </div>
            </div>
        </div>
    }
}
