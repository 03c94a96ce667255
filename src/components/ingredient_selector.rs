use leptos::prelude::*;
use tracing::{debug, warn};

use crate::dom;
use crate::selection::IngredientPool;

/// Search box with suggestions, a tag per selected ingredient, and the
/// hidden form field the selection is submitted through.
#[component]
pub fn IngredientSelector(
    pool: RwSignal<IngredientPool>,
    /// Name of the hidden field carrying the comma-joined selection.
    #[prop(into)]
    field_name: String,
    suggestion_limit: usize,
) -> impl IntoView {
    let (query, set_query) = signal(String::new());
    let field_ref = NodeRef::<leptos::html::Input>::new();

    let pick = move |name: String| {
        let mut moved = false;
        pool.update(|p| moved = p.select(&name));
        if moved {
            set_query.set(String::new());
        } else {
            debug!("Not selectable: {:?}", name);
        }
    };

    let suggestions = move || query.with(|q| pool.with(|p| p.suggestions(q, suggestion_limit)));

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            // Enter picks the typed name instead of submitting the form
            ev.prevent_default();
            pick(query.get_untracked().trim().to_string());
        }
    };

    // Write the selection into the hidden field right before the form submits
    Effect::new(move |_| {
        let Some(field) = field_ref.get() else {
            return;
        };
        let submit_field = field.clone();
        let attached = dom::on_enclosing_form_submit(&field, move || {
            sync_form_value(pool, &submit_field);
        });
        if !attached {
            warn!("Ingredient selector is not inside a <form>; selection won't be submitted");
        }
    });

    view! {
        <div class="ingredient-selector">
            <div class="field ingredient-search">
                <input
                    type="text"
                    class="input"
                    placeholder="Search ingredients..."
                    autocomplete="off"
                    prop:value=move || query.get()
                    on:input=move |ev| set_query.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <Show when=move || !suggestions().is_empty()>
                    <div class="dropdown-content ingredient-suggestions">
                        {move || {
                            suggestions()
                                .into_iter()
                                .map(|name| {
                                    let value = name.clone();
                                    view! {
                                        <a
                                            class="dropdown-item"
                                            on:mousedown=move |_| pick(value.clone())
                                        >
                                            {name}
                                        </a>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </Show>
            </div>

            <div class="field is-grouped is-grouped-multiline selected-ingredients">
                {move || {
                    pool.with(|p| p.selected_entries())
                        .into_iter()
                        .map(|(id, name)| {
                            let remove_name = name.clone();
                            view! {
                                <p class="control" id=id.tag_dom_id()>
                                    <span class="tag is-primary is-medium">
                                        <span class="selected-ingredient">{name}</span>
                                        <button
                                            type="button"
                                            class="delete is-small"
                                            title="Remove"
                                            on:click=move |_| {
                                                pool.update(|p| {
                                                    p.deselect(&remove_name);
                                                });
                                            }
                                        ></button>
                                    </span>
                                </p>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>

            <input type="hidden" name=field_name node_ref=field_ref />
        </div>
    }
}

fn sync_form_value(pool: RwSignal<IngredientPool>, field: &web_sys::HtmlInputElement) {
    let value = pool.with_untracked(|p| p.form_value());
    debug!("Submitting ingredients={}", value);
    field.set_value(&value);
}
