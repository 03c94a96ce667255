use leptos::mount::mount_to;
use leptos::prelude::*;
use tracing::{error, info};

use crate::components::ingredient_selector::IngredientSelector;
use crate::components::search_options::SearchOptions;
use crate::components::serving_scaler::ServingControls;
use crate::config::UiConfig;
use crate::dom;
use crate::error::RecipeUiError;
use crate::params::SearchParams;
use crate::scaling::ServingState;
use crate::selection::IngredientPool;
use crate::visibility::VisibilityToggle;

/// Attach every widget whose mount point exists on the current page.
/// A widget that fails to start is logged and skipped; the others still
/// mount.
pub fn mount_widgets(config: &UiConfig) {
    let params = SearchParams::parse(&dom::query_string());

    if let Err(e) = mount_serving_scaler(config) {
        error!("Serving scaler disabled: {}", e);
    }
    if let Err(e) = mount_ingredient_selector(config, &params) {
        error!("Ingredient selector disabled: {}", e);
    }
    mount_search_options(config, &params);
}

fn mount_serving_scaler(config: &UiConfig) -> Result<(), RecipeUiError> {
    let Some(counter) = dom::mount_point(&config.servings_id) else {
        info!("No #{} on this page, skipping serving scaler", config.servings_id);
        return Ok(());
    };

    let labels = dom::elements_by_class(&config.quantity_class);
    let texts: Vec<String> = labels.iter().map(dom::text_of).collect();
    let state = ServingState::from_labels(&dom::text_of(&counter), &texts)?;
    info!(
        "Serving scaler: {} servings, {} quantities",
        state.servings(),
        texts.len()
    );

    counter.set_text_content(None);
    mount_to(counter, move || {
        let state = RwSignal::new(state);
        view! { <ServingControls state=state labels=labels /> }
    })
    .forget();
    Ok(())
}

fn mount_ingredient_selector(
    config: &UiConfig,
    params: &SearchParams,
) -> Result<(), RecipeUiError> {
    let Some(mount) = dom::mount_point(&config.selector_mount_id) else {
        info!(
            "No #{} on this page, skipping ingredient selector",
            config.selector_mount_id
        );
        return Ok(());
    };

    let list = dom::element_by_id(&config.ingredient_list_id)
        .ok_or_else(|| RecipeUiError::MissingElement(config.ingredient_list_id.clone()))?;
    let mut pool = IngredientPool::new(dom::option_names(&list));
    let replayed = pool.replay(&params.ingredients);
    info!(
        "Ingredient selector: {} options, {} replayed from URL",
        pool.len(),
        replayed
    );

    let field_name = config.form_field_name.clone();
    let suggestion_limit = config.suggestion_limit;
    mount_to(mount, move || {
        let pool = RwSignal::new(pool);
        view! {
            <IngredientSelector
                pool=pool
                field_name=field_name
                suggestion_limit=suggestion_limit
            />
        }
    })
    .forget();
    Ok(())
}

fn mount_search_options(config: &UiConfig, params: &SearchParams) {
    let Some(mount) = dom::mount_point(&config.search_options_mount_id) else {
        info!(
            "No #{} on this page, skipping search options",
            config.search_options_mount_id
        );
        return;
    };

    let mode = params.mode();
    let ubiquitous_checked = params.ubiquitous_checked();
    let initial_sort = params.sort_by;
    let gate_best_match = config.gate_best_match;
    mount_to(mount, move || {
        let toggle = RwSignal::new(VisibilityToggle::new(mode, gate_best_match));
        view! {
            <SearchOptions
                toggle=toggle
                ubiquitous_checked=ubiquitous_checked
                initial_sort=initial_sort
            />
        }
    })
    .forget();
}
